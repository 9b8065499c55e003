//! Validation context and rules for manifest values.

use miette::SourceSpan;
use tandem_core::validate_identifier;

use crate::{Result, error::SourceContext};

/// Validation context that carries source information.
///
/// Values in tandem.toml are plain strings, so spans are recovered by
/// searching for the quoted value in the source text.
#[derive(Debug, Clone)]
pub(crate) struct ParseContext {
    source: SourceContext,
}

impl ParseContext {
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: SourceContext::new(src, filename),
        }
    }

    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Span of the `nth` (0-based) quoted occurrence of `value`, excluding quotes.
    pub fn value_span(&self, value: &str, nth: usize) -> Option<SourceSpan> {
        let quoted = format!("\"{}\"", value);
        self.source
            .src()
            .match_indices(&quoted)
            .nth(nth)
            .map(|(pos, _)| SourceSpan::from((pos + 1, value.len())))
    }

    /// Marker paths are dot-separated identifiers.
    pub fn validate_marker(&self, marker: &str) -> Result<()> {
        for segment in marker.split('.') {
            if let Some(reason) = validate_identifier(segment) {
                let reason = if segment.is_empty() {
                    "marker paths cannot contain empty segments"
                } else {
                    reason
                };
                return Err(self.source.invalid_identifier_error(
                    marker,
                    "marker",
                    reason,
                    self.value_span(marker, 0),
                ));
            }
        }
        Ok(())
    }

    /// Suffixes are appended to identifiers, so they may start with a digit.
    pub fn validate_suffix(&self, suffix: &str) -> Result<()> {
        let reason = if suffix.is_empty() {
            Some("suffix cannot be empty")
        } else if !suffix.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            Some("suffix can only contain letters, numbers, and underscores")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(self.source.invalid_identifier_error(
                suffix,
                "suffix",
                reason,
                self.value_span(suffix, 0),
            )),
            None => Ok(()),
        }
    }

    pub fn validate_property(&self, property: &str) -> Result<()> {
        match validate_identifier(property) {
            Some(reason) => Err(self.source.invalid_identifier_error(
                property,
                "property",
                reason,
                self.value_span(property, 0),
            )),
            None => Ok(()),
        }
    }
}
