//! Source lexer for the declaration language.
//!
//! A pull-based lexer: the parser asks for one token at a time. Whitespace,
//! `//` line comments, and `/* */` block comments are skipped.

use crate::{Result, SourceContext, Span, Token, TokenKind};

pub struct Lexer<'a> {
    ctx: &'a SourceContext,
    source: &'a str,
    cursor: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(ctx: &'a SourceContext) -> Self {
        Self {
            ctx,
            source: ctx.src(),
            cursor: 0,
        }
    }

    /// Pull the next token. Returns `Eof` repeatedly once input is exhausted.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_trivia()?;

        let start = self.cursor;
        match self.peek_char() {
            None => Ok(Token::new(TokenKind::Eof, start, start)),
            Some(ch) if is_ident_start(ch) => Ok(self.lex_identifier_or_keyword()),
            Some(ch) if ch.is_ascii_digit() => self.lex_number(start),
            Some('-') if self.peek_next_char().is_some_and(|c| c.is_ascii_digit()) => {
                self.bump_char();
                self.lex_number(start)
            }
            Some(ch) => self.lex_symbol(ch),
        }
    }

    /// Lex the whole input, including the trailing `Eof`.
    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    fn skip_trivia(&mut self) -> Result<()> {
        loop {
            match (self.peek_char(), self.peek_next_char()) {
                (Some(ch), _) if ch.is_whitespace() => {
                    self.bump_char();
                }
                (Some('/'), Some('/')) => {
                    while let Some(ch) = self.bump_char() {
                        if ch == '\n' {
                            break;
                        }
                    }
                }
                (Some('/'), Some('*')) => {
                    let start = self.cursor;
                    self.bump_char();
                    self.bump_char();
                    self.skip_block_comment(start)?;
                }
                _ => return Ok(()),
            }
        }
    }

    fn skip_block_comment(&mut self, start: usize) -> Result<()> {
        while let Some(ch) = self.bump_char() {
            if ch == '*' && self.peek_char() == Some('/') {
                self.bump_char();
                return Ok(());
            }
        }
        Err(self
            .ctx
            .unterminated_comment(Span::new(start, (start + 2).min(self.source.len()))))
    }

    fn lex_identifier_or_keyword(&mut self) -> Token {
        let start = self.cursor;
        while self.peek_char().is_some_and(is_ident_continue) {
            self.bump_char();
        }
        let text = &self.source[start..self.cursor];
        let kind = TokenKind::keyword(text).unwrap_or_else(|| TokenKind::Ident(text.to_string()));
        Token::new(kind, start, self.cursor)
    }

    fn lex_number(&mut self, start: usize) -> Result<Token> {
        while self.peek_char().is_some_and(|c| c.is_ascii_digit() || c == '_') {
            self.bump_char();
        }
        let text: String = self.source[start..self.cursor]
            .chars()
            .filter(|&c| c != '_')
            .collect();
        let span = Span::new(start, self.cursor);
        let value = text
            .parse::<i64>()
            .map_err(|_| self.ctx.integer_overflow(span))?;
        Ok(Token::new(TokenKind::Int(value), start, self.cursor))
    }

    fn lex_symbol(&mut self, ch: char) -> Result<Token> {
        let start = self.cursor;
        let kind = match ch {
            '@' => TokenKind::At,
            '.' => TokenKind::Dot,
            ';' => TokenKind::Semi,
            ':' => TokenKind::Colon,
            '=' => TokenKind::Eq,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            other => {
                let span = Span::new(start, start + other.len_utf8());
                return Err(self.ctx.unexpected_char(other, span));
            }
        };
        self.bump_char();
        Ok(Token::new(kind, start, self.cursor))
    }

    fn peek_char(&self) -> Option<char> {
        self.source[self.cursor..].chars().next()
    }

    fn peek_next_char(&self) -> Option<char> {
        let mut chars = self.source[self.cursor..].chars();
        chars.next();
        chars.next()
    }

    fn bump_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.cursor += ch.len_utf8();
        Some(ch)
    }
}

fn is_ident_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_ident_continue(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn kinds(src: &str) -> Vec<TokenKind> {
        let ctx = SourceContext::new(src, "test.tdl");
        Lexer::new(&ctx)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_lex_type_declaration() {
        assert_eq!(
            kinds("@Gen.GenerateA type User {}"),
            vec![
                TokenKind::At,
                TokenKind::Ident("Gen".into()),
                TokenKind::Dot,
                TokenKind::Ident("GenerateA".into()),
                TokenKind::Type,
                TokenKind::Ident("User".into()),
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_lex_constant() {
        assert_eq!(
            kinds("const A: int = -1_000;"),
            vec![
                TokenKind::Const,
                TokenKind::Ident("A".into()),
                TokenKind::Colon,
                TokenKind::IntType,
                TokenKind::Eq,
                TokenKind::Int(-1000),
                TokenKind::Semi,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_skips_comments() {
        assert_eq!(
            kinds("// header\nuse /* inline */ Gen; // trailing"),
            vec![
                TokenKind::Use,
                TokenKind::Ident("Gen".into()),
                TokenKind::Semi,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_spans_are_byte_offsets() {
        let ctx = SourceContext::new("  type X", "test.tdl");
        let tokens = Lexer::new(&ctx).tokenize().unwrap();
        assert_eq!(tokens[0].span, Span::new(2, 6));
        assert_eq!(tokens[1].span, Span::new(7, 8));
    }

    #[test]
    fn test_unexpected_char() {
        let ctx = SourceContext::new("type X$ {}", "test.tdl");
        let err = Lexer::new(&ctx).tokenize().unwrap_err();
        assert!(matches!(*err, Error::UnexpectedChar { ch: '$', .. }));
    }

    #[test]
    fn test_unterminated_comment() {
        let ctx = SourceContext::new("type X {} /* never closed", "test.tdl");
        let err = Lexer::new(&ctx).tokenize().unwrap_err();
        assert!(matches!(*err, Error::UnterminatedComment { .. }));
    }

    #[test]
    fn test_integer_overflow() {
        let ctx = SourceContext::new("const A: int = 99999999999999999999;", "test.tdl");
        let err = Lexer::new(&ctx).tokenize().unwrap_err();
        assert!(matches!(*err, Error::IntegerOverflow { .. }));
    }

    #[test]
    fn test_minimum_integer() {
        assert_eq!(
            kinds("-9223372036854775808")[0],
            TokenKind::Int(i64::MIN)
        );
    }
}
