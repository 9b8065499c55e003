//! Recursive-descent parser for the declaration language.
//!
//! ```text
//! file      := item* EOF
//! item      := "use" path ";" | "namespace" path ";" | type_decl
//! type_decl := ("@" path)* "type" IDENT "{" const* "}"
//! const     := "const" IDENT ":" "int" "=" INT ";"
//! path      := IDENT ("." IDENT)*
//! ```
//!
//! The parser stops at the first error.

use crate::{
    Lexer, Result, SourceContext, Token, TokenKind,
    ast::{ConstItem, Ident, Path, SourceFile, TypeDecl},
};

pub struct Parser<'a> {
    ctx: &'a SourceContext,
    lexer: Lexer<'a>,
    current: Option<Token>,
}

impl<'a> Parser<'a> {
    pub fn new(ctx: &'a SourceContext) -> Self {
        Self {
            ctx,
            lexer: Lexer::new(ctx),
            current: None,
        }
    }

    pub fn parse_file(&mut self) -> Result<SourceFile> {
        let mut file = SourceFile::new();

        loop {
            let token = self.peek()?.clone();
            match token.kind {
                TokenKind::Eof => return Ok(file),
                TokenKind::Use => {
                    self.bump()?;
                    let path = self.parse_path()?;
                    self.expect(TokenKind::Semi, "';'")?;
                    file.imports.push(path);
                }
                TokenKind::Namespace => {
                    self.bump()?;
                    let path = self.parse_path()?;
                    self.expect(TokenKind::Semi, "';'")?;
                    if let Some(first) = &file.namespace {
                        return Err(self.ctx.duplicate_namespace(first.span, path.span));
                    }
                    file.namespace = Some(path);
                }
                TokenKind::At | TokenKind::Type => file.types.push(self.parse_type_decl()?),
                _ => {
                    return Err(self.ctx.unexpected_token(
                        "'use', 'namespace', '@', or 'type'",
                        token.kind.describe(),
                        token.span,
                    ));
                }
            }
        }
    }

    fn parse_type_decl(&mut self) -> Result<TypeDecl> {
        let start = self.peek()?.span;
        let mut markers = Vec::new();
        while self.peek()?.kind == TokenKind::At {
            let at = self.bump()?;
            let mut path = self.parse_path()?;
            path.span = at.span.to(path.span);
            markers.push(path);
        }

        self.expect(TokenKind::Type, "'type'")?;
        let name = self.parse_ident()?;
        self.expect(TokenKind::LBrace, "'{'")?;

        let mut consts = Vec::new();
        while self.peek()?.kind == TokenKind::Const {
            consts.push(self.parse_const()?);
        }
        let close = self.expect(TokenKind::RBrace, "'const' or '}'")?;

        Ok(TypeDecl {
            markers,
            name,
            consts,
            span: start.to(close.span),
        })
    }

    fn parse_const(&mut self) -> Result<ConstItem> {
        let start = self.expect(TokenKind::Const, "'const'")?.span;
        let name = self.parse_ident()?;
        self.expect(TokenKind::Colon, "':'")?;
        self.expect(TokenKind::IntType, "'int'")?;
        self.expect(TokenKind::Eq, "'='")?;

        let token = self.bump()?;
        let TokenKind::Int(value) = token.kind else {
            return Err(self.ctx.unexpected_token(
                "integer",
                token.kind.describe(),
                token.span,
            ));
        };
        let end = self.expect(TokenKind::Semi, "';'")?.span;

        Ok(ConstItem {
            name,
            value,
            span: start.to(end),
        })
    }

    fn parse_path(&mut self) -> Result<Path> {
        let first = self.parse_ident()?;
        let mut span = first.span;
        let mut segments = vec![first];
        while self.peek()?.kind == TokenKind::Dot {
            self.bump()?;
            let segment = self.parse_ident()?;
            span = span.to(segment.span);
            segments.push(segment);
        }
        Ok(Path { segments, span })
    }

    fn parse_ident(&mut self) -> Result<Ident> {
        let token = self.bump()?;
        match token.kind {
            TokenKind::Ident(text) => Ok(Ident {
                text,
                span: token.span,
            }),
            other => Err(self
                .ctx
                .unexpected_token("identifier", other.describe(), token.span)),
        }
    }

    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<Token> {
        let token = self.bump()?;
        if token.kind == kind {
            Ok(token)
        } else {
            Err(self
                .ctx
                .unexpected_token(expected, token.kind.describe(), token.span))
        }
    }

    fn peek(&mut self) -> Result<&Token> {
        let token = match self.current.take() {
            Some(token) => token,
            None => self.lexer.next_token()?,
        };
        Ok(self.current.insert(token))
    }

    fn bump(&mut self) -> Result<Token> {
        match self.current.take() {
            Some(token) => Ok(token),
            None => self.lexer.next_token(),
        }
    }
}
