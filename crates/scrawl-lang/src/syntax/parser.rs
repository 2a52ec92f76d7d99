use crate::error::{Error, ErrorCode};
use crate::syntax::ast::*;
use crate::syntax::token::{Token, TokenKind};

/// Recursive-descent parser with one token of lookahead. Consumes the
/// whole token stream; the first violated expectation aborts the run
/// with no partial AST.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    pub fn parse(mut self) -> Result<Program, Error> {
        let mut statements = Vec::new();
        while !self.is_at_end() {
            statements.push(self.parse_statement()?);
        }
        Ok(Program { statements })
    }

    // ─── Statements ──────────────────────────────────────────────────────────

    fn parse_statement(&mut self) -> Result<Call, Error> {
        match self.peek_kind() {
            TokenKind::Ident(_) => {
                let call = self.parse_call()?;
                self.expect(TokenKind::Semicolon)?;
                Ok(call)
            }
            _ => {
                let tok = self.peek();
                Err(Error::new(
                    ErrorCode::P001,
                    tok.line,
                    tok.column,
                    format!("a statement must begin with a function name, found {}",
                        tok.kind.describe()),
                ))
            }
        }
    }

    fn parse_call(&mut self) -> Result<Call, Error> {
        let tok = self.advance();
        let span = Span::new(tok.line, tok.column);
        let name = match tok.kind {
            TokenKind::Ident(s) => s,
            other => {
                return Err(Error::new(
                    ErrorCode::P002,
                    tok.line,
                    tok.column,
                    format!("expected identifier, found {}", other.describe()),
                ));
            }
        };

        self.expect(TokenKind::LParen)?;
        let mut args = Vec::new();
        while !self.check(&TokenKind::RParen) && !self.is_at_end() {
            args.push(self.parse_expr()?);
            // comma is consumed only if present, so `f(a,)` and `f(a)` both parse
            if !self.matches(&TokenKind::Comma) { break; }
        }
        self.expect(TokenKind::RParen)?;
        Ok(Call { name, args, span })
    }

    // ─── Expressions ─────────────────────────────────────────────────────────

    fn parse_expr(&mut self) -> Result<Expr, Error> {
        let tok = self.peek().clone();
        let span = Span::new(tok.line, tok.column);

        match tok.kind {
            TokenKind::Int(v) => { self.advance(); Ok(Expr::Int(v, span)) }
            TokenKind::Str(s) => { self.advance(); Ok(Expr::Str(s, span)) }
            TokenKind::Ident(s) => { self.advance(); Ok(Expr::Ident(s, span)) }

            // `(x, y)` — the only compound expression form
            TokenKind::LParen => {
                self.advance();
                let x = self.expect_int()?;
                self.expect(TokenKind::Comma)?;
                let y = self.expect_int()?;
                self.expect(TokenKind::RParen)?;
                Ok(Expr::Point(x, y, span))
            }

            _ => Err(Error::new(
                ErrorCode::P001,
                tok.line,
                tok.column,
                format!("expected an expression, found {}", tok.kind.describe()),
            )),
        }
    }

    // ─── Token primitives ────────────────────────────────────────────────────

    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn peek_kind(&self) -> &TokenKind {
        &self.tokens[self.pos].kind
    }

    fn is_at_end(&self) -> bool {
        matches!(self.peek_kind(), TokenKind::Eof)
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() { self.pos += 1; }
        tok
    }

    fn check(&self, kind: &TokenKind) -> bool {
        self.peek_kind() == kind
    }

    fn matches(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) { self.advance(); true } else { false }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token, Error> {
        if self.check(&kind) {
            Ok(self.advance())
        } else {
            let tok = self.peek();
            Err(Error::new(
                ErrorCode::P002,
                tok.line,
                tok.column,
                format!("expected {}, found {}", kind.describe(), tok.kind.describe()),
            ))
        }
    }

    fn expect_int(&mut self) -> Result<i64, Error> {
        let tok = self.advance();
        match tok.kind {
            TokenKind::Int(v) => Ok(v),
            other => Err(Error::new(
                ErrorCode::P002,
                tok.line,
                tok.column,
                format!("expected integer, found {}", other.describe()),
            )),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::lexer::Lexer;

    fn parse(src: &str) -> Program {
        let tokens = Lexer::new(src).tokenize().expect("lex failed");
        Parser::new(tokens).parse().unwrap_or_else(|e| panic!("parse failed: {e}"))
    }

    fn parse_err(src: &str) -> Error {
        let tokens = Lexer::new(src).tokenize().expect("lex failed");
        Parser::new(tokens).parse().expect_err("expected a parse error")
    }

    #[test]
    fn empty_program() {
        assert!(parse("").statements.is_empty());
    }

    #[test]
    fn call_with_no_args() {
        let p = parse("reset();");
        assert_eq!(p.statements.len(), 1);
        assert_eq!(p.statements[0].name, "reset");
        assert!(p.statements[0].args.is_empty());
    }

    #[test]
    fn call_with_every_argument_kind() {
        let p = parse(r#"plot("c", (0, 0), (10, 10), LINEAR);"#);
        let call = &p.statements[0];
        assert_eq!(call.name, "plot");
        assert_eq!(call.args.len(), 4);
        assert!(matches!(call.args[0], Expr::Str(ref s, _) if s == "c"));
        assert!(matches!(call.args[1], Expr::Point(0, 0, _)));
        assert!(matches!(call.args[2], Expr::Point(10, 10, _)));
        assert!(matches!(call.args[3], Expr::Ident(ref s, _) if s == "LINEAR"));
    }

    #[test]
    fn trailing_comma_tolerated() {
        let p = parse("set_size(40, 40,);");
        assert_eq!(p.statements[0].args.len(), 2);
    }

    #[test]
    fn statements_keep_source_order() {
        let p = parse("set_size(4, 4); set_color(RED); plot(\"x\", (0, 0), (3, 3), LINEAR);");
        let names: Vec<_> = p.statements.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["set_size", "set_color", "plot"]);
    }

    #[test]
    fn statement_must_begin_with_identifier() {
        let err = parse_err("1;");
        assert_eq!(err.code, ErrorCode::P001);
        assert!(err.message.contains("integer"));
    }

    #[test]
    fn missing_semicolon() {
        let err = parse_err("set_size(4, 4)");
        assert_eq!(err.code, ErrorCode::P002);
        assert!(err.message.contains("`;`"));
    }

    #[test]
    fn missing_closing_paren() {
        let err = parse_err("set_size(4;");
        assert_eq!(err.code, ErrorCode::P002);
    }

    #[test]
    fn point_requires_integers() {
        let err = parse_err(r#"plot("c", ("a", 0), (1, 1), LINEAR);"#);
        assert_eq!(err.code, ErrorCode::P002);
        assert!(err.message.contains("integer"));
    }

    #[test]
    fn unexpected_end_of_input_mid_call() {
        let err = parse_err("set_size(4,");
        assert_eq!(err.code, ErrorCode::P002);
        assert!(err.message.contains("end of input"));
    }

    #[test]
    fn call_is_not_an_expression() {
        // no nesting: a call cannot appear in argument position
        let err = parse_err("plot(set_color(RED));");
        assert_eq!(err.code, ErrorCode::P002);
    }
}
