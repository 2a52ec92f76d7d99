use crate::error::{Error, ErrorCode};
use crate::syntax::token::{Token, TokenKind};

/// Single-pass, left-to-right tokenizer. The first invalid character
/// aborts the whole run; nothing is recovered or resumed.
pub struct Lexer<'a> {
    source: &'a [u8],
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source: source.as_bytes(), pos: 0, line: 1, column: 1 }
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, Error> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();

            if self.is_at_end() {
                tokens.push(Token::new(TokenKind::Eof, self.line, self.column));
                return Ok(tokens);
            }

            tokens.push(self.next_token()?);
        }
    }

    fn next_token(&mut self) -> Result<Token, Error> {
        let line = self.line;
        let col = self.column;
        let ch = self.advance();

        let kind = match ch {
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b',' => TokenKind::Comma,
            b';' => TokenKind::Semicolon,

            b'"' => TokenKind::Str(self.read_string(line, col)?),
            b'0'..=b'9' => TokenKind::Int(self.read_int(ch, line, col)?),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => TokenKind::Ident(self.read_ident(ch)),

            other => {
                return Err(Error::new(ErrorCode::L001, line, col,
                    format!("unexpected character `{}`", other as char)));
            }
        };

        Ok(Token::new(kind, line, col))
    }

    // ─── Primitives ──────────────────────────────────────────────────────────

    fn advance(&mut self) -> u8 {
        let ch = self.source[self.pos];
        self.pos += 1;
        if ch == b'\n' { self.line += 1; self.column = 1; }
        else { self.column += 1; }
        ch
    }

    fn peek(&self) -> u8 {
        if self.is_at_end() { 0 } else { self.source[self.pos] }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn skip_whitespace(&mut self) {
        while !self.is_at_end() {
            match self.peek() {
                b' ' | b'\t' | b'\r' | b'\n' => { self.advance(); }
                _ => break,
            }
        }
    }

    // ─── Readers ─────────────────────────────────────────────────────────────

    /// Everything up to the closing quote is taken verbatim; there are no
    /// escape sequences in this language.
    fn read_string(&mut self, start_line: usize, start_col: usize) -> Result<String, Error> {
        let mut s = String::new();
        loop {
            if self.is_at_end() {
                return Err(Error::new(ErrorCode::L002, start_line, start_col,
                    "unterminated string literal"));
            }
            let ch = self.advance();
            if ch == b'"' { break; }
            s.push(ch as char);
        }
        Ok(s)
    }

    fn read_int(&mut self, first: u8, line: usize, col: usize) -> Result<i64, Error> {
        let mut s = String::new();
        s.push(first as char);
        while !self.is_at_end() && self.peek().is_ascii_digit() {
            s.push(self.advance() as char);
        }
        s.parse().map_err(|_| {
            Error::new(ErrorCode::L003, line, col,
                format!("integer literal `{s}` out of range"))
        })
    }

    /// Identifiers are letters and underscores only; a digit ends the run.
    fn read_ident(&mut self, first: u8) -> String {
        let mut s = String::new();
        s.push(first as char);
        while !self.is_at_end() && (self.peek().is_ascii_alphabetic() || self.peek() == b'_') {
            s.push(self.advance() as char);
        }
        s
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(src: &str) -> Vec<TokenKind> {
        Lexer::new(src).tokenize().unwrap().into_iter().map(|t| t.kind).collect()
    }

    fn lex_err(src: &str) -> Error {
        Lexer::new(src).tokenize().unwrap_err()
    }

    #[test]
    fn empty() {
        assert_eq!(lex(""), vec![TokenKind::Eof]);
    }

    #[test]
    fn whitespace_only() {
        assert_eq!(lex("  \t\r\n "), vec![TokenKind::Eof]);
    }

    #[test]
    fn integer() {
        assert_eq!(lex("42"), vec![TokenKind::Int(42), TokenKind::Eof]);
    }

    #[test]
    fn integer_no_sign_no_decimal() {
        // `-` is not part of any token class
        let err = lex_err("-4");
        assert_eq!(err.code, ErrorCode::L001);
    }

    #[test]
    fn integer_out_of_range() {
        let err = lex_err("99999999999999999999");
        assert_eq!(err.code, ErrorCode::L003);
    }

    #[test]
    fn identifier_with_underscore() {
        assert_eq!(
            lex("set_size"),
            vec![TokenKind::Ident("set_size".into()), TokenKind::Eof]
        );
    }

    #[test]
    fn digit_ends_identifier() {
        // identifiers never contain digits, so `ab1` is two tokens
        assert_eq!(
            lex("ab1"),
            vec![TokenKind::Ident("ab".into()), TokenKind::Int(1), TokenKind::Eof]
        );
    }

    #[test]
    fn punctuation() {
        assert_eq!(
            lex("(),;"),
            vec![
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::Comma,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn string_literal() {
        assert_eq!(lex(r#""hello""#), vec![TokenKind::Str("hello".into()), TokenKind::Eof]);
    }

    #[test]
    fn string_keeps_contents_verbatim() {
        // no escapes: a backslash is just a character
        assert_eq!(
            lex(r#""a \ b""#),
            vec![TokenKind::Str("a \\ b".into()), TokenKind::Eof]
        );
    }

    #[test]
    fn empty_string() {
        assert_eq!(lex(r#""""#), vec![TokenKind::Str(String::new()), TokenKind::Eof]);
    }

    #[test]
    fn unterminated_string_error() {
        let err = lex_err(r#"plot("c"#);
        assert_eq!(err.code, ErrorCode::L002);
        assert_eq!((err.line, err.column), (1, 6));
    }

    #[test]
    fn unexpected_character_error() {
        let err = lex_err("set_size(4, 4) @");
        assert_eq!(err.code, ErrorCode::L001);
        assert!(err.message.contains('@'));
        assert_eq!((err.line, err.column), (1, 16));
    }

    #[test]
    fn hash_is_not_a_comment() {
        // `#` is only meaningful inside a string literal
        assert_eq!(lex(r##""#""##), vec![TokenKind::Str("#".into()), TokenKind::Eof]);
        assert_eq!(lex_err("#").code, ErrorCode::L001);
    }

    #[test]
    fn line_and_column_tracking() {
        let tokens = Lexer::new("a\n  b").tokenize().unwrap();
        assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
        assert_eq!((tokens[1].line, tokens[1].column), (2, 3));
    }

    #[test]
    fn token_kind_helpers() {
        assert!(TokenKind::Int(1).is_literal());
        assert!(TokenKind::Str("c".into()).is_literal());
        assert!(!TokenKind::Ident("plot".into()).is_literal());
        assert_eq!(TokenKind::LParen.describe(), "`(`");
        assert_eq!(TokenKind::Eof.describe(), "end of input");
    }

    #[test]
    fn full_statement() {
        assert_eq!(
            lex(r#"plot("c", (0, 0), (10, 10), LINEAR);"#),
            vec![
                TokenKind::Ident("plot".into()),
                TokenKind::LParen,
                TokenKind::Str("c".into()),
                TokenKind::Comma,
                TokenKind::LParen,
                TokenKind::Int(0),
                TokenKind::Comma,
                TokenKind::Int(0),
                TokenKind::RParen,
                TokenKind::Comma,
                TokenKind::LParen,
                TokenKind::Int(10),
                TokenKind::Comma,
                TokenKind::Int(10),
                TokenKind::RParen,
                TokenKind::Comma,
                TokenKind::Ident("LINEAR".into()),
                TokenKind::RParen,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }
}
