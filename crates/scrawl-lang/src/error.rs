use thiserror::Error;

/// Error codes prefixed by phase: L = lexer, P = parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Lexer
    L001, // unexpected character
    L002, // unterminated string literal
    L003, // integer literal out of range

    // Parser
    P001, // unexpected token
    P002, // missing expected token
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::L001 => "L001",
            Self::L002 => "L002",
            Self::L003 => "L003",
            Self::P001 => "P001",
            Self::P002 => "P002",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lexing or parsing failure. The first error aborts the whole run;
/// there is no recovery and no partial token stream or AST.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("[{code}] {line}:{column} — {message}")]
pub struct Error {
    pub code: ErrorCode,
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl Error {
    pub fn new(code: ErrorCode, line: usize, column: usize, message: impl Into<String>) -> Self {
        Self { code, line, column, message: message.into() }
    }
}

// ─────────────────────────────────────────────────────────────────────────────

/// An evaluation failure. Every variant names the builtin or identifier
/// involved so the shell can report it without inspecting the canvas.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    #[error("[runtime] {line} — use of undeclared function `{name}`")]
    UndeclaredFunction { name: String, line: usize },

    #[error("[runtime] {line} — use of undeclared symbol `{name}`")]
    UndeclaredSymbol { name: String, line: usize },

    #[error("[runtime] {line} — `{builtin}` expects {expected} args, got {found}")]
    ArityMismatch {
        builtin: &'static str,
        expected: usize,
        found: usize,
        line: usize,
    },

    #[error("[runtime] {line} — `{builtin}` argument {index}: expected {expected}, got {found}")]
    ArgumentType {
        builtin: &'static str,
        index: usize,
        expected: &'static str,
        found: &'static str,
        line: usize,
    },
}

// ─────────────────────────────────────────────────────────────────────────────

/// Top-level error for `run`: either phase failure, preserving which
/// stage rejected the program.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScrawlError {
    #[error(transparent)]
    Compile(#[from] Error),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
