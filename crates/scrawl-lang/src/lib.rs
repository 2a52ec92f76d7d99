pub mod builtins;
pub mod error;
pub mod runtime;
pub mod syntax;

pub use builtins::BuiltinRegistry;
pub use error::{Error, ErrorCode, RuntimeError, ScrawlError};
pub use runtime::canvas::Canvas;
pub use runtime::value::{ColorTag, CurveKind, Value};
pub use syntax::ast::Program;
pub use syntax::token::{Token, TokenKind};

// ─── Public API ───────────────────────────────────────────────────────────────

/// Lex and parse source text into a program ready for execution.
/// Both phases are all-or-nothing: the first error aborts the run.
pub fn compile(source: &str) -> Result<Program, Error> {
    let tokens = syntax::lexer::Lexer::new(source).tokenize()?;
    syntax::parser::Parser::new(tokens).parse()
}

/// Evaluate a compiled program against a fresh canvas. Repeated calls
/// with the same program produce identical canvases.
pub fn execute(program: &Program) -> Result<Canvas, RuntimeError> {
    let registry = BuiltinRegistry::standard();
    runtime::interpreter::Interpreter::new(program, &registry).run()
}

/// One-shot pipeline: source text in, finished canvas out. The error
/// names the stage that rejected the program; no partial canvas is ever
/// handed back.
pub fn run(source: &str) -> Result<Canvas, ScrawlError> {
    let program = compile(source)?;
    Ok(execute(&program)?)
}
