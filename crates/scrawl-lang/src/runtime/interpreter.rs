//! Tree-walking evaluator. Walks the statement list in source order,
//! resolving constants and builtins through the registry and threading
//! one canvas through every call. There is no interpreter-global state:
//! each run owns its context and returns the canvas whole, so a failed
//! run never leaks a half-painted grid.

use crate::builtins::BuiltinRegistry;
use crate::error::RuntimeError;
use crate::runtime::canvas::Canvas;
use crate::runtime::value::Value;
use crate::syntax::ast::{Call, Expr, Program};

pub struct Interpreter<'a> {
    program: &'a Program,
    registry: &'a BuiltinRegistry,
    canvas: Canvas,
}

impl<'a> Interpreter<'a> {
    pub fn new(program: &'a Program, registry: &'a BuiltinRegistry) -> Self {
        Self { program, registry, canvas: Canvas::new() }
    }

    pub fn run(mut self) -> Result<Canvas, RuntimeError> {
        for call in &self.program.statements {
            self.exec_call(call)?;
        }
        Ok(self.canvas)
    }

    /// Arguments evaluate left to right before the function is resolved;
    /// the return value of a statement-position call is discarded by `run`.
    fn exec_call(&mut self, call: &Call) -> Result<Option<Value>, RuntimeError> {
        let mut args = Vec::with_capacity(call.args.len());
        for arg in &call.args {
            args.push(self.eval_expr(arg)?);
        }

        let Some(f) = self.registry.get(&call.name) else {
            return Err(RuntimeError::UndeclaredFunction {
                name: call.name.clone(),
                line: call.span.line,
            });
        };

        f(&mut self.canvas, &args, call.span.line)
    }

    fn eval_expr(&self, expr: &Expr) -> Result<Value, RuntimeError> {
        match expr {
            Expr::Int(v, _) => Ok(Value::Int(*v)),
            Expr::Str(s, _) => Ok(Value::Str(s.clone())),
            Expr::Point(x, y, _) => Ok(Value::Point(*x, *y)),
            Expr::Ident(name, span) => {
                self.registry.constant(name).ok_or_else(|| RuntimeError::UndeclaredSymbol {
                    name: name.clone(),
                    line: span.line,
                })
            }
        }
    }
}
