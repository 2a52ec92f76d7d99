//! Built-in functions and named constants. The registry is the closed
//! dispatch surface between the evaluator and the canvas: a builtin is a
//! named operation taking the canvas and an argument list, returning an
//! optional value. Every builtin validates its own argument count and
//! variant shapes before touching the canvas.

use crate::error::RuntimeError;
use crate::runtime::canvas::Canvas;
use crate::runtime::value::{value_type_name, ColorTag, CurveKind, Value};

pub type BuiltinFn = fn(&mut Canvas, &[Value], usize) -> Result<Option<Value>, RuntimeError>;

// ─── Registry ─────────────────────────────────────────────────────────────────

pub struct BuiltinRegistry {
    entries: Vec<(&'static str, BuiltinFn)>,
}

impl BuiltinRegistry {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn register(&mut self, name: &'static str, f: BuiltinFn) {
        self.entries.push((name, f));
    }

    pub fn get(&self, name: &str) -> Option<BuiltinFn> {
        self.entries.iter().find(|(n, _)| *n == name).map(|(_, f)| *f)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(n, _)| *n)
    }

    /// Named constants available to scripts. Fixed for the process
    /// lifetime; scripts cannot define their own.
    pub fn constant(&self, name: &str) -> Option<Value> {
        match name {
            // Colors
            "BLACK" => Some(Value::Color(ColorTag::Black)),
            "WHITE" => Some(Value::Color(ColorTag::White)),
            "RED" => Some(Value::Color(ColorTag::Red)),
            "GREEN" => Some(Value::Color(ColorTag::Green)),

            // Curves
            "LINEAR" => Some(Value::Curve(CurveKind::Linear)),
            "EXPONENTIAL" => Some(Value::Curve(CurveKind::Exponential)),

            _ => None,
        }
    }

    pub fn standard() -> Self {
        let mut r = Self::new();
        r.register("set_size", set_size);
        r.register("set_background", set_background);
        r.register("set_color", set_color);
        r.register("plot", plot);
        r
    }
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

// ─── Argument helpers ─────────────────────────────────────────────────────────

fn check_argc(
    builtin: &'static str,
    args: &[Value],
    n: usize,
    line: usize,
) -> Result<(), RuntimeError> {
    if args.len() != n {
        Err(RuntimeError::ArityMismatch { builtin, expected: n, found: args.len(), line })
    } else {
        Ok(())
    }
}

fn mismatch(
    builtin: &'static str,
    index: usize,
    expected: &'static str,
    found: &Value,
    line: usize,
) -> RuntimeError {
    RuntimeError::ArgumentType { builtin, index, expected, found: value_type_name(found), line }
}

fn as_int(builtin: &'static str, args: &[Value], index: usize, line: usize) -> Result<i64, RuntimeError> {
    match &args[index] {
        Value::Int(v) => Ok(*v),
        other => Err(mismatch(builtin, index, "int", other, line)),
    }
}

fn as_point(builtin: &'static str, args: &[Value], index: usize, line: usize) -> Result<(i64, i64), RuntimeError> {
    match &args[index] {
        Value::Point(x, y) => Ok((*x, *y)),
        other => Err(mismatch(builtin, index, "point", other, line)),
    }
}

fn as_color(builtin: &'static str, args: &[Value], index: usize, line: usize) -> Result<ColorTag, RuntimeError> {
    match &args[index] {
        Value::Color(c) => Ok(*c),
        other => Err(mismatch(builtin, index, "color", other, line)),
    }
}

fn as_curve(builtin: &'static str, args: &[Value], index: usize, line: usize) -> Result<CurveKind, RuntimeError> {
    match &args[index] {
        Value::Curve(k) => Ok(*k),
        other => Err(mismatch(builtin, index, "curve", other, line)),
    }
}

/// The drawing character of a string argument: its first char.
fn as_draw_char(builtin: &'static str, args: &[Value], index: usize, line: usize) -> Result<char, RuntimeError> {
    match &args[index] {
        Value::Str(s) => s.chars().next()
            .ok_or_else(|| mismatch(builtin, index, "non-empty string", &args[index], line)),
        other => Err(mismatch(builtin, index, "string", other, line)),
    }
}

// ─── Operations ───────────────────────────────────────────────────────────────

/// `set_size(width, height)` — reallocate the canvas, filled with the
/// current background character.
fn set_size(canvas: &mut Canvas, args: &[Value], line: usize) -> Result<Option<Value>, RuntimeError> {
    check_argc("set_size", args, 2, line)?;
    let width = as_int("set_size", args, 0, line)?;
    let height = as_int("set_size", args, 1, line)?;
    canvas.resize(width, height);
    Ok(None)
}

/// `set_background("#", BLACK)` — fill character and fill color used by
/// `set_size` and by the renderer for untouched cells.
fn set_background(canvas: &mut Canvas, args: &[Value], line: usize) -> Result<Option<Value>, RuntimeError> {
    check_argc("set_background", args, 2, line)?;
    let ch = as_draw_char("set_background", args, 0, line)?;
    let color = as_color("set_background", args, 1, line)?;
    canvas.set_background(ch, color);
    Ok(None)
}

/// `set_color(RED)` — draw color for subsequent `plot` calls.
fn set_color(canvas: &mut Canvas, args: &[Value], line: usize) -> Result<Option<Value>, RuntimeError> {
    check_argc("set_color", args, 1, line)?;
    let color = as_color("set_color", args, 0, line)?;
    canvas.set_draw_color(color);
    Ok(None)
}

/// `plot("c", (0, 0), (10, 10), LINEAR)` — rasterize a path between two
/// points with the selected curve algorithm.
fn plot(canvas: &mut Canvas, args: &[Value], line: usize) -> Result<Option<Value>, RuntimeError> {
    check_argc("plot", args, 4, line)?;
    let ch = as_draw_char("plot", args, 0, line)?;
    let start = as_point("plot", args, 1, line)?;
    let end = as_point("plot", args, 2, line)?;
    let curve = as_curve("plot", args, 3, line)?;
    canvas.plot(ch, start, end, curve);
    Ok(None)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
