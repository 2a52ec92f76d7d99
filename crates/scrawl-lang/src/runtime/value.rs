/// Display-color tag. The core never interprets it; the renderer decides
/// what each tag looks like on the target terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTag {
    Black,
    White,
    Red,
    Green,
}

/// Selects the rasterization algorithm used by `plot`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveKind {
    Linear,
    Exponential,
}

/// Runtime value produced by evaluating a literal, a constant, or a call.
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Str(String),
    Point(i64, i64),
    Color(ColorTag),
    Curve(CurveKind),
}

/// Type name used in argument-mismatch diagnostics.
pub fn value_type_name(v: &Value) -> &'static str {
    match v {
        Value::Int(_) => "int",
        Value::Str(_) => "string",
        Value::Point(..) => "point",
        Value::Color(_) => "color",
        Value::Curve(_) => "curve",
    }
}
