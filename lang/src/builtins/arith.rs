//! Numeric coercion: `add`, `sub`, `mul` and `div` over any mix of signed,
//! unsigned and floating point operands.
//!
//! Promotion does not depend on operand order:
//! - int ⊕ int → int (unsigned operands are reinterpreted as `i64`, wrapping)
//! - int ⊕ float, float ⊕ int → float
//! - float ⊕ float → float

use crate::error::RuntimeError;
use crate::value::Value;

/// A numeric operand after unsigned values have been folded into `i64`.
#[derive(Debug, Clone, Copy)]
enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    fn from_value(op: &'static str, position: usize, value: &Value) -> Result<Self, RuntimeError> {
        match value {
            Value::Integer(n) => Ok(Number::Int(*n)),
            Value::Unsigned(n) => Ok(Number::Int(*n as i64)),
            Value::Float(f) => Ok(Number::Float(f.0)),
            _ => Err(RuntimeError::unsupported(op, position, value)),
        }
    }

    fn widen(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(f) => f,
        }
    }
}

fn operands(op: &'static str, a: &Value, b: &Value) -> Result<(Number, Number), RuntimeError> {
    Ok((Number::from_value(op, 1, a)?, Number::from_value(op, 2, b)?))
}

fn apply(
    op: &'static str,
    a: &Value,
    b: &Value,
    int_op: fn(i64, i64) -> i64,
    float_op: fn(f64, f64) -> f64,
) -> Result<Value, RuntimeError> {
    let result = match operands(op, a, b)? {
        (Number::Int(x), Number::Int(y)) => Value::Integer(int_op(x, y)),
        (x, y) => Value::float(float_op(x.widen(), y.widen())),
    };
    Ok(result)
}

/// add(a, b)
pub fn add(a: &Value, b: &Value) -> Result<Value, RuntimeError> {
    apply("add", a, b, i64::wrapping_add, |x, y| x + y)
}

/// sub(a, b)
pub fn sub(a: &Value, b: &Value) -> Result<Value, RuntimeError> {
    apply("sub", a, b, i64::wrapping_sub, |x, y| x - y)
}

/// mul(a, b)
pub fn mul(a: &Value, b: &Value) -> Result<Value, RuntimeError> {
    apply("mul", a, b, i64::wrapping_mul, |x, y| x * y)
}

/// div(a, b)
///
/// Truncating division when both operands are integers, in which case a zero
/// divisor is an error. Float division follows IEEE 754 and never fails.
pub fn div(a: &Value, b: &Value) -> Result<Value, RuntimeError> {
    let result = match operands("div", a, b)? {
        (Number::Int(_), Number::Int(0)) => return Err(RuntimeError::DivideByZero { op: "div" }),
        (Number::Int(x), Number::Int(y)) => Value::Integer(x.wrapping_div(y)),
        (x, y) => Value::float(x.widen() / y.widen()),
    };
    Ok(result)
}
