//! Environment, string and iteration helpers.

use std::env;

use crate::error::RuntimeError;
use crate::value::{Sequence, Value};

/// env(name) → String, "" when unset
pub fn env_var(name: &Value) -> Result<Value, RuntimeError> {
    let Value::String(name) = name else {
        return Err(RuntimeError::unsupported("env", 1, name));
    };
    Ok(Value::string(env::var(name.as_str()).unwrap_or_default()))
}

/// strcat(v...) → String
pub fn strcat(args: &[Value]) -> Value {
    Value::string(args.iter().map(Value::to_string).collect::<String>())
}

/// addbyte(string, n) → String
/// Appends the low byte of `n`, read as a Latin-1 code point so the result
/// stays valid UTF-8.
pub fn add_byte(s: &Value, byte: &Value) -> Result<Value, RuntimeError> {
    let Value::String(s) = s else {
        return Err(RuntimeError::unsupported("addbyte", 1, s));
    };
    let byte = match byte {
        Value::Integer(n) => *n as u8,
        Value::Unsigned(n) => *n as u8,
        _ => return Err(RuntimeError::unsupported("addbyte", 2, byte)),
    };

    let mut result = String::with_capacity(s.len() + 2);
    result.push_str(s);
    result.push(char::from(byte));
    Ok(Value::string(result))
}

/// loop(from, to) → Sequence over [from, to)
pub fn loop_range(from: &Value, to: &Value) -> Result<Value, RuntimeError> {
    let from = bound(from, 1)?;
    let to = bound(to, 2)?;
    Ok(Value::Sequence(Sequence::range(from, to)))
}

fn bound(value: &Value, position: usize) -> Result<i64, RuntimeError> {
    match value {
        Value::Integer(n) => Ok(*n),
        Value::Unsigned(n) => Ok(*n as i64),
        _ => Err(RuntimeError::unsupported("loop", position, value)),
    }
}
