use std::fmt;

use super::Value;
use crate::error::RuntimeError;

/// Five-way classification of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Integer,
    Float,
    List,
    Map,
    Unknown,
}

impl Kind {
    /// Total: anything that is not a number, list or map is `Unknown`.
    pub fn of(value: &Value) -> Kind {
        match value {
            Value::Integer(_) | Value::Unsigned(_) => Kind::Integer,
            Value::Float(_) => Kind::Float,
            Value::List(_) => Kind::List,
            Value::Map(_) => Kind::Map,
            Value::Boolean(_) | Value::String(_) | Value::Sequence(_) => Kind::Unknown,
        }
    }

    /// Name as reported by the `type` builtin
    pub fn name(self) -> &'static str {
        match self {
            Kind::Integer => "int",
            Kind::Float => "float",
            Kind::List => "list",
            Kind::Map => "map",
            Kind::Unknown => "unknown",
        }
    }

    pub fn is_number(self) -> bool {
        matches!(self, Kind::Integer | Kind::Float)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Like [`Kind::of`], but an `Unknown` value is reported as an error so the
/// caller can tell "classified" from "fell through". `op` names the operation
/// in that error.
pub fn classify(op: &'static str, value: &Value) -> Result<Kind, RuntimeError> {
    match Kind::of(value) {
        Kind::Unknown => Err(RuntimeError::unsupported(op, 1, value)),
        kind => Ok(kind),
    }
}
