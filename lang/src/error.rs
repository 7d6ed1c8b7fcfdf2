use thiserror::Error;

use crate::value::Value;

/// Recoverable failure of a builtin.
///
/// The host surfaces these as a failed template evaluation and may decide to
/// carry on with the next expansion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("{op}: unsupported type for argument {position}: {value} ({kind})")]
    UnsupportedOperandType {
        op: &'static str,
        /// 1-based argument position
        position: usize,
        kind: &'static str,
        value: String,
    },

    #[error("{op}: division by zero")]
    DivideByZero { op: &'static str },

    #[error("{op}: {message}")]
    MalformedArguments { op: &'static str, message: String },

    #[error("unknown function {0:?}")]
    UnknownFunction(String),
}

impl RuntimeError {
    pub fn unsupported(op: &'static str, position: usize, value: &Value) -> Self {
        RuntimeError::UnsupportedOperandType {
            op,
            position,
            kind: value.type_name(),
            value: value.describe(),
        }
    }

    pub fn malformed(op: &'static str, message: impl Into<String>) -> Self {
        RuntimeError::MalformedArguments {
            op,
            message: message.into(),
        }
    }
}

/// Caller-requested end of the whole template run, raised by `die` and by a
/// failed `assert`. By the time a host sees it the message has already been
/// written to either the log or the error console.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Abort {
    pub message: String,
}

/// Everything a builtin call can end with other than a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Interrupt {
    #[error(transparent)]
    Error(#[from] RuntimeError),

    #[error(transparent)]
    Abort(#[from] Abort),
}

impl Interrupt {
    /// Hosts check this after every call: an abort must stop the run.
    pub fn is_abort(&self) -> bool {
        matches!(self, Interrupt::Abort(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_operand_display() {
        let err = RuntimeError::unsupported("add", 2, &Value::string("x"));

        let display = err.to_string();
        assert_eq!(display, r#"add: unsupported type for argument 2: "x" (string)"#);
    }

    #[test]
    fn divide_by_zero_display() {
        let err = RuntimeError::DivideByZero { op: "div" };
        assert_eq!(err.to_string(), "div: division by zero");
    }

    #[test]
    fn malformed_arguments_display() {
        let err = RuntimeError::malformed("map", "odd number of arguments (3)");
        assert_eq!(err.to_string(), "map: odd number of arguments (3)");
    }

    #[test]
    fn interrupt_is_transparent() {
        let err: Interrupt = RuntimeError::DivideByZero { op: "div" }.into();
        assert!(!err.is_abort());
        assert_eq!(err.to_string(), "div: division by zero");

        let abort: Interrupt = Abort {
            message: "boom".to_string(),
        }
        .into();
        assert!(abort.is_abort());
        assert_eq!(abort.to_string(), "boom");
    }
}
