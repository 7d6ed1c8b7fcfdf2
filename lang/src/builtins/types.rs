//! Type introspection: `type` and the `is*` predicates.

use crate::error::RuntimeError;
use crate::value::{Kind, Value, classify};

/// type(v) → "int" | "float" | "list" | "map"
pub fn type_of(value: &Value) -> Result<Value, RuntimeError> {
    classify("type", value).map(|kind| Value::string(kind.name()))
}

pub fn is_int(value: &Value) -> Value {
    Value::Boolean(Kind::of(value) == Kind::Integer)
}

pub fn is_float(value: &Value) -> Value {
    Value::Boolean(Kind::of(value) == Kind::Float)
}

pub fn is_number(value: &Value) -> Value {
    Value::Boolean(Kind::of(value).is_number())
}

pub fn is_list(value: &Value) -> Value {
    Value::Boolean(Kind::of(value) == Kind::List)
}

pub fn is_map(value: &Value) -> Value {
    Value::Boolean(Kind::of(value) == Kind::Map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::MapRef;
    use im_rc::Vector;

    #[test]
    fn type_names() {
        for (value, want) in [
            (Value::Integer(12), "int"),
            (Value::Unsigned(12), "int"),
            (Value::float(3.14), "float"),
            (Value::list([Value::string("a"), Value::string("b")]), "list"),
            (Value::Map(MapRef::new()), "map"),
        ] {
            assert_eq!(type_of(&value), Ok(Value::string(want)), "type({value})");
        }
    }

    #[test]
    fn type_of_unknown_fails() {
        let err = type_of(&Value::string("hello")).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"type: unsupported type for argument 1: "hello" (string)"#
        );
    }

    #[test]
    fn predicates_never_fail() {
        let string = Value::string("12");
        assert_eq!(is_int(&Value::Integer(12)), Value::Boolean(true));
        assert_eq!(is_int(&string), Value::Boolean(false));
        assert_eq!(is_float(&Value::float(2.71)), Value::Boolean(true));
        assert_eq!(is_float(&Value::Integer(2)), Value::Boolean(false));
        assert_eq!(is_number(&Value::Integer(12)), Value::Boolean(true));
        assert_eq!(is_number(&Value::float(2.71)), Value::Boolean(true));
        assert_eq!(is_number(&string), Value::Boolean(false));
        assert_eq!(is_list(&Value::List(Vector::new())), Value::Boolean(true));
        assert_eq!(is_list(&string), Value::Boolean(false));
        assert_eq!(is_map(&Value::Map(MapRef::new())), Value::Boolean(true));
        assert_eq!(is_map(&Value::List(Vector::new())), Value::Boolean(false));
    }
}
