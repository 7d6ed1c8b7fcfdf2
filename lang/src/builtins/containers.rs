//! List and map construction, lookup and mutation, plus the polymorphic
//! `contains`.

use im_rc::Vector;

use crate::error::RuntimeError;
use crate::value::{MapRef, Value};

fn expect_list<'a>(op: &'static str, value: &'a Value) -> Result<&'a Vector<Value>, RuntimeError> {
    match value {
        Value::List(list) => Ok(list),
        _ => Err(RuntimeError::unsupported(op, 1, value)),
    }
}

fn expect_map<'a>(op: &'static str, value: &'a Value) -> Result<&'a MapRef, RuntimeError> {
    match value {
        Value::Map(map) => Ok(map),
        _ => Err(RuntimeError::unsupported(op, 1, value)),
    }
}

/// list(v...) → List
pub fn list(args: &[Value]) -> Value {
    Value::list(args.iter().cloned())
}

/// map(k1, v1, k2, v2, ...) → Map
/// Later duplicate keys overwrite earlier ones. An unpaired trailing key is
/// rejected rather than dropped.
pub fn map(args: &[Value]) -> Result<Value, RuntimeError> {
    if args.len() % 2 != 0 {
        return Err(RuntimeError::malformed(
            "map",
            format!("odd number of arguments ({}), keys and values must pair up", args.len()),
        ));
    }
    let map: MapRef = args
        .chunks_exact(2)
        .map(|pair| (pair[0].clone(), pair[1].clone()))
        .collect();
    Ok(Value::Map(map))
}

/// haselement(list, v) → Boolean
pub fn has_element(list: &Value, element: &Value) -> Result<Value, RuntimeError> {
    let list = expect_list("haselement", list)?;
    Ok(Value::Boolean(list.contains(element)))
}

/// indexof(list, v) → Integer, -1 when absent
pub fn index_of(list: &Value, element: &Value) -> Result<Value, RuntimeError> {
    let list = expect_list("indexof", list)?;
    let index = list
        .iter()
        .position(|e| e == element)
        .map_or(-1, |i| i as i64);
    Ok(Value::Integer(index))
}

/// addelements(list, v...) → List
/// The argument list is left untouched; the result shares its storage.
pub fn add_elements(list: &Value, elements: &[Value]) -> Result<Value, RuntimeError> {
    let mut result = expect_list("addelements", list)?.clone();
    result.extend(elements.iter().cloned());
    Ok(Value::List(result))
}

/// haskey(map, k) → Boolean
pub fn has_key(map: &Value, key: &Value) -> Result<Value, RuntimeError> {
    let map = expect_map("haskey", map)?;
    Ok(Value::Boolean(map.contains_key(key)))
}

/// getval(map, k) → value, or "" when the key is absent
pub fn get_val(map: &Value, key: &Value) -> Result<Value, RuntimeError> {
    let map = expect_map("getval", map)?;
    Ok(map.get(key).unwrap_or_else(Value::empty))
}

/// setkeyval(map, k, v) → ""
/// Mutates the shared map in place.
pub fn set_key_val(map: &Value, key: &Value, value: &Value) -> Result<Value, RuntimeError> {
    let map = expect_map("setkeyval", map)?;
    map.insert(key.clone(), value.clone());
    Ok(Value::empty())
}

/// contains(haystack, needle) → Boolean
/// Key membership for maps, element membership for lists, substring
/// membership (of the needle's rendered form) for strings.
pub fn contains(haystack: &Value, needle: &Value) -> Result<Value, RuntimeError> {
    let found = match haystack {
        Value::Map(map) => map.contains_key(needle),
        Value::List(list) => list.contains(needle),
        Value::String(s) => match needle {
            Value::String(n) => s.contains(n.as_str()),
            other => s.contains(&other.to_string()),
        },
        _ => return Err(RuntimeError::unsupported("contains", 1, haystack)),
    };
    Ok(Value::Boolean(found))
}
