use super::*;
use crate::error::RuntimeError;
use std::collections::hash_map::DefaultHasher;

fn hash_value(v: &Value) -> u64 {
    let mut hasher = DefaultHasher::new();
    v.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn integer_equality() {
    assert_eq!(Value::Integer(42), Value::Integer(42));
    assert_ne!(Value::Integer(42), Value::Integer(43));
}

#[test]
fn different_variants_never_equal() {
    assert_ne!(Value::Integer(3), Value::float(3.0));
    assert_ne!(Value::Integer(2), Value::Unsigned(2));
    assert_ne!(Value::Integer(1), Value::Boolean(true));
    assert_ne!(Value::string("1"), Value::Integer(1));
}

#[test]
fn list_equality_is_structural() {
    let a = Value::list([Value::Integer(1), Value::string("x")]);
    let b = Value::list([Value::Integer(1), Value::string("x")]);
    let c = Value::list([Value::Integer(1)]);

    assert_eq!(a, b);
    assert_eq!(hash_value(&a), hash_value(&b));
    assert_ne!(a, c);
}

#[test]
fn map_equality_is_identity() {
    let a = MapRef::new();
    let b = MapRef::new();

    assert_eq!(Value::Map(a.clone()), Value::Map(a.clone()));
    assert_ne!(Value::Map(a.clone()), Value::Map(b));
    assert_eq!(hash_value(&Value::Map(a.clone())), hash_value(&Value::Map(a)));
}

#[test]
fn map_mutation_visible_through_clones() {
    let map = MapRef::new();
    let alias = map.clone();

    alias.insert(Value::string("frog"), Value::string("ribbit"));

    assert!(map.contains_key(&Value::string("frog")));
    assert_eq!(map.get(&Value::string("frog")), Some(Value::string("ribbit")));
    assert_eq!(map.entries().len(), 1);
}

#[test]
fn float_hash_is_stable() {
    assert_eq!(hash_value(&Value::float(2.5)), hash_value(&Value::float(2.5)));
}

#[test]
fn kind_of_every_variant() {
    assert_eq!(Kind::of(&Value::Integer(-1)), Kind::Integer);
    assert_eq!(Kind::of(&Value::Unsigned(7)), Kind::Integer);
    assert_eq!(Kind::of(&Value::float(3.14)), Kind::Float);
    assert_eq!(Kind::of(&Value::List(Vector::new())), Kind::List);
    assert_eq!(Kind::of(&Value::Map(MapRef::new())), Kind::Map);
    assert_eq!(Kind::of(&Value::string("x")), Kind::Unknown);
    assert_eq!(Kind::of(&Value::Boolean(true)), Kind::Unknown);
    assert_eq!(Kind::of(&Value::Sequence(Sequence::range(0, 1))), Kind::Unknown);
}

#[test]
fn classify_reports_unknown_as_error() {
    assert_eq!(classify("type", &Value::Integer(1)), Ok(Kind::Integer));
    assert_eq!(classify("type", &Value::List(Vector::new())), Ok(Kind::List));

    let err = classify("type", &Value::Boolean(false)).unwrap_err();
    assert_eq!(err.to_string(), "type: unsupported type for argument 1: false (bool)");
}

#[test]
fn classify_names_the_calling_operation() {
    let err = classify("render", &Value::string("x")).unwrap_err();
    assert_eq!(
        err,
        RuntimeError::UnsupportedOperandType {
            op: "render",
            position: 1,
            kind: "string",
            value: "\"x\"".to_string(),
        }
    );
}

#[test]
fn display_scalars() {
    assert_eq!(Value::Integer(-5).to_string(), "-5");
    assert_eq!(Value::Unsigned(5).to_string(), "5");
    assert_eq!(Value::float(4.5).to_string(), "4.5");
    assert_eq!(Value::float(5.0).to_string(), "5");
    assert_eq!(Value::float(-0.25).to_string(), "-0.25");
    assert_eq!(Value::float(123456.0).to_string(), "123456");
    assert_eq!(Value::float(1e6).to_string(), "1e+06");
    assert_eq!(Value::float(1234567.0).to_string(), "1.234567e+06");
    assert_eq!(Value::float(0.0001).to_string(), "0.0001");
    assert_eq!(Value::float(0.00001).to_string(), "1e-05");
    assert_eq!(Value::float(2.5e-300).to_string(), "2.5e-300");
    assert_eq!(Value::float(f64::INFINITY).to_string(), "+Inf");
    assert_eq!(Value::float(f64::NEG_INFINITY).to_string(), "-Inf");
    assert_eq!(Value::float(f64::NAN).to_string(), "NaN");
    assert_eq!(Value::string("hi there").to_string(), "hi there");
    assert_eq!(Value::Boolean(true).to_string(), "true");
}

#[test]
fn display_containers() {
    let list = Value::list([Value::Integer(1), Value::string("b"), Value::float(2.5)]);
    assert_eq!(list.to_string(), "[1 b 2.5]");

    let map: MapRef = [
        (Value::string("dog"), Value::string("woof")),
        (Value::string("cat"), Value::string("meow")),
    ]
    .into_iter()
    .collect();
    assert_eq!(Value::Map(map).to_string(), "map[cat:meow dog:woof]");
}

#[test]
fn self_containing_map_renders_placeholder() {
    let map = MapRef::new();
    map.insert(Value::string("name"), Value::string("m"));
    map.insert(Value::string("me"), Value::Map(map.clone()));

    assert_eq!(Value::Map(map.clone()).to_string(), "map[me:map[...] name:m]");

    let outer = Value::list([Value::Map(map.clone()), Value::Map(map)]);
    assert_eq!(outer.to_string(), "[map[me:map[...] name:m] map[me:map[...] name:m]]");
}

#[test]
fn describe_quotes_strings_only() {
    assert_eq!(Value::string("x").describe(), "\"x\"");
    assert_eq!(Value::Integer(42).describe(), "42");
}

#[test]
fn sequence_is_half_open() {
    let seq = Sequence::range(1, 5);
    assert_eq!(seq.remaining(), 4);
    assert_eq!(seq.collect::<Vec<_>>(), vec![1, 2, 3, 4]);
}

#[test]
fn sequence_empty_and_inverted() {
    assert_eq!(Sequence::range(1, 1).count(), 0);
    assert_eq!(Sequence::range(5, 1).count(), 0);
    assert_eq!(Sequence::range(5, 1).remaining(), 0);
}

#[test]
fn sequence_is_single_use() {
    let mut seq = Sequence::range(0, 3);
    let shared = seq.clone();

    assert_eq!(seq.next(), Some(0));
    assert_eq!(shared.clone().next(), Some(1));
    assert!(seq.has_next());
    assert_eq!(seq.next(), Some(2));
    assert!(!shared.has_next());
    assert_eq!(seq.next(), None);
}

#[test]
fn sequence_abandoned_early_is_dropped() {
    let mut seq = Sequence::range(0, i64::MAX);
    assert_eq!(seq.next(), Some(0));
    assert!(seq.has_next());
    drop(seq);
}
