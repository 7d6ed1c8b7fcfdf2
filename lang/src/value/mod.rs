use im_rc::{HashMap, Vector};
use ordered_float::OrderedFloat;
use std::cell::{Ref, RefCell};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

mod kind;
mod sequence;

pub use kind::{Kind, classify};
pub use sequence::Sequence;

#[cfg(test)]
mod tests;

/// A value flowing through a template.
///
/// Templates are untyped; every builtin inspects its arguments at runtime and
/// decides what to do based on the variant it finds.
#[derive(Clone, Debug)]
pub enum Value {
    /// Signed integer, the form every integer literal in a template takes
    Integer(i64),

    /// Unsigned integer handed in by the host
    Unsigned(u64),

    /// 64-bit floating point (IEEE 754)
    Float(OrderedFloat<f64>),

    Boolean(bool),

    String(Rc<String>),

    /// Ordered, duplicates allowed, persistent (appends share storage)
    List(Vector<Value>),

    /// Shared handle, mutations are visible through every clone
    Map(MapRef),

    /// Single-use ascending integer cursor produced by `loop`
    Sequence(Sequence),
}

impl Value {
    /// The empty string, returned by builtins that only have side effects
    pub fn empty() -> Self {
        Value::String(Rc::new(String::new()))
    }

    pub fn string(s: impl Into<String>) -> Self {
        Value::String(Rc::new(s.into()))
    }

    pub fn float(f: f64) -> Self {
        Value::Float(OrderedFloat(f))
    }

    pub fn list(elements: impl IntoIterator<Item = Value>) -> Self {
        Value::List(elements.into_iter().collect())
    }

    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "int",
            Value::Unsigned(_) => "uint",
            Value::Float(_) => "float",
            Value::Boolean(_) => "bool",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Sequence(_) => "sequence",
        }
    }

    /// Rendering used in error messages: strings are quoted, everything else
    /// renders as it would in template output.
    pub fn describe(&self) -> String {
        match self {
            Value::String(s) => format!("{s:?}"),
            other => other.to_string(),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Unsigned(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<MapRef> for Value {
    fn from(map: MapRef) -> Self {
        Value::Map(map)
    }
}

/// Handle to a map shared by every binding that refers to it.
///
/// Cloning the handle does not copy the entries. There is no locking: `Value`
/// holds `Rc`s and therefore never crosses threads.
#[derive(Clone, Debug, Default)]
pub struct MapRef(Rc<RefCell<HashMap<Value, Value>>>);

impl MapRef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &Value) -> Option<Value> {
        self.0.borrow().get(key).cloned()
    }

    pub fn contains_key(&self, key: &Value) -> bool {
        self.0.borrow().contains_key(key)
    }

    /// Inserts or overwrites in place.
    pub fn insert(&self, key: Value, value: Value) {
        self.0.borrow_mut().insert(key, value);
    }

    pub fn entries(&self) -> Ref<'_, HashMap<Value, Value>> {
        self.0.borrow()
    }

    pub fn ptr_eq(&self, other: &MapRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl FromIterator<(Value, Value)> for MapRef {
    fn from_iter<I: IntoIterator<Item = (Value, Value)>>(iter: I) -> Self {
        MapRef(Rc::new(RefCell::new(iter.into_iter().collect())))
    }
}

/// Structural equality for scalars, strings and lists. Maps and sequences
/// compare by identity. Different variants are never equal.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Unsigned(a), Value::Unsigned(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a.ptr_eq(b),
            (Value::Sequence(a), Value::Sequence(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);

        match self {
            Value::Integer(n) => n.hash(state),
            Value::Unsigned(n) => n.hash(state),
            Value::Float(f) => f.hash(state),
            Value::Boolean(b) => b.hash(state),
            Value::String(s) => s.hash(state),
            Value::List(elements) => {
                for elem in elements {
                    elem.hash(state);
                }
            }
            Value::Map(map) => std::ptr::hash(Rc::as_ptr(&map.0), state),
            Value::Sequence(seq) => seq.hash_ptr(state),
        }
    }
}

/// Shortest digits that read back as the same `f64`. Exponent form is used
/// below 1e-4 and from 1e6 on, with a signed two-digit exponent (`1e+06`).
fn write_float(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        return f.write_str("NaN");
    }
    if n.is_infinite() {
        return f.write_str(if n > 0.0 { "+Inf" } else { "-Inf" });
    }

    let scientific = format!("{n:e}");
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    if (-4..6).contains(&exponent) {
        write!(f, "{n}")
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(f, "{mantissa}e{sign}{:02}", exponent.abs())
    }
}

type MapPtr = *const RefCell<HashMap<Value, Value>>;

thread_local! {
    /// Maps whose entries are being written further up the stack
    static RENDERING: RefCell<Vec<MapPtr>> = const { RefCell::new(Vec::new()) };
}

/// Marks a map as being rendered until dropped. A map reachable from its own
/// entries renders as `map[...]` the second time round.
struct RenderGuard;

impl RenderGuard {
    fn enter(map: &MapRef) -> Option<Self> {
        let ptr = Rc::as_ptr(&map.0);
        RENDERING.with_borrow_mut(|stack| {
            if stack.contains(&ptr) {
                None
            } else {
                stack.push(ptr);
                Some(RenderGuard)
            }
        })
    }
}

impl Drop for RenderGuard {
    fn drop(&mut self) {
        RENDERING.with_borrow_mut(|stack| {
            stack.pop();
        });
    }
}

/// Template output form: strings are written raw, lists as `[1 2 3]`, maps as
/// `map[a:1 b:2]` with entries sorted by their rendered key.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Unsigned(n) => write!(f, "{n}"),
            Value::Float(n) => write_float(f, n.0),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::String(s) => write!(f, "{s}"),
            Value::List(elements) => {
                write!(f, "[")?;
                for (i, elem) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{elem}")?;
                }
                write!(f, "]")
            }
            Value::Map(map) => {
                let Some(_guard) = RenderGuard::enter(map) else {
                    return write!(f, "map[...]");
                };
                let mut entries: Vec<(String, String)> = map
                    .entries()
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect();
                entries.sort();

                write!(f, "map[")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{key}:{value}")?;
                }
                write!(f, "]")
            }
            Value::Sequence(_) => write!(f, "<sequence>"),
        }
    }
}
