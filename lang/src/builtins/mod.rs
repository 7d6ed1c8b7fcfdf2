//! The builtin function table.
//!
//! Every builtin has a canonical name (`Add`), reachable from templates as
//! `Gtpl.Add`, and a lower-case alias (`add`) that hosts may flatten into the
//! same namespace. Remember to update `name`, `alias`, `usage` and `arity`
//! together when adding a builtin.

pub mod arith;
pub mod containers;
pub mod general;
pub mod types;

use crate::error::RuntimeError;
use crate::value::Value;

/// Root under which canonical names live
pub const NAMESPACE: &str = "Gtpl";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BuiltinId {
    // General
    Expander,
    Version,
    Log,
    Die,
    Env,
    Assert,

    // Strings
    Strcat,
    AddByte,

    // Lists
    List,
    HasElement,
    IndexOf,
    AddElements,

    // Maps
    Map,
    HasKey,
    GetVal,
    SetKeyVal,

    // Types
    Type,
    IsInt,
    IsFloat,
    IsNumber,
    IsList,
    IsMap,
    Contains,

    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,

    // Iteration
    Loop,
}

impl BuiltinId {
    pub const ALL: [BuiltinId; 28] = [
        BuiltinId::Expander,
        BuiltinId::Version,
        BuiltinId::Log,
        BuiltinId::Die,
        BuiltinId::Env,
        BuiltinId::Assert,
        BuiltinId::Strcat,
        BuiltinId::AddByte,
        BuiltinId::List,
        BuiltinId::HasElement,
        BuiltinId::IndexOf,
        BuiltinId::AddElements,
        BuiltinId::Map,
        BuiltinId::HasKey,
        BuiltinId::GetVal,
        BuiltinId::SetKeyVal,
        BuiltinId::Type,
        BuiltinId::IsInt,
        BuiltinId::IsFloat,
        BuiltinId::IsNumber,
        BuiltinId::IsList,
        BuiltinId::IsMap,
        BuiltinId::Contains,
        BuiltinId::Add,
        BuiltinId::Sub,
        BuiltinId::Mul,
        BuiltinId::Div,
        BuiltinId::Loop,
    ];

    /// Canonical name, without the namespace
    pub fn name(self) -> &'static str {
        match self {
            BuiltinId::Expander => "Expander",
            BuiltinId::Version => "Version",
            BuiltinId::Log => "Log",
            BuiltinId::Die => "Die",
            BuiltinId::Env => "Env",
            BuiltinId::Assert => "Assert",
            BuiltinId::Strcat => "Strcat",
            BuiltinId::AddByte => "AddByte",
            BuiltinId::List => "List",
            BuiltinId::HasElement => "HasElement",
            BuiltinId::IndexOf => "IndexOf",
            BuiltinId::AddElements => "AddElements",
            BuiltinId::Map => "Map",
            BuiltinId::HasKey => "HasKey",
            BuiltinId::GetVal => "GetVal",
            BuiltinId::SetKeyVal => "SetKeyVal",
            BuiltinId::Type => "Type",
            BuiltinId::IsInt => "IsInt",
            BuiltinId::IsFloat => "IsFloat",
            BuiltinId::IsNumber => "IsNumber",
            BuiltinId::IsList => "IsList",
            BuiltinId::IsMap => "IsMap",
            BuiltinId::Contains => "Contains",
            BuiltinId::Add => "Add",
            BuiltinId::Sub => "Sub",
            BuiltinId::Mul => "Mul",
            BuiltinId::Div => "Div",
            BuiltinId::Loop => "Loop",
        }
    }

    /// `Gtpl.<name>`
    pub fn qualified_name(self) -> String {
        format!("{NAMESPACE}.{}", self.name())
    }

    /// Short, lower-case form usable when aliases are allowed
    pub fn alias(self) -> &'static str {
        match self {
            BuiltinId::Expander => "expander",
            BuiltinId::Version => "version",
            BuiltinId::Log => "log",
            BuiltinId::Die => "die",
            BuiltinId::Env => "env",
            BuiltinId::Assert => "assert",
            BuiltinId::Strcat => "strcat",
            BuiltinId::AddByte => "addbyte",
            BuiltinId::List => "list",
            BuiltinId::HasElement => "haselement",
            BuiltinId::IndexOf => "indexof",
            BuiltinId::AddElements => "addelements",
            BuiltinId::Map => "map",
            BuiltinId::HasKey => "haskey",
            BuiltinId::GetVal => "getval",
            BuiltinId::SetKeyVal => "setkeyval",
            BuiltinId::Type => "type",
            BuiltinId::IsInt => "isint",
            BuiltinId::IsFloat => "isfloat",
            BuiltinId::IsNumber => "isnumber",
            BuiltinId::IsList => "islist",
            BuiltinId::IsMap => "ismap",
            BuiltinId::Contains => "contains",
            BuiltinId::Add => "add",
            BuiltinId::Sub => "sub",
            BuiltinId::Mul => "mul",
            BuiltinId::Div => "div",
            BuiltinId::Loop => "loop",
        }
    }

    /// Usage text shown by the overview; may span several lines
    pub fn usage(self) -> &'static str {
        match self {
            BuiltinId::Expander => "{{ expander }} - the name of this template expander",
            BuiltinId::Version => "{{ version }} - the version of this template expander",
            BuiltinId::Log => r#"{{ log "some" "info" }} - sends args to the log"#,
            BuiltinId::Die => {
                r#"{{ die "some" "info" }} - prints args, logs them if logging was used, stops"#
            }
            BuiltinId::Env => r#"my homedir is {{ env "HOME" }} - returns environment setting"#,
            BuiltinId::Assert => {
                r#"asserts a condition and stops if not met: {{ assert (gt (len $list) 0) "list is empty!" }}"#
            }
            BuiltinId::Strcat => r#"{{ $all := strcat 12 " plus " 13 " is " 25 }}"#,
            BuiltinId::AddByte => {
                r#"Add a '!': {{ $s := "Hello World" }} {{ $s = addbyte $s 33 }}"#
            }
            BuiltinId::List => r#"{{ $list := list "a" "b" "c" }} - creates a list"#,
            BuiltinId::HasElement => {
                "{{ if haselement $list \"a\" }} ... {{ end }} - true when a list holds an element\n\
                 prefer contains"
            }
            BuiltinId::IndexOf => r#"'a' occurs at index {{ indexof $list "a" }} in the list"#,
            BuiltinId::AddElements => {
                r#"{{ $newlist := (addelements $list "d" "e") }} - creates a new list with added element(s)"#
            }
            BuiltinId::Map => r#"{{ $map := map "cat" "meow" "dog" "woof" }} - creates a map"#,
            BuiltinId::HasKey => {
                "{{ if haskey $map \"cat\" }} ... {{ end }} - true when a map holds a key\n\
                 prefer contains"
            }
            BuiltinId::GetVal => {
                r#"a cat says {{ getval $map "cat" }} - gets a value from a map, "" if absent"#
            }
            BuiltinId::SetKeyVal => {
                r#"{{ setkeyval $map "frog" "ribbit" }} - sets a key/value pair to a map"#
            }
            BuiltinId::Type => {
                "expands to \"int\", \"float\", \"list\" or \"map\"\n\
                 {{ $t := type $map }} {{ if ne $t \"map\" }} something is very wrong {{ end }}"
            }
            BuiltinId::IsInt => "true when its argument is an integer",
            BuiltinId::IsFloat => "true when its argument is a float",
            BuiltinId::IsNumber => "true when its argument is an int or a float",
            BuiltinId::IsList => "true when its argument is a list",
            BuiltinId::IsMap => "true when its argument is a map",
            BuiltinId::Contains => {
                "true when a map contains a key, a list contains an element, or a string a substring\n\
                 {{ if contains $map \"frog\" }} .... {{ end }}"
            }
            BuiltinId::Add => "21 + 21 is {{ add 21 21 }}",
            BuiltinId::Sub => "42 - 2 = {{ sub 42 2 }}",
            BuiltinId::Mul => "7 * 4 = {{ mul 7 4 }}",
            BuiltinId::Div => "42 / 4 = {{ div 42 4 }}",
            BuiltinId::Loop => {
                "1 up to and including 10: {{ range $i := loop 1 11 }} {{ $i }} {{ end }}"
            }
        }
    }

    /// Returns (min, max) argument counts; `None` means variadic
    pub fn arity(self) -> (usize, Option<usize>) {
        match self {
            BuiltinId::Expander | BuiltinId::Version => (0, Some(0)),

            BuiltinId::Env
            | BuiltinId::Type
            | BuiltinId::IsInt
            | BuiltinId::IsFloat
            | BuiltinId::IsNumber
            | BuiltinId::IsList
            | BuiltinId::IsMap => (1, Some(1)),

            BuiltinId::AddByte
            | BuiltinId::HasElement
            | BuiltinId::IndexOf
            | BuiltinId::HasKey
            | BuiltinId::GetVal
            | BuiltinId::Contains
            | BuiltinId::Add
            | BuiltinId::Sub
            | BuiltinId::Mul
            | BuiltinId::Div
            | BuiltinId::Loop => (2, Some(2)),

            BuiltinId::SetKeyVal => (3, Some(3)),

            BuiltinId::Log
            | BuiltinId::Die
            | BuiltinId::Strcat
            | BuiltinId::List
            | BuiltinId::Map => (0, None),
            BuiltinId::Assert | BuiltinId::AddElements => (1, None),
        }
    }

    pub fn check_arity(self, args: &[Value]) -> Result<(), RuntimeError> {
        let (min, max) = self.arity();
        let fits = args.len() >= min && max.is_none_or(|max| args.len() <= max);
        if fits {
            return Ok(());
        }

        let expected = match max {
            Some(max) if max == min => min.to_string(),
            Some(max) => format!("{min}-{max}"),
            None => format!("at least {min}"),
        };
        Err(RuntimeError::malformed(
            self.alias(),
            format!("expects {expected} argument(s), got {}", args.len()),
        ))
    }
}
