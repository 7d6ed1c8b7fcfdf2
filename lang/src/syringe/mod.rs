//! The toolkit a host injects into its template engine.

use std::cell::Cell;
use std::collections::{BTreeMap, HashSet};

use crate::builtins::{BuiltinId, arith, containers, general, types};
use crate::error::{Abort, Interrupt, RuntimeError};
use crate::value::Value;

mod logger;

pub use logger::{Logger, MemoryLogger, StderrLogger};


/// Name of this template expander, also the prefix of every log line
pub const EXPANDER_NAME: &str = "gtpl";
pub const EXPANDER_VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

/// Function name to builtin, in the shape a host registers with its engine
pub type FuncMap = BTreeMap<String, BuiltinId>;

/// Options for [`Syringe::new`].
pub struct Opts {
    /// When true, `add` works as well as `Gtpl.Add`
    pub allow_aliases: bool,
    /// Receives `log` lines
    pub logger: Box<dyn Logger>,
    /// Receives `die` messages when nothing was logged before
    pub console: Box<dyn Logger>,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            allow_aliases: false,
            logger: Box::new(StderrLogger),
            console: Box::new(StderrLogger),
        }
    }
}

impl Opts {
    pub fn with_aliases(mut self, allow_aliases: bool) -> Self {
        self.allow_aliases = allow_aliases;
        self
    }

    pub fn with_logger(mut self, logger: impl Logger + 'static) -> Self {
        self.logger = Box::new(logger);
        self
    }

    pub fn with_console(mut self, console: impl Logger + 'static) -> Self {
        self.console = Box::new(console);
        self
    }
}

/// Builtin registry plus the per-run state the builtins need.
///
/// One instance serves one template run: the "logging was used" latch is set
/// by the first `log` and never cleared.
pub struct Syringe {
    logger: Box<dyn Logger>,
    console: Box<dyn Logger>,
    allow_aliases: bool,
    log_used: Cell<bool>,
    /// Sorted by canonical name
    builtins: Vec<BuiltinId>,
    functions: FuncMap,
}

impl Syringe {
    pub fn new(opts: Opts) -> Self {
        let mut builtins = BuiltinId::ALL.to_vec();
        builtins.sort_by_key(|id| id.name());
        debug_assert!(aliases_are_unique(&builtins), "duplicate builtin alias");

        let functions = if opts.allow_aliases {
            flat_namespace(&builtins)
        } else {
            qualified_namespace(&builtins)
        };

        tracing::debug!(
            builtins = builtins.len(),
            allow_aliases = opts.allow_aliases,
            "syringe built"
        );

        Self {
            logger: opts.logger,
            console: opts.console,
            allow_aliases: opts.allow_aliases,
            log_used: Cell::new(false),
            builtins,
            functions,
        }
    }

    /// Every builtin, ordered by canonical name
    pub fn builtins(&self) -> &[BuiltinId] {
        &self.builtins
    }

    /// Whether `log` was called during this run
    pub fn log_used(&self) -> bool {
        self.log_used.get()
    }

    /// Only the `Gtpl.<Name>` bindings
    pub fn qualified_namespace(&self) -> FuncMap {
        qualified_namespace(&self.builtins)
    }

    /// `Gtpl.<Name>` bindings plus every alias
    pub fn flat_namespace(&self) -> FuncMap {
        flat_namespace(&self.builtins)
    }

    /// The namespace matching the configured alias mode
    pub fn func_map(&self) -> &FuncMap {
        &self.functions
    }

    /// Resolves `name` in the configured namespace and invokes it.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value, Interrupt> {
        let id = self
            .functions
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::UnknownFunction(name.to_string()))?;
        self.invoke(id, args)
    }

    pub fn invoke(&self, id: BuiltinId, args: &[Value]) -> Result<Value, Interrupt> {
        tracing::trace!(builtin = id.name(), args = args.len(), "invoking builtin");
        id.check_arity(args)?;

        let value = match id {
            BuiltinId::Expander => Value::string(self.expander()),
            BuiltinId::Version => Value::string(self.version()),
            BuiltinId::Log => self.log(args),
            BuiltinId::Die => return Err(self.die(args).into()),
            BuiltinId::Env => general::env_var(&args[0])?,
            BuiltinId::Assert => self.assert(&args[0], &args[1..])?,

            BuiltinId::Strcat => general::strcat(args),
            BuiltinId::AddByte => general::add_byte(&args[0], &args[1])?,

            BuiltinId::List => containers::list(args),
            BuiltinId::HasElement => containers::has_element(&args[0], &args[1])?,
            BuiltinId::IndexOf => containers::index_of(&args[0], &args[1])?,
            BuiltinId::AddElements => containers::add_elements(&args[0], &args[1..])?,

            BuiltinId::Map => containers::map(args)?,
            BuiltinId::HasKey => containers::has_key(&args[0], &args[1])?,
            BuiltinId::GetVal => containers::get_val(&args[0], &args[1])?,
            BuiltinId::SetKeyVal => containers::set_key_val(&args[0], &args[1], &args[2])?,

            BuiltinId::Type => types::type_of(&args[0])?,
            BuiltinId::IsInt => types::is_int(&args[0]),
            BuiltinId::IsFloat => types::is_float(&args[0]),
            BuiltinId::IsNumber => types::is_number(&args[0]),
            BuiltinId::IsList => types::is_list(&args[0]),
            BuiltinId::IsMap => types::is_map(&args[0]),
            BuiltinId::Contains => containers::contains(&args[0], &args[1])?,

            BuiltinId::Add => arith::add(&args[0], &args[1])?,
            BuiltinId::Sub => arith::sub(&args[0], &args[1])?,
            BuiltinId::Mul => arith::mul(&args[0], &args[1])?,
            BuiltinId::Div => arith::div(&args[0], &args[1])?,

            BuiltinId::Loop => general::loop_range(&args[0], &args[1])?,
        };
        Ok(value)
    }

    /// Usage of every builtin, listed by alias when aliases are allowed and by
    /// qualified name otherwise.
    pub fn overview(&self) -> String {
        let mut output = String::new();
        for id in &self.builtins {
            if self.allow_aliases {
                output.push_str(&format!("{} (longname: {})\n", id.alias(), id.qualified_name()));
            } else {
                output.push_str(&format!("{}\n", id.qualified_name()));
            }
            for line in id.usage().lines() {
                output.push_str(&format!("  {line}\n"));
            }
            output.push('\n');
        }
        output
    }

    pub fn expander(&self) -> &'static str {
        EXPANDER_NAME
    }

    pub fn version(&self) -> &'static str {
        EXPANDER_VERSION
    }

    /// log(v...) → ""
    pub fn log(&self, args: &[Value]) -> Value {
        self.log_used.set(true);
        self.logger.print(&format!("{EXPANDER_NAME}: {}", join_args(args)));
        Value::empty()
    }

    /// die(v...)
    ///
    /// The message goes to the log when logging was used during this run, to
    /// the error console otherwise. The returned abort must end the run.
    pub fn die(&self, args: &[Value]) -> Abort {
        self.abort(join_args(args))
    }

    /// assert(cond, v...) → "" when `cond` holds, an abort otherwise
    pub fn assert(&self, cond: &Value, args: &[Value]) -> Result<Value, Interrupt> {
        match cond {
            Value::Boolean(true) => Ok(Value::empty()),
            Value::Boolean(false) => Err(self.abort(format!("assert: {}", join_args(args))).into()),
            other => Err(RuntimeError::unsupported("assert", 1, other).into()),
        }
    }

    fn abort(&self, message: String) -> Abort {
        let logged = self.log_used.get();
        tracing::debug!(reason = %message, logged, "abort requested");

        if logged {
            self.log(&[Value::string(message.clone())]);
        } else {
            self.console.print(&message);
        }
        Abort { message }
    }
}

fn join_args(args: &[Value]) -> String {
    args.iter()
        .map(Value::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn qualified_namespace(builtins: &[BuiltinId]) -> FuncMap {
    builtins.iter().map(|id| (id.qualified_name(), *id)).collect()
}

fn flat_namespace(builtins: &[BuiltinId]) -> FuncMap {
    let mut functions = qualified_namespace(builtins);
    functions.extend(builtins.iter().map(|id| (id.alias().to_string(), *id)));
    functions
}

fn aliases_are_unique(builtins: &[BuiltinId]) -> bool {
    let qualified: HashSet<String> = builtins.iter().map(|id| id.qualified_name()).collect();
    let mut seen = HashSet::new();
    builtins
        .iter()
        .all(|id| seen.insert(id.alias()) && !qualified.contains(id.alias()))
}
