//! Template functions for gtpl, a generic delimiter-based template expander.
//!
//! The host engine owns parsing and control flow. This crate supplies the
//! functions templates call: dynamically typed arithmetic, list and map
//! helpers, type introspection, logging and fail-fast `die`/`assert`.
//!
//! ```
//! use gtpl::{Opts, Syringe, Value};
//!
//! let syringe = Syringe::new(Opts::default().with_aliases(true));
//! let sum = syringe.call("add", &[Value::Integer(2), Value::float(2.5)]).unwrap();
//! assert_eq!(sum, Value::float(4.5));
//! ```

pub mod builtins;
pub mod error;
pub mod syringe;
pub mod value;

pub use builtins::{BuiltinId, NAMESPACE};
pub use error::{Abort, Interrupt, RuntimeError};
pub use syringe::{
    EXPANDER_NAME, EXPANDER_VERSION, FuncMap, Logger, MemoryLogger, Opts, StderrLogger, Syringe,
};
pub use value::{Kind, MapRef, Sequence, Value, classify};
