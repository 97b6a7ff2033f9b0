//! # dynval
//!
//! Dynamically-typed values over a statically-typed host.
//!
//! A [`Value`] is a tagged union holding nothing yet, a 32-bit integer, a
//! string, or an ordered key/value [`Object`]. Behavior is not fixed by the
//! type: every value carries a reference to an [`Operations`] table, so a
//! single instance can override how it is assigned, compared or rendered.
//!
//! ## Architecture
//!
//! - **Values**: reference-counted handles with a one-time type transition
//! - **Operations**: per-instance dispatch table with baseline behavior
//! - **Objects**: insertion-ordered, unique-keyed pairs owned by their value
//! - **Results**: every operation returns an [`OpsResult`]; failing fast is
//!   a policy chosen by the caller through [`FailureHandler`]
//!
//! ## Example
//!
//! ```
//! use dynval::{Value, ValueType};
//!
//! let top = Value::object();
//! let key = Value::new();
//! key.transition_type(ValueType::String).unwrap();
//! key.assign_str("answer").unwrap();
//! top.insert_pair(key, Value::int32(42)).unwrap();
//!
//! assert_eq!(top.to_string(), r#"{"answer": 42}"#);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod driver;
pub mod error;
pub mod failure;
pub mod value;

// Re-export main types
pub use context::DriverContext;
pub use error::{render_error, render_result, ErrorCode, OpsError, OpsResult};
pub use failure::{unwrap, FailureHandler, FailurePolicy};
pub use value::{
    values_equal, DefaultOps, Insertion, Object, Operations, Pair, Payload, Value, ValueFlags,
    ValueType, DEFAULT_OPS, MAX_INT_STRING_LEN,
};

/// dynval version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
