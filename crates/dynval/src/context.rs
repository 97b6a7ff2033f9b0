//! Driver configuration

use crate::failure::FailurePolicy;
use crate::value::ValueType;

/// Configuration for building an object from argument pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverContext {
    /// Type given to every key before it is assigned from its argument
    pub key_type: ValueType,

    /// What to do when a step fails
    pub failure: FailurePolicy,
}

impl Default for DriverContext {
    fn default() -> Self {
        Self {
            key_type: ValueType::String,
            failure: FailurePolicy::Abort,
        }
    }
}

impl DriverContext {
    /// Create a context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with integer keys, parsed from their arguments.
    pub fn with_int_keys() -> Self {
        Self {
            key_type: ValueType::Int32,
            ..Default::default()
        }
    }

    /// Replace the failure policy (builder pattern)
    pub fn with_failure(mut self, failure: FailurePolicy) -> Self {
        self.failure = failure;
        self
    }
}
