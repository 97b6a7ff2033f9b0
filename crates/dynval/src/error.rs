//! Error codes and the uniform result type for value operations

use std::fmt;

use thiserror::Error;

use crate::value::Value;

/// Failure of a value operation.
///
/// `False` is not a fault: it is the decided-negative answer of a boolean
/// query such as equality, kept distinct from `Unimplemented` (undecidable).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpsError {
    /// A boolean query evaluated to false
    #[error("false")]
    False,

    /// Behavior intentionally missing for this type combination
    #[error("unimplemented")]
    Unimplemented,

    /// Operation invoked on a value whose type does not support it
    #[error("invalid type")]
    InvalidType,

    /// String to integer conversion failed to parse or was out of range
    #[error("invalid integer")]
    InvalidInteger,
}

/// Result type alias for value operations
pub type OpsResult<T = ()> = std::result::Result<T, OpsError>;

/// The full status of an operation, success included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Operation succeeded
    Ok,
    /// See [`OpsError::False`]
    False,
    /// See [`OpsError::Unimplemented`]
    Unimplemented,
    /// See [`OpsError::InvalidType`]
    InvalidType,
    /// See [`OpsError::InvalidInteger`]
    InvalidInteger,
}

impl ErrorCode {
    /// Status code of any operation result.
    pub fn of<T>(result: &OpsResult<T>) -> Self {
        match result {
            Ok(_) => ErrorCode::Ok,
            Err(err) => (*err).into(),
        }
    }

    /// Whether this code reports success
    pub fn is_ok(self) -> bool {
        self == ErrorCode::Ok
    }

    /// Diagnostic name of the code
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Ok => "OK",
            ErrorCode::False => "false",
            ErrorCode::Unimplemented => "unimplemented",
            ErrorCode::InvalidType => "invalid type",
            ErrorCode::InvalidInteger => "invalid integer",
        }
    }
}

impl From<OpsError> for ErrorCode {
    fn from(err: OpsError) -> Self {
        match err {
            OpsError::False => ErrorCode::False,
            OpsError::Unimplemented => ErrorCode::Unimplemented,
            OpsError::InvalidType => ErrorCode::InvalidType,
            OpsError::InvalidInteger => ErrorCode::InvalidInteger,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Diagnostic form of a failure: `{error: "invalid integer"}`.
pub fn render_error(err: OpsError) -> String {
    format!("{{error: \"{}\"}}", ErrorCode::from(err))
}

/// Diagnostic form of a result carrying a value.
///
/// The payload is rendered only on success: `{error: "OK", value: 42}`.
pub fn render_result(result: &OpsResult<Value>) -> String {
    match result {
        Ok(value) => format!("{{error: \"{}\", value: {}}}", ErrorCode::Ok, value),
        Err(err) => render_error(*err),
    }
}
