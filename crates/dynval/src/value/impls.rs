//! Value conveniences: constructors, extractors, object access, From traits

use super::*;
use crate::error::{OpsError, OpsResult};

// ═══════════════════════════════════════════════════════════════════
// Convenience Constructors
// ═══════════════════════════════════════════════════════════════════

impl Value {
    /// Create an int32 value
    pub fn int32(n: i32) -> Self {
        Self::from_payload(Payload::Int32(n), &DEFAULT_OPS)
    }

    /// Create a string value holding a copy of `s`
    pub fn string(s: impl Into<String>) -> Self {
        Self::from_payload(Payload::String(s.into()), &DEFAULT_OPS)
    }

    /// Create an empty object value
    pub fn object() -> Self {
        Self::from_payload(Payload::Object(Object::new()), &DEFAULT_OPS)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Extractors (return Option for safe access)
    // ═══════════════════════════════════════════════════════════════════

    /// Extract the integer payload
    pub fn as_i32(&self) -> Option<i32> {
        match &*self.payload() {
            Payload::Int32(n) => Some(*n),
            _ => None,
        }
    }

    /// Copy out the string payload
    pub fn as_string(&self) -> Option<String> {
        match &*self.payload() {
            Payload::String(s) => Some(s.clone()),
            _ => None,
        }
    }

    /// Number of pairs, if this is an object
    pub fn len(&self) -> Option<usize> {
        self.with_object(Object::len).ok()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Object Access
    // ═══════════════════════════════════════════════════════════════════

    /// Read the object payload. `InvalidType` if this is not an object.
    pub fn with_object<R>(&self, f: impl FnOnce(&Object) -> R) -> OpsResult<R> {
        match &*self.payload() {
            Payload::Object(object) => Ok(f(object)),
            _ => Err(OpsError::InvalidType),
        }
    }

    /// Look up `key`, sharing the stored value with the caller.
    ///
    /// The returned handle counts as a reference of its own.
    pub fn get(&self, key: &Value) -> OpsResult<Option<Value>> {
        self.with_object(|object| object.get(key).map(Value::share))
    }
}

// ═══════════════════════════════════════════════════════════════════
// From Trait Implementations
// ═══════════════════════════════════════════════════════════════════

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::int32(n)
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

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::from_payload(Payload::Object(object), &DEFAULT_OPS)
    }
}
