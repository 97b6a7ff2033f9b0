//! The operations table and its baseline implementation

use super::{Value, ValueType};
use crate::error::{OpsError, OpsResult};

/// The polymorphic behavior of a value.
///
/// Every [`Value`] carries a `&'static dyn Operations`, so behavior can be
/// replaced per instance rather than per type. All methods default to the
/// functions in [`baseline`]; an override implements only what it changes
/// and may still call the baseline for the rest.
pub trait Operations {
    /// Establish the type of an `Undefined` value.
    fn transition_type(&self, value: &Value, target: ValueType) -> OpsResult {
        baseline::transition_type(value, target)
    }

    /// Store an integer, converting to the value's established type.
    fn assign_int32(&self, value: &Value, n: i32) -> OpsResult {
        baseline::assign_int32(value, n)
    }

    /// Store a string, converting to the value's established type.
    fn assign_str(&self, value: &Value, s: &str) -> OpsResult {
        baseline::assign_str(value, s)
    }

    /// Move a key/value pair into an object-typed container.
    fn insert_pair(&self, container: &Value, key: Value, val: Value) -> OpsResult {
        baseline::insert_pair(container, key, val)
    }

    /// One direction of equality: does `this` consider itself equal to `other`?
    fn is_equal(&self, this: &Value, other: &Value) -> OpsResult {
        baseline::is_equal(this, other)
    }

    /// Append the debug representation of `value` to `out`.
    fn debug_render(&self, value: &Value, out: &mut String) -> OpsResult {
        baseline::debug_render(value, out)
    }
}

/// The baseline operations table.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultOps;

impl Operations for DefaultOps {}

/// Shared instance of the baseline table, installed on every new value.
pub static DEFAULT_OPS: DefaultOps = DefaultOps;

/// Symmetric equality: both operands are asked, through their own tables.
///
/// Both directions `Ok` means equal. If both fail with the same code that
/// code is the answer, so `False` (decided) and `Unimplemented`
/// (undecidable) stay apart. Directions that disagree yield
/// `Unimplemented`.
pub fn values_equal(a: &Value, b: &Value) -> OpsResult {
    let forward = a.ops().is_equal(a, b);
    let backward = b.ops().is_equal(b, a);
    match (forward, backward) {
        (Ok(()), Ok(())) => Ok(()),
        (Err(x), Err(y)) if x == y => Err(x),
        _ => Err(OpsError::Unimplemented),
    }
}

// ═══════════════════════════════════════════════════════════════════
// Dispatching Entry Points
// ═══════════════════════════════════════════════════════════════════

impl Value {
    /// Establish this value's type; see [`Operations::transition_type`].
    pub fn transition_type(&self, target: ValueType) -> OpsResult {
        self.ops().transition_type(self, target)
    }

    /// Assign from an integer; see [`Operations::assign_int32`].
    pub fn assign_int32(&self, n: i32) -> OpsResult {
        self.ops().assign_int32(self, n)
    }

    /// Assign from a string; see [`Operations::assign_str`].
    pub fn assign_str(&self, s: &str) -> OpsResult {
        self.ops().assign_str(self, s)
    }

    /// Move `key` and `val` into this object-typed value.
    ///
    /// Ownership transfers unconditionally: reference counts are not
    /// touched, and on failure the pair is released.
    pub fn insert_pair(&self, key: Value, val: Value) -> OpsResult {
        self.ops().insert_pair(self, key, val)
    }

    /// Symmetric equality; see [`values_equal`].
    pub fn equals(&self, other: &Value) -> OpsResult {
        values_equal(self, other)
    }

    /// Append the debug representation to `out`.
    pub fn debug_render(&self, out: &mut String) -> OpsResult {
        self.ops().debug_render(self, out)
    }
}

/// Baseline behavior of every operation.
pub mod baseline {
    use tracing::debug;

    use crate::error::{OpsError, OpsResult};
    use crate::value::parse::parse_int32;
    use crate::value::{Insertion, Object, Payload, Value, ValueType, MAX_INT_STRING_LEN};

    /// `Undefined` takes any type; the same type again is a no-op; anything
    /// else would need conversion and is `Unimplemented`.
    pub fn transition_type(value: &Value, target: ValueType) -> OpsResult {
        let mut payload = value.payload_mut();
        let current = payload.value_type();
        if current == target {
            return Ok(());
        }
        if current != ValueType::Undefined {
            return Err(OpsError::Unimplemented);
        }

        *payload = match target {
            ValueType::Undefined => Payload::Undefined,
            ValueType::Int32 => Payload::Int32(0),
            ValueType::String => Payload::String(String::new()),
            ValueType::Object => Payload::Object(Object::new()),
        };
        debug!(to = target.name(), "type established");
        Ok(())
    }

    /// Int32 stores directly; String gets the decimal rendering in a fresh
    /// buffer.
    pub fn assign_int32(value: &Value, n: i32) -> OpsResult {
        match &mut *value.payload_mut() {
            Payload::Int32(slot) => *slot = n,
            Payload::String(buf) => {
                let mut fresh = String::with_capacity(MAX_INT_STRING_LEN);
                fresh.push_str(&n.to_string());
                *buf = fresh;
            }
            _ => return Err(OpsError::InvalidType),
        }
        Ok(())
    }

    /// Int32 parses with [`parse_int32`]; String deep-copies.
    pub fn assign_str(value: &Value, s: &str) -> OpsResult {
        match &mut *value.payload_mut() {
            Payload::Int32(slot) => match parse_int32(s) {
                Some(n) => *slot = n,
                None => {
                    debug!(input = s, "not a 32-bit integer");
                    return Err(OpsError::InvalidInteger);
                }
            },
            Payload::String(buf) => *buf = s.to_owned(),
            _ => return Err(OpsError::InvalidType),
        }
        Ok(())
    }

    /// Replace the pair with an equal key in place, or append.
    ///
    /// A container cannot hold itself, directly or through nested objects:
    /// a key or value from which the container is reachable is
    /// `Unimplemented`.
    pub fn insert_pair(container: &Value, key: Value, val: Value) -> OpsResult {
        if reaches(&key, container) || reaches(&val, container) {
            return Err(OpsError::Unimplemented);
        }

        let mut payload = container.payload_mut();
        let Payload::Object(object) = &mut *payload else {
            return Err(OpsError::InvalidType);
        };

        match object.insert(key, val) {
            Insertion::Appended(index) => debug!(index, len = object.len(), "pair appended"),
            Insertion::Replaced(index) => debug!(index, len = object.len(), "pair replaced"),
        }
        Ok(())
    }

    // Whether `target` is `from` or sits anywhere inside its objects
    fn reaches(from: &Value, target: &Value) -> bool {
        if Value::same(from, target) {
            return true;
        }
        match &*from.payload() {
            Payload::Object(object) => object
                .iter()
                .any(|(key, val)| reaches(key, target) || reaches(val, target)),
            _ => false,
        }
    }

    /// Type-strict equality: mixed types and objects are `Unimplemented`.
    pub fn is_equal(this: &Value, other: &Value) -> OpsResult {
        let (a, b) = (this.payload(), other.payload());
        let same = match (&*a, &*b) {
            (Payload::Int32(x), Payload::Int32(y)) => x == y,
            (Payload::String(x), Payload::String(y)) => x.as_bytes() == y.as_bytes(),
            _ => return Err(OpsError::Unimplemented),
        };
        if same {
            Ok(())
        } else {
            Err(OpsError::False)
        }
    }

    /// Decimal integers, quoted strings (no escaping), objects as
    /// `{key: value, ...}` with each element rendered by its own table.
    pub fn debug_render(value: &Value, out: &mut String) -> OpsResult {
        match &*value.payload() {
            Payload::Int32(n) => out.push_str(&n.to_string()),
            Payload::String(s) => {
                out.push('"');
                out.push_str(s);
                out.push('"');
            }
            Payload::Object(object) => {
                out.push('{');
                for (i, (key, val)) in object.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    key.debug_render(out)?;
                    out.push_str(": ");
                    val.debug_render(out)?;
                }
                out.push('}');
            }
            Payload::Undefined => out.push_str("\"undefined type\""),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Payload, MAX_INT_STRING_LEN};

    // Tables used to exercise per-instance dispatch

    struct Shouty;

    impl Operations for Shouty {
        fn debug_render(&self, value: &Value, out: &mut String) -> OpsResult {
            let mut inner = String::new();
            baseline::debug_render(value, &mut inner)?;
            out.push_str(&inner.to_uppercase());
            Ok(())
        }
    }

    static SHOUTY: Shouty = Shouty;

    /// Claims equality with everything.
    struct Agreeable;

    impl Operations for Agreeable {
        fn is_equal(&self, _this: &Value, _other: &Value) -> OpsResult {
            Ok(())
        }
    }

    static AGREEABLE: Agreeable = Agreeable;

    #[test]
    fn test_transition_from_undefined() {
        let v = Value::new();
        v.transition_type(ValueType::Int32).unwrap();
        assert_eq!(v.value_type(), ValueType::Int32);
        assert_eq!(v.as_i32(), Some(0));
    }

    #[test]
    fn test_transition_is_idempotent() {
        let v = Value::new();
        v.transition_type(ValueType::String).unwrap();
        v.assign_str("keep").unwrap();
        v.transition_type(ValueType::String).unwrap();
        assert_eq!(v.as_string().as_deref(), Some("keep"));
    }

    #[test]
    fn test_transition_to_object_allocates_empty_object() {
        let v = Value::new();
        v.transition_type(ValueType::Object).unwrap();
        assert_eq!(v.len(), Some(0));
        assert_eq!(v.to_string(), "{}");
    }

    #[test]
    fn test_object_transition_twice_keeps_pairs() {
        let v = Value::object();
        v.insert_pair(Value::int32(1), Value::int32(2)).unwrap();
        v.transition_type(ValueType::Object).unwrap();
        assert_eq!(v.len(), Some(1));
    }

    #[test]
    fn test_retyping_is_unimplemented() {
        let v = Value::int32(3);
        assert_eq!(
            v.transition_type(ValueType::String),
            Err(OpsError::Unimplemented)
        );
        assert_eq!(
            v.transition_type(ValueType::Undefined),
            Err(OpsError::Unimplemented)
        );
        assert_eq!(v.value_type(), ValueType::Int32);
    }

    #[test]
    fn test_assign_int32_into_string() {
        let v = Value::string("old");
        v.assign_int32(-2147483648).unwrap();
        assert_eq!(v.as_string().as_deref(), Some("-2147483648"));
        let payload = v.payload();
        match &*payload {
            Payload::String(buf) => assert!(buf.capacity() >= MAX_INT_STRING_LEN),
            other => panic!("expected string payload, got {:?}", other),
        }
    }

    #[test]
    fn test_assign_into_wrong_type() {
        let undefined = Value::new();
        assert_eq!(undefined.assign_int32(1), Err(OpsError::InvalidType));
        assert_eq!(undefined.assign_str("1"), Err(OpsError::InvalidType));

        let object = Value::object();
        assert_eq!(object.assign_int32(1), Err(OpsError::InvalidType));
        assert_eq!(object.assign_str("1"), Err(OpsError::InvalidType));
    }

    #[test]
    fn test_assign_str_parses_into_int32() {
        let v = Value::int32(0);
        v.assign_str("42").unwrap();
        assert_eq!(v.as_i32(), Some(42));

        assert_eq!(v.assign_str("42x"), Err(OpsError::InvalidInteger));
        assert_eq!(v.assign_str("2147483648"), Err(OpsError::InvalidInteger));
        // Failed parses leave the old value alone
        assert_eq!(v.as_i32(), Some(42));

        v.assign_str("  42  ").unwrap();
        assert_eq!(v.as_i32(), Some(42));
    }

    #[test]
    fn test_assign_str_copies_into_string() {
        let v = Value::string("");
        let source = String::from("copied");
        v.assign_str(&source).unwrap();
        drop(source);
        assert_eq!(v.as_string().as_deref(), Some("copied"));
    }

    #[test]
    fn test_insert_into_non_object() {
        let v = Value::int32(1);
        let key = Value::int32(2);
        let witness = key.share();
        assert_eq!(
            v.insert_pair(key, Value::int32(3)),
            Err(OpsError::InvalidType)
        );
        // The transferred key was released with the failed call
        assert_eq!(witness.ref_count(), 1);
    }

    #[test]
    fn test_insert_container_into_itself() {
        let top = Value::object();
        assert_eq!(
            top.insert_pair(top.share(), Value::int32(1)),
            Err(OpsError::Unimplemented)
        );
        assert_eq!(top.ref_count(), 1);
        assert_eq!(top.len(), Some(0));
    }

    #[test]
    fn test_insert_enclosing_object_into_nested_one() {
        let top = Value::object();
        let inner = Value::object();
        let deep = Value::string("deep");
        let witness = deep.share();
        inner.insert_pair(Value::int32(1), deep).unwrap();
        top.insert_pair(Value::string("inner"), inner.share()).unwrap();

        assert_eq!(
            inner.insert_pair(Value::string("back"), top.share()),
            Err(OpsError::Unimplemented)
        );
        assert_eq!(
            inner.insert_pair(top.share(), Value::int32(0)),
            Err(OpsError::Unimplemented)
        );
        assert_eq!(top.ref_count(), 1);
        assert_eq!(inner.len(), Some(1));
        assert_eq!(top.to_string(), r#"{"inner": {1: "deep"}}"#);

        top.delete();
        inner.delete();
        assert_eq!(witness.ref_count(), 1);
    }

    #[test]
    fn test_insert_unrelated_object_is_allowed() {
        let top = Value::object();
        let sibling = Value::object();
        sibling
            .insert_pair(Value::int32(1), Value::string("x"))
            .unwrap();
        top.insert_pair(Value::string("s"), sibling).unwrap();
        assert_eq!(top.to_string(), r#"{"s": {1: "x"}}"#);
    }

    #[test]
    fn test_equality_int32() {
        assert_eq!(Value::int32(4).equals(&Value::int32(4)), Ok(()));
        assert_eq!(
            Value::int32(4).equals(&Value::int32(5)),
            Err(OpsError::False)
        );
    }

    #[test]
    fn test_equality_string_is_bytewise() {
        assert_eq!(Value::string("a").equals(&Value::string("a")), Ok(()));
        assert_eq!(
            Value::string("a").equals(&Value::string("A")),
            Err(OpsError::False)
        );
    }

    #[test]
    fn test_equality_mixed_types_unimplemented() {
        let n = Value::int32(42);
        let s = Value::string("42");
        assert_eq!(n.equals(&s), Err(OpsError::Unimplemented));
        assert_eq!(s.equals(&n), Err(OpsError::Unimplemented));
    }

    #[test]
    fn test_equality_objects_unimplemented() {
        assert_eq!(
            Value::object().equals(&Value::object()),
            Err(OpsError::Unimplemented)
        );
        assert_eq!(
            Value::new().equals(&Value::new()),
            Err(OpsError::Unimplemented)
        );
    }

    #[test]
    fn test_equality_checks_both_directions() {
        let agreeable = Value::int32(1);
        agreeable.set_ops(&AGREEABLE);
        let plain = Value::int32(2);

        // One side says equal, the other says false: not equal
        assert_eq!(agreeable.ops().is_equal(&agreeable, &plain), Ok(()));
        assert_eq!(agreeable.equals(&plain), Err(OpsError::Unimplemented));
        assert_eq!(plain.equals(&agreeable), Err(OpsError::Unimplemented));

        let also_agreeable = Value::string("x");
        also_agreeable.set_ops(&AGREEABLE);
        assert_eq!(agreeable.equals(&also_agreeable), Ok(()));
    }

    #[test]
    fn test_render_scalars() {
        assert_eq!(Value::int32(-17).to_string(), "-17");
        assert_eq!(Value::string("hi").to_string(), "\"hi\"");
        assert_eq!(Value::string("say \"x\"").to_string(), "\"say \"x\"\"");
        assert_eq!(Value::new().to_string(), "\"undefined type\"");
    }

    #[test]
    fn test_render_uses_each_elements_own_table() {
        let top = Value::object();
        let key = Value::string("k");
        key.set_ops(&SHOUTY);
        top.insert_pair(key, Value::string("v")).unwrap();
        assert_eq!(top.to_string(), r#"{"K": "v"}"#);
    }

    #[test]
    fn test_with_ops_installs_table_at_creation() {
        let v = Value::with_ops(&SHOUTY);
        v.transition_type(ValueType::String).unwrap();
        v.assign_str("quiet").unwrap();
        assert_eq!(v.to_string(), "\"QUIET\"");
    }

    #[test]
    fn test_render_nested_objects() {
        let inner = Value::object();
        inner
            .insert_pair(Value::int32(1), Value::string("one"))
            .unwrap();
        let top = Value::object();
        top.insert_pair(Value::string("inner"), inner).unwrap();
        assert_eq!(top.to_string(), r#"{"inner": {1: "one"}}"#);
    }
}
