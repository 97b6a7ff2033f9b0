//! Value representation: a tagged union dispatched through a per-instance
//! operations table

mod display;
mod impls;
mod object;
mod ops;
mod parse;

pub use object::{Insertion, Object, Pair, INITIAL_CAPACITY};
pub use ops::{baseline, values_equal, DefaultOps, Operations, DEFAULT_OPS};
pub use parse::parse_int32;

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use tracing::trace;

/// Buffer capacity reserved when an integer is rendered into a string
/// value: the longest 64-bit decimal plus sign and terminator.
pub const MAX_INT_STRING_LEN: usize = 21;

/// The type tag of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// No type established yet
    Undefined,
    /// 32-bit signed integer
    Int32,
    /// Owned string buffer
    String,
    /// Ordered key/value container
    Object,
}

impl ValueType {
    /// Human-readable type name
    pub fn name(self) -> &'static str {
        match self {
            ValueType::Undefined => "undefined",
            ValueType::Int32 => "int32",
            ValueType::String => "string",
            ValueType::Object => "object",
        }
    }
}

/// The payload of a value; the variant is the value's type.
#[derive(Debug, Default)]
pub enum Payload {
    /// Nothing stored yet
    #[default]
    Undefined,
    /// Integer payload
    Int32(i32),
    /// String buffer, owned by the value
    String(String),
    /// Container, owned by the value
    Object(Object),
}

impl Payload {
    /// Type tag of this payload
    pub fn value_type(&self) -> ValueType {
        match self {
            Payload::Undefined => ValueType::Undefined,
            Payload::Int32(_) => ValueType::Int32,
            Payload::String(_) => ValueType::String,
            Payload::Object(_) => ValueType::Object,
        }
    }
}

/// Reserved per-value flags.
///
/// Carried and settable, but no operation consults them yet. `constant` is
/// meant to forbid mutation; `externally_owned` to mark string storage
/// borrowed from the embedder rather than owned by the value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValueFlags {
    /// Value must not be mutated
    pub constant: bool,
    /// Payload storage belongs to someone else
    pub externally_owned: bool,
}

struct Slot {
    payload: Payload,
    ops: &'static dyn Operations,
    flags: ValueFlags,
}

impl Drop for Slot {
    fn drop(&mut self) {
        trace!(ty = self.payload.value_type().name(), "releasing value");
    }
}

/// A reference-counted handle to a dynamically-typed value.
///
/// A fresh value has a reference count of 1 and type `Undefined`. The
/// count goes up only through [`Value::share`] and down through
/// [`Value::delete`] (or dropping the handle); the payload, and with it
/// every pair of an owned [`Object`], is released when it reaches zero.
///
/// Values are single-threaded: the handle is neither `Send` nor `Sync`.
pub struct Value {
    slot: Rc<RefCell<Slot>>,
}

impl Value {
    /// Create an `Undefined` value governed by the default operations.
    pub fn new() -> Self {
        Self::with_ops(&DEFAULT_OPS)
    }

    /// Create an `Undefined` value governed by its own operations table.
    pub fn with_ops(ops: &'static dyn Operations) -> Self {
        Self::from_payload(Payload::Undefined, ops)
    }

    pub(crate) fn from_payload(payload: Payload, ops: &'static dyn Operations) -> Self {
        Value {
            slot: Rc::new(RefCell::new(Slot {
                payload,
                ops,
                flags: ValueFlags::default(),
            })),
        }
    }

    /// Hand out another owning reference, incrementing the count.
    pub fn share(&self) -> Self {
        Value {
            slot: Rc::clone(&self.slot),
        }
    }

    /// Release this reference. The payload goes away with the last one.
    pub fn delete(self) {
        drop(self);
    }

    /// Number of live references to this value
    pub fn ref_count(&self) -> usize {
        Rc::strong_count(&self.slot)
    }

    /// Whether two handles refer to the same value
    pub fn same(a: &Value, b: &Value) -> bool {
        Rc::ptr_eq(&a.slot, &b.slot)
    }

    /// The operations table governing this instance
    pub fn ops(&self) -> &'static dyn Operations {
        self.slot.borrow().ops
    }

    /// Replace the operations table of this instance only.
    pub fn set_ops(&self, ops: &'static dyn Operations) {
        self.slot.borrow_mut().ops = ops;
    }

    /// Current type tag
    pub fn value_type(&self) -> ValueType {
        self.slot.borrow().payload.value_type()
    }

    /// Reserved flags
    pub fn flags(&self) -> ValueFlags {
        self.slot.borrow().flags
    }

    /// Overwrite the reserved flags.
    pub fn set_flags(&self, flags: ValueFlags) {
        self.slot.borrow_mut().flags = flags;
    }

    /// Borrow the payload.
    ///
    /// Panics if the payload is currently borrowed mutably, which only an
    /// operations table running on this same value can cause.
    pub fn payload(&self) -> Ref<'_, Payload> {
        Ref::map(self.slot.borrow(), |slot| &slot.payload)
    }

    /// Borrow the payload mutably. Intended for operations tables.
    pub fn payload_mut(&self) -> RefMut<'_, Payload> {
        RefMut::map(self.slot.borrow_mut(), |slot| &mut slot.payload)
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::new()
    }
}
