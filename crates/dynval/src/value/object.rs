//! Ordered key/value container built from values

use std::alloc::{handle_alloc_error, Layout};

use super::ops::values_equal;
use super::Value;

/// Capacity of the first allocation; later growth doubles.
pub const INITIAL_CAPACITY: usize = 4;

/// One key/value entry of an [`Object`].
#[derive(Debug)]
pub struct Pair {
    key: Value,
    val: Value,
}

impl Pair {
    /// The pair's key
    pub fn key(&self) -> &Value {
        &self.key
    }

    /// The pair's value
    pub fn val(&self) -> &Value {
        &self.val
    }
}

/// Where [`Object::insert`] put a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// New key, stored at the end
    Appended(usize),
    /// Existing key; the old pair at this position was released
    Replaced(usize),
}

/// An insertion-ordered sequence of pairs with unique keys.
///
/// Key uniqueness follows [`values_equal`], not identity or hashing, so
/// lookup is a linear scan. The object owns every key and value it holds.
#[derive(Debug, Default)]
pub struct Object {
    pairs: Vec<Pair>,
    capacity: usize,
}

impl Object {
    /// Create an empty object. Nothing is allocated until the first insert.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the object holds no pairs
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Slots allocated for pairs: 0, 4, 8, 16, ...
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate pairs in storage order
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.pairs.iter().map(|pair| (&pair.key, &pair.val))
    }

    /// Get a pair by position
    pub fn get_index(&self, index: usize) -> Option<&Pair> {
        self.pairs.get(index)
    }

    /// Position of the pair whose key equals `key`
    pub fn position(&self, key: &Value) -> Option<usize> {
        self.pairs
            .iter()
            .position(|pair| values_equal(&pair.key, key).is_ok())
    }

    /// Get the value stored under `key`
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.position(key).map(|index| &self.pairs[index].val)
    }

    /// Take ownership of `key` and `val`.
    ///
    /// An equal key already present has its pair replaced at the same
    /// position, and the old key and value are released. Otherwise the pair
    /// is appended.
    pub fn insert(&mut self, key: Value, val: Value) -> Insertion {
        if let Some(index) = self.position(&key) {
            let old = std::mem::replace(&mut self.pairs[index], Pair { key, val });
            drop(old);
            return Insertion::Replaced(index);
        }

        self.grow_if_full();
        self.pairs.push(Pair { key, val });
        Insertion::Appended(self.pairs.len() - 1)
    }

    fn grow_if_full(&mut self) {
        if self.pairs.len() < self.capacity {
            return;
        }
        let new_capacity = if self.capacity == 0 {
            INITIAL_CAPACITY
        } else {
            self.capacity * 2
        };
        if self
            .pairs
            .try_reserve_exact(new_capacity - self.pairs.len())
            .is_err()
        {
            let layout = Layout::array::<Pair>(new_capacity).unwrap_or(Layout::new::<Pair>());
            handle_alloc_error(layout);
        }
        self.capacity = new_capacity;
    }
}
