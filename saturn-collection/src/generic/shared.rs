//! Identity-compared element handles.
//!
//! A [`Shared<T>`] lets a collection reference an element instead of owning a copy of it.
//! Handles compare by identity, so `contains`/`index_of` on a collection of handles only match
//! the exact instance that was inserted.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

/// A cheaply clonable, identity-compared handle to a `T`.
///
/// Cloning a `Shared` clones the handle, never the value. Two handles are equal only if they
/// point to the same allocation; use [`same_value`](Shared::same_value) to compare the values.
///
/// # Examples
///
/// ```rust
/// use saturn_collection::prelude::*;
///
/// let original = Shared::new(String::from("example1"));
/// let copy = Shared::new(String::from("example1"));
///
/// let list = ImmutableList::new([original.clone()]);
/// assert!(list.contains(&original));
/// assert!(!list.contains(&copy));
/// assert!(original.same_value(&copy));
/// ```
pub struct Shared<T>(Arc<T>);

impl<T> Shared<T> {
    pub fn new(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Wraps an existing `Arc`, keeping its identity.
    pub fn from_arc(value: Arc<T>) -> Self {
        Self(value)
    }

    /// Returns `true` if both handles hold equal values, regardless of identity.
    pub fn same_value(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        *self.0 == *other.0
    }

    /// Returns the underlying `Arc`.
    pub fn as_arc(&self) -> &Arc<T> {
        &self.0
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> PartialEq for Shared<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Eq for Shared<T> {}

impl<T> Hash for Shared<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.0).hash(state);
    }
}

impl<T> Deref for Shared<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> From<T> for Shared<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Shared<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        T::serialize(&self.0, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Shared<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_equality_is_identity() {
        let a = Shared::new(5);
        let b = Shared::new(5);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
        assert!(a.same_value(&b));
    }

    #[test]
    fn test_hash_follows_identity() {
        let a = Shared::new("value");
        let b = Shared::new("value");

        let mut set = HashSet::new();
        set.insert(a.clone());
        set.insert(a.clone());
        set.insert(b);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_from_arc_keeps_identity() {
        let arc = Arc::new(1u8);
        let shared = Shared::from_arc(Arc::clone(&arc));
        assert!(Arc::ptr_eq(shared.as_arc(), &arc));
        assert_eq!(*shared, 1);

        // Wrapping the same `Arc` twice yields equal handles.
        assert_eq!(shared, Shared::from_arc(Arc::clone(&arc)));
    }

    #[test]
    fn test_from_value_allocates_new_identity() {
        let value = Shared::from(7u8);
        let arc_value: Shared<Arc<u8>> = Shared::from(Arc::new(7u8));
        assert_eq!(*value, 7);
        assert_eq!(**arc_value, 7);
        assert_ne!(value, Shared::from(7u8));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serializes_as_value() {
        let shared = Shared::new(vec![1, 2]);
        assert_eq!(serde_json::to_string(&shared).unwrap(), "[1,2]");
    }
}
