//! Immutable list implementation backing every collection type.
//!
//! This module provides [`ImmutableList`], a fixed-length, heap-backed sequence that implements
//! the [`Collection`] contract. Domain-specific collections declared with
//! [`declare_collection!`](crate::declare_collection) wrap it.

use crate::generic::collection::Collection;

/// A fixed-length, ordered sequence that is never modified after construction.
///
/// `ImmutableList` owns its elements. Every operation from [`Collection`] returns a new list
/// and leaves the receiver untouched. Two lists are equal when they hold equal elements in the
/// same order.
///
/// # Type Parameters
///
/// * `T` - The element type. Transformations that copy elements into a new list require
///   `T: Clone`; store `Arc`s or [`Shared`](crate::generic::shared::Shared) handles to share
///   elements instead of duplicating them.
///
/// # Examples
///
/// ```rust
/// use saturn_collection::prelude::*;
///
/// let list = ImmutableList::new([3, 1, 2]);
/// let sorted = list.sort_asc_by(|value| *value);
///
/// assert_eq!(sorted.as_slice(), &[1, 2, 3]);
/// assert_eq!(list.as_slice(), &[3, 1, 2]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ImmutableList<T> {
    elements: Box<[T]>,
}

impl<T> Default for ImmutableList<T> {
    fn default() -> Self {
        Self {
            elements: Box::default(),
        }
    }
}

impl<T> ImmutableList<T> {
    /// Creates a list holding `elements` in iteration order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_collection::prelude::*;
    ///
    /// let list = ImmutableList::new(vec!["a", "b"]);
    /// assert_eq!(list.count(), 2);
    /// ```
    pub fn new<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        elements.into_iter().collect()
    }

    /// Consumes the list and returns its elements.
    pub fn into_vec(self) -> Vec<T> {
        self.elements.into_vec()
    }
}

impl<T> Collection for ImmutableList<T> {
    type Item = T;

    fn from_elements(elements: Vec<T>) -> Self {
        Self {
            elements: elements.into_boxed_slice(),
        }
    }

    fn as_slice(&self) -> &[T] {
        &self.elements
    }
}

impl<T> FromIterator<T> for ImmutableList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_elements(iter.into_iter().collect())
    }
}

impl<T> From<Vec<T>> for ImmutableList<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_elements(elements)
    }
}

impl<T> AsRef<[T]> for ImmutableList<T> {
    fn as_ref(&self) -> &[T] {
        &self.elements
    }
}

impl<T> IntoIterator for ImmutableList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ImmutableList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generic::shared::Shared;
    use std::sync::Arc;

    #[derive(Clone, Debug, PartialEq)]
    struct Entity {
        property: &'static str,
    }

    fn entity(property: &'static str) -> Entity {
        Entity { property }
    }

    #[test]
    fn test_default_is_empty() {
        let list = ImmutableList::<u32>::default();
        assert!(list.is_empty());
        assert_eq!(list.count(), 0);
        assert_eq!(list.first(), None);
        assert_eq!(list.last(), None);
    }

    #[test]
    fn test_first_last_count() {
        let list = ImmutableList::new([entity("example1"), entity("example2"), entity("example3")]);
        assert_eq!(list.first(), Some(&entity("example1")));
        assert_eq!(list.last(), Some(&entity("example3")));
        assert_eq!(list.count(), 3);
        assert!(!list.is_empty());
        assert_eq!(list.get(1), Some(&entity("example2")));
        assert_eq!(list.get(3), None);
    }

    #[test]
    fn test_each_passes_index() {
        let list = ImmutableList::new(["x", "y", "z"]);
        let mut visited = Vec::new();
        list.each(|value, index| visited.push((index, *value)));
        assert_eq!(visited, vec![(0, "x"), (1, "y"), (2, "z")]);
    }

    #[test]
    fn test_for_all_short_circuits() {
        let list = ImmutableList::new([1, 2, 3, 4]);
        let mut calls = 0;
        let all_small = list.for_all(|value, _| {
            calls += 1;
            *value < 2
        });
        assert!(!all_small);
        assert_eq!(calls, 2);

        assert!(list.for_all(|value, index| *value == index + 1));
        assert!(ImmutableList::<u8>::default().for_all(|_, _| false));
    }

    #[test]
    fn test_reverse() {
        let list = ImmutableList::new([1, 2, 3]);
        let reversed = list.reverse();
        assert_eq!(reversed.as_slice(), &[3, 2, 1]);
        assert_eq!(list.as_slice(), &[1, 2, 3]);
        assert_eq!(reversed.reverse(), list);
    }

    #[test]
    fn test_sort_is_stable_both_ways() {
        let list = ImmutableList::new([(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')]);

        let asc = list.sort_asc_by(|(key, _)| *key);
        assert_eq!(asc.as_slice(), &[(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);

        let desc = list.sort_desc_by(|(key, _)| *key);
        assert_eq!(desc.as_slice(), &[(2, 'a'), (2, 'c'), (1, 'b'), (1, 'd')]);
    }

    #[test]
    fn test_merge_keeps_nested_collections() {
        let left = ImmutableList::new([ImmutableList::new([1]), ImmutableList::new([2, 3])]);
        let right = ImmutableList::new([ImmutableList::new([4, 5])]);

        let merged = left.merge(&right);
        assert_eq!(merged.count(), 3);
        assert_eq!(merged.get(2), Some(&ImmutableList::new([4, 5])));
    }

    #[test]
    fn test_map_to_changes_element_type() {
        let list = ImmutableList::new([entity("a"), entity("bb")]);
        let lengths: ImmutableList<usize> = list.map_to(|e| e.property.len());
        assert_eq!(lengths.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_try_map_to_stops_on_first_error() {
        let list = ImmutableList::new(["1", "x", "3", "y"]);
        let mut attempts = 0;
        let parsed: Result<ImmutableList<u8>, _> = list.try_map_to(|raw| {
            attempts += 1;
            raw.parse::<u8>()
        });
        assert!(parsed.is_err());
        assert_eq!(attempts, 2);

        let parsed: Result<ImmutableList<u8>, std::num::ParseIntError> =
            ImmutableList::new(["1", "2"]).try_map_to(|raw| raw.parse());
        assert_eq!(parsed.unwrap().as_slice(), &[1, 2]);
    }

    #[test]
    fn test_filter_by_index() {
        let list = ImmutableList::new([entity("example1"), entity("example2"), entity("example3")]);
        let filtered = list.filter(|_, index| [1, 2].contains(&index));
        assert_eq!(
            filtered,
            ImmutableList::new([entity("example2"), entity("example3")])
        );
        assert_eq!(list.count(), 3);
    }

    #[test]
    fn test_contains_and_index_of_by_value() {
        let list = ImmutableList::new([entity("example1"), entity("example2")]);
        assert!(list.contains(&entity("example1")));
        assert!(!list.contains(&entity("missing")));
        assert_eq!(list.index_of(&entity("example1")), Some(0));
        assert_eq!(list.index_of(&entity("missing")), None);
    }

    #[test]
    fn test_contains_and_index_of_by_identity() {
        let first = Shared::new(entity("example1"));
        let second = Shared::new(entity("example2"));
        let list = ImmutableList::new([first.clone(), second.clone()]);

        assert!(list.contains(&first));
        assert!(!list.contains(&Shared::new(entity("example1"))));
        assert_eq!(list.index_of(&second), Some(1));
        assert_eq!(list.index_of(&Shared::new(entity("example2"))), None);
    }

    #[test]
    fn test_slice() {
        let list = ImmutableList::new([entity("example1"), entity("example2"), entity("example3")]);
        assert_eq!(list.slice(2, None), ImmutableList::new([entity("example3")]));
        assert_eq!(list.slice(5, Some(50)), ImmutableList::default());
        assert_eq!(list.slice(-1, None), ImmutableList::new([entity("example3")]));
    }

    #[test]
    fn test_transformations_share_arc_elements() {
        let shared = Arc::new(entity("example1"));
        let list = ImmutableList::new([Arc::clone(&shared)]);
        let reversed = list.reverse();

        assert!(Arc::ptr_eq(&reversed.as_slice()[0], &shared));
        assert_eq!(Arc::strong_count(&shared), 3);
    }

    #[test]
    fn test_iterators() {
        let list = ImmutableList::new([1, 2, 3]);
        let doubled: Vec<_> = (&list).into_iter().map(|v| v * 2).collect();
        assert_eq!(doubled, vec![2, 4, 6]);

        let owned: Vec<_> = list.into_iter().collect();
        assert_eq!(owned, vec![1, 2, 3]);
    }

    #[test]
    fn test_from_conversions() {
        let from_vec = ImmutableList::from(vec![1, 2]);
        let collected: ImmutableList<_> = (1..=2).collect();
        assert_eq!(from_vec, collected);
        let slice: &[i32] = from_vec.as_ref();
        assert_eq!(slice, &[1, 2]);
        assert_eq!(from_vec.into_vec(), vec![1, 2]);
    }

    #[test]
    fn test_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ImmutableList<Arc<Entity>>>();
        assert_send_sync::<ImmutableList<Shared<Entity>>>();
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let list = ImmutableList::new([1, 2, 3]);
        let encoded = serde_json::to_string(&list).unwrap();
        assert_eq!(encoded, "[1,2,3]");

        let decoded: ImmutableList<u32> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, list);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_serialize_nested() {
        let nested = ImmutableList::new([ImmutableList::new(["a"]), ImmutableList::default()]);
        assert_eq!(
            nested.json_serialize().unwrap(),
            serde_json::json!([["a"], []])
        );
    }
}
