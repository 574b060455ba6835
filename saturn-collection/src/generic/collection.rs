//! The capability contract shared by every immutable collection type.
//!
//! This module provides [`Collection`], a trait describing the full read-only query and
//! transformation surface of a collection. Concrete types only supply storage access and a
//! constructor; every operation is provided on top of those two methods, so code can be
//! written against the trait rather than a concrete type.

use std::ops::Range;

#[cfg(feature = "serde")]
use crate::error::CollectionError;

/// An immutable, ordered collection of homogeneous elements.
///
/// Implementors provide [`from_elements`](Collection::from_elements) and
/// [`as_slice`](Collection::as_slice). Operations that return "a collection of the same element
/// type" construct their result through `Self::from_elements`, so the result is always the
/// concrete type of the receiver. [`map_to`](Collection::map_to) is the only operation that
/// changes the element type or the concrete type, and the destination must be named by the
/// caller.
///
/// The receiver is never modified: every transformation builds a new value.
///
/// # Examples
///
/// ```rust
/// use saturn_collection::prelude::*;
///
/// fn labels<C: Collection<Item = u32>>(collection: &C) -> ImmutableList<String> {
///     collection
///         .filter(|value, _| value % 2 == 0)
///         .map_to(|value| format!("#{value}"))
/// }
///
/// let numbers: ImmutableList<u32> = ImmutableList::new([1, 2, 3, 4]);
/// assert_eq!(labels(&numbers).as_slice(), &["#2".to_string(), "#4".to_string()]);
/// ```
pub trait Collection: Sized {
    /// The element type.
    type Item;

    /// Builds a collection of this concrete type from an ordered list of elements.
    ///
    /// Every collection type must be constructible from its elements alone; this is what keeps
    /// transformations closed over the receiver's type.
    fn from_elements(elements: Vec<Self::Item>) -> Self;

    /// Returns the elements in positional order.
    fn as_slice(&self) -> &[Self::Item];

    /// Returns an iterator over the elements in positional order.
    fn iter(&self) -> std::slice::Iter<'_, Self::Item> {
        self.as_slice().iter()
    }

    /// Copies the elements into a new `Vec`, one level deep.
    fn to_vec(&self) -> Vec<Self::Item>
    where
        Self::Item: Clone,
    {
        self.as_slice().to_vec()
    }

    /// Renders every element as a plain structured value.
    ///
    /// Nested collections become nested arrays; any other element is rendered through its own
    /// `Serialize` implementation.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Serialization`] if an element fails to serialize.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_collection::prelude::*;
    /// use serde_json::json;
    ///
    /// let nested = ImmutableList::new([ImmutableList::new([1, 2]), ImmutableList::new([3])]);
    /// assert_eq!(nested.to_array().unwrap(), vec![json!([1, 2]), json!([3])]);
    /// ```
    #[cfg(feature = "serde")]
    fn to_array(&self) -> Result<Vec<serde_json::Value>, CollectionError>
    where
        Self::Item: serde::Serialize,
    {
        self.iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| {
                tracing::debug!(error = %err, "failed to render collection element");
                CollectionError::from(err)
            })
    }

    /// Returns the first element, or `None` if the collection is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_collection::prelude::*;
    ///
    /// assert_eq!(ImmutableList::new([7, 8]).first(), Some(&7));
    /// assert_eq!(ImmutableList::<u8>::default().first(), None);
    /// ```
    fn first(&self) -> Option<&Self::Item> {
        self.as_slice().first()
    }

    /// Returns the last element, or `None` if the collection is empty.
    fn last(&self) -> Option<&Self::Item> {
        self.as_slice().last()
    }

    /// Returns the element at the zero-based `index`, or `None` if out of range.
    fn get(&self, index: usize) -> Option<&Self::Item> {
        self.as_slice().get(index)
    }

    /// Returns `true` if the collection has no elements.
    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Returns the number of elements.
    fn count(&self) -> usize {
        self.as_slice().len()
    }

    /// Calls `visitor` with every element and its zero-based index, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_collection::prelude::*;
    ///
    /// let mut seen = Vec::new();
    /// ImmutableList::new(["a", "b"]).each(|value, index| seen.push((index, *value)));
    /// assert_eq!(seen, vec![(0, "a"), (1, "b")]);
    /// ```
    fn each<F>(&self, mut visitor: F)
    where
        F: FnMut(&Self::Item, usize),
    {
        for (index, element) in self.iter().enumerate() {
            visitor(element, index);
        }
    }

    /// Returns `true` if `predicate` holds for every element.
    ///
    /// Stops at the first element for which `predicate` returns `false`. An empty collection
    /// yields `true`.
    fn for_all<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&Self::Item, usize) -> bool,
    {
        self.iter()
            .enumerate()
            .all(|(index, element)| predicate(element, index))
    }

    /// Returns a new collection with the elements in reverse order.
    fn reverse(&self) -> Self
    where
        Self::Item: Clone,
    {
        Self::from_elements(self.iter().rev().cloned().collect())
    }

    /// Returns a new collection ordered by ascending `key(element)`.
    ///
    /// The sort is stable: elements with equal keys keep their original relative order. `key`
    /// is called once per element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_collection::prelude::*;
    ///
    /// let words = ImmutableList::new(["ccc", "a", "bb", "d"]);
    /// let sorted = words.sort_asc_by(|word| word.len());
    /// assert_eq!(sorted.as_slice(), &["a", "d", "bb", "ccc"]);
    /// ```
    fn sort_asc_by<K, F>(&self, key: F) -> Self
    where
        Self::Item: Clone,
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        let mut sorted = self.to_vec();
        sorted.sort_by_cached_key(key);
        Self::from_elements(sorted)
    }

    /// Returns a new collection ordered by descending `key(element)`.
    ///
    /// The sort is stable: elements with equal keys keep their original relative order, the
    /// same as [`sort_asc_by`](Collection::sort_asc_by).
    fn sort_desc_by<K, F>(&self, mut key: F) -> Self
    where
        Self::Item: Clone,
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        let mut sorted = self.to_vec();
        sorted.sort_by_cached_key(|element| std::cmp::Reverse(key(element)));
        Self::from_elements(sorted)
    }

    /// Returns a new collection with the receiver's elements followed by `other`'s.
    ///
    /// `other` may be any collection with the same element type. Its elements are appended
    /// as they are; nested collections are not flattened.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_collection::prelude::*;
    ///
    /// let merged = ImmutableList::new([1, 2]).merge(&ImmutableList::new([3]));
    /// assert_eq!(merged.as_slice(), &[1, 2, 3]);
    /// ```
    fn merge<C>(&self, other: &C) -> Self
    where
        C: Collection<Item = Self::Item>,
        Self::Item: Clone,
    {
        let mut merged = Vec::with_capacity(self.count() + other.count());
        merged.extend_from_slice(self.as_slice());
        merged.extend_from_slice(other.as_slice());

        tracing::trace!(
            left = self.count(),
            right = other.count(),
            "merged collections"
        );

        Self::from_elements(merged)
    }

    /// Applies `transform` to every element, in order, and collects the results into the
    /// explicitly chosen collection type `C`.
    ///
    /// `C` must itself be a [`Collection`]; anything else is rejected at compile time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_collection::prelude::*;
    ///
    /// let lengths = ImmutableList::new(["one", "three"]).map_to::<ImmutableList<usize>, _>(|s| s.len());
    /// assert_eq!(lengths.as_slice(), &[3, 5]);
    /// ```
    ///
    /// A destination that is not a collection does not compile:
    ///
    /// ```compile_fail
    /// use saturn_collection::prelude::*;
    ///
    /// let lengths = ImmutableList::new(["one"]).map_to::<Vec<usize>, _>(|s| s.len());
    /// ```
    fn map_to<C, F>(&self, transform: F) -> C
    where
        C: Collection,
        F: FnMut(&Self::Item) -> C::Item,
    {
        let mapped: Vec<C::Item> = self.iter().map(transform).collect();

        tracing::trace!(
            count = mapped.len(),
            target = std::any::type_name::<C>(),
            "mapped collection"
        );

        C::from_elements(mapped)
    }

    /// Fallible counterpart of [`map_to`](Collection::map_to).
    ///
    /// Stops at the first element for which `transform` fails and returns that error.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `transform`.
    fn try_map_to<C, E, F>(&self, transform: F) -> Result<C, E>
    where
        C: Collection,
        F: FnMut(&Self::Item) -> Result<C::Item, E>,
    {
        let mapped = self.iter().map(transform).collect::<Result<Vec<_>, E>>()?;

        tracing::trace!(
            count = mapped.len(),
            target = std::any::type_name::<C>(),
            "mapped collection"
        );

        Ok(C::from_elements(mapped))
    }

    /// Returns a new collection with the elements for which `predicate` returns `true`, in
    /// their original relative order.
    fn filter<F>(&self, mut predicate: F) -> Self
    where
        Self::Item: Clone,
        F: FnMut(&Self::Item, usize) -> bool,
    {
        let filtered: Vec<Self::Item> = self
            .iter()
            .enumerate()
            .filter(|(index, element)| predicate(*element, *index))
            .map(|(_, element)| element.clone())
            .collect();

        tracing::trace!(
            kept = filtered.len(),
            total = self.count(),
            "filtered collection"
        );

        Self::from_elements(filtered)
    }

    /// Returns `true` if some element equals `element`.
    fn contains(&self, element: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.as_slice().contains(element)
    }

    /// Returns the position of the first element equal to `element`, or `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_collection::prelude::*;
    ///
    /// let letters = ImmutableList::new(['a', 'b']);
    /// assert_eq!(letters.index_of(&'a'), Some(0));
    /// assert_eq!(letters.index_of(&'z'), None);
    /// ```
    fn index_of(&self, element: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        self.iter().position(|candidate| candidate == element)
    }

    /// Returns a new collection over a sub-range of the elements.
    ///
    /// * A negative `offset` counts back from the end, and stops at the start.
    /// * `None` for `length` takes everything up to the end.
    /// * A negative `length` stops that many elements before the end.
    /// * Ranges that fall outside the collection produce an empty collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_collection::prelude::*;
    ///
    /// let values = ImmutableList::new([1, 2, 3, 4, 5]);
    /// assert_eq!(values.slice(1, Some(2)).as_slice(), &[2, 3]);
    /// assert_eq!(values.slice(-2, None).as_slice(), &[4, 5]);
    /// assert_eq!(values.slice(1, Some(-1)).as_slice(), &[2, 3, 4]);
    /// assert!(values.slice(9, Some(3)).is_empty());
    /// ```
    fn slice(&self, offset: isize, length: Option<isize>) -> Self
    where
        Self::Item: Clone,
    {
        let range = slice_range(self.count(), offset, length);

        tracing::trace!(
            offset,
            ?length,
            start = range.start,
            end = range.end,
            "sliced collection"
        );

        Self::from_elements(self.as_slice()[range].to_vec())
    }

    /// Renders the collection as a JSON array, in element order.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Serialization`] if an element fails to serialize.
    #[cfg(feature = "serde")]
    fn json_serialize(&self) -> Result<serde_json::Value, CollectionError>
    where
        Self::Item: serde::Serialize,
    {
        Ok(serde_json::Value::Array(self.to_array()?))
    }
}

/// Resolves an `(offset, length)` pair into a range within `0..len`.
pub(crate) fn slice_range(len: usize, offset: isize, length: Option<isize>) -> Range<usize> {
    let len_signed = isize::try_from(len).unwrap_or(isize::MAX);

    let start = if offset < 0 {
        len_signed.saturating_add(offset).max(0)
    } else {
        offset.min(len_signed)
    };

    let end = match length {
        None => len_signed,
        Some(length) if length < 0 => len_signed.saturating_add(length).max(start),
        Some(length) => start.saturating_add(length).min(len_signed),
    };

    // Both bounds are within 0..=len here.
    start as usize..end.max(start) as usize
}
