/// Declares a domain-specific collection type backed by
/// [`ImmutableList`](crate::generic::immutable_list::ImmutableList).
///
/// The generated type is a newtype over `ImmutableList<T>` that implements
/// [`Collection`](crate::generic::collection::Collection). Every transformation that keeps the
/// element type (`filter`, `reverse`, `sort_asc_by`, `sort_desc_by`, `merge`, `slice`) returns the
/// declared type again, and it can be used as a [`map_to`](crate::generic::collection::Collection::map_to)
/// destination.
///
/// The macro derives `Clone` and `PartialEq`, so the element type must implement both. Any other
/// attribute (docs, `Debug`, serde derives with `#[serde(transparent)]`, ...) is forwarded onto
/// the struct.
///
/// The element type must be at least as visible as the declared collection, since it appears in
/// the generated `Collection` impl and constructors.
///
/// # Examples
///
/// ```rust
/// use saturn_collection::declare_collection;
/// use saturn_collection::prelude::*;
///
/// #[derive(Clone, Debug, PartialEq)]
/// pub struct Asset(u64);
///
/// declare_collection! {
///     /// Assets held by an account.
///     #[derive(Debug)]
///     pub struct AssetCollection(Asset);
/// }
///
/// let assets = AssetCollection::new([Asset(3), Asset(1), Asset(2)]);
/// let sorted: AssetCollection = assets.sort_asc_by(|asset| asset.0);
///
/// assert_eq!(sorted.first(), Some(&Asset(1)));
/// assert_eq!(assets.first(), Some(&Asset(3)));
/// ```
#[macro_export]
macro_rules! declare_collection {
    ($(#[$meta:meta])* $vis:vis struct $Name:ident($T:ty);) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq)]
        $vis struct $Name($crate::generic::immutable_list::ImmutableList<$T>);

        impl $Name {
            /// Creates a collection holding `elements` in iteration order.
            #[allow(dead_code)]
            $vis fn new<I>(elements: I) -> Self
            where
                I: IntoIterator<Item = $T>,
            {
                Self($crate::generic::immutable_list::ImmutableList::new(elements))
            }

            /// Returns the underlying list.
            #[allow(dead_code)]
            $vis fn into_list(self) -> $crate::generic::immutable_list::ImmutableList<$T> {
                self.0
            }
        }

        impl $crate::generic::collection::Collection for $Name {
            type Item = $T;

            fn from_elements(elements: ::std::vec::Vec<$T>) -> Self {
                Self(<$crate::generic::immutable_list::ImmutableList<$T> as $crate::generic::collection::Collection>::from_elements(elements))
            }

            fn as_slice(&self) -> &[$T] {
                $crate::generic::collection::Collection::as_slice(&self.0)
            }
        }

        impl ::core::default::Default for $Name {
            fn default() -> Self {
                Self(::core::default::Default::default())
            }
        }

        impl ::core::iter::FromIterator<$T> for $Name {
            fn from_iter<I: IntoIterator<Item = $T>>(iter: I) -> Self {
                Self::new(iter)
            }
        }

        impl ::core::convert::From<::std::vec::Vec<$T>> for $Name {
            fn from(elements: ::std::vec::Vec<$T>) -> Self {
                <Self as $crate::generic::collection::Collection>::from_elements(elements)
            }
        }

        impl ::core::convert::From<$crate::generic::immutable_list::ImmutableList<$T>> for $Name {
            fn from(list: $crate::generic::immutable_list::ImmutableList<$T>) -> Self {
                Self(list)
            }
        }

        impl ::core::convert::From<$Name> for $crate::generic::immutable_list::ImmutableList<$T> {
            fn from(collection: $Name) -> Self {
                collection.0
            }
        }

        impl ::core::convert::AsRef<[$T]> for $Name {
            fn as_ref(&self) -> &[$T] {
                $crate::generic::collection::Collection::as_slice(&self.0)
            }
        }

        impl ::core::iter::IntoIterator for $Name {
            type Item = $T;
            type IntoIter = ::std::vec::IntoIter<$T>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a> ::core::iter::IntoIterator for &'a $Name {
            type Item = &'a $T;
            type IntoIter = ::core::slice::Iter<'a, $T>;

            fn into_iter(self) -> Self::IntoIter {
                (&self.0).into_iter()
            }
        }
    };
}

/// Builds a collection from a list of elements, the way `vec!` builds a `Vec`.
///
/// The concrete collection type is inferred from context.
///
/// # Examples
///
/// ```rust
/// use saturn_collection::collection;
/// use saturn_collection::prelude::*;
///
/// let list: ImmutableList<u8> = collection![1, 2, 3];
/// assert_eq!(list.count(), 3);
///
/// let empty: ImmutableList<u8> = collection![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! collection {
    () => {
        <_ as $crate::generic::collection::Collection>::from_elements(::std::vec::Vec::new())
    };
    ($($element:expr),+ $(,)?) => {
        <_ as $crate::generic::collection::Collection>::from_elements(::std::vec![$($element),+])
    };
}
