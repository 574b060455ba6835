//! # Saturn Collection
//!
//! Immutable, fluent collections with value semantics.
//!
//! A collection wraps a fixed, ordered sequence of homogeneous elements and exposes read-only
//! query and transformation operations (map, filter, sort, merge, slice, search). Every
//! transformation returns a **new** collection; the receiver is never modified.
//!
//! ## Features
//!
//! - **[`Collection`]** – the operation contract, written once as provided trait methods
//! - **[`ImmutableList<T>`]** – the generic implementation every collection is backed by
//! - **[`declare_collection!`]** – declare a domain-specific collection type that stays itself through
//!   `filter`, `reverse`, `sort_*_by`, `merge` and `slice`
//! - **[`Shared<T>`]** – identity-compared element handle for reference semantics
//! - **[`collection!`]** – `vec!`-style constructor for any collection type
//!
//! ## Cargo features
//!
//! - `serde` *(default)* – `Serialize`/`Deserialize` for lists and handles, plus
//!   `to_array`/`json_serialize`
//!
//! ## Quick Examples
//!
//! ### Querying an ImmutableList
//!
//! ```rust
//! use saturn_collection::prelude::*;
//!
//! let list = ImmutableList::new([5, 3, 8, 1]);
//!
//! let top_two = list.sort_desc_by(|value| *value).slice(0, Some(2));
//! assert_eq!(top_two.as_slice(), &[8, 5]);
//!
//! assert_eq!(list.first(), Some(&5));
//! assert_eq!(list.index_of(&8), Some(2));
//! assert!(list.for_all(|value, _| *value > 0));
//! ```
//!
//! ### Declaring a domain collection
//!
//! ```rust
//! use saturn_collection::declare_collection;
//! use saturn_collection::prelude::*;
//!
//! #[derive(Clone, Debug, PartialEq, serde::Serialize)]
//! pub struct Entity {
//!     property: String,
//! }
//!
//! declare_collection! {
//!     #[derive(Debug, serde::Serialize)]
//!     #[serde(transparent)]
//!     pub struct EntityCollection(Entity);
//! }
//!
//! let entities = EntityCollection::new(["example2", "example1"].map(|property| Entity {
//!     property: property.to_string(),
//! }));
//!
//! // Still an `EntityCollection` after sorting.
//! let sorted: EntityCollection = entities.sort_asc_by(|entity| entity.property.clone());
//!
//! assert_eq!(
//!     sorted.json_serialize().unwrap().to_string(),
//!     r#"[{"property":"example1"},{"property":"example2"}]"#
//! );
//! ```
//!
//! [`Collection`]: generic::collection::Collection
//! [`ImmutableList<T>`]: generic::immutable_list::ImmutableList
//! [`Shared<T>`]: generic::shared::Shared
//! [`declare_collection!`]: macro@declare_collection
//! [`collection!`]: macro@collection

#[cfg(feature = "serde")]
pub mod error;
pub mod generic;
pub mod macros;
pub mod prelude;
