//! Everything needed to build and query collections.
//!
//! Import this as `use saturn_collection::prelude::*` to bring the [`Collection`] operations
//! into scope together with the concrete types.

pub use crate::generic::collection::Collection;
pub use crate::generic::immutable_list::ImmutableList;
pub use crate::generic::shared::Shared;

#[cfg(feature = "serde")]
pub use crate::error::CollectionError;
