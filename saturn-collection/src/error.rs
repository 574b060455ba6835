use thiserror::Error;

/// Errors produced by [`Collection`](crate::generic::collection::Collection) operations.
///
/// Structural operations never fail; only rendering elements into plain values can.
#[derive(Debug, Error)]
pub enum CollectionError {
    #[error("Collection element could not be serialized: {0}")]
    Serialization(#[from] serde_json::Error),
}
