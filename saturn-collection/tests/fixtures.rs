//! Entity fixtures shared by the integration test-suite.

use saturn_collection::declare_collection;
use saturn_collection::prelude::*;

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Entity {
    pub property: String,
}

impl Entity {
    pub fn new(property: &str) -> Self {
        Self {
            property: property.to_string(),
        }
    }
}

declare_collection! {
    /// Entities compared by value.
    #[derive(Debug, serde::Serialize)]
    #[serde(transparent)]
    pub struct EntityCollection(Entity);
}

declare_collection! {
    /// Target type for mapped entities.
    #[derive(Debug, serde::Serialize)]
    #[serde(transparent)]
    pub struct MappedEntityCollection(Entity);
}

declare_collection! {
    /// Entities compared by identity.
    #[derive(Debug)]
    pub struct SharedEntityCollection(Shared<Entity>);
}

/// The three-entity collection most tests start from.
pub fn examples() -> EntityCollection {
    EntityCollection::new(["example1", "example2", "example3"].map(Entity::new))
}
