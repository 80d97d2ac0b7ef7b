use crate::model::entity::EntityMetadata;
use serde::Serialize;
use std::collections::BTreeMap;

///
/// ApplicationMetadata
///
/// Resolved metadata for every entity class bound to one persistence unit.
///

#[derive(Clone, Debug, Serialize)]
pub struct ApplicationMetadata {
    unit: String,
    entities: BTreeMap<&'static str, EntityMetadata>,
}

impl ApplicationMetadata {
    #[must_use]
    pub fn new(unit: impl Into<String>) -> Self {
        Self {
            unit: unit.into(),
            entities: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub(crate) fn insert(&mut self, metadata: EntityMetadata) {
        self.entities.insert(metadata.path(), metadata);
    }

    #[must_use]
    pub fn entity(&self, path: &str) -> Option<&EntityMetadata> {
        self.entities.get(path)
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.entities.contains_key(path)
    }

    /// Entities ordered by class path.
    pub fn entities(&self) -> impl Iterator<Item = &EntityMetadata> {
        self.entities.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
