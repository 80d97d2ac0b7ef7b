//! Module: registry
//! Responsibility: owns resolved metadata per persistence unit and its
//! Uninitialized -> Building -> Published lifecycle.
//! Does not own: resolution rules (see `resolve`) or backend I/O.
//!
//! Invariants:
//! - Units are built single-threaded, in caller order.
//! - A unit that fails to resolve leaves no entries behind.
//! - After `publish`, lookups are shared borrows of immutable data and may
//!   run from any number of threads. `reset` takes `&mut self`, so readers
//!   must be gone before it can run.

use crate::{
    Error,
    config::ResolveConfig,
    error::ErrorClass,
    model::{application::ApplicationMetadata, entity::EntityMetadata},
    resolve::{context::ResolveContext, resolve_unit},
};
use entigraph_schema::node::EntityDef;
use std::collections::BTreeMap;
use thiserror::Error as ThisError;
use tracing::debug;

///
/// RegistryError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum RegistryError {
    #[error("registry is already published; reset it before building again")]
    AlreadyPublished,

    #[error("registry has nothing to publish (state {0:?})")]
    NotBuilding(RegistryState),

    #[error("persistence unit '{0}' already built")]
    UnitAlreadyBuilt(String),
}

impl RegistryError {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::AlreadyPublished | Self::NotBuilding(_) => ErrorClass::Ordering,
            Self::UnitAlreadyBuilt(_) => ErrorClass::Duplicate,
        }
    }
}

///
/// RegistryState
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum RegistryState {
    #[default]
    Uninitialized,
    Building,
    Published,
}

///
/// MetadataRegistry
///
/// Process-scoped cache of resolved metadata, keyed by persistence unit.
/// Owned explicitly by the caller; share it as `Arc<MetadataRegistry>`
/// once published.
///

#[derive(Debug, Default)]
pub struct MetadataRegistry {
    state: RegistryState,
    units: BTreeMap<String, ApplicationMetadata>,
    class_to_units: BTreeMap<&'static str, Vec<String>>,
}

impl MetadataRegistry {
    /// Create an empty, uninitialized registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> RegistryState {
        self.state
    }

    /// Resolve and stage the classes bound to `unit`.
    ///
    /// Entities of units built earlier are visible as relation targets. On
    /// failure nothing from this unit is staged.
    pub fn build_unit(
        &mut self,
        unit: &str,
        defs: &[&'static EntityDef],
        config: &ResolveConfig,
    ) -> Result<&ApplicationMetadata, Error> {
        match self.state {
            RegistryState::Published => return Err(RegistryError::AlreadyPublished.into()),
            RegistryState::Uninitialized => self.state = RegistryState::Building,
            RegistryState::Building => {}
        }

        if self.units.contains_key(unit) {
            return Err(RegistryError::UnitAlreadyBuilt(unit.to_string()).into());
        }

        let application = {
            let mut ctx = ResolveContext::new(config).with_built_units(&self.units);
            resolve_unit(unit, defs, &mut ctx)?
        };

        for metadata in application.entities() {
            self.class_to_units
                .entry(metadata.path())
                .or_default()
                .push(unit.to_string());
        }
        debug!(unit, entities = application.len(), "persistence unit staged");

        Ok(self.units.entry(unit.to_string()).or_insert(application))
    }

    /// Freeze the registry; from here on it is read-only.
    pub fn publish(&mut self) -> Result<(), RegistryError> {
        if self.state != RegistryState::Building {
            return Err(RegistryError::NotBuilding(self.state));
        }

        self.state = RegistryState::Published;
        debug!(units = self.units.len(), "metadata registry published");

        Ok(())
    }

    /// Discard every entry and return to `Uninitialized`.
    pub fn reset(&mut self) {
        self.units.clear();
        self.class_to_units.clear();
        self.state = RegistryState::Uninitialized;
        debug!("metadata registry reset");
    }

    //
    // published lookups
    //

    /// Metadata for `path` from the first unit it was bound to.
    #[must_use]
    pub fn lookup_entity(&self, path: &str) -> Option<&EntityMetadata> {
        let unit = self.units_for(path).first()?;

        self.lookup_unit(unit)?.entity(path)
    }

    /// Metadata for `path` within a specific unit.
    #[must_use]
    pub fn lookup_entity_in(&self, unit: &str, path: &str) -> Option<&EntityMetadata> {
        self.lookup_unit(unit)?.entity(path)
    }

    #[must_use]
    pub fn lookup_unit(&self, unit: &str) -> Option<&ApplicationMetadata> {
        if self.state != RegistryState::Published {
            return None;
        }

        self.units.get(unit)
    }

    /// Units the class is bound to, in build order.
    #[must_use]
    pub fn units_for(&self, path: &str) -> &[String] {
        if self.state != RegistryState::Published {
            return &[];
        }

        self.class_to_units.get(path).map_or(&[], Vec::as_slice)
    }

    /// Names of every unit, published or staged.
    pub fn unit_names(&self) -> impl Iterator<Item = &str> {
        self.units.keys().map(String::as_str)
    }
}
