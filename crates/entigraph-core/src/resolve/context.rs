use crate::{
    config::ResolveConfig,
    error::ResolveError,
    model::{application::ApplicationMetadata, entity::EntityMetadata},
    resolve::validate::EntityValidator,
};
use entigraph_schema::node::EntityDef;
use std::collections::BTreeMap;

///
/// ResolveContext
///
/// State shared by every resolver while one persistence unit is built:
/// the classes declared for the unit, the metadata resolved so far (in
/// caller order), and any units already built in the same registry.
///

pub struct ResolveContext<'a> {
    config: &'a ResolveConfig,
    declared: BTreeMap<&'static str, &'static EntityDef>,
    resolved: BTreeMap<&'static str, EntityMetadata>,
    built_units: Option<&'a BTreeMap<String, ApplicationMetadata>>,
    validator: EntityValidator,
}

impl<'a> ResolveContext<'a> {
    #[must_use]
    pub fn new(config: &'a ResolveConfig) -> Self {
        Self {
            config,
            declared: BTreeMap::new(),
            resolved: BTreeMap::new(),
            built_units: None,
            validator: EntityValidator::new(),
        }
    }

    /// Make entities of previously built units visible as relation targets.
    #[must_use]
    pub fn with_built_units(mut self, units: &'a BTreeMap<String, ApplicationMetadata>) -> Self {
        self.built_units = Some(units);
        self
    }

    #[must_use]
    pub const fn config(&self) -> &ResolveConfig {
        self.config
    }

    /// Register a class as part of the unit being built.
    pub fn declare(&mut self, def: &'static EntityDef) {
        self.declared.insert(def.path, def);
    }

    /// Find a class declaration in this unit or in an already-built one.
    #[must_use]
    pub fn declared(&self, path: &str) -> Option<&'static EntityDef> {
        if let Some(def) = self.declared.get(path).copied() {
            return Some(def);
        }

        self.built_units?
            .values()
            .find_map(|unit| unit.entity(path))
            .map(EntityMetadata::def)
    }

    /// Metadata already resolved for `path`, if any.
    #[must_use]
    pub fn resolved(&self, path: &str) -> Option<&EntityMetadata> {
        if let Some(metadata) = self.resolved.get(path) {
            return Some(metadata);
        }

        self.built_units?
            .values()
            .find_map(|unit| unit.entity(path))
    }

    pub fn insert_resolved(&mut self, metadata: EntityMetadata) {
        self.resolved.insert(metadata.path(), metadata);
    }

    /// Validate the target of `entity.field`, returning its declaration.
    pub fn validate_target(
        &mut self,
        entity: &'static str,
        field: &'static str,
        target: &'static str,
    ) -> Result<&'static EntityDef, ResolveError> {
        let invalid = |reason: String| ResolveError::InvalidTargetEntity {
            entity,
            field,
            target,
            reason,
        };

        let def = self
            .declared(target)
            .ok_or_else(|| invalid("not a registered entity".to_string()))?;
        self.validator.validate(def).map_err(invalid)?;

        Ok(def)
    }

    /// Consume the context, yielding resolved metadata keyed by class path.
    #[must_use]
    pub fn into_resolved(self) -> BTreeMap<&'static str, EntityMetadata> {
        self.resolved
    }
}
