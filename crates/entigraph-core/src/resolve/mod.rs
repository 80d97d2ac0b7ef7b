//! Schema compilation: static class declarations in, `EntityMetadata` out.
//!
//! Each class is resolved in three steps, in order: identifier and columns,
//! relations, indexes. Classes are processed in caller order; the pass never
//! reorders by dependency and never retries.

pub mod context;
pub mod index;
pub mod introspect;
pub mod relation;
pub mod validate;

use crate::{
    config::ResolveConfig,
    error::ResolveError,
    model::{
        application::ApplicationMetadata,
        column::{ColumnDescriptor, EmbeddedColumn},
        entity::{EntityMetadata, StorageFamily},
    },
    resolve::{
        context::ResolveContext,
        index::indexes_for,
        introspect::{FieldDescriptor, introspect},
        relation::add_relation_into_metadata,
    },
};
use entigraph_schema::node::{EmbeddableDef, EntityDef};
use tracing::debug;

/// Resolve every class bound to `unit`, in the given order.
///
/// Nothing is returned unless every class resolves.
pub fn resolve_unit(
    unit: &str,
    defs: &[&'static EntityDef],
    ctx: &mut ResolveContext<'_>,
) -> Result<ApplicationMetadata, ResolveError> {
    for &def in defs {
        ctx.declare(def);
    }

    let mut application = ApplicationMetadata::new(unit);
    for &def in defs {
        let mut metadata = resolve_entity(def, ctx)?;
        metadata.set_persistence_unit(unit);

        application.insert(metadata.clone());
        ctx.insert_resolved(metadata);
    }

    debug!(unit, entities = application.len(), "persistence unit resolved");

    Ok(application)
}

/// Convenience wrapper resolving a standalone unit with its own context.
pub fn resolve_standalone(
    unit: &str,
    defs: &[&'static EntityDef],
    config: &ResolveConfig,
) -> Result<ApplicationMetadata, ResolveError> {
    let mut ctx = ResolveContext::new(config);

    resolve_unit(unit, defs, &mut ctx)
}

/// Resolve one class against the metadata already present in `ctx`.
pub fn resolve_entity(
    def: &'static EntityDef,
    ctx: &mut ResolveContext<'_>,
) -> Result<EntityMetadata, ResolveError> {
    let fields = introspect(def)?;
    let mut metadata = EntityMetadata::new(def);

    // identifier and columns
    for field in &fields {
        map_columns(field, &mut metadata);
    }

    // relations
    for field in fields.iter().filter(|f| f.relation.is_some()) {
        add_relation_into_metadata(field, &mut metadata, ctx)?;
    }

    // indexes
    metadata.add_index_properties(indexes_for(def.path, &fields)?);

    debug!(
        entity = def.path,
        columns = metadata.columns().len(),
        relations = metadata.relations().len(),
        indexes = metadata.get_index_properties().len(),
        family = ?metadata.storage_family(),
        "entity resolved"
    );

    Ok(metadata)
}

fn map_columns(field: &FieldDescriptor, metadata: &mut EntityMetadata) {
    let column = ColumnDescriptor::new(field.name, field.column, field.index.is_some());

    if field.id {
        metadata.set_id_column(column);
    } else if let Some(marker) = field.embedded {
        metadata.add_embedded(EmbeddedColumn {
            field: field.name,
            embeddable: marker.def().path,
            collection: marker.is_collection(),
            columns: embeddable_columns(marker.def()),
        });
        metadata.set_storage_family(StorageFamily::NestedColumnFamily);
    } else if field.is_basic() {
        metadata.add_column(column);
    }
}

// Direct value columns of an embeddable; nested objects are not flattened.
fn embeddable_columns(def: &'static EmbeddableDef) -> Vec<ColumnDescriptor> {
    def.fields
        .iter()
        .filter(|f| !f.value.is_embedded() && f.relation_def().is_none())
        .map(|f| ColumnDescriptor::new(f.ident, f.resolved_column(), f.index.is_some()))
        .collect()
}

#[cfg(test)]
mod tests;
