//! Relation resolution.
//!
//! Every relationship kind shares target validation, join-marker parsing
//! and inverse-field bookkeeping. Kinds differ only in which join
//! strategies are legal, which each resolver decides in `resolve_join`.
//! Dispatch is an exhaustive match on `RelationKind`.

mod many_to_many;
mod many_to_one;
mod one_to_many;
mod one_to_one;


pub use many_to_many::ManyToManyResolver;
pub use many_to_one::ManyToOneResolver;
pub use one_to_many::OneToManyResolver;
pub use one_to_one::OneToOneResolver;

use crate::{
    config::DuplicateRelationPolicy,
    error::ResolveError,
    model::{
        entity::EntityMetadata,
        relation::{Join, JoinStrategy, Relation},
    },
    resolve::{context::ResolveContext, introspect::FieldDescriptor},
};
use entigraph_schema::{
    node::{EntityDef, JoinMarkers, JoinTableDef, RelationDef},
    types::RelationKind,
};
use tracing::{trace, warn};

///
/// RelationEdge
///
/// The field being resolved, with its owning class and validated target.
///

#[derive(Clone, Copy, Debug)]
pub struct RelationEdge {
    pub entity: &'static str,
    pub field: &'static str,
    pub target: &'static str,
    pub def: &'static RelationDef,
}

impl RelationEdge {
    pub(crate) const fn unsupported(&self, strategy: JoinStrategy) -> ResolveError {
        ResolveError::UnsupportedJoinStrategy {
            entity: self.entity,
            field: self.field,
            kind: self.def.kind,
            strategy,
        }
    }
}

///
/// DeclaredJoin
///
/// The single join-strategy marker present on a field.
///

#[derive(Clone, Copy, Debug)]
pub enum DeclaredJoin {
    PrimaryKey,
    ForeignKey(&'static str),
    Table(&'static JoinTableDef),
}

impl DeclaredJoin {
    /// Read the markers, rejecting fields that declare more than one.
    pub fn from_markers(
        edge: &RelationEdge,
        markers: &'static JoinMarkers,
    ) -> Result<Option<Self>, ResolveError> {
        let mut declared = Vec::with_capacity(markers.count());
        if markers.primary_key_join {
            declared.push(Self::PrimaryKey);
        }
        if let Some(column) = markers.join_column {
            declared.push(Self::ForeignKey(column));
        }
        if let Some(table) = &markers.join_table {
            declared.push(Self::Table(table));
        }

        match declared.as_slice() {
            [] => Ok(None),
            [single] => Ok(Some(*single)),
            many => Err(ResolveError::AmbiguousJoinStrategy {
                entity: edge.entity,
                field: edge.field,
                strategies: many.iter().map(Self::strategy).collect(),
            }),
        }
    }

    #[must_use]
    pub const fn strategy(&self) -> JoinStrategy {
        match self {
            Self::PrimaryKey => JoinStrategy::PrimaryKeyJoin,
            Self::ForeignKey(_) => JoinStrategy::ForeignKeyColumn,
            Self::Table(_) => JoinStrategy::JoinTable,
        }
    }
}

///
/// RelationResolver
///
/// Shared contract of the per-kind resolvers. Implementors decide join
/// legality; `resolve` runs the common steps around it.
///

pub trait RelationResolver {
    /// Map the declared join onto a resolved one, or reject it for this kind.
    fn resolve_join(
        &self,
        edge: &RelationEdge,
        declared: Option<DeclaredJoin>,
        owner: &EntityMetadata,
        ctx: &ResolveContext<'_>,
    ) -> Result<Option<Join>, ResolveError>;

    /// Resolve one relation field into a `Relation` edge.
    fn resolve(
        &self,
        field: &FieldDescriptor,
        def: &'static RelationDef,
        owner: &EntityMetadata,
        ctx: &mut ResolveContext<'_>,
    ) -> Result<Relation, ResolveError> {
        let entity = owner.path();

        // the declared field type decides the target, never the override
        let target = field.ty;
        if let Some(declared) = def.target_entity
            && declared != target
        {
            warn!(
                entity,
                field = field.name,
                declared,
                target,
                "ignoring declared target entity in favour of field type"
            );
        }

        let target_def = ctx.validate_target(entity, field.name, target)?;
        let edge = RelationEdge {
            entity,
            field: field.name,
            target,
            def,
        };

        let declared = DeclaredJoin::from_markers(&edge, &def.joins)?;
        let join = self.resolve_join(&edge, declared, owner, ctx)?;

        if let Some(mapped_by) = def.mapped_by
            && ctx.config().validate_bidirectional
        {
            check_inverse_field(&edge, target_def, mapped_by)?;
        }
        let bidirectional_owner =
            def.mapped_by.is_none() && target_def.find_inverse(entity, field.name).is_some();

        let relation = Relation {
            field: field.name,
            kind: def.kind,
            target,
            fetch: def.fetch,
            cascade: def.cascade.iter().copied().collect(),
            optional: def.optional,
            mapped_by: def.mapped_by,
            join,
            bidirectional_owner,
        };
        trace!(entity, relation = %relation, "relation resolved");

        Ok(relation)
    }
}

/// Pick the resolver for a relationship kind.
#[must_use]
pub const fn resolver_for(kind: RelationKind) -> &'static dyn RelationResolver {
    match kind {
        RelationKind::OneToOne => &OneToOneResolver,
        RelationKind::OneToMany => &OneToManyResolver,
        RelationKind::ManyToOne => &ManyToOneResolver,
        RelationKind::ManyToMany => &ManyToManyResolver,
    }
}

/// Resolve `field` and record the relation in `owner`, keyed by field name.
///
/// Non-relation fields are ignored. Resolving the same field again replaces
/// the earlier entry unless the duplicate policy is `Reject`.
pub fn add_relation_into_metadata(
    field: &FieldDescriptor,
    owner: &mut EntityMetadata,
    ctx: &mut ResolveContext<'_>,
) -> Result<(), ResolveError> {
    let Some(def) = field.relation else {
        return Ok(());
    };

    let relation = resolver_for(def.kind).resolve(field, def, owner, ctx)?;

    if owner.has_relation(field.name) {
        match ctx.config().duplicate_relations {
            DuplicateRelationPolicy::Overwrite => {
                trace!(entity = owner.path(), field = field.name, "overwriting relation");
            }
            DuplicateRelationPolicy::Reject => {
                return Err(ResolveError::DuplicateRelation {
                    entity: owner.path(),
                    field: field.name,
                });
            }
        }
    }
    owner.add_relation(field.name, relation);

    Ok(())
}

/// Physical column of the target's identifier, for primary-key joins.
///
/// The target's metadata must already be resolved; a self-referencing
/// relation uses the owner's own identifier.
pub(crate) fn primary_key_column(
    edge: &RelationEdge,
    owner: &EntityMetadata,
    ctx: &ResolveContext<'_>,
) -> Result<&'static str, ResolveError> {
    let target = if edge.target == owner.path() {
        Some(owner)
    } else {
        ctx.resolved(edge.target)
    };

    target
        .and_then(EntityMetadata::id_column)
        .map(|column| column.name)
        .ok_or(ResolveError::UnresolvedTargetMetadata {
            entity: edge.entity,
            field: edge.field,
            target: edge.target,
        })
}

// The inverse field must exist on the target as a relation pointing back,
// and must be the owning side of the pair.
fn check_inverse_field(
    edge: &RelationEdge,
    target_def: &'static EntityDef,
    mapped_by: &'static str,
) -> Result<(), ResolveError> {
    let reason = match target_def.fields.get(mapped_by) {
        None => Some(format!("inverse field '{mapped_by}' does not exist")),
        Some(f) if f.relation_def().is_none() => {
            Some(format!("inverse field '{mapped_by}' is not a relation"))
        }
        Some(f) if f.ty != edge.entity => Some(format!(
            "inverse field '{mapped_by}' points to '{}', not '{}'",
            f.ty, edge.entity
        )),
        Some(f) if f.relation_def().is_some_and(|r| r.mapped_by.is_some()) => Some(format!(
            "inverse field '{mapped_by}' is itself mapped by another field"
        )),
        Some(_) => None,
    };

    match reason {
        Some(reason) => Err(ResolveError::InvalidTargetEntity {
            entity: edge.entity,
            field: edge.field,
            target: edge.target,
            reason,
        }),
        None => Ok(()),
    }
}
