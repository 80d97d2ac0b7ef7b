use super::{DeclaredJoin, RelationEdge, RelationResolver};
use crate::{
    error::ResolveError,
    model::{entity::EntityMetadata, relation::Join},
    resolve::context::ResolveContext,
};

///
/// ManyToManyResolver
///
/// Always goes through a join table. Only the inverse side, which names
/// the owning field via `mapped_by`, may omit it.
///

pub struct ManyToManyResolver;

impl RelationResolver for ManyToManyResolver {
    fn resolve_join(
        &self,
        edge: &RelationEdge,
        declared: Option<DeclaredJoin>,
        _owner: &EntityMetadata,
        _ctx: &ResolveContext<'_>,
    ) -> Result<Option<Join>, ResolveError> {
        match declared {
            Some(DeclaredJoin::Table(table)) => Ok(Some(Join::Table(table.into()))),
            Some(other @ (DeclaredJoin::PrimaryKey | DeclaredJoin::ForeignKey(_))) => {
                Err(edge.unsupported(other.strategy()))
            }
            None if edge.def.mapped_by.is_some() => Ok(None),
            None => Err(ResolveError::MissingJoinTable {
                entity: edge.entity,
                field: edge.field,
            }),
        }
    }
}
