use super::{DeclaredJoin, RelationEdge, RelationResolver};
use crate::{
    error::ResolveError,
    model::{
        entity::EntityMetadata,
        relation::{Join, JoinStrategy},
    },
    resolve::context::ResolveContext,
};

///
/// ManyToOneResolver
///

pub struct ManyToOneResolver;

impl RelationResolver for ManyToOneResolver {
    fn resolve_join(
        &self,
        edge: &RelationEdge,
        declared: Option<DeclaredJoin>,
        _owner: &EntityMetadata,
        _ctx: &ResolveContext<'_>,
    ) -> Result<Option<Join>, ResolveError> {
        match declared {
            Some(DeclaredJoin::ForeignKey(column)) => Ok(Some(Join::ForeignKey { column })),
            Some(other @ (DeclaredJoin::PrimaryKey | DeclaredJoin::Table(_))) => {
                Err(edge.unsupported(other.strategy()))
            }
            None => Ok(None),
        }
    }
}
