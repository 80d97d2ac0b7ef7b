use super::{DeclaredJoin, RelationEdge, RelationResolver, primary_key_column};
use crate::{
    error::ResolveError,
    model::{
        entity::EntityMetadata,
        relation::{Join, JoinStrategy},
    },
    resolve::context::ResolveContext,
};

///
/// OneToOneResolver
///
/// Joins by primary key or foreign-key column. Join tables are rejected
/// outright; an unjoined one-to-one is left for the backend to locate.
///

pub struct OneToOneResolver;

impl RelationResolver for OneToOneResolver {
    fn resolve_join(
        &self,
        edge: &RelationEdge,
        declared: Option<DeclaredJoin>,
        owner: &EntityMetadata,
        ctx: &ResolveContext<'_>,
    ) -> Result<Option<Join>, ResolveError> {
        match declared {
            Some(DeclaredJoin::PrimaryKey) => Ok(Some(Join::PrimaryKey {
                column: primary_key_column(edge, owner, ctx)?,
            })),
            Some(DeclaredJoin::ForeignKey(column)) => Ok(Some(Join::ForeignKey { column })),
            Some(DeclaredJoin::Table(_)) => Err(edge.unsupported(JoinStrategy::JoinTable)),
            None => Ok(None),
        }
    }
}
