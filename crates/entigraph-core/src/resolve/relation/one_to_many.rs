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
/// OneToManyResolver
///
/// The foreign-key column lives on the target side; a join table may be
/// used instead.
///

pub struct OneToManyResolver;

impl RelationResolver for OneToManyResolver {
    fn resolve_join(
        &self,
        edge: &RelationEdge,
        declared: Option<DeclaredJoin>,
        _owner: &EntityMetadata,
        _ctx: &ResolveContext<'_>,
    ) -> Result<Option<Join>, ResolveError> {
        match declared {
            Some(DeclaredJoin::PrimaryKey) => Err(edge.unsupported(JoinStrategy::PrimaryKeyJoin)),
            Some(DeclaredJoin::ForeignKey(column)) => Ok(Some(Join::ForeignKey { column })),
            Some(DeclaredJoin::Table(table)) => Ok(Some(Join::Table(table.into()))),
            None => Ok(None),
        }
    }
}
