use derive_more::Display;
use entigraph_schema::{
    node::JoinTableDef,
    types::{CascadeType, FetchMode, RelationKind},
};
use serde::Serialize;
use std::{collections::BTreeSet, fmt};

///
/// JoinStrategy
///
/// The three mutually exclusive ways a relation target is located.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, Serialize)]
pub enum JoinStrategy {
    #[display("foreign-key column")]
    ForeignKeyColumn,

    #[display("primary-key join")]
    PrimaryKeyJoin,

    #[display("join table")]
    JoinTable,
}

///
/// JoinTableMetadata
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct JoinTableMetadata {
    pub name: &'static str,
    pub schema: Option<&'static str>,
    pub join_columns: Vec<&'static str>,
    pub inverse_join_columns: Vec<&'static str>,
}

impl From<&JoinTableDef> for JoinTableMetadata {
    fn from(def: &JoinTableDef) -> Self {
        Self {
            name: def.name,
            schema: def.schema,
            join_columns: def.join_columns.to_vec(),
            inverse_join_columns: def.inverse_join_columns.to_vec(),
        }
    }
}

///
/// Join
///
/// A resolved join. The primary-key column is derived from the target's
/// identifier, never declared.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum Join {
    ForeignKey { column: &'static str },
    PrimaryKey { column: &'static str },
    Table(JoinTableMetadata),
}

impl Join {
    #[must_use]
    pub const fn strategy(&self) -> JoinStrategy {
        match self {
            Self::ForeignKey { .. } => JoinStrategy::ForeignKeyColumn,
            Self::PrimaryKey { .. } => JoinStrategy::PrimaryKeyJoin,
            Self::Table(_) => JoinStrategy::JoinTable,
        }
    }
}

///
/// Relation
///
/// One directed edge from an owning field to a target entity class.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Relation {
    pub field: &'static str,
    pub kind: RelationKind,
    pub target: &'static str,
    pub fetch: FetchMode,
    pub cascade: BTreeSet<CascadeType>,
    pub optional: bool,

    /// Inverse-field name on the target; present on the non-owning side of
    /// a bidirectional pair.
    pub mapped_by: Option<&'static str>,

    pub join: Option<Join>,

    /// The target declares an inverse field mapped by this one.
    pub bidirectional_owner: bool,
}

impl Relation {
    #[must_use]
    pub fn join_strategy(&self) -> Option<JoinStrategy> {
        self.join.as_ref().map(Join::strategy)
    }

    /// Physical join column for foreign-key and primary-key joins.
    #[must_use]
    pub const fn join_column_name(&self) -> Option<&'static str> {
        match &self.join {
            Some(Join::ForeignKey { column } | Join::PrimaryKey { column }) => Some(*column),
            _ => None,
        }
    }

    #[must_use]
    pub const fn join_table(&self) -> Option<&JoinTableMetadata> {
        match &self.join {
            Some(Join::Table(table)) => Some(table),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_joined_by_primary_key(&self) -> bool {
        matches!(self.join, Some(Join::PrimaryKey { .. }))
    }

    #[must_use]
    pub const fn is_related_via_join_table(&self) -> bool {
        matches!(self.join, Some(Join::Table(_)))
    }

    #[must_use]
    pub const fn is_bidirectional(&self) -> bool {
        self.mapped_by.is_some() || self.bidirectional_owner
    }

    #[must_use]
    pub const fn is_unary(&self) -> bool {
        !self.is_bidirectional()
    }

    #[must_use]
    pub const fn is_collection(&self) -> bool {
        !self.kind.is_to_one()
    }

    /// Whether `op` cascades along this relation; `All` implies every op.
    #[must_use]
    pub fn cascades(&self, op: CascadeType) -> bool {
        self.cascade.contains(&CascadeType::All) || self.cascade.contains(&op)
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.field, self.kind, self.target)?;

        match &self.join {
            Some(Join::ForeignKey { column }) => write!(f, " via column {column}")?,
            Some(Join::PrimaryKey { column }) => write!(f, " via primary key {column}")?,
            Some(Join::Table(table)) => write!(f, " via table {}", table.name)?,
            None => {}
        }

        if let Some(mapped_by) = self.mapped_by {
            write!(f, " (mapped by {mapped_by})")?;
        }

        Ok(())
    }
}
