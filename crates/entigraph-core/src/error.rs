use crate::model::relation::JoinStrategy;
use derive_more::Display;
use entigraph_schema::types::RelationKind;
use thiserror::Error as ThisError;

///
/// ErrorClass
///
/// Coarse classification of a resolution failure. All classes are fatal for
/// the persistence unit being built.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum ErrorClass {
    #[display("malformed")]
    Malformed,

    #[display("invalid_target")]
    InvalidTarget,

    #[display("unsupported")]
    Unsupported,

    #[display("ambiguous")]
    Ambiguous,

    #[display("ordering")]
    Ordering,

    #[display("duplicate")]
    Duplicate,
}

///
/// ResolveError
///
/// Schema-compilation failures. These only occur while a persistence unit
/// is being built, never after the registry is published.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ResolveError {
    #[error("malformed entity '{entity}': {reason}")]
    MalformedEntity {
        entity: &'static str,
        reason: String,
    },

    #[error("invalid target entity '{target}' for '{entity}.{field}': {reason}")]
    InvalidTargetEntity {
        entity: &'static str,
        field: &'static str,
        target: &'static str,
        reason: String,
    },

    #[error("{strategy} is not supported for {kind} relation '{entity}.{field}'")]
    UnsupportedJoinStrategy {
        entity: &'static str,
        field: &'static str,
        kind: RelationKind,
        strategy: JoinStrategy,
    },

    #[error(
        "relation '{entity}.{field}' declares more than one join strategy: {}",
        render_strategies(.strategies)
    )]
    AmbiguousJoinStrategy {
        entity: &'static str,
        field: &'static str,
        strategies: Vec<JoinStrategy>,
    },

    #[error(
        "relation '{entity}.{field}' joins by primary key but metadata for '{target}' is not resolved yet"
    )]
    UnresolvedTargetMetadata {
        entity: &'static str,
        field: &'static str,
        target: &'static str,
    },

    #[error("owning side of many-to-many relation '{entity}.{field}' requires a join table")]
    MissingJoinTable {
        entity: &'static str,
        field: &'static str,
    },

    #[error("relation '{entity}.{field}' was already resolved")]
    DuplicateRelation {
        entity: &'static str,
        field: &'static str,
    },
}

impl ResolveError {
    pub(crate) fn malformed(entity: &'static str, reason: impl Into<String>) -> Self {
        Self::MalformedEntity {
            entity,
            reason: reason.into(),
        }
    }

    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::MalformedEntity { .. } => ErrorClass::Malformed,
            Self::InvalidTargetEntity { .. } => ErrorClass::InvalidTarget,
            Self::UnsupportedJoinStrategy { .. } | Self::MissingJoinTable { .. } => {
                ErrorClass::Unsupported
            }
            Self::AmbiguousJoinStrategy { .. } => ErrorClass::Ambiguous,
            Self::UnresolvedTargetMetadata { .. } => ErrorClass::Ordering,
            Self::DuplicateRelation { .. } => ErrorClass::Duplicate,
        }
    }

    /// Entity path whose resolution failed.
    #[must_use]
    pub const fn entity(&self) -> &'static str {
        match self {
            Self::MalformedEntity { entity, .. }
            | Self::InvalidTargetEntity { entity, .. }
            | Self::UnsupportedJoinStrategy { entity, .. }
            | Self::AmbiguousJoinStrategy { entity, .. }
            | Self::UnresolvedTargetMetadata { entity, .. }
            | Self::MissingJoinTable { entity, .. }
            | Self::DuplicateRelation { entity, .. } => *entity,
        }
    }
}

fn render_strategies(strategies: &[JoinStrategy]) -> String {
    strategies
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
