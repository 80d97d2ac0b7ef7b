//! Core resolution engine for entigraph: compiles static entity descriptors
//! into a validated metadata graph, and the registry that publishes it to
//! storage backends.
//!
//! Resolution is a one-shot, single-threaded bootstrap pass. Once a registry
//! is published every lookup is a shared borrow of immutable data.
#![warn(unreachable_pub)]

pub mod config;
pub mod error;
pub mod model;
pub mod registry;
pub mod resolve;

#[cfg(test)]
pub(crate) mod test_fixtures;

use crate::{error::ResolveError, registry::RegistryError};
use thiserror::Error as ThisError;

///
/// Prelude
///
/// Domain vocabulary only: metadata types, the registry and the resolver
/// configuration.
///

pub mod prelude {
    pub use crate::{
        config::{DuplicateRelationPolicy, ResolveConfig},
        model::{
            application::ApplicationMetadata,
            column::{ColumnDescriptor, EmbeddedColumn},
            entity::{EntityMetadata, StorageFamily},
            index::PropertyIndex,
            relation::{Join, JoinStrategy, JoinTableMetadata, Relation},
        },
        registry::{MetadataRegistry, RegistryState},
    };
    pub use entigraph_schema::prelude::*;
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    ResolveError(#[from] ResolveError),

    #[error(transparent)]
    RegistryError(#[from] RegistryError),
}
