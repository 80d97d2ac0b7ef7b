//! Declarative descriptor vocabulary for entigraph.
//!
//! Domain classes are described by `static` tables of field descriptors rather
//! than runtime reflection. Nothing in this crate resolves or validates; the
//! resolution engine lives in `entigraph-core`.
//!
//! In general:
//! - `entigraph-schema` defines *what exists*
//! - `entigraph-core` defines *what runs*

pub mod node;
pub mod types;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        node::*,
        types::{CascadeType, FetchMode, IndexKind, RelationKind},
    };
    pub use serde::Serialize;
}
