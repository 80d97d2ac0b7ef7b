use entigraph_schema::{node::IndexDef, types::IndexKind};
use serde::Serialize;
use std::fmt::{self, Display};

///
/// PropertyIndex
///
/// Resolved secondary-index descriptor for one property. Bounds are always
/// concrete; kind defaults are applied during resolution.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct PropertyIndex {
    pub property: &'static str,
    pub kind: IndexKind,
    pub min: i32,
    pub max: i32,
}

impl PropertyIndex {
    #[must_use]
    pub const fn from_def(property: &'static str, def: &IndexDef) -> Self {
        Self {
            property,
            kind: def.kind,
            min: def.resolved_min(),
            max: def.resolved_max(),
        }
    }

    #[must_use]
    pub const fn bounds(&self) -> (i32, i32) {
        (self.min, self.max)
    }
}

impl Display for PropertyIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}[{}, {}]",
            self.property, self.kind, self.min, self.max
        )
    }
}
