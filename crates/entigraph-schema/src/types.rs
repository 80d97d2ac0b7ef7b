use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

///
/// RelationKind
///
/// Cardinality of an association between two entity classes.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, Hash, PartialEq, Serialize)]
#[remain::sorted]
pub enum RelationKind {
    ManyToMany,
    ManyToOne,
    OneToMany,
    OneToOne,
}

impl RelationKind {
    /// Whether the owning side holds at most one target instance.
    #[must_use]
    pub const fn is_to_one(self) -> bool {
        matches!(self, Self::OneToOne | Self::ManyToOne)
    }

    /// Fetch mode applied when a relation does not declare one.
    #[must_use]
    pub const fn default_fetch(self) -> FetchMode {
        if self.is_to_one() {
            FetchMode::Eager
        } else {
            FetchMode::Lazy
        }
    }
}

///
/// FetchMode
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, Hash, PartialEq, Serialize)]
pub enum FetchMode {
    Eager,
    Lazy,
}

///
/// CascadeType
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, Hash, Ord, PartialEq, PartialOrd,
    Serialize,
)]
#[remain::sorted]
pub enum CascadeType {
    All,
    Merge,
    Persist,
    Refresh,
    Remove,
}

///
/// IndexKind
///
/// Secondary-index shape. Ordering kinds accept the full `i32` range by
/// default; geospatial kinds default to a bounded coordinate range.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub enum IndexKind {
    #[display("ASC")]
    Ascending,

    #[display("DSC")]
    Descending,

    #[display("GEO2D")]
    Geo2d,
}

impl IndexKind {
    pub const GEO2D_MIN: i32 = -200;
    pub const GEO2D_MAX: i32 = 200;

    /// Lower bound used when an index marker does not declare `min`.
    #[must_use]
    pub const fn default_min(self) -> i32 {
        match self {
            Self::Ascending | Self::Descending => i32::MIN,
            Self::Geo2d => Self::GEO2D_MIN,
        }
    }

    /// Upper bound used when an index marker does not declare `max`.
    #[must_use]
    pub const fn default_max(self) -> i32 {
        match self {
            Self::Ascending | Self::Descending => i32::MAX,
            Self::Geo2d => Self::GEO2D_MAX,
        }
    }

    #[must_use]
    pub const fn is_geospatial(self) -> bool {
        matches!(self, Self::Geo2d)
    }
}

///
/// IndexKindParseError
///

#[derive(Clone, Debug, Display, Eq, PartialEq)]
#[display("unknown index kind '{_0}'")]
pub struct IndexKindParseError(pub String);

impl std::error::Error for IndexKindParseError {}

impl FromStr for IndexKind {
    type Err = IndexKindParseError;

    // accepts both the short storage tokens and the variant names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ASC" | "Ascending" => Ok(Self::Ascending),
            "DSC" | "Descending" => Ok(Self::Descending),
            "GEO2D" | "Geo2d" => Ok(Self::Geo2d),
            _ => Err(IndexKindParseError(s.to_string())),
        }
    }
}
