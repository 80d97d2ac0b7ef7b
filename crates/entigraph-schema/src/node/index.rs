use crate::prelude::*;

///
/// IndexDef
///
/// Field-level index marker. Unset bounds take the kind-specific defaults
/// at resolution time.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct IndexDef {
    pub kind: IndexKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<i32>,
}

impl IndexDef {
    #[must_use]
    pub const fn new(kind: IndexKind) -> Self {
        Self {
            kind,
            min: None,
            max: None,
        }
    }

    #[must_use]
    pub const fn ascending() -> Self {
        Self::new(IndexKind::Ascending)
    }

    #[must_use]
    pub const fn descending() -> Self {
        Self::new(IndexKind::Descending)
    }

    #[must_use]
    pub const fn geo2d() -> Self {
        Self::new(IndexKind::Geo2d)
    }

    #[must_use]
    pub const fn min(mut self, min: i32) -> Self {
        self.min = Some(min);
        self
    }

    #[must_use]
    pub const fn max(mut self, max: i32) -> Self {
        self.max = Some(max);
        self
    }

    #[must_use]
    pub const fn resolved_min(&self) -> i32 {
        match self.min {
            Some(min) => min,
            None => self.kind.default_min(),
        }
    }

    #[must_use]
    pub const fn resolved_max(&self) -> i32 {
        match self.max {
            Some(max) => max,
            None => self.kind.default_max(),
        }
    }
}
