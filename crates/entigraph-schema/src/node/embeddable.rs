use crate::prelude::*;

///
/// EmbeddableDef
///
/// A value object stored inline with its owning entity. Embeddables have no
/// identity of their own.
///

#[derive(Clone, Copy, Debug, Serialize)]
pub struct EmbeddableDef {
    pub path: &'static str,
    pub fields: FieldList,
}

impl EmbeddableDef {
    #[must_use]
    pub const fn new(path: &'static str, fields: &'static [FieldDef]) -> Self {
        Self {
            path,
            fields: FieldList { fields },
        }
    }
}
