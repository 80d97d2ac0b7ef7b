use crate::prelude::*;
use serde::Serializer;

///
/// FieldList
///

#[derive(Clone, Copy, Debug, Serialize)]
pub struct FieldList {
    pub fields: &'static [FieldDef],
}

impl FieldList {
    // get
    #[must_use]
    pub fn get(&self, ident: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.ident == ident)
    }

    pub fn iter(&self) -> std::slice::Iter<'static, FieldDef> {
        self.fields.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

///
/// FieldDef
///
/// One declared field. `ty` is the declared type path; for relation fields
/// it names the target entity class (the element type for collections).
///

#[derive(Clone, Copy, Debug, Serialize)]
pub struct FieldDef {
    pub ident: &'static str,
    pub ty: &'static str,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<&'static str>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub id: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<IndexDef>,

    pub value: FieldValue,
}

impl FieldDef {
    #[must_use]
    pub const fn basic(ident: &'static str, ty: &'static str) -> Self {
        Self {
            ident,
            ty,
            column: None,
            id: false,
            index: None,
            value: FieldValue::Basic,
        }
    }

    #[must_use]
    pub const fn relation(
        ident: &'static str,
        target: &'static str,
        relation: RelationDef,
    ) -> Self {
        Self {
            value: FieldValue::Relation(relation),
            ..Self::basic(ident, target)
        }
    }

    #[must_use]
    pub const fn embedded(ident: &'static str, def: &'static EmbeddableDef) -> Self {
        Self {
            value: FieldValue::Embedded(def),
            ..Self::basic(ident, def.path)
        }
    }

    #[must_use]
    pub const fn embedded_collection(ident: &'static str, def: &'static EmbeddableDef) -> Self {
        Self {
            value: FieldValue::EmbeddedCollection(def),
            ..Self::basic(ident, def.path)
        }
    }

    #[must_use]
    pub const fn column(mut self, column: &'static str) -> Self {
        self.column = Some(column);
        self
    }

    #[must_use]
    pub const fn id(mut self) -> Self {
        self.id = true;
        self
    }

    #[must_use]
    pub const fn indexed(mut self, index: IndexDef) -> Self {
        self.index = Some(index);
        self
    }

    #[must_use]
    /// Physical column name, defaulting to the field ident.
    pub fn resolved_column(&self) -> &'static str {
        self.column.unwrap_or(self.ident)
    }

    #[must_use]
    pub const fn relation_def(&self) -> Option<&RelationDef> {
        match &self.value {
            FieldValue::Relation(relation) => Some(relation),
            _ => None,
        }
    }
}

///
/// FieldValue
///
/// Shape of the declared field. Exactly one shape per field.
///

#[derive(Clone, Copy, Debug, Serialize)]
pub enum FieldValue {
    Basic,
    Relation(RelationDef),

    #[serde(serialize_with = "serialize_embeddable_path")]
    Embedded(&'static EmbeddableDef),

    #[serde(serialize_with = "serialize_embeddable_path")]
    EmbeddedCollection(&'static EmbeddableDef),
}

impl FieldValue {
    #[must_use]
    pub const fn is_embedded(&self) -> bool {
        matches!(self, Self::Embedded(_) | Self::EmbeddedCollection(_))
    }
}

// embeddables may reference each other, so only the path is written
fn serialize_embeddable_path<S: Serializer>(
    def: &&'static EmbeddableDef,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(def.path)
}
