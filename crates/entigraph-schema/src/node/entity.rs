use crate::prelude::*;

///
/// EntityDef
///
/// Static declaration of one persistent domain class. The `path` is the
/// class identity used by relations, the validator and the registry.
///

#[derive(Clone, Copy, Debug, Serialize)]
pub struct EntityDef {
    pub path: &'static str,
    pub ident: &'static str,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<&'static str>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<&'static str>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub counter_column: bool,

    pub fields: FieldList,
}

impl EntityDef {
    #[must_use]
    pub const fn new(path: &'static str, ident: &'static str, fields: &'static [FieldDef]) -> Self {
        Self {
            path,
            ident,
            table: None,
            schema: None,
            counter_column: false,
            fields: FieldList { fields },
        }
    }

    #[must_use]
    pub const fn table(mut self, table: &'static str) -> Self {
        self.table = Some(table);
        self
    }

    #[must_use]
    pub const fn schema(mut self, schema: &'static str) -> Self {
        self.schema = Some(schema);
        self
    }

    #[must_use]
    pub const fn counter_column(mut self) -> Self {
        self.counter_column = true;
        self
    }

    #[must_use]
    /// Resolve the physical table name, falling back to the class ident.
    pub fn resolved_table(&self) -> &'static str {
        self.table.unwrap_or(self.ident)
    }

    /// Iterate the fields carrying an identifier marker.
    pub fn id_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|f| f.id)
    }

    /// Find a relation field typed as `target_path` whose inverse-field
    /// name is `mapped_by`.
    #[must_use]
    pub fn find_inverse(&self, target_path: &str, mapped_by: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| {
            f.ty == target_path
                && matches!(
                    f.value,
                    FieldValue::Relation(RelationDef { mapped_by: Some(m), .. }) if m == mapped_by
                )
        })
    }
}
