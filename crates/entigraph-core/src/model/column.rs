use serde::Serialize;

///
/// ColumnDescriptor
/// Logical field mapped to its physical column.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct ColumnDescriptor {
    pub field: &'static str,
    pub name: &'static str,
    pub indexable: bool,
}

impl ColumnDescriptor {
    #[must_use]
    pub const fn new(field: &'static str, name: &'static str, indexable: bool) -> Self {
        Self {
            field,
            name,
            indexable,
        }
    }
}

///
/// EmbeddedColumn
///
/// An embedded value object (or collection of them) stored as a nested
/// column group under the owning entity.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct EmbeddedColumn {
    pub field: &'static str,
    pub embeddable: &'static str,
    pub collection: bool,
    pub columns: Vec<ColumnDescriptor>,
}
