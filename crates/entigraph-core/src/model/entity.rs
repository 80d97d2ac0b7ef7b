use crate::model::{
    column::{ColumnDescriptor, EmbeddedColumn},
    index::PropertyIndex,
    relation::Relation,
};
use entigraph_schema::node::EntityDef;
use serde::{Serialize, Serializer};
use std::{
    collections::BTreeMap,
    fmt::{self, Display},
};

///
/// StorageFamily
///
/// Physical layout shape an entity maps to.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub enum StorageFamily {
    #[default]
    Flat,

    /// Embedded value objects are stored as nested column groups.
    NestedColumnFamily,
}

///
/// EntityMetadata
///
/// Aggregate root of resolved metadata for one domain class.
///
/// Mutators perform no cross-field validation; the resolvers in `resolve`
/// are responsible for consistency and run in the order
/// identifier -> relations -> indexes.
///

#[derive(Clone, Debug, Serialize)]
pub struct EntityMetadata {
    #[serde(rename = "path", serialize_with = "serialize_def_path")]
    def: &'static EntityDef,

    table: &'static str,
    schema: Option<&'static str>,
    id_column: Option<ColumnDescriptor>,
    columns: Vec<ColumnDescriptor>,
    embedded: Vec<EmbeddedColumn>,
    relations: BTreeMap<&'static str, Relation>,
    index_properties: BTreeMap<&'static str, PropertyIndex>,
    storage_family: StorageFamily,
    counter_column: bool,
    persistence_unit: Option<String>,
}

impl EntityMetadata {
    #[must_use]
    pub fn new(def: &'static EntityDef) -> Self {
        Self {
            def,
            table: def.resolved_table(),
            schema: def.schema,
            id_column: None,
            columns: Vec::new(),
            embedded: Vec::new(),
            relations: BTreeMap::new(),
            index_properties: BTreeMap::new(),
            storage_family: StorageFamily::Flat,
            counter_column: def.counter_column,
            persistence_unit: None,
        }
    }

    //
    // identity
    //

    #[must_use]
    pub const fn def(&self) -> &'static EntityDef {
        self.def
    }

    #[must_use]
    pub const fn path(&self) -> &'static str {
        self.def.path
    }

    #[must_use]
    pub const fn table(&self) -> &'static str {
        self.table
    }

    #[must_use]
    pub const fn schema(&self) -> Option<&'static str> {
        self.schema
    }

    //
    // columns
    //

    pub const fn set_id_column(&mut self, column: ColumnDescriptor) {
        self.id_column = Some(column);
    }

    #[must_use]
    pub const fn id_column(&self) -> Option<&ColumnDescriptor> {
        self.id_column.as_ref()
    }

    /// Add a column mapping; an existing mapping for the same field is
    /// replaced in place so declaration order is kept.
    pub fn add_column(&mut self, column: ColumnDescriptor) {
        match self.columns.iter_mut().find(|c| c.field == column.field) {
            Some(existing) => *existing = column,
            None => self.columns.push(column),
        }
    }

    /// Column mappings in declaration order, excluding the identifier.
    #[must_use]
    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    #[must_use]
    pub fn column(&self, field: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.field == field)
    }

    pub fn add_embedded(&mut self, embedded: EmbeddedColumn) {
        self.embedded.push(embedded);
    }

    #[must_use]
    pub fn embedded_columns(&self) -> &[EmbeddedColumn] {
        &self.embedded
    }

    //
    // relations
    //

    /// Insert or overwrite the relation for `field`.
    pub fn add_relation(&mut self, field: &'static str, relation: Relation) {
        self.relations.insert(field, relation);
    }

    #[must_use]
    pub fn get_relation(&self, field: &str) -> Option<&Relation> {
        self.relations.get(field)
    }

    #[must_use]
    pub fn has_relation(&self, field: &str) -> bool {
        self.relations.contains_key(field)
    }

    #[must_use]
    pub const fn relations(&self) -> &BTreeMap<&'static str, Relation> {
        &self.relations
    }

    //
    // indexes
    //

    pub fn add_index_properties(&mut self, indexes: BTreeMap<&'static str, PropertyIndex>) {
        self.index_properties.extend(indexes);
    }

    #[must_use]
    pub const fn get_index_properties(&self) -> &BTreeMap<&'static str, PropertyIndex> {
        &self.index_properties
    }

    //
    // storage
    //

    pub const fn set_storage_family(&mut self, family: StorageFamily) {
        self.storage_family = family;
    }

    #[must_use]
    pub const fn storage_family(&self) -> StorageFamily {
        self.storage_family
    }

    pub const fn set_counter_column_type(&mut self, counter: bool) {
        self.counter_column = counter;
    }

    #[must_use]
    pub const fn is_counter_column_type(&self) -> bool {
        self.counter_column
    }

    pub fn set_persistence_unit(&mut self, unit: impl Into<String>) {
        self.persistence_unit = Some(unit.into());
    }

    #[must_use]
    pub fn persistence_unit(&self) -> Option<&str> {
        self.persistence_unit.as_deref()
    }
}

impl Display for EntityMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "entity {} (table {})", self.path(), self.table)?;

        if let Some(id) = &self.id_column {
            writeln!(f, "  id {} -> {}", id.field, id.name)?;
        }
        for column in &self.columns {
            writeln!(f, "  column {} -> {}", column.field, column.name)?;
        }
        for relation in self.relations.values() {
            writeln!(f, "  relation {relation}")?;
        }
        for index in self.index_properties.values() {
            writeln!(f, "  index {index}")?;
        }

        write!(
            f,
            "  family {:?}, counter {}, unit {}",
            self.storage_family,
            self.counter_column,
            self.persistence_unit.as_deref().unwrap_or("-")
        )
    }
}

fn serialize_def_path<S: Serializer>(
    def: &&'static EntityDef,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(def.path)
}
