use crate::prelude::*;

///
/// RelationDef
///
/// Relationship marker on a field. `target_entity` is an optional override
/// that resolution ignores in favour of the field's declared type.
///

#[derive(Clone, Copy, Debug, Serialize)]
pub struct RelationDef {
    pub kind: RelationKind,
    pub fetch: FetchMode,

    #[serde(default, skip_serializing_if = "<[_]>::is_empty")]
    pub cascade: &'static [CascadeType],

    pub optional: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapped_by: Option<&'static str>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_entity: Option<&'static str>,

    pub joins: JoinMarkers,
}

impl RelationDef {
    #[must_use]
    pub const fn new(kind: RelationKind) -> Self {
        Self {
            kind,
            fetch: kind.default_fetch(),
            cascade: &[],
            optional: true,
            mapped_by: None,
            target_entity: None,
            joins: JoinMarkers::NONE,
        }
    }

    #[must_use]
    pub const fn one_to_one() -> Self {
        Self::new(RelationKind::OneToOne)
    }

    #[must_use]
    pub const fn one_to_many() -> Self {
        Self::new(RelationKind::OneToMany)
    }

    #[must_use]
    pub const fn many_to_one() -> Self {
        Self::new(RelationKind::ManyToOne)
    }

    #[must_use]
    pub const fn many_to_many() -> Self {
        Self::new(RelationKind::ManyToMany)
    }

    #[must_use]
    pub const fn fetch(mut self, fetch: FetchMode) -> Self {
        self.fetch = fetch;
        self
    }

    #[must_use]
    pub const fn cascade(mut self, cascade: &'static [CascadeType]) -> Self {
        self.cascade = cascade;
        self
    }

    #[must_use]
    pub const fn required(mut self) -> Self {
        self.optional = false;
        self
    }

    #[must_use]
    pub const fn mapped_by(mut self, field: &'static str) -> Self {
        self.mapped_by = Some(field);
        self
    }

    #[must_use]
    pub const fn target_entity(mut self, path: &'static str) -> Self {
        self.target_entity = Some(path);
        self
    }

    #[must_use]
    pub const fn primary_key_join(mut self) -> Self {
        self.joins.primary_key_join = true;
        self
    }

    #[must_use]
    pub const fn join_column(mut self, column: &'static str) -> Self {
        self.joins.join_column = Some(column);
        self
    }

    #[must_use]
    pub const fn join_table(mut self, table: JoinTableDef) -> Self {
        self.joins.join_table = Some(table);
        self
    }
}

///
/// JoinMarkers
///
/// Raw join-strategy markers as declared. Resolution rejects more than one.
///

#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct JoinMarkers {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub primary_key_join: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_column: Option<&'static str>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_table: Option<JoinTableDef>,
}

impl JoinMarkers {
    pub const NONE: Self = Self {
        primary_key_join: false,
        join_column: None,
        join_table: None,
    };

    /// Number of join-strategy markers present.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.primary_key_join as usize
            + self.join_column.is_some() as usize
            + self.join_table.is_some() as usize
    }
}

///
/// JoinTableDef
///

#[derive(Clone, Copy, Debug, Serialize)]
pub struct JoinTableDef {
    pub name: &'static str,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<&'static str>,

    pub join_columns: &'static [&'static str],
    pub inverse_join_columns: &'static [&'static str],
}

impl JoinTableDef {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            schema: None,
            join_columns: &[],
            inverse_join_columns: &[],
        }
    }

    #[must_use]
    pub const fn schema(mut self, schema: &'static str) -> Self {
        self.schema = Some(schema);
        self
    }

    #[must_use]
    pub const fn join_columns(mut self, columns: &'static [&'static str]) -> Self {
        self.join_columns = columns;
        self
    }

    #[must_use]
    pub const fn inverse_join_columns(mut self, columns: &'static [&'static str]) -> Self {
        self.inverse_join_columns = columns;
        self
    }
}
