//! Index metadata resolution.
//!
//! Embedded value objects are walked recursively and their index markers
//! merged into the owner's flat namespace, keyed by physical column name.
//! Embedded collections are skipped as a whole.

use crate::{
    error::ResolveError,
    model::index::PropertyIndex,
    resolve::introspect::{FieldDescriptor, check_markers},
};
use entigraph_schema::node::{EmbeddableDef, FieldDef, FieldValue, IndexDef};
use std::collections::{BTreeMap, BTreeSet};
use tracing::trace;

/// Property-name to index-descriptor mapping.
pub type IndexMap = BTreeMap<&'static str, PropertyIndex>;

/// Resolve the index descriptors of an entity's introspected fields.
pub fn indexes_for(
    entity: &'static str,
    fields: &[FieldDescriptor],
) -> Result<IndexMap, ResolveError> {
    let mut indexes = IndexMap::new();
    let mut visiting = BTreeSet::new();

    for field in fields {
        if let Some(def) = &field.index {
            insert_index(entity, field.column, def, &mut indexes)?;
        }

        match field.embedded {
            Some(marker) if !marker.is_collection() => {
                collect_embeddable(entity, marker.def(), &mut visiting, &mut indexes)?;
            }
            _ => {}
        }
    }

    Ok(indexes)
}

/// Resolve the index descriptors declared inside one embeddable, including
/// embeddables nested within it. Nested fields obey the same marker rules as
/// entity fields.
pub fn indexes_on_embeddable(def: &'static EmbeddableDef) -> Result<IndexMap, ResolveError> {
    let mut indexes = IndexMap::new();
    let mut visiting = BTreeSet::new();
    collect_embeddable(def.path, def, &mut visiting, &mut indexes)?;

    Ok(indexes)
}

// Walk an embeddable's fields, following nested embeddables once each.
fn collect_embeddable(
    entity: &'static str,
    def: &'static EmbeddableDef,
    visiting: &mut BTreeSet<&'static str>,
    indexes: &mut IndexMap,
) -> Result<(), ResolveError> {
    if !visiting.insert(def.path) {
        return Ok(());
    }

    for field in def.fields.iter() {
        collect_field(entity, field, visiting, indexes)?;
    }

    visiting.remove(def.path);

    Ok(())
}

fn collect_field(
    entity: &'static str,
    field: &'static FieldDef,
    visiting: &mut BTreeSet<&'static str>,
    indexes: &mut IndexMap,
) -> Result<(), ResolveError> {
    check_markers(entity, &FieldDescriptor::from_def(field))?;

    match field.value {
        FieldValue::Embedded(nested) => collect_embeddable(entity, nested, visiting, indexes),
        FieldValue::EmbeddedCollection(_) => Ok(()),
        FieldValue::Basic | FieldValue::Relation(_) => match &field.index {
            Some(def) => insert_index(entity, field.resolved_column(), def, indexes),
            None => Ok(()),
        },
    }
}

fn insert_index(
    entity: &'static str,
    property: &'static str,
    def: &IndexDef,
    indexes: &mut IndexMap,
) -> Result<(), ResolveError> {
    let index = PropertyIndex::from_def(property, def);

    if index.min > index.max {
        return Err(ResolveError::malformed(
            entity,
            format!(
                "index on '{property}' has min {} greater than max {}",
                index.min, index.max
            ),
        ));
    }

    trace!(
        entity,
        property,
        kind = %index.kind,
        min = index.min,
        max = index.max,
        "index resolved"
    );
    indexes.insert(property, index);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{resolve::introspect::introspect, test_fixtures::*};
    use entigraph_schema::{
        node::{EntityDef, RelationDef},
        types::IndexKind,
    };
    use proptest::prelude::*;

    static BAD_BOUNDS_FIELDS: [FieldDef; 2] = [
        FieldDef::basic("id", "String").id(),
        FieldDef::basic("score", "i32")
            .indexed(IndexDef::ascending().min(10).max(1)),
    ];
    static BAD_BOUNDS: EntityDef =
        EntityDef::new("fixtures::BadBounds", "BadBounds", &BAD_BOUNDS_FIELDS);

    static INDEXED_INNER_FIELDS: [FieldDef; 2] = [
        FieldDef::basic("zip", "Text").indexed(IndexDef::geo2d()),
        FieldDef::embedded("inner", &DEPARTMENT)
            .indexed(IndexDef::descending()),
    ];
    static INDEXED_INNER: EmbeddableDef =
        EmbeddableDef::new("fixtures::IndexedInner", &INDEXED_INNER_FIELDS);

    static INDEXED_OWNER_FIELDS: [FieldDef; 2] = [
        FieldDef::basic("zip", "Text").indexed(IndexDef::geo2d()),
        FieldDef::relation(
            "owner",
            "fixtures::Employee",
            RelationDef::many_to_one(),
        )
        .indexed(IndexDef::ascending()),
    ];
    static INDEXED_OWNER: EmbeddableDef =
        EmbeddableDef::new("fixtures::IndexedOwner", &INDEXED_OWNER_FIELDS);

    static HOLDS_NESTED_CONFLICT_FIELDS: [FieldDef; 2] = [
        FieldDef::basic("id", "String").id(),
        FieldDef::embedded("outer", &INDEXED_OWNER),
    ];
    static HOLDS_NESTED_CONFLICT: EntityDef = EntityDef::new(
        "fixtures::HoldsNestedConflict",
        "HoldsNestedConflict",
        &HOLDS_NESTED_CONFLICT_FIELDS,
    );

    static PARTIAL_BOUNDS_FIELDS: [FieldDef; 3] = [
        FieldDef::basic("id", "String").id(),
        FieldDef::basic("rank", "i32")
            .indexed(IndexDef::descending().min(0)),
        FieldDef::basic("spot", "Point")
            .indexed(IndexDef::geo2d().max(90)),
    ];
    static PARTIAL_BOUNDS: EntityDef = EntityDef::new(
        "fixtures::PartialBounds",
        "PartialBounds",
        &PARTIAL_BOUNDS_FIELDS,
    );

    fn resolve(def: &'static EntityDef) -> Result<IndexMap, ResolveError> {
        let fields = introspect(def)?;
        indexes_for(def.path, &fields)
    }

    #[test]
    fn embeddable_indexes_use_kind_defaults() {
        let indexes = indexes_on_embeddable(&DEPARTMENT)
            .expect("department indexes resolve");

        assert_eq!(indexes.len(), 2);

        let email = &indexes["email"];
        assert_eq!(email.kind, IndexKind::Ascending);
        assert_eq!(email.bounds(), (i32::MIN, i32::MAX));

        let location = &indexes["location"];
        assert_eq!(location.kind, IndexKind::Geo2d);
        assert_eq!(location.bounds(), (-200, 200));
    }

    #[test]
    fn entity_indexes_merge_embedded_markers_into_flat_namespace() {
        let indexes = resolve(&EMPLOYEE).expect("employee indexes resolve");
        let keys: Vec<_> = indexes.keys().copied().collect();

        assert_eq!(keys, ["AGE", "EMP_NAME", "email", "location"]);
        assert!(!indexes.contains_key("departmentData"));
    }

    #[test]
    fn embedded_collections_are_skipped() {
        let indexes = resolve(&ACCOUNT).expect("account indexes resolve");

        assert!(indexes.is_empty());
    }

    #[test]
    fn nested_embeddables_are_followed() {
        let indexes = indexes_on_embeddable(&OFFICE)
            .expect("office indexes resolve");

        assert!(indexes.contains_key("floor"));
        assert!(indexes.contains_key("email"));
        assert!(indexes.contains_key("location"));
        assert_eq!(indexes.len(), 3);
    }

    #[test]
    fn unset_bound_takes_default_for_its_side_only() {
        let indexes = resolve(&PARTIAL_BOUNDS).expect("partial bounds resolve");

        assert_eq!(indexes["rank"].bounds(), (0, i32::MAX));
        assert_eq!(indexes["spot"].bounds(), (-200, 90));
    }

    #[test]
    fn inverted_bounds_are_malformed() {
        let err = resolve(&BAD_BOUNDS).expect_err("min > max must fail");

        assert!(matches!(err, ResolveError::MalformedEntity { .. }));
    }

    #[test]
    fn nested_embedded_field_with_index_marker_is_malformed() {
        let err = indexes_on_embeddable(&INDEXED_INNER)
            .expect_err("embedded + index inside an embeddable must fail");
        let message = err.to_string();

        assert!(matches!(err, ResolveError::MalformedEntity { .. }));
        assert!(message.contains("field 'inner'"));
        assert!(message.contains("an embedded object and an index"));
    }

    #[test]
    fn nested_relation_field_with_index_marker_is_malformed() {
        let err = resolve(&HOLDS_NESTED_CONFLICT)
            .expect_err("relation + index inside an embeddable must fail");
        let message = err.to_string();

        assert_eq!(err.entity(), "fixtures::HoldsNestedConflict");
        assert!(message.contains("field 'owner'"));
        assert!(message.contains("a relation and an index"));
    }

    #[test]
    fn class_without_index_markers_yields_empty_map() {
        let indexes = resolve(&ADDRESS).expect("address indexes resolve");

        assert!(indexes.is_empty());
    }

    // Field shapes used to generate arbitrary declarations.
    #[derive(Clone, Copy, Debug)]
    enum Slot {
        Plain,
        Indexed,
        Embedded,
        EmbeddedCollection,
    }

    const PLAIN: FieldDef = FieldDef::basic("plain", "String");
    const INDEXED: FieldDef = FieldDef::basic("i", "Text").indexed(IndexDef::ascending());

    fn field_for(slot: Slot, n: usize) -> FieldDef {
        let name: &'static str = Box::leak(format!("f{n}").into_boxed_str());
        match slot {
            Slot::Plain => FieldDef {
                ident: name,
                ..PLAIN
            },
            Slot::Indexed => FieldDef {
                ident: name,
                ..INDEXED
            },
            Slot::Embedded => FieldDef::embedded(name, &DEPARTMENT),
            Slot::EmbeddedCollection => FieldDef::embedded_collection(name, &DEPARTMENT),
        }
    }

    fn slot() -> impl Strategy<Value = Slot> {
        prop_oneof![
            Just(Slot::Plain),
            Just(Slot::Indexed),
            Just(Slot::Embedded),
            Just(Slot::EmbeddedCollection),
        ]
    }

    proptest! {
        #[test]
        fn index_count_matches_declared_markers(slots in proptest::collection::vec(slot(), 0..12)) {
            let mut fields = vec![FieldDef::basic("id", "String").id()];
            fields.extend(slots.iter().enumerate().map(|(n, s)| field_for(*s, n)));
            let fields: &'static [FieldDef] = Box::leak(fields.into_boxed_slice());
            let def: &'static EntityDef =
                Box::leak(Box::new(EntityDef::new("fixtures::Generated", "Generated", fields)));

            let direct = slots.iter().filter(|s| matches!(s, Slot::Indexed)).count();
            let embedded = slots.iter().any(|s| matches!(s, Slot::Embedded));
            // embedded markers share one flat namespace, so repeats collapse
            let expected = direct + if embedded { DEPARTMENT_INDEX_COUNT } else { 0 };

            let indexes = resolve(def).expect("generated entity resolves");
            prop_assert_eq!(indexes.len(), expected);
        }
    }
}
