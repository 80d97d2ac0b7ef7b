use super::*;
use crate::{error::ErrorClass, test_fixtures::*};
use entigraph_schema::{node::FieldDef, types::IndexKind};
use serde_json::json;

static COUNTER_FIELDS: [FieldDef; 2] = [
    FieldDef::basic("id", "String").id(),
    FieldDef::basic("hits", "u64"),
];
static COUNTER: EntityDef = EntityDef::new("fixtures::Counter", "Counter", &COUNTER_FIELDS)
    .table("PAGE_HITS")
    .schema("stats")
    .counter_column();

static TWO_IDS_FIELDS: [FieldDef; 2] = [
    FieldDef::basic("a", "String").id(),
    FieldDef::basic("b", "String").id(),
];
static TWO_IDS: EntityDef = EntityDef::new("fixtures::TwoIds", "TwoIds", &TWO_IDS_FIELDS);

fn resolve_one(defs: &[&'static EntityDef], path: &str) -> EntityMetadata {
    let app = resolve_standalone("test", defs, &ResolveConfig::default())
        .expect("unit resolves");

    app.entity(path).cloned().expect("entity metadata present")
}

#[test]
fn employee_resolves_identifier_columns_and_flattened_indexes() {
    let employee = resolve_one(&[&EMPLOYEE], EMPLOYEE.path);

    let id = employee.id_column().expect("identifier column");
    assert_eq!(id.field, "id");
    assert_eq!(id.name, "EMP_ID");
    assert_eq!(employee.table(), "Employee");

    let names: Vec<_> = employee.columns().iter().map(|c| c.name).collect();
    assert_eq!(names, ["EMP_NAME", "AGE"]);

    let indexes = employee.get_index_properties();
    let keys: Vec<_> = indexes.keys().copied().collect();
    assert_eq!(keys, ["AGE", "EMP_NAME", "email", "location"]);
    assert!(!indexes.contains_key("departmentData"));
    assert_eq!(indexes["location"].kind, IndexKind::Geo2d);
    assert_eq!(indexes["location"].bounds(), (-200, 200));
    assert_eq!(indexes["AGE"].bounds(), (i32::MIN, i32::MAX));

    assert_eq!(employee.storage_family(), StorageFamily::NestedColumnFamily);
    assert!(employee.relations().is_empty());
}

#[test]
fn embedded_value_lists_its_direct_columns() {
    let employee = resolve_one(&[&EMPLOYEE], EMPLOYEE.path);
    let embedded = employee.embedded_columns();

    assert_eq!(embedded.len(), 1);
    assert_eq!(embedded[0].field, "departmentData");
    assert_eq!(embedded[0].embeddable, "fixtures::Department");
    assert!(!embedded[0].collection);

    let names: Vec<_> = embedded[0].columns.iter().map(|c| c.name).collect();
    assert_eq!(names, ["name", "email", "location"]);
}

#[test]
fn embedded_collection_contributes_no_indexes() {
    let account = resolve_one(&[&ACCOUNT], ACCOUNT.path);

    assert!(account.get_index_properties().is_empty());
    assert_eq!(account.storage_family(), StorageFamily::NestedColumnFamily);
    assert!(account.embedded_columns()[0].collection);
    assert!(!account.is_counter_column_type());
}

#[test]
fn plain_entity_stays_flat() {
    let address = resolve_one(&[&ADDRESS], ADDRESS.path);

    assert_eq!(address.storage_family(), StorageFamily::Flat);
    assert_eq!(address.table(), "Address");
    assert_eq!(address.schema(), None);
}

#[test]
fn entity_level_settings_are_carried_over() {
    let counter = resolve_one(&[&COUNTER], COUNTER.path);

    assert_eq!(counter.table(), "PAGE_HITS");
    assert_eq!(counter.schema(), Some("stats"));
    assert!(counter.is_counter_column_type());
}

#[test]
fn counter_flag_is_mutable_after_resolution() {
    let mut account = resolve_one(&[&ACCOUNT], ACCOUNT.path);

    account.set_counter_column_type(true);
    assert!(account.is_counter_column_type());
    account.set_counter_column_type(false);
    assert!(!account.is_counter_column_type());
}

#[test]
fn every_entity_records_its_persistence_unit() {
    let app = resolve_standalone(
        "hr",
        &[&ADDRESS, &PERSON, &EMPLOYEE],
        &ResolveConfig::default(),
    )
    .expect("unit resolves");

    assert_eq!(app.unit(), "hr");
    assert_eq!(app.len(), 3);
    assert!(app.entities().all(|m| m.persistence_unit() == Some("hr")));
}

#[test]
fn failure_in_one_class_fails_the_unit() {
    let err = resolve_standalone("test", &[&ADDRESS, &TWO_IDS], &ResolveConfig::default())
        .expect_err("two identifiers must fail");

    assert_eq!(err.class(), ErrorClass::Malformed);
    assert_eq!(err.entity(), "fixtures::TwoIds");
}

#[test]
fn classes_resolve_in_caller_order() {
    let err = resolve_standalone("test", &[&PERSON, &ADDRESS], &ResolveConfig::default())
        .expect_err("person needs address metadata first");

    assert!(matches!(err, ResolveError::UnresolvedTargetMetadata { .. }));

    let app = resolve_standalone("test", &[&ADDRESS, &PERSON], &ResolveConfig::default())
        .expect("address first resolves");
    assert!(app.contains(PERSON.path));
}

#[test]
fn display_lists_every_resolved_part() {
    let app = resolve_standalone("hr", &[&ADDRESS, &PERSON], &ResolveConfig::default())
        .expect("unit resolves");
    let rendered = app
        .entity(PERSON.path)
        .expect("person metadata")
        .to_string();

    assert!(rendered.starts_with("entity fixtures::Person (table Person)"));
    assert!(rendered.contains("  id id -> PERSON_ID"));
    assert!(rendered.contains("  column name -> PERSON_NAME"));
    assert!(rendered.contains("relation address OneToOne -> fixtures::Address"));
    assert!(rendered.ends_with("family Flat, counter false, unit hr"));
}

#[test]
fn metadata_serializes_with_class_path() {
    let address = resolve_one(&[&ADDRESS], ADDRESS.path);
    let value = serde_json::to_value(&address).expect("metadata serializes");

    assert_eq!(value["path"], json!("fixtures::Address"));
    assert_eq!(value["table"], json!("Address"));
    assert_eq!(value["id_column"]["name"], json!("ADDRESS_ID"));
    assert_eq!(value["storage_family"], json!("Flat"));
    assert_eq!(value["persistence_unit"], json!("test"));
}
