//! Shared static declarations for unit tests.

use entigraph_schema::prelude::*;

/// Index markers declared directly on `DEPARTMENT`.
pub const DEPARTMENT_INDEX_COUNT: usize = 2;

///
/// Department (embeddable)
///

pub static DEPARTMENT_FIELDS: [FieldDef; 3] = [
    FieldDef::basic("name", "String"),
    FieldDef::basic("email", "String")
        .indexed(IndexDef::ascending()),
    FieldDef::basic("location", "Point")
        .indexed(IndexDef::geo2d()),
];
pub static DEPARTMENT: EmbeddableDef =
    EmbeddableDef::new("fixtures::Department", &DEPARTMENT_FIELDS);

///
/// Office (embeddable with nested embeddables)
///

pub static OFFICE_FIELDS: [FieldDef; 3] = [
    FieldDef::basic("floor", "i32")
        .indexed(IndexDef::ascending()),
    FieldDef::embedded("department", &DEPARTMENT),
    FieldDef::embedded_collection("desks", &DEPARTMENT),
];
pub static OFFICE: EmbeddableDef = EmbeddableDef::new("fixtures::Office", &OFFICE_FIELDS);

///
/// Employee
///

pub static EMPLOYEE_FIELDS: [FieldDef; 4] = [
    FieldDef::basic("id", "String").id().column("EMP_ID"),
    FieldDef::basic("empName", "String")
        .column("EMP_NAME")
        .indexed(IndexDef::ascending()),
    FieldDef::basic("age", "i32")
        .column("AGE")
        .indexed(IndexDef::ascending()),
    FieldDef::embedded("departmentData", &DEPARTMENT),
];
pub static EMPLOYEE: EntityDef =
    EntityDef::new("fixtures::Employee", "Employee", &EMPLOYEE_FIELDS);

///
/// Account (embedded collection only)
///

pub static ACCOUNT_FIELDS: [FieldDef; 3] = [
    FieldDef::basic("id", "String").id(),
    FieldDef::basic("name", "String"),
    FieldDef::embedded_collection("departments", &DEPARTMENT),
];
pub static ACCOUNT: EntityDef = EntityDef::new("fixtures::Account", "Account", &ACCOUNT_FIELDS);

///
/// Address / Person (one-to-one by primary key)
///

pub static ADDRESS_FIELDS: [FieldDef; 2] = [
    FieldDef::basic("id", "String").id().column("ADDRESS_ID"),
    FieldDef::basic("street", "String"),
];
pub static ADDRESS: EntityDef = EntityDef::new("fixtures::Address", "Address", &ADDRESS_FIELDS);

pub static PERSON_FIELDS: [FieldDef; 3] = [
    FieldDef::basic("id", "String").id().column("PERSON_ID"),
    FieldDef::basic("name", "String").column("PERSON_NAME"),
    FieldDef::relation(
        "address",
        "fixtures::Address",
        RelationDef::one_to_one()
            .cascade(&[CascadeType::All])
            .primary_key_join(),
    ),
];
pub static PERSON: EntityDef = EntityDef::new("fixtures::Person", "Person", &PERSON_FIELDS);
