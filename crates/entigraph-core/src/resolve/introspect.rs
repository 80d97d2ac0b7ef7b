use crate::error::ResolveError;
use entigraph_schema::node::{
    EmbeddableDef, EntityDef, FieldDef, FieldValue, IndexDef, RelationDef,
};
use std::collections::BTreeSet;

///
/// EmbeddedMarker
///

#[derive(Clone, Copy, Debug)]
pub enum EmbeddedMarker {
    Value(&'static EmbeddableDef),
    Collection(&'static EmbeddableDef),
}

impl EmbeddedMarker {
    #[must_use]
    pub const fn def(&self) -> &'static EmbeddableDef {
        match self {
            Self::Value(def) | Self::Collection(def) => *def,
        }
    }

    #[must_use]
    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::Collection(_))
    }
}

///
/// FieldDescriptor
///
/// Flattened view of one declared field, as consumed by the resolvers.
///

#[derive(Clone, Copy, Debug)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub column: &'static str,
    pub ty: &'static str,
    pub id: bool,
    pub relation: Option<&'static RelationDef>,
    pub index: Option<IndexDef>,
    pub embedded: Option<EmbeddedMarker>,
}

impl FieldDescriptor {
    #[must_use]
    pub fn from_def(field: &'static FieldDef) -> Self {
        let embedded = match field.value {
            FieldValue::Embedded(def) => Some(EmbeddedMarker::Value(def)),
            FieldValue::EmbeddedCollection(def) => Some(EmbeddedMarker::Collection(def)),
            FieldValue::Basic | FieldValue::Relation(_) => None,
        };

        Self {
            name: field.ident,
            column: field.resolved_column(),
            ty: field.ty,
            id: field.id,
            relation: field.relation_def(),
            index: field.index,
            embedded,
        }
    }

    /// Plain value column: not an identifier, relation or embedded object.
    #[must_use]
    pub const fn is_basic(&self) -> bool {
        !self.id && self.relation.is_none() && self.embedded.is_none()
    }
}

/// Extract the ordered field descriptors of an entity class.
///
/// Fails when the class does not declare exactly one identifier, repeats a
/// field name, or combines markers that cannot coexist on one field.
pub fn introspect(def: &'static EntityDef) -> Result<Vec<FieldDescriptor>, ResolveError> {
    let mut seen = BTreeSet::new();
    let mut descriptors = Vec::with_capacity(def.fields.len());

    for field in def.fields.iter() {
        if !seen.insert(field.ident) {
            return Err(ResolveError::malformed(
                def.path,
                format!("field '{}' is declared more than once", field.ident),
            ));
        }

        let descriptor = FieldDescriptor::from_def(field);
        check_markers(def.path, &descriptor)?;
        descriptors.push(descriptor);
    }

    let ids: Vec<_> = descriptors
        .iter()
        .filter(|d| d.id)
        .map(|d| d.name)
        .collect();
    match ids.len() {
        1 => {}
        0 => {
            return Err(ResolveError::malformed(
                def.path,
                "no identifier field declared",
            ));
        }
        _ => {
            return Err(ResolveError::malformed(
                def.path,
                format!("multiple identifier fields declared: {}", ids.join(", ")),
            ));
        }
    }

    Ok(descriptors)
}

/// Reject marker combinations that have no single meaning.
pub(crate) fn check_markers(entity: &'static str, d: &FieldDescriptor) -> Result<(), ResolveError> {
    let conflict = match (d.relation.is_some(), d.embedded.is_some()) {
        (true, _) if d.id => Some("an identifier and a relation"),
        (true, _) if d.index.is_some() => Some("a relation and an index"),
        (_, true) if d.id => Some("an identifier and an embedded object"),
        (_, true) if d.index.is_some() => Some("an embedded object and an index"),
        _ => None,
    };

    match conflict {
        Some(pair) => Err(ResolveError::malformed(
            entity,
            format!("field '{}' is marked as both {pair}", d.name),
        )),
        None => Ok(()),
    }
}
