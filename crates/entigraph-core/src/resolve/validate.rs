use entigraph_schema::node::EntityDef;
use std::collections::BTreeSet;

///
/// EntityValidator
///
/// Confirms a class is a well-formed entity before a relation may point at
/// it. Classes that passed once are remembered and not checked again.
///

#[derive(Debug, Default)]
pub struct EntityValidator {
    validated: BTreeSet<&'static str>,
}

impl EntityValidator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `def`, returning a human-readable reason on failure.
    pub fn validate(&mut self, def: &'static EntityDef) -> Result<(), String> {
        if self.validated.contains(def.path) {
            return Ok(());
        }

        if def.path.is_empty() || def.ident.is_empty() {
            return Err("entity path and ident must be non-empty".to_string());
        }

        match def.id_fields().count() {
            1 => {}
            0 => return Err("target declares no identifier field".to_string()),
            n => return Err(format!("target declares {n} identifier fields")),
        }

        self.validated.insert(def.path);

        Ok(())
    }

    #[must_use]
    pub fn is_validated(&self, path: &str) -> bool {
        self.validated.contains(path)
    }
}
