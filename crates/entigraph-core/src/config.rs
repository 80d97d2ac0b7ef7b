//! Resolver configuration supplied by the caller when a persistence unit is
//! built. Loading it from disk or the environment is the caller's concern.

use serde::{Deserialize, Serialize};

///
/// DuplicateRelationPolicy
///
/// What happens when the same relation field is resolved twice into one
/// entity's metadata.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateRelationPolicy {
    /// Last write wins; the relation map size is unchanged.
    #[default]
    Overwrite,

    /// A second resolution of the same field is a fatal error.
    Reject,
}

///
/// ResolveConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct ResolveConfig {
    pub duplicate_relations: DuplicateRelationPolicy,

    /// Require a declared inverse-field to exist on the target and point back.
    pub validate_bidirectional: bool,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            duplicate_relations: DuplicateRelationPolicy::Overwrite,
            validate_bidirectional: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let cfg: ResolveConfig = serde_json::from_str("{}")
            .expect("empty config should parse");

        assert_eq!(cfg, ResolveConfig::default());
        assert_eq!(cfg.duplicate_relations, DuplicateRelationPolicy::Overwrite);
        assert!(cfg.validate_bidirectional);
    }

    #[test]
    fn parses_reject_policy() {
        let cfg: ResolveConfig = serde_json::from_str(
            r#"{ "duplicate_relations": "reject", "validate_bidirectional": false }"#,
        )
        .expect("config should parse");

        assert_eq!(cfg.duplicate_relations, DuplicateRelationPolicy::Reject);
        assert!(!cfg.validate_bidirectional);
    }
}
