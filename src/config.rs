//! Generator configuration.
//!
//! One immutable struct built before any resolution call; every component
//! takes it by reference. The namespace derivations are recomputed from the
//! single `namespace` field so the three forms can never drift apart.

use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// C++ namespace (convention: name::space::for::api).
    pub namespace: String,
    /// Prefix distinguishing generated model/api types from user or library
    /// types.
    pub model_name_prefix: String,
    /// Threaded through to the templates unchanged.
    pub api_version: String,
    /// Per-name overrides for reserved-word escaping; absent names get the
    /// `_` prefix.
    pub reserved_word_mappings: HashMap<String, String>,
    /// Type names satisfied by an external import; these never get the
    /// model-name prefix.
    pub import_mappings: HashMap<String, String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            namespace: "Swagger::Model".to_string(),
            model_name_prefix: "SWG".to_string(),
            api_version: "1.0.0".to_string(),
            reserved_word_mappings: HashMap::new(),
            import_mappings: HashMap::new(),
        }
    }
}

impl GeneratorConfig {
    /// Macro-safe namespace: `a::b::c` → `a__b__c`.
    pub fn namespace_for_macros(&self) -> String {
        self.namespace.replace("::", "__")
    }

    /// Namespace split into its declaration segments: `a::b::c` → `[a, b, c]`.
    pub fn namespace_parts(&self) -> Vec<String> {
        self.namespace.split("::").map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespace_derivations_round_trip() {
        let cfg = GeneratorConfig { namespace: "a::b::c".to_string(), ..Default::default() };
        assert_eq!(cfg.namespace_for_macros(), "a__b__c");
        assert_eq!(cfg.namespace_parts(), vec!["a", "b", "c"]);
    }

    #[test]
    fn single_segment_namespace() {
        let cfg = GeneratorConfig { namespace: "api".to_string(), ..Default::default() };
        assert_eq!(cfg.namespace_for_macros(), "api");
        assert_eq!(cfg.namespace_parts(), vec!["api"]);
    }

    #[test]
    fn default_matches_template_expectations() {
        let cfg = GeneratorConfig::default();
        assert_eq!(cfg.namespace, "Swagger::Model");
        assert_eq!(cfg.model_name_prefix, "SWG");
    }
}
