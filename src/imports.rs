//! Include resolution for generated files.
//!
//! Closed table for the std types the mapping can produce, plus a local
//! header fallback for everything else. Correct only while the resolver
//! renders each native type in exactly one spelling.

use crate::ir::ResolvedType;
use crate::lang;

/// The include one type name needs, or `None` for types that come for free.
pub fn import_for(name: &str) -> Option<String> {
    if lang::DEFAULT_INCLUDES.contains(name) {
        return None;
    }
    let line = match name {
        "std::string" => "#include <string>".to_string(),
        "std::map" => "#include <map>".to_string(),
        "std::vector" | "std::vector<uint8_t>" => "#include <vector>".to_string(),
        other => format!("#include \"{other}.{}\"", lang::HEADER_EXT),
    };
    Some(line)
}

/// All includes a resolved type needs, deduped in first-seen order.
pub fn imports_for(resolved: &ResolvedType) -> Vec<String> {
    let mut out = Vec::new();
    for component in &resolved.components {
        if let Some(line) = import_for(component) {
            if !out.contains(&line) {
                out.push(line);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::ir::SchemaType;
    use crate::resolve::resolve;

    #[test]
    fn std_types_use_angle_includes() {
        assert_eq!(import_for("std::string").as_deref(), Some("#include <string>"));
        assert_eq!(import_for("std::map").as_deref(), Some("#include <map>"));
        assert_eq!(import_for("std::vector").as_deref(), Some("#include <vector>"));
        assert_eq!(import_for("std::vector<uint8_t>").as_deref(), Some("#include <vector>"));
    }

    #[test]
    fn default_includes_need_nothing() {
        for name in ["bool", "int", "long long", "float", "double"] {
            assert_eq!(import_for(name), None);
        }
    }

    #[test]
    fn everything_else_is_a_local_header() {
        assert_eq!(import_for("SWGPet").as_deref(), Some("#include \"SWGPet.h\""));
        assert_eq!(
            import_for("VariantObject").as_deref(),
            Some("#include \"VariantObject.h\"")
        );
    }

    #[test]
    fn resolved_types_dedupe_includes() {
        let cfg = GeneratorConfig::default();
        // map<string, vector<Pet>> needs map, string, vector, and the model
        let ty = SchemaType::Map(Box::new(SchemaType::Array(Box::new(SchemaType::Ref(
            "Pet".to_string(),
        )))));
        let resolved = resolve(&cfg, &ty).unwrap();
        assert_eq!(
            imports_for(&resolved),
            vec![
                "#include <map>",
                "#include <string>",
                "#include <vector>",
                "#include \"SWGPet.h\"",
            ]
        );
    }

    #[test]
    fn primitive_components_produce_no_includes() {
        let cfg = GeneratorConfig::default();
        let resolved = resolve(&cfg, &SchemaType::Primitive("boolean".to_string())).unwrap();
        assert!(imports_for(&resolved).is_empty());
    }
}
