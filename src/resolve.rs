//! Type resolution: schema type descriptors → native C++ type expressions.
//!
//! Structural recursion over [`SchemaType`]; containers compose generics,
//! references go through the model namer, native-primitive results take one
//! more (idempotent) trip through it so every spelling stays canonical.
//! Unknown kinds pass through unchanged rather than failing, so one exotic
//! schema entry cannot abort a whole generation run.

use crate::config::GeneratorConfig;
use crate::errors::GeneratorError;
use crate::ir::{ResolvedType, SchemaType};
use crate::lang;
use crate::naming::to_model_name;

pub fn resolve(cfg: &GeneratorConfig, ty: &SchemaType) -> Result<ResolvedType, GeneratorError> {
    match ty {
        SchemaType::Primitive(kind) => resolve_primitive(cfg, kind),

        SchemaType::Array(items) => {
            let inner = resolve(cfg, items)?;
            let container = lang::TYPE_MAPPING["array"];
            let mut components = vec![container.to_string()];
            components.extend(inner.components);
            Ok(ResolvedType {
                expr: format!("{container}<{}>", inner.expr),
                is_primitive: false,
                components,
            })
        }

        SchemaType::Map(values) => {
            let inner = resolve(cfg, values)?;
            let container = lang::TYPE_MAPPING["map"];
            let key = lang::TYPE_MAPPING["string"];
            let mut components = vec![container.to_string(), key.to_string()];
            components.extend(inner.components);
            Ok(ResolvedType {
                expr: format!("{container}<{key}, {}>", inner.expr),
                is_primitive: false,
                components,
            })
        }

        SchemaType::Ref(name) => {
            let model = to_model_name(cfg, name)?;
            Ok(ResolvedType {
                expr: model.clone(),
                is_primitive: false,
                components: vec![model],
            })
        }
    }
}

fn resolve_primitive(cfg: &GeneratorConfig, kind: &str) -> Result<ResolvedType, GeneratorError> {
    match lang::TYPE_MAPPING.get(kind) {
        Some(native) => {
            let is_primitive = lang::LANGUAGE_PRIMITIVES.contains(native);
            // Native primitives take one more trip through the model namer;
            // exempt spellings come back unchanged.
            let expr =
                if is_primitive { to_model_name(cfg, native)? } else { (*native).to_string() };
            Ok(ResolvedType { components: vec![expr.clone()], expr, is_primitive })
        }
        None => {
            tracing::warn!(kind, "no native mapping for schema kind, passing through");
            Ok(ResolvedType {
                expr: kind.to_string(),
                is_primitive: false,
                components: vec![kind.to_string()],
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> GeneratorConfig {
        GeneratorConfig::default()
    }

    fn prim(kind: &str) -> SchemaType {
        SchemaType::Primitive(kind.to_string())
    }

    #[test]
    fn primitives_map_to_native_types() {
        let cfg = cfg();
        assert_eq!(resolve(&cfg, &prim("string")).unwrap().expr, "std::string");
        assert_eq!(resolve(&cfg, &prim("integer")).unwrap().expr, "int");
        assert_eq!(resolve(&cfg, &prim("long")).unwrap().expr, "long long");
        assert_eq!(resolve(&cfg, &prim("binary")).unwrap().expr, "std::vector<uint8_t>");
        assert_eq!(resolve(&cfg, &prim("date-time")).unwrap().expr, "std::string");
        assert_eq!(resolve(&cfg, &prim("object")).unwrap().expr, "VariantObject");
    }

    #[test]
    fn primitive_flag_tracks_the_native_set() {
        let cfg = cfg();
        assert!(resolve(&cfg, &prim("boolean")).unwrap().is_primitive);
        assert!(resolve(&cfg, &prim("string")).unwrap().is_primitive);
        assert!(!resolve(&cfg, &prim("object")).unwrap().is_primitive);
        assert!(!resolve(&cfg, &prim("binary")).unwrap().is_primitive);
    }

    #[test]
    fn nested_arrays_compose() {
        let cfg = cfg();
        let ty = SchemaType::Array(Box::new(SchemaType::Array(Box::new(prim("string")))));
        let resolved = resolve(&cfg, &ty).unwrap();
        assert_eq!(resolved.expr, "std::vector<std::vector<std::string>>");
        assert_eq!(resolved.components, vec!["std::vector", "std::vector", "std::string"]);
    }

    #[test]
    fn maps_are_string_keyed() {
        let cfg = cfg();
        let ty = SchemaType::Map(Box::new(SchemaType::Ref("Pet".to_string())));
        let resolved = resolve(&cfg, &ty).unwrap();
        assert_eq!(resolved.expr, "std::map<std::string, SWGPet>");
        assert_eq!(resolved.expr, format!(
            "std::map<std::string, {}>",
            to_model_name(&cfg, "Pet").unwrap()
        ));
    }

    #[test]
    fn arrays_of_maps_of_references() {
        let cfg = cfg();
        let ty = SchemaType::Array(Box::new(SchemaType::Map(Box::new(SchemaType::Ref(
            "Order".to_string(),
        )))));
        let resolved = resolve(&cfg, &ty).unwrap();
        assert_eq!(resolved.expr, "std::vector<std::map<std::string, SWGOrder>>");
    }

    #[test]
    fn references_become_model_names() {
        let cfg = cfg();
        let resolved = resolve(&cfg, &SchemaType::Ref("pet.category".to_string())).unwrap();
        assert_eq!(resolved.expr, "SWGPet_category");
        assert!(!resolved.is_primitive);
    }

    #[test]
    fn unmapped_kinds_pass_through_unchanged() {
        let cfg = cfg();
        let resolved = resolve(&cfg, &prim("quaternion")).unwrap();
        assert_eq!(resolved.expr, "quaternion");
        assert!(!resolved.is_primitive);
    }

    #[test]
    fn empty_reference_names_are_rejected() {
        let cfg = cfg();
        assert!(resolve(&cfg, &SchemaType::Ref(String::new())).is_err());
    }
}
