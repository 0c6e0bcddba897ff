//! Default value synthesis: every schema type gets a syntactically valid
//! initializer so generated fields always compile. Unhandled kinds fall back
//! to a bare `null` token rather than failing the run.

use crate::config::GeneratorConfig;
use crate::errors::GeneratorError;
use crate::ir::SchemaType;
use crate::naming::to_model_name;

pub fn default_value(cfg: &GeneratorConfig, ty: &SchemaType) -> Result<String, GeneratorError> {
    match ty {
        SchemaType::Array(_) | SchemaType::Map(_) => Ok("{}".to_string()),

        SchemaType::Ref(name) => Ok(format!("{}{{}}", to_model_name(cfg, name)?)),

        SchemaType::Primitive(kind) => Ok(match kind.as_str() {
            "string" | "password" | "binary" | "uuid" => "{}".to_string(),
            "boolean" => "bool{false}".to_string(),
            "double" => "double{0}".to_string(),
            "float" => "float{0.0f}".to_string(),
            "integer" => "int{0}".to_string(),
            "long" | "number" => "long long{0LL}".to_string(),
            // kind-level container spellings get the same empty-brace init
            "array" | "map" => "{}".to_string(),
            _ => "null".to_string(),
        }),
    }
}
