// Strongly-typed IR for codegen. No serde_json::Value past ingest.

use indexmap::IndexMap;
use serde::Serialize;

/// Language-neutral description of a field's type, as the document parser
/// hands it over. Array/Map nesting may be arbitrarily deep; `Ref` names are turned
/// into model names syntactically, existence checks are the caller's problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaType {
    /// Schema-level kind name ("string", "integer", "date-time", ...).
    Primitive(String),
    Array(Box<SchemaType>),
    /// String-keyed; only the value type varies.
    Map(Box<SchemaType>),
    /// Reference to a named schema.
    Ref(String),
}

#[derive(Debug, Clone)]
pub struct FieldDesc {
    pub name: String,
    pub ty: SchemaType,
    pub required: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SchemaDesc {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<FieldDesc>,
}

#[derive(Debug, Clone)]
pub struct ParamDesc {
    pub name: String,
    pub ty: SchemaType,
}

#[derive(Debug, Clone)]
pub struct OperationDesc {
    pub id: String,
    pub tag: String,
    pub http_method: String,
    pub path: String,
    pub params: Vec<ParamDesc>,
    pub returns: Option<SchemaType>,
}

/// A schema type mapped onto the target language.
///
/// `components` carries the container/leaf names that make up `expr` so the
/// import resolver can compute includes without re-parsing the expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    pub expr: String,
    /// True when `expr` is a language-native primitive (bool, int, ...);
    /// these never take the model-name prefix.
    pub is_primitive: bool,
    pub components: Vec<String>,
}

// ------------------------------ Output trees ------------------------------ //
//
// Everything below is handed to the template renderer as a read-only tree;
// field order is load order for deterministic output.

#[derive(Debug, Clone, Serialize)]
pub struct ModelField {
    pub name: String,
    pub raw_name: String,
    pub ty: String,
    pub default_value: String,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Model {
    pub name: String,
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub fields: Vec<ModelField>,
    pub imports: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Param {
    pub name: String,
    pub raw_name: String,
    pub ty: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiOperation {
    pub id: String,
    pub method_name: String,
    pub http_method: String,
    pub path: String,
    pub params: Vec<Param>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
    pub imports: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Api {
    pub name: String,
    pub file_name: String,
    pub operations: Vec<ApiOperation>,
}

/// The full bundle the renderer consumes: resolved models and apis plus the
/// configuration values threaded through unchanged.
#[derive(Debug, Clone, Serialize)]
pub struct RenderContext {
    pub namespace: String,
    pub namespace_for_macros: String,
    pub namespace_parts: Vec<String>,
    pub model_name_prefix: String,
    pub api_version: String,
    pub generated_at: String,
    pub models: IndexMap<String, Model>,
    pub apis: IndexMap<String, Api>,
}
