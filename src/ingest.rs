//! OpenAPI/Swagger document → descriptor IR.
//!
//! Stand-in for a full specification parser: reads exactly the subset the
//! resolver consumes (named schemas and operations) from either a Swagger
//! 2.0 `definitions` section or an OpenAPI 3.x `components/schemas` section,
//! plus `paths`. Deserialization failures report the JSON path of the
//! offending node.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::errors::GeneratorError;
use crate::ir::{FieldDesc, OperationDesc, ParamDesc, SchemaDesc, SchemaType};

// ------------------------------- Raw shapes ------------------------------- //
// Field order in the document is field order in the generated model, hence
// IndexMap everywhere.

#[derive(Debug, Deserialize)]
struct RawDoc {
    #[serde(default)]
    swagger: Option<String>,
    #[serde(default)]
    openapi: Option<String>,
    #[serde(default)]
    definitions: Option<IndexMap<String, RawSchema>>,
    #[serde(default)]
    components: Option<RawComponents>,
    #[serde(default)]
    paths: IndexMap<String, RawPathItem>,
}

#[derive(Debug, Deserialize)]
struct RawComponents {
    #[serde(default)]
    schemas: IndexMap<String, RawSchema>,
}

#[derive(Debug, Deserialize)]
struct RawSchema {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    properties: IndexMap<String, RawProperty>,
    #[serde(default)]
    required: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct RawProperty {
    #[serde(rename = "type", default)]
    ty: Option<String>,
    #[serde(default)]
    format: Option<String>,
    #[serde(default)]
    items: Option<Box<RawProperty>>,
    #[serde(rename = "additionalProperties", default)]
    additional: Option<RawAdditional>,
    #[serde(rename = "$ref", default)]
    reference: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

/// `additionalProperties` is either a schema or a bare boolean.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawAdditional {
    Schema(Box<RawProperty>),
    Flag(bool),
}

#[derive(Debug, Deserialize, Default)]
struct RawPathItem {
    get: Option<RawOperation>,
    put: Option<RawOperation>,
    post: Option<RawOperation>,
    delete: Option<RawOperation>,
    options: Option<RawOperation>,
    head: Option<RawOperation>,
    patch: Option<RawOperation>,
}

impl RawPathItem {
    fn operations(&self) -> impl Iterator<Item = (&'static str, &RawOperation)> {
        [
            ("GET", &self.get),
            ("PUT", &self.put),
            ("POST", &self.post),
            ("DELETE", &self.delete),
            ("OPTIONS", &self.options),
            ("HEAD", &self.head),
            ("PATCH", &self.patch),
        ]
        .into_iter()
        .filter_map(|(method, op)| op.as_ref().map(|op| (method, op)))
    }
}

#[derive(Debug, Deserialize)]
struct RawOperation {
    #[serde(rename = "operationId", default)]
    operation_id: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    parameters: Vec<RawParameter>,
    #[serde(rename = "requestBody", default)]
    request_body: Option<RawBody>,
    #[serde(default)]
    responses: IndexMap<String, RawResponse>,
}

#[derive(Debug, Deserialize)]
struct RawParameter {
    name: String,
    // 2.0 inline type fields
    #[serde(rename = "type", default)]
    ty: Option<String>,
    #[serde(default)]
    format: Option<String>,
    #[serde(default)]
    items: Option<Box<RawProperty>>,
    // 3.x (and 2.0 body params) carry a nested schema instead
    #[serde(default)]
    schema: Option<RawProperty>,
}

#[derive(Debug, Deserialize, Default)]
struct RawBody {
    #[serde(default)]
    content: IndexMap<String, RawMedia>,
}

#[derive(Debug, Deserialize, Default)]
struct RawMedia {
    #[serde(default)]
    schema: Option<RawProperty>,
}

#[derive(Debug, Deserialize, Default)]
struct RawResponse {
    // 2.0 inline
    #[serde(default)]
    schema: Option<RawProperty>,
    // 3.x media-typed
    #[serde(default)]
    content: IndexMap<String, RawMedia>,
}

// -------------------------------- Ingest ---------------------------------- //

/// Deserialize with JSON-path context in error messages.
fn from_value_with_path<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, GeneratorError> {
    match serde_path_to_error::deserialize(value) {
        Ok(v) => Ok(v),
        Err(err) => {
            let path = err.path().to_string();
            Err(GeneratorError::Parse { path, message: err.into_inner().to_string() })
        }
    }
}

pub fn ingest_document(
    doc: &serde_json::Value,
) -> Result<(Vec<SchemaDesc>, Vec<OperationDesc>), GeneratorError> {
    let raw: RawDoc = from_value_with_path(doc.clone())?;
    if raw.swagger.is_none() && raw.openapi.is_none() {
        return Err(GeneratorError::UnsupportedDocument(
            "missing `swagger`/`openapi` version field".to_string(),
        ));
    }

    let mut schemas = Vec::new();
    if let Some(defs) = raw.definitions {
        schemas.extend(defs.into_iter().map(|(name, s)| schema_desc(name, s)));
    }
    if let Some(components) = raw.components {
        schemas.extend(components.schemas.into_iter().map(|(name, s)| schema_desc(name, s)));
    }

    let mut ops = Vec::new();
    for (path, item) in &raw.paths {
        for (method, op) in item.operations() {
            ops.push(operation_desc(path, method, op));
        }
    }

    Ok((schemas, ops))
}

fn schema_desc(name: String, raw: RawSchema) -> SchemaDesc {
    let RawSchema { description, properties, required } = raw;
    let fields = properties
        .into_iter()
        .map(|(field_name, prop)| FieldDesc {
            ty: property_type(&prop),
            required: required.iter().any(|r| r == &field_name),
            description: prop.description,
            name: field_name,
        })
        .collect();
    SchemaDesc { name, description, fields }
}

fn operation_desc(path: &str, method: &str, op: &RawOperation) -> OperationDesc {
    let tag = op.tags.first().cloned().unwrap_or_else(|| "default".to_string());

    let mut params: Vec<ParamDesc> = op
        .parameters
        .iter()
        .map(|p| ParamDesc { name: p.name.clone(), ty: parameter_type(p) })
        .collect();
    if let Some(body) = &op.request_body {
        if let Some(ty) = first_media_type(&body.content) {
            params.push(ParamDesc { name: "body".to_string(), ty });
        }
    }

    OperationDesc {
        // missing ids surface as empty and fail loudly at lowering
        id: op.operation_id.clone().unwrap_or_default(),
        tag,
        http_method: method.to_string(),
        path: path.to_string(),
        params,
        returns: response_type(&op.responses),
    }
}

fn parameter_type(p: &RawParameter) -> SchemaType {
    if let Some(schema) = &p.schema {
        return property_type(schema);
    }
    property_type(&RawProperty {
        ty: p.ty.clone(),
        format: p.format.clone(),
        items: p.items.clone(),
        ..RawProperty::default()
    })
}

/// First 2xx response with a schema wins; operations without one have no
/// return type.
fn response_type(responses: &IndexMap<String, RawResponse>) -> Option<SchemaType> {
    for (status, response) in responses {
        if !status.starts_with('2') {
            continue;
        }
        if let Some(schema) = &response.schema {
            return Some(property_type(schema));
        }
        if let Some(ty) = first_media_type(&response.content) {
            return Some(ty);
        }
    }
    None
}

fn first_media_type(content: &IndexMap<String, RawMedia>) -> Option<SchemaType> {
    content.values().find_map(|media| media.schema.as_ref().map(property_type))
}

// ----------------------------- Type descriptors --------------------------- //

fn ref_tail(reference: &str) -> &str {
    reference.rsplit('/').next().unwrap_or(reference)
}

/// Map a raw property onto the schema kind set. `type` + `format` pairs
/// collapse into single kinds (`integer`/`int64` → `long`, `string`/`uuid` →
/// `uuid`, ...); unknown types pass through for the resolver to warn about.
fn property_type(p: &RawProperty) -> SchemaType {
    if let Some(reference) = &p.reference {
        return SchemaType::Ref(ref_tail(reference).to_string());
    }
    let kind = match (p.ty.as_deref(), p.format.as_deref()) {
        (Some("array"), _) => {
            let item = match &p.items {
                Some(items) => property_type(items),
                None => SchemaType::Primitive("object".to_string()),
            };
            return SchemaType::Array(Box::new(item));
        }
        (Some("object"), _) => match &p.additional {
            Some(RawAdditional::Schema(values)) => {
                return SchemaType::Map(Box::new(property_type(values)));
            }
            Some(RawAdditional::Flag(true)) => {
                return SchemaType::Map(Box::new(SchemaType::Primitive("object".to_string())));
            }
            _ => "object",
        },
        (Some("integer"), Some("int64")) => "long",
        (Some("integer"), _) => "integer",
        (Some("number"), Some("float")) => "float",
        (Some("number"), Some("double")) => "double",
        (Some("number"), _) => "number",
        (Some("string"), Some("date-time")) => "date-time",
        (Some("string"), Some("date")) => "date",
        (Some("string"), Some("uuid")) => "uuid",
        (Some("string"), Some("password")) => "password",
        (Some("string"), Some("binary" | "byte")) => "binary",
        (Some("string"), _) => "string",
        (Some("boolean"), _) => "boolean",
        (Some("file"), _) => "file",
        (Some(other), _) => other,
        (None, _) => "object",
    };
    SchemaType::Primitive(kind.to_string())
}

// --------------------------------- Tests ---------------------------------- //

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ingest_swagger_2_definitions() {
        let doc = json!({
            "swagger": "2.0",
            "info": { "title": "Petstore", "version": "1.0.0" },
            "definitions": {
                "Pet": {
                    "description": "A pet",
                    "required": ["id", "name"],
                    "properties": {
                        "id": { "type": "integer", "format": "int64" },
                        "name": { "type": "string" },
                        "tags": {
                            "type": "array",
                            "items": { "$ref": "#/definitions/Tag" }
                        },
                        "attributes": {
                            "type": "object",
                            "additionalProperties": { "type": "string" }
                        }
                    }
                },
                "Tag": {
                    "properties": { "label": { "type": "string" } }
                }
            },
            "paths": {}
        });

        let (schemas, ops) = ingest_document(&doc).unwrap();
        assert!(ops.is_empty());
        assert_eq!(schemas.len(), 2);

        let pet = &schemas[0];
        assert_eq!(pet.name, "Pet");
        assert_eq!(pet.description.as_deref(), Some("A pet"));
        assert_eq!(pet.fields[0].ty, SchemaType::Primitive("long".to_string()));
        assert!(pet.fields[0].required);
        assert!(!pet.fields[2].required);
        assert_eq!(
            pet.fields[2].ty,
            SchemaType::Array(Box::new(SchemaType::Ref("Tag".to_string())))
        );
        assert_eq!(
            pet.fields[3].ty,
            SchemaType::Map(Box::new(SchemaType::Primitive("string".to_string())))
        );
    }

    #[test]
    fn ingest_openapi_3_components_and_paths() {
        let doc = json!({
            "openapi": "3.0.3",
            "info": { "title": "Petstore", "version": "1.0.0" },
            "components": {
                "schemas": {
                    "Order": {
                        "properties": {
                            "shipDate": { "type": "string", "format": "date-time" }
                        }
                    }
                }
            },
            "paths": {
                "/store/order/{orderId}": {
                    "get": {
                        "operationId": "get_order_by_id",
                        "tags": ["store"],
                        "parameters": [
                            { "name": "orderId", "in": "path",
                              "schema": { "type": "integer", "format": "int64" } }
                        ],
                        "responses": {
                            "200": {
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/Order" }
                                    }
                                }
                            }
                        }
                    },
                    "post": {
                        "operationId": "place_order",
                        "tags": ["store"],
                        "requestBody": {
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/Order" }
                                }
                            }
                        },
                        "responses": { "404": {} }
                    }
                }
            }
        });

        let (schemas, ops) = ingest_document(&doc).unwrap();
        assert_eq!(schemas.len(), 1);
        assert_eq!(schemas[0].fields[0].ty, SchemaType::Primitive("date-time".to_string()));

        assert_eq!(ops.len(), 2);
        let get = &ops[0];
        assert_eq!(get.id, "get_order_by_id");
        assert_eq!(get.http_method, "GET");
        assert_eq!(get.tag, "store");
        assert_eq!(get.params[0].ty, SchemaType::Primitive("long".to_string()));
        assert_eq!(get.returns, Some(SchemaType::Ref("Order".to_string())));

        let post = &ops[1];
        assert_eq!(post.params.last().unwrap().name, "body");
        assert_eq!(post.returns, None);
    }

    #[test]
    fn untagged_operations_land_in_default() {
        let doc = json!({
            "swagger": "2.0",
            "paths": {
                "/ping": { "get": { "operationId": "ping", "responses": {} } }
            }
        });
        let (_, ops) = ingest_document(&doc).unwrap();
        assert_eq!(ops[0].tag, "default");
    }

    #[test]
    fn missing_version_field_is_unsupported() {
        let doc = json!({ "paths": {} });
        assert!(matches!(
            ingest_document(&doc),
            Err(GeneratorError::UnsupportedDocument(_))
        ));
    }

    #[test]
    fn parse_errors_carry_the_json_path() {
        let doc = json!({
            "swagger": "2.0",
            "definitions": { "Pet": { "required": "id" } }
        });
        let err = ingest_document(&doc).unwrap_err();
        match err {
            GeneratorError::Parse { path, .. } => assert!(path.contains("Pet")),
            other => panic!("expected a parse error, got {other:?}"),
        }
    }
}
