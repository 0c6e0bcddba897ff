//! Lower schema/operation descriptors into the renderable trees.
//!
//! This is the join point: type resolution, naming, default synthesis, and
//! import resolution all run per descriptor, and the results land in the
//! ordered maps the template renderer consumes. Everything here is a pure
//! function of the descriptors plus the config, so the per-schema batch
//! parallelizes without locking.

use indexmap::IndexMap;
use rayon::prelude::*;

use crate::config::GeneratorConfig;
use crate::defaults::default_value;
use crate::errors::GeneratorError;
use crate::imports::imports_for;
use crate::ir::{
    Api, ApiOperation, Model, ModelField, OperationDesc, Param, RenderContext, SchemaDesc,
};
use crate::naming::{
    to_api_filename, to_api_name, to_model_filename, to_model_name, to_operation_id,
    to_param_name, to_var_name,
};
use crate::resolve::resolve;

// -------------------------------- Models ---------------------------------- //

pub fn lower_model(cfg: &GeneratorConfig, schema: &SchemaDesc) -> Result<Model, GeneratorError> {
    let name = to_model_name(cfg, &schema.name)
        .map_err(|e| e.with_context(format!("schema {:?}", schema.name)))?;
    let file_name = to_model_filename(cfg, &schema.name)
        .map_err(|e| e.with_context(format!("schema {:?}", schema.name)))?;

    let mut fields = Vec::with_capacity(schema.fields.len());
    let mut imports = Vec::new();
    for field in &schema.fields {
        let resolved = resolve(cfg, &field.ty)?;
        let var = to_var_name(cfg, &field.name)
            .map_err(|e| e.with_context(format!("field {:?} of {:?}", field.name, schema.name)))?;
        let default = default_value(cfg, &field.ty)?;

        for line in imports_for(&resolved) {
            if !imports.contains(&line) {
                imports.push(line);
            }
        }
        fields.push(ModelField {
            name: var,
            raw_name: field.name.clone(),
            ty: resolved.expr,
            default_value: default,
            required: field.required,
            description: field.description.clone(),
        });
    }

    Ok(Model { name, file_name, description: schema.description.clone(), fields, imports })
}

/// Batch form; schemas are independent, so they lower in parallel and come
/// back in input order.
pub fn lower_models(
    cfg: &GeneratorConfig,
    schemas: &[SchemaDesc],
) -> Result<IndexMap<String, Model>, GeneratorError> {
    let lowered: Result<Vec<_>, GeneratorError> = schemas
        .par_iter()
        .map(|schema| lower_model(cfg, schema).map(|model| (schema.name.clone(), model)))
        .collect();
    Ok(lowered?.into_iter().collect())
}

// ---------------------------------- Apis ---------------------------------- //

pub fn lower_operation(
    cfg: &GeneratorConfig,
    op: &OperationDesc,
) -> Result<ApiOperation, GeneratorError> {
    let method_name = to_operation_id(cfg, &op.id)
        .map_err(|e| e.with_context(format!("{} {}", op.http_method, op.path)))?;

    let mut params = Vec::with_capacity(op.params.len());
    let mut imports = Vec::new();
    for param in &op.params {
        let resolved = resolve(cfg, &param.ty)?;
        let name = to_param_name(cfg, &param.name).map_err(|e| {
            e.with_context(format!("parameter {:?} of {} {}", param.name, op.http_method, op.path))
        })?;
        for line in imports_for(&resolved) {
            if !imports.contains(&line) {
                imports.push(line);
            }
        }
        params.push(Param { name, raw_name: param.name.clone(), ty: resolved.expr });
    }

    let return_type = match &op.returns {
        Some(ty) => {
            let resolved = resolve(cfg, ty)?;
            for line in imports_for(&resolved) {
                if !imports.contains(&line) {
                    imports.push(line);
                }
            }
            Some(resolved.expr)
        }
        None => None,
    };

    Ok(ApiOperation {
        id: op.id.clone(),
        method_name,
        http_method: op.http_method.clone(),
        path: op.path.clone(),
        params,
        return_type,
        imports,
    })
}

/// Group operations by tag into api classes; tag order is first-seen order.
pub fn lower_apis(
    cfg: &GeneratorConfig,
    ops: &[OperationDesc],
) -> Result<IndexMap<String, Api>, GeneratorError> {
    let mut apis: IndexMap<String, Api> = IndexMap::new();
    for op in ops {
        let lowered = lower_operation(cfg, op)?;
        if !apis.contains_key(&op.tag) {
            let name = to_api_name(cfg, &op.tag)
                .map_err(|e| e.with_context(format!("api tag for {} {}", op.http_method, op.path)))?;
            let file_name = to_api_filename(cfg, &op.tag)
                .map_err(|e| e.with_context(format!("api tag for {} {}", op.http_method, op.path)))?;
            apis.insert(op.tag.clone(), Api { name, file_name, operations: Vec::new() });
        }
        apis[&op.tag].operations.push(lowered);
    }
    Ok(apis)
}

// ------------------------------ Full context ------------------------------ //

/// The whole bundle: models, apis, and the config-derived values the
/// renderer needs threaded through.
pub fn render_context(
    cfg: &GeneratorConfig,
    schemas: &[SchemaDesc],
    ops: &[OperationDesc],
) -> Result<RenderContext, GeneratorError> {
    Ok(RenderContext {
        namespace: cfg.namespace.clone(),
        namespace_for_macros: cfg.namespace_for_macros(),
        namespace_parts: cfg.namespace_parts(),
        model_name_prefix: cfg.model_name_prefix.clone(),
        api_version: cfg.api_version.clone(),
        generated_at: chrono::Utc::now().to_rfc3339(),
        models: lower_models(cfg, schemas)?,
        apis: lower_apis(cfg, ops)?,
    })
}

// --------------------------------- Tests ---------------------------------- //
