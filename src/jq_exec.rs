//! Optional jq pre-filter for input documents (slice a large specification,
//! strip vendor extensions) before ingest sees them.

use anyhow::{anyhow, Context, Result};
use jaq_core::{compile::Undefined, load, Compiler, Ctx, RcIter};
use jaq_json::Val;
use serde_json::Value;

/// Run `filter_src` over `input`; each value the filter yields becomes one
/// document.
pub fn apply_filter(filter_src: &str, input: &Value) -> Result<Vec<Value>> {
    let loader = load::Loader::new(jaq_std::defs().chain(jaq_json::defs()));
    let arena = load::Arena::default();
    let program = load::File { code: filter_src, path: () };

    let modules = loader.load(&arena, program).map_err(format_load_errors)?;

    let filter = Compiler::default()
        .with_funs(jaq_std::funs().chain(jaq_json::funs()))
        .compile(modules)
        .map_err(format_undefined_errors)?;

    let inputs = RcIter::new(core::iter::empty());
    let mut out = Vec::new();
    for item in filter.run((Ctx::new([], &inputs), Val::from(input.clone()))) {
        let val = item.map_err(|e| anyhow!("jq runtime error: {e:?}"))?;
        // Val renders as JSON text; round-trip through serde keeps one
        // Value representation everywhere downstream.
        let value = serde_json::from_str(&val.to_string())
            .context("jq filter produced non-JSON output")?;
        out.push(value);
    }
    Ok(out)
}

fn format_load_errors(errs: Vec<(load::File<&str, ()>, load::Error<&str>)>) -> anyhow::Error {
    let mut msg = String::from("failed to parse jq filter:\n");
    for (file, err) in errs {
        msg.push_str(&format!("  {err:?} in `{}`\n", file.code));
    }
    anyhow!(msg)
}

fn format_undefined_errors(
    errs: Vec<(load::File<&str, ()>, Vec<(&str, Undefined)>)>,
) -> anyhow::Error {
    let mut msg = String::from("jq filter references undefined names:\n");
    for (file, list) in errs {
        for (name, undef) in list {
            msg.push_str(&format!("  `{name}` ({undef:?}) in `{}`\n", file.code));
        }
    }
    anyhow!(msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn identity_filter_passes_the_document_through() {
        let doc = json!({ "swagger": "2.0", "paths": {} });
        let out = apply_filter(".", &doc).unwrap();
        assert_eq!(out, vec![doc]);
    }

    #[test]
    fn filters_can_slice_documents() {
        let doc = json!({ "wrapper": { "swagger": "2.0" } });
        let out = apply_filter(".wrapper", &doc).unwrap();
        assert_eq!(out, vec![json!({ "swagger": "2.0" })]);
    }

    #[test]
    fn bad_filters_report_at_compile_time() {
        let doc = json!({});
        assert!(apply_filter("definitely not jq(", &doc).is_err());
    }
}
