//! Identifier sanitation and naming conventions for the C++ target.
//!
//! Every function here is a pure map from a raw document name to a legal,
//! non-reserved C++ token. Policy in one place:
//! - variables/params: strip to `[A-Za-z0-9_]`, lower-case the first char,
//!   escape reserved words;
//! - model types: `PREFIX + Capitalized` with dots → underscores, unless the
//!   name is already a native/mapped/imported spelling;
//! - operation ids: reserved-word escape, then lowerCamel;
//! - empty names are rejected up front, never indexed into.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::GeneratorConfig;
use crate::errors::GeneratorError;
use crate::lang;

// ------------------------------- Sanitize --------------------------------- //

static ILLEGAL_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_.]").unwrap());
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]").unwrap());

/// Language-neutral first pass: trim, turn separators into underscores, drop
/// anything else outside the allowed charset. Case and word boundaries
/// survive; dots survive too (model names carry them until file naming).
pub fn sanitize_name(raw: &str) -> String {
    let spaced = raw.trim().replace([' ', '-'], "_");
    ILLEGAL_CHARS.replace_all(&spaced, "").into_owned()
}

pub fn is_reserved(name: &str) -> bool {
    lang::RESERVED_WORDS.contains(name)
}

/// Escape a reserved word: per-name remapping if configured, `_` prefix
/// otherwise.
pub fn escape_reserved_word(cfg: &GeneratorConfig, name: &str) -> String {
    if let Some(mapped) = cfg.reserved_word_mappings.get(name) {
        return mapped.clone();
    }
    format!("_{name}")
}

// ---------------------------- Variables/params ---------------------------- //

/// Variable naming: sanitize, strip to word chars, first char lower-cased
/// (or `_`-guarded if a digit leads), reserved words escaped.
pub fn to_var_name(cfg: &GeneratorConfig, raw: &str) -> Result<String, GeneratorError> {
    let name = sanitize_name(raw);
    let name = NON_WORD.replace_all(&name, "");
    let mut chars = name.chars();
    let first = chars.next().ok_or_else(|| GeneratorError::EmptyName {
        context: format!("variable name from {raw:?}"),
    })?;

    let mut out = String::with_capacity(name.len() + 1);
    if first.is_ascii_digit() {
        out.push('_');
        out.push(first);
    } else {
        out.extend(first.to_lowercase());
    }
    out.push_str(chars.as_str());

    if is_reserved(&out) {
        return Ok(escape_reserved_word(cfg, &out));
    }
    Ok(out)
}

/// Parameters follow the variable convention exactly; one implementation,
/// two call sites.
pub fn to_param_name(cfg: &GeneratorConfig, raw: &str) -> Result<String, GeneratorError> {
    to_var_name(cfg, raw)
}

// ------------------------------ Models/files ------------------------------ //

fn initial_caps(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Names that are already valid native expressions must never be prefixed:
/// table keys and values, native primitives, default includes, and anything
/// satisfied by a configured external import.
fn is_exempt_type_name(cfg: &GeneratorConfig, name: &str) -> bool {
    lang::TYPE_MAPPING.contains_key(name)
        || lang::TYPE_MAPPING.values().any(|v| *v == name)
        || lang::LANGUAGE_PRIMITIVES.contains(name)
        || lang::DEFAULT_INCLUDES.contains(name)
        || cfg.import_mappings.values().any(|v| v == name)
}

/// Derive the generated type name for a named schema:
/// `pet.category` → `SWGPet_category`.
pub fn to_model_name(cfg: &GeneratorConfig, raw: &str) -> Result<String, GeneratorError> {
    if raw.is_empty() {
        return Err(GeneratorError::EmptyName { context: "model name".to_string() });
    }
    if is_exempt_type_name(cfg, raw) {
        return Ok(raw.to_string());
    }
    // Already-derived names come back unchanged, so re-deriving is stable.
    if !cfg.model_name_prefix.is_empty() && raw.starts_with(&cfg.model_name_prefix) {
        return Ok(raw.to_string());
    }
    Ok(format!("{}{}", cfg.model_name_prefix, initial_caps(raw).replace('.', "_")))
}

/// File names always get the prefix-and-capitalize treatment, even for names
/// a type position would exempt.
pub fn to_model_filename(cfg: &GeneratorConfig, raw: &str) -> Result<String, GeneratorError> {
    if raw.is_empty() {
        return Err(GeneratorError::EmptyName { context: "model file name".to_string() });
    }
    Ok(format!("{}{}", cfg.model_name_prefix, initial_caps(raw).replace('.', "_")))
}

// ------------------------------- Operations ------------------------------- //

/// `add_pet_by_id` → `addPetById`. Word boundaries are underscores, dashes,
/// dots, and spaces; the rest of each word keeps its case. A leading
/// underscore run survives, so reserved-word escapes are not undone.
pub fn camelize(s: &str, lower_first: bool) -> String {
    let lead = s.len() - s.trim_start_matches('_').len();
    let (prefix, rest) = s.split_at(lead);

    let mut out = String::with_capacity(s.len());
    out.push_str(prefix);
    for word in rest.split(['_', '-', '.', ' ']).filter(|w| !w.is_empty()) {
        out.push_str(&initial_caps(word));
    }

    if lower_first {
        if let Some(pos) = out.find(|c: char| c != '_') {
            let (kept, tail) = out.split_at(pos);
            let mut chars = tail.chars();
            if let Some(c) = chars.next() {
                return kept.to_string()
                    + &c.to_lowercase().collect::<String>()
                    + chars.as_str();
            }
        }
    }
    out
}

/// Method naming for operations. Empty ids are fatal; reserved ids get the
/// escape step before camelization.
pub fn to_operation_id(cfg: &GeneratorConfig, raw: &str) -> Result<String, GeneratorError> {
    if raw.is_empty() {
        return Err(GeneratorError::EmptyOperationId { context: "operation".to_string() });
    }
    let id = if is_reserved(raw) { escape_reserved_word(cfg, raw) } else { raw.to_string() };
    Ok(camelize(&id, true))
}

/// Api class name for a resource tag: `store` → `SWGStoreApi`.
pub fn to_api_name(cfg: &GeneratorConfig, raw: &str) -> Result<String, GeneratorError> {
    if raw.is_empty() {
        return Err(GeneratorError::EmptyName { context: "api name".to_string() });
    }
    Ok(format!("{}{}Api", cfg.model_name_prefix, initial_caps(raw)))
}

/// Api files share the class-name transform.
pub fn to_api_filename(cfg: &GeneratorConfig, raw: &str) -> Result<String, GeneratorError> {
    to_api_name(cfg, raw)
}

// --------------------------------- Tests ---------------------------------- //
