//! Fixed tables for the C++ target.
//!
//! These are the only process-wide constants: the reserved-word set, the
//! schema-kind → native-type mapping, and the two primitive sets that decide
//! prefixing and includes. Built once, never mutated.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Extension for generated headers; file naming is a contract with the
/// renderer only.
pub const HEADER_EXT: &str = "h";

/// C++ keywords (through C++20), plus `linux` which common toolchains
/// predefine as a macro.
pub static RESERVED_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "alignas", "alignof", "and", "and_eq", "asm", "atomic_cancel", "atomic_commit",
        "atomic_noexcept", "auto", "bitand", "bitor", "bool", "break", "case", "catch", "char",
        "char8_t", "char16_t", "char32_t", "class", "compl", "concept", "const", "consteval",
        "constexpr", "const_cast", "continue", "co_await", "co_return", "co_yield", "decltype",
        "default", "delete", "do", "double", "dynamic_cast", "else", "enum", "explicit", "export",
        "extern", "false", "float", "for", "friend", "goto", "if", "inline", "int", "import",
        "long", "module", "mutable", "namespace", "new", "noexcept", "not", "not_eq", "nullptr",
        "operator", "or", "or_eq", "private", "protected", "public", "register",
        "reinterpret_cast", "requires", "return", "short", "signed", "sizeof", "static",
        "static_assert", "static_cast", "struct", "switch", "synchronized", "template", "this",
        "thread_local", "throw", "true", "try", "typedef", "typeid", "typename", "union",
        "unsigned", "using", "virtual", "void", "volatile", "wchar_t", "while", "xor", "xor_eq",
        "linux",
    ])
});

/// Schema kind → native type expression. Total over the fixed kind set;
/// anything else passes through the resolver unchanged.
pub static TYPE_MAPPING: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("string", "std::string"),
        ("integer", "int"),
        ("long", "long long"),
        ("float", "float"),
        ("double", "double"),
        ("boolean", "bool"),
        ("array", "std::vector"),
        ("map", "std::map"),
        ("number", "long long"),
        ("object", "VariantObject"),
        ("binary", "std::vector<uint8_t>"),
        ("password", "std::string"),
        ("file", "std::string"),
        ("date-time", "std::string"),
        ("date", "std::string"),
        ("uuid", "std::string"),
    ])
});

/// Native type spellings that never take the model-name prefix.
pub static LANGUAGE_PRIMITIVES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from(["bool", "int", "long long", "float", "double", "std::string"])
});

/// Native types that need no include at all.
pub static DEFAULT_INCLUDES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from(["bool", "int", "long long", "float", "double"]));
