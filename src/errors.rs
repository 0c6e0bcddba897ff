//! Error taxonomy for the generator core.
//!
//! Only identifier emptiness is a hard failure; everything else the resolver
//! can answer with a best-effort value does not go through here at all.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Operations with an empty id cannot be named; the run aborts rather
    /// than silently skipping them.
    #[error("empty operation id in {context}")]
    EmptyOperationId { context: String },

    /// A raw name sanitized down to nothing (or arrived empty).
    #[error("empty identifier: {context}")]
    EmptyName { context: String },

    /// The input document failed to deserialize; `path` is the JSON path of
    /// the offending node.
    #[error("malformed document at {path}: {message}")]
    Parse { path: String, message: String },

    #[error("unsupported document: {0}")]
    UnsupportedDocument(String),
}

impl GeneratorError {
    /// Replace the context of a naming error with what the call site knows
    /// about where the name came from.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        match self {
            Self::EmptyOperationId { .. } => Self::EmptyOperationId { context: context.into() },
            Self::EmptyName { .. } => Self::EmptyName { context: context.into() },
            other => other,
        }
    }
}
