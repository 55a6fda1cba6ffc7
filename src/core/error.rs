use thiserror::Error;

/// Failures captured while loading the inputs of a validation run.
///
/// These never escape the validator as unhandled faults; they are recorded
/// as diagnostics and the run reports `valid = false`.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// Schema file missing, unreadable, not valid JSON, or not compilable
    /// as a JSON Schema.
    #[error("could not load schema {path}: {reason}")]
    Schema { path: String, reason: String },

    /// Document file missing, unreadable, or not valid JSON.
    #[error("could not load document {path}: {reason}")]
    Document { path: String, reason: String },
}
