use crate::core::error::ValidateError;
use jsonschema::{Draft, Validator};
use serde_json::Value;
use std::fs;
use std::sync::OnceLock;

/// Schema used when the caller supplies no schema file. It declares only the
/// dialect and imposes no constraints, so every well-formed JSON document
/// validates against it.
const FALLBACK_SCHEMA: &str = r#"{"$schema": "https://json-schema.org/draft/2019-09/schema"}"#;

static FALLBACK: OnceLock<Value> = OnceLock::new();

pub fn fallback() -> &'static Value {
    FALLBACK.get_or_init(|| {
        serde_json::from_str(FALLBACK_SCHEMA).expect("fallback schema is valid JSON")
    })
}

/// Compile the fallback schema. Always succeeds: the input is a constant.
pub fn fallback_validator() -> Validator {
    compile(fallback()).expect("fallback schema compiles to a valid validator")
}

/// Read, parse, and compile the schema file at `path`.
pub fn load(path: &str) -> Result<Validator, ValidateError> {
    let text = fs::read_to_string(path).map_err(|e| schema_error(path, e.to_string()))?;
    let tree: Value =
        serde_json::from_str(&text).map_err(|e| schema_error(path, e.to_string()))?;
    compile(&tree).map_err(|e| schema_error(path, e))
}

/// Schemas that do not declare `$schema` are interpreted as draft 2019-09;
/// an explicit `$schema` keyword takes precedence.
fn compile(tree: &Value) -> Result<Validator, String> {
    jsonschema::options()
        .with_draft(Draft::Draft201909)
        .build(tree)
        .map_err(|e| e.to_string())
}

fn schema_error(path: &str, reason: String) -> ValidateError {
    ValidateError::Schema {
        path: path.to_string(),
        reason,
    }
}
