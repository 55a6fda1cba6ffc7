use crate::core::document;
use crate::core::schema;
use jsonschema::Validator;
use serde_json::Value;
use std::fmt;

/// Cache slot for a lazily loaded input. `Failed` is terminal: a load that
/// failed once is not retried within the same validator instance.
enum Slot<T> {
    Pending,
    Ready(T),
    Failed,
}

impl<T> Slot<T> {
    fn is_pending(&self) -> bool {
        matches!(self, Slot::Pending)
    }

    fn ready(&self) -> Option<&T> {
        match self {
            Slot::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// A single schema violation: the JSON Pointer path of the offending value
/// in the document, plus the constraint message.
pub struct Violation {
    pub path: String,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

pub struct Outcome {
    pub valid: bool,
    pub violations: Vec<Violation>,
}

/// Validates one JSON document against one schema.
///
/// Construction performs no I/O. The document and schema are each read and
/// parsed at most once, on first use; when no schema path is given the
/// permissive fallback schema is compiled instead. Load failures are
/// captured as diagnostics and surface as a `valid = false` outcome rather
/// than a panic or an error return.
pub struct JsonValidator {
    document_path: String,
    schema_path: Option<String>,
    document: Slot<Value>,
    schema: Slot<Validator>,
    diagnostics: Vec<String>,
}

impl JsonValidator {
    pub fn new(document_path: &str, schema_path: Option<&str>) -> Self {
        Self {
            document_path: document_path.to_string(),
            schema_path: schema_path.map(String::from),
            document: Slot::Pending,
            schema: Slot::Pending,
            diagnostics: Vec::new(),
        }
    }

    fn load_document(&mut self) {
        if !self.document.is_pending() {
            return;
        }
        self.document = match document::load(&self.document_path) {
            Ok(tree) => Slot::Ready(tree),
            Err(e) => {
                self.diagnostics.push(e.to_string());
                Slot::Failed
            }
        };
    }

    fn load_schema(&mut self) {
        if !self.schema.is_pending() {
            return;
        }
        self.schema = match &self.schema_path {
            Some(path) => match schema::load(path) {
                Ok(validator) => Slot::Ready(validator),
                Err(e) => {
                    self.diagnostics.push(e.to_string());
                    Slot::Failed
                }
            },
            None => Slot::Ready(schema::fallback_validator()),
        };
    }

    /// Run the validation. Loads the document and schema if not already
    /// loaded; repeated calls reuse the cached inputs and never re-read
    /// the files.
    pub fn validate(&mut self) -> Outcome {
        self.load_document();
        self.load_schema();

        let (Some(document), Some(validator)) = (self.document.ready(), self.schema.ready())
        else {
            return Outcome {
                valid: false,
                violations: Vec::new(),
            };
        };

        let violations: Vec<Violation> = validator
            .iter_errors(document)
            .map(|err| {
                let path = err.instance_path.to_string();
                let path = if path.is_empty() {
                    "/".to_string()
                } else {
                    path
                };
                Violation {
                    path,
                    message: err.to_string(),
                }
            })
            .collect();

        Outcome {
            valid: violations.is_empty(),
            violations,
        }
    }

    /// Load-failure messages captured so far, in the order they occurred.
    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }
}
