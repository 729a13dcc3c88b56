//! JSON Schema inference and validation.
//!
//! Inference walks a document and emits the draft-07 shape: every node
//! gets a `type`, objects recurse into `properties`, arrays take `items`
//! from their first element. Validation compiles a schema and collects
//! every violation instead of stopping at the first.

use crate::error_codes;
use serde_json::{Map, Value, json};
use thiserror::Error;

pub const DRAFT7_URI: &str = "http://json-schema.org/draft-07/schema#";

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SchemaError {
    #[error("[DEVBELT_SCHEMA_001] invalid JSON instance: {message}. Suggestion: fix the document syntax and retry.")]
    InvalidInstance { message: String },
    #[error("[DEVBELT_SCHEMA_002] schema does not compile: {message}. Suggestion: check the schema against the draft-07 metaschema.")]
    InvalidSchema { message: String },
}

impl SchemaError {
    pub fn code(&self) -> &'static str {
        match self {
            SchemaError::InvalidInstance { .. } => error_codes::SCHEMA_INVALID_INSTANCE,
            SchemaError::InvalidSchema { .. } => error_codes::SCHEMA_INVALID_SCHEMA,
        }
    }
}

/// A single violation reported by validation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ValidationIssue {
    /// JSON pointer to the offending value; empty for the root.
    pub path: String,
    pub message: String,
}

/// Infer a schema node for `value`.
///
/// Numbers always infer as `"number"`; empty arrays emit no `items`;
/// mixed arrays take `items` from the first element only.
pub fn infer_schema(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "type": "null" }),
        Value::Bool(_) => json!({ "type": "boolean" }),
        Value::Number(_) => json!({ "type": "number" }),
        Value::String(_) => json!({ "type": "string" }),
        Value::Array(items) => match items.first() {
            Some(first) => json!({ "type": "array", "items": infer_schema(first) }),
            None => json!({ "type": "array" }),
        },
        Value::Object(fields) => {
            let mut properties = Map::new();
            for (key, field) in fields {
                properties.insert(key.clone(), infer_schema(field));
            }
            json!({ "type": "object", "properties": properties })
        }
    }
}

/// Parse `input`, infer its schema, and render a `$schema`-stamped document.
pub fn infer_schema_document(input: &str) -> Result<String, SchemaError> {
    let instance: Value = serde_json::from_str(input).map_err(|e| SchemaError::InvalidInstance {
        message: e.to_string(),
    })?;
    let mut document = Map::new();
    document.insert("$schema".to_string(), Value::String(DRAFT7_URI.to_string()));
    if let Value::Object(fields) = infer_schema(&instance) {
        for (key, value) in fields {
            document.insert(key, value);
        }
    }
    serde_json::to_string_pretty(&Value::Object(document)).map_err(|e| {
        SchemaError::InvalidInstance {
            message: e.to_string(),
        }
    })
}

/// Validate `instance` against `schema`, collecting every violation.
///
/// An empty issue list means the instance is valid. Schema compilation
/// failures are errors; violations are data.
pub fn check(schema: &Value, instance: &Value) -> Result<Vec<ValidationIssue>, SchemaError> {
    let validator = jsonschema::validator_for(schema).map_err(|e| SchemaError::InvalidSchema {
        message: e.to_string(),
    })?;
    let issues: Vec<ValidationIssue> = validator
        .iter_errors(instance)
        .map(|error| ValidationIssue {
            path: error.instance_path().to_string(),
            message: error.to_string(),
        })
        .collect();
    tracing::debug!(issues = issues.len(), "validated instance against schema");
    Ok(issues)
}
