use crate::{Result, ToolError};
use jsonschema::JSONSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Validation strategies for tool parameters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Validator {
    /// Rely on each tool's serde deserialization
    #[default]
    SerdeFirst,
    /// Check parameters against the tool's JSON Schema before dispatch
    Strict,
}

impl Validator {
    /// Check `params` against `schema` according to this strategy
    pub fn check(&self, schema: &Value, params: &Value) -> Result<()> {
        match self {
            Validator::SerdeFirst => Ok(()),
            Validator::Strict => strict_validate(schema, params),
        }
    }
}

/// Deserialize tool parameters, reporting the failing field path
pub fn deserialize_params<T: DeserializeOwned>(params: Value) -> Result<T> {
    serde_path_to_error::deserialize(params).map_err(|e| {
        let path = e.path().to_string();
        let location = if path == "." { "<root>".to_string() } else { path };
        ToolError::Validation(format!(
            "Parameter validation failed at {}: {}",
            location,
            e.inner()
        ))
    })
}

fn strict_validate(schema: &Value, params: &Value) -> Result<()> {
    let compiled = JSONSchema::compile(schema)
        .map_err(|e| ToolError::Validation(format!("Invalid parameter schema: {}", e)))?;

    let result = match compiled.validate(params) {
        Ok(()) => Ok(()),
        Err(errors) => {
            let messages: Vec<String> = errors
                .map(|e| {
                    let path = e.instance_path.to_string();
                    if path.is_empty() {
                        e.to_string()
                    } else {
                        format!("{} (at {})", e, path)
                    }
                })
                .collect();
            Err(ToolError::Validation(messages.join("; ")))
        }
    };
    result
}
