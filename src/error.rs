use thiserror::Error;

/// Errors surfaced at the tool dispatch boundary.
///
/// Individual tools collapse upstream failures to `None`; this type only
/// covers problems the caller can act on (unknown tool, bad parameters,
/// search provider failures, configuration).
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    #[error("Search provider error: {0}")]
    Search(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ToolError>;

impl ToolError {
    /// Get the error code for structured responses
    pub fn error_code(&self) -> &'static str {
        match self {
            ToolError::Config(_) => "CONFIG_ERROR",
            ToolError::Serialization(_) => "SERIALIZATION_ERROR",
            ToolError::Validation(_) => "VALIDATION_ERROR",
            ToolError::ToolNotFound(_) => "TOOL_NOT_FOUND",
            ToolError::Search(_) => "SEARCH_ERROR",
        }
    }

    /// Convert to a structured error payload
    pub fn to_error_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string()
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_payload_shape() {
        let error = ToolError::ToolNotFound("forecast".to_string());
        let payload = error.to_error_payload();
        assert_eq!(payload["error"]["code"], "TOOL_NOT_FOUND");
        assert_eq!(payload["error"]["message"], "Tool not found: forecast");
    }

    #[test]
    fn test_every_variant_has_a_code() {
        assert_eq!(ToolError::Config("x".into()).error_code(), "CONFIG_ERROR");
        assert_eq!(ToolError::Validation("x".into()).error_code(), "VALIDATION_ERROR");
        assert_eq!(ToolError::Search("x".into()).error_code(), "SEARCH_ERROR");
        assert_eq!(
            ToolError::Search("401 Unauthorized".into()).to_string(),
            "Search provider error: 401 Unauthorized"
        );
    }

    #[test]
    fn test_serde_errors_convert() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: ToolError = err.into();
        assert_eq!(error.error_code(), "SERIALIZATION_ERROR");
    }
}
