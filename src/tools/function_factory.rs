use super::{tool::ToolRegistry, Tool};
use crate::schemas::Validator;
use crate::{Result, ToolError};
use serde_json::Value;
use tracing::debug;

/// Factory for creating and managing function/tool execution
#[derive(Debug, Default)]
pub struct FunctionFactory {
    registry: ToolRegistry,
    validator: Validator,
}

impl FunctionFactory {
    /// Create a new function factory
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose how parameters are validated before dispatch
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = validator;
        self
    }

    /// Register a tool with the factory
    pub fn register_tool<T: Tool + 'static>(&mut self, tool: T) {
        self.registry.register(tool);
    }

    /// Execute a function call by name
    pub async fn execute_function(&self, function_name: &str, parameters: Value) -> Result<Value> {
        let tool = self
            .registry
            .get(function_name)
            .ok_or_else(|| ToolError::ToolNotFound(function_name.to_string()))?;

        self.validator
            .check(&tool.parameters_schema(), &parameters)?;

        debug!(tool = function_name, "executing tool");
        tool.execute(parameters).await
    }

    /// Get all available tools for OpenAI function calling
    pub fn get_openai_tools(&self) -> Vec<Value> {
        self.registry.to_openai_tools()
    }

    /// Check if a function exists
    pub fn has_function(&self, name: &str) -> bool {
        self.registry.get(name).is_some()
    }

    /// Registered tool names, in registration order
    pub fn function_names(&self) -> Vec<&'static str> {
        self.registry.names()
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }
}
