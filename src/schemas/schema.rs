use schemars::JsonSchema;
use serde_json::Value;

/// JSON Schema for a tool's parameter struct, as sent to the model.
///
/// Falls back to an empty object schema if the generated schema cannot be
/// serialized.
pub fn parameters_schema<T: JsonSchema>() -> Value {
    let root = schemars::schema_for!(T);
    serde_json::to_value(&root.schema).unwrap_or_else(|_| {
        serde_json::json!({
            "type": "object",
            "properties": {},
            "required": []
        })
    })
}
