use serde_json::json;
use agent_tool_belt::{
    default_tools, tools::{JobSearchTool, WeatherTool}, tools_with_context, FunctionFactory, Tool,
    ToolContext, ToolError, Validator,
};

#[test]
fn test_default_tool_order() {
    let factory = default_tools();
    assert_eq!(
        factory.function_names(),
        vec!["get_weather", "search_104_jobs"]
    );
    assert!(!factory.has_function("search"));

    let factory = tools_with_context(ToolContext::new(5).with_search_api_key("tvly-test"));
    assert_eq!(
        factory.function_names(),
        vec!["get_weather", "search_104_jobs", "search"]
    );
}

#[test]
fn test_tool_schemas() {
    let weather = WeatherTool::new();
    let jobs = JobSearchTool::new();

    let weather_schema = weather.parameters_schema();
    assert_eq!(weather_schema["type"], "object");
    assert_eq!(weather_schema["required"], json!(["location"]));

    let jobs_schema = jobs.parameters_schema();
    assert_eq!(jobs_schema["required"], json!(["keyword"]));
    assert!(jobs_schema["properties"]["keyword"]["description"]
        .as_str()
        .unwrap()
        .contains("page="));
}

#[test]
fn test_openai_tool_descriptors() {
    let tools = default_tools().get_openai_tools();
    assert_eq!(tools.len(), 2);
    assert_eq!(tools[0]["function"]["name"], "get_weather");
    assert_eq!(tools[1]["function"]["name"], "search_104_jobs");
    assert!(tools
        .iter()
        .all(|tool| tool["function"]["parameters"].is_object()));
}

#[tokio::test]
async fn test_unknown_tool() {
    let factory = default_tools();
    let err = factory
        .execute_function("calculator", json!({}))
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::ToolNotFound(ref name) if name == "calculator"));
    assert_eq!(err.to_error_payload()["error"]["code"], "TOOL_NOT_FOUND");
}

#[tokio::test]
async fn test_blank_input_returns_null() {
    let factory = default_tools();

    let weather = factory
        .execute_function("get_weather", json!({"location": "   "}))
        .await
        .unwrap();
    assert!(weather.is_null());

    let jobs = factory
        .execute_function("search_104_jobs", json!({"keyword": ""}))
        .await
        .unwrap();
    assert!(jobs.is_null());
}

#[tokio::test]
async fn test_invalid_parameters() {
    let factory = default_tools();
    let err = factory
        .execute_function("get_weather", json!({"location": 7}))
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "VALIDATION_ERROR");
    assert!(err.to_string().contains("location"));
}

#[tokio::test]
async fn test_strict_validation_runs_before_tool() {
    let mut factory = FunctionFactory::new().with_validator(Validator::Strict);
    factory.register_tool(WeatherTool::new());

    let err = factory
        .execute_function("get_weather", json!({"city": "Taipei"}))
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "VALIDATION_ERROR");
}
