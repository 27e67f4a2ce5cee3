use crate::{default_tools, tools_with_context, FunctionFactory, ToolContext, Validator};
use anyhow::{anyhow, bail};
use clap::{Arg, ArgAction, Command};
use serde_json::{Map, Value};
use std::process::ExitCode;
use tracing::{error, info, warn};

const WEB_SEARCH_TOOL: &str = "search";

/// CLI entry point for the tool-belt binary.
///
/// Tool failures are printed to stdout as a JSON error payload and reported
/// through the exit code; usage errors are returned as `Err`.
pub async fn run() -> anyhow::Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let matches = Command::new("tool-belt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Invoke agent tools (weather, 104 jobs, web search) from the command line")
        .arg(
            Arg::new("tool")
                .help("Name of the tool to run, e.g. get_weather")
                .required_unless_present("list")
                .index(1),
        )
        .arg(
            Arg::new("input")
                .help("JSON object of parameters, or plain text for the tool's main parameter")
                .required_unless_present("list")
                .index(2),
        )
        .arg(
            Arg::new("list")
                .short('l')
                .long("list")
                .help("Print the registered tool descriptors and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("strict")
                .short('s')
                .long("strict")
                .help("Validate parameters against the tool's JSON Schema before running it")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let wants_search = matches
        .get_one::<String>("tool")
        .is_some_and(|tool| tool == WEB_SEARCH_TOOL);
    let validator = if matches.get_flag("strict") {
        Validator::Strict
    } else {
        Validator::SerdeFirst
    };
    let factory = build_factory(ToolContext::from_env(), wants_search)?.with_validator(validator);

    if matches.get_flag("list") {
        println!(
            "{}",
            serde_json::to_string_pretty(&factory.get_openai_tools())?
        );
        return Ok(ExitCode::SUCCESS);
    }

    let tool_name = matches
        .get_one::<String>("tool")
        .ok_or_else(|| anyhow!("a tool name is required"))?;
    let input = matches
        .get_one::<String>("input")
        .ok_or_else(|| anyhow!("tool input is required"))?;

    let schema = factory
        .registry()
        .get(tool_name)
        .map(|tool| tool.parameters_schema())
        .ok_or_else(|| {
            anyhow!(
                "unknown tool `{}` (available: {})",
                tool_name,
                factory.function_names().join(", ")
            )
        })?;
    let parameters = parse_input(&schema, input)?;

    info!("Running tool {} with {}", tool_name, parameters);
    let outcome = factory.execute_function(tool_name, parameters).await;
    match &outcome {
        Ok(Value::Null) => info!("Tool {} returned no result", tool_name),
        Ok(_) => {}
        Err(e) => error!("Tool execution failed: {}", e),
    }

    let (rendered, code) = render_outcome(outcome)?;
    println!("{}", rendered);
    Ok(code)
}

/// Render a tool outcome as the single JSON document printed on stdout.
fn render_outcome(outcome: crate::Result<Value>) -> anyhow::Result<(String, ExitCode)> {
    match outcome {
        Ok(output) => Ok((serde_json::to_string_pretty(&output)?, ExitCode::SUCCESS)),
        Err(e) => Ok((
            serde_json::to_string_pretty(&e.to_error_payload())?,
            ExitCode::FAILURE,
        )),
    }
}

/// Register web search only when it is configured. A broken search
/// configuration is fatal only if web search is the tool being run.
fn build_factory(
    context: crate::Result<ToolContext>,
    wants_search: bool,
) -> anyhow::Result<FunctionFactory> {
    match context {
        Ok(context) if context.search_api_key.is_some() => Ok(tools_with_context(context)),
        Ok(_) => Ok(default_tools()),
        Err(e) if wants_search => Err(anyhow!("failed to read tool configuration: {}", e)),
        Err(e) => {
            warn!("Web search disabled: {}", e);
            Ok(default_tools())
        }
    }
}

/// Interpret CLI input as a JSON parameter object, or wrap plain text as the
/// schema's first required field.
fn parse_input(schema: &Value, input: &str) -> anyhow::Result<Value> {
    if let Ok(value @ Value::Object(_)) = serde_json::from_str::<Value>(input) {
        return Ok(value);
    }

    let Some(field) = schema
        .get("required")
        .and_then(Value::as_array)
        .and_then(|required| required.first())
        .and_then(Value::as_str)
    else {
        bail!("input must be a JSON object for this tool");
    };

    let mut params = Map::new();
    params.insert(field.to_string(), Value::String(input.to_string()));
    Ok(Value::Object(params))
}
