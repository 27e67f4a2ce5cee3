use super::tool::{Tool, ToolFuture};
use crate::schemas::{deserialize_params, parameters_schema};
use crate::services::blocking_http::{fetch_json, JsonGet};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

pub const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
const SOURCE: &str = "https://open-meteo.com/";

const CURRENT_FIELDS: &str = "temperature_2m,apparent_temperature,relative_humidity_2m,\
                              precipitation,weather_code,wind_speed_10m";
const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,precipitation_probability_max";

/// Parameters for weather queries
#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct WeatherParams {
    /// Free-form place name, e.g. "Taipei" or "Kyoto, Japan"
    pub location: String,
}

/// A geocoded location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPlace {
    pub resolved_location: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Current conditions and daily forecast for a resolved place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    #[serde(flatten)]
    pub place: ResolvedPlace,
    pub current: Value,
    pub current_units: Value,
    pub daily: Value,
    pub daily_units: Value,
    pub source: String,
}

/// Weather lookup backed by the Open-Meteo geocoding and forecast APIs
#[derive(Debug, Clone)]
pub struct WeatherTool {
    geocoding_url: String,
    forecast_url: String,
}

impl Default for WeatherTool {
    fn default() -> Self {
        Self::new()
    }
}

impl WeatherTool {
    pub fn new() -> Self {
        Self {
            geocoding_url: GEOCODING_URL.to_string(),
            forecast_url: FORECAST_URL.to_string(),
        }
    }

    /// Use different geocoding and forecast endpoints
    pub fn with_endpoints(
        mut self,
        geocoding_url: impl Into<String>,
        forecast_url: impl Into<String>,
    ) -> Self {
        self.geocoding_url = geocoding_url.into();
        self.forecast_url = forecast_url.into();
        self
    }

    /// Fetch current weather and a short forecast for `location`.
    ///
    /// Returns `None` for blank input, unknown places, or any failed request.
    pub async fn lookup(&self, location: &str) -> Option<WeatherReport> {
        let location = location.trim();
        if location.is_empty() {
            return None;
        }

        let place = self.geocode(location).await?;
        debug!(
            "Resolved {} to {} ({:.4}, {:.4})",
            location, place.resolved_location, place.latitude, place.longitude
        );

        let forecast = fetch_json(
            JsonGet::new(self.forecast_url.as_str())
                .query("latitude", place.latitude)
                .query("longitude", place.longitude)
                .query("current", CURRENT_FIELDS)
                .query("daily", DAILY_FIELDS)
                .query("timezone", "auto"),
        )
        .await?;

        build_report(place, forecast)
    }

    async fn geocode(&self, location: &str) -> Option<ResolvedPlace> {
        let geocode = fetch_json(
            JsonGet::new(self.geocoding_url.as_str())
                .query("name", location)
                .query("count", 1)
                .query("language", "en")
                .query("format", "json"),
        )
        .await?;

        let first = geocode
            .get("results")
            .and_then(Value::as_array)
            .and_then(|results| results.first())?;
        resolve_place(first, location)
    }
}

/// Look up weather with the default Open-Meteo endpoints
pub async fn get_weather(location: &str) -> Option<WeatherReport> {
    WeatherTool::new().lookup(location).await
}

/// Build a [`ResolvedPlace`] from a geocoding match.
///
/// The display name joins the non-empty `name`, `admin1` and `country`
/// fields, falling back to `fallback` when all are empty.
pub fn resolve_place(geocode_match: &Value, fallback: &str) -> Option<ResolvedPlace> {
    let latitude = geocode_match.get("latitude").and_then(Value::as_f64)?;
    let longitude = geocode_match.get("longitude").and_then(Value::as_f64)?;

    let parts: Vec<&str> = ["name", "admin1", "country"]
        .iter()
        .filter_map(|key| geocode_match.get(*key).and_then(Value::as_str))
        .filter(|part| !part.is_empty())
        .collect();

    let resolved_location = if parts.is_empty() {
        fallback.to_string()
    } else {
        parts.join(", ")
    };

    Some(ResolvedPlace {
        resolved_location,
        latitude,
        longitude,
    })
}

fn build_report(place: ResolvedPlace, mut forecast: Value) -> Option<WeatherReport> {
    let forecast = forecast.as_object_mut()?;
    let current = forecast.remove("current")?;
    let mut take = |key: &str| forecast.remove(key).unwrap_or(Value::Null);

    Some(WeatherReport {
        place,
        current,
        current_units: take("current_units"),
        daily: take("daily"),
        daily_units: take("daily_units"),
        source: SOURCE.to_string(),
    })
}

impl Tool for WeatherTool {
    fn name(&self) -> &'static str {
        "get_weather"
    }

    fn description(&self) -> &'static str {
        "Fetch current weather and a short-term daily forecast for a location"
    }

    fn parameters_schema(&self) -> Value {
        parameters_schema::<WeatherParams>()
    }

    fn execute(&self, parameters: Value) -> ToolFuture<'_> {
        Box::pin(async move {
            let params: WeatherParams = deserialize_params(parameters)?;
            let report = self.lookup(&params.location).await;
            Ok(serde_json::to_value(report)?)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolved_name_skips_empty_parts() {
        let place = resolve_place(
            &json!({
                "name": "Taipei",
                "admin1": "",
                "country": "Taiwan",
                "latitude": 25.05,
                "longitude": 121.53
            }),
            "taipei",
        )
        .expect("place");

        assert_eq!(place.resolved_location, "Taipei, Taiwan");
        assert_eq!(place.latitude, 25.05);
        assert_eq!(place.longitude, 121.53);
    }

    #[test]
    fn test_resolved_name_falls_back_to_input() {
        let place = resolve_place(&json!({"latitude": 1.0, "longitude": 2.0}), "somewhere")
            .expect("place");
        assert_eq!(place.resolved_location, "somewhere");
    }

    #[test]
    fn test_missing_coordinates() {
        assert!(resolve_place(&json!({"name": "Nowhere", "latitude": 1.0}), "x").is_none());
        assert!(resolve_place(&json!({"name": "Nowhere", "longitude": 1.0}), "x").is_none());
    }

    #[test]
    fn test_report_requires_current() {
        let place = ResolvedPlace {
            resolved_location: "Osaka, Japan".to_string(),
            latitude: 34.69,
            longitude: 135.5,
        };

        assert!(build_report(place.clone(), json!({"daily": {}})).is_none());
        assert!(build_report(place.clone(), json!([1, 2])).is_none());

        let report = build_report(place, json!({"current": {"temperature_2m": 21.3}}))
            .expect("report");
        assert_eq!(report.current["temperature_2m"], 21.3);
        assert_eq!(report.daily, Value::Null);
        assert_eq!(report.source, "https://open-meteo.com/");
    }

    #[test]
    fn test_report_serializes_flat() {
        let report = WeatherReport {
            place: ResolvedPlace {
                resolved_location: "Taipei, Taiwan".to_string(),
                latitude: 25.05,
                longitude: 121.53,
            },
            current: json!({}),
            current_units: json!({}),
            daily: json!({}),
            daily_units: json!({}),
            source: SOURCE.to_string(),
        };

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["resolved_location"], "Taipei, Taiwan");
        assert_eq!(value["latitude"], 25.05);
        assert!(value.get("place").is_none());
    }

    #[test]
    fn test_blank_location_skips_network() {
        let tool = WeatherTool::new().with_endpoints("http://127.0.0.1:9/a", "http://127.0.0.1:9/b");
        assert!(tokio_test::block_on(tool.lookup("  \n ")).is_none());
    }
}
