//! Weather tool using the OpenWeather geocoding and current-conditions APIs.

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use brain_core::{ParamType, ToolDefinition};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::ToolError;
use crate::tool::{Tool, ToolArgs, ToolOutput};

/// Default OpenWeather API base URL.
pub const DEFAULT_OPENWEATHER_URL: &str = "https://api.openweathermap.org";

/// One geocoding match.
#[derive(Debug, Deserialize)]
struct GeoMatch {
    name: String,
    lat: f64,
    lon: f64,
}

/// Current conditions response (only the fields we report).
#[derive(Debug, Deserialize)]
struct CurrentConditions {
    main: MainReadings,
    wind: Wind,
    #[serde(default)]
    weather: Vec<Condition>,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct Wind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
}

/// Error body OpenWeather returns with non-2xx statuses.
#[derive(Debug, Deserialize)]
struct OpenWeatherError {
    message: String,
}

/// Connection settings for the weather tool.
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    /// Base URL serving both `/geo/1.0/direct` and `/data/2.5/weather`.
    pub api_url: String,
    /// OpenWeather API key.
    pub api_key: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_OPENWEATHER_URL.to_string(),
            api_key: String::new(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl WeatherConfig {
    /// Load from `OPENWEATHER_API_KEY` and `OPENWEATHER_API_URL`.
    pub fn from_env() -> Self {
        let api_key = env::var("OPENWEATHER_API_KEY").unwrap_or_default();
        if api_key.is_empty() {
            warn!("OPENWEATHER_API_KEY not set; weather lookups will fail");
        }

        Self {
            api_url: env::var("OPENWEATHER_API_URL")
                .unwrap_or_else(|_| DEFAULT_OPENWEATHER_URL.to_string()),
            api_key,
            ..Default::default()
        }
    }
}

/// Weather tool that resolves a (possibly misspelled) city name and
/// reports its current conditions.
///
/// The geocoding lookup does the fuzzy matching server-side, so the report
/// carries the canonical city name rather than what the user typed.
///
/// # Parameters
///
/// - `city` (required): City name, typos allowed.
///
/// # Example
///
/// ```json
/// {"city": "Lahor"}
/// ```
pub struct Weather {
    client: reqwest::Client,
    config: WeatherConfig,
}

impl Weather {
    /// Create a new weather tool.
    pub fn new(config: WeatherConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_default();
        Self { client, config }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.api_url.trim_end_matches('/'), path)
    }

    /// Resolve a city name to its best match, if any.
    async fn geocode(&self, city: &str) -> Result<Option<GeoMatch>, ToolError> {
        let url = self.endpoint("/geo/1.0/direct");
        debug!("Geocoding '{}' via {}", city, url);

        let response = self
            .client
            .get(&url)
            .query(&[("q", city), ("limit", "1"), ("appid", &self.config.api_key)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(provider_error("Geocoding", status, response).await);
        }

        let matches: Vec<GeoMatch> = response.json().await?;
        Ok(matches.into_iter().next())
    }

    /// Fetch current conditions at a coordinate, in metric units.
    async fn current_conditions(&self, lat: f64, lon: f64) -> Result<CurrentConditions, ToolError> {
        let url = self.endpoint("/data/2.5/weather");
        debug!("Fetching conditions at ({}, {}) via {}", lat, lon, url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("appid", self.config.api_key.clone()),
                ("units", "metric".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(provider_error("Weather", status, response).await);
        }

        Ok(response.json().await?)
    }

    /// Look up a city and format its report; `None` when the city is unknown.
    async fn report(&self, city: &str) -> Result<Option<String>, ToolError> {
        let Some(place) = self.geocode(city).await? else {
            return Ok(None);
        };

        let conditions = self.current_conditions(place.lat, place.lon).await?;
        let description = conditions
            .weather
            .first()
            .map(|c| c.description.as_str())
            .ok_or_else(|| ToolError::ExecutionFailed("No weather conditions returned".to_string()))?;

        Ok(Some(format_report(&place.name, &conditions, description)))
    }
}

async fn provider_error(what: &str, status: reqwest::StatusCode, response: reqwest::Response) -> ToolError {
    let body = response.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<OpenWeatherError>(&body)
        .map(|e| e.message)
        .unwrap_or(body);
    ToolError::ExecutionFailed(format!("{} API returned status {}: {}", what, status.as_u16(), detail))
}

fn format_report(name: &str, conditions: &CurrentConditions, description: &str) -> String {
    format!(
        "🌤️ Weather in {}:\n🌡️ Temp: {}°C\n💧 Humidity: {}%\n🌬️ Wind: {} m/s\n📋 Condition: {}",
        name,
        conditions.main.temp,
        conditions.main.humidity,
        conditions.wind.speed,
        capitalize(description)
    )
}

/// Upper-case the first character and lower-case the rest.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[async_trait]
impl Tool for Weather {
    fn name(&self) -> &str {
        "weather"
    }

    fn description(&self) -> &str {
        "Get live weather for a city. Misspelled city names are corrected through geocoding."
    }

    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(self.name(), self.description()).param(
            "city",
            ParamType::String,
            "Name of the city, with any typos corrected as best you can",
        )
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let city = args.get_string("city")?;

        debug!("Getting weather for '{}'", city);

        match self.report(&city).await {
            Ok(Some(report)) => Ok(ToolOutput::success(report)),
            Ok(None) => {
                debug!("No geocoding match for '{}'", city);
                Ok(ToolOutput::failure(format!(
                    "⚠️ Sorry, I couldn't find weather for '{}'.",
                    city
                )))
            }
            Err(e) => {
                warn!("Weather fetch failed: {}", e);
                Ok(ToolOutput::failure(format!("❌ Error fetching weather: {}", e)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{args, spawn_stub};
    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::collections::HashMap;

    fn tool_for(base_url: &str) -> Weather {
        Weather::new(WeatherConfig {
            api_url: base_url.to_string(),
            api_key: "test-key".to_string(),
            ..Default::default()
        })
    }

    /// Stub that knows a single city, reachable by a misspelling.
    fn karachi_stub() -> Router {
        Router::new()
            .route(
                "/geo/1.0/direct",
                get(|Query(q): Query<HashMap<String, String>>| async move {
                    assert_eq!(q.get("limit").map(String::as_str), Some("1"));
                    assert_eq!(q.get("appid").map(String::as_str), Some("test-key"));
                    match q.get("q").map(String::as_str) {
                        Some("Karachii") | Some("Karachi") => {
                            Json(json!([{"name": "Karachi", "lat": 24.86, "lon": 67.01, "country": "PK"}]))
                        }
                        _ => Json(json!([])),
                    }
                }),
            )
            .route(
                "/data/2.5/weather",
                get(|Query(q): Query<HashMap<String, String>>| async move {
                    assert_eq!(q.get("units").map(String::as_str), Some("metric"));
                    assert_eq!(q.get("lat").map(String::as_str), Some("24.86"));
                    Json(json!({
                        "main": {"temp": 31.5, "humidity": 62},
                        "wind": {"speed": 5.1},
                        "weather": [{"description": "SCATTERED clouds"}]
                    }))
                }),
            )
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("light rain"), "Light rain");
        assert_eq!(capitalize("SCATTERED clouds"), "Scattered clouds");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_definition() {
        let definition = Weather::new(WeatherConfig::default()).definition();
        assert_eq!(definition.name, "weather");
        assert_eq!(definition.required_params(), vec!["city"]);
    }

    #[tokio::test]
    async fn test_missing_city() {
        let weather = Weather::new(WeatherConfig::default());
        let result = weather.execute(ToolArgs::default()).await;
        assert!(matches!(result, Err(ToolError::MissingParameter(_))));
    }

    #[tokio::test]
    async fn test_report_uses_canonical_name() {
        let base_url = spawn_stub(karachi_stub()).await;
        let output = tool_for(&base_url)
            .execute(args(json!({"city": "Karachii"})))
            .await
            .unwrap();

        assert!(output.success);
        assert_eq!(
            output.content,
            "🌤️ Weather in Karachi:\n🌡️ Temp: 31.5°C\n💧 Humidity: 62%\n🌬️ Wind: 5.1 m/s\n📋 Condition: Scattered clouds"
        );
        assert!(!output.content.contains("Karachii"));
    }

    #[tokio::test]
    async fn test_unknown_city_echoes_input() {
        let base_url = spawn_stub(karachi_stub()).await;
        let output = tool_for(&base_url)
            .execute(args(json!({"city": "Atlantiss"})))
            .await
            .unwrap();

        assert!(!output.success);
        assert_eq!(output.content, "⚠️ Sorry, I couldn't find weather for 'Atlantiss'.");
    }

    #[tokio::test]
    async fn test_provider_failure_is_contained() {
        let router = Router::new().route(
            "/geo/1.0/direct",
            get(|| async {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({"cod": 401, "message": "Invalid API key."})),
                )
            }),
        );
        let base_url = spawn_stub(router).await;

        let output = tool_for(&base_url)
            .execute(args(json!({"city": "Paris"})))
            .await
            .unwrap();

        assert!(!output.success);
        assert!(output.content.starts_with("❌ Error fetching weather: "));
        assert!(output.content.contains("Invalid API key."));
    }

    #[tokio::test]
    async fn test_malformed_conditions_are_contained() {
        let router = Router::new()
            .route(
                "/geo/1.0/direct",
                get(|| async { Json(json!([{"name": "Oslo", "lat": 59.9, "lon": 10.7}])) }),
            )
            .route("/data/2.5/weather", get(|| async { Json(Value::String("nope".into())) }));
        let base_url = spawn_stub(router).await;

        let output = tool_for(&base_url)
            .execute(args(json!({"city": "Oslo"})))
            .await
            .unwrap();

        assert!(!output.success);
        assert!(output.content.starts_with("❌ Error fetching weather: "));
    }

    // Integration test that requires network access and OPENWEATHER_API_KEY
    #[tokio::test]
    #[ignore] // Run with: cargo test -- --ignored
    async fn test_weather_live() {
        let _ = dotenvy::dotenv();
        let weather = Weather::new(WeatherConfig::from_env());
        let output = weather.execute(args(json!({"city": "Londn"}))).await.unwrap();
        assert!(output.success);
        assert!(output.content.contains("London"));
    }
}
