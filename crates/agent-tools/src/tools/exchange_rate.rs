//! Currency converter tool using the ExchangeRate-API pair endpoint.

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use brain_core::{ParamType, ToolDefinition};
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::error::ToolError;
use crate::tool::{Tool, ToolArgs, ToolOutput};

/// Default ExchangeRate-API base URL.
pub const DEFAULT_EXCHANGE_URL: &str = "https://v6.exchangerate-api.com";

/// Response from the `/v6/{key}/pair/{from}/{to}/{amount}` endpoint.
///
/// Failures come back with `result: "error"` and an `error-type`, often
/// alongside a non-2xx status, so the body is decoded either way. A
/// conversion only counts with both a 2xx status and `result: "success"`.
#[derive(Debug, Deserialize)]
struct PairResponse {
    result: Option<String>,
    conversion_rate: Option<f64>,
    conversion_result: Option<f64>,
    #[serde(rename = "error-type")]
    error_type: Option<String>,
}

/// Connection settings for the exchange rate tool.
#[derive(Debug, Clone)]
pub struct ExchangeRateConfig {
    /// Base URL of the ExchangeRate-API service.
    pub api_url: String,
    /// API key, embedded in the request path.
    pub api_key: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ExchangeRateConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_EXCHANGE_URL.to_string(),
            api_key: String::new(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl ExchangeRateConfig {
    /// Load from `EXCHANGE_API_KEY` and `EXCHANGE_API_URL`.
    pub fn from_env() -> Self {
        let api_key = env::var("EXCHANGE_API_KEY").unwrap_or_default();
        if api_key.is_empty() {
            warn!("EXCHANGE_API_KEY not set; currency conversions will fail");
        }

        Self {
            api_url: env::var("EXCHANGE_API_URL")
                .unwrap_or_else(|_| DEFAULT_EXCHANGE_URL.to_string()),
            api_key,
            ..Default::default()
        }
    }
}

/// Currency converter tool.
///
/// # Parameters
///
/// - `from_currency` (required): Source currency code (e.g., "USD")
/// - `to_currency` (required): Target currency code (e.g., "PKR")
/// - `amount` (optional): Amount to convert, defaults to 1
///
/// # Examples
///
/// ```json
/// {"from_currency": "usd", "to_currency": "pkr", "amount": 50}
/// {"from_currency": "EUR", "to_currency": "GBP"}
/// ```
pub struct ExchangeRate {
    client: reqwest::Client,
    config: ExchangeRateConfig,
}

/// Outcome of a pair lookup that reached the provider.
enum Conversion {
    Converted { converted: f64, rate: f64 },
    Rejected(String),
}

impl ExchangeRate {
    /// Create a new exchange rate tool.
    pub fn new(config: ExchangeRateConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_default();
        Self { client, config }
    }

    fn pair_url(&self, from: &str, to: &str, amount: f64) -> Result<Url, ToolError> {
        let mut url = Url::parse(&self.config.api_url)?;
        url.path_segments_mut()
            .map_err(|_| ToolError::ExecutionFailed("Exchange API URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(&["v6", &self.config.api_key, "pair", from, to, &amount.to_string()]);
        Ok(url)
    }

    async fn convert(&self, amount: f64, from: &str, to: &str) -> Result<Conversion, ToolError> {
        let url = self.pair_url(from, to, amount)?;
        debug!("Fetching {} -> {} pair rate", from, to);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        let data: PairResponse = serde_json::from_str(&body)?;

        if !status.is_success() || data.result.as_deref() != Some("success") {
            debug!("Exchange API rejected request with status {}", status);
            return Ok(Conversion::Rejected(
                data.error_type.unwrap_or_else(|| "Unknown issue".to_string()),
            ));
        }

        match (data.conversion_result, data.conversion_rate) {
            (Some(converted), Some(rate)) => Ok(Conversion::Converted { converted, rate }),
            _ => Err(ToolError::ExecutionFailed(
                "No conversion result returned".to_string(),
            )),
        }
    }
}

#[async_trait]
impl Tool for ExchangeRate {
    fn name(&self) -> &str {
        "exchange_rate"
    }

    fn description(&self) -> &str {
        "Convert an amount between two currencies using live exchange rates."
    }

    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(self.name(), self.description())
            .param("from_currency", ParamType::String, "Source currency code, e.g. USD")
            .param("to_currency", ParamType::String, "Target currency code, e.g. PKR")
            .optional_param("amount", ParamType::Number, "Amount to convert, defaults to 1")
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let from = args.get_string("from_currency")?.trim().to_uppercase();
        let to = args.get_string("to_currency")?.trim().to_uppercase();
        let amount = args.get_f64_or("amount", 1.0)?;

        debug!("Converting {} {} to {}", amount, from, to);

        match self.convert(amount, &from, &to).await {
            Ok(Conversion::Converted { converted, rate }) => Ok(ToolOutput::success(format!(
                "💱 {} {} = {:.2} {} (Rate: {})",
                amount, from, converted, to, rate
            ))),
            Ok(Conversion::Rejected(reason)) => {
                Ok(ToolOutput::failure(format!("⚠️ Exchange error: {}", reason)))
            }
            Err(e) => {
                warn!("Exchange rate fetch failed: {}", e);
                Ok(ToolOutput::failure(format!("❌ Error: {}", e)))
            }
        }
    }
}
