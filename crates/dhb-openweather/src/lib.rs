//! OpenWeatherMap adapter (current weather).
//!
//! Uses the `data/2.5/weather` endpoint keyed by place name, in metric units.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use dhb_core::{
    config::Config,
    errors::Error,
    location::PlaceName,
    ports::{WeatherOutcome, WeatherReport, WeatherService},
    Result,
};

#[derive(Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    base_url: String,
    http: reqwest::Client,
}

impl OpenWeatherClient {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let http = builder
            .build()
            .map_err(|e| Error::External(format!("openweather client build failed: {e}")))?;

        Ok(Self {
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn from_config(cfg: &Config) -> Result<Self> {
        Self::new(
            cfg.openweather_api_key.clone(),
            cfg.openweather_base_url.clone(),
            cfg.http_timeout,
        )
    }
}

#[async_trait]
impl WeatherService for OpenWeatherClient {
    async fn current_weather(&self, place: PlaceName) -> Result<WeatherOutcome> {
        let resp = self
            .http
            .get(format!("{}/weather", self.base_url))
            .query(&[
                ("q", place.display_name()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(transport_error)?;

        let status = resp.status();
        let body = resp.text().await.map_err(transport_error)?;
        tracing::debug!(place = %place, status = status.as_u16(), "openweather response");

        decode(status.as_u16(), &body)
    }
}

// The request URL carries `appid`; never let it reach a chat message.
fn transport_error(e: reqwest::Error) -> Error {
    Error::Transport(e.without_url().to_string())
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    /// Number on success, sometimes a numeric string on errors.
    #[serde(default)]
    cod: Option<Value>,
    #[serde(default)]
    message: Option<Value>,
    #[serde(default)]
    main: Option<WireMain>,
    #[serde(default)]
    weather: Vec<WireCondition>,
}

#[derive(Debug, Deserialize)]
struct WireMain {
    temp: f64,
    humidity: u32,
}

#[derive(Debug, Deserialize)]
struct WireCondition {
    description: String,
}

/// Decode an OpenWeather response body into a tagged outcome.
pub fn decode(http_status: u16, body: &str) -> Result<WeatherOutcome> {
    let http_ok = (200..300).contains(&http_status);

    let wire: WireResponse = serde_json::from_str(body)
        .map_err(|e| Error::Decode(format!("weather payload (HTTP {http_status}): {e}")))?;

    let code = wire.cod.as_ref().and_then(status_code);
    if !http_ok || code != Some(200) {
        let message = wire
            .message
            .as_ref()
            .and_then(message_text)
            .or_else(|| (!http_ok).then(|| format!("HTTP {http_status}")));
        return Ok(WeatherOutcome::Rejected { message });
    }

    let main = wire
        .main
        .ok_or_else(|| Error::Decode("weather payload missing `main`".to_string()))?;
    let condition = wire
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| Error::Decode("weather payload has no conditions".to_string()))?;

    Ok(WeatherOutcome::Report(WeatherReport {
        temperature_c: main.temp,
        description: condition.description,
        humidity_pct: main.humidity,
    }))
}

fn status_code(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn message_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        _ => None,
    }
}
