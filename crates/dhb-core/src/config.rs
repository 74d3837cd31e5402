use std::{env, fmt, net::IpAddr, time::Duration};

use crate::{errors::Error, Result};

pub const DEFAULT_OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
pub const DEFAULT_ALADHAN_BASE_URL: &str = "https://api.aladhan.com/v1";
/// Islamic Society of North America.
pub const DEFAULT_PRAYER_CALC_METHOD: u8 = 2;
pub const DEFAULT_HEALTH_PORT: u16 = 8080;

/// Typed configuration, built once at startup and shared by `Arc`.
#[derive(Clone)]
pub struct Config {
    // Secrets
    pub telegram_bot_token: String,
    pub openweather_api_key: String,

    // Upstream services
    pub openweather_base_url: String,
    pub aladhan_base_url: String,
    pub prayer_calc_method: u8,
    /// `None` leaves reqwest without a request timeout.
    pub http_timeout: Option<Duration>,

    // Liveness endpoint
    pub health_bind_addr: IpAddr,
    pub health_port: u16,
}

impl Config {
    /// Load `.env` (if present) and read the process environment.
    pub fn load() -> Result<Self> {
        // Existing env vars win over `.env` entries.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).and_then(non_empty);

        let telegram_bot_token = get("TELEGRAM_BOT_TOKEN").ok_or_else(|| {
            Error::Config("TELEGRAM_BOT_TOKEN environment variable is required".to_string())
        })?;
        let openweather_api_key = get("OPENWEATHER_API_KEY").ok_or_else(|| {
            Error::Config("OPENWEATHER_API_KEY environment variable is required".to_string())
        })?;

        let openweather_base_url = get("OPENWEATHER_BASE_URL")
            .map(trim_trailing_slash)
            .unwrap_or_else(|| DEFAULT_OPENWEATHER_BASE_URL.to_string());
        let aladhan_base_url = get("ALADHAN_BASE_URL")
            .map(trim_trailing_slash)
            .unwrap_or_else(|| DEFAULT_ALADHAN_BASE_URL.to_string());
        let prayer_calc_method =
            parse_or(get("PRAYER_CALC_METHOD"), DEFAULT_PRAYER_CALC_METHOD);

        let http_timeout = get("HTTP_TIMEOUT_SECS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        let health_bind_addr = parse_or(get("HEALTH_BIND_ADDR"), IpAddr::from([0, 0, 0, 0]));
        let health_port = parse_or(get("PORT"), DEFAULT_HEALTH_PORT);

        Ok(Self {
            telegram_bot_token,
            openweather_api_key,
            openweather_base_url,
            aladhan_base_url,
            prayer_calc_method,
            http_timeout,
            health_bind_addr,
            health_port,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("telegram_bot_token", &"<redacted>")
            .field("openweather_api_key", &"<redacted>")
            .field("openweather_base_url", &self.openweather_base_url)
            .field("aladhan_base_url", &self.aladhan_base_url)
            .field("prayer_calc_method", &self.prayer_calc_method)
            .field("http_timeout", &self.http_timeout)
            .field("health_bind_addr", &self.health_bind_addr)
            .field("health_port", &self.health_port)
            .finish()
    }
}

fn parse_or<T: std::str::FromStr>(v: Option<String>, default: T) -> T {
    v.and_then(|s| s.trim().parse::<T>().ok()).unwrap_or(default)
}

fn trim_trailing_slash(s: String) -> String {
    s.trim().trim_end_matches('/').to_string()
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
