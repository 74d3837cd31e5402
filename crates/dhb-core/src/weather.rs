//! Weather lookup: one call to the weather port, rendered as a single line.

use crate::{
    location::PlaceName,
    ports::{WeatherOutcome, WeatherReport, WeatherService},
};

/// Fetch and format the current weather for `place`.
///
/// Never fails: rejections and errors come back as warning/error lines.
pub async fn lookup(service: &dyn WeatherService, place: PlaceName) -> String {
    match service.current_weather(place).await {
        Ok(WeatherOutcome::Report(report)) => format_report(place, &report),
        Ok(WeatherOutcome::Rejected { message }) => {
            tracing::warn!(place = %place, ?message, "weather service rejected request");
            format!(
                "⚠️ Could not fetch weather: {}",
                message.as_deref().unwrap_or("unknown error")
            )
        }
        Err(e) => {
            tracing::warn!(place = %place, error = %e, "weather lookup failed");
            format!("❌ Error fetching weather: {e}")
        }
    }
}

pub fn format_report(place: PlaceName, report: &WeatherReport) -> String {
    format!(
        "🌦️ {place} Weather: {}°C, {}, Humidity: {}%",
        report.temperature_c,
        capitalize(&report.description),
        report.humidity_pct
    )
}

/// First character upper-cased, the rest lower-cased.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
