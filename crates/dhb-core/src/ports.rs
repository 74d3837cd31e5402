use async_trait::async_trait;

use crate::{
    location::{Coordinates, PlaceName},
    Result,
};

/// Current conditions for one place (metric units).
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherReport {
    pub temperature_c: f64,
    pub description: String,
    pub humidity_pct: u32,
}

/// Decoded weather response.
///
/// `Err` from the port means the call itself failed (transport or payload
/// shape); `Rejected` means the service answered and said no.
#[derive(Clone, Debug, PartialEq)]
pub enum WeatherOutcome {
    Report(WeatherReport),
    Rejected { message: Option<String> },
}

/// The five daily prayer times, as the service returned them (24-hour `HH:MM`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimingSet {
    pub fajr: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,
}

impl TimingSet {
    /// Prayers in display order.
    pub fn ordered(&self) -> [(&'static str, &str); 5] {
        [
            ("Fajr", &self.fajr),
            ("Dhuhr", &self.dhuhr),
            ("Asr", &self.asr),
            ("Maghrib", &self.maghrib),
            ("Isha", &self.isha),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PrayerOutcome {
    Timings(TimingSet),
    Rejected,
}

/// Port for a current-weather provider (OpenWeather today).
#[async_trait]
pub trait WeatherService: Send + Sync {
    async fn current_weather(&self, place: PlaceName) -> Result<WeatherOutcome>;
}

/// Port for a prayer-times provider (Aladhan today).
#[async_trait]
pub trait PrayerTimesService: Send + Sync {
    async fn timings(&self, coords: Coordinates) -> Result<PrayerOutcome>;
}
