//! Aladhan adapter (daily prayer timings by coordinates).

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use dhb_core::{
    config::Config,
    errors::Error,
    location::Coordinates,
    ports::{PrayerOutcome, PrayerTimesService, TimingSet},
    Result,
};

#[derive(Clone, Debug)]
pub struct AladhanClient {
    base_url: String,
    method: u8,
    http: reqwest::Client,
}

impl AladhanClient {
    pub fn new(base_url: impl Into<String>, method: u8, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let http = builder
            .build()
            .map_err(|e| Error::External(format!("aladhan client build failed: {e}")))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            method,
            http,
        })
    }

    pub fn from_config(cfg: &Config) -> Result<Self> {
        Self::new(
            cfg.aladhan_base_url.clone(),
            cfg.prayer_calc_method,
            cfg.http_timeout,
        )
    }
}

#[async_trait]
impl PrayerTimesService for AladhanClient {
    async fn timings(&self, coords: Coordinates) -> Result<PrayerOutcome> {
        let resp = self
            .http
            .get(format!("{}/timings", self.base_url))
            .query(&[
                ("latitude", coords.latitude.to_string()),
                ("longitude", coords.longitude.to_string()),
                ("method", self.method.to_string()),
            ])
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        tracing::debug!(status = status.as_u16(), "aladhan response");

        decode(&body)
    }
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    #[serde(default)]
    code: Option<i64>,
    /// An object on success, a plain error string otherwise.
    #[serde(default)]
    data: Value,
}

#[derive(Debug, Deserialize)]
struct WireData {
    timings: WireTimings,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct WireTimings {
    fajr: String,
    dhuhr: String,
    asr: String,
    maghrib: String,
    isha: String,
}

/// Decode an Aladhan `timings` body. Only `code == 200` counts as success.
pub fn decode(body: &str) -> Result<PrayerOutcome> {
    let wire: WireResponse = serde_json::from_str(body)
        .map_err(|e| Error::Decode(format!("prayer-times payload: {e}")))?;

    if wire.code != Some(200) {
        return Ok(PrayerOutcome::Rejected);
    }

    let data: WireData = serde_json::from_value(wire.data)
        .map_err(|e| Error::Decode(format!("prayer-times payload: {e}")))?;
    let t = data.timings;

    Ok(PrayerOutcome::Timings(TimingSet {
        fajr: t.fajr,
        dhuhr: t.dhuhr,
        asr: t.asr,
        maghrib: t.maghrib,
        isha: t.isha,
    }))
}

#[cfg(test)]
mod tests {
    use dhb_core::location::PlaceName;
    use mockito::Matcher;

    use super::*;

    const SUCCESS: &str = r#"{
        "code": 200,
        "status": "OK",
        "data": {
            "timings": {
                "Fajr": "05:12", "Sunrise": "06:20", "Dhuhr": "12:21", "Asr": "15:40",
                "Sunset": "18:22", "Maghrib": "18:30", "Isha": "19:42",
                "Imsak": "05:02", "Midnight": "00:21"
            },
            "meta": {"method": {"id": 2}}
        }
    }"#;

    #[test]
    fn decodes_the_five_prayers() {
        let out = decode(SUCCESS).unwrap();
        assert_eq!(
            out,
            PrayerOutcome::Timings(TimingSet {
                fajr: "05:12".to_string(),
                dhuhr: "12:21".to_string(),
                asr: "15:40".to_string(),
                maghrib: "18:30".to_string(),
                isha: "19:42".to_string(),
            })
        );
    }

    #[test]
    fn non_200_code_is_rejected() {
        let body = r#"{"code":400,"status":"BAD_REQUEST","data":"Please specify a valid latitude"}"#;
        assert_eq!(decode(body).unwrap(), PrayerOutcome::Rejected);
    }

    #[test]
    fn missing_prayer_is_a_decode_error() {
        let body = r#"{"code":200,"data":{"timings":{"Fajr":"05:12","Dhuhr":"12:21"}}}"#;
        assert!(matches!(decode(body), Err(Error::Decode(_))));
        assert!(matches!(decode("<html>"), Err(Error::Decode(_))));
    }

    #[tokio::test]
    async fn queries_by_coordinates_and_method() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/timings")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("latitude".into(), "9.36".into()),
                Matcher::UrlEncoded("longitude".into(), "42.03".into()),
                Matcher::UrlEncoded("method".into(), "2".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(SUCCESS)
            .create_async()
            .await;

        let client = AladhanClient::new(server.url(), 2, None).unwrap();
        let report = dhb_core::prayer::lookup(&client, PlaceName::Haramaya).await;

        mock.assert_async().await;
        assert_eq!(report.lines().nth(1), Some("Fajr: 05:12 AM"));
        assert_eq!(report.lines().last(), Some("Isha: 07:42 PM"));
    }

    #[tokio::test]
    async fn http_error_body_becomes_fixed_warning() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/timings")
            .match_query(Matcher::Any)
            .with_status(400)
            .with_body(r#"{"code":400,"status":"BAD_REQUEST","data":"bad"}"#)
            .create_async()
            .await;

        let client = AladhanClient::new(server.url(), 2, None).unwrap();
        let report = dhb_core::prayer::lookup(&client, PlaceName::AddisAbaba).await;
        assert_eq!(report, "⚠️ Could not fetch prayer times.");
    }

    #[tokio::test]
    async fn connection_failure_is_contained() {
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();

        let client = AladhanClient::new(format!("http://127.0.0.1:{port}"), 2, None).unwrap();
        let report = dhb_core::prayer::lookup(&client, PlaceName::BaleRobe).await;
        assert!(report.starts_with("❌ Error fetching prayer times:"), "{report}");
    }
}
