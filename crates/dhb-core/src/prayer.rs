//! Prayer-time lookup.

use crate::{
    clock::to_12_hour,
    location::PlaceName,
    ports::{PrayerOutcome, PrayerTimesService, TimingSet},
    Result,
};

/// Fetch today's timings for `place` and render the five-line report.
///
/// Never fails: rejections and errors (including a malformed timing string)
/// come back as warning/error lines.
pub async fn lookup(service: &dyn PrayerTimesService, place: PlaceName) -> String {
    let rendered = match service.timings(place.coordinates()).await {
        Ok(PrayerOutcome::Timings(timings)) => format_report(place, &timings),
        Ok(PrayerOutcome::Rejected) => {
            tracing::warn!(place = %place, "prayer-times service rejected request");
            return "⚠️ Could not fetch prayer times.".to_string();
        }
        Err(e) => Err(e),
    };

    rendered.unwrap_or_else(|e| {
        tracing::warn!(place = %place, error = %e, "prayer-times lookup failed");
        format!("❌ Error fetching prayer times: {e}")
    })
}

pub fn format_report(place: PlaceName, timings: &TimingSet) -> Result<String> {
    let mut lines = vec![format!("🕌 Prayer times for {place} today:")];
    for (name, time) in timings.ordered() {
        lines.push(format!("{name}: {}", to_12_hour(time)?));
    }
    Ok(lines.join("\n"))
}
