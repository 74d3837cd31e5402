//! 24-hour → 12-hour clock conversion.

use chrono::NaiveTime;

use crate::{errors::Error, Result};

/// Convert a strict `HH:MM` 24-hour string into `hh:mm AM/PM`.
///
/// No timezone handling: the input is treated as local wall-clock time.
pub fn to_12_hour(input: &str) -> Result<String> {
    let time = parse_24_hour(input)?;
    Ok(time.format("%I:%M %p").to_string())
}

fn parse_24_hour(input: &str) -> Result<NaiveTime> {
    let invalid = |reason: &str| Error::TimeFormat {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    let b = input.as_bytes();
    if b.len() != 5 || b[2] != b':' {
        return Err(invalid("expected HH:MM"));
    }
    if ![b[0], b[1], b[3], b[4]].iter().all(u8::is_ascii_digit) {
        return Err(invalid("expected HH:MM"));
    }

    let hour = u32::from(b[0] - b'0') * 10 + u32::from(b[1] - b'0');
    let minute = u32::from(b[3] - b'0') * 10 + u32::from(b[4] - b'0');

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| invalid("hour or minute out of range"))
}

#[cfg(test)]
mod tests {
    use chrono::Timelike;
    use regex::Regex;

    use super::*;

    #[test]
    fn midnight_and_noon() {
        assert_eq!(to_12_hour("00:00").unwrap(), "12:00 AM");
        assert_eq!(to_12_hour("12:00").unwrap(), "12:00 PM");
        assert_eq!(to_12_hour("05:12").unwrap(), "05:12 AM");
        assert_eq!(to_12_hour("18:47").unwrap(), "06:47 PM");
        assert_eq!(to_12_hour("23:59").unwrap(), "11:59 PM");
    }

    #[test]
    fn every_minute_of_the_day_round_trips() {
        let shape = Regex::new(r"^(0[1-9]|1[0-2]):[0-5][0-9] (AM|PM)$").unwrap();
        for hour in 0..24 {
            for minute in 0..60 {
                let input = format!("{hour:02}:{minute:02}");
                let out = to_12_hour(&input).unwrap();
                assert!(shape.is_match(&out), "{input} -> {out}");

                let back = NaiveTime::parse_from_str(&out, "%I:%M %p").unwrap();
                assert_eq!((back.hour(), back.minute()), (hour, minute), "{input}");
            }
        }
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in [
            "", "5:12", "05:1", "0512", "24:00", "12:60", "ab:cd", "05:12 (EAT)", " 05:12", "05-12",
        ] {
            let err = to_12_hour(bad).unwrap_err();
            assert!(matches!(err, Error::TimeFormat { .. }), "{bad:?}");
        }
    }

    #[test]
    fn error_names_the_input() {
        let err = to_12_hour("25:00").unwrap_err();
        assert!(err.to_string().contains("\"25:00\""));
    }
}
