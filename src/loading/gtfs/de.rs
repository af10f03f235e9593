//! Fast-path HH:MM:SS time parsing, reused from the feed files' byte layout
//! rather than going through a general-purpose time library - GTFS times
//! routinely exceed `24:00:00` to express service past midnight, which
//! `chrono::NaiveTime` cannot represent at all.

use serde::Deserialize;

use crate::model::Time;

fn parse_time(time_str: &str) -> Time {
    let bytes = time_str.as_bytes();

    // Fast path for well-formed "HH:MM:SS".
    if bytes.len() >= 8 && bytes[2] == b':' && bytes[5] == b':' {
        let hours = u32::from(bytes[0] - b'0') * 10 + u32::from(bytes[1] - b'0');
        let minutes = u32::from(bytes[3] - b'0') * 10 + u32::from(bytes[4] - b'0');
        let seconds = u32::from(bytes[6] - b'0') * 10 + u32::from(bytes[7] - b'0');
        return hours * 3600 + minutes * 60 + seconds;
    }

    parse_time_fallback(time_str)
}

fn parse_time_fallback(time_str: &str) -> Time {
    let mut parts = time_str.split(':');
    let hours: u32 = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
    let minutes: u32 = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
    let seconds: u32 = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
    hours * 3600 + minutes * 60 + seconds
}

pub(super) fn deserialize_gtfs_time<'de, D>(deserializer: D) -> Result<Time, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let time_str = String::deserialize(deserializer)?;
    Ok(parse_time(&time_str))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_time() {
        assert_eq!(parse_time("08:15:30"), 8 * 3600 + 15 * 60 + 30);
    }

    #[test]
    fn parses_past_midnight_time() {
        assert_eq!(parse_time("25:05:00"), 25 * 3600 + 5 * 60);
    }

    #[test]
    fn fallback_handles_missing_seconds() {
        assert_eq!(parse_time_fallback("8:15"), 8 * 3600 + 15 * 60);
    }
}
