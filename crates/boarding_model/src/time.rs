//! Timestamp wire format.
//!
//! Departures travel as local `yyyy-MM-dd HH:mm` strings with no zone. They
//! are held as [`NaiveDateTime`] so ordering and date arithmetic work.

use chrono::{NaiveDateTime, ParseError};

/// `chrono` format string for departure timestamps.
pub const DEPARTURE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parse a `yyyy-MM-dd HH:mm` departure timestamp.
///
/// # Errors
///
/// Returns the `chrono` parse error if `raw` is not in [`DEPARTURE_FORMAT`].
pub fn parse_departure(raw: &str) -> Result<NaiveDateTime, ParseError> {
    NaiveDateTime::parse_from_str(raw.trim(), DEPARTURE_FORMAT)
}

/// Format a departure timestamp as `yyyy-MM-dd HH:mm`.
#[must_use]
pub fn format_departure(at: &NaiveDateTime) -> String {
    at.format(DEPARTURE_FORMAT).to_string()
}

/// `#[serde(with = "...")]` adapter for [`DEPARTURE_FORMAT`] fields.
pub mod departure {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(at: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_departure(at))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_departure(&raw).map_err(serde::de::Error::custom)
    }
}

/// Adapter for optional [`DEPARTURE_FORMAT`] fields. Pair it with
/// `#[serde(default)]` so a missing field reads as `None`.
pub mod optional_departure {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(at: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error> {
        match at {
            Some(at) => serializer.serialize_str(&super::format_departure(at)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| super::parse_departure(&raw).map_err(serde::de::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Timelike;

    use super::*;

    #[test]
    fn test_parse_departure() {
        let at = parse_departure("2024-08-15 08:00").unwrap();
        assert_eq!(at.hour(), 8);
        assert_eq!(at.minute(), 0);
        assert_eq!(format_departure(&at), "2024-08-15 08:00");
    }

    #[test]
    fn test_parse_departure_trims_whitespace() {
        assert!(parse_departure("  2024-08-15 18:00 ").is_ok());
    }

    #[test]
    fn test_parse_departure_rejects_other_formats() {
        assert!(parse_departure("15/08/2024 08:00").is_err());
        assert!(parse_departure("2024-08-15").is_err());
    }
}
