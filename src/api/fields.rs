//! Serde helpers for API payload fields that need more than a derive.

use chrono::{DateTime, NaiveDateTime};

/// Extended and basic ISO 8601 forms carrying an offset (`Z`, `+00`,
/// `+0000` or `+00:00`), with or without seconds.
const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y%m%dT%H%M%S%.f%#z",
    "%Y%m%dT%H%M%#z",
];

/// The same forms without an offset, plus a space as date/time separator.
const NAIVE_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y%m%dT%H%M%S%.f",
    "%Y%m%dT%H%M",
];

/// Parse an ISO 8601 date/time that must be UTC.
///
/// Accepts a zero offset or no offset at all; anything else is rejected.
/// The result is naive UTC.
pub fn parse_utc_datetime(value: &str) -> Result<NaiveDateTime, String> {
    for format in OFFSET_FORMATS {
        if let Ok(aware) = DateTime::parse_from_str(value, format) {
            if aware.offset().local_minus_utc() != 0 {
                return Err(format!("expected date/time to be UTC based: {value}"));
            }
            return Ok(aware.naive_utc());
        }
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .ok_or_else(|| format!("invalid date/time {value:?}"))
}

/// `#[serde(with = "naive_utc")]` for a required UTC date/time.
pub mod naive_utc {
    use chrono::NaiveDateTime;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_utc_datetime(&raw).map_err(D::Error::custom)
    }

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format("%Y-%m-%dT%H:%M:%SZ"))
    }
}

/// `#[serde(with = "naive_utc_opt", default)]` for an optional UTC date/time.
pub mod naive_utc_opt {
    use chrono::NaiveDateTime;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => super::parse_utc_datetime(&raw)
                .map(Some)
                .map_err(D::Error::custom),
            None => Ok(None),
        }
    }

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => super::naive_utc::serialize(v, serializer),
            None => serializer.serialize_none(),
        }
    }
}
