//! Serde helpers for persisted timestamps.
//!
//! Timestamps are written as RFC 3339 strings in UTC with millisecond
//! precision. Reading also accepts epoch milliseconds, which older
//! vocabulary exports use for `createdAt`.
//!
//! ```ignore
//! #[serde(with = "crate::timestamp")]
//! pub created_at: DateTime<Utc>,
//! ```

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Millis(i64),
    Text(String),
}

pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    match RawTimestamp::deserialize(deserializer)? {
        RawTimestamp::Millis(ms) => Utc
            .timestamp_millis_opt(ms)
            .single()
            .ok_or_else(|| de::Error::custom(format!("timestamp out of range: {ms}"))),
        RawTimestamp::Text(text) => DateTime::parse_from_rfc3339(&text)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(de::Error::custom),
    }
}
