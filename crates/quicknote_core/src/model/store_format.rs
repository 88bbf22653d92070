//! Lenient decoding of store column values.
//!
//! # Invariants
//! - Timestamps are accepted with or without an offset; a missing offset is UTC.
//! - A `null` text column decodes as an empty string.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::{Error, Unexpected, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt::Formatter;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses `timestamptz` and offset-less `timestamp` renderings.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
}

pub fn timestamp<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    struct TimestampVisitor;

    impl<'de> Visitor<'de> for TimestampVisitor {
        type Value = DateTime<Utc>;

        fn expecting(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
            formatter.write_str("an RFC 3339 timestamp, offset optional")
        }

        fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
            parse_timestamp(v).ok_or_else(|| Error::invalid_value(Unexpected::Str(v), &self))
        }
    }

    deserializer.deserialize_str(TimestampVisitor)
}

pub fn text_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
