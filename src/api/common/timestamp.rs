//
//  bitbucket-cloud-client
//  api/common/timestamp.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! RFC 3339 timestamps that serialize back to the exact text received.
//!
//! Bitbucket writes `2018-09-24T14:45:11.245823+00:00`. Re-rendering a
//! parsed `DateTime` would turn that into `...245823Z` and drop trailing
//! zeros from the fraction, so the wire text is stored next to the parsed
//! value and is what gets written out.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A validated timestamp that remembers its wire text.
///
/// # Example
///
/// ```rust
/// use bitbucket_cloud_client::api::common::Timestamp;
///
/// let ts: Timestamp = "2018-09-24T14:45:11.120000+00:00".parse().unwrap();
///
/// assert_eq!(ts.as_str(), "2018-09-24T14:45:11.120000+00:00");
/// assert_eq!(ts.datetime().timestamp(), 1537800311);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Timestamp {
    raw: String,
    value: DateTime<FixedOffset>,
}

impl Timestamp {
    /// The text exactly as it appeared on the wire.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn datetime(&self) -> DateTime<FixedOffset> {
        self.value
    }
}

impl FromStr for Timestamp {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = DateTime::parse_from_rfc3339(s)?;
        Ok(Self {
            raw: s.to_string(),
            value,
        })
    }
}

/// Renders with a numeric offset (`+00:00`, never `Z`), matching Bitbucket.
impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self {
            raw: value.to_rfc3339_opts(SecondsFormat::AutoSi, false),
            value,
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_text_survives_round_trip() {
        for raw in [
            "2018-09-24T14:45:11.245823+00:00",
            "2021-03-04T05:06:07.120000+00:00",
            "2021-03-04T05:06:07Z",
            "2021-03-04T05:06:07.100000Z",
            "2025-06-01T12:00:00+03:00",
        ] {
            let ts: Timestamp = serde_json::from_value(json!(raw)).unwrap();
            assert_eq!(serde_json::to_value(&ts).unwrap(), json!(raw));
        }
    }

    #[test]
    fn test_same_instant_different_text_is_not_equal() {
        let utc: Timestamp = "2021-03-04T05:06:07+00:00".parse().unwrap();
        let zulu: Timestamp = "2021-03-04T05:06:07Z".parse().unwrap();

        assert_eq!(utc.datetime(), zulu.datetime());
        assert_ne!(utc, zulu);
    }

    #[test]
    fn test_from_datetime_uses_numeric_offset() {
        let value = DateTime::parse_from_rfc3339("2021-03-04T05:06:07Z").unwrap();
        let ts = Timestamp::from(value);
        assert_eq!(ts.as_str(), "2021-03-04T05:06:07+00:00");
        assert_eq!(ts.to_string(), ts.as_str());
    }

    #[test]
    fn test_invalid_timestamp_is_rejected() {
        assert!(serde_json::from_value::<Timestamp>(json!("yesterday")).is_err());
        assert!(serde_json::from_value::<Timestamp>(json!(1614834367)).is_err());
    }
}
