//! Timezone normalization for timestamps on the write path.
//!
//! Incoming timestamps keep the zone tag they arrived with until they are
//! about to be persisted. [`RawTimestamp::to_utc`] then applies one rule:
//! local values are converted to UTC, unspecified values are reinterpreted as
//! UTC with the same wall clock, and UTC values pass through unchanged.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawTimestamp {
    Utc(DateTime<Utc>),
    Local(DateTime<FixedOffset>),
    Unspecified(NaiveDateTime),
}

impl RawTimestamp {
    pub fn to_utc(self) -> DateTime<Utc> {
        match self {
            RawTimestamp::Utc(ts) => ts,
            RawTimestamp::Local(ts) => ts.with_timezone(&Utc),
            RawTimestamp::Unspecified(naive) => naive.and_utc(),
        }
    }

    /// Wall-clock value as written by the client, before any conversion.
    pub fn wall_clock(&self) -> NaiveDateTime {
        match self {
            RawTimestamp::Utc(ts) => ts.naive_utc(),
            RawTimestamp::Local(ts) => ts.naive_local(),
            RawTimestamp::Unspecified(naive) => *naive,
        }
    }

    /// True for the zero value `0001-01-01T00:00:00`, which stands for "not set".
    pub fn is_default(&self) -> bool {
        Some(self.wall_clock()) == default_wall_clock()
    }
}

fn default_wall_clock() -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(1, 1, 1).and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Resolve an optional client timestamp to the UTC value that gets stored.
/// Missing and zero values fall back to `now`.
pub fn created_at_or(ts: Option<RawTimestamp>, now: DateTime<Utc>) -> DateTime<Utc> {
    match ts {
        Some(ts) if !ts.is_default() => ts.to_utc(),
        _ => now,
    }
}

impl From<DateTime<Utc>> for RawTimestamp {
    fn from(ts: DateTime<Utc>) -> Self {
        RawTimestamp::Utc(ts)
    }
}

impl From<DateTime<Local>> for RawTimestamp {
    fn from(ts: DateTime<Local>) -> Self {
        RawTimestamp::Local(ts.fixed_offset())
    }
}

impl From<DateTime<FixedOffset>> for RawTimestamp {
    fn from(ts: DateTime<FixedOffset>) -> Self {
        if ts.offset().local_minus_utc() == 0 {
            RawTimestamp::Utc(ts.with_timezone(&Utc))
        } else {
            RawTimestamp::Local(ts)
        }
    }
}

impl From<NaiveDateTime> for RawTimestamp {
    fn from(naive: NaiveDateTime) -> Self {
        RawTimestamp::Unspecified(naive)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTimestampError(String);

impl fmt::Display for ParseTimestampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid timestamp: {}", self.0)
    }
}

impl std::error::Error for ParseTimestampError {}

impl FromStr for RawTimestamp {
    type Err = ParseTimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
            return Ok(ts.into());
        }

        NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .map(RawTimestamp::Unspecified)
            .ok_or_else(|| ParseTimestampError(s.to_string()))
    }
}

impl fmt::Display for RawTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawTimestamp::Utc(ts) => write!(f, "{}", ts.to_rfc3339()),
            RawTimestamp::Local(ts) => write!(f, "{}", ts.to_rfc3339()),
            RawTimestamp::Unspecified(naive) => {
                write!(f, "{}", naive.format("%Y-%m-%dT%H:%M:%S%.f"))
            }
        }
    }
}

impl Serialize for RawTimestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RawTimestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
