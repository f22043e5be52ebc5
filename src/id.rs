//! Identifier strategies for new network records.

use chrono::{DateTime, Utc};
use std::str::FromStr;
use std::sync::Arc;

/// 100-ns ticks between 0001-01-01T00:00:00Z and the Unix epoch.
const UNIX_EPOCH_TICKS: i64 = 621_355_968_000_000_000;

pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Random UUID v4 identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Wall-clock tick identifiers: 100-ns intervals since 0001-01-01 UTC.
///
/// Two calls within the same tick produce the same value, so this is only
/// suitable where collisions are acceptable.
#[derive(Debug, Default, Clone, Copy)]
pub struct TickGenerator;

impl TickGenerator {
    pub fn ticks_at(ts: DateTime<Utc>) -> i64 {
        let seconds = ts.timestamp();
        let sub_ticks = i64::from(ts.timestamp_subsec_nanos() / 100);
        UNIX_EPOCH_TICKS + seconds * 10_000_000 + sub_ticks
    }
}

impl IdGenerator for TickGenerator {
    fn generate(&self) -> String {
        Self::ticks_at(Utc::now()).to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    #[default]
    Uuid,
    Ticks,
}

impl IdStrategy {
    pub fn generator(self) -> Arc<dyn IdGenerator> {
        match self {
            IdStrategy::Uuid => Arc::new(UuidGenerator),
            IdStrategy::Ticks => Arc::new(TickGenerator),
        }
    }
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uuid" => Ok(IdStrategy::Uuid),
            "ticks" => Ok(IdStrategy::Ticks),
            other => Err(format!(
                "unknown id strategy '{}', expected 'uuid' or 'ticks'",
                other
            )),
        }
    }
}
