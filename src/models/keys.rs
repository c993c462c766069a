use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::RollupError;

// ---------------------------------------------------------------------------
// PeriodKey — (year, month), rendered as "{year}-{month}"
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PeriodKey {
    pub year: i32,
    pub month: u32,
}

impl PeriodKey {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.year, self.month)
    }
}

impl FromStr for PeriodKey {
    type Err = RollupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // rsplit so a negative year ("-5-3") still parses
        let (year, month) = s
            .rsplit_once('-')
            .ok_or_else(|| RollupError::InvalidArgument(format!("invalid period key '{s}'")))?;
        let year = year
            .parse()
            .map_err(|_| RollupError::InvalidArgument(format!("invalid year in '{s}'")))?;
        let month = month
            .parse()
            .map_err(|_| RollupError::InvalidArgument(format!("invalid month in '{s}'")))?;
        Ok(Self { year, month })
    }
}

impl Serialize for PeriodKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PeriodKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// DateKey — (month, day), rendered as "{month}/{day}"
// ---------------------------------------------------------------------------

/// Pivot row key.
///
/// The year is deliberately not part of the key: records for `2023-1-1` and
/// `2024-1-1` land in the same `"1/1"` row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateKey {
    pub month: u32,
    pub day: u32,
}

impl DateKey {
    pub fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.month, self.day)
    }
}

impl FromStr for DateKey {
    type Err = RollupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (month, day) = s
            .split_once('/')
            .ok_or_else(|| RollupError::InvalidArgument(format!("invalid date key '{s}'")))?;
        let month = month
            .parse()
            .map_err(|_| RollupError::InvalidArgument(format!("invalid month in '{s}'")))?;
        let day = day
            .parse()
            .map_err(|_| RollupError::InvalidArgument(format!("invalid day in '{s}'")))?;
        Ok(Self { month, day })
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}
