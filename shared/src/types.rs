//! Common types used across the pairing engine

use chrono::{DateTime, Datelike, FixedOffset, Offset, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Part of the day a pairing is evaluated in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DayPart {
    Morning,
    Afternoon,
    Evening,
}

impl DayPart {
    /// Bucket an hour of the day (0-23): before noon is morning, before 17:00 afternoon
    pub fn from_hour(hour: u32) -> Self {
        if hour < 12 {
            DayPart::Morning
        } else if hour < 17 {
            DayPart::Afternoon
        } else {
            DayPart::Evening
        }
    }
}

/// Season tag used on coffee profiles and B2B requests
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
    All,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
            Season::All => "all",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Time-of-day tag used on coffee profiles
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ServingTime {
    Morning,
    Afternoon,
    Evening,
    AllDay,
}

impl ServingTime {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServingTime::Morning => "morning",
            ServingTime::Afternoon => "afternoon",
            ServingTime::Evening => "evening",
            ServingTime::AllDay => "all day",
        }
    }
}

impl std::fmt::Display for ServingTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Capabilities
// ============================================================================

/// Source of the current local time of the shop.
///
/// Hour and month rules read the local fields of the returned value; result
/// timestamps are rendered from the same instant in UTC.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock pinned to a fixed UTC offset
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Build from an offset in minutes east of UTC, falling back to UTC when out of range
    pub fn from_offset_minutes(minutes: i32) -> Self {
        let offset = minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(utc_offset);
        Self { offset }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            offset: utc_offset(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.offset)
    }
}

/// Clock that always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

fn utc_offset() -> FixedOffset {
    Utc.fix()
}

/// Source of uniformly distributed values in `[0, 1)`
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Random source that always yields the same value
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub f64);

impl RandomSource for FixedRandom {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

// ============================================================================
// Calendar helpers
// ============================================================================

/// Local hour of the day (0-23)
pub fn local_hour(now: &DateTime<FixedOffset>) -> u32 {
    now.hour()
}

/// Zero-based local month (January = 0)
pub fn local_month0(now: &DateTime<FixedOffset>) -> u32 {
    now.month0()
}

/// Winter for weather scoring: November through March
pub fn is_scoring_winter(month0: u32) -> bool {
    month0 >= 10 || month0 <= 2
}

/// Summer for weather scoring: June through September
pub fn is_scoring_summer(month0: u32) -> bool {
    (5..=8).contains(&month0)
}
