//! Time-of-day and interval models.
//!
//! # Time Model
//! A [`TimeOfDay`] is a minute-resolution wall-clock value inside a single
//! day. The day closes at `23:59` ([`TimeOfDay::END_OF_DAY`]), never at
//! `24:00`, so no arithmetic in the engine ever wraps past midnight. Anything
//! that would cross midnight is represented as two [`Interval`]s.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{EngineError, EngineResult};

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Wall-clock time of day, stored as minutes since midnight.
///
/// Ordering is chronological within the day. Serialized as `"HH:MM"`.
///
/// # Examples
///
/// ```
/// use u_dayplan::models::TimeOfDay;
///
/// let t = TimeOfDay::parse("08:30").unwrap();
/// assert_eq!(t.minutes(), 510);
/// assert_eq!(t.to_string(), "08:30");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// `00:00`, the first minute of the day.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);
    /// `23:59`, the sentinel used as the day's closing boundary.
    pub const END_OF_DAY: TimeOfDay = TimeOfDay((MINUTES_PER_DAY - 1) as u16);

    /// Creates a time from hour (0-23) and minute (0-59).
    pub fn new(hour: u32, minute: u32) -> EngineResult<Self> {
        if hour < 24 && minute < 60 {
            Ok(Self((hour * 60 + minute) as u16))
        } else {
            Err(EngineError::InvalidTime {
                value: format!("{hour:02}:{minute:02}"),
            })
        }
    }

    /// Creates a time from minutes since midnight. `None` past `23:59`.
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self(minutes as u16))
    }

    /// Parses a 24-hour `"HH:MM"` string.
    pub fn parse(value: &str) -> EngineResult<Self> {
        NaiveTime::parse_from_str(value.trim(), "%H:%M")
            .map(Self::from)
            .map_err(|_| EngineError::InvalidTime {
                value: value.to_string(),
            })
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(self) -> u32 {
        u32::from(self.0)
    }

    /// Hour component (0-23).
    #[inline]
    pub fn hour(self) -> u32 {
        self.minutes() / 60
    }

    /// Minute component (0-59).
    #[inline]
    pub fn minute(self) -> u32 {
        self.minutes() % 60
    }

    /// Adds minutes, returning `None` if the result would pass `23:59`.
    pub fn checked_add_minutes(self, minutes: u32) -> Option<Self> {
        self.minutes()
            .checked_add(minutes)
            .and_then(Self::from_minutes)
    }

    /// Signed minutes from `self` to `later` (negative if `later` is earlier).
    #[inline]
    pub fn minutes_until(self, later: Self) -> i32 {
        i32::from(later.0) - i32::from(self.0)
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        Self((time.hour() * 60 + time.minute()) as u16)
    }
}

impl FromStr for TimeOfDay {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(de::Error::custom)
    }
}

/// A contiguous span `[start, end)` within one day.
///
/// Invariant: `start <= end`. A span crossing midnight is always stored as
/// two intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Interval {
    /// Interval start (inclusive).
    pub start: TimeOfDay,
    /// Interval end (exclusive).
    pub end: TimeOfDay,
}

impl Interval {
    /// Creates an interval. `start` must not be after `end`.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        debug_assert!(start <= end, "interval {start}-{end} runs backwards");
        Self { start, end }
    }

    /// Creates an interval, or `None` if `start > end`.
    pub fn try_new(start: TimeOfDay, end: TimeOfDay) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Creates an interval of `duration` minutes starting at `start`.
    ///
    /// Returns `None` if it would end after `23:59`.
    pub fn starting_at(start: TimeOfDay, duration: u32) -> Option<Self> {
        start
            .checked_add_minutes(duration)
            .map(|end| Self { start, end })
    }

    /// Length in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u32 {
        self.end.minutes() - self.start.minutes()
    }

    /// Whether the interval has zero length.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether a time falls within `[start, end)`.
    #[inline]
    pub fn contains(&self, time: TimeOfDay) -> bool {
        time >= self.start && time < self.end
    }

    /// Whether two intervals share any minute. Touching intervals do not.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Pairwise consistency: `s1 >= e2 || e1 <= s2`.
    #[inline]
    pub fn is_consistent_with(&self, other: &Self) -> bool {
        !self.overlaps(other)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
