//! Task model.
//!
//! A task is a flexible block of work with a duration and an optional
//! time-of-day preference. The solvers place it; they never modify it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

/// Time-of-day preference.
///
/// Variants are declared in day order; [`Preference::rank`] follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    /// Early part of the day.
    Morning,
    /// Middle of the day.
    Afternoon,
    /// After the working day.
    Evening,
    /// Late night, wrapping past midnight to before morning.
    Night,
}

impl Preference {
    /// All preferences in day order.
    pub const ALL: [Preference; 4] = [
        Preference::Morning,
        Preference::Afternoon,
        Preference::Evening,
        Preference::Night,
    ];

    /// Label used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Preference::Morning => "morning",
            Preference::Afternoon => "afternoon",
            Preference::Evening => "evening",
            Preference::Night => "night",
        }
    }

    /// Position in day order (morning = 0).
    pub fn rank(self) -> usize {
        self as usize
    }

    /// Parses an optional label. Blank or `"none"` means no preference.
    pub fn parse_optional(label: Option<&str>) -> Result<Option<Self>, EngineError> {
        match label.map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) if raw.eq_ignore_ascii_case("none") => Ok(None),
            Some(raw) => raw.parse().map(Some),
        }
    }
}

impl FromStr for Preference {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Preference::ALL
            .into_iter()
            .find(|p| p.as_str() == lower)
            .ok_or_else(|| EngineError::UnknownPreference(s.to_string()))
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task to be placed in the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task name.
    #[serde(rename = "task")]
    pub name: String,
    /// Duration in minutes (must be positive).
    pub duration: u32,
    /// Optional time-of-day preference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preference: Option<Preference>,
}

impl Task {
    /// Creates a task without a preference.
    pub fn new(name: impl Into<String>, duration: u32) -> Self {
        Self {
            name: name.into(),
            duration,
            preference: None,
        }
    }

    /// Sets the time-of-day preference.
    pub fn with_preference(mut self, preference: Preference) -> Self {
        self.preference = Some(preference);
        self
    }

    /// Whether this task carries a preference.
    pub fn has_preference(&self) -> bool {
        self.preference.is_some()
    }
}
