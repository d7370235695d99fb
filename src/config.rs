//! Scheduler configuration.
//!
//! Defaults: 30-minute candidate spacing, the canonical preference bands,
//! no search limit and the greedy interval fallback enabled. Configuration
//! can be assembled with builder methods or loaded from TOML:
//!
//! ```toml
//! step_minutes = 15
//! node_limit = 200000
//!
//! [bands]
//! morning = "06:00"
//! afternoon = "12:00"
//! evening = "18:00"
//! night = "22:00"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{Preference, TimeOfDay};

/// Start times of the four preference bands.
///
/// Bands are contiguous and partition the day: a time belongs to the band
/// whose start is the latest one not after it, and times before `morning`
/// belong to `night`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceBands {
    /// Start of the morning band.
    pub morning: TimeOfDay,
    /// Start of the afternoon band.
    pub afternoon: TimeOfDay,
    /// Start of the evening band.
    pub evening: TimeOfDay,
    /// Start of the night band (runs through midnight until `morning`).
    pub night: TimeOfDay,
}

impl Default for PreferenceBands {
    fn default() -> Self {
        Self {
            morning: TimeOfDay::from_minutes(5 * 60).unwrap_or_default(),
            afternoon: TimeOfDay::from_minutes(12 * 60).unwrap_or_default(),
            evening: TimeOfDay::from_minutes(17 * 60).unwrap_or_default(),
            night: TimeOfDay::from_minutes(21 * 60).unwrap_or_default(),
        }
    }
}

impl PreferenceBands {
    /// The band a time of day falls in.
    pub fn classify(&self, time: TimeOfDay) -> Preference {
        if time >= self.morning && time < self.afternoon {
            Preference::Morning
        } else if time >= self.afternoon && time < self.evening {
            Preference::Afternoon
        } else if time >= self.evening && time < self.night {
            Preference::Evening
        } else {
            Preference::Night
        }
    }

    /// Whether `time` lies in the band of `preference`.
    #[inline]
    pub fn matches(&self, time: TimeOfDay, preference: Preference) -> bool {
        self.classify(time) == preference
    }

    fn check(&self) -> EngineResult<()> {
        if self.morning < self.afternoon
            && self.afternoon < self.evening
            && self.evening < self.night
        {
            Ok(())
        } else {
            Err(EngineError::Config(format!(
                "preference bands must be strictly increasing, got {} < {} < {} < {}",
                self.morning, self.afternoon, self.evening, self.night
            )))
        }
    }
}

/// Scheduler configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Spacing between candidate start times in a task domain (minutes).
    pub step_minutes: u32,
    /// Preference band boundaries.
    pub bands: PreferenceBands,
    /// Maximum search nodes per CSP phase. `None` = unbounded.
    ///
    /// Running out counts as "no assignment" for that phase.
    pub node_limit: Option<u64>,
    /// Escalate to the greedy interval solver when a strategy is incomplete.
    pub interval_fallback: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            step_minutes: 30,
            bands: PreferenceBands::default(),
            node_limit: None,
            interval_fallback: true,
        }
    }
}

impl SchedulerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the candidate step.
    pub fn with_step_minutes(mut self, step_minutes: u32) -> Self {
        self.step_minutes = step_minutes;
        self
    }

    /// Sets the preference bands.
    pub fn with_bands(mut self, bands: PreferenceBands) -> Self {
        self.bands = bands;
        self
    }

    /// Caps search nodes per CSP phase.
    pub fn with_node_limit(mut self, limit: u64) -> Self {
        self.node_limit = Some(limit);
        self
    }

    /// Enables or disables the greedy interval fallback.
    pub fn with_interval_fallback(mut self, enabled: bool) -> Self {
        self.interval_fallback = enabled;
        self
    }

    /// Parses and checks a TOML document.
    pub fn from_toml_str(content: &str) -> EngineResult<Self> {
        let config: SchedulerConfig = toml::from_str(content)
            .map_err(|e| EngineError::Config(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            EngineError::Config(format!(
                "failed to read {}: {e}",
                path.as_ref().display()
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Rejects unusable values.
    pub fn validate(&self) -> EngineResult<()> {
        if self.step_minutes == 0 {
            return Err(EngineError::Config("step_minutes must be positive".into()));
        }
        if self.node_limit == Some(0) {
            return Err(EngineError::Config("node_limit must be positive".into()));
        }
        self.bands.check()
    }
}
