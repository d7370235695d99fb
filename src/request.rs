//! JSON request/response shapes.
//!
//! These mirror the body a host web service accepts and returns, with times
//! as `"HH:MM"` strings. Conversion into engine models happens here so that
//! malformed input is rejected before any solving starts.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{Obligation, Preference, ScheduledTask, Task, TimeOfDay};
use crate::scheduler::DayPlan;
use crate::validation::check_raw_duration;

/// One obligation as sent by a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawObligation {
    /// Obligation name.
    pub task: String,
    /// Start as `"HH:MM"`.
    pub start: String,
    /// End as `"HH:MM"`; earlier than `start` when it runs past midnight.
    pub end: String,
}

/// One flexible task as sent by a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTask {
    /// Task name, unique within the request.
    pub task: String,
    /// Minutes; non-positive values are rejected.
    pub duration: i64,
    /// Free-text preference; blank or absent means none.
    #[serde(default)]
    pub preference: Option<String>,
}

/// A day-planning request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRequest {
    /// Start of the waking window as `"HH:MM"`.
    pub wake_up_time: String,
    /// End of the waking window as `"HH:MM"`; `"00:00"` means end of day.
    pub sleep_time: String,
    /// Fixed commitments.
    #[serde(default)]
    pub obligations: Vec<RawObligation>,
    /// Tasks to place.
    #[serde(default)]
    pub regular_tasks: Vec<RawTask>,
}

/// Parsed, typed form of a [`DayRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayInputs {
    /// Wake-up time.
    pub wake: TimeOfDay,
    /// Sleep time.
    pub sleep: TimeOfDay,
    /// Obligations, not yet midnight-split.
    pub obligations: Vec<Obligation>,
    /// Tasks with validated durations.
    pub tasks: Vec<Task>,
}

impl DayRequest {
    /// Parses a JSON body.
    pub fn from_json(body: &str) -> EngineResult<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Converts into engine models.
    ///
    /// Time and preference errors fail fast; duration errors are collected
    /// into one [`EngineError::Validation`].
    pub fn to_inputs(&self) -> EngineResult<DayInputs> {
        let wake = TimeOfDay::parse(&self.wake_up_time)?;
        let sleep = TimeOfDay::parse(&self.sleep_time)?;

        let obligations = self
            .obligations
            .iter()
            .map(|o| -> EngineResult<Obligation> {
                Ok(Obligation::new(
                    o.task.clone(),
                    TimeOfDay::parse(&o.start)?,
                    TimeOfDay::parse(&o.end)?,
                ))
            })
            .collect::<EngineResult<Vec<_>>>()?;

        let mut tasks = Vec::with_capacity(self.regular_tasks.len());
        let mut errors = Vec::new();
        for raw in &self.regular_tasks {
            let preference = Preference::parse_optional(raw.preference.as_deref())?;
            match check_raw_duration(&raw.task, raw.duration) {
                Ok(duration) => tasks.push(Task {
                    name: raw.task.clone(),
                    duration,
                    preference,
                }),
                Err(e) => errors.push(e),
            }
        }
        if !errors.is_empty() {
            return Err(EngineError::validation(errors));
        }

        Ok(DayInputs {
            wake,
            sleep,
            obligations,
            tasks,
        })
    }
}

/// A day-planning response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayResponse {
    /// Placed tasks in chronological order.
    pub schedule: Vec<ScheduledTask>,
    /// Obligations with midnight-split parts recombined.
    pub obligations: Vec<Obligation>,
    /// Whether every task was placed.
    pub found_schedule: bool,
    /// Whether every preference task landed in its band.
    pub preference_respected: bool,
    /// Whether the interval fallback ran.
    pub alternative_scheduler_used: bool,
}

impl From<DayPlan> for DayResponse {
    fn from(plan: DayPlan) -> Self {
        Self {
            schedule: plan.result.tasks,
            obligations: plan.obligations,
            found_schedule: plan.result.found_schedule,
            preference_respected: plan.result.preference_respected,
            alternative_scheduler_used: plan.result.alternative_scheduler_used,
        }
    }
}
