//! Schedule (solution) model.
//!
//! A [`ScheduleResult`] is what every strategy returns: the placed tasks plus
//! two flags describing how good the placement is. An incomplete placement
//! is an expected outcome, not an error.

use serde::{Deserialize, Serialize};

use super::{Interval, TimeOfDay};

/// A task placed at a concrete time.
///
/// The greedy interval solver may emit several records with the same name
/// when it splits a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTask {
    /// Task name.
    pub task: String,
    /// Start time.
    pub start: TimeOfDay,
    /// End time.
    pub end: TimeOfDay,
}

impl ScheduledTask {
    /// Creates a placement record.
    pub fn new(task: impl Into<String>, start: TimeOfDay, end: TimeOfDay) -> Self {
        Self {
            task: task.into(),
            start,
            end,
        }
    }

    /// Creates a placement from an interval.
    pub fn at(task: impl Into<String>, slot: Interval) -> Self {
        Self::new(task, slot.start, slot.end)
    }

    /// The occupied span.
    #[inline]
    pub fn interval(&self) -> Interval {
        Interval::new(self.start, self.end)
    }

    /// Duration in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u32 {
        self.interval().duration_minutes()
    }
}

/// Outcome of one scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Placed tasks.
    pub tasks: Vec<ScheduledTask>,
    /// Every task carrying a preference starts inside its band.
    pub preference_respected: bool,
    /// Every input task received a placement.
    pub found_schedule: bool,
    /// The orchestrator escalated to the greedy interval solver.
    #[serde(default)]
    pub alternative_scheduler_used: bool,
}

impl ScheduleResult {
    /// A complete placement.
    pub fn found(tasks: Vec<ScheduledTask>, preference_respected: bool) -> Self {
        Self {
            tasks,
            preference_respected,
            found_schedule: true,
            alternative_scheduler_used: false,
        }
    }

    /// No complete placement exists (for this strategy).
    pub fn not_found(preference_respected: bool) -> Self {
        Self {
            tasks: Vec::new(),
            preference_respected,
            found_schedule: false,
            alternative_scheduler_used: false,
        }
    }

    /// Result for an empty task list: trivially complete and respectful.
    pub fn empty() -> Self {
        Self::found(Vec::new(), true)
    }

    /// Sorts placements chronologically (stable for equal starts).
    pub fn sort_chronologically(&mut self) {
        self.tasks.sort_by_key(|t| (t.start, t.end));
    }

    /// All placement records for a task name.
    pub fn placements_of(&self, task: &str) -> Vec<&ScheduledTask> {
        self.tasks.iter().filter(|t| t.task == task).collect()
    }

    /// Total scheduled minutes across all records.
    pub fn scheduled_minutes(&self) -> u32 {
        self.tasks.iter().map(ScheduledTask::duration_minutes).sum()
    }

    /// Whether any two placement records overlap.
    pub fn has_overlaps(&self) -> bool {
        self.tasks.iter().enumerate().any(|(i, a)| {
            self.tasks[i + 1..]
                .iter()
                .any(|b| a.interval().overlaps(&b.interval()))
        })
    }
}
