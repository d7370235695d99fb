//! Day-level schedule metrics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Free minutes | Sum of free timeline intervals |
//! | Requested minutes | Sum of task durations |
//! | Scheduled minutes | Sum of placed record lengths |
//! | Utilization | scheduled / free (0 when there is no free time) |
//! | Overcommitted minutes | max(0, requested - free) |
//! | Preference hits | Preference tasks whose first piece starts in band |
//! | Split tasks | Tasks placed as more than one record |

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::PreferenceBands;
use crate::models::{ScheduleResult, Task};
use crate::timeline::Timeline;

/// Summary of one planned day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    /// Free minutes after obligations.
    pub free_minutes: u32,
    /// Total requested task minutes.
    pub requested_minutes: u64,
    /// Total placed task minutes.
    pub scheduled_minutes: u32,
    /// Fraction of free time used (0.0..=1.0).
    pub utilization: f64,
    /// Demand beyond the free time, in minutes.
    pub overcommitted_minutes: u64,
    /// Tasks carrying a preference.
    pub preference_tasks: usize,
    /// Preference tasks placed inside their band.
    pub preference_hits: usize,
    /// Tasks placed as several pieces.
    pub split_tasks: usize,
    /// Tasks with no placement.
    pub unplaced_tasks: usize,
}

impl ScheduleSummary {
    /// Computes the summary of `result` against its inputs.
    pub fn calculate(
        timeline: &Timeline,
        tasks: &[Task],
        result: &ScheduleResult,
        bands: &PreferenceBands,
    ) -> Self {
        let free_minutes = timeline.free_minutes();
        let requested_minutes: u64 = tasks.iter().map(|t| u64::from(t.duration)).sum();
        let scheduled_minutes = result.scheduled_minutes();

        let mut pieces: HashMap<&str, usize> = HashMap::new();
        for placed in &result.tasks {
            *pieces.entry(placed.task.as_str()).or_default() += 1;
        }

        let mut preference_tasks = 0;
        let mut preference_hits = 0;
        for task in tasks {
            let Some(pref) = task.preference else {
                continue;
            };
            preference_tasks += 1;
            let first = result
                .placements_of(&task.name)
                .into_iter()
                .min_by_key(|p| p.start);
            if first.is_some_and(|p| bands.matches(p.start, pref)) {
                preference_hits += 1;
            }
        }

        let utilization = if free_minutes == 0 {
            0.0
        } else {
            f64::from(scheduled_minutes) / f64::from(free_minutes)
        };

        Self {
            free_minutes,
            requested_minutes,
            scheduled_minutes,
            utilization,
            overcommitted_minutes: requested_minutes.saturating_sub(u64::from(free_minutes)),
            preference_tasks,
            preference_hits,
            split_tasks: pieces.values().filter(|&&n| n > 1).count(),
            unplaced_tasks: tasks
                .iter()
                .filter(|t| !pieces.contains_key(t.name.as_str()))
                .count(),
        }
    }

    /// Whether demand exceeds the free time.
    pub fn is_overcommitted(&self) -> bool {
        self.overcommitted_minutes > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Interval, Preference, ScheduledTask, TimeOfDay};

    fn t(s: &str) -> TimeOfDay {
        TimeOfDay::parse(s).unwrap()
    }

    #[test]
    fn test_summary_basic() {
        let timeline = Timeline::from_intervals(vec![
            Interval::new(t("08:00"), t("10:00")),
            Interval::new(t("14:00"), t("16:00")),
        ]);
        let tasks = vec![
            Task::new("Split", 180).with_preference(Preference::Morning),
            Task::new("Late", 30).with_preference(Preference::Night),
        ];
        let result = ScheduleResult::found(
            vec![
                ScheduledTask::new("Split", t("08:00"), t("10:00")),
                ScheduledTask::new("Split", t("14:00"), t("15:00")),
            ],
            false,
        );
        let bands = PreferenceBands::default();
        let summary = ScheduleSummary::calculate(&timeline, &tasks, &result, &bands);

        assert_eq!(summary.free_minutes, 240);
        assert_eq!(summary.requested_minutes, 210);
        assert_eq!(summary.scheduled_minutes, 180);
        assert!((summary.utilization - 0.75).abs() < 1e-9);
        assert!(!summary.is_overcommitted());
        assert_eq!(summary.preference_tasks, 2);
        assert_eq!(summary.preference_hits, 1);
        assert_eq!(summary.split_tasks, 1);
        assert_eq!(summary.unplaced_tasks, 1);
    }

    #[test]
    fn test_summary_no_free_time() {
        let tasks = vec![Task::new("A", 60)];
        let summary = ScheduleSummary::calculate(
            &Timeline::default(),
            &tasks,
            &ScheduleResult::not_found(false),
            &PreferenceBands::default(),
        );
        assert_eq!(summary.utilization, 0.0);
        assert_eq!(summary.overcommitted_minutes, 60);
        assert!(summary.is_overcommitted());
    }

    #[test]
    fn test_summary_requested_beyond_u32() {
        let tasks = vec![Task::new("A", 3_000_000_000), Task::new("B", 3_000_000_000)];
        let timeline = Timeline::from_intervals(vec![Interval::new(t("08:00"), t("09:00"))]);
        let summary = ScheduleSummary::calculate(
            &timeline,
            &tasks,
            &ScheduleResult::not_found(true),
            &PreferenceBands::default(),
        );
        assert_eq!(summary.requested_minutes, 6_000_000_000);
        assert_eq!(summary.overcommitted_minutes, 5_999_999_940);
        assert_eq!(summary.unplaced_tasks, 2);
    }
}
