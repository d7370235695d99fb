//! First-fit placement.
//!
//! Walks tasks in input order and puts each at the start of the earliest
//! free interval long enough to hold it, then shrinks that interval. No
//! splitting and no search; preferences are only checked afterwards.
//!
//! # Complexity
//! O(n * f) for n tasks and f free intervals.

use tracing::debug;

use super::strategy::{preferences_honored, DaySolver};
use crate::config::SchedulerConfig;
use crate::models::{Interval, ScheduleResult, ScheduledTask, Task};
use crate::timeline::Timeline;

/// First-fit solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstFitSolver;

impl DaySolver for FirstFitSolver {
    fn name(&self) -> &'static str {
        "first-fit"
    }

    fn solve(
        &self,
        timeline: &Timeline,
        tasks: &[Task],
        config: &SchedulerConfig,
    ) -> ScheduleResult {
        if tasks.is_empty() {
            return ScheduleResult::empty();
        }

        let mut free: Vec<Interval> = timeline.intervals().to_vec();
        let mut slots = Vec::with_capacity(tasks.len());

        for task in tasks {
            let gap = free
                .iter_mut()
                .find(|gap| gap.duration_minutes() >= task.duration);
            let Some(gap) = gap else {
                debug!(target: "dayplan::scheduler", task = %task.name, "first fit found no gap");
                return ScheduleResult::not_found(false);
            };
            let Some(slot) = Interval::starting_at(gap.start, task.duration) else {
                return ScheduleResult::not_found(false);
            };
            gap.start = slot.end;
            slots.push(slot);
        }

        let respected = preferences_honored(tasks, &slots, &config.bands);
        let placed = tasks
            .iter()
            .zip(&slots)
            .map(|(task, slot)| ScheduledTask::at(task.name.clone(), *slot))
            .collect();

        let mut result = ScheduleResult::found(placed, respected);
        result.sort_chronologically();
        result
    }
}
