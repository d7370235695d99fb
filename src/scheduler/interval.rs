//! Greedy fixed-interval solver.
//!
//! The fallback of last resort. It gives up contiguity to place demand the
//! whole-duration domains cannot.
//!
//! # Algorithm
//!
//! 1. Slice size = smallest task duration. Each free interval is cut into
//!    consecutive slices of that size, the last one capped at the interval
//!    end.
//! 2. Sort tasks by band (morning, afternoon, evening, night, none) and then
//!    by duration descending, keeping input order for ties.
//! 3. For each task find the first *run*: consecutive unused slices in
//!    timeline order whose total length covers the duration. A run may jump
//!    the gap between free intervals, which is how a task gets split. A task
//!    with a preference first tries runs starting at an in-band slice; if
//!    none exists the result no longer respects preferences and any slice
//!    is tried.
//! 4. Claim the run. The final slice is claimed whole even if only partly
//!    used.
//!
//! Pieces of one task that touch are merged. If any task cannot be placed
//! the result is `found_schedule = false` with no tasks.
//!
//! # Complexity
//! O(n * s^2) for n tasks and s slices.

use std::cmp::Reverse;

use tracing::debug;

use super::strategy::DaySolver;
use crate::config::{PreferenceBands, SchedulerConfig};
use crate::models::{Interval, ScheduleResult, ScheduledTask, Task, TimeOfDay};
use crate::timeline::Timeline;

/// Rank of tasks without a preference in the placement order.
const NO_PREFERENCE_RANK: usize = 4;

/// Greedy fixed-interval solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalSolver;

#[derive(Debug, Clone, Copy)]
struct Slice {
    span: Interval,
    used: bool,
}

impl DaySolver for IntervalSolver {
    fn name(&self) -> &'static str {
        "interval"
    }

    fn solve(
        &self,
        timeline: &Timeline,
        tasks: &[Task],
        config: &SchedulerConfig,
    ) -> ScheduleResult {
        let Some(size) = tasks.iter().map(|t| t.duration).min() else {
            return ScheduleResult::empty();
        };

        let mut slices = cut(timeline, size);
        let mut order: Vec<&Task> = tasks.iter().collect();
        order.sort_by_key(|t| {
            (
                t.preference.map_or(NO_PREFERENCE_RANK, |p| p.rank()),
                Reverse(t.duration),
            )
        });

        let mut placed = Vec::new();
        let mut respected = true;

        for task in order {
            let Some((start, in_band)) = find_run(&slices, task, &config.bands) else {
                debug!(
                    target: "dayplan::scheduler",
                    task = %task.name,
                    duration = task.duration,
                    "interval solver ran out of slices"
                );
                // A task with a preference that fits nowhere missed its band too.
                return ScheduleResult::not_found(respected && task.preference.is_none());
            };
            respected &= in_band;
            claim(&mut slices, start, task, &mut placed);
        }

        let mut result = ScheduleResult::found(merge_touching(placed), respected);
        result.sort_chronologically();
        result
    }
}

fn cut(timeline: &Timeline, size: u32) -> Vec<Slice> {
    let size = size.max(1);
    let mut slices = Vec::new();

    for free in timeline.intervals() {
        let end = free.end.minutes();
        let mut cursor = free.start.minutes();
        while cursor < end {
            let next = cursor.saturating_add(size).min(end);
            let bounds = (TimeOfDay::from_minutes(cursor), TimeOfDay::from_minutes(next));
            if let (Some(a), Some(b)) = bounds {
                slices.push(Slice {
                    span: Interval::new(a, b),
                    used: false,
                });
            }
            cursor = next;
        }
    }

    slices
}

/// First usable run for `task`, plus whether it honors the preference.
fn find_run(slices: &[Slice], task: &Task, bands: &PreferenceBands) -> Option<(usize, bool)> {
    let any = || (0..slices.len()).find(|&i| fits_from(slices, i, task.duration));

    match task.preference {
        None => any().map(|i| (i, true)),
        Some(pref) => (0..slices.len())
            .filter(|&i| bands.matches(slices[i].span.start, pref))
            .find(|&i| fits_from(slices, i, task.duration))
            .map(|i| (i, true))
            .or_else(|| any().map(|i| (i, false))),
    }
}

fn fits_from(slices: &[Slice], start: usize, duration: u32) -> bool {
    let mut remaining = duration;
    for slice in &slices[start..] {
        if remaining == 0 {
            break;
        }
        if slice.used {
            return false;
        }
        remaining = remaining.saturating_sub(slice.span.duration_minutes());
    }
    remaining == 0
}

fn claim(slices: &mut [Slice], start: usize, task: &Task, placed: &mut Vec<ScheduledTask>) {
    let mut remaining = task.duration;
    for slice in &mut slices[start..] {
        if remaining == 0 || slice.used {
            break;
        }
        let take = remaining.min(slice.span.duration_minutes());
        if let Some(part) = Interval::starting_at(slice.span.start, take) {
            placed.push(ScheduledTask::at(task.name.clone(), part));
        }
        slice.used = true;
        remaining -= take;
    }
}

fn merge_touching(parts: Vec<ScheduledTask>) -> Vec<ScheduledTask> {
    let mut merged: Vec<ScheduledTask> = Vec::with_capacity(parts.len());
    for part in parts {
        match merged.last_mut() {
            Some(last) if last.task == part.task && last.end == part.start => last.end = part.end,
            _ => merged.push(part),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Obligation, Preference};

    fn t(s: &str) -> TimeOfDay {
        TimeOfDay::parse(s).unwrap()
    }

    fn solve(timeline: &Timeline, tasks: &[Task]) -> ScheduleResult {
        IntervalSolver.solve(timeline, tasks, &SchedulerConfig::default())
    }

    #[test]
    fn test_cut_caps_last_slice() {
        let tl = Timeline::build(t("08:00"), t("09:40"), &[]);
        let slices = cut(&tl, 45);
        let spans: Vec<String> = slices.iter().map(|s| s.span.to_string()).collect();
        assert_eq!(spans, vec!["08:00-08:45", "08:45-09:30", "09:30-09:40"]);
    }

    #[test]
    fn test_splits_across_obligation() {
        let busy = vec![Obligation::new("Busy", t("10:00"), t("14:00"))];
        let tl = Timeline::build(t("08:00"), t("16:00"), &busy);
        let result = solve(&tl, &[Task::new("Split", 240)]);

        assert!(result.found_schedule);
        let parts = result.placements_of("Split");
        assert_eq!(parts.len(), 2);
        assert_eq!(parts.iter().map(|p| p.duration_minutes()).sum::<u32>(), 240);
        assert_eq!(parts[0].start, t("08:00"));
        assert_eq!(parts[1].start, t("14:00"));
    }

    #[test]
    fn test_merges_contiguous_parts() {
        let tl = Timeline::build(t("08:00"), t("12:00"), &[]);
        let result = solve(&tl, &[Task::new("Long", 90), Task::new("Short", 30)]);

        assert!(result.found_schedule);
        assert_eq!(result.tasks.len(), 2);
        assert_eq!(result.tasks[0], ScheduledTask::new("Long", t("08:00"), t("09:30")));
        assert_eq!(result.tasks[1], ScheduledTask::new("Short", t("09:30"), t("10:00")));
    }

    #[test]
    fn test_preferred_start() {
        let tl = Timeline::build(t("08:00"), t("22:00"), &[]);
        let tasks = vec![
            Task::new("Gym", 60).with_preference(Preference::Evening),
            Task::new("Read", 60),
        ];
        let result = solve(&tl, &tasks);
        assert!(result.found_schedule);
        assert!(result.preference_respected);
        assert_eq!(result.placements_of("Gym")[0].start, t("17:00"));
        assert_eq!(result.placements_of("Read")[0].start, t("08:00"));
    }

    #[test]
    fn test_unavailable_band_falls_back() {
        let tl = Timeline::build(t("08:00"), t("11:00"), &[]);
        let tasks = vec![Task::new("Late", 60).with_preference(Preference::Night)];
        let result = solve(&tl, &tasks);
        assert!(result.found_schedule);
        assert!(!result.preference_respected);
        assert_eq!(result.tasks[0].start, t("08:00"));
    }

    #[test]
    fn test_partial_slice_consumed_whole() {
        // Slices of 60: the 90-minute task claims 08:00-10:00 entirely.
        let tl = Timeline::build(t("08:00"), t("11:00"), &[]);
        let result = solve(&tl, &[Task::new("A", 90), Task::new("B", 60)]);
        assert!(result.found_schedule);
        assert_eq!(result.placements_of("B")[0].start, t("10:00"));

        let result = solve(&tl, &[Task::new("A", 90), Task::new("B", 60), Task::new("C", 60)]);
        assert!(!result.found_schedule);
        assert!(result.tasks.is_empty());
    }

    #[test]
    fn test_order_by_band_then_duration() {
        let tl = Timeline::build(t("08:00"), t("10:00"), &[]);
        let tasks = vec![
            Task::new("short", 30),
            Task::new("long", 60),
            Task::new("noon", 30).with_preference(Preference::Afternoon),
        ];
        // The afternoon task goes first and takes the first slice.
        let result = solve(&tl, &tasks);
        assert!(result.found_schedule);
        assert!(!result.preference_respected);
        assert_eq!(result.tasks[0].task, "noon");
        assert_eq!(result.tasks[1].task, "long");
        assert_eq!(result.tasks[2].task, "short");
    }

    #[test]
    fn test_oversized_duration_not_found() {
        let tl = Timeline::build(t("08:00"), t("22:00"), &[]);
        let slices = cut(&tl, u32::MAX);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].span.to_string(), "08:00-22:00");

        let result = solve(&tl, &[Task::new("Huge", 4_294_967_000)]);
        assert!(!result.found_schedule);
        assert!(result.tasks.is_empty());
    }

    #[test]
    fn test_empty_inputs() {
        let tl = Timeline::build(t("08:00"), t("08:00"), &[]);
        assert!(solve(&tl, &[]).found_schedule);
        assert!(!solve(&tl, &[Task::new("A", 30)]).found_schedule);
    }
}
