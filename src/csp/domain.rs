//! Task domains: candidate placements per task.
//!
//! # Generation
//! For every free interval at least as long as the task, candidates start at
//! the interval start and advance by `step_minutes`, each exactly `duration`
//! long, until fewer than `duration` minutes remain. Candidates overlap one
//! another on purpose so that tasks sharing an interval can dodge each other.
//!
//! # Preference filtering
//! [`filter_by_preference`] keeps candidates whose start lies in the task's
//! band. [`Domains::with_preferences`] applies it per task but keeps the full
//! domain for any task whose filtered domain would be empty.

use crate::config::PreferenceBands;
use crate::models::{Interval, Preference, Task, TimeOfDay};
use crate::timeline::Timeline;

/// Candidate placements for every task, indexed like the task slice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Domains {
    values: Vec<Vec<Interval>>,
}

impl Domains {
    /// Generates domains for `tasks` inside the free `timeline`.
    pub fn generate(timeline: &Timeline, tasks: &[Task], step_minutes: u32) -> Self {
        let values = tasks
            .iter()
            .map(|task| candidates(timeline, task.duration, step_minutes))
            .collect();
        Self { values }
    }

    /// Wraps explicit candidate lists.
    pub fn from_values(values: Vec<Vec<Interval>>) -> Self {
        Self { values }
    }

    /// Phase-one domains: each task's domain narrowed to its preference band,
    /// falling back to the full domain when nothing in the band remains.
    pub fn with_preferences(&self, tasks: &[Task], bands: &PreferenceBands) -> Self {
        let values = self
            .values
            .iter()
            .zip(tasks)
            .map(|(domain, task)| {
                let filtered = filter_by_preference(domain, task.preference, bands);
                if filtered.is_empty() {
                    domain.clone()
                } else {
                    filtered
                }
            })
            .collect();
        Self { values }
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no variables.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Candidates of one variable.
    pub fn get(&self, var: usize) -> &[Interval] {
        &self.values[var]
    }

    /// Domain size of one variable.
    #[inline]
    pub fn size(&self, var: usize) -> usize {
        self.values[var].len()
    }

    /// Whether any variable has no candidate left.
    pub fn has_wipeout(&self) -> bool {
        self.values.iter().any(Vec::is_empty)
    }

    /// Fixes a variable to a single value.
    pub fn restrict(&mut self, var: usize, value: Interval) {
        self.values[var] = vec![value];
    }

    /// Removes candidates of `var` that overlap `value`.
    ///
    /// Returns `false` if the domain became empty.
    pub fn prune_conflicts(&mut self, var: usize, value: &Interval) -> bool {
        let domain = &mut self.values[var];
        domain.retain(|candidate| candidate.is_consistent_with(value));
        !domain.is_empty()
    }

    /// Arc revision: drops candidates of `x` with no consistent partner in `y`.
    ///
    /// Returns whether anything was removed.
    pub fn revise(&mut self, x: usize, y: usize) -> bool {
        debug_assert_ne!(x, y, "an arc needs two distinct variables");
        let (dx, dy): (&mut Vec<Interval>, &Vec<Interval>) = if x < y {
            let (head, tail) = self.values.split_at_mut(y);
            (&mut head[x], &tail[0])
        } else {
            let (head, tail) = self.values.split_at_mut(x);
            (&mut tail[0], &head[y])
        };

        let before = dx.len();
        dx.retain(|v| dy.iter().any(|w| v.is_consistent_with(w)));
        dx.len() != before
    }
}

/// Keeps candidates whose start lies in the band of `preference`.
///
/// With no preference the domain is returned unchanged. The input is never
/// modified, so callers keep the unfiltered domain as a fallback.
pub fn filter_by_preference(
    domain: &[Interval],
    preference: Option<Preference>,
    bands: &PreferenceBands,
) -> Vec<Interval> {
    match preference {
        None => domain.to_vec(),
        Some(pref) => domain
            .iter()
            .filter(|slot| bands.matches(slot.start, pref))
            .copied()
            .collect(),
    }
}

fn candidates(timeline: &Timeline, duration: u32, step_minutes: u32) -> Vec<Interval> {
    let step = step_minutes.max(1);
    let mut domain = Vec::new();

    for free in timeline.intervals() {
        if free.duration_minutes() < duration {
            continue;
        }
        let end = free.end.minutes();
        let mut start = free.start.minutes();
        while start + duration <= end {
            if let Some(slot) = TimeOfDay::from_minutes(start)
                .and_then(|s| Interval::starting_at(s, duration))
            {
                domain.push(slot);
            }
            start = start.saturating_add(step);
        }
    }

    domain
}
