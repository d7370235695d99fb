//! Solving strategies.
//!
//! Every strategy turns a free [`Timeline`] and a task list into a
//! [`ScheduleResult`]. The CSP strategies share [`CspSolver`], which runs
//! the common search twice:
//!
//! 1. **Preferred**: each task's domain narrowed to its band (full domain
//!    for tasks whose band is empty). Success reports whether every
//!    preference actually held.
//! 2. **Unrestricted**: full domains; success always reports
//!    `preference_respected = false`.
//!
//! Phase 2 is skipped when narrowing changed nothing, since it would repeat
//! phase 1 exactly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::first_fit::FirstFitSolver;
use super::interval::IntervalSolver;
use crate::config::{PreferenceBands, SchedulerConfig};
use crate::csp::{Ac3, Backtracking, Domains, ForwardChecking, Propagator, Search, SearchOutcome};
use crate::error::EngineError;
use crate::models::{Interval, ScheduleResult, ScheduledTask, Task};
use crate::timeline::Timeline;

/// A scheduling algorithm over one day.
pub trait DaySolver {
    /// Solver name, used in logs.
    fn name(&self) -> &'static str;

    /// Places `tasks` into the free time of `timeline`.
    ///
    /// Never fails: an infeasible day is `found_schedule = false`.
    fn solve(
        &self,
        timeline: &Timeline,
        tasks: &[Task],
        config: &SchedulerConfig,
    ) -> ScheduleResult;
}

/// Selectable scheduling strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// AC-3 propagation, then backtracking with AC-3 after each assignment.
    Ac3,
    /// Chronological backtracking without propagation.
    #[serde(alias = "backward")]
    Backtracking,
    /// Backtracking with forward checking.
    #[serde(alias = "forward_check")]
    ForwardChecking,
    /// Greedy fixed-interval packing; may split tasks.
    #[serde(alias = "interval")]
    Greedy,
    /// Input-order first fit; ignores preferences.
    FirstFit,
}

impl Strategy {
    /// All strategies.
    pub const ALL: [Strategy; 5] = [
        Strategy::Ac3,
        Strategy::Backtracking,
        Strategy::ForwardChecking,
        Strategy::Greedy,
        Strategy::FirstFit,
    ];

    /// Canonical name.
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Ac3 => "ac3",
            Strategy::Backtracking => "backtracking",
            Strategy::ForwardChecking => "forward_checking",
            Strategy::Greedy => "greedy",
            Strategy::FirstFit => "first_fit",
        }
    }

    /// Whether this is one of the search-based strategies.
    pub fn is_csp(self) -> bool {
        matches!(
            self,
            Strategy::Ac3 | Strategy::Backtracking | Strategy::ForwardChecking
        )
    }

    /// Runs the strategy.
    pub fn solve(
        self,
        timeline: &Timeline,
        tasks: &[Task],
        config: &SchedulerConfig,
    ) -> ScheduleResult {
        match self {
            Strategy::Ac3 => CspSolver::new(Ac3).solve(timeline, tasks, config),
            Strategy::Backtracking => CspSolver::new(Backtracking).solve(timeline, tasks, config),
            Strategy::ForwardChecking => {
                CspSolver::new(ForwardChecking).solve(timeline, tasks, config)
            }
            Strategy::Greedy => IntervalSolver.solve(timeline, tasks, config),
            Strategy::FirstFit => FirstFitSolver.solve(timeline, tasks, config),
        }
    }
}

impl FromStr for Strategy {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "ac3" => Ok(Strategy::Ac3),
            "backtracking" | "backward" => Ok(Strategy::Backtracking),
            "forward_checking" | "forward_check" => Ok(Strategy::ForwardChecking),
            "greedy" | "interval" => Ok(Strategy::Greedy),
            "first_fit" => Ok(Strategy::FirstFit),
            _ => Err(EngineError::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Two-phase CSP runner parameterized by propagator.
#[derive(Debug, Clone, Default)]
pub struct CspSolver<P> {
    propagator: P,
}

impl<P: Propagator> CspSolver<P> {
    /// Creates a runner around `propagator`.
    pub fn new(propagator: P) -> Self {
        Self { propagator }
    }

    fn search(
        &self,
        tasks: &[Task],
        domains: Domains,
        config: &SchedulerConfig,
        phase: &str,
    ) -> Option<Vec<Interval>> {
        let outcome = Search::new(tasks, &config.bands, &self.propagator)
            .with_node_limit(config.node_limit)
            .run(domains);

        match outcome {
            SearchOutcome::Solved(values) => Some(values),
            SearchOutcome::Exhausted => {
                debug!(target: "dayplan::scheduler", solver = self.name(), phase, "no assignment");
                None
            }
            SearchOutcome::NodeLimit => {
                debug!(
                    target: "dayplan::scheduler",
                    solver = self.name(),
                    phase,
                    "node limit exhausted"
                );
                None
            }
        }
    }
}

impl<P: Propagator> DaySolver for CspSolver<P> {
    fn name(&self) -> &'static str {
        self.propagator.name()
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

        let full = Domains::generate(timeline, tasks, config.step_minutes);
        let preferred = full.with_preferences(tasks, &config.bands);
        let narrowed = preferred != full;

        if let Some(values) = self.search(tasks, preferred, config, "preferred") {
            let respected = preferences_honored(tasks, &values, &config.bands);
            return assemble(tasks, &values, respected);
        }

        if narrowed {
            if let Some(values) = self.search(tasks, full, config, "unrestricted") {
                return assemble(tasks, &values, false);
            }
        }

        ScheduleResult::not_found(false)
    }
}

/// Whether every task with a preference starts inside its band.
///
/// `placements` is indexed like `tasks`.
pub(crate) fn preferences_honored(
    tasks: &[Task],
    placements: &[Interval],
    bands: &PreferenceBands,
) -> bool {
    tasks.iter().zip(placements).all(|(task, slot)| {
        task.preference
            .map_or(true, |pref| bands.matches(slot.start, pref))
    })
}

fn assemble(tasks: &[Task], values: &[Interval], respected: bool) -> ScheduleResult {
    let placed = tasks
        .iter()
        .zip(values)
        .map(|(task, slot)| ScheduledTask::at(task.name.clone(), *slot))
        .collect();
    let mut result = ScheduleResult::found(placed, respected);
    result.sort_chronologically();
    result
}
