//! Depth-first assignment search shared by all CSP strategies.
//!
//! # Algorithm
//!
//! 1. Let the propagator establish initial consistency.
//! 2. Pick a variable: among unassigned tasks with a preference, the one with
//!    the fewest remaining candidates; if none carry a preference, the
//!    smallest domain overall. Ties go to the earlier task.
//! 3. Order its candidates with band-matching values first (stable).
//! 4. For each candidate consistent with every assigned task: copy the
//!    domains of this depth, fix the variable, propagate, descend.
//!
//! Each depth owns its own domain snapshot, so backing out of a branch is
//! just popping a frame; nothing is undone in place.
//!
//! # Complexity
//! Exponential in the number of tasks in the worst case. An optional node
//! limit turns exhaustion into [`SearchOutcome::NodeLimit`].

use tracing::trace;

use super::{Domains, Propagator};
use crate::config::PreferenceBands;
use crate::models::{Interval, Task};

/// Partial assignment, indexed like the task slice.
pub type Assignment = Vec<Option<Interval>>;

/// Result of one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// One placement per task, indexed like the task slice.
    Solved(Vec<Interval>),
    /// The search space holds no complete assignment.
    Exhausted,
    /// The node limit ran out first.
    NodeLimit,
}

impl SearchOutcome {
    /// The solution, if any.
    pub fn solution(self) -> Option<Vec<Interval>> {
        match self {
            SearchOutcome::Solved(values) => Some(values),
            _ => None,
        }
    }
}

struct Frame {
    var: usize,
    values: Vec<Interval>,
    next: usize,
    domains: Domains,
}

/// A configured search over one task list.
pub struct Search<'a, P: Propagator> {
    tasks: &'a [Task],
    bands: &'a PreferenceBands,
    propagator: &'a P,
    node_limit: Option<u64>,
}

impl<'a, P: Propagator> Search<'a, P> {
    /// Creates a search.
    pub fn new(tasks: &'a [Task], bands: &'a PreferenceBands, propagator: &'a P) -> Self {
        Self {
            tasks,
            bands,
            propagator,
            node_limit: None,
        }
    }

    /// Caps the number of tentative assignments.
    pub fn with_node_limit(mut self, limit: Option<u64>) -> Self {
        self.node_limit = limit;
        self
    }

    /// Runs the search from `domains`.
    pub fn run(&self, mut domains: Domains) -> SearchOutcome {
        debug_assert_eq!(domains.len(), self.tasks.len());

        if domains.has_wipeout() {
            trace!(
                target: "dayplan::search",
                propagator = self.propagator.name(),
                "empty domain before search"
            );
            return SearchOutcome::Exhausted;
        }

        if !self.propagator.initialize(&mut domains) {
            trace!(
                target: "dayplan::search",
                propagator = self.propagator.name(),
                "inconsistent before search"
            );
            return SearchOutcome::Exhausted;
        }

        let mut assignment: Assignment = vec![None; self.tasks.len()];
        let Some(first) = self.select_variable(&domains, &assignment) else {
            return SearchOutcome::Solved(Vec::new());
        };

        let mut stack = vec![self.frame(first, domains)];
        let mut nodes: u64 = 0;

        while let Some(frame) = stack.last_mut() {
            if frame.next == frame.values.len() {
                assignment[frame.var] = None;
                stack.pop();
                continue;
            }

            let value = frame.values[frame.next];
            frame.next += 1;
            let var = frame.var;

            if !consistent_with_assigned(&value, &assignment, var) {
                continue;
            }

            nodes += 1;
            if self.node_limit.is_some_and(|limit| nodes > limit) {
                trace!(target: "dayplan::search", nodes, "node limit reached");
                return SearchOutcome::NodeLimit;
            }

            let mut branch = frame.domains.clone();
            branch.restrict(var, value);
            assignment[var] = Some(value);

            if !self.propagator.propagate(&mut branch, &assignment, var) {
                assignment[var] = None;
                continue;
            }

            match self.select_variable(&branch, &assignment) {
                Some(next) => stack.push(self.frame(next, branch)),
                None => {
                    trace!(
                        target: "dayplan::search",
                        propagator = self.propagator.name(),
                        nodes,
                        "solution found"
                    );
                    return SearchOutcome::Solved(assignment.into_iter().flatten().collect());
                }
            }
        }

        trace!(
            target: "dayplan::search",
            propagator = self.propagator.name(),
            nodes,
            "search exhausted"
        );
        SearchOutcome::Exhausted
    }

    fn frame(&self, var: usize, domains: Domains) -> Frame {
        let values = order_values(&self.tasks[var], domains.get(var), self.bands);
        Frame {
            var,
            values,
            next: 0,
            domains,
        }
    }

    fn select_variable(&self, domains: &Domains, assignment: &Assignment) -> Option<usize> {
        select_variable(self.tasks, domains, assignment)
    }
}

/// Variable ordering: preference-carrying tasks first, then fewest candidates.
pub fn select_variable(
    tasks: &[Task],
    domains: &Domains,
    assignment: &Assignment,
) -> Option<usize> {
    let unassigned = || (0..tasks.len()).filter(|&i| assignment[i].is_none());

    unassigned()
        .filter(|&i| tasks[i].has_preference())
        .min_by_key(|&i| domains.size(i))
        .or_else(|| unassigned().min_by_key(|&i| domains.size(i)))
}

/// Value ordering: candidates in the task's band first, otherwise unchanged.
pub fn order_values(task: &Task, domain: &[Interval], bands: &PreferenceBands) -> Vec<Interval> {
    let mut values = domain.to_vec();
    if let Some(pref) = task.preference {
        values.sort_by_key(|slot| !bands.matches(slot.start, pref));
    }
    values
}

fn consistent_with_assigned(value: &Interval, assignment: &Assignment, var: usize) -> bool {
    assignment
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != var)
        .filter_map(|(_, placed)| placed.as_ref())
        .all(|placed| value.is_consistent_with(placed))
}
