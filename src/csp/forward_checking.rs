//! Forward checking.
//!
//! After each assignment, candidates of every still-unassigned task that
//! overlap the new value are removed. An emptied domain prunes the branch
//! immediately instead of at the next variable.

use super::{Assignment, Domains, Propagator};

/// Forward-checking propagator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardChecking;

impl Propagator for ForwardChecking {
    fn name(&self) -> &'static str {
        "forward-checking"
    }

    fn propagate(&self, domains: &mut Domains, assignment: &Assignment, var: usize) -> bool {
        let Some(value) = assignment[var] else {
            return true;
        };

        (0..domains.len())
            .filter(|&other| other != var && assignment[other].is_none())
            .all(|other| domains.prune_conflicts(other, &value))
    }
}
