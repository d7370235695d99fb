//! Plain chronological backtracking.
//!
//! No filtering at all: conflicts surface only when a later candidate is
//! checked against the assigned tasks.

use super::{Assignment, Domains, Propagator};

/// Propagator that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Backtracking;

impl Propagator for Backtracking {
    fn name(&self) -> &'static str {
        "backtracking"
    }

    fn propagate(&self, _domains: &mut Domains, _assignment: &Assignment, _var: usize) -> bool {
        true
    }
}
