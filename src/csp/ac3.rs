//! AC-3 arc consistency.
//!
//! # Algorithm
//!
//! A work queue holds directed arcs `(x, y)`. Revising an arc drops every
//! candidate of `x` that overlaps all candidates of `y`. Whenever `x`
//! shrinks, arcs `(z, x)` for every other `z` are queued again. The queue
//! drains when the network is arc consistent; an emptied domain aborts.
//!
//! Before the search all ordered pairs are queued. After an assignment only
//! the arcs pointing at the assigned variable are seeded, since nothing else
//! changed.
//!
//! # Complexity
//! O(e * d^3) for e arcs and domain size d.
//!
//! # Reference
//! Mackworth (1977), "Consistency in Networks of Relations"

use std::collections::VecDeque;

use super::{Assignment, Domains, Propagator};

/// AC-3 propagator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ac3;

impl Ac3 {
    /// Runs AC-3 to a fixpoint starting from `queue`.
    ///
    /// Returns `false` if some domain was wiped out.
    pub fn enforce(domains: &mut Domains, mut queue: VecDeque<(usize, usize)>) -> bool {
        let n = domains.len();

        while let Some((x, y)) = queue.pop_front() {
            if !domains.revise(x, y) {
                continue;
            }
            if domains.size(x) == 0 {
                return false;
            }
            queue.extend((0..n).filter(|&z| z != x && z != y).map(|z| (z, x)));
        }

        true
    }

    fn all_arcs(n: usize) -> VecDeque<(usize, usize)> {
        (0..n)
            .flat_map(|x| (0..n).filter(move |&y| y != x).map(move |y| (x, y)))
            .collect()
    }
}

impl Propagator for Ac3 {
    fn name(&self) -> &'static str {
        "AC-3"
    }

    fn initialize(&self, domains: &mut Domains) -> bool {
        if domains.has_wipeout() {
            return false;
        }
        let arcs = Self::all_arcs(domains.len());
        Self::enforce(domains, arcs)
    }

    fn propagate(&self, domains: &mut Domains, _assignment: &Assignment, var: usize) -> bool {
        let arcs = (0..domains.len())
            .filter(|&z| z != var)
            .map(|z| (z, var))
            .collect();
        Self::enforce(domains, arcs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PreferenceBands;
    use crate::csp::{Search, SearchOutcome};
    use crate::models::{Interval, Task, TimeOfDay};

    fn iv(a: u32, b: u32) -> Interval {
        Interval::new(
            TimeOfDay::from_minutes(a).unwrap(),
            TimeOfDay::from_minutes(b).unwrap(),
        )
    }

    #[test]
    fn test_all_arcs() {
        let arcs = Ac3::all_arcs(3);
        assert_eq!(arcs.len(), 6);
        assert!(!arcs.iter().any(|(x, y)| x == y));
    }

    #[test]
    fn test_initialize_prunes_chain() {
        // C is fixed at 09:00-10:00, which forces B to 08:00-09:00, which
        // in turn removes A's 08:00 candidate.
        let mut domains = Domains::from_values(vec![
            vec![iv(480, 540), iv(600, 660)],
            vec![iv(480, 540), iv(540, 600)],
            vec![iv(540, 600)],
        ]);
        assert!(Ac3.initialize(&mut domains));
        assert_eq!(domains.get(1), &[iv(480, 540)]);
        assert_eq!(domains.get(0), &[iv(600, 660)]);
    }

    #[test]
    fn test_initialize_detects_wipeout() {
        let mut domains = Domains::from_values(vec![vec![iv(480, 540)], vec![iv(500, 560)]]);
        assert!(!Ac3.initialize(&mut domains));

        let mut empty = Domains::from_values(vec![vec![], vec![iv(500, 560)]]);
        assert!(!Ac3.initialize(&mut empty));
    }

    #[test]
    fn test_initialize_without_variables() {
        let mut domains = Domains::default();
        assert!(Ac3.initialize(&mut domains));
    }

    #[test]
    fn test_search_with_ac3() {
        let tasks = vec![Task::new("A", 60), Task::new("B", 60)];
        let domains = Domains::from_values(vec![
            vec![iv(480, 540), iv(540, 600)],
            vec![iv(480, 540), iv(510, 570)],
        ]);
        let bands = PreferenceBands::default();
        let outcome = Search::new(&tasks, &bands, &Ac3).run(domains);
        assert_eq!(outcome, SearchOutcome::Solved(vec![iv(540, 600), iv(480, 540)]));
    }
}
