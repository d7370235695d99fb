//! Constraint satisfaction core.
//!
//! Each task is a variable, its domain the candidate placements produced by
//! [`Domains::generate`], and every pair of tasks is linked by a
//! non-overlap constraint (touching endpoints allowed). All three CSP
//! strategies share one search ([`Search`]) and differ only in the
//! [`Propagator`] run after each tentative assignment.
//!
//! ```
//! use u_dayplan::config::PreferenceBands;
//! use u_dayplan::csp::{Ac3, Domains, Search};
//! use u_dayplan::models::{Task, TimeOfDay};
//! use u_dayplan::timeline::Timeline;
//!
//! let timeline = Timeline::build(TimeOfDay::new(8, 0)?, TimeOfDay::new(10, 0)?, &[]);
//! let tasks = vec![Task::new("Read", 60), Task::new("Write", 60)];
//! let domains = Domains::generate(&timeline, &tasks, 30);
//! let bands = PreferenceBands::default();
//!
//! let solution = Search::new(&tasks, &bands, &Ac3).run(domains).solution();
//! assert_eq!(solution.map(|s| s.len()), Some(2));
//! # Ok::<(), u_dayplan::EngineError>(())
//! ```
//!
//! # References
//!
//! - Mackworth (1977), "Consistency in Networks of Relations"
//! - Haralick & Elliott (1980), "Increasing Tree Search Efficiency for
//!   Constraint Satisfaction Problems"
//! - Russell & Norvig (2020), "Artificial Intelligence: A Modern Approach", Ch. 6

mod ac3;
mod backtracking;
mod domain;
mod forward_checking;
mod search;

pub use ac3::Ac3;
pub use backtracking::Backtracking;
pub use domain::{filter_by_preference, Domains};
pub use forward_checking::ForwardChecking;
pub use search::{order_values, select_variable, Assignment, Search, SearchOutcome};

use std::fmt::Debug;

/// Domain filtering applied by the search.
///
/// Implementations only remove candidates; they never add any. Returning
/// `false` signals a wipeout and makes the search abandon the branch.
pub trait Propagator: Send + Sync + Debug {
    /// Propagator name (e.g., "AC-3").
    fn name(&self) -> &'static str;

    /// Establishes consistency before the first assignment.
    fn initialize(&self, _domains: &mut Domains) -> bool {
        true
    }

    /// Filters `domains` after `var` was fixed to `assignment[var]`.
    ///
    /// `domains` already holds the singleton domain of `var`.
    fn propagate(&self, domains: &mut Domains, assignment: &Assignment, var: usize) -> bool;
}
