//! Strategies, orchestration and day metrics.
//!
//! [`DayScheduler`] is the entry point. It prepares the timeline, runs one
//! [`Strategy`] and escalates to the greedy interval solver when the
//! strategy leaves tasks unplaced.
//!
//! # Strategies
//!
//! | Strategy | Splits tasks | Search |
//! |----------|--------------|--------|
//! | `Ac3` | no | backtracking + AC-3 |
//! | `Backtracking` | no | backtracking |
//! | `ForwardChecking` | no | backtracking + forward checking |
//! | `Greedy` | yes | none |
//! | `FirstFit` | no | none |
//!
//! # References
//!
//! - Russell & Norvig (2020), "Artificial Intelligence: A Modern Approach", Ch. 6
//! - Coffman, Garey & Johnson (1996), "Approximation Algorithms for Bin Packing"

mod first_fit;
mod interval;
mod orchestrator;
mod strategy;
mod summary;

pub use first_fit::FirstFitSolver;
pub use interval::IntervalSolver;
pub use orchestrator::{DayPlan, DayScheduler};
pub use strategy::{CspSolver, DaySolver, Strategy};
pub use summary::ScheduleSummary;
