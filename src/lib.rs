//! Single-day task scheduling.
//!
//! Places variable-duration tasks into the free time of one day around
//! immovable obligations and a wake/sleep window, honoring optional
//! time-of-day preferences where possible.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `TimeOfDay`, `Interval`, `Task`, `Obligation`,
//!   `ScheduleResult`
//! - **`timeline`**: Free-time construction from wake/sleep and obligations
//! - **`midnight`**: Splitting and recombining obligations that cross midnight
//! - **`csp`**: Domains, shared search, AC-3 / forward checking / backtracking
//! - **`scheduler`**: Strategies, the greedy interval fallback, orchestration
//! - **`request`**: JSON request/response shapes for host services
//! - **`validation`**: Input integrity checks (names, durations, reserved suffixes)
//! - **`config`**: Scheduler configuration and preference bands
//!
//! # Degradation ladder
//!
//! A CSP strategy first searches with preference-narrowed domains, then
//! with full domains, and the orchestrator finally falls back to a greedy
//! interval solver that may split tasks. Each step trades preference or
//! contiguity for completeness.
//!
//! # References
//!
//! - Mackworth (1977), "Consistency in Networks of Relations"
//! - Haralick & Elliott (1980), "Increasing Tree Search Efficiency for
//!   Constraint Satisfaction Problems"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod csp;
pub mod error;
pub mod midnight;
pub mod models;
pub mod request;
pub mod scheduler;
pub mod timeline;
pub mod validation;

pub use config::{PreferenceBands, SchedulerConfig};
pub use error::{EngineError, EngineResult};
pub use models::{Interval, Obligation, Preference, ScheduleResult, ScheduledTask, Task, TimeOfDay};
pub use request::{DayRequest, DayResponse};
pub use scheduler::{DayPlan, DayScheduler, Strategy};
