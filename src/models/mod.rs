//! Day-scheduling domain models.
//!
//! Provides the value types shared by the timeline builder, the solvers and
//! the JSON boundary. None of them carry a date: everything lives inside a
//! single day closed at `23:59`.
//!
//! | Type | Role |
//! |------|------|
//! | [`TimeOfDay`] | Minute-resolution wall-clock time |
//! | [`Interval`] | Free or busy span, never crossing midnight |
//! | [`Obligation`] | Immovable appointment |
//! | [`Task`] | Flexible work item with duration and optional [`Preference`] |
//! | [`ScheduleResult`] | Placed tasks plus completeness/preference flags |

mod obligation;
mod schedule;
mod task;
mod time;

pub use obligation::Obligation;
pub use schedule::{ScheduleResult, ScheduledTask};
pub use task::{Preference, Task};
pub use time::{Interval, TimeOfDay};
