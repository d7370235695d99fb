//! Obligation model.
//!
//! An obligation is an immovable appointment. It is carved out of the free
//! timeline before any task is placed. An obligation may cross midnight
//! (`start > end`); see [`crate::midnight`] for how that is normalized.

use serde::{Deserialize, Serialize};

use super::{Interval, TimeOfDay};

/// A fixed commitment with a start and end time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obligation {
    /// Obligation name.
    #[serde(rename = "task")]
    pub name: String,
    /// Start time.
    pub start: TimeOfDay,
    /// End time. Earlier than `start` when the obligation crosses midnight.
    pub end: TimeOfDay,
}

impl Obligation {
    /// Creates a new obligation.
    pub fn new(name: impl Into<String>, start: TimeOfDay, end: TimeOfDay) -> Self {
        Self {
            name: name.into(),
            start,
            end,
        }
    }

    /// Whether the obligation runs past midnight.
    pub fn crosses_midnight(&self) -> bool {
        self.start > self.end
    }

    /// The busy span, or `None` if the obligation crosses midnight.
    pub fn interval(&self) -> Option<Interval> {
        Interval::try_new(self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crosses_midnight() {
        let late = Obligation::new(
            "Shift",
            TimeOfDay::new(22, 0).unwrap(),
            TimeOfDay::new(2, 0).unwrap(),
        );
        assert!(late.crosses_midnight());
        assert!(late.interval().is_none());

        let lunch = Obligation::new(
            "Lunch",
            TimeOfDay::new(12, 0).unwrap(),
            TimeOfDay::new(13, 0).unwrap(),
        );
        assert!(!lunch.crosses_midnight());
        assert_eq!(lunch.interval().unwrap().duration_minutes(), 60);
    }

    #[test]
    fn test_obligation_serde() {
        let ob: Obligation =
            serde_json::from_str(r#"{"task":"Class","start":"09:00","end":"10:30"}"#).unwrap();
        assert_eq!(ob.name, "Class");
        assert_eq!(ob.end.to_string(), "10:30");
    }
}
