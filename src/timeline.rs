//! Free-time timeline construction.
//!
//! Turns a wake/sleep window and a list of obligations into the ordered,
//! disjoint free intervals of the day.
//!
//! # Algorithm
//!
//! 1. Normalize a sleep time of `00:00` to the `23:59` sentinel.
//! 2. Build the waking window. `wake < sleep` gives `[wake, sleep]`;
//!    `wake > sleep` (awake across midnight) gives `[00:00, sleep]` and
//!    `[wake, 23:59]`, dropping any zero-length piece; `wake == sleep`
//!    gives nothing.
//! 3. Carve out each obligation in start order. For every free interval an
//!    obligation starting strictly inside keeps the part before it, one
//!    ending strictly inside keeps the part after it, and one not touching
//!    the interval leaves it intact. Overlapping obligations are handled by
//!    applying them one after another to the evolving set.
//!
//! Zero-length obligations occupy no time and are ignored. Obligations must
//! already be midnight-split (see [`crate::midnight`]).

use tracing::debug;

use crate::models::{Interval, Obligation, TimeOfDay};

/// The free intervals of one day, sorted by start.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline {
    intervals: Vec<Interval>,
}

impl Timeline {
    /// Builds the free timeline for a day.
    pub fn build(wake: TimeOfDay, sleep: TimeOfDay, obligations: &[Obligation]) -> Self {
        let mut intervals = waking_window(wake, sleep);

        let mut busy: Vec<Interval> = obligations
            .iter()
            .filter_map(Obligation::interval)
            .filter(|b| !b.is_empty())
            .collect();
        busy.sort_by_key(|b| b.start);

        for obligation in &busy {
            intervals = subtract(&intervals, obligation);
        }
        intervals.sort();

        debug!(
            target: "dayplan::timeline",
            %wake,
            %sleep,
            obligations = busy.len(),
            free_intervals = intervals.len(),
            "timeline built"
        );
        Self { intervals }
    }

    /// Builds a timeline directly from free intervals.
    ///
    /// Empty intervals are dropped and the rest sorted.
    pub fn from_intervals(intervals: impl IntoIterator<Item = Interval>) -> Self {
        let mut intervals: Vec<Interval> =
            intervals.into_iter().filter(|i| !i.is_empty()).collect();
        intervals.sort();
        Self { intervals }
    }

    /// Free intervals in chronological order.
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Whether there is no free time at all.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Total free minutes.
    pub fn free_minutes(&self) -> u32 {
        self.intervals.iter().map(Interval::duration_minutes).sum()
    }

    /// Length of the longest free interval.
    pub fn longest_gap(&self) -> u32 {
        self.intervals
            .iter()
            .map(Interval::duration_minutes)
            .max()
            .unwrap_or(0)
    }

    /// Whether `slot` lies entirely inside one free interval.
    pub fn fits(&self, slot: &Interval) -> bool {
        self.intervals
            .iter()
            .any(|free| free.start <= slot.start && slot.end <= free.end)
    }
}

fn waking_window(wake: TimeOfDay, sleep: TimeOfDay) -> Vec<Interval> {
    if wake == sleep {
        return Vec::new();
    }

    let sleep = if sleep == TimeOfDay::MIDNIGHT {
        TimeOfDay::END_OF_DAY
    } else {
        sleep
    };

    if wake == sleep {
        return Vec::new();
    }
    if wake < sleep {
        return vec![Interval::new(wake, sleep)];
    }

    // Awake across midnight.
    [
        Interval::new(TimeOfDay::MIDNIGHT, sleep),
        Interval::new(wake, TimeOfDay::END_OF_DAY),
    ]
    .into_iter()
    .filter(|i| !i.is_empty())
    .collect()
}

fn subtract(free: &[Interval], busy: &Interval) -> Vec<Interval> {
    let mut remaining = Vec::with_capacity(free.len() + 1);

    for slot in free {
        if busy.end <= slot.start || busy.start >= slot.end {
            remaining.push(*slot);
            continue;
        }
        if slot.start < busy.start && busy.start < slot.end {
            remaining.push(Interval::new(slot.start, busy.start));
        }
        if slot.start < busy.end && busy.end < slot.end {
            remaining.push(Interval::new(busy.end, slot.end));
        }
    }

    remaining
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> TimeOfDay {
        TimeOfDay::parse(s).unwrap()
    }

    fn iv(a: &str, b: &str) -> Interval {
        Interval::new(t(a), t(b))
    }

    fn ob(start: &str, end: &str) -> Obligation {
        Obligation::new("busy", t(start), t(end))
    }

    #[test]
    fn test_plain_day() {
        let tl = Timeline::build(t("08:00"), t("22:00"), &[]);
        assert_eq!(tl.intervals(), &[iv("08:00", "22:00")]);
        assert_eq!(tl.free_minutes(), 14 * 60);
    }

    #[test]
    fn test_wake_equals_sleep_is_empty() {
        assert!(Timeline::build(t("07:00"), t("07:00"), &[]).is_empty());
    }

    #[test]
    fn test_sleep_at_midnight_uses_sentinel() {
        let tl = Timeline::build(t("08:00"), t("00:00"), &[]);
        assert_eq!(tl.intervals(), &[iv("08:00", "23:59")]);
    }

    #[test]
    fn test_sentinel_wake_with_midnight_sleep_is_empty() {
        assert!(Timeline::build(t("23:59"), t("00:00"), &[]).is_empty());
    }

    #[test]
    fn test_awake_across_midnight() {
        let tl = Timeline::build(t("10:00"), t("02:00"), &[]);
        assert_eq!(tl.intervals(), &[iv("00:00", "02:00"), iv("10:00", "23:59")]);
    }

    #[test]
    fn test_awake_across_midnight_drops_zero_length() {
        let tl = Timeline::build(t("23:59"), t("03:00"), &[]);
        assert_eq!(tl.intervals(), &[iv("00:00", "03:00")]);
    }

    #[test]
    fn test_obligation_in_middle() {
        let tl = Timeline::build(t("08:00"), t("16:00"), &[ob("10:00", "14:00")]);
        assert_eq!(tl.intervals(), &[iv("08:00", "10:00"), iv("14:00", "16:00")]);
    }

    #[test]
    fn test_obligation_at_edges() {
        let tl = Timeline::build(
            t("08:00"),
            t("16:00"),
            &[ob("08:00", "09:00"), ob("15:00", "16:00")],
        );
        assert_eq!(tl.intervals(), &[iv("09:00", "15:00")]);
    }

    #[test]
    fn test_obligation_outside_window_ignored() {
        let tl = Timeline::build(t("08:00"), t("12:00"), &[ob("13:00", "14:00")]);
        assert_eq!(tl.intervals(), &[iv("08:00", "12:00")]);
    }

    #[test]
    fn test_zero_length_obligation_ignored() {
        let tl = Timeline::build(t("08:00"), t("12:00"), &[ob("10:00", "10:00")]);
        assert_eq!(tl.intervals(), &[iv("08:00", "12:00")]);

        let tl = Timeline::build(
            t("08:00"),
            t("12:00"),
            &[ob("09:00", "09:00"), ob("10:00", "11:00")],
        );
        assert_eq!(tl.intervals(), &[iv("08:00", "10:00"), iv("11:00", "12:00")]);
    }

    #[test]
    fn test_obligation_covering_window() {
        let tl = Timeline::build(t("08:00"), t("12:00"), &[ob("07:00", "13:00")]);
        assert!(tl.is_empty());
    }

    #[test]
    fn test_overlapping_obligations_carve_union() {
        let tl = Timeline::build(
            t("08:00"),
            t("18:00"),
            &[ob("12:00", "14:00"), ob("10:00", "13:00")],
        );
        assert_eq!(tl.intervals(), &[iv("08:00", "10:00"), iv("14:00", "18:00")]);
    }

    #[test]
    fn test_split_obligation_parts_against_overnight_window() {
        let obligations = vec![
            Obligation::new("Shift (Part 1)", t("23:00"), TimeOfDay::END_OF_DAY),
            Obligation::new("Shift (Part 2)", TimeOfDay::MIDNIGHT, t("01:00")),
        ];
        let tl = Timeline::build(t("18:00"), t("03:00"), &obligations);
        assert_eq!(tl.intervals(), &[iv("01:00", "03:00"), iv("18:00", "23:00")]);
    }

    #[test]
    fn test_helpers() {
        let tl = Timeline::from_intervals(vec![
            iv("14:00", "15:00"),
            iv("08:00", "10:00"),
            iv("11:00", "11:00"),
        ]);
        assert_eq!(tl.intervals().len(), 2);
        assert_eq!(tl.longest_gap(), 120);
        assert!(tl.fits(&iv("08:30", "09:30")));
        assert!(!tl.fits(&iv("09:30", "14:30")));
    }
}
