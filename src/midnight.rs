//! Midnight handling for obligations.
//!
//! The timeline never wraps, so an obligation such as `22:00-02:00` is split
//! into `"<name> (Part 1)"` (`22:00-23:59`) and `"<name> (Part 2)"`
//! (`00:00-02:00`) before scheduling, and stitched back together afterwards.
//!
//! Splitting also normalizes an end time of `00:00` to the `23:59` sentinel,
//! so `20:00-00:00` stays a single same-day obligation.

use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};
use crate::models::{Obligation, ScheduledTask, TimeOfDay};

/// Suffix marking the pre-midnight half of a split.
pub const PART_ONE_SUFFIX: &str = " (Part 1)";
/// Suffix marking the post-midnight half of a split.
pub const PART_TWO_SUFFIX: &str = " (Part 2)";

/// A named span that may be one half of a midnight split.
pub trait SplitPart: Sized {
    /// Full name, possibly carrying a part suffix.
    fn part_name(&self) -> &str;

    /// Rebuilds one record spanning `first.start` to `second.end` under `base`.
    fn rejoin(base: &str, first: &Self, second: &Self) -> Self;
}

impl SplitPart for Obligation {
    fn part_name(&self) -> &str {
        &self.name
    }

    fn rejoin(base: &str, first: &Self, second: &Self) -> Self {
        Obligation::new(base, first.start, second.end)
    }
}

impl SplitPart for ScheduledTask {
    fn part_name(&self) -> &str {
        &self.task
    }

    fn rejoin(base: &str, first: &Self, second: &Self) -> Self {
        ScheduledTask::new(base, first.start, second.end)
    }
}

/// Splits obligations that cross midnight into two same-day parts.
///
/// Obligations that do not cross midnight pass through unchanged apart from
/// the `00:00` end normalization.
pub fn split_obligations(obligations: &[Obligation]) -> Vec<Obligation> {
    let mut split = Vec::with_capacity(obligations.len());

    for obligation in obligations {
        let end = if obligation.end == TimeOfDay::MIDNIGHT {
            TimeOfDay::END_OF_DAY
        } else {
            obligation.end
        };

        if obligation.start > end {
            split.push(Obligation::new(
                format!("{}{PART_ONE_SUFFIX}", obligation.name),
                obligation.start,
                TimeOfDay::END_OF_DAY,
            ));
            split.push(Obligation::new(
                format!("{}{PART_TWO_SUFFIX}", obligation.name),
                TimeOfDay::MIDNIGHT,
                end,
            ));
        } else {
            split.push(Obligation::new(obligation.name.clone(), obligation.start, end));
        }
    }

    split
}

/// Strips a trailing part suffix, if any.
pub fn base_name(name: &str) -> &str {
    name.strip_suffix(PART_ONE_SUFFIX)
        .or_else(|| name.strip_suffix(PART_TWO_SUFFIX))
        .unwrap_or(name)
}

/// Recombines split parts.
///
/// Records are grouped by base name in order of first appearance. A group of
/// exactly two whose first entry is Part 1 and second is Part 2 becomes one
/// record from Part 1's start to Part 2's end. Every other group, including a
/// lone part or two unrelated records sharing a name, passes through as is.
pub fn combine_split<T: SplitPart>(items: Vec<T>) -> Vec<T> {
    let mut order: Vec<(String, Vec<T>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for item in items {
        let base = base_name(item.part_name()).to_string();
        match index.get(&base) {
            Some(&i) => order[i].1.push(item),
            None => {
                index.insert(base.clone(), order.len());
                order.push((base, vec![item]));
            }
        }
    }

    let mut combined = Vec::new();
    for (base, mut group) in order {
        let is_pair = group.len() == 2
            && group[0].part_name().ends_with(PART_ONE_SUFFIX)
            && group[1].part_name().ends_with(PART_TWO_SUFFIX);

        if is_pair {
            let second = group.pop();
            let first = group.pop();
            if let (Some(first), Some(second)) = (first, second) {
                combined.push(T::rejoin(&base, &first, &second));
            }
        } else {
            combined.extend(group);
        }
    }

    combined
}

/// Recombines obligations produced by [`split_obligations`].
///
/// Any part that survives recombination lost its other half, which means the
/// split/combine pairing was broken in between.
pub fn combine_obligations(obligations: Vec<Obligation>) -> EngineResult<Vec<Obligation>> {
    let combined = combine_split(obligations);

    if let Some(orphan) = combined
        .iter()
        .find(|o| o.name.ends_with(PART_ONE_SUFFIX) || o.name.ends_with(PART_TWO_SUFFIX))
    {
        return Err(EngineError::UnpairedSplit {
            name: base_name(&orphan.name).to_string(),
        });
    }

    Ok(combined)
}
