//! Input validation for day-scheduling requests.
//!
//! Checks structural integrity of tasks and obligations before any timeline
//! is built. Detects:
//! - Duplicate task names (tasks are keyed by name)
//! - Empty names
//! - Non-positive durations
//! - Names that collide with the midnight-split suffixes
//!
//! Unparsable times and unknown preference labels are rejected earlier, when
//! the raw request is converted into typed models.
//!
//! Infeasibility (more work than free time, obligations outside the waking
//! window) is deliberately *not* a validation error: it surfaces as
//! `found_schedule = false`.

use crate::midnight::{PART_ONE_SUFFIX, PART_TWO_SUFFIX};
use crate::models::{Obligation, Task};
use std::collections::HashSet;
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two tasks share the same name.
    DuplicateTaskName,
    /// A task or obligation has a blank name.
    EmptyName,
    /// A task duration is zero or negative.
    NonPositiveDuration,
    /// A name ends with a reserved midnight-split suffix.
    ReservedName,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates tasks and obligations together.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_input(tasks: &[Task], obligations: &[Obligation]) -> ValidationResult {
    let mut errors = Vec::new();
    collect_task_errors(tasks, &mut errors);
    collect_obligation_errors(obligations, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates the task list alone.
pub fn validate_tasks(tasks: &[Task]) -> ValidationResult {
    let mut errors = Vec::new();
    collect_task_errors(tasks, &mut errors);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Rejects a raw (wire-level) duration that is zero or negative.
pub(crate) fn check_raw_duration(task: &str, duration: i64) -> Result<u32, ValidationError> {
    match u32::try_from(duration) {
        Ok(minutes) if minutes > 0 => Ok(minutes),
        _ => Err(ValidationError::new(
            ValidationErrorKind::NonPositiveDuration,
            format!("Task '{task}' has non-positive duration {duration}"),
        )),
    }
}

fn collect_task_errors(tasks: &[Task], errors: &mut Vec<ValidationError>) {
    let mut names = HashSet::new();

    for task in tasks {
        if task.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                "Task with empty name",
            ));
        } else if !names.insert(task.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateTaskName,
                format!("Duplicate task name: {}", task.name),
            ));
        }

        if task.duration == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveDuration,
                format!("Task '{}' has zero duration", task.name),
            ));
        }

        if has_split_suffix(&task.name) {
            errors.push(ValidationError::new(
                ValidationErrorKind::ReservedName,
                format!("Task '{}' uses a reserved part suffix", task.name),
            ));
        }
    }
}

fn collect_obligation_errors(obligations: &[Obligation], errors: &mut Vec<ValidationError>) {
    for obligation in obligations {
        if obligation.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                format!(
                    "Obligation {}-{} has an empty name",
                    obligation.start, obligation.end
                ),
            ));
        }

        if has_split_suffix(&obligation.name) {
            errors.push(ValidationError::new(
                ValidationErrorKind::ReservedName,
                format!("Obligation '{}' uses a reserved part suffix", obligation.name),
            ));
        }
    }
}

fn has_split_suffix(name: &str) -> bool {
    name.ends_with(PART_ONE_SUFFIX) || name.ends_with(PART_TWO_SUFFIX)
}
