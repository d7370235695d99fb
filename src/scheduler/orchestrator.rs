//! Day scheduling orchestrator.
//!
//! # Algorithm
//!
//! 1. Validate tasks, obligations and configuration.
//! 2. Split obligations crossing midnight; build the free timeline.
//! 3. Run the chosen strategy (CSP strategies run their own preferred and
//!    unrestricted phases).
//! 4. If not every task was placed, escalate to the greedy interval solver
//!    and flag `alternative_scheduler_used`.
//! 5. Recombine split obligations for reporting.
//!
//! An infeasible day is an `Ok` result with `found_schedule = false`; only
//! malformed input or a broken split pairing is an `Err`.

use tracing::{debug, info};

use super::strategy::Strategy;
use super::summary::ScheduleSummary;
use crate::config::SchedulerConfig;
use crate::error::{EngineError, EngineResult};
use crate::midnight::{combine_obligations, split_obligations};
use crate::models::{Obligation, ScheduleResult, Task, TimeOfDay};
use crate::request::{DayRequest, DayResponse};
use crate::timeline::Timeline;
use crate::validation::validate_input;

/// Everything produced for one planned day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayPlan {
    /// Placement outcome.
    pub result: ScheduleResult,
    /// Input obligations after the split/combine round trip.
    pub obligations: Vec<Obligation>,
    /// Day metrics.
    pub summary: ScheduleSummary,
}

/// Stateless day scheduler.
///
/// # Example
/// ```
/// use u_dayplan::models::{Preference, Task, TimeOfDay};
/// use u_dayplan::scheduler::{DayScheduler, Strategy};
///
/// let tasks = vec![
///     Task::new("Study", 120).with_preference(Preference::Morning),
///     Task::new("Exercise", 60).with_preference(Preference::Evening),
/// ];
/// let result = DayScheduler::new().solve(
///     TimeOfDay::new(8, 0)?,
///     TimeOfDay::new(22, 0)?,
///     &[],
///     &tasks,
///     Strategy::Ac3,
/// )?;
/// assert!(result.found_schedule);
/// assert!(result.preference_respected);
/// # Ok::<(), u_dayplan::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DayScheduler {
    config: SchedulerConfig,
}

impl DayScheduler {
    /// Creates a scheduler with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Schedules one day and returns only the placement outcome.
    pub fn solve(
        &self,
        wake: TimeOfDay,
        sleep: TimeOfDay,
        obligations: &[Obligation],
        tasks: &[Task],
        strategy: Strategy,
    ) -> EngineResult<ScheduleResult> {
        self.plan_day(wake, sleep, obligations, tasks, strategy)
            .map(|plan| plan.result)
    }

    /// Schedules one day.
    pub fn plan_day(
        &self,
        wake: TimeOfDay,
        sleep: TimeOfDay,
        obligations: &[Obligation],
        tasks: &[Task],
        strategy: Strategy,
    ) -> EngineResult<DayPlan> {
        self.config.validate()?;
        validate_input(tasks, obligations).map_err(EngineError::validation)?;

        let split = split_obligations(obligations);
        let timeline = Timeline::build(wake, sleep, &split);

        info!(
            target: "dayplan::scheduler",
            %strategy,
            tasks = tasks.len(),
            obligations = obligations.len(),
            free_minutes = timeline.free_minutes(),
            "planning day"
        );

        let mut result = strategy.solve(&timeline, tasks, &self.config);

        if !result.found_schedule && strategy != Strategy::Greedy && self.config.interval_fallback {
            info!(
                target: "dayplan::scheduler",
                %strategy,
                "strategy incomplete, falling back to interval solver"
            );
            result = Strategy::Greedy.solve(&timeline, tasks, &self.config);
            result.alternative_scheduler_used = true;
        }

        debug!(
            target: "dayplan::scheduler",
            found = result.found_schedule,
            preference_respected = result.preference_respected,
            alternative = result.alternative_scheduler_used,
            placed = result.tasks.len(),
            "day planned"
        );

        let summary = ScheduleSummary::calculate(&timeline, tasks, &result, &self.config.bands);
        let obligations = combine_obligations(split)?;

        Ok(DayPlan {
            result,
            obligations,
            summary,
        })
    }

    /// Plans a day from a request body.
    pub fn plan(&self, request: &DayRequest, strategy: Strategy) -> EngineResult<DayResponse> {
        let inputs = request.to_inputs()?;
        self.plan_day(
            inputs.wake,
            inputs.sleep,
            &inputs.obligations,
            &inputs.tasks,
            strategy,
        )
        .map(DayResponse::from)
    }

    /// Plans a day from raw JSON and a strategy name, returning JSON.
    pub fn plan_json(&self, body: &str, strategy: &str) -> EngineResult<String> {
        let strategy: Strategy = strategy.parse()?;
        let request = DayRequest::from_json(body)?;
        let response = self.plan(&request, strategy)?;
        Ok(serde_json::to_string(&response)?)
    }
}
