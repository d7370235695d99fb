//! Property-based checks over random days.

use proptest::prelude::*;

use u_dayplan::midnight::{combine_obligations, split_obligations};
use u_dayplan::models::{Obligation, Preference, Task, TimeOfDay};
use u_dayplan::scheduler::{DayScheduler, Strategy as Solver};
use u_dayplan::{PreferenceBands, SchedulerConfig};

fn time() -> impl Strategy<Value = TimeOfDay> {
    (0u32..1440).prop_map(|m| TimeOfDay::from_minutes(m).unwrap())
}

fn preference() -> impl Strategy<Value = Option<Preference>> {
    prop_oneof![
        Just(None),
        Just(Some(Preference::Morning)),
        Just(Some(Preference::Afternoon)),
        Just(Some(Preference::Evening)),
        Just(Some(Preference::Night)),
    ]
}

fn tasks() -> impl Strategy<Value = Vec<Task>> {
    prop::collection::vec((1u32..12, preference()), 0..5).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (units, pref))| Task {
                name: format!("T{i}"),
                duration: units * 15,
                preference: pref,
            })
            .collect()
    })
}

fn obligations() -> impl Strategy<Value = Vec<Obligation>> {
    prop::collection::vec((time(), time()), 0..3).prop_map(|spans| {
        spans
            .into_iter()
            .enumerate()
            .map(|(i, (start, end))| Obligation::new(format!("O{i}"), start, end))
            .collect()
    })
}

fn bounded() -> DayScheduler {
    DayScheduler::new().with_config(
        SchedulerConfig::new()
            .with_node_limit(5_000)
            .with_interval_fallback(false),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_csp_schedules_never_overlap(
        wake in time(),
        sleep in time(),
        obligations in obligations(),
        tasks in tasks(),
    ) {
        let busy: Vec<_> = split_obligations(&obligations)
            .iter()
            .filter_map(Obligation::interval)
            .collect();

        for strategy in [Solver::Ac3, Solver::Backtracking] {
            let result = bounded().solve(wake, sleep, &obligations, &tasks, strategy).unwrap();
            if !result.found_schedule {
                continue;
            }
            prop_assert_eq!(result.tasks.len(), tasks.len());
            prop_assert!(!result.has_overlaps());
            for placed in &result.tasks {
                let span = placed.interval();
                prop_assert!(
                    busy.iter().all(|b| !span.overlaps(b)),
                    "{} overlaps an obligation",
                    placed.task
                );
            }
        }
    }

    #[test]
    fn prop_interval_solver_places_full_durations(
        wake in time(),
        sleep in time(),
        obligations in obligations(),
        tasks in tasks(),
    ) {
        let busy: Vec<_> = split_obligations(&obligations)
            .iter()
            .filter_map(Obligation::interval)
            .collect();
        let result = bounded().solve(wake, sleep, &obligations, &tasks, Solver::Greedy).unwrap();
        if result.found_schedule {
            prop_assert!(!result.has_overlaps());
            for task in &tasks {
                let minutes: u32 = result
                    .placements_of(&task.name)
                    .iter()
                    .map(|p| p.duration_minutes())
                    .sum();
                prop_assert_eq!(minutes, task.duration);
            }
            for placed in &result.tasks {
                let span = placed.interval();
                prop_assert!(busy.iter().all(|b| !span.overlaps(b)));
            }
        }
    }

    #[test]
    fn prop_respected_preferences_start_in_band(
        wake in time(),
        sleep in time(),
        tasks in tasks(),
    ) {
        let bands = PreferenceBands::default();
        let result = bounded().solve(wake, sleep, &[], &tasks, Solver::ForwardChecking).unwrap();
        if result.found_schedule && result.preference_respected {
            for task in &tasks {
                if let Some(pref) = task.preference {
                    let placed = result.placements_of(&task.name);
                    prop_assert!(bands.matches(placed[0].start, pref));
                }
            }
        }
    }

    #[test]
    fn prop_split_is_identity_on_same_day(end in 1u32..1440, offset in 0u32..1440) {
        let end = TimeOfDay::from_minutes(end).unwrap();
        let start = TimeOfDay::from_minutes(offset % (end.minutes() + 1)).unwrap();
        let input = vec![Obligation::new("Meeting", start, end)];
        let split = split_obligations(&input);
        prop_assert_eq!(&split, &input);
        prop_assert_eq!(combine_obligations(split).unwrap(), input);
    }

    #[test]
    fn prop_split_round_trips_across_midnight(start in 2u32..1440, end in 1u32..1440) {
        prop_assume!(end < start);
        let input = vec![Obligation::new(
            "Shift",
            TimeOfDay::from_minutes(start).unwrap(),
            TimeOfDay::from_minutes(end).unwrap(),
        )];
        let split = split_obligations(&input);
        prop_assert_eq!(split.len(), 2);
        prop_assert!(split.iter().all(|o| !o.crosses_midnight()));
        prop_assert_eq!(combine_obligations(split).unwrap(), input);
    }
}
