//! Workout scheduling engine
//!
//! Deterministic selection over the catalogs: day plans from the weekly
//! schedule, muscle-group rotation from the training history, per-group
//! workout generation with a duration budget, and the seeded weekly program.
//!
//! Key principles:
//! - The current date is always an explicit parameter, never read here
//! - Same inputs (and same seed) always produce the same plan
//! - Day/index lookups reduce modulo the catalog, never out of range

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::catalog::{Exercise, ExerciseCatalog, MuscleGroup, SetScheme, WeekSchedule};
use crate::models::plan::{DayPlan, ProgramDay, ProgramExercise, WeekProgram};
use crate::models::profile::TrainingLevel;
use crate::nutrition::PlanTunables;

/// ---------------------------------------------------------------------------
/// Day Plan Selection
/// ---------------------------------------------------------------------------

/// Full weekday label matching the schedule's day labels
pub fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Select the day plan for a weekday by label.
///
/// A label mismatch (schedules that name rest days differently, or trimmed
/// schedules) falls back to the first day rather than failing. `None` only
/// for an empty schedule.
pub fn select_day_plan(schedule: &WeekSchedule, weekday: Weekday) -> Option<&DayPlan> {
    let label = weekday_label(weekday);
    schedule
        .days
        .iter()
        .find(|d| d.label == label)
        .or_else(|| schedule.days.first())
}

/// Select a day plan by rotation index, reduced modulo the schedule length
pub fn select_day_plan_by_index(schedule: &WeekSchedule, index: usize) -> Option<&DayPlan> {
    if schedule.days.is_empty() {
        return None;
    }
    schedule.days.get(index % schedule.days.len())
}

/// ---------------------------------------------------------------------------
/// Muscle Group Rotation
/// ---------------------------------------------------------------------------

/// Training history keyed by ISO date string (lexicographic == chronological)
pub type TrainedByDate = BTreeMap<String, Vec<MuscleGroup>>;

/// Pick the next muscle group to train.
///
/// Groups trained on the day before `today` are excluded; among the rest the
/// one with the oldest last-trained date wins, with never-trained groups
/// sorting first. If every group was trained yesterday the first group is the
/// fixed fallback. `None` only when `groups` is empty.
pub fn pick_next_muscle_group(
    history: &TrainedByDate,
    today: NaiveDate,
    groups: &[MuscleGroup],
) -> Option<MuscleGroup> {
    let yesterday = (today - Duration::days(1)).format("%Y-%m-%d").to_string();
    let trained_yesterday: &[MuscleGroup] = history
        .get(&yesterday)
        .map(|v| v.as_slice())
        .unwrap_or(&[]);

    let eligible: Vec<MuscleGroup> = groups
        .iter()
        .copied()
        .filter(|g| !trained_yesterday.contains(g))
        .collect();

    if eligible.is_empty() {
        // Unreachable with >= 2 groups, but guard anyway
        return groups.first().copied();
    }

    // min_by_key keeps the first minimum, so ties resolve in group order;
    // the empty-string sentinel puts never-trained groups first
    eligible
        .into_iter()
        .min_by_key(|g| last_trained(history, *g).unwrap_or_default().to_string())
}

fn last_trained(history: &TrainedByDate, group: MuscleGroup) -> Option<&str> {
    history
        .iter()
        .filter(|(_, groups)| groups.contains(&group))
        .map(|(date, _)| date.as_str())
        .next_back()
}

/// Build the trained-groups-by-date view from the raw set logs, resolving
/// each logged exercise to its muscle group through the catalog. Logs naming
/// unknown exercises are skipped.
pub fn trained_by_date(
    logs: &[crate::models::progress::ExerciseSetLog],
    catalog: &ExerciseCatalog,
) -> TrainedByDate {
    let mut history = TrainedByDate::new();
    for log in logs {
        let Some(exercise) = catalog.exercises.iter().find(|e| e.name == log.exercise) else {
            continue;
        };
        let groups = history.entry(log.date.clone()).or_default();
        if !groups.contains(&exercise.group) {
            groups.push(exercise.group);
        }
    }
    history
}

/// ---------------------------------------------------------------------------
/// Per-Group Workout Generation
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedWorkout {
    pub group: MuscleGroup,
    pub exercises: Vec<Exercise>,
    /// Display duration, clamped to the configured window
    pub estimated_minutes: i64,
}

fn estimate_seconds(exercises: &[Exercise], tunables: &PlanTunables) -> i64 {
    exercises
        .iter()
        .map(|ex| {
            let per_set = match ex.scheme {
                SetScheme::Timed { secs } => secs,
                SetScheme::Reps { reps } => reps * tunables.seconds_per_rep,
            };
            ex.sets * (per_set + tunables.rest_seconds)
        })
        .sum()
}

/// Build a workout for one muscle group within the duration budget.
///
/// Starts from the full ordered catalog subset for the group, drops trailing
/// exercises while the estimate exceeds the upper bound (respecting the
/// minimum count), and appends the filler hold once when below the lower
/// bound. The reported minutes are clamped into the window either way.
pub fn generate_workout_for_group(
    group: MuscleGroup,
    catalog: &ExerciseCatalog,
    tunables: &PlanTunables,
) -> GeneratedWorkout {
    let mut exercises: Vec<Exercise> = catalog
        .for_group(group)
        .into_iter()
        .cloned()
        .collect();

    let upper = tunables.max_workout_minutes * 60;
    let lower = tunables.min_workout_minutes * 60;

    let mut estimate = estimate_seconds(&exercises, tunables);
    while estimate > upper && exercises.len() > tunables.min_exercises {
        exercises.pop();
        estimate = estimate_seconds(&exercises, tunables);
    }

    if estimate < lower {
        exercises.push(catalog.filler());
        estimate = estimate_seconds(&exercises, tunables);
    }

    let minutes = (estimate as f64 / 60.0).round() as i64;
    let estimated_minutes = minutes.clamp(tunables.min_workout_minutes, tunables.max_workout_minutes);

    GeneratedWorkout {
        group,
        exercises,
        estimated_minutes,
    }
}

/// ---------------------------------------------------------------------------
/// Seeded Weekly Program
/// ---------------------------------------------------------------------------

/// splitmix64 finalizer over seed/day/slot, used as the deterministic
/// replacement for per-visit random exercise picks
fn mix(seed: u64, day: u64, slot: u64) -> u64 {
    let mut x = seed
        ^ day.wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ slot.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x ^= x >> 30;
    x = x.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^= x >> 31;
    x
}

/// Generate a 7-day program: one exercise per muscle group per day, picked
/// deterministically from the catalog by the stored seed. Same seed, same
/// program on every load.
pub fn generate_program(
    level: TrainingLevel,
    catalog: &ExerciseCatalog,
    seed: u64,
) -> WeekProgram {
    let days = (0..7u64)
        .map(|day| {
            let exercises = MuscleGroup::ALL
                .iter()
                .enumerate()
                .filter_map(|(slot, &group)| {
                    let pool = catalog.for_group(group);
                    if pool.is_empty() {
                        return None;
                    }
                    let pick = pool[(mix(seed, day, slot as u64) as usize) % pool.len()];
                    Some(ProgramExercise {
                        name: pick.name.clone(),
                        group,
                        equipment: pick.equipment,
                        sets: level.default_sets(),
                        reps: level.default_reps(),
                        done: false,
                    })
                })
                .collect();
            ProgramDay {
                label: format!("Day {}", day + 1),
                exercises,
            }
        })
        .collect();

    WeekProgram { seed, days }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
