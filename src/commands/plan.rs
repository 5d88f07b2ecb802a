//! Plan commands: macro targets, day plans, and the generated week program

use chrono::{Datelike, NaiveDate};

use crate::catalog::{Catalog, Meal, MuscleGroup, Season};
use crate::commands::profile::{get_profile, get_tunables};
use crate::db::{load_or_default, save_json, DbPool, KEY_PROGRAM, KEY_SET_LOGS};
use crate::models::plan::{DayPlan, MacroTarget, WeekProgram};
use crate::models::progress::ExerciseSetLog;
use crate::nutrition::derive_macros;
use crate::schedule::{
  generate_program, generate_workout_for_group, pick_next_muscle_group, select_day_plan,
  trained_by_date, GeneratedWorkout,
};

/// Seed used when no program has been generated yet
const DEFAULT_PROGRAM_SEED: u64 = 1;

/// ---------------------------------------------------------------------------
/// Macro Targets
/// ---------------------------------------------------------------------------

/// Derive today's macro targets from the stored profile and tunables.
/// `Ok(None)` means the profile is incomplete and the UI shows a placeholder.
pub async fn get_macro_targets(
  pool: &DbPool,
  calorie_override: Option<i64>,
) -> Result<Option<MacroTarget>, String> {
  let profile = get_profile(pool).await?;
  let tunables = get_tunables(pool).await?;
  Ok(derive_macros(&profile, &tunables, calorie_override))
}

/// ---------------------------------------------------------------------------
/// Day Plans
/// ---------------------------------------------------------------------------

/// The static schedule entry for the given date's weekday
pub fn get_day_plan(catalog: &Catalog, date: NaiveDate) -> Result<DayPlan, String> {
  select_day_plan(&catalog.week, date.weekday())
    .cloned()
    .ok_or_else(|| "Weekly schedule is empty".to_string())
}

/// Meals for the season containing the given date
pub fn get_season_meals(catalog: &Catalog, date: NaiveDate) -> Vec<Meal> {
  let season = Season::from_month(date.month());
  catalog
    .meals
    .for_season(season)
    .into_iter()
    .cloned()
    .collect()
}

/// ---------------------------------------------------------------------------
/// Generated Week Program
/// ---------------------------------------------------------------------------

/// Load the persisted program, generating and persisting one from the stored
/// profile on first access
pub async fn get_week_program(pool: &DbPool, catalog: &Catalog) -> Result<WeekProgram, String> {
  let program: WeekProgram = load_or_default(pool, KEY_PROGRAM)
    .await
    .map_err(|e| e.to_string())?;
  if !program.is_empty() {
    return Ok(program);
  }
  regenerate_program(pool, catalog, DEFAULT_PROGRAM_SEED).await
}

/// Rebuild the program from the current profile level with an explicit seed
/// and persist it
pub async fn regenerate_program(
  pool: &DbPool,
  catalog: &Catalog,
  seed: u64,
) -> Result<WeekProgram, String> {
  let profile = get_profile(pool).await?;
  let program = generate_program(profile.level, &catalog.exercises, seed);
  save_json(pool, KEY_PROGRAM, &program)
    .await
    .map_err(|e| e.to_string())?;
  Ok(program)
}

/// Toggle the done flag on one program slot and persist the result
pub async fn toggle_exercise_done(
  pool: &DbPool,
  day_index: usize,
  exercise_index: usize,
) -> Result<WeekProgram, String> {
  let mut program: WeekProgram = load_or_default(pool, KEY_PROGRAM)
    .await
    .map_err(|e| e.to_string())?;

  let exercise = program
    .days
    .get_mut(day_index)
    .and_then(|d| d.exercises.get_mut(exercise_index))
    .ok_or_else(|| format!("No exercise at day {} slot {}", day_index, exercise_index))?;
  exercise.done = !exercise.done;

  save_json(pool, KEY_PROGRAM, &program)
    .await
    .map_err(|e| e.to_string())?;
  Ok(program)
}

/// ---------------------------------------------------------------------------
/// Adaptive Group Rotation
/// ---------------------------------------------------------------------------

/// Suggest the next muscle group to train, based on the logged sets
pub async fn suggest_next_group(
  pool: &DbPool,
  catalog: &Catalog,
  today: NaiveDate,
) -> Result<Option<MuscleGroup>, String> {
  let logs: Vec<ExerciseSetLog> = load_or_default(pool, KEY_SET_LOGS)
    .await
    .map_err(|e| e.to_string())?;
  let history = trained_by_date(&logs, &catalog.exercises);
  Ok(pick_next_muscle_group(&history, today, &MuscleGroup::ALL))
}

/// Build a duration-budgeted workout for one muscle group using the stored
/// tunables
pub async fn generate_group_workout(
  pool: &DbPool,
  catalog: &Catalog,
  group: MuscleGroup,
) -> Result<GeneratedWorkout, String> {
  let tunables = get_tunables(pool).await?;
  Ok(generate_workout_for_group(group, &catalog.exercises, &tunables))
}
