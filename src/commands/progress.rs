//! Progress, set-log, and meal-log commands

use crate::db::{
  load_or_default, save_json, DbPool, KEY_MEAL_LOGS, KEY_PROGRESS_HISTORY, KEY_SET_LOGS,
};
use crate::models::progress::{
  DailyVolume, ExerciseSetLog, MealLog, NewProgressEntry, ProgressEntry,
};
use crate::progress::{daily_volume, record_progress_entry};

/// ---------------------------------------------------------------------------
/// Progress Log
/// ---------------------------------------------------------------------------

pub async fn get_progress_history(pool: &DbPool) -> Result<Vec<ProgressEntry>, String> {
  load_or_default(pool, KEY_PROGRESS_HISTORY)
    .await
    .map_err(|e| e.to_string())
}

/// Append a (possibly partial) progress entry and persist the new history
pub async fn log_progress_entry(
  pool: &DbPool,
  entry: NewProgressEntry,
) -> Result<Vec<ProgressEntry>, String> {
  let history = get_progress_history(pool).await?;
  let updated = record_progress_entry(&history, entry);
  save_json(pool, KEY_PROGRESS_HISTORY, &updated)
    .await
    .map_err(|e| e.to_string())?;
  Ok(updated)
}

/// Remove one entry by position. A UI affordance, not part of the engine:
/// the engine itself never deletes history.
pub async fn remove_progress_entry(
  pool: &DbPool,
  index: usize,
) -> Result<Vec<ProgressEntry>, String> {
  let mut history = get_progress_history(pool).await?;
  if index >= history.len() {
    return Err(format!("No progress entry at index {}", index));
  }
  history.remove(index);
  save_json(pool, KEY_PROGRESS_HISTORY, &history)
    .await
    .map_err(|e| e.to_string())?;
  Ok(history)
}

/// ---------------------------------------------------------------------------
/// Set Logs
/// ---------------------------------------------------------------------------

pub async fn get_set_logs(pool: &DbPool) -> Result<Vec<ExerciseSetLog>, String> {
  load_or_default(pool, KEY_SET_LOGS)
    .await
    .map_err(|e| e.to_string())
}

pub async fn log_exercise_sets(
  pool: &DbPool,
  log: ExerciseSetLog,
) -> Result<Vec<ExerciseSetLog>, String> {
  let mut logs = get_set_logs(pool).await?;
  logs.push(log);
  save_json(pool, KEY_SET_LOGS, &logs)
    .await
    .map_err(|e| e.to_string())?;
  Ok(logs)
}

/// Per-date volume rows for the chart collaborator
pub async fn get_daily_volume(pool: &DbPool) -> Result<Vec<DailyVolume>, String> {
  let logs = get_set_logs(pool).await?;
  Ok(daily_volume(&logs))
}

/// ---------------------------------------------------------------------------
/// Meal Logs
/// ---------------------------------------------------------------------------

pub async fn get_meal_logs(pool: &DbPool) -> Result<Vec<MealLog>, String> {
  load_or_default(pool, KEY_MEAL_LOGS)
    .await
    .map_err(|e| e.to_string())
}

pub async fn log_meal(pool: &DbPool, meal: MealLog) -> Result<Vec<MealLog>, String> {
  let mut meals = get_meal_logs(pool).await?;
  meals.push(meal);
  save_json(pool, KEY_MEAL_LOGS, &meals)
    .await
    .map_err(|e| e.to_string())?;
  Ok(meals)
}
