//! Test utilities and helpers for integration and unit testing
//!
//! This module provides common test infrastructure including:
//! - Database setup/teardown
//! - Mock data factories
//! - Test fixtures
//! - Helper assertions

use chrono::{Duration, NaiveDate};
use sqlx::SqlitePool;

use crate::db::{save_json, KEY_PROGRESS_HISTORY, KEY_SET_LOGS};
use crate::models::profile::{ActivityLevel, Goal, Profile, Sex, TrainingLevel};
use crate::models::progress::{ExerciseSetLog, LiftMaxes, ProgressEntry};

/// ---------------------------------------------------------------------------
/// Database Test Utilities
/// ---------------------------------------------------------------------------

/// Create an in-memory SQLite database for testing
/// Runs all migrations and returns a ready-to-use pool
///
/// Uses max_connections(1) to prevent multiple pool connections from creating
/// isolated in-memory databases, which would cause intermittent test failures
pub async fn setup_test_db() -> SqlitePool {
  let pool = sqlx::sqlite::SqlitePoolOptions::new()
    .max_connections(1)
    .connect("sqlite::memory:")
    .await
    .expect("Failed to create in-memory database");

  // Run migrations
  sqlx::migrate!("./migrations")
    .run(&pool)
    .await
    .expect("Failed to run migrations");

  pool
}

/// Close a test database pool
pub async fn teardown_test_db(pool: SqlitePool) {
  pool.close().await;
}

/// Seed the store with a progress history of `count` weekly entries,
/// descending slightly in weight. Returns the seeded history.
pub async fn seed_test_history(pool: &SqlitePool, count: usize) -> Vec<ProgressEntry> {
  let history: Vec<ProgressEntry> = (0..count)
    .map(|i| ProgressEntry {
      week: format!("Week {}", i + 1),
      weight_kg: Some(80.0 - i as f64 * 0.5),
      lifts: Some(LiftMaxes {
        squat: 100.0 + i as f64 * 2.5,
        bench: 70.0 + i as f64 * 1.25,
        deadlift: 130.0 + i as f64 * 2.5,
      }),
    })
    .collect();

  save_json(pool, KEY_PROGRESS_HISTORY, &history)
    .await
    .expect("Failed to seed progress history");

  history
}

/// Seed the store with one rep-based set log per day, newest last
pub async fn seed_test_set_logs(pool: &SqlitePool, count: usize) -> Vec<ExerciseSetLog> {
  let start = date("2026-08-01");
  let logs: Vec<ExerciseSetLog> = (0..count)
    .map(|i| {
      let exercise = if i % 2 == 0 { "Squat" } else { "Bench Press" };
      ExerciseSetLog {
        date: (start + Duration::days(i as i64))
          .format("%Y-%m-%d")
          .to_string(),
        exercise: exercise.to_string(),
        sets: 3,
        reps: Some(10),
        secs: None,
        notes: String::new(),
      }
    })
    .collect();

  save_json(pool, KEY_SET_LOGS, &logs)
    .await
    .expect("Failed to seed set logs");

  logs
}

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

/// Create a mock profile for testing (the worked reference profile used
/// across the nutrition tests)
pub fn mock_profile() -> Profile {
  Profile {
    weight_kg: 78.0,
    height_cm: 178.0,
    age: 25,
    sex: Sex::Male,
    activity: ActivityLevel::Sedentary,
    goal: Goal::Maintenance,
    level: TrainingLevel::Intermediate,
  }
}

/// Create a mock progress entry for testing
pub fn mock_progress_entry(week: &str, weight_kg: f64) -> ProgressEntry {
  ProgressEntry {
    week: week.to_string(),
    weight_kg: Some(weight_kg),
    lifts: None,
  }
}

/// Create a mock rep-based set log for testing
pub fn mock_set_log(date: &str, exercise: &str) -> ExerciseSetLog {
  ExerciseSetLog {
    date: date.to_string(),
    exercise: exercise.to_string(),
    sets: 3,
    reps: Some(10),
    secs: None,
    notes: String::new(),
  }
}

/// ---------------------------------------------------------------------------
/// Date Helpers
/// ---------------------------------------------------------------------------

/// Parse a YYYY-MM-DD date literal
pub fn date(s: &str) -> NaiveDate {
  NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("bad date literal")
}

/// ---------------------------------------------------------------------------
/// Test Macros
/// ---------------------------------------------------------------------------

/// Assert two floats are approximately equal within a tolerance
#[macro_export]
macro_rules! assert_approx_eq {
  ($left:expr, $right:expr, $tolerance:expr) => {
    let diff = ($left - $right).abs();
    assert!(
      diff < $tolerance,
      "Values not approximately equal: {} vs {} (diff: {}, tolerance: {})",
      $left,
      $right,
      diff,
      $tolerance
    );
  };
}

/// ---------------------------------------------------------------------------
/// Tests for Test Utilities
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_setup_db_creates_schema() {
    let pool = setup_test_db().await;

    let tables: Vec<(String,)> = sqlx::query_as(
      "SELECT name FROM sqlite_master WHERE type='table' AND name = 'kv_store'",
    )
    .fetch_all(&pool)
    .await
    .expect("Failed to query tables");

    assert_eq!(tables.len(), 1);

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_seed_history_roundtrips() {
    let pool = setup_test_db().await;

    let seeded = seed_test_history(&pool, 4).await;
    assert_eq!(seeded.len(), 4);

    let loaded: Vec<ProgressEntry> =
      crate::db::load_or_default(&pool, KEY_PROGRESS_HISTORY)
        .await
        .expect("Failed to load history");
    assert_eq!(loaded, seeded);

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_seed_set_logs_dates_ascend() {
    let pool = setup_test_db().await;

    let logs = seed_test_set_logs(&pool, 3).await;
    assert_eq!(logs.len(), 3);
    assert!(logs.windows(2).all(|w| w[0].date < w[1].date));

    teardown_test_db(pool).await;
  }

  #[test]
  fn test_mock_factories_create_valid_data() {
    let profile = mock_profile();
    assert!(profile.is_complete());

    let entry = mock_progress_entry("Week 1", 80.0);
    assert_eq!(entry.weight_kg, Some(80.0));

    let log = mock_set_log("2026-08-20", "Squat");
    assert_eq!(log.sets, 3);
    assert!(log.secs.is_none());
  }
}
