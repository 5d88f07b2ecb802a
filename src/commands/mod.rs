pub mod plan;
pub mod profile;
pub mod progress;

use crate::db::DbPool;
use crate::export::export_csv;

/// Render the full stored snapshot as sectioned comma-separated text for the
/// export collaborator
pub async fn export_data(pool: &DbPool) -> Result<String, String> {
  let profile = profile::get_profile(pool).await?;
  let history = progress::get_progress_history(pool).await?;
  let meals = progress::get_meal_logs(pool).await?;
  let sets = progress::get_set_logs(pool).await?;
  Ok(export_csv(&profile, &history, &meals, &sets))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::progress::{MealLog, NewProgressEntry};
  use crate::test_utils::{setup_test_db, teardown_test_db};

  #[tokio::test]
  async fn test_export_reflects_stored_state() {
    let pool = setup_test_db().await;

    progress::log_progress_entry(
      &pool,
      NewProgressEntry {
        weight_kg: Some(77.0),
        ..Default::default()
      },
    )
    .await
    .unwrap();
    progress::log_meal(
      &pool,
      MealLog {
        date: "2026-08-23".to_string(),
        meal: "Chickpea curry".to_string(),
        notes: "spicy, double rice".to_string(),
      },
    )
    .await
    .unwrap();

    let out = export_data(&pool).await.unwrap();
    assert!(out.contains("# Profile"));
    assert!(out.contains("Week 1,77,,,\n"));
    assert!(out.contains("2026-08-23,Chickpea curry,spicy; double rice\n"));

    teardown_test_db(pool).await;
  }
}
