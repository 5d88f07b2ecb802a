//! Local persistence: a single SQLite-backed key/value store.
//!
//! Values are JSON documents keyed by the constants below. Absent or
//! malformed documents fall back to their type's defaults; decode problems
//! never propagate past this module.

use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::fs;
use std::path::PathBuf;

pub type DbPool = SqlitePool;

/// Store keys. Each key owns one JSON document; there is no cross-key
/// atomicity, matching the single-writer model.
pub const KEY_PROFILE: &str = "profile";
pub const KEY_TUNABLES: &str = "tunables";
pub const KEY_PROGRESS_HISTORY: &str = "progress_history";
pub const KEY_SET_LOGS: &str = "set_logs";
pub const KEY_MEAL_LOGS: &str = "meal_logs";
pub const KEY_PROGRAM: &str = "program";

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
  #[error("Database error: {0}")]
  Database(#[from] sqlx::Error),

  #[error("Encode error: {0}")]
  Encode(#[from] serde_json::Error),
}

/// ---------------------------------------------------------------------------
/// Initialization
/// ---------------------------------------------------------------------------

/// Get the path to the database file.
/// `MUSCLE_COACH_DATA_DIR` overrides the data directory; defaults to the
/// working directory.
fn get_db_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
  let data_dir = std::env::var("MUSCLE_COACH_DATA_DIR").unwrap_or_else(|_| ".".to_string());
  let data_dir = PathBuf::from(data_dir);

  // Create directory if it doesn't exist
  fs::create_dir_all(&data_dir)?;

  Ok(data_dir.join("muscle-coach.db"))
}

/// Initialize the database connection pool and run migrations
pub async fn initialize_db() -> Result<DbPool, Box<dyn std::error::Error>> {
  // Load environment variables from .env file
  dotenvy::dotenv().ok();

  let db_path = get_db_path()?;
  let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

  println!("Initializing database at: {}", db_path.display());

  // Create connection pool
  let pool = SqlitePoolOptions::new()
    .max_connections(5)
    .connect(&db_url)
    .await?;

  // Run migrations
  sqlx::migrate!("./migrations").run(&pool).await?;

  println!("Database initialized successfully");

  Ok(pool)
}

/// ---------------------------------------------------------------------------
/// Key/Value Operations
/// ---------------------------------------------------------------------------

pub async fn kv_get(pool: &DbPool, key: &str) -> Result<Option<String>, StoreError> {
  let value: Option<String> = sqlx::query_scalar("SELECT value FROM kv_store WHERE key = ?1")
    .bind(key)
    .fetch_optional(pool)
    .await?;
  Ok(value)
}

pub async fn kv_set(pool: &DbPool, key: &str, value: &str) -> Result<(), StoreError> {
  sqlx::query(
    r#"
    INSERT INTO kv_store (key, value, updated_at)
    VALUES (?1, ?2, datetime('now'))
    ON CONFLICT(key) DO UPDATE SET
      value = excluded.value,
      updated_at = excluded.updated_at
    "#,
  )
  .bind(key)
  .bind(value)
  .execute(pool)
  .await?;
  Ok(())
}

/// ---------------------------------------------------------------------------
/// Typed Documents
/// ---------------------------------------------------------------------------

/// Load a JSON document, falling back to the type's default when the key is
/// absent or the stored text no longer parses
pub async fn load_or_default<T>(pool: &DbPool, key: &str) -> Result<T, StoreError>
where
  T: DeserializeOwned + Default,
{
  match kv_get(pool, key).await? {
    Some(raw) => Ok(serde_json::from_str(&raw).unwrap_or_default()),
    None => Ok(T::default()),
  }
}

/// Serialize and store a JSON document under `key`
pub async fn save_json<T: Serialize>(pool: &DbPool, key: &str, value: &T) -> Result<(), StoreError> {
  let raw = serde_json::to_string(value)?;
  kv_set(pool, key, &raw).await
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::profile::{Goal, Profile};
  use crate::test_utils::{setup_test_db, teardown_test_db};
  use serial_test::serial;

  #[tokio::test]
  async fn test_kv_get_absent_key() {
    let pool = setup_test_db().await;
    assert_eq!(kv_get(&pool, "missing").await.unwrap(), None);
    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_kv_set_then_get_and_overwrite() {
    let pool = setup_test_db().await;

    kv_set(&pool, "greeting", "hello").await.unwrap();
    assert_eq!(
      kv_get(&pool, "greeting").await.unwrap(),
      Some("hello".to_string())
    );

    kv_set(&pool, "greeting", "hi").await.unwrap();
    assert_eq!(
      kv_get(&pool, "greeting").await.unwrap(),
      Some("hi".to_string())
    );

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_profile_document_roundtrip() {
    let pool = setup_test_db().await;

    let mut profile = Profile::default();
    profile.weight_kg = 82.5;
    profile.goal = Goal::Gain;

    save_json(&pool, KEY_PROFILE, &profile).await.unwrap();
    let loaded: Profile = load_or_default(&pool, KEY_PROFILE).await.unwrap();
    assert_eq!(loaded, profile);
    assert_eq!(loaded.weight_kg, 82.5);

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_absent_document_yields_default() {
    let pool = setup_test_db().await;
    let profile: Profile = load_or_default(&pool, KEY_PROFILE).await.unwrap();
    assert_eq!(profile, Profile::default());
    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_malformed_document_silently_replaced_by_default() {
    let pool = setup_test_db().await;

    kv_set(&pool, KEY_PROFILE, "{not json at all")
      .await
      .unwrap();
    let profile: Profile = load_or_default(&pool, KEY_PROFILE).await.unwrap();
    assert_eq!(profile, Profile::default());

    teardown_test_db(pool).await;
  }

  #[test]
  #[serial]
  fn test_db_path_honors_env_override() {
    let dir = std::env::temp_dir().join("muscle-coach-path-test");
    temp_env::with_var(
      "MUSCLE_COACH_DATA_DIR",
      Some(dir.to_str().unwrap()),
      || {
        let path = get_db_path().unwrap();
        assert!(path.starts_with(&dir));
        assert_eq!(path.file_name().unwrap(), "muscle-coach.db");
      },
    );
  }
}
