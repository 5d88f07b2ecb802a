//! Profile and tunables commands

use crate::db::{load_or_default, save_json, DbPool, KEY_PROFILE, KEY_TUNABLES};
use crate::models::profile::{ActivityLevel, Goal, Profile, Sex, TrainingLevel};
use crate::nutrition::PlanTunables;

/// Load the stored profile, or the documented defaults on first run
pub async fn get_profile(pool: &DbPool) -> Result<Profile, String> {
  load_or_default(pool, KEY_PROFILE)
    .await
    .map_err(|e| e.to_string())
}

/// Partial profile update: unset fields keep their stored values.
/// Returns the profile as persisted.
#[allow(clippy::too_many_arguments)]
pub async fn update_profile(
  pool: &DbPool,
  weight_kg: Option<f64>,
  height_cm: Option<f64>,
  age: Option<i64>,
  sex: Option<Sex>,
  activity: Option<ActivityLevel>,
  goal: Option<Goal>,
  level: Option<TrainingLevel>,
) -> Result<Profile, String> {
  let mut profile = get_profile(pool).await?;

  if let Some(weight_kg) = weight_kg {
    profile.weight_kg = weight_kg;
  }
  if let Some(height_cm) = height_cm {
    profile.height_cm = height_cm;
  }
  if let Some(age) = age {
    profile.age = age;
  }
  if let Some(sex) = sex {
    profile.sex = sex;
  }
  if let Some(activity) = activity {
    profile.activity = activity;
  }
  if let Some(goal) = goal {
    profile.goal = goal;
  }
  if let Some(level) = level {
    profile.level = level;
  }

  save_json(pool, KEY_PROFILE, &profile)
    .await
    .map_err(|e| e.to_string())?;
  Ok(profile)
}

pub async fn get_tunables(pool: &DbPool) -> Result<PlanTunables, String> {
  load_or_default(pool, KEY_TUNABLES)
    .await
    .map_err(|e| e.to_string())
}

pub async fn update_tunables(pool: &DbPool, tunables: PlanTunables) -> Result<(), String> {
  save_json(pool, KEY_TUNABLES, &tunables)
    .await
    .map_err(|e| e.to_string())
}
