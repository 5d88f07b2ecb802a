//! Deterministic nutrition layer: BMR, TDEE, and the calorie/macro split.
//!
//! Everything here is pure computation over a profile snapshot plus the
//! tunables; targets are recomputed on every read and never stored.

use serde::{Deserialize, Serialize};

use crate::models::plan::MacroTarget;
use crate::models::profile::{Goal, Profile, Sex};

/// ---------------------------------------------------------------------------
/// Tunables
/// ---------------------------------------------------------------------------

/// Adjustable constants for the plan engine. Persisted as one settings
/// document; the defaults are the canonical values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanTunables {
  /// Protein allowance in grams per kg bodyweight
  pub protein_g_per_kg: f64,
  /// Fat allowance in grams per kg bodyweight
  pub fat_g_per_kg: f64,
  /// Calories subtracted from TDEE for a loss goal
  pub calorie_deficit: f64,
  /// Calories added to TDEE for a gain goal
  pub calorie_surplus: f64,
  /// Working seconds assumed per rep when estimating workout duration
  pub seconds_per_rep: i64,
  /// Rest seconds assumed between sets
  pub rest_seconds: i64,
  /// Workout duration lower bound in minutes (filler below this)
  pub min_workout_minutes: i64,
  /// Workout duration upper bound in minutes (trim above this)
  pub max_workout_minutes: i64,
  /// Never trim a generated workout below this many exercises
  pub min_exercises: usize,
}

impl Default for PlanTunables {
  fn default() -> Self {
    Self {
      protein_g_per_kg: 1.9,
      fat_g_per_kg: 0.8,
      calorie_deficit: 400.0,
      calorie_surplus: 400.0,
      seconds_per_rep: 3,
      rest_seconds: 45,
      min_workout_minutes: 40,
      max_workout_minutes: 50,
      min_exercises: 3,
    }
  }
}

impl PlanTunables {
  /// Signed calorie offset applied to TDEE for the given goal
  pub fn goal_offset(&self, goal: Goal) -> f64 {
    match goal {
      Goal::Loss => -self.calorie_deficit,
      Goal::Maintenance => 0.0,
      Goal::Gain => self.calorie_surplus,
    }
  }
}

/// ---------------------------------------------------------------------------
/// Energy Expenditure
/// ---------------------------------------------------------------------------

/// Basal metabolic rate via Mifflin-St Jeor
pub fn bmr(profile: &Profile) -> f64 {
  let sex_term = match profile.sex {
    Sex::Male => 5.0,
    Sex::Female => -161.0,
  };
  10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * profile.age as f64 + sex_term
}

/// Total daily energy expenditure: BMR scaled by the activity multiplier
pub fn tdee(profile: &Profile) -> f64 {
  bmr(profile) * profile.activity.multiplier()
}

/// ---------------------------------------------------------------------------
/// Macro Targets
/// ---------------------------------------------------------------------------

/// Derive the daily calorie and macro targets for a profile.
///
/// Returns `None` when the anthropometric inputs are missing or non-positive;
/// the caller renders a placeholder instead of a target. `calorie_override`
/// replaces the TDEE-plus-goal-offset calorie figure when set.
pub fn derive_macros(
  profile: &Profile,
  tunables: &PlanTunables,
  calorie_override: Option<i64>,
) -> Option<MacroTarget> {
  if !profile.is_complete() {
    return None;
  }

  let calories = match calorie_override {
    Some(c) => c.max(0),
    None => {
      let target = tdee(profile) + tunables.goal_offset(profile.goal);
      target.round().max(0.0) as i64
    }
  };

  let mut protein_g = (profile.weight_kg * tunables.protein_g_per_kg).round() as i64;
  let mut fat_g = (profile.weight_kg * tunables.fat_g_per_kg).round() as i64;

  // Extreme profiles can put protein+fat alone above the calorie target;
  // scale both down so the macro invariant holds and carbs stay >= 0.
  let macro_kcal = protein_g * 4 + fat_g * 9;
  if macro_kcal > calories {
    let scale = calories as f64 / macro_kcal as f64;
    protein_g = (protein_g as f64 * scale).floor() as i64;
    fat_g = (fat_g as f64 * scale).floor() as i64;
  }

  let remaining = calories - protein_g * 4 - fat_g * 9;
  let carbs_g = (remaining as f64 / 4.0).floor().max(0.0) as i64;

  Some(MacroTarget {
    calories,
    protein_g,
    carbs_g,
    fat_g,
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::assert_approx_eq;
  use crate::models::profile::{ActivityLevel, TrainingLevel};

  fn reference_profile() -> Profile {
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

  #[test]
  fn test_bmr_reference_value() {
    // 10*78 + 6.25*178 - 5*25 + 5 = 1772.5
    assert_approx_eq!(bmr(&reference_profile()), 1772.5, 1e-9);
  }

  #[test]
  fn test_tdee_reference_value() {
    // Sedentary multiplier: 1772.5 * 1.2 = 2127
    assert_approx_eq!(tdee(&reference_profile()), 2127.0, 1e-9);
  }

  #[test]
  fn test_derive_macros_reference_profile() {
    let target = derive_macros(&reference_profile(), &PlanTunables::default(), None)
      .expect("complete profile should compute");

    assert_eq!(target.calories, 2127);
    assert_eq!(target.protein_g, 148);
    assert_eq!(target.fat_g, 62);
    // (2127 - 148*4 - 62*9) / 4 = 244.25, floored
    assert_eq!(target.carbs_g, 244);
  }

  #[test]
  fn test_female_sex_term() {
    let mut profile = reference_profile();
    profile.sex = Sex::Female;
    assert_approx_eq!(bmr(&profile), 1606.5, 1e-9);
  }

  #[test]
  fn test_incomplete_profile_not_computable() {
    let tunables = PlanTunables::default();

    let mut profile = reference_profile();
    profile.weight_kg = 0.0;
    assert!(derive_macros(&profile, &tunables, None).is_none());

    let mut profile = reference_profile();
    profile.height_cm = -1.0;
    assert!(derive_macros(&profile, &tunables, None).is_none());

    let mut profile = reference_profile();
    profile.age = 0;
    assert!(derive_macros(&profile, &tunables, None).is_none());
  }

  #[test]
  fn test_goal_monotonicity() {
    let tunables = PlanTunables::default();
    let mut profile = reference_profile();

    profile.goal = Goal::Loss;
    let loss = derive_macros(&profile, &tunables, None).unwrap();
    profile.goal = Goal::Maintenance;
    let maintenance = derive_macros(&profile, &tunables, None).unwrap();
    profile.goal = Goal::Gain;
    let gain = derive_macros(&profile, &tunables, None).unwrap();

    assert!(loss.calories < maintenance.calories);
    assert!(maintenance.calories < gain.calories);
  }

  #[test]
  fn test_calorie_override_wins() {
    let target =
      derive_macros(&reference_profile(), &PlanTunables::default(), Some(1800)).unwrap();
    assert_eq!(target.calories, 1800);
    // Protein/fat policy is unchanged by the override
    assert_eq!(target.protein_g, 148);
    assert_eq!(target.fat_g, 62);
  }

  #[test]
  fn test_macro_invariant_on_extreme_profile() {
    // Small, elderly, cutting: protein+fat would exceed the calorie target
    let profile = Profile {
      weight_kg: 40.0,
      height_cm: 100.0,
      age: 90,
      sex: Sex::Female,
      activity: ActivityLevel::Sedentary,
      goal: Goal::Loss,
      level: TrainingLevel::Beginner,
    };
    let target = derive_macros(&profile, &PlanTunables::default(), None).unwrap();

    assert!(target.protein_g * 4 + target.fat_g * 9 <= target.calories);
    assert!(target.carbs_g >= 0);
  }

  #[test]
  fn test_calories_never_negative() {
    let profile = Profile {
      weight_kg: 30.0,
      height_cm: 50.0,
      age: 90,
      sex: Sex::Female,
      activity: ActivityLevel::Sedentary,
      goal: Goal::Loss,
      level: TrainingLevel::Beginner,
    };
    let target = derive_macros(&profile, &PlanTunables::default(), None).unwrap();

    assert_eq!(target.calories, 0);
    assert_eq!(target.protein_g, 0);
    assert_eq!(target.fat_g, 0);
    assert_eq!(target.carbs_g, 0);
  }

  #[test]
  fn test_invariant_holds_across_profile_grid() {
    let tunables = PlanTunables::default();
    for weight in [45.0, 60.0, 78.0, 95.0, 120.0] {
      for age in [18, 30, 50, 70, 90] {
        for sex in [Sex::Male, Sex::Female] {
          for goal in [Goal::Loss, Goal::Maintenance, Goal::Gain] {
            let profile = Profile {
              weight_kg: weight,
              height_cm: 165.0,
              age,
              sex,
              goal,
              ..Profile::default()
            };
            let target = derive_macros(&profile, &tunables, None).unwrap();
            assert!(
              target.protein_g * 4 + target.fat_g * 9 <= target.calories,
              "invariant violated for weight={} age={} sex={} goal={}",
              weight,
              age,
              sex,
              goal
            );
            assert!(target.carbs_g >= 0);
          }
        }
      }
    }
  }
}
