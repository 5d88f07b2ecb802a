use serde::{Deserialize, Serialize};

/// ---------------------------------------------------------------------------
/// Progress Log
/// ---------------------------------------------------------------------------

/// One-rep-max snapshot for the three tracked lifts, in kg
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiftMaxes {
  pub squat: f64,
  pub bench: f64,
  pub deadlift: f64,
}

/// One row in the append-only progress log, keyed by week label.
/// Entries are never mutated after insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
  pub week: String,
  pub weight_kg: Option<f64>,
  pub lifts: Option<LiftMaxes>,
}

/// Partial input for a new progress entry. Omitted fields inherit the
/// previous entry's values when recorded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewProgressEntry {
  /// Explicit label; auto-assigned "Week N" when absent
  pub week: Option<String>,
  pub weight_kg: Option<f64>,
  pub lifts: Option<LiftMaxes>,
}

/// ---------------------------------------------------------------------------
/// Per-Set Workout Log
/// ---------------------------------------------------------------------------

/// One logged exercise for a given date: rep-based sets carry `reps`,
/// time-based sets carry `secs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSetLog {
  /// ISO date string (YYYY-MM-DD), lexicographic order == chronological
  pub date: String,
  pub exercise: String,
  pub sets: i64,
  pub reps: Option<i64>,
  pub secs: Option<i64>,
  #[serde(default)]
  pub notes: String,
}

/// Aggregated training volume for one date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyVolume {
  pub date: String,
  pub total_sets: i64,
  /// Sum of sets * reps over rep-based entries
  pub rep_volume: i64,
  /// Sum of sets * secs over time-based entries
  pub timed_secs: i64,
}

/// ---------------------------------------------------------------------------
/// Meal Log
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealLog {
  pub date: String,
  pub meal: String,
  #[serde(default)]
  pub notes: String,
}
