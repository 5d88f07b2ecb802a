//! Flat tabular export for the UI's "download my data" action.
//!
//! One section per entity type, comma-separated. Free-text fields have
//! embedded commas replaced with semicolons instead of CSV quoting, so every
//! row splits cleanly on commas.

use crate::models::profile::Profile;
use crate::models::progress::{ExerciseSetLog, MealLog, ProgressEntry};

fn escape(field: &str) -> String {
  field.replace(',', ";")
}

fn opt(value: Option<f64>) -> String {
  value.map(|v| v.to_string()).unwrap_or_default()
}

fn opt_int(value: Option<i64>) -> String {
  value.map(|v| v.to_string()).unwrap_or_default()
}

/// Render the full data snapshot as sectioned comma-separated text
pub fn export_csv(
  profile: &Profile,
  history: &[ProgressEntry],
  meals: &[MealLog],
  sets: &[ExerciseSetLog],
) -> String {
  let mut out = String::new();

  out.push_str("# Profile\n");
  out.push_str(&format!("weight_kg,{}\n", profile.weight_kg));
  out.push_str(&format!("height_cm,{}\n", profile.height_cm));
  out.push_str(&format!("age,{}\n", profile.age));
  out.push_str(&format!("sex,{}\n", profile.sex));
  out.push_str(&format!("activity,{}\n", profile.activity));
  out.push_str(&format!("goal,{}\n", profile.goal));
  out.push_str(&format!("level,{}\n", profile.level));

  out.push_str("\n# Weight Log\n");
  out.push_str("week,weight_kg,squat_kg,bench_kg,deadlift_kg\n");
  for entry in history {
    let (squat, bench, deadlift) = match entry.lifts {
      Some(l) => (l.squat.to_string(), l.bench.to_string(), l.deadlift.to_string()),
      None => (String::new(), String::new(), String::new()),
    };
    out.push_str(&format!(
      "{},{},{},{},{}\n",
      escape(&entry.week),
      opt(entry.weight_kg),
      squat,
      bench,
      deadlift
    ));
  }

  out.push_str("\n# Meals\n");
  out.push_str("date,meal,notes\n");
  for meal in meals {
    out.push_str(&format!(
      "{},{},{}\n",
      escape(&meal.date),
      escape(&meal.meal),
      escape(&meal.notes)
    ));
  }

  out.push_str("\n# Workout Sets\n");
  out.push_str("date,exercise,sets,reps,secs,notes\n");
  for set in sets {
    out.push_str(&format!(
      "{},{},{},{},{},{}\n",
      escape(&set.date),
      escape(&set.exercise),
      set.sets,
      opt_int(set.reps),
      opt_int(set.secs),
      escape(&set.notes)
    ));
  }

  out
}
