use serde::{Deserialize, Serialize};

use crate::catalog::{Equipment, MuscleGroup};

/// ---------------------------------------------------------------------------
/// Macro Targets
/// ---------------------------------------------------------------------------

/// Daily calorie and macronutrient targets.
/// Derived from the profile on every read, never stored independently.
/// Invariant: protein_g*4 + fat_g*9 <= calories; carbs fill the remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTarget {
  pub calories: i64,
  pub protein_g: i64,
  pub carbs_g: i64,
  pub fat_g: i64,
}

/// ---------------------------------------------------------------------------
/// Day Plans (static weekly schedule)
/// ---------------------------------------------------------------------------

/// Rep prescription: a plain count, or free text like "8-12" / "AMRAP"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RepSpec {
  Count(i64),
  Text(String),
}

impl std::fmt::Display for RepSpec {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Count(n) => write!(f, "{}", n),
      Self::Text(s) => write!(f, "{}", s),
    }
  }
}

/// One exercise slot in a day plan template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedExercise {
  pub name: String,
  pub sets: i64,
  pub reps: RepSpec,
  pub equipment: Equipment,
}

/// Immutable template for one day of the weekly schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
  pub label: String,
  pub exercises: Vec<PlannedExercise>,
}

/// ---------------------------------------------------------------------------
/// Generated Week Program
/// ---------------------------------------------------------------------------

/// One exercise in a generated program, with a completion flag the UI toggles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramExercise {
  pub name: String,
  pub group: MuscleGroup,
  pub equipment: Equipment,
  pub sets: i64,
  pub reps: i64,
  pub done: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramDay {
  pub label: String,
  pub exercises: Vec<ProgramExercise>,
}

/// A full 7-day generated program. The seed it was built from is kept so a
/// persisted program never reshuffles between visits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WeekProgram {
  pub seed: u64,
  pub days: Vec<ProgramDay>,
}

impl WeekProgram {
  pub fn is_empty(&self) -> bool {
    self.days.is_empty()
  }
}
