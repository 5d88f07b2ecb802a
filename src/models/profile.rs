use serde::{Deserialize, Serialize};

/// ---------------------------------------------------------------------------
/// Profile Enums
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
  Male,
  Female,
}

impl std::fmt::Display for Sex {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Male => write!(f, "male"),
      Self::Female => write!(f, "female"),
    }
  }
}

impl std::str::FromStr for Sex {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "male" => Ok(Self::Male),
      "female" => Ok(Self::Female),
      _ => Err(format!("Unknown sex: {}", s)),
    }
  }
}

/// Activity level scaling BMR into total daily energy expenditure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
  Sedentary,
  Light,
  Moderate,
  Active,
  Very,
}

impl ActivityLevel {
  /// Standard TDEE multiplier for this activity level
  pub fn multiplier(self) -> f64 {
    match self {
      Self::Sedentary => 1.2,
      Self::Light => 1.375,
      Self::Moderate => 1.55,
      Self::Active => 1.725,
      Self::Very => 1.9,
    }
  }
}

impl std::fmt::Display for ActivityLevel {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let s = match self {
      Self::Sedentary => "sedentary",
      Self::Light => "light",
      Self::Moderate => "moderate",
      Self::Active => "active",
      Self::Very => "very",
    };
    write!(f, "{}", s)
  }
}

impl std::str::FromStr for ActivityLevel {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "sedentary" => Ok(Self::Sedentary),
      "light" => Ok(Self::Light),
      "moderate" => Ok(Self::Moderate),
      "active" => Ok(Self::Active),
      "very" => Ok(Self::Very),
      _ => Err(format!("Unknown activity level: {}", s)),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum Goal {
  Loss,
  #[default]
  Maintenance,
  Gain,
}

impl std::fmt::Display for Goal {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Loss => write!(f, "loss"),
      Self::Maintenance => write!(f, "maintenance"),
      Self::Gain => write!(f, "gain"),
    }
  }
}

impl std::str::FromStr for Goal {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "loss" => Ok(Self::Loss),
      "maintenance" => Ok(Self::Maintenance),
      "gain" => Ok(Self::Gain),
      _ => Err(format!("Unknown goal: {}", s)),
    }
  }
}

/// Training experience, drives default sets/reps in generated programs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum TrainingLevel {
  Beginner,
  #[default]
  Intermediate,
  Advanced,
}

impl TrainingLevel {
  pub fn default_sets(self) -> i64 {
    match self {
      Self::Beginner => 3,
      Self::Intermediate => 4,
      Self::Advanced => 5,
    }
  }

  pub fn default_reps(self) -> i64 {
    match self {
      Self::Beginner => 10,
      Self::Intermediate => 12,
      Self::Advanced => 15,
    }
  }
}

impl std::fmt::Display for TrainingLevel {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Beginner => write!(f, "beginner"),
      Self::Intermediate => write!(f, "intermediate"),
      Self::Advanced => write!(f, "advanced"),
    }
  }
}

impl std::str::FromStr for TrainingLevel {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "beginner" => Ok(Self::Beginner),
      "intermediate" => Ok(Self::Intermediate),
      "advanced" => Ok(Self::Advanced),
      _ => Err(format!("Unknown training level: {}", s)),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Profile
/// ---------------------------------------------------------------------------

/// User profile driving macro targets and program generation.
/// Created with defaults on first load, overwritten in place, never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
  pub weight_kg: f64,
  pub height_cm: f64,
  pub age: i64,
  pub sex: Sex,
  pub activity: ActivityLevel,
  pub goal: Goal,
  pub level: TrainingLevel,
}

impl Default for Profile {
  fn default() -> Self {
    Self {
      weight_kg: 70.0,
      height_cm: 170.0,
      age: 25,
      sex: Sex::Male,
      activity: ActivityLevel::Moderate,
      goal: Goal::Maintenance,
      level: TrainingLevel::Intermediate,
    }
  }
}

impl Profile {
  /// Whether the anthropometric inputs allow a macro computation at all
  pub fn is_complete(&self) -> bool {
    self.weight_kg > 0.0 && self.height_cm > 0.0 && self.age > 0
  }
}
