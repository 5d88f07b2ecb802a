//! Configuration-driven catalogs: exercises by muscle group, the static
//! weekly schedule, and the seasonal meal list.
//!
//! The engine takes catalogs as parameters; the defaults here are the single
//! source for data that used to be duplicated across every UI variant.
//! Alternate catalogs can be deserialized from JSON for tests or theming.

use serde::{Deserialize, Serialize};

use crate::models::plan::{DayPlan, PlannedExercise, RepSpec};

/// ---------------------------------------------------------------------------
/// Muscle Groups
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
  Arms,
  Legs,
  Back,
  Chest,
  Abs,
  Cardio,
}

impl MuscleGroup {
  /// All groups in catalog order
  pub const ALL: [MuscleGroup; 6] = [
    MuscleGroup::Arms,
    MuscleGroup::Legs,
    MuscleGroup::Back,
    MuscleGroup::Chest,
    MuscleGroup::Abs,
    MuscleGroup::Cardio,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      MuscleGroup::Arms => "arms",
      MuscleGroup::Legs => "legs",
      MuscleGroup::Back => "back",
      MuscleGroup::Chest => "chest",
      MuscleGroup::Abs => "abs",
      MuscleGroup::Cardio => "cardio",
    }
  }
}

impl std::fmt::Display for MuscleGroup {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl std::str::FromStr for MuscleGroup {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "arms" => Ok(Self::Arms),
      "legs" => Ok(Self::Legs),
      "back" => Ok(Self::Back),
      "chest" => Ok(Self::Chest),
      "abs" => Ok(Self::Abs),
      "cardio" => Ok(Self::Cardio),
      _ => Err(format!("Unknown muscle group: {}", s)),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Equipment
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Equipment {
  Dumbbell,
  Barbell,
  Machine,
  Bodyweight,
  Rope,
  Bike,
  None,
}

impl std::fmt::Display for Equipment {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let s = match self {
      Equipment::Dumbbell => "dumbbell",
      Equipment::Barbell => "barbell",
      Equipment::Machine => "machine",
      Equipment::Bodyweight => "bodyweight",
      Equipment::Rope => "rope",
      Equipment::Bike => "bike",
      Equipment::None => "none",
    };
    write!(f, "{}", s)
  }
}

/// ---------------------------------------------------------------------------
/// Exercise Catalog
/// ---------------------------------------------------------------------------

/// Default work for one exercise slot: counted reps or a timed hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SetScheme {
  Reps { reps: i64 },
  Timed { secs: i64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
  pub name: String,
  pub group: MuscleGroup,
  pub equipment: Equipment,
  pub sets: i64,
  pub scheme: SetScheme,
}

impl Exercise {
  fn new(
    name: &str,
    group: MuscleGroup,
    equipment: Equipment,
    sets: i64,
    scheme: SetScheme,
  ) -> Self {
    Self {
      name: name.to_string(),
      group,
      equipment,
      sets,
      scheme,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseCatalog {
  pub exercises: Vec<Exercise>,
}

impl ExerciseCatalog {
  /// Exercises tagged with `group`, in catalog order
  pub fn for_group(&self, group: MuscleGroup) -> Vec<&Exercise> {
    self.exercises.iter().filter(|e| e.group == group).collect()
  }

  /// Low-impact core hold appended when a generated workout runs short
  pub fn filler(&self) -> Exercise {
    Exercise::new(
      "Plank Hold",
      MuscleGroup::Abs,
      Equipment::Bodyweight,
      3,
      SetScheme::Timed { secs: 60 },
    )
  }
}

impl Default for ExerciseCatalog {
  fn default() -> Self {
    use Equipment::{Barbell, Bike, Bodyweight, Dumbbell, Machine, Rope};
    use MuscleGroup::*;

    let reps = |n| SetScheme::Reps { reps: n };
    let timed = |s| SetScheme::Timed { secs: s };

    Self {
      exercises: vec![
        Exercise::new("Curl Biceps", Arms, Dumbbell, 3, reps(12)),
        Exercise::new("Triceps Dips", Arms, Bodyweight, 3, reps(12)),
        Exercise::new("Hammer Curl", Arms, Dumbbell, 3, reps(12)),
        Exercise::new("Push-up Diamond", Arms, Bodyweight, 3, reps(10)),
        Exercise::new("Squat", Legs, Bodyweight, 4, reps(12)),
        Exercise::new("Lunges", Legs, Bodyweight, 3, reps(12)),
        Exercise::new("Leg Press", Legs, Machine, 3, reps(12)),
        Exercise::new("Deadlift", Legs, Barbell, 3, reps(8)),
        Exercise::new("Pull-up", Back, Bodyweight, 4, reps(8)),
        Exercise::new("Lat Pull-down", Back, Machine, 3, reps(12)),
        Exercise::new("Bent-over Row", Back, Barbell, 4, reps(10)),
        Exercise::new("Superman", Back, Bodyweight, 3, reps(15)),
        Exercise::new("Bench Press", Chest, Barbell, 4, reps(8)),
        Exercise::new("Push-up", Chest, Bodyweight, 3, reps(15)),
        Exercise::new("Chest Fly", Chest, Dumbbell, 3, reps(12)),
        Exercise::new("Incline Dumbbell Press", Chest, Dumbbell, 3, reps(10)),
        Exercise::new("Crunch", Abs, Bodyweight, 3, timed(40)),
        Exercise::new("Plank", Abs, Bodyweight, 3, timed(40)),
        Exercise::new("Russian Twist", Abs, Bodyweight, 3, timed(40)),
        Exercise::new("Leg Raise", Abs, Bodyweight, 3, timed(40)),
        Exercise::new("Jump Rope", Cardio, Rope, 3, timed(300)),
        Exercise::new("Running", Cardio, Equipment::None, 1, timed(1200)),
        Exercise::new("Cycling", Cardio, Bike, 1, timed(1200)),
        Exercise::new("Burpees", Cardio, Bodyweight, 3, reps(15)),
      ],
    }
  }
}

/// ---------------------------------------------------------------------------
/// Weekly Schedule
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekSchedule {
  pub days: Vec<DayPlan>,
}

impl Default for WeekSchedule {
  fn default() -> Self {
    fn ex(name: &str, sets: i64, reps: RepSpec, equipment: Equipment) -> PlannedExercise {
      PlannedExercise {
        name: name.to_string(),
        sets,
        reps,
        equipment,
      }
    }
    fn day(label: &str, exercises: Vec<PlannedExercise>) -> DayPlan {
      DayPlan {
        label: label.to_string(),
        exercises,
      }
    }

    use Equipment::*;
    let n = RepSpec::Count;
    let t = |s: &str| RepSpec::Text(s.to_string());

    Self {
      days: vec![
        day(
          "Monday",
          vec![
            ex("Bench Press", 4, t("8-12"), Barbell),
            ex("Push-up", 3, n(15), Bodyweight),
            ex("Chest Fly", 3, n(12), Dumbbell),
            ex("Incline Dumbbell Press", 3, n(10), Dumbbell),
          ],
        ),
        day(
          "Tuesday",
          vec![
            ex("Pull-up", 4, t("AMRAP"), Bodyweight),
            ex("Lat Pull-down", 3, n(12), Machine),
            ex("Bent-over Row", 4, n(10), Barbell),
            ex("Superman", 3, n(15), Bodyweight),
          ],
        ),
        day(
          "Wednesday",
          vec![
            ex("Squat", 4, n(10), Bodyweight),
            ex("Lunges", 3, n(12), Bodyweight),
            ex("Leg Press", 3, n(12), Machine),
            ex("Deadlift", 3, n(8), Barbell),
          ],
        ),
        day(
          "Thursday",
          vec![
            ex("Curl Biceps", 3, n(12), Dumbbell),
            ex("Triceps Dips", 3, n(12), Bodyweight),
            ex("Hammer Curl", 3, n(12), Dumbbell),
            ex("Push-up Diamond", 3, n(10), Bodyweight),
          ],
        ),
        day(
          "Friday",
          vec![
            ex("Crunch", 3, n(20), Bodyweight),
            ex("Plank", 3, t("60s"), Bodyweight),
            ex("Russian Twist", 3, n(20), Bodyweight),
            ex("Leg Raise", 3, n(15), Bodyweight),
          ],
        ),
        day(
          "Saturday",
          vec![
            ex("Jump Rope", 3, t("5 min"), Rope),
            ex("Running", 1, t("30 min"), Equipment::None),
            ex("Burpees", 3, n(15), Bodyweight),
          ],
        ),
        day("Sunday", vec![]),
      ],
    }
  }
}

/// ---------------------------------------------------------------------------
/// Seasonal Meals
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
  Spring,
  Summer,
  Autumn,
  Winter,
}

impl std::fmt::Display for Season {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let s = match self {
      Season::Spring => "spring",
      Season::Summer => "summer",
      Season::Autumn => "autumn",
      Season::Winter => "winter",
    };
    write!(f, "{}", s)
  }
}

impl Season {
  /// Season containing the given month (1-12), northern-hemisphere style
  pub fn from_month(month: u32) -> Self {
    match month {
      3..=5 => Season::Spring,
      6..=8 => Season::Summer,
      9..=11 => Season::Autumn,
      _ => Season::Winter,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
  pub name: String,
  pub season: Season,
  pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealCatalog {
  pub meals: Vec<Meal>,
}

impl MealCatalog {
  pub fn for_season(&self, season: Season) -> Vec<&Meal> {
    self.meals.iter().filter(|m| m.season == season).collect()
  }
}

impl Default for MealCatalog {
  fn default() -> Self {
    fn meal(name: &str, season: Season, description: &str) -> Meal {
      Meal {
        name: name.to_string(),
        season,
        description: description.to_string(),
      }
    }
    use Season::*;

    Self {
      meals: vec![
        meal("Asparagus omelette", Spring, "Eggs, asparagus, goat cheese"),
        meal("Chicken pea salad", Spring, "Grilled chicken, peas, mint"),
        meal("Spring veggie stir-fry", Spring, "Tofu, snap peas, carrots"),
        meal("Strawberry oats", Spring, "Overnight oats, strawberries"),
        meal("Grilled salmon bowl", Summer, "Salmon, rice, cucumber, dill"),
        meal("Tomato mozzarella plate", Summer, "Tomatoes, mozzarella, basil"),
        meal("Chilled lentil salad", Summer, "Lentils, peppers, feta"),
        meal("Melon protein shake", Summer, "Whey, melon, yogurt"),
        meal("Pumpkin chili", Autumn, "Beef, beans, pumpkin"),
        meal("Roast chicken and squash", Autumn, "Chicken thigh, butternut"),
        meal("Mushroom barley soup", Autumn, "Barley, mushrooms, thyme"),
        meal("Apple walnut porridge", Autumn, "Oats, apple, walnuts"),
        meal("Beef stew", Winter, "Beef, root vegetables, stock"),
        meal("Baked cod with kale", Winter, "Cod, kale, lemon"),
        meal("Chickpea curry", Winter, "Chickpeas, spinach, coconut"),
        meal("Cottage cheese bowl", Winter, "Cottage cheese, honey, seeds"),
      ],
    }
  }
}

/// ---------------------------------------------------------------------------
/// Combined Catalog
/// ---------------------------------------------------------------------------

/// Everything static the engine consumes, loaded once at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Catalog {
  pub exercises: ExerciseCatalog,
  pub week: WeekSchedule,
  pub meals: MealCatalog,
}
