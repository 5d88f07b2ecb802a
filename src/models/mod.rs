pub mod plan;
pub mod profile;
pub mod progress;

pub use plan::{DayPlan, MacroTarget, WeekProgram};
pub use profile::Profile;
pub use progress::ProgressEntry;
