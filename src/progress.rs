//! Append-only progress history and volume aggregation.
//!
//! The history is owned by the persistence layer; everything here computes a
//! new snapshot from the old one. Entries are never mutated after insertion.

use std::collections::BTreeMap;

use crate::models::progress::{
  DailyVolume, ExerciseSetLog, LiftMaxes, NewProgressEntry, ProgressEntry,
};

/// ---------------------------------------------------------------------------
/// Progress Log
/// ---------------------------------------------------------------------------

/// Append a progress entry, returning the updated history.
///
/// The entry gets an auto-incremented "Week N" label unless one is supplied.
/// Fields the caller omits inherit the previous entry's values, so logging
/// only a new bench max never regresses the tracked bodyweight to missing.
pub fn record_progress_entry(
  history: &[ProgressEntry],
  entry: NewProgressEntry,
) -> Vec<ProgressEntry> {
  let week = entry
    .week
    .unwrap_or_else(|| format!("Week {}", history.len() + 1));

  let previous = history.last();
  let weight_kg = entry
    .weight_kg
    .or_else(|| previous.and_then(|p| p.weight_kg));
  let lifts = entry.lifts.or_else(|| previous.and_then(|p| p.lifts));

  let mut updated = history.to_vec();
  updated.push(ProgressEntry {
    week,
    weight_kg,
    lifts,
  });
  updated
}

/// ---------------------------------------------------------------------------
/// Chart Series
/// ---------------------------------------------------------------------------

/// (week, weight) points for the bodyweight chart, skipping weightless entries
pub fn weight_series(history: &[ProgressEntry]) -> Vec<(String, f64)> {
  history
    .iter()
    .filter_map(|e| e.weight_kg.map(|w| (e.week.clone(), w)))
    .collect()
}

/// (week, lift maxes) points for the strength chart
pub fn lift_series(history: &[ProgressEntry]) -> Vec<(String, LiftMaxes)> {
  history
    .iter()
    .filter_map(|e| e.lifts.map(|l| (e.week.clone(), l)))
    .collect()
}

/// ---------------------------------------------------------------------------
/// Daily Volume
/// ---------------------------------------------------------------------------

/// Aggregate set logs into per-date volume rows, ordered by date
pub fn daily_volume(logs: &[ExerciseSetLog]) -> Vec<DailyVolume> {
  let mut by_date: BTreeMap<&str, DailyVolume> = BTreeMap::new();

  for log in logs {
    let row = by_date.entry(log.date.as_str()).or_insert_with(|| DailyVolume {
      date: log.date.clone(),
      total_sets: 0,
      rep_volume: 0,
      timed_secs: 0,
    });
    row.total_sets += log.sets;
    if let Some(reps) = log.reps {
      row.rep_volume += log.sets * reps;
    }
    if let Some(secs) = log.secs {
      row.timed_secs += log.sets * secs;
    }
  }

  by_date.into_values().collect()
}
