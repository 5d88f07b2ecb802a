//! Profile-driven workout and nutrition planning core.
//!
//! The engine modules (`nutrition`, `schedule`, `progress`) are pure
//! computations over snapshots; `db` is the key/value persistence
//! collaborator and `commands` is the surface the UI layer calls.

pub mod catalog;
pub mod commands;
pub mod db;
pub mod export;
pub mod models;
pub mod nutrition;
pub mod progress;
pub mod schedule;

#[cfg(test)]
pub mod test_utils;
