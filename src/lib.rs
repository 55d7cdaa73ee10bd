pub mod args;
mod auth;
pub mod commands;
mod engine;
mod error;
mod model;
mod store;
#[cfg(test)]
mod test;
mod tracker;
mod utils;

pub use auth::{compute_digest, create_pin, verify_pin, GateState};
pub use engine::UpsertOutcome;
pub use error::{Error, Result};
pub use model::{Amount, CycleMetrics, CycleSummary, Entry, TrackerState};
pub use store::Store;
pub use tracker::{DisplayMetrics, Tracker};
