//! The simulated opponent: per-difficulty config and the timed decision loop.

pub mod config;
pub mod engine;

pub use config::BotConfig;
pub use engine::{tick, BotAction, BotState};
