//! The game state machine: state, intents, reducer, clock, and records.

pub mod intent;
pub mod record;
pub mod reducer;
pub mod state;
pub mod timer;

pub use intent::Intent;
pub use record::{GameRecord, GameStats};
pub use reducer::reduce;
pub use state::GameState;
pub use timer::{format_time, GameTimer};
