//! # tilerace
//!
//! Engine for a Bananagrams-style tile-placement word race: draw letter
//! tiles from a shared pool, build a connected crossword grid, and peel for
//! more tiles the moment your hand is empty, solo against the clock or
//! racing a simulated opponent that consumes the same pool.
//!
//! ## Design Principles
//!
//! 1. **One reducer, one state**: every change goes through
//!    `reduce(state, intent, rng) -> state`. Invalid intents are silently
//!    absorbed as no-ops; the engine has no error path.
//!
//! 2. **Host-controlled time and randomness**: the bot loop, the timer, and
//!    every shuffle take an explicit `now` or an injected seeded RNG, so a
//!    scripted intent sequence replays a game exactly.
//!
//! 3. **Plain-data snapshots**: `GameState` is the unit of persistence and
//!    round-trips losslessly through serde. Persistent data structures make
//!    the per-intent snapshot clone cheap.
//!
//! ## Modules
//!
//! - `core`: letters, tiles, grid positions, settings, RNG
//! - `tiles`: letter distributions and the shared pool
//! - `board`: sparse grid, connectivity, word extraction
//! - `words`: dictionary loading and fail-open board validation
//! - `bot`: the simulated opponent's config and decision loop
//! - `game`: state, intents, reducer, timer, stats records
//! - `persist`: key-value snapshot storage

pub mod board;
pub mod bot;
pub mod core;
pub mod game;
pub mod persist;
pub mod tiles;
pub mod words;

// Re-export commonly used types
pub use crate::core::{
    BotDifficulty, Difficulty, GameMode, GameRng, GameRngState, GameSettings, HandOrientation,
    HandSize, Letter, Pos, PoolSize, Tile, TileId, TimerMode,
};

pub use crate::tiles::{distribution, LetterCounts, TilePool};

pub use crate::board::{extract_words, Board, ExtractedWord};

pub use crate::words::{validate_board_words, Dictionary, DictionaryError, WordValidation};

pub use crate::bot::{BotAction, BotConfig, BotState};

pub use crate::game::{
    format_time, reduce, GameRecord, GameState, GameStats, GameTimer, Intent,
};

pub use crate::persist::{
    clear_save, load_game, load_stats, save_game, save_stats, MemoryStore, Store, SAVE_KEY,
    SETTINGS_KEY, STATS_KEY,
};
