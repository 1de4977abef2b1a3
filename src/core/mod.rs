//! Core types: tiles, grid positions, settings, deterministic RNG.

pub mod position;
pub mod rng;
pub mod settings;
pub mod tile;

pub use position::{ParsePosError, Pos};
pub use rng::{GameRng, GameRngState};
pub use settings::{
    BotDifficulty, Difficulty, GameMode, GameSettings, HandOrientation, HandSize, PoolSize,
    TimerMode,
};
pub use tile::{Letter, Tile, TileId};
