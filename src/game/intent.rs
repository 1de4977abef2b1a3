//! Intents dispatched by the host.
//!
//! This is the whole external surface of the state machine. Every invalid
//! intent is absorbed as a no-op by the reducer; none of these can fail.

use serde::{Deserialize, Serialize};

use crate::core::position::Pos;
use crate::core::settings::GameSettings;
use crate::core::tile::TileId;
use crate::game::state::GameState;

/// An intent to change the game state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Intent {
    /// Start a fresh game: generate the pool, draw the hand, and in bot mode
    /// reserve the bot's starting hand and create its state.
    Init {
        settings: GameSettings,
        /// Wall clock at start, ms since epoch.
        now_ms: u64,
    },

    /// Replace the state wholesale with a persisted snapshot. No validation
    /// is performed on the snapshot.
    Restore(Box<GameState>),

    /// Move a tile from the hand onto an empty board cell.
    PlaceTile { tile: TileId, pos: Pos },

    /// Move a tile from the board back to the hand.
    ReturnTile { tile: TileId },

    /// Relocate a tile within the board.
    MoveTile { tile: TileId, pos: Pos },

    /// Trade a tile (from hand or board) for two fresh pool tiles.
    ExchangeTile { tile: TileId },

    /// Draw once the hand is empty and the board is connected. Shared with
    /// the bot in bot mode.
    Peel,

    /// Update the displayed elapsed time. No game-logic effect.
    Tick { elapsed_ms: u64 },

    /// Terminate the game. The host decides when, from `is_won()` or timer
    /// expiry.
    EndGame { is_win: bool },

    /// Advance the bot's decision loop at the given wall clock.
    BotTick { now_ms: u64 },

    /// Flag tiles from a failed dictionary check. Cosmetic.
    MarkInvalid(Vec<TileId>),

    /// Clear dictionary feedback. Cosmetic.
    ClearInvalid,
}
