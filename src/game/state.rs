//! The authoritative game state.
//!
//! One `GameState` exists per game; the reducer replaces it wholesale per
//! intent. All fields are plain data, with no timers or handles, so the whole
//! struct is the unit of persistence and round-trips losslessly through
//! serde.
//!
//! Game phase is implicit in the fields rather than an explicit enum:
//! not-started (`started_at == 0`), in progress, complete-win, complete-loss.

use serde::{Deserialize, Serialize};

use crate::board::grid::Board;
use crate::bot::engine::BotState;
use crate::core::settings::{GameMode, GameSettings};
use crate::core::tile::{Tile, TileId};
use crate::tiles::pool::TilePool;

/// Complete state of one game.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Tiles held by the player. Order is UI layout only.
    pub hand: Vec<Tile>,
    /// The shared undrawn reserve.
    pub pool: TilePool,
    /// Placed tiles.
    pub board: Board,
    /// Game start, ms since epoch. Zero means no game yet.
    pub started_at: u64,
    /// Displayed elapsed time, updated by `Tick`.
    pub elapsed_ms: u64,
    /// Configuration fixed at `Init`.
    pub settings: GameSettings,
    /// Whether the game has ended.
    pub is_complete: bool,
    /// Whether the player won. Only meaningful once complete.
    pub is_win: bool,
    /// Simulated opponent, present in bot mode only.
    pub bot: Option<BotState>,
    /// Tiles flagged by the last dictionary check, for UI highlighting.
    pub invalid_tiles: Option<Vec<TileId>>,
}

impl GameState {
    /// Whether the player holds a tile with this id.
    #[must_use]
    pub fn hand_contains(&self, id: TileId) -> bool {
        self.hand.iter().any(|t| t.id == id)
    }

    /// Remove a tile from the hand by id.
    pub(crate) fn take_from_hand(&mut self, id: TileId) -> Option<Tile> {
        let index = self.hand.iter().position(|t| t.id == id)?;
        Some(self.hand.remove(index))
    }

    /// Whether this game races a bot.
    #[must_use]
    pub fn is_bot_mode(&self) -> bool {
        self.settings.game_mode == GameMode::Bot
    }

    /// Solo peel: hand empty, pool non-empty, board connected.
    #[must_use]
    pub fn can_peel(&self) -> bool {
        self.hand.is_empty() && !self.pool.is_empty() && self.board.is_connected()
    }

    /// Bot-mode peel: hand empty, pool can cover both players, board
    /// connected.
    #[must_use]
    pub fn can_shared_peel(&self) -> bool {
        self.hand.is_empty() && self.pool.len() >= 2 && self.board.is_connected()
    }

    /// Win condition: hand empty, pool empty, board connected.
    ///
    /// Evaluated by the host after every change; the engine never ends a
    /// non-timed game on its own.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.hand.is_empty() && self.pool.is_empty() && self.board.is_connected()
    }

    /// Total tiles across pool, hand, board, and the bot's virtual hand and
    /// invisible board (`tiles_placed`).
    ///
    /// Conserved at the pool size fixed at `Init` for every operation after
    /// it, including bot ticks.
    #[must_use]
    pub fn total_tiles(&self) -> usize {
        self.pool.len()
            + self.hand.len()
            + self.board.len()
            + self.bot.map_or(0, |b| (b.hand_size + b.tiles_placed) as usize)
    }
}
