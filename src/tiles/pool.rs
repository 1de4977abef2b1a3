//! The shared tile pool and draw engine.
//!
//! The pool is logically a shuffled bag. Draws reshuffle the whole pool
//! first rather than consuming a pre-shuffled order; draw order therefore has
//! no correlation across draws and no counting strategy exists. This is
//! observable behavior and is preserved deliberately.

use serde::{Deserialize, Serialize};

use crate::core::rng::GameRng;
use crate::core::settings::Difficulty;
use crate::core::tile::{Tile, TileId};
use crate::tiles::distribution::distribution;

/// The shared undrawn tile reserve.
///
/// Owns its tiles; every operation moves tiles out by value so a tile is
/// never in two containers at once.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TilePool {
    tiles: Vec<Tile>,
}

impl TilePool {
    /// Generate a fresh shuffled pool of `pool_size` tiles.
    ///
    /// Tile IDs are allocated sequentially from 0 per game; identity is only
    /// meaningful within one game.
    #[must_use]
    pub fn generate(pool_size: usize, difficulty: Difficulty, rng: &mut GameRng) -> Self {
        let dist = distribution(difficulty, pool_size);

        let mut next_id = 0u32;
        let mut tiles = Vec::with_capacity(pool_size);
        for (letter, count) in dist.iter() {
            for _ in 0..count {
                tiles.push(Tile::new(TileId::new(next_id), letter));
                next_id += 1;
            }
        }

        rng.shuffle(&mut tiles);
        Self { tiles }
    }

    /// Build a pool from explicit tiles. Test and restore hook.
    #[must_use]
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// Number of tiles remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterate the remaining tiles.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Draw up to `count` tiles.
    ///
    /// Reshuffles the whole pool, then takes from the front. Drawing more
    /// than remains simply empties the pool.
    pub fn draw(&mut self, count: usize, rng: &mut GameRng) -> Vec<Tile> {
        rng.shuffle(&mut self.tiles);
        let count = count.min(self.tiles.len());
        self.tiles.drain(..count).collect()
    }

    /// Trade one tile for two fresh ones.
    ///
    /// The given tile joins the pool, everything is shuffled, and the first
    /// two tiles come back, so the pool shrinks by exactly one. Returns
    /// `None` without touching the pool when fewer than two tiles remain.
    pub fn exchange(&mut self, tile: Tile, rng: &mut GameRng) -> Option<(Tile, Tile)> {
        if self.tiles.len() < 2 {
            return None;
        }

        self.tiles.push(tile);
        rng.shuffle(&mut self.tiles);
        let first = self.tiles.remove(0);
        let second = self.tiles.remove(0);
        Some((first, second))
    }

    /// Peel in bot mode: one real tile for the player, one virtual tile for
    /// the bot.
    ///
    /// The pool shrinks by two but only the player's tile is materialized;
    /// the bot's draw exists purely as its hand-size counter. Returns `None`
    /// without touching the pool when fewer than two tiles remain.
    pub fn shared_peel(&mut self, rng: &mut GameRng) -> Option<Tile> {
        if self.tiles.len() < 2 {
            return None;
        }

        let mut drawn = self.draw(2, rng);
        let player_tile = drawn.swap_remove(0);
        // drawn[0] (after swap_remove, the bot's tile) is dropped here
        Some(player_tile)
    }

    /// Remove one tile without shuffling.
    ///
    /// Used when the bot exchanges: its virtual hand gains a tile and the
    /// shared pool owes one.
    pub fn take_one(&mut self) -> Option<Tile> {
        if self.tiles.is_empty() {
            None
        } else {
            Some(self.tiles.remove(0))
        }
    }
}
