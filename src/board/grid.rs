//! The sparse board grid.
//!
//! Backed by an `im` persistent map for O(1) clones: the reducer produces a
//! fresh snapshot per intent and shares structure with the old one.
//!
//! The board never rejects a disconnecting placement or move. Connectivity
//! is a query ("is this board winnable right now"), not a precondition;
//! the reducer allows any arrangement mid-game.

use im::HashMap as ImHashMap;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::core::position::Pos;
use crate::core::tile::{Tile, TileId};

/// Sparse mapping from grid position to placed tile.
///
/// Invariant: at most one tile per position, and a tile id appears at most
/// once across the whole board.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    placements: ImHashMap<Pos, Tile>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of placed tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Whether no tiles are placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Tile at a position, if any.
    #[must_use]
    pub fn get(&self, pos: Pos) -> Option<&Tile> {
        self.placements.get(&pos)
    }

    /// Whether a position is occupied.
    #[must_use]
    pub fn is_occupied(&self, pos: Pos) -> bool {
        self.placements.contains_key(&pos)
    }

    /// Place a tile on an empty cell. Returns false (board unchanged) if the
    /// cell is occupied.
    pub fn place(&mut self, pos: Pos, tile: Tile) -> bool {
        if self.is_occupied(pos) {
            return false;
        }
        self.placements.insert(pos, tile);
        true
    }

    /// Remove and return the tile at a position.
    pub fn remove(&mut self, pos: Pos) -> Option<Tile> {
        self.placements.remove(&pos)
    }

    /// Relocate a tile within the board.
    ///
    /// Returns false (board unchanged) if the source is empty or the target
    /// is occupied by a different tile. Moving a tile onto its own cell is a
    /// successful no-op.
    pub fn relocate(&mut self, from: Pos, to: Pos) -> bool {
        if from == to {
            return self.is_occupied(from);
        }
        if !self.is_occupied(from) || self.is_occupied(to) {
            return false;
        }
        let tile = self.placements.remove(&from).expect("occupancy checked");
        self.placements.insert(to, tile);
        true
    }

    /// Find the position of a tile by id.
    #[must_use]
    pub fn find_tile(&self, id: TileId) -> Option<Pos> {
        self.placements
            .iter()
            .find(|(_, tile)| tile.id == id)
            .map(|(&pos, _)| pos)
    }

    /// Whether a tile with this id is on the board.
    #[must_use]
    pub fn contains_tile(&self, id: TileId) -> bool {
        self.find_tile(id).is_some()
    }

    /// Iterate `(position, tile)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&Pos, &Tile)> {
        self.placements.iter()
    }

    /// All occupied positions.
    pub fn positions(&self) -> impl Iterator<Item = &Pos> {
        self.placements.keys()
    }

    /// Whether every placed tile belongs to one 4-adjacent cluster.
    ///
    /// An empty board is not connected (nothing placed cannot win); a single
    /// tile is trivially connected. Otherwise BFS from an arbitrary occupied
    /// cell must reach every occupied cell.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        let Some(start) = self.placements.keys().next().copied() else {
            return false;
        };
        if self.placements.len() == 1 {
            return true;
        }

        let mut visited = rustc_hash::FxHashSet::default();
        let mut queue = VecDeque::new();
        visited.insert(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for neighbor in current.neighbors() {
                if self.placements.contains_key(&neighbor) && !visited.contains(&neighbor) {
                    visited.insert(neighbor);
                    queue.push_back(neighbor);
                }
            }
        }

        visited.len() == self.placements.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tile::Letter;

    fn tile(id: u32, letter: Letter) -> Tile {
        Tile::new(TileId::new(id), letter)
    }

    #[test]
    fn test_place_and_get() {
        let mut board = Board::new();
        assert!(board.place(Pos::new(0, 0), tile(1, Letter::H)));
        assert_eq!(board.get(Pos::new(0, 0)).unwrap().letter, Letter::H);
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_place_occupied_rejected() {
        let mut board = Board::new();
        board.place(Pos::new(0, 0), tile(1, Letter::A));
        assert!(!board.place(Pos::new(0, 0), tile(2, Letter::B)));
        assert_eq!(board.get(Pos::new(0, 0)).unwrap().id, TileId::new(1));
    }

    #[test]
    fn test_remove() {
        let mut board = Board::new();
        board.place(Pos::new(2, 3), tile(1, Letter::K));

        let removed = board.remove(Pos::new(2, 3)).unwrap();
        assert_eq!(removed.id, TileId::new(1));
        assert!(board.is_empty());
        assert!(board.remove(Pos::new(2, 3)).is_none());
    }

    #[test]
    fn test_relocate() {
        let mut board = Board::new();
        board.place(Pos::new(0, 0), tile(1, Letter::A));
        board.place(Pos::new(0, 1), tile(2, Letter::B));

        // Target occupied by a different tile
        assert!(!board.relocate(Pos::new(0, 0), Pos::new(0, 1)));
        // Source empty
        assert!(!board.relocate(Pos::new(5, 5), Pos::new(6, 6)));
        // Onto its own cell
        assert!(board.relocate(Pos::new(0, 0), Pos::new(0, 0)));

        assert!(board.relocate(Pos::new(0, 0), Pos::new(1, 1)));
        assert_eq!(board.get(Pos::new(1, 1)).unwrap().id, TileId::new(1));
        assert!(board.get(Pos::new(0, 0)).is_none());
    }

    #[test]
    fn test_find_tile() {
        let mut board = Board::new();
        board.place(Pos::new(4, -2), tile(7, Letter::Q));

        assert_eq!(board.find_tile(TileId::new(7)), Some(Pos::new(4, -2)));
        assert_eq!(board.find_tile(TileId::new(8)), None);
        assert!(board.contains_tile(TileId::new(7)));
    }

    #[test]
    fn test_empty_board_not_connected() {
        assert!(!Board::new().is_connected());
    }

    #[test]
    fn test_single_tile_connected() {
        let mut board = Board::new();
        board.place(Pos::new(5, 5), tile(1, Letter::A));
        assert!(board.is_connected());
    }

    #[test]
    fn test_connected_cluster() {
        let mut board = Board::new();
        board.place(Pos::new(0, 0), tile(1, Letter::C));
        board.place(Pos::new(0, 1), tile(2, Letter::A));
        board.place(Pos::new(0, 2), tile(3, Letter::T));
        board.place(Pos::new(1, 2), tile(4, Letter::O));
        assert!(board.is_connected());
    }

    #[test]
    fn test_disjoint_clusters_not_connected() {
        let mut board = Board::new();
        board.place(Pos::new(0, 0), tile(1, Letter::A));
        board.place(Pos::new(0, 1), tile(2, Letter::B));
        // Diagonal adjacency does not count
        board.place(Pos::new(1, 2), tile(3, Letter::C));
        assert!(!board.is_connected());

        // Bridging the gap reconnects
        board.place(Pos::new(0, 2), tile(4, Letter::D));
        assert!(board.is_connected());
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut board = Board::new();
        board.place(Pos::new(0, 0), tile(1, Letter::H));
        board.place(Pos::new(-2, 3), tile(2, Letter::I));

        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }
}
