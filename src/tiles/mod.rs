//! Tile distribution and the shared pool.

pub mod distribution;
pub mod pool;

pub use distribution::{base_distribution, distribution, LetterCounts};
pub use pool::TilePool;
