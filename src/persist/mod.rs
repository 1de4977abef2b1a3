//! Saving and restoring snapshots through host key-value storage.

pub mod store;

pub use store::{
    clear_save, load_game, load_stats, save_game, save_stats, MemoryStore, Store, SAVE_KEY,
    SETTINGS_KEY, STATS_KEY,
};
