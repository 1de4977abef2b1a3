//! Key-value persistence.
//!
//! The engine's contract with storage is deliberately thin: snapshots are
//! plain data, serialized whole under fixed keys, and restored verbatim. A
//! missing or undecodable value reads back as `None`: a corrupt save is
//! indistinguishable from no save, never an error surfaced to the player.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;

use crate::game::record::GameStats;
use crate::game::state::GameState;

/// Key for the in-progress game snapshot.
pub const SAVE_KEY: &str = "current-game";
/// Key for aggregate stats.
pub const STATS_KEY: &str = "game-stats";
/// Key for persisted settings.
pub const SETTINGS_KEY: &str = "game-settings";

/// Minimal key-value storage the host provides.
pub trait Store {
    /// Read the bytes under a key.
    fn get(&self, key: &str) -> Option<Vec<u8>>;
    /// Write the bytes under a key.
    fn set(&mut self, key: &str, value: Vec<u8>);
    /// Remove a key. Removing an absent key is fine.
    fn remove(&mut self, key: &str);
}

/// In-memory store for hosts without real storage and for tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Vec<u8>) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

fn set_encoded<T: Serialize>(store: &mut dyn Store, key: &str, value: &T) {
    // bincode of plain-data types cannot fail; a failure here would mean a
    // non-serializable field snuck into the snapshot
    match bincode::serialize(value) {
        Ok(bytes) => store.set(key, bytes),
        Err(err) => log::warn!("dropping save under {key}: {err}"),
    }
}

fn get_decoded<T: DeserializeOwned>(store: &dyn Store, key: &str) -> Option<T> {
    let bytes = store.get(key)?;
    bincode::deserialize(&bytes).ok()
}

/// Persist an in-progress game.
///
/// Completed or never-started games are not saved (a finished game has
/// nothing to resume).
pub fn save_game(store: &mut dyn Store, state: &GameState) {
    if !state.is_complete && state.started_at > 0 {
        set_encoded(store, SAVE_KEY, state);
    }
}

/// Read back a saved game, if one exists and decodes.
#[must_use]
pub fn load_game(store: &dyn Store) -> Option<GameState> {
    get_decoded(store, SAVE_KEY)
}

/// Drop any saved game.
pub fn clear_save(store: &mut dyn Store) {
    store.remove(SAVE_KEY);
}

/// Persist aggregate stats.
pub fn save_stats(store: &mut dyn Store, stats: &GameStats) {
    set_encoded(store, STATS_KEY, stats);
}

/// Read back stats, empty when absent or undecodable.
#[must_use]
pub fn load_stats(store: &dyn Store) -> GameStats {
    get_decoded(store, STATS_KEY).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::GameRng;
    use crate::core::settings::GameSettings;
    use crate::game::intent::Intent;
    use crate::game::record::GameRecord;
    use crate::game::reducer::reduce;

    fn started_game() -> GameState {
        let mut rng = GameRng::new(42);
        reduce(
            &GameState::default(),
            Intent::Init {
                settings: GameSettings::new(),
                now_ms: 1000,
            },
            &mut rng,
        )
    }

    #[test]
    fn test_game_roundtrip() {
        let mut store = MemoryStore::new();
        let state = started_game();

        save_game(&mut store, &state);
        assert_eq!(load_game(&store), Some(state));
    }

    #[test]
    fn test_completed_game_not_saved() {
        let mut store = MemoryStore::new();
        let state = GameState {
            is_complete: true,
            ..started_game()
        };

        save_game(&mut store, &state);
        assert_eq!(load_game(&store), None);
    }

    #[test]
    fn test_not_started_game_not_saved() {
        let mut store = MemoryStore::new();
        save_game(&mut store, &GameState::default());
        assert_eq!(load_game(&store), None);
    }

    #[test]
    fn test_clear_save() {
        let mut store = MemoryStore::new();
        save_game(&mut store, &started_game());
        clear_save(&mut store);
        assert_eq!(load_game(&store), None);

        // Clearing an empty store is fine
        clear_save(&mut store);
    }

    #[test]
    fn test_unencodable_value_writes_nothing() {
        struct Unencodable;

        impl Serialize for Unencodable {
            fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
                Err(serde::ser::Error::custom("unencodable"))
            }
        }

        let mut store = MemoryStore::new();
        set_encoded(&mut store, SAVE_KEY, &Unencodable);
        assert_eq!(store.get(SAVE_KEY), None);
    }

    #[test]
    fn test_corrupt_blob_reads_as_none() {
        let mut store = MemoryStore::new();
        store.set(SAVE_KEY, vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(load_game(&store), None);
    }

    #[test]
    fn test_stats_roundtrip_and_default() {
        let mut store = MemoryStore::new();
        assert_eq!(load_stats(&store), GameStats::default());

        let mut stats = GameStats::new();
        stats.record(GameRecord::from_game(
            &GameState {
                is_win: true,
                ..started_game()
            },
            "g1",
            5000,
        ));

        save_stats(&mut store, &stats);
        assert_eq!(load_stats(&store), stats);
    }
}
