//! Game-end records and aggregate stats.
//!
//! When a game ends the engine emits a [`GameRecord`]; the stats collector
//! folds it into [`GameStats`]. The record shape is a host contract: stats
//! UIs consume it as-is.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::settings::{Difficulty, PoolSize, TimerMode};
use crate::game::state::GameState;

/// Summary of one finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Host-assigned unique id.
    pub id: String,
    /// Completion date, ms since epoch.
    pub date: u64,
    pub duration_ms: u64,
    pub difficulty: Difficulty,
    pub pool_size: PoolSize,
    pub timer_mode: TimerMode,
    pub is_win: bool,
    /// Tiles the player had on the board at game end.
    pub tiles_placed: u32,
}

impl GameRecord {
    /// Build the record for a finished game.
    #[must_use]
    pub fn from_game(state: &GameState, id: impl Into<String>, date_ms: u64) -> Self {
        Self {
            id: id.into(),
            date: date_ms,
            duration_ms: state.elapsed_ms,
            difficulty: state.settings.difficulty,
            pool_size: state.settings.pool_size,
            timer_mode: state.settings.timer_mode,
            is_win: state.is_win,
            tiles_placed: state.board.len() as u32,
        }
    }

    /// Stats key for best-time tracking, e.g. `"easy-50"`.
    #[must_use]
    pub fn mode_key(&self) -> String {
        format!("{}-{}", self.difficulty.name(), self.pool_size.tile_count())
    }
}

/// Aggregate statistics over all recorded games.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub total_games: u32,
    pub total_wins: u32,
    pub current_streak: u32,
    pub best_streak: u32,
    /// Fastest winning duration per mode key (see [`GameRecord::mode_key`]).
    pub best_times: FxHashMap<String, u64>,
    pub records: Vec<GameRecord>,
}

impl GameStats {
    /// Empty stats.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one finished game into the aggregates.
    ///
    /// Wins extend the streak and may set a mode best time; losses reset the
    /// streak. The record itself is always appended.
    pub fn record(&mut self, record: GameRecord) {
        self.total_games += 1;

        if record.is_win {
            self.total_wins += 1;
            self.current_streak += 1;
            self.best_streak = self.best_streak.max(self.current_streak);

            let key = record.mode_key();
            let best = self.best_times.entry(key).or_insert(record.duration_ms);
            *best = (*best).min(record.duration_ms);
        } else {
            self.current_streak = 0;
        }

        self.records.push(record);
    }

    /// Fraction of games won, 0 when none played.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.total_wins as f64 / self.total_games as f64
        }
    }

    /// Mean game duration, 0 when none played.
    #[must_use]
    pub fn average_duration_ms(&self) -> u64 {
        if self.records.is_empty() {
            return 0;
        }
        let total: u64 = self.records.iter().map(|r| r.duration_ms).sum();
        total / self.records.len() as u64
    }

    /// Records dated at or after `since_ms`.
    pub fn recent(&self, since_ms: u64) -> impl Iterator<Item = &GameRecord> {
        self.records.iter().filter(move |r| r.date >= since_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(is_win: bool, duration_ms: u64, date: u64) -> GameRecord {
        GameRecord {
            id: format!("game-{date}"),
            date,
            duration_ms,
            difficulty: Difficulty::Easy,
            pool_size: PoolSize::Small,
            timer_mode: TimerMode::None,
            is_win,
            tiles_placed: 50,
        }
    }

    #[test]
    fn test_mode_key() {
        assert_eq!(record(true, 1000, 0).mode_key(), "easy-50");
    }

    #[test]
    fn test_streak_bookkeeping() {
        let mut stats = GameStats::new();
        stats.record(record(true, 1000, 1));
        stats.record(record(true, 900, 2));
        stats.record(record(false, 2000, 3));
        stats.record(record(true, 800, 4));

        assert_eq!(stats.total_games, 4);
        assert_eq!(stats.total_wins, 3);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.best_streak, 2);
    }

    #[test]
    fn test_best_time_only_improves() {
        let mut stats = GameStats::new();
        stats.record(record(true, 1000, 1));
        stats.record(record(true, 1500, 2));
        stats.record(record(true, 700, 3));
        // Losses never touch best times
        stats.record(record(false, 10, 4));

        assert_eq!(stats.best_times.get("easy-50"), Some(&700));
    }

    #[test]
    fn test_rates_and_averages() {
        let mut stats = GameStats::new();
        assert_eq!(stats.win_rate(), 0.0);
        assert_eq!(stats.average_duration_ms(), 0);

        stats.record(record(true, 1000, 1));
        stats.record(record(false, 3000, 2));

        assert_eq!(stats.win_rate(), 0.5);
        assert_eq!(stats.average_duration_ms(), 2000);
    }

    #[test]
    fn test_recent_filters_by_date() {
        let mut stats = GameStats::new();
        stats.record(record(true, 1000, 100));
        stats.record(record(true, 1000, 200));
        stats.record(record(true, 1000, 300));

        let recent: Vec<_> = stats.recent(200).collect();
        assert_eq!(recent.len(), 2);
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut stats = GameStats::new();
        stats.record(record(true, 1000, 1));

        let json = serde_json::to_string(&stats).unwrap();
        let back: GameStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stats);
    }
}
