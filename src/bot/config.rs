//! Bot timing and probability parameters.
//!
//! Each difficulty tunes how fast the bot acts and how often it dithers.
//! Harder bots act faster and waste fewer turns on exchanges. The numbers
//! were tuned by feel; changing them changes perceived difficulty, not
//! correctness.

use serde::{Deserialize, Serialize};

use crate::core::rng::GameRng;
use crate::core::settings::BotDifficulty;

/// Timing/probability parameters driving the bot's decision loop.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BotConfig {
    /// Minimum delay between actions, ms.
    pub min_tile_delay_ms: f64,
    /// Maximum delay between actions, ms.
    pub max_tile_delay_ms: f64,
    /// Probability of exchanging instead of placing, 0–1.
    pub exchange_chance: f64,
    /// Probability of adding a pause after an action, 0–1.
    pub pause_chance: f64,
    /// Minimum extra pause, ms.
    pub min_pause_delay_ms: f64,
    /// Maximum extra pause, ms.
    pub max_pause_delay_ms: f64,
}

const EASY: BotConfig = BotConfig {
    min_tile_delay_ms: 3000.0,
    max_tile_delay_ms: 5000.0,
    exchange_chance: 0.2,
    pause_chance: 0.25,
    min_pause_delay_ms: 2000.0,
    max_pause_delay_ms: 5000.0,
};

const MEDIUM: BotConfig = BotConfig {
    min_tile_delay_ms: 1500.0,
    max_tile_delay_ms: 3000.0,
    exchange_chance: 0.1,
    pause_chance: 0.12,
    min_pause_delay_ms: 1000.0,
    max_pause_delay_ms: 3000.0,
};

const HARD: BotConfig = BotConfig {
    min_tile_delay_ms: 800.0,
    max_tile_delay_ms: 1500.0,
    exchange_chance: 0.05,
    pause_chance: 0.05,
    min_pause_delay_ms: 500.0,
    max_pause_delay_ms: 1500.0,
};

impl BotConfig {
    /// Parameters for a bot difficulty.
    #[must_use]
    pub const fn for_difficulty(difficulty: BotDifficulty) -> Self {
        match difficulty {
            BotDifficulty::Easy => EASY,
            BotDifficulty::Medium => MEDIUM,
            BotDifficulty::Hard => HARD,
        }
    }

    /// Draw the delay before the bot's next action, in ms.
    pub fn next_action_delay(&self, rng: &mut GameRng) -> f64 {
        rng.range_f64(self.min_tile_delay_ms, self.max_tile_delay_ms)
    }

    /// Draw an extra pause delay, in ms.
    pub fn pause_delay(&self, rng: &mut GameRng) -> f64 {
        rng.range_f64(self.min_pause_delay_ms, self.max_pause_delay_ms)
    }

    /// Whether the bot exchanges instead of placing this action.
    pub fn should_exchange(&self, rng: &mut GameRng) -> bool {
        rng.gen_bool(self.exchange_chance)
    }

    /// Whether the bot pauses after this action.
    pub fn should_pause(&self, rng: &mut GameRng) -> bool {
        rng.gen_bool(self.pause_chance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harder_is_faster() {
        let easy = BotConfig::for_difficulty(BotDifficulty::Easy);
        let medium = BotConfig::for_difficulty(BotDifficulty::Medium);
        let hard = BotConfig::for_difficulty(BotDifficulty::Hard);

        assert!(easy.max_tile_delay_ms > medium.max_tile_delay_ms);
        assert!(medium.max_tile_delay_ms > hard.max_tile_delay_ms);
        assert!(easy.exchange_chance > medium.exchange_chance);
        assert!(medium.exchange_chance > hard.exchange_chance);
        assert!(easy.pause_chance > hard.pause_chance);
    }

    #[test]
    fn test_delay_within_bounds() {
        let config = BotConfig::for_difficulty(BotDifficulty::Medium);
        let mut rng = GameRng::new(42);

        for _ in 0..100 {
            let delay = config.next_action_delay(&mut rng);
            assert!(delay >= config.min_tile_delay_ms);
            assert!(delay < config.max_tile_delay_ms);

            let pause = config.pause_delay(&mut rng);
            assert!(pause >= config.min_pause_delay_ms);
            assert!(pause < config.max_pause_delay_ms);
        }
    }
}
