//! Game configuration.
//!
//! Settings are chosen before `Init` and immutable for the lifetime of a
//! game. The enums pin the supported pool/hand sizes; the engine itself only
//! ever asks for `tile_count()`, so adding a size is a one-line change.

use serde::{Deserialize, Serialize};

/// Number of tiles in the shared pool at game start.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoolSize {
    /// 50 tiles, a quick game.
    Small,
    /// 72 tiles, the default.
    #[default]
    Standard,
    /// 100 tiles, a long game.
    Large,
}

impl PoolSize {
    /// Number of tiles this pool size represents.
    #[must_use]
    pub const fn tile_count(self) -> usize {
        match self {
            PoolSize::Small => 50,
            PoolSize::Standard => 72,
            PoolSize::Large => 100,
        }
    }
}

/// Number of tiles drawn into the hand at game start.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandSize {
    /// 11 tiles.
    Small,
    /// 15 tiles, the default.
    #[default]
    Standard,
    /// 21 tiles.
    Large,
}

impl HandSize {
    /// Number of tiles this hand size represents.
    #[must_use]
    pub const fn tile_count(self) -> usize {
        match self {
            HandSize::Small => 11,
            HandSize::Standard => 15,
            HandSize::Large => 21,
        }
    }
}

/// Letter-mix difficulty. Skews the base distribution, not the rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// More vowels and common consonants; Z may be absent entirely.
    Easy,
    #[default]
    Standard,
    /// Fewer vowels, more uncommon letters.
    Hard,
}

impl Difficulty {
    /// Lowercase name, used in stats keys and records.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Standard => "standard",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Optional countdown timer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerMode {
    /// Count up only, no limit.
    #[default]
    None,
    /// Countdown of the given number of minutes (5/10/15/30 in the UI).
    Minutes(u32),
}

impl TimerMode {
    /// Countdown duration in milliseconds, if a countdown is set.
    #[must_use]
    pub const fn duration_ms(self) -> Option<u64> {
        match self {
            TimerMode::None => None,
            TimerMode::Minutes(m) => Some(m as u64 * 60 * 1000),
        }
    }
}

/// Solo play or racing a simulated opponent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    Solo,
    Bot,
}

/// Bot opponent skill level. Harder bots act faster and dither less.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BotDifficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Which side of the screen the hand docks to. Cosmetic only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandOrientation {
    Left,
    #[default]
    Right,
}

/// Complete per-game configuration, fixed before `Init`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    pub pool_size: PoolSize,
    pub hand_size: HandSize,
    pub difficulty: Difficulty,
    pub timer_mode: TimerMode,
    pub show_timer: bool,
    pub game_mode: GameMode,
    /// Only meaningful when `game_mode` is [`GameMode::Bot`].
    pub bot_difficulty: Option<BotDifficulty>,
    pub hand_orientation: HandOrientation,
}

impl GameSettings {
    /// Settings with the standard defaults: 72-tile pool, 15-tile hand,
    /// standard mix, no countdown, timer shown, solo.
    #[must_use]
    pub fn new() -> Self {
        Self {
            show_timer: true,
            ..Self::default()
        }
    }

    /// Set the pool size.
    #[must_use]
    pub fn with_pool_size(mut self, pool_size: PoolSize) -> Self {
        self.pool_size = pool_size;
        self
    }

    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: HandSize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Set the letter-mix difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the countdown timer mode.
    #[must_use]
    pub fn with_timer_mode(mut self, timer_mode: TimerMode) -> Self {
        self.timer_mode = timer_mode;
        self
    }

    /// Switch to bot mode with the given opponent difficulty.
    #[must_use]
    pub fn with_bot(mut self, difficulty: BotDifficulty) -> Self {
        self.game_mode = GameMode::Bot;
        self.bot_difficulty = Some(difficulty);
        self
    }

    /// Bot opponent difficulty, defaulting to medium when unset.
    #[must_use]
    pub fn bot_difficulty_or_default(&self) -> BotDifficulty {
        self.bot_difficulty.unwrap_or_default()
    }
}
