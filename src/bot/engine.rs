//! The bot decision loop.
//!
//! The bot is a resource-consuming opponent abstraction, not a simulated
//! player: it holds no real tiles or board, only counters and a deadline.
//! [`tick`] is pure; the host dispatches it on a timer cadence with an
//! explicit `now`, and the reducer applies the returned action to the real
//! shared pool. Injecting synthetic `now` values (and a seeded RNG) drives
//! the whole loop deterministically in tests.

use serde::{Deserialize, Serialize};

use crate::bot::config::BotConfig;
use crate::core::rng::GameRng;

/// Virtual opponent state. Mutated only through [`tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotState {
    /// Tiles in the bot's virtual hand. No tile objects exist for these.
    pub hand_size: u32,
    /// Tiles the bot has "placed" so far.
    pub tiles_placed: u32,
    /// Terminal: the bot emptied its hand with the pool exhausted.
    pub is_finished: bool,
    /// Earliest time (ms since epoch) the bot acts again.
    pub next_action_at: u64,
}

/// Initial breathing room before the bot's first action.
const INITIAL_DELAY_MS: u64 = 2000;

impl BotState {
    /// Fresh bot with a starting hand, first action shortly after `now_ms`.
    #[must_use]
    pub fn new(hand_size: u32, now_ms: u64) -> Self {
        Self {
            hand_size,
            tiles_placed: 0,
            is_finished: false,
            next_action_at: now_ms + INITIAL_DELAY_MS,
        }
    }
}

/// What the bot decided to do on a tick.
///
/// The caller owns the real pool and applies the side effects: `Exchange`
/// debits one pool tile, `Peel` runs a shared peel (player gets a real
/// tile), `Finish` ends the game as a bot win.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BotAction {
    /// Not time yet, or already finished.
    None,
    /// Placed a tile from its virtual hand.
    Place,
    /// Traded one tile for two.
    Exchange,
    /// Emptied its hand and drew again.
    Peel,
    /// Emptied its hand with no pool left. Terminal.
    Finish,
}

/// Advance the bot by one tick.
///
/// No-op before `next_action_at` or once finished. Every real action
/// schedules the next one: a uniform tile delay, plus a pause with
/// `pause_chance` probability.
#[must_use]
pub fn tick(
    state: &BotState,
    config: &BotConfig,
    pool_size: usize,
    now_ms: u64,
    rng: &mut GameRng,
) -> (BotState, BotAction) {
    if state.is_finished || now_ms < state.next_action_at {
        return (*state, BotAction::None);
    }

    let mut delay = config.next_action_delay(rng);
    if config.should_pause(rng) {
        delay += config.pause_delay(rng);
    }
    let next_action_at = now_ms + delay as u64;

    // Empty hand: peel if the pool can cover both players, otherwise done.
    if state.hand_size == 0 {
        if pool_size >= 2 {
            return (
                BotState {
                    hand_size: 1,
                    next_action_at,
                    ..*state
                },
                BotAction::Peel,
            );
        }
        return (
            BotState {
                is_finished: true,
                next_action_at,
                ..*state
            },
            BotAction::Finish,
        );
    }

    // The exchange roll is drawn before the pool check so every non-empty
    // hand tick consumes the same number of random values, starved or not.
    if config.should_exchange(rng) && pool_size >= 2 {
        // Give up 1, draw 2: net hand +1, pool -1 (applied by the caller)
        return (
            BotState {
                hand_size: state.hand_size + 1,
                next_action_at,
                ..*state
            },
            BotAction::Exchange,
        );
    }

    (
        BotState {
            hand_size: state.hand_size - 1,
            tiles_placed: state.tiles_placed + 1,
            next_action_at,
            ..*state
        },
        BotAction::Place,
    )
}
