//! The state-transition function.
//!
//! `reduce` is the single authority over [`GameState`]: `(state, intent) ->
//! state`, synchronous and atomic per dispatch, with all randomness drawn
//! from the injected RNG. There is no hidden mutation and no error path;
//! every malformed intent returns the state unchanged, so replaying a
//! scripted intent sequence against a seeded RNG reproduces a game exactly.

use crate::bot::config::BotConfig;
use crate::bot::engine::{self, BotAction, BotState};
use crate::core::position::Pos;
use crate::core::rng::GameRng;
use crate::core::settings::{GameMode, GameSettings};
use crate::core::tile::TileId;
use crate::game::intent::Intent;
use crate::game::state::GameState;
use crate::tiles::pool::TilePool;

/// Apply one intent, producing the next state.
#[must_use]
pub fn reduce(state: &GameState, intent: Intent, rng: &mut GameRng) -> GameState {
    match intent {
        Intent::Init { settings, now_ms } => init(settings, now_ms, rng),
        Intent::Restore(snapshot) => *snapshot,
        Intent::PlaceTile { tile, pos } => place_tile(state, tile, pos),
        Intent::ReturnTile { tile } => return_tile(state, tile),
        Intent::MoveTile { tile, pos } => move_tile(state, tile, pos),
        Intent::ExchangeTile { tile } => exchange_tile(state, tile, rng),
        Intent::Peel => peel(state, rng),
        Intent::Tick { elapsed_ms } => GameState {
            elapsed_ms,
            ..state.clone()
        },
        Intent::EndGame { is_win } => GameState {
            is_complete: true,
            is_win,
            ..state.clone()
        },
        Intent::BotTick { now_ms } => bot_tick(state, now_ms, rng),
        Intent::MarkInvalid(tiles) => GameState {
            invalid_tiles: Some(tiles),
            ..state.clone()
        },
        Intent::ClearInvalid => GameState {
            invalid_tiles: None,
            ..state.clone()
        },
    }
}

fn init(settings: GameSettings, now_ms: u64, rng: &mut GameRng) -> GameState {
    let mut pool = TilePool::generate(
        settings.pool_size.tile_count(),
        settings.difficulty,
        rng,
    );
    let hand = pool.draw(settings.hand_size.tile_count(), rng);

    // Bot mode: the bot's starting hand comes out of the same pool, but only
    // as a count; the tiles themselves are dropped.
    let bot = if settings.game_mode == GameMode::Bot {
        let bot_hand = pool.draw(settings.hand_size.tile_count(), rng);
        Some(BotState::new(bot_hand.len() as u32, now_ms))
    } else {
        None
    };

    GameState {
        hand,
        pool,
        started_at: now_ms,
        settings,
        bot,
        ..GameState::default()
    }
}

fn place_tile(state: &GameState, id: TileId, pos: Pos) -> GameState {
    if !state.hand_contains(id) || state.board.is_occupied(pos) {
        return state.clone();
    }

    let mut next = state.clone();
    let tile = next.take_from_hand(id).expect("membership checked");
    next.board.place(pos, tile);
    next.invalid_tiles = None;
    next
}

fn return_tile(state: &GameState, id: TileId) -> GameState {
    let Some(pos) = state.board.find_tile(id) else {
        return state.clone();
    };

    let mut next = state.clone();
    let tile = next.board.remove(pos).expect("position from find_tile");
    next.hand.push(tile);
    next.invalid_tiles = None;
    next
}

fn move_tile(state: &GameState, id: TileId, pos: Pos) -> GameState {
    let Some(from) = state.board.find_tile(id) else {
        return state.clone();
    };

    let mut next = state.clone();
    if !next.board.relocate(from, pos) {
        return state.clone();
    }
    next.invalid_tiles = None;
    next
}

fn exchange_tile(state: &GameState, id: TileId, rng: &mut GameRng) -> GameState {
    let mut next = state.clone();

    // The tile may sit in the hand or on the board
    let tile = match next.take_from_hand(id) {
        Some(tile) => tile,
        None => match next.board.find_tile(id) {
            Some(pos) => next.board.remove(pos).expect("position from find_tile"),
            None => return state.clone(),
        },
    };

    // Discard the whole attempt if the pool can't cover the trade
    let Some((first, second)) = next.pool.exchange(tile, rng) else {
        return state.clone();
    };

    next.hand.push(first);
    next.hand.push(second);
    next.invalid_tiles = None;
    next
}

fn peel(state: &GameState, rng: &mut GameRng) -> GameState {
    if state.is_bot_mode() {
        if !state.can_shared_peel() {
            return state.clone();
        }
        let mut next = state.clone();
        let Some(tile) = next.pool.shared_peel(rng) else {
            return state.clone();
        };
        next.hand.push(tile);
        if let Some(bot) = next.bot.as_mut() {
            bot.hand_size += 1;
        }
        return next;
    }

    if !state.can_peel() {
        return state.clone();
    }
    let mut next = state.clone();
    let drawn = next.pool.draw(1, rng);
    next.hand.extend(drawn);
    next
}

fn bot_tick(state: &GameState, now_ms: u64, rng: &mut GameRng) -> GameState {
    let Some(bot) = state.bot else {
        return state.clone();
    };
    if state.is_complete {
        return state.clone();
    }

    let config = BotConfig::for_difficulty(state.settings.bot_difficulty_or_default());
    let (new_bot, action) = engine::tick(&bot, &config, state.pool.len(), now_ms, rng);

    match action {
        BotAction::None => state.clone(),

        BotAction::Place => GameState {
            bot: Some(new_bot),
            ..state.clone()
        },

        BotAction::Exchange => {
            // The bot's drawn tiles are virtual; the pool only owes the net
            // one tile.
            let mut next = state.clone();
            if next.pool.take_one().is_none() {
                return state.clone();
            }
            next.bot = Some(new_bot);
            next
        }

        BotAction::Peel => {
            // Shared peel initiated by the bot: the player gets a real tile
            let mut next = state.clone();
            let Some(tile) = next.pool.shared_peel(rng) else {
                return state.clone();
            };
            next.hand.push(tile);
            next.bot = Some(new_bot);
            next
        }

        BotAction::Finish => GameState {
            is_complete: true,
            is_win: false,
            bot: Some(new_bot),
            ..state.clone()
        },
    }
}
