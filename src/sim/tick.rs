//! Per-frame simulation tick
//!
//! Advances the game by one frame: pending input events first, then the
//! ball step, the AI paddle, and the win check. Pure and synchronous; the
//! host loop calls this once per rendered frame.

use log::info;

use super::ai::update_ai;
use super::input::{InputEvent, apply_event};
use super::state::{GamePhase, GameState, Side};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, WALL_THICKNESS};

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, events: &[InputEvent]) {
    for &event in events {
        apply_event(state, event);
    }

    // Intro and game-over screens freeze the simulation
    if state.phase != GamePhase::Playing {
        return;
    }

    update_ball(state);
    update_ai(&mut state.ai_paddle, &state.ball);

    if let Some(winner) = state.score.winner() {
        info!(
            "game over, {winner:?} wins {} - {}",
            state.score.player, state.score.ai
        );
        state.phase = GamePhase::GameOver;
    }
}

/// One ball step: paddle bounce, wall bounce, goal check, then advance
fn update_ball(state: &mut GameState) {
    debug_assert!(
        state.ball.dir.x.abs() == 1 && state.ball.dir.y.abs() == 1,
        "ball direction components must be unit"
    );

    let ball = state.ball.aabb();

    // Paddle bounce inverts the horizontal direction once per tick, even
    // if both paddles overlap on the same tick
    if ball.overlaps(&state.player_paddle.aabb()) || ball.overlaps(&state.ai_paddle.aabb()) {
        state.ball.dir.x = -state.ball.dir.x;
    }

    // Wall bounce. The vertical axis clamps back to the inset; the
    // horizontal axis does not, so the goal check below still sees the
    // crossing position.
    let past_ceiling = state.ball.pos.y <= WALL_THICKNESS;
    let past_floor = state.ball.pos.y >= SCREEN_HEIGHT - WALL_THICKNESS;
    let past_left = state.ball.pos.x <= WALL_THICKNESS;
    let past_right = state.ball.pos.x >= SCREEN_WIDTH - WALL_THICKNESS;

    if past_ceiling || past_floor {
        state.ball.dir.y = -state.ball.dir.y;
    }
    if past_left || past_right {
        state.ball.dir.x = -state.ball.dir.x;
    }
    if past_ceiling {
        state.ball.pos.y = WALL_THICKNESS;
    }
    if past_floor {
        state.ball.pos.y = SCREEN_HEIGHT - WALL_THICKNESS;
    }

    // A wall crossing inside the goal band is a point: the left wall
    // concedes to the AI, the right wall to the player. A scoring tick
    // serves instead of advancing.
    if ball.in_goal_window() && past_left {
        score_point(state, Side::Ai);
    } else if ball.in_goal_window() && past_right {
        score_point(state, Side::Player);
    } else {
        state.ball.pos += state.ball.dir * state.ball.speed;
    }
}

fn score_point(state: &mut GameState, scorer: Side) {
    state.score.record(scorer);
    state.last_scorer = scorer;
    info!(
        "{scorer:?} scores, {} - {}",
        state.score.player, state.score.ai
    );
    state.ball.reset(scorer);
}
