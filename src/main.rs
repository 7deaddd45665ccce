//! Pong Core entry point
//!
//! Headless demo driver: runs the simulation without a renderer. A scripted
//! pointer stands in for the human player by tracking the ball, the AI
//! plays itself, and the final snapshot is printed as JSON.

use log::info;

use pong_core::consts::BALL_SIDE;
use pong_core::sim::{GamePhase, GameState, InputEvent, tick};

/// Safety cap so a stalemate rally cannot run forever
const MAX_FRAMES: u32 = 100_000;

fn main() {
    env_logger::init();
    info!("pong-core headless demo starting");

    let mut state = GameState::new();
    let mut frames = 0u32;

    while state.phase != GamePhase::GameOver && frames < MAX_FRAMES {
        // Scripted stand-in for the human: tracks the ball with a fixed
        // lag, so it misses and points get scored on both sides
        let pointer_y = state.ball.pos.y + BALL_SIDE / 2 + 120;
        tick(&mut state, &[InputEvent::PointerMoved { y: pointer_y }]);
        frames += 1;
    }

    info!(
        "finished after {frames} frames: player {} - ai {}",
        state.score.player, state.score.ai
    );

    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("failed to serialize snapshot: {err}"),
    }
}
