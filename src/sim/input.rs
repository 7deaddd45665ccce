//! Input events and their effect on game state
//!
//! The windowing host delivers pointer and key events between frames; they
//! are folded into the state here, before the simulation step runs.

use log::{debug, info};

use super::state::{GamePhase, GameState};
use crate::consts::RESET_KEY;

/// Events produced by the windowing host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Pointer moved to a new vertical position (pixels)
    PointerMoved { y: i32 },
    /// A key was pressed (ASCII code)
    KeyPressed { code: u8 },
}

/// Apply one input event to the state.
///
/// The first event of any kind leaves the intro screen. The pointer always
/// drives the player paddle. Keys only matter on the game-over screen:
/// the reset key starts a fresh game, any other key asks the host to quit.
pub fn apply_event(state: &mut GameState, event: InputEvent) {
    if state.phase == GamePhase::Intro {
        info!("first input received, starting play");
        state.phase = GamePhase::Playing;
    }

    match event {
        InputEvent::PointerMoved { y } => {
            state.player_paddle.track_pointer(y);
        }
        InputEvent::KeyPressed { code } => {
            if state.phase == GamePhase::GameOver {
                if code == RESET_KEY {
                    state.reset_round();
                } else {
                    debug!("non-reset key {code:#04x} on game-over screen");
                    state.quit_requested = true;
                }
            }
        }
    }
}
