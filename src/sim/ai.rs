//! Reactive AI paddle policy
//!
//! The opponent only tracks the ball vertically, and only while the ball is
//! on its half of the field. No prediction, no smoothing, fixed speed.

use super::state::{Ball, Paddle};
use crate::consts::{AI_DEAD_ZONE, AI_PADDLE_SPEED, BALL_SIDE, SCREEN_WIDTH};

/// Move the AI paddle one step toward the ball.
///
/// Holds position inside the dead zone so the paddle does not oscillate
/// around the ball center.
pub fn update_ai(paddle: &mut Paddle, ball: &Ball) {
    // Only react while the ball's trailing edge is on the AI half
    if ball.pos.x + BALL_SIDE > SCREEN_WIDTH / 2 {
        return;
    }

    let distance = ball.center_y() - paddle.center_y();
    if distance > AI_DEAD_ZONE {
        paddle.pos.y += AI_PADDLE_SPEED;
    } else if distance < -AI_DEAD_ZONE {
        paddle.pos.y -= AI_PADDLE_SPEED;
    }
}
