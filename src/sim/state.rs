//! Game state and core simulation types
//!
//! Everything the renderer reads and the tick mutates lives here. All types
//! are plain values; cloning a `GameState` clones the whole game.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;

/// One side of the field; also used to record who scored last
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Human player, right paddle
    Player,
    /// AI opponent, left paddle
    Ai,
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Intro screen, waiting for the first input
    Intro,
    /// Active gameplay
    Playing,
    /// A side reached the win score; simulation frozen until reset or quit
    GameOver,
}

/// A paddle, stored by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: IVec2,
}

impl Paddle {
    /// Player paddle start position (right side, vertically centered)
    pub fn player_start() -> Self {
        Self {
            pos: IVec2::new(
                SCREEN_WIDTH - PADDLE_OFFSET - PADDLE_WIDTH,
                SCREEN_HEIGHT / 2 - PADDLE_LENGTH / 2,
            ),
        }
    }

    /// AI paddle start position (left side, vertically centered)
    pub fn ai_start() -> Self {
        Self {
            pos: IVec2::new(PADDLE_OFFSET, SCREEN_HEIGHT / 2 - PADDLE_LENGTH / 2),
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_top_left(self.pos, PADDLE_WIDTH, PADDLE_LENGTH)
    }

    pub fn center_y(&self) -> i32 {
        self.pos.y + PADDLE_LENGTH / 2
    }

    /// Center the paddle vertically on a pointer position.
    ///
    /// Deliberately unclamped: the paddle follows the pointer even past the
    /// screen edges, matching the pointer itself.
    pub fn track_pointer(&mut self, y: i32) {
        self.pos.y = y - PADDLE_LENGTH / 2;
    }
}

/// The ball: a square moving one step per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner
    pub pos: IVec2,
    /// Unit direction, components in {-1, +1}
    pub dir: IVec2,
    /// Pixels per tick
    pub speed: i32,
}

impl Ball {
    /// Ball state at process start: center, initial direction and speed
    pub fn initial() -> Self {
        Self {
            pos: INITIAL_BALL_POS,
            dir: INITIAL_BALL_DIR,
            speed: BALL_START_SPEED,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_top_left(self.pos, BALL_SIDE, BALL_SIDE)
    }

    pub fn center_y(&self) -> i32 {
        self.pos.y + BALL_SIDE / 2
    }

    /// Serve after a goal: back to center at initial speed, heading toward
    /// the side that conceded. Idempotent in `last_scorer`.
    pub fn reset(&mut self, last_scorer: Side) {
        self.pos = INITIAL_BALL_POS;
        self.speed = BALL_START_SPEED;
        self.dir = match last_scorer {
            Side::Player => IVec2::new(-INITIAL_BALL_DIR.x, INITIAL_BALL_DIR.y),
            Side::Ai => INITIAL_BALL_DIR,
        };
    }
}

/// Score counters for both sides
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub ai: u32,
}

impl Score {
    pub fn record(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Ai => self.ai += 1,
        }
    }

    /// First side at the win score, if any
    pub fn winner(&self) -> Option<Side> {
        if self.player >= WIN_SCORE {
            Some(Side::Player)
        } else if self.ai >= WIN_SCORE {
            Some(Side::Ai)
        } else {
            None
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub player_paddle: Paddle,
    pub ai_paddle: Paddle,
    pub ball: Ball,
    pub score: Score,
    pub last_scorer: Side,
    /// Set when a non-reset key is pressed on the game-over screen; the
    /// host loop is expected to exit. The core never exits the process.
    pub quit_requested: bool,
}

impl GameState {
    /// Fresh game on the intro screen
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Intro,
            player_paddle: Paddle::player_start(),
            ai_paddle: Paddle::ai_start(),
            ball: Ball::initial(),
            score: Score::default(),
            last_scorer: Side::Player,
            quit_requested: false,
        }
    }

    /// Full reset from the game-over screen: all mutable state back to
    /// initial values, straight into active play
    pub fn reset_round(&mut self) {
        *self = Self::new();
        self.phase = GamePhase::Playing;
        log::info!("game reset");
    }

    /// Read-only per-frame view for the renderer collaborator
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            player_paddle: self.player_paddle.pos,
            ai_paddle: self.ai_paddle.pos,
            ball: self.ball.pos,
            player_score: self.score.player,
            ai_score: self.score.ai,
            phase: self.phase,
            last_scorer: self.last_scorer,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// What the renderer needs to draw one frame; no feedback channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub player_paddle: IVec2,
    pub ai_paddle: IVec2,
    pub ball: IVec2,
    pub player_score: u32,
    pub ai_score: u32,
    pub phase: GamePhase,
    pub last_scorer: Side,
}
