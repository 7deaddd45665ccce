//! Pong Core - a two-paddle arcade game with a headless simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (collision, ball physics, AI, game state)
//!
//! The simulation is pure and single-threaded: a renderer/windowing host
//! feeds [`sim::InputEvent`]s into [`sim::tick`] once per frame and draws
//! from the read-only [`sim::Snapshot`]. No toolkit is required to run or
//! test the core.

pub mod sim;

pub use sim::{GamePhase, GameState, InputEvent, Side, Snapshot, tick};

/// Game configuration constants (pixel units, origin top-left, y down)
pub mod consts {
    use glam::IVec2;

    /// Playfield dimensions
    pub const SCREEN_WIDTH: i32 = 1920;
    pub const SCREEN_HEIGHT: i32 = 1080;

    /// Horizontal distance from a screen edge to its paddle
    pub const PADDLE_OFFSET: i32 = 120;
    pub const PADDLE_WIDTH: i32 = 40;
    pub const PADDLE_LENGTH: i32 = 200;

    /// Ball defaults - the ball is an axis-aligned square
    pub const BALL_SIDE: i32 = 30;
    /// Initial ball speed (pixels per tick)
    pub const BALL_START_SPEED: i32 = 30;
    pub const INITIAL_BALL_POS: IVec2 = IVec2::new(SCREEN_WIDTH / 2, SCREEN_HEIGHT / 2);
    pub const INITIAL_BALL_DIR: IVec2 = IVec2::new(1, 1);

    /// AI paddle speed (pixels per tick)
    pub const AI_PADDLE_SPEED: i32 = 5;
    /// Tracking tolerance before the AI paddle moves (prevents jitter)
    pub const AI_DEAD_ZONE: i32 = 30;

    /// First side to reach this score wins
    pub const WIN_SCORE: u32 = 9;

    /// Inset from every screen edge that counts as a wall
    pub const WALL_THICKNESS: i32 = 20;

    /// Goal window: vertical band the ball must fully occupy to score
    pub const GOAL_CENTER_Y: i32 = SCREEN_HEIGHT / 2;
    pub const GOAL_HEIGHT: i32 = SCREEN_HEIGHT / 3;

    /// Key that restarts the game from the game-over screen
    pub const RESET_KEY: u8 = b'r';
}
