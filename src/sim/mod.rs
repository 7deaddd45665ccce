//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per rendered frame, integer pixel units
//! - Single-threaded: all mutation flows through `&mut GameState`
//! - No rendering or platform dependencies

pub mod ai;
pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use ai::update_ai;
pub use collision::Aabb;
pub use input::{InputEvent, apply_event};
pub use state::{Ball, GamePhase, GameState, Paddle, Score, Side, Snapshot};
pub use tick::tick;
