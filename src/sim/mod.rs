//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only (speeds are per tick)
//! - Seeded RNG only
//! - One `WorldState`, mutated only through `update_state`
//! - No rendering or platform dependencies

pub mod ball;
pub mod collision;
pub mod player;
pub mod snapshot;
pub mod state;
pub mod target;
pub mod tick;

pub use ball::update_ball;
pub use collision::{Rect, aabb_intersect};
pub use player::{Controls, PlayerPhase, clamp_player, update_player};
pub use snapshot::{ButtonView, FrameSnapshot, PlatformView};
pub use state::{
    Ball, Cursor, Facing, GameEvent, Mode, Player, RngState, Target, WorldState, PLATFORM_RECT,
    RETRY_BUTTON_RECT, TOGGLE_BUTTON_RECT,
};
pub use target::{relocate_target, update_target};
pub use tick::{TickInput, apply_click, update_state};
