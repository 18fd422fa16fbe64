//! Beachball - a free-roam / platformer sandbox
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player, ball physics, scoring, game state)
//! - `settings`: Run-loop configuration loaded from JSON
//! - `autopilot`: Scripted input source for headless play

pub mod autopilot;
pub mod settings;
pub mod sim;

pub use autopilot::Autopilot;
pub use settings::Settings;

/// Game configuration constants
///
/// Speeds and accelerations are per tick, tuned for `TICK_DELAY_MS`.
/// Changing the tick rate changes effective gravity and speed.
pub mod consts {
    /// Screen dimensions
    pub const SCREEN_WIDTH: i32 = 640;
    pub const SCREEN_HEIGHT: i32 = 480;

    /// Delay between ticks (milliseconds)
    pub const TICK_DELAY_MS: u64 = 10;

    /// Player defaults
    pub const PLAYER_WIDTH: i32 = 64;
    pub const PLAYER_HEIGHT: i32 = 64;
    /// Horizontal step per tick, also the platform landing tolerance
    pub const PLAYER_VELOCITY: i32 = 4;
    pub const PLAYER_START_X: i32 = 50;
    pub const PLAYER_START_Y: i32 = 150;
    /// Scale applied to both axes when moving diagonally in free-roam (~1/√2)
    pub const DIAGONAL_SCALE: f32 = 0.707;

    /// Target defaults
    pub const TARGET_WIDTH: i32 = 100;
    pub const TARGET_HEIGHT: i32 = 100;
    pub const TARGET_START_X: i32 = SCREEN_WIDTH - 150;
    pub const TARGET_START_Y: i32 = SCREEN_HEIGHT - 150;

    /// Beachball defaults
    pub const BALL_WIDTH: i32 = 24;
    pub const BALL_HEIGHT: i32 = 25;
    pub const BALL_START_X: f32 = 300.0;
    pub const BALL_START_Y: f32 = 50.0;
    pub const BALL_START_VEL_X: f32 = 3.0;
    /// Velocity retained (and inverted) on every bounce
    pub const BOUNCE_FACTOR: f32 = 0.8;

    /// Platform, centered horizontally, 50px above the floor
    pub const PLATFORM_WIDTH: i32 = 406;
    pub const PLATFORM_HEIGHT: i32 = 317;
    pub const PLATFORM_X: i32 = (SCREEN_WIDTH - PLATFORM_WIDTH) / 2;
    pub const PLATFORM_Y: i32 = SCREEN_HEIGHT - PLATFORM_HEIGHT - 50;

    /// Gravity and jumping (pixels/tick, pixels/tick²)
    pub const JUMP_VELOCITY: f32 = -12.0;
    pub const PLATFORM_GRAVITY: f32 = 0.8;
    pub const FREE_ROAM_GRAVITY: f32 = 0.5;

    /// Buttons, anchored to the top-right corner
    pub const BUTTON_MARGIN: i32 = 10;
    pub const TOGGLE_BUTTON_WIDTH: i32 = 96;
    pub const TOGGLE_BUTTON_HEIGHT: i32 = 53;
    pub const TOGGLE_BUTTON_X: i32 = SCREEN_WIDTH - TOGGLE_BUTTON_WIDTH - BUTTON_MARGIN;
    pub const TOGGLE_BUTTON_Y: i32 = BUTTON_MARGIN;
    pub const RETRY_BUTTON_WIDTH: i32 = 87;
    pub const RETRY_BUTTON_HEIGHT: i32 = 45;
    pub const RETRY_BUTTON_X: i32 = TOGGLE_BUTTON_X - RETRY_BUTTON_WIDTH - BUTTON_MARGIN;
    pub const RETRY_BUTTON_Y: i32 = TOGGLE_BUTTON_Y;

    /// Where retry puts the player: centered on the platform, 10px above it
    pub const RETRY_START_X: i32 = PLATFORM_X + PLATFORM_WIDTH / 2 - PLAYER_WIDTH / 2;
    pub const RETRY_START_Y: i32 = PLATFORM_Y - PLAYER_HEIGHT - 10;
}
