//! Game state and core simulation types
//!
//! One `WorldState` holds everything the tick touches. It is created once,
//! mutated once per tick, and reset actions reassign its fields in place.

use glam::{IVec2, Vec2};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// Which way the player sprite faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

/// Movement mode, switched with the gravity toggle button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Top-down movement, no gravity
    #[default]
    FreeRoam,
    /// Side view with gravity, jumping and the floor-loss condition
    Platformer,
}

impl Mode {
    pub fn gravity_on(self) -> bool {
        self == Mode::Platformer
    }

    pub fn toggled(self) -> Self {
        match self {
            Mode::FreeRoam => Mode::Platformer,
            Mode::Platformer => Mode::FreeRoam,
        }
    }
}

/// The controllable sprite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner, whole pixels
    pub pos: IVec2,
    /// Vertical velocity (platformer mode only)
    pub vel_y: f32,
    pub facing: Facing,
    pub on_ground: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: IVec2::new(PLAYER_START_X, PLAYER_START_Y),
            vel_y: 0.0,
            facing: Facing::Right,
            on_ground: false,
        }
    }
}

impl Player {
    pub fn rect(&self) -> Rect {
        Rect::at(self.pos, PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + PLAYER_HEIGHT
    }

    /// Move to `pos` with vertical motion cleared
    pub fn place(&mut self, pos: IVec2) {
        self.pos = pos;
        self.vel_y = 0.0;
        self.on_ground = false;
    }
}

/// The beachball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner, sub-pixel
    pub pos: Vec2,
    pub vel: Vec2,
    /// Following the cursor instead of physics
    pub grabbed: bool,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: Vec2::new(BALL_START_X, BALL_START_Y),
            vel: Vec2::new(BALL_START_VEL_X, 0.0),
            grabbed: false,
        }
    }
}

impl Ball {
    /// Collision box (position truncated to whole pixels)
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x as i32, self.pos.y as i32, BALL_WIDTH, BALL_HEIGHT)
    }
}

/// The scoring target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub pos: IVec2,
    /// Player overlap on the previous tick (edge detection only)
    pub colliding: bool,
}

impl Default for Target {
    fn default() -> Self {
        Self {
            pos: IVec2::new(TARGET_START_X, TARGET_START_Y),
            colliding: false,
        }
    }
}

impl Target {
    pub fn rect(&self) -> Rect {
        Rect::at(self.pos, TARGET_WIDTH, TARGET_HEIGHT)
    }
}

/// Mouse state as last reported by the input layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cursor {
    pub pos: IVec2,
    pub mouse_down: bool,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            pos: IVec2::new(SCREEN_WIDTH / 2, SCREEN_HEIGHT / 2),
            mouse_down: false,
        }
    }
}

/// Something that happened during a tick, for outer layers (logging, audio)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player touched the target; carries the new score
    Scored(u64),
    Jumped,
    /// Player reached the floor in platformer mode
    Lost,
    ModeChanged(Mode),
    Retried,
    BallGrabbed,
    BallReleased,
}

/// RNG state wrapper for serialization
///
/// Each draw opens PCG stream `draws` of `seed`, so the state stays plain
/// data and replays identically. Neighbouring seeds never share a stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub draws: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, draws: 0 }
    }

    pub fn next_rng(&mut self) -> Pcg32 {
        let rng = Pcg32::new(self.seed, self.draws);
        self.draws += 1;
        rng
    }
}

/// Complete world state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng_state: RngState,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    pub ball: Ball,
    pub target: Target,
    pub mode: Mode,
    /// Latched when the player hits the floor in platformer mode
    pub platform_loss: bool,
    pub score: u64,
    pub cursor: Cursor,
}

impl WorldState {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng_state: RngState::new(seed),
            time_ticks: 0,
            player: Player::default(),
            ball: Ball::default(),
            target: Target::default(),
            mode: Mode::FreeRoam,
            platform_loss: false,
            score: 0,
            cursor: Cursor::default(),
        }
    }
}

/// The single static platform (platformer mode)
pub const PLATFORM_RECT: Rect = Rect::new(PLATFORM_X, PLATFORM_Y, PLATFORM_WIDTH, PLATFORM_HEIGHT);
/// Gravity toggle button
pub const TOGGLE_BUTTON_RECT: Rect = Rect::new(
    TOGGLE_BUTTON_X,
    TOGGLE_BUTTON_Y,
    TOGGLE_BUTTON_WIDTH,
    TOGGLE_BUTTON_HEIGHT,
);
/// Retry button, only live while the loss state is latched
pub const RETRY_BUTTON_RECT: Rect = Rect::new(
    RETRY_BUTTON_X,
    RETRY_BUTTON_Y,
    RETRY_BUTTON_WIDTH,
    RETRY_BUTTON_HEIGHT,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = WorldState::new(7);
        assert_eq!(state.player.pos, IVec2::new(50, 150));
        assert_eq!(state.player.facing, Facing::Right);
        assert_eq!(state.ball.pos, Vec2::new(300.0, 50.0));
        assert_eq!(state.ball.vel, Vec2::new(3.0, 0.0));
        assert_eq!(state.target.pos, IVec2::new(490, 330));
        assert_eq!(state.mode, Mode::FreeRoam);
        assert!(!state.platform_loss);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_layout_constants() {
        assert_eq!(PLATFORM_RECT, Rect::new(117, 113, 406, 317));
        assert_eq!(TOGGLE_BUTTON_RECT, Rect::new(534, 10, 96, 53));
        assert_eq!(RETRY_BUTTON_RECT, Rect::new(437, 10, 87, 45));
        assert_eq!((RETRY_START_X, RETRY_START_Y), (288, 39));
    }

    #[test]
    fn test_mode_toggle() {
        assert_eq!(Mode::FreeRoam.toggled(), Mode::Platformer);
        assert_eq!(Mode::Platformer.toggled(), Mode::FreeRoam);
        assert!(Mode::Platformer.gravity_on());
        assert!(!Mode::FreeRoam.gravity_on());
    }

    #[test]
    fn test_rng_state_replays() {
        use rand::Rng;

        let mut a = RngState::new(42);
        let mut b = RngState::new(42);
        let xa: u32 = a.next_rng().random();
        let xb: u32 = b.next_rng().random();
        assert_eq!(xa, xb);
        assert_eq!(a.draws, 1);
    }

    #[test]
    fn test_neighbouring_seeds_do_not_share_draws() {
        use rand::Rng;

        let mut a = RngState::new(5);
        let mut b = RngState::new(6);
        let _ = a.next_rng();
        let xa: u64 = a.next_rng().random();
        let xb: u64 = b.next_rng().random();
        assert_ne!(xa, xb);
    }

    #[test]
    fn test_state_serializes() {
        let state = WorldState::new(1);
        let json = serde_json::to_string(&state).expect("serialize");
        let back: WorldState = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.player.pos, state.player.pos);
        assert_eq!(back.mode, state.mode);
    }
}
