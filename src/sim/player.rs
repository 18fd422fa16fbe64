//! Player controller
//!
//! The player runs one of three behaviors each tick, picked from the mode and
//! the loss latch:
//! - `FreeRoam`: four-way movement, diagonals scaled down, no gravity
//! - `Platforming`: walk, jump, fall, land on the platform, lose on the floor
//! - `Frozen`: platformer mode after a loss, nothing moves until retry

use serde::{Deserialize, Serialize};

use super::collision::aabb_intersect;
use super::state::{Facing, GameEvent, Mode, PLATFORM_RECT, Player};
use crate::consts::*;

/// Directional controls held this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Controls {
    fn horizontal(&self) -> bool {
        self.left || self.right
    }

    fn vertical(&self) -> bool {
        self.up || self.down
    }
}

/// Controller behavior for the current tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerPhase {
    FreeRoam,
    Platforming,
    Frozen,
}

impl PlayerPhase {
    pub fn of(mode: Mode, platform_loss: bool) -> Self {
        match (mode, platform_loss) {
            (Mode::FreeRoam, _) => PlayerPhase::FreeRoam,
            (Mode::Platformer, false) => PlayerPhase::Platforming,
            (Mode::Platformer, true) => PlayerPhase::Frozen,
        }
    }
}

/// Advance the player by one tick
///
/// Does not clamp to the screen; see `clamp_player`.
pub fn update_player(
    player: &mut Player,
    mode: Mode,
    platform_loss: &mut bool,
    controls: &Controls,
    events: &mut Vec<GameEvent>,
) {
    match PlayerPhase::of(mode, *platform_loss) {
        PlayerPhase::FreeRoam => {
            free_roam(player, controls);
            *platform_loss = false;
        }
        PlayerPhase::Platforming => platforming(player, platform_loss, controls, events),
        PlayerPhase::Frozen => {}
    }
}

fn free_roam(player: &mut Player, controls: &Controls) {
    let scale = if controls.horizontal() && controls.vertical() {
        DIAGONAL_SCALE
    } else {
        1.0
    };

    let mut move_x = 0;
    let mut move_y = 0;
    if controls.up {
        move_y -= PLAYER_VELOCITY;
    }
    if controls.down {
        move_y += PLAYER_VELOCITY;
    }
    walk(player, controls, &mut move_x);

    player.pos.x += (move_x as f32 * scale) as i32;
    player.pos.y += (move_y as f32 * scale) as i32;

    player.on_ground = false;
    player.vel_y = 0.0;
}

fn platforming(
    player: &mut Player,
    platform_loss: &mut bool,
    controls: &Controls,
    events: &mut Vec<GameEvent>,
) {
    let mut move_x = 0;
    walk(player, controls, &mut move_x);
    player.pos.x += move_x;

    // Jump first, then gravity, same tick
    if controls.up && player.on_ground {
        player.vel_y = JUMP_VELOCITY;
        player.on_ground = false;
        events.push(GameEvent::Jumped);
    }
    player.vel_y += PLATFORM_GRAVITY;
    player.pos.y += player.vel_y as i32;

    // Landing band: overlapping, but bottom no more than one step into the top.
    // Fast falls can skip the band entirely.
    if aabb_intersect(&player.rect(), &PLATFORM_RECT)
        && player.bottom() < PLATFORM_RECT.y + PLAYER_VELOCITY
    {
        if player.vel_y >= 0.0 {
            player.pos.y = PLATFORM_RECT.y - PLAYER_HEIGHT;
            player.vel_y = 0.0;
            player.on_ground = true;
        }
    } else if player.on_ground {
        // Walked off the edge. Resting exactly on top is edge-touching too,
        // so a standing player drops and re-lands every other tick.
        player.on_ground = false;
    }

    if player.bottom() >= SCREEN_HEIGHT {
        player.pos.y = SCREEN_HEIGHT - PLAYER_HEIGHT;
        player.vel_y = 0.0;
        player.on_ground = true;
        *platform_loss = true;
        events.push(GameEvent::Lost);
    }
}

/// Apply left/right steps to `move_x` and update facing (right wins ties)
fn walk(player: &mut Player, controls: &Controls, move_x: &mut i32) {
    if controls.left {
        *move_x -= PLAYER_VELOCITY;
        player.facing = Facing::Left;
    }
    if controls.right {
        *move_x += PLAYER_VELOCITY;
        player.facing = Facing::Right;
    }
}

/// Keep the player on screen
///
/// Horizontal bounds always apply; vertical bounds only in free-roam, since
/// the platformer relies on platform and floor collision instead.
pub fn clamp_player(player: &mut Player, mode: Mode) {
    player.pos.x = player.pos.x.clamp(0, SCREEN_WIDTH - PLAYER_WIDTH);
    if mode == Mode::FreeRoam {
        player.pos.y = player.pos.y.clamp(0, SCREEN_HEIGHT - PLAYER_HEIGHT);
    }
}
