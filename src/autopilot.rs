//! Autopilot - scripted input so the demo can play itself
//!
//! Steers the player toward the target's center in free-roam mode and flips
//! gravity on a fixed schedule. Both platformer entry points (mode start and
//! retry spawn) drop the player past the platform, so in platformer mode it
//! holds still until the fall is lost, then presses retry and the toggle in
//! the same tick to get back to free roam.

use crate::consts::*;
use crate::sim::{Controls, Mode, RETRY_BUTTON_RECT, TOGGLE_BUTTON_RECT, TickInput, WorldState};

/// Input source that plays the game
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Ticks between gravity toggles (0 = never)
    mode_switch_interval: u64,
    ticks: u64,
}

impl Autopilot {
    pub fn new(mode_switch_interval: u64) -> Self {
        Self {
            mode_switch_interval,
            ticks: 0,
        }
    }

    /// Decide this tick's input from the current world
    pub fn next_input(&mut self, state: &WorldState) -> TickInput {
        self.ticks += 1;

        let mut input = TickInput {
            cursor: state.cursor.pos,
            ..Default::default()
        };

        // Retry first: the toggle is locked while lost
        if state.platform_loss {
            input.clicks.push(RETRY_BUTTON_RECT.center());
            input.clicks.push(TOGGLE_BUTTON_RECT.center());
            return input;
        }

        if self.mode_switch_interval > 0 && self.ticks.is_multiple_of(self.mode_switch_interval) {
            input.clicks.push(TOGGLE_BUTTON_RECT.center());
        }

        if state.mode == Mode::FreeRoam {
            input.controls = Self::steer_free_roam(state);
        }
        input
    }

    fn steer_free_roam(state: &WorldState) -> Controls {
        let delta = state.target.rect().center() - state.player.rect().center();
        Controls {
            up: delta.y < -PLAYER_VELOCITY,
            down: delta.y > PLAYER_VELOCITY,
            left: delta.x < -PLAYER_VELOCITY,
            right: delta.x > PLAYER_VELOCITY,
        }
    }
}
