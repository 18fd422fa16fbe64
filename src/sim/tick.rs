//! Fixed-step simulation tick
//!
//! Advances the world by one frame. Clicks are applied first, then the player
//! moves, then the ball reacts to the moved player, then scoring runs against
//! the same player box.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::ball::update_ball;
use super::collision::{Rect, aabb_intersect};
use super::player::{Controls, clamp_player, update_player};
use super::state::{GameEvent, Mode, RETRY_BUTTON_RECT, TOGGLE_BUTTON_RECT, WorldState};
use super::target::update_target;
use crate::consts::*;

/// Input for a single tick (deterministic)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickInput {
    /// Directional controls currently held
    pub controls: Controls,
    /// Pointer position
    pub cursor: IVec2,
    /// Left button held at the end of the frame
    pub mouse_down: bool,
    /// Left-button presses since the last tick, oldest first
    pub clicks: Vec<IVec2>,
}

impl Default for TickInput {
    fn default() -> Self {
        Self {
            controls: Controls::default(),
            cursor: IVec2::new(SCREEN_WIDTH / 2, SCREEN_HEIGHT / 2),
            mouse_down: false,
            clicks: Vec::new(),
        }
    }
}

/// Advance the world by one tick, returning what happened
pub fn update_state(state: &mut WorldState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    for &click in &input.clicks {
        apply_click(state, click, &mut events);
    }

    state.cursor.pos = input.cursor;
    state.cursor.mouse_down = input.mouse_down;
    if !input.mouse_down && state.ball.grabbed {
        state.ball.grabbed = false;
        events.push(GameEvent::BallReleased);
    }

    update_player(
        &mut state.player,
        state.mode,
        &mut state.platform_loss,
        &input.controls,
        &mut events,
    );
    clamp_player(&mut state.player, state.mode);

    let player_box = state.player.rect();
    update_ball(
        &mut state.ball,
        &player_box,
        state.cursor.pos,
        state.platform_loss,
    );

    update_target(
        &mut state.target,
        &player_box,
        &mut state.score,
        &mut state.rng_state,
        &mut events,
    );

    state.time_ticks += 1;

    for event in &events {
        log::debug!("tick {}: {:?}", state.time_ticks, event);
    }
    events
}

/// Handle one left-button press: gravity toggle, then retry, then grab
pub fn apply_click(state: &mut WorldState, click: IVec2, events: &mut Vec<GameEvent>) {
    state.cursor.mouse_down = true;

    // Toggle is locked while lost; the player has to retry first
    if !state.platform_loss && TOGGLE_BUTTON_RECT.contains_point(click) {
        state.mode = state.mode.toggled();
        state.platform_loss = false;
        state
            .player
            .place(IVec2::new(PLAYER_START_X, PLAYER_START_Y));
        if state.mode == Mode::FreeRoam && !state.ball.grabbed {
            state.ball.vel.y = 0.0;
        }
        events.push(GameEvent::ModeChanged(state.mode));
        log::info!("Mode switched to {:?}", state.mode);
    }

    if state.platform_loss && RETRY_BUTTON_RECT.contains_point(click) {
        state.platform_loss = false;
        state
            .player
            .place(IVec2::new(RETRY_START_X, RETRY_START_Y));
        events.push(GameEvent::Retried);
        log::info!("Retry");
    }

    if !state.platform_loss && aabb_intersect(&state.ball.rect(), &Rect::at(click, 1, 1)) {
        if !state.ball.grabbed {
            events.push(GameEvent::BallGrabbed);
        }
        state.ball.grabbed = true;
        state.ball.vel = Vec2::ZERO;
    }
}
