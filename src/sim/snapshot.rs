//! Read-only view of the world for the renderer
//!
//! Captured after each tick. Holds everything needed to draw a frame,
//! including which button and platform skin are showing.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::state::{Facing, Mode, PLATFORM_RECT, RETRY_BUTTON_RECT, TOGGLE_BUTTON_RECT, WorldState};

/// Which button sits in the top-right corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonView {
    /// Gravity toggle, showing the current mode
    Toggle { gravity_on: bool, rect: Rect },
    /// Retry, only while the loss state is latched
    Retry { rect: Rect },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformView {
    pub rect: Rect,
    /// Draw the "lose" skin
    pub lost: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub player: Rect,
    pub facing: Facing,
    /// Sub-pixel ball position; draw at the truncated `ball` rect
    pub ball_pos: Vec2,
    pub ball: Rect,
    pub target: Rect,
    /// Only present in platformer mode
    pub platform: Option<PlatformView>,
    pub button: ButtonView,
    pub mode: Mode,
    pub platform_loss: bool,
    pub score: u64,
    pub cursor: IVec2,
    /// Draw the pressed cursor skin
    pub cursor_pressed: bool,
}

impl FrameSnapshot {
    pub fn capture(state: &WorldState) -> Self {
        let platform = (state.mode == Mode::Platformer).then_some(PlatformView {
            rect: PLATFORM_RECT,
            lost: state.platform_loss,
        });

        let button = if state.platform_loss {
            ButtonView::Retry {
                rect: RETRY_BUTTON_RECT,
            }
        } else {
            ButtonView::Toggle {
                gravity_on: state.mode.gravity_on(),
                rect: TOGGLE_BUTTON_RECT,
            }
        };

        Self {
            tick: state.time_ticks,
            player: state.player.rect(),
            facing: state.player.facing,
            ball_pos: state.ball.pos,
            ball: state.ball.rect(),
            target: state.target.rect(),
            platform,
            button,
            mode: state.mode,
            platform_loss: state.platform_loss,
            score: state.score,
            cursor: state.cursor.pos,
            cursor_pressed: state.cursor.mouse_down,
        }
    }

    /// One-line summary for logs
    pub fn summary(&self) -> String {
        format!(
            "tick={} mode={:?} score={} player=({},{}) ball=({:.1},{:.1}) target=({},{}){}",
            self.tick,
            self.mode,
            self.score,
            self.player.x,
            self.player.y,
            self.ball_pos.x,
            self.ball_pos.y,
            self.target.x,
            self.target.y,
            if self.platform_loss { " LOST" } else { "" },
        )
    }
}
