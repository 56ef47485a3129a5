//! HUD text state.
//!
//! Plain data a renderer would draw every frame. Positions are in a
//! normalized screen space (roughly -0.5..0.5 from center, x widened by
//! aspect); nothing here depends on an actual window.

use glam::{Vec2, Vec3};

use crate::props::palette;

/// Help text listing the demo controls.
pub const CONTROLS_TEXT: &str = "\
[W,A,S,D] - Move
[Shift] - Run
[Control] - Crouch
[Space] - Jump
[Space x2] - Double jump
[F] - Dash forward
[RMB] - Aim
[Escape] - Toggle cursor
[E] - Interact";

/// Text shown while the player stands in the door's interaction zone.
pub const DOOR_HINT_TEXT: &str = "[E] Open/Close";

/// A single HUD text element.
#[derive(Debug, Clone)]
pub struct TextWidget {
    pub text: String,

    /// Screen-space position.
    pub position: Vec2,

    /// Text color (RGB, 0-1).
    pub color: Vec3,

    pub scale: f32,

    /// Hidden widgets keep their text but are not drawn.
    pub enabled: bool,
}

/// All HUD state for the demo scene.
#[derive(Debug, Clone)]
pub struct Hud {
    /// Static controls help, top left.
    pub controls: TextWidget,

    /// Wallet readout, top right.
    pub balance: TextWidget,

    /// Door hint, bottom left. Enabled only near the door.
    pub door_hint: TextWidget,
}

impl Hud {
    /// Build the HUD with the starting wallet.
    pub fn new(balance: i32) -> Self {
        Self {
            controls: TextWidget {
                text: CONTROLS_TEXT.to_string(),
                position: Vec2::new(-0.85, 0.4),
                color: palette::WHITE,
                scale: 1.2,
                enabled: true,
            },
            balance: TextWidget {
                text: format!("${}", balance),
                position: Vec2::new(0.75, 0.45),
                color: palette::GREEN,
                scale: 2.0,
                enabled: true,
            },
            door_hint: TextWidget {
                text: DOOR_HINT_TEXT.to_string(),
                position: Vec2::new(-0.85, -0.4),
                color: palette::WHITE,
                scale: 1.2,
                enabled: false,
            },
        }
    }

    /// Refresh the wallet readout.
    pub fn set_balance(&mut self, balance: i32) {
        self.balance.text = format!("${}", balance);
    }

    /// Show or hide the door hint.
    pub fn set_door_hint(&mut self, visible: bool) {
        self.door_hint.enabled = visible;
    }
}
