//! Player input for a single frame.
//!
//! The demo is headless, so "input" is whatever the driver scripted for
//! the frame: held key state, the mouse delta, and any one-shot presses
//! that fired. Held state converts to a controller command here; presses
//! are dispatched by the scene before the frame update.

use glam::Vec2;
use greybox_controller::PlayerCommand;

/// A one-shot key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Press {
    /// Space: ground jump, or the mid-air jump.
    Jump,
    /// F: forward dash.
    Dash,
    /// E: toggle the door when near it.
    Interact,
    /// Escape: capture or release the cursor.
    ToggleMouseLock,
}

/// Movement key states.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementKeys {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

/// Raw player input for a single frame.
#[derive(Debug, Clone, Default)]
pub struct PlayerInput {
    /// Movement keys held.
    pub movement: MovementKeys,

    /// Run key held.
    pub run: bool,

    /// Crouch key held.
    pub crouch: bool,

    /// Aim key held.
    pub zoom: bool,

    /// Mouse delta this frame.
    pub mouse_delta: Vec2,

    /// Presses that fired this frame, in order.
    pub presses: Vec<Press>,
}

impl PlayerInput {
    /// Convert the held state to a controller command.
    ///
    /// Opposite keys cancel out. The axes are left unnormalized; the
    /// controller normalizes the combined world direction. `mouse_locked`
    /// is scene state rather than input, so the scene passes it through.
    pub fn to_command(&self, mouse_locked: bool) -> PlayerCommand {
        let mut cmd = PlayerCommand::default();

        if self.movement.forward {
            cmd.forward_move += 1.0;
        }
        if self.movement.backward {
            cmd.forward_move -= 1.0;
        }
        if self.movement.right {
            cmd.strafe_move += 1.0;
        }
        if self.movement.left {
            cmd.strafe_move -= 1.0;
        }

        cmd.run = self.run;
        cmd.crouch = self.crouch;
        cmd.zoom = self.zoom;
        cmd.look_delta = self.mouse_delta;
        cmd.mouse_locked = mouse_locked;

        cmd
    }

    /// Check if any movement key is held.
    pub fn has_movement(&self) -> bool {
        self.movement.forward || self.movement.backward || self.movement.left || self.movement.right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axes_map_to_command() {
        let mut input = PlayerInput::default();
        input.movement.forward = true;
        input.movement.right = true;

        let cmd = input.to_command(true);
        assert_eq!(cmd.forward_move, 1.0);
        assert_eq!(cmd.strafe_move, 1.0);
        assert!(input.has_movement());
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut input = PlayerInput::default();
        input.movement.forward = true;
        input.movement.backward = true;
        input.movement.left = true;
        input.movement.right = true;

        let cmd = input.to_command(true);
        assert_eq!(cmd.forward_move, 0.0);
        assert_eq!(cmd.strafe_move, 0.0);
        // The keys are still held even though they cancel
        assert!(input.has_movement());
    }

    #[test]
    fn test_held_keys_pass_through() {
        let mut input = PlayerInput::default();
        input.run = true;
        input.zoom = true;
        input.mouse_delta = Vec2::new(0.25, -0.5);

        let cmd = input.to_command(false);
        assert!(cmd.run);
        assert!(!cmd.crouch);
        assert!(cmd.zoom);
        assert_eq!(cmd.look_delta, Vec2::new(0.25, -0.5));
        assert!(!cmd.mouse_locked);
    }
}
