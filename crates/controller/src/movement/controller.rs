//! First-person controller update.
//!
//! This is the main entry point for player movement. Held input arrives as
//! a [`PlayerCommand`] once per frame; one-shot presses (jump, dash) are
//! dispatched through `press_*` methods before the frame update, the same
//! order input events reach a frame loop.

use crate::math::lerp;

use super::config::ControllerConfig;
use super::state::{PlayerCommand, PlayerState};

/// First-person player controller.
///
/// Owns the tuning config and advances a [`PlayerState`] one frame at a
/// time. The controller itself is immutable during play, so one instance
/// can drive any number of players.
///
/// # Example
///
/// ```ignore
/// let controller = PlayerController::new(ControllerConfig::default());
/// let mut state = PlayerState::new(spawn_position, controller.config());
///
/// // Each frame:
/// controller.press_jump(&mut state); // if the key went down this frame
/// controller.update(&mut state, &command, delta_time);
/// ```
#[derive(Debug, Clone)]
pub struct PlayerController {
    /// Controller configuration.
    pub config: ControllerConfig,
}

impl PlayerController {
    /// Create a new controller with the given configuration.
    pub fn new(config: ControllerConfig) -> Self {
        Self { config }
    }

    /// Create a controller with default configuration.
    pub fn with_default_config() -> Self {
        Self::new(ControllerConfig::default())
    }

    /// Borrow the tuning configuration.
    #[inline]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Update the player for one frame.
    ///
    /// Phases run in a fixed order every frame:
    ///
    /// 1. Speed and stance (crouch wins over run, pivot eases)
    /// 2. Horizontal movement from the input axes
    /// 3. Dash carry and decay
    /// 4. Mouse look (only while the cursor is locked)
    /// 5. Vertical physics and landing
    /// 6. Dash cooldown
    /// 7. FOV zoom
    ///
    /// `delta_time` is taken as-is; smoothing rates are multiplied by it,
    /// so very long frames overshoot rather than subdivide.
    pub fn update(&self, state: &mut PlayerState, command: &PlayerCommand, delta_time: f32) {
        self.update_stance(state, command, delta_time);
        self.apply_movement(state, command, delta_time);
        self.apply_dash(state, delta_time);
        self.apply_look(state, command, delta_time);
        self.apply_gravity(state, delta_time);
        self.tick_dash_cooldown(state, delta_time);
        self.update_zoom(state, command, delta_time);
    }

    // ========================================================================
    // One-Shot Presses
    // ========================================================================

    /// Jump key went down.
    ///
    /// On the ground this launches at full force. Airborne with the mid-air
    /// jump unspent it launches at the reduced force. Any further press is
    /// ignored until landing restores both. The flags are only reset by
    /// touching the ground, so a player spawned airborne can still spend
    /// them on the way down.
    pub fn press_jump(&self, state: &mut PlayerState) {
        if state.can_jump {
            state.velocity_y = self.config.jump_force;
            state.can_jump = false;
            log::debug!("jump: velocity_y={}", state.velocity_y);
        } else if state.double_jump_available {
            state.velocity_y = self.config.double_jump_force();
            state.double_jump_available = false;
            log::debug!("double jump: velocity_y={}", state.velocity_y);
        }
    }

    /// Dash key went down. Ignored while the cooldown runs.
    ///
    /// The carry direction is captured once from the current heading;
    /// turning mid-dash does not steer it.
    pub fn press_dash(&self, state: &mut PlayerState) {
        if !state.boost_available {
            return;
        }
        state.boost_speed = self.config.dash_speed;
        state.boost_direction = state.forward_direction();
        state.boost_available = false;
        state.boost_timer = self.config.dash_cooldown;
        log::debug!("dash: direction={:?}", state.boost_direction);
    }

    // ========================================================================
    // Speed and Stance
    // ========================================================================

    fn update_stance(&self, state: &mut PlayerState, command: &PlayerCommand, delta_time: f32) {
        state.speed = self.config.ground_speed(command.run, command.crouch);

        let target = self.config.pivot_target(command.crouch);
        state.pivot_height = lerp(state.pivot_height, target, self.config.pivot_rate * delta_time);
    }

    // ========================================================================
    // Horizontal Movement
    // ========================================================================

    fn apply_movement(&self, state: &mut PlayerState, command: &PlayerCommand, delta_time: f32) {
        let wish = state.forward_direction() * command.forward_move
            + state.right_direction() * command.strafe_move;

        // Normalized, so diagonals are no faster than straight lines
        if let Some(direction) = wish.try_normalize() {
            state.position += direction * state.speed * delta_time;
        }
    }

    fn apply_dash(&self, state: &mut PlayerState, delta_time: f32) {
        if state.boost_speed > 0.0 {
            state.position += state.boost_direction * state.boost_speed * delta_time;
            state.boost_speed = lerp(state.boost_speed, 0.0, self.config.dash_decay * delta_time);
        }
    }

    // ========================================================================
    // Mouse Look
    // ========================================================================

    fn apply_look(&self, state: &mut PlayerState, command: &PlayerCommand, delta_time: f32) {
        if !command.mouse_locked {
            return;
        }

        state.yaw += command.look_delta.x * self.config.mouse_sensitivity.x * delta_time;
        state.pitch -= command.look_delta.y * self.config.mouse_sensitivity.y * delta_time;

        // Clamp pitch to prevent looking beyond vertical
        const PITCH_LIMIT: f32 = 90.0;
        state.pitch = state.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    // ========================================================================
    // Vertical Physics
    // ========================================================================

    fn apply_gravity(&self, state: &mut PlayerState, delta_time: f32) {
        state.velocity_y -= self.config.gravity * delta_time;
        state.position.y += state.velocity_y * delta_time;

        // Landing on the ground plane restores both jumps
        if state.position.y <= 0.0 {
            state.position.y = 0.0;
            state.velocity_y = 0.0;
            if !state.can_jump {
                log::debug!("landed");
            }
            state.can_jump = true;
            state.double_jump_available = true;
        }
    }

    // ========================================================================
    // Dash Cooldown
    // ========================================================================

    fn tick_dash_cooldown(&self, state: &mut PlayerState, delta_time: f32) {
        if state.boost_timer > 0.0 {
            state.boost_timer = (state.boost_timer - delta_time).max(0.0);
        } else if !state.boost_available {
            state.boost_available = true;
            log::debug!("dash ready");
        }
    }

    // ========================================================================
    // Zoom
    // ========================================================================

    fn update_zoom(&self, state: &mut PlayerState, command: &PlayerCommand, delta_time: f32) {
        let target = if command.zoom {
            self.config.zoom_fov
        } else {
            self.config.rest_fov
        };
        state.fov = lerp(state.fov, target, self.config.zoom_rate * delta_time);
    }
}

// ============================================================================
// Tests
// ============================================================================
