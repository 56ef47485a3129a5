//! Player state and per-frame input structures.

use glam::{Vec2, Vec3};

use super::config::ControllerConfig;

/// Complete mutable state of the player.
///
/// This contains everything the controller reads or writes per frame:
/// position and vertical velocity, view angles, the smoothed camera pivot
/// and FOV, and the jump/dash bookkeeping flags. Angles are in degrees.
#[derive(Debug, Clone)]
pub struct PlayerState {
    /// Position in world space (feet). The ground plane is y = 0.
    pub position: Vec3,

    /// Vertical velocity (units/second). Positive is up.
    pub velocity_y: f32,

    /// Heading in degrees. 0 faces +X, 90 faces +Z. Not wrapped.
    pub yaw: f32,

    /// Camera pitch in degrees, clamped to the controller's limit.
    pub pitch: f32,

    /// Camera pivot height above the feet (units).
    /// Eases between the standing and crouching heights.
    pub pivot_height: f32,

    /// Camera field of view (degrees). Eases between rest and zoom.
    pub fov: f32,

    /// Ground speed resolved this frame (units/second).
    pub speed: f32,

    /// Ground jump available.
    pub can_jump: bool,

    /// Mid-air jump still unspent.
    pub double_jump_available: bool,

    /// Dash may start.
    pub boost_available: bool,

    /// Seconds of dash cooldown remaining. Never negative.
    pub boost_timer: f32,

    /// Current dash carry speed (units/second). Decays toward zero.
    pub boost_speed: f32,

    /// Horizontal direction captured when the dash started.
    pub boost_direction: Vec3,

    /// Wallet shown on the HUD. Nothing in the scene spends it yet.
    pub balance: i32,
}

impl PlayerState {
    /// Starting wallet for a fresh player.
    pub const STARTING_BALANCE: i32 = 50;

    /// Create a freshly spawned player standing at `position`.
    pub fn new(position: Vec3, config: &ControllerConfig) -> Self {
        Self {
            position,
            velocity_y: 0.0,
            yaw: 0.0,
            pitch: 0.0,
            pivot_height: config.stand_height,
            fov: config.rest_fov,
            speed: config.walk_speed,
            can_jump: true,
            double_jump_available: true,
            boost_available: true,
            boost_timer: 0.0,
            boost_speed: 0.0,
            boost_direction: Vec3::ZERO,
            balance: Self::STARTING_BALANCE,
        }
    }

    /// Horizontal forward direction for the current yaw.
    pub fn forward_direction(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.to_radians().sin_cos();
        Vec3::new(cos_yaw, 0.0, sin_yaw)
    }

    /// Horizontal right direction for the current yaw.
    pub fn right_direction(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.to_radians().sin_cos();
        Vec3::new(-sin_yaw, 0.0, cos_yaw)
    }

    /// Check if the player is on the ground plane.
    #[inline]
    pub fn grounded(&self) -> bool {
        self.position.y <= 0.0
    }
}

/// Held input for a single frame.
///
/// This represents the sampled key and mouse state, not events. One-shot
/// presses (jump, dash, interact) are dispatched separately, before the
/// frame update.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerCommand {
    /// Forward/backward movement (-1.0 to 1.0).
    /// Positive = forward, negative = backward.
    pub forward_move: f32,

    /// Strafe left/right (-1.0 to 1.0).
    /// Positive = right, negative = left.
    pub strafe_move: f32,

    /// Run key held.
    pub run: bool,

    /// Crouch key held.
    pub crouch: bool,

    /// Aim key held (narrows the FOV).
    pub zoom: bool,

    /// Mouse movement this frame.
    pub look_delta: Vec2,

    /// Cursor is captured. Look input is ignored while released.
    pub mouse_locked: bool,
}

impl PlayerCommand {
    /// Check if any movement input is active.
    #[inline]
    pub fn has_movement_input(&self) -> bool {
        self.forward_move.abs() > 0.01 || self.strafe_move.abs() > 0.01
    }
}
