//! Controller tuning constants.
//!
//! All tuning for the first-person controller is grouped here. Linear
//! quantities are in world units and seconds, angles in degrees. The
//! defaults are the demo scene's tuning; a scene config file can override
//! any subset of them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Configuration for the first-person controller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    // ========================================================================
    // Ground Speeds
    // ========================================================================
    /// Walking speed (units/second).
    pub walk_speed: f32,

    /// Running speed while the run key is held (units/second).
    pub run_speed: f32,

    /// Crouching speed (units/second). Crouch wins over run.
    pub crouch_speed: f32,

    // ========================================================================
    // Camera Pivot
    // ========================================================================
    /// Pivot height above the feet while standing (units).
    pub stand_height: f32,

    /// Pivot height above the feet while crouched (units).
    pub crouch_height: f32,

    /// Per-second interpolation rate of the pivot toward its target.
    pub pivot_rate: f32,

    // ========================================================================
    // Jumping and Gravity
    // ========================================================================
    /// Upward velocity applied by a ground jump (units/second).
    pub jump_force: f32,

    /// Fraction of `jump_force` applied by the mid-air jump.
    pub double_jump_factor: f32,

    /// Downward acceleration (units/second²).
    pub gravity: f32,

    // ========================================================================
    // Dash
    // ========================================================================
    /// Horizontal speed at the instant a dash starts (units/second).
    pub dash_speed: f32,

    /// Per-second interpolation rate of the dash speed toward zero.
    pub dash_decay: f32,

    /// Seconds before another dash may start.
    pub dash_cooldown: f32,

    // ========================================================================
    // Camera
    // ========================================================================
    /// Mouse sensitivity, degrees per unit of mouse delta per second.
    pub mouse_sensitivity: Vec2,

    /// Field of view while aiming (degrees).
    pub zoom_fov: f32,

    /// Field of view at rest (degrees).
    pub rest_fov: f32,

    /// Per-second interpolation rate of the FOV toward its target.
    pub zoom_rate: f32,

    // ========================================================================
    // Interaction
    // ========================================================================
    /// Radius of the door interaction zone (units).
    pub interact_radius: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            // Ground speeds
            walk_speed: 5.0,
            run_speed: 12.0,
            crouch_speed: 3.0,

            // Camera pivot
            stand_height: 2.0,
            crouch_height: 1.0,
            pivot_rate: 5.0,

            // Jumping and gravity
            jump_force: 15.0,
            double_jump_factor: 0.8, // mid-air jump launches at 12.0
            gravity: 35.0,           // heavy on purpose, jumps feel snappy

            // Dash
            dash_speed: 20.0,
            dash_decay: 4.0,
            dash_cooldown: 1.0,

            // Camera
            mouse_sensitivity: Vec2::new(300.0, 300.0),
            zoom_fov: 30.0,
            rest_fov: 90.0,
            zoom_rate: 5.0,

            // Interaction
            interact_radius: 3.0,
        }
    }
}

impl ControllerConfig {
    /// Ground speed for the keys held this frame.
    pub fn ground_speed(&self, running: bool, crouching: bool) -> f32 {
        if crouching {
            self.crouch_speed
        } else if running {
            self.run_speed
        } else {
            self.walk_speed
        }
    }

    /// Camera pivot target height for the current stance.
    pub fn pivot_target(&self, crouching: bool) -> f32 {
        if crouching {
            self.crouch_height
        } else {
            self.stand_height
        }
    }

    /// Upward velocity for the mid-air jump.
    pub fn double_jump_force(&self) -> f32 {
        self.jump_force * self.double_jump_factor
    }
}
