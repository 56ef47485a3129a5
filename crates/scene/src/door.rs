//! The swinging door.

use glam::Vec3;

use crate::props::palette;
use crate::tween::Tween;

/// Hinged door that toggles between a closed and an open yaw.
///
/// Pressing interact starts a swing from the current rotation toward the
/// other endpoint. "Closed" means the rotation sits exactly on the closed
/// angle; a press that lands mid-swing therefore reads the door as not
/// closed and swings it back shut from wherever it got to.
#[derive(Debug, Clone)]
pub struct Door {
    /// Center position in world space.
    pub position: Vec3,

    rotation_y: f32,
    swing: Option<Tween>,
}

impl Door {
    /// Yaw while closed (degrees).
    pub const CLOSED_ANGLE: f32 = 45.0;

    /// Yaw while open (degrees).
    pub const OPEN_ANGLE: f32 = 135.0;

    /// Seconds a full swing takes.
    pub const SWING_SECONDS: f32 = 0.4;

    /// Extents of the door leaf, thin along its local X.
    pub const SCALE: Vec3 = Vec3::new(0.2, 3.0, 2.0);

    /// Base color of the leaf (RGB, 0-1).
    pub const COLOR: Vec3 = palette::BROWN;

    /// Create a closed door at `position`.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            rotation_y: Self::CLOSED_ANGLE,
            swing: None,
        }
    }

    /// Current yaw in degrees.
    #[inline]
    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    /// True when the rotation sits exactly on the closed angle.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.rotation_y == Self::CLOSED_ANGLE
    }

    /// True while a swing is in progress.
    #[inline]
    pub fn is_swinging(&self) -> bool {
        self.swing.is_some()
    }

    /// Start swinging toward the other endpoint.
    pub fn toggle(&mut self) {
        let target = if self.is_closed() {
            Self::OPEN_ANGLE
        } else {
            Self::CLOSED_ANGLE
        };
        log::debug!("door swings from {} to {}", self.rotation_y, target);
        self.swing = Some(Tween::new(self.rotation_y, target, Self::SWING_SECONDS));
    }

    /// Advance the swing, if any, by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        if let Some(swing) = &mut self.swing {
            self.rotation_y = swing.advance(dt);
            if swing.finished() {
                self.swing = None;
            }
        }
    }
}
