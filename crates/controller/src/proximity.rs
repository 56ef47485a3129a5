//! Edge-triggered proximity sensing.
//!
//! The interaction hint should flip exactly once when the player crosses
//! the boundary, not every frame they stand inside it. The sensor keeps
//! the in-range flag from last frame and reports only the crossings.

use glam::Vec3;

/// A boundary crossing reported by [`ProximitySensor::observe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProximityEvent {
    /// The player came within range this frame.
    Entered,
    /// The player left the range this frame.
    Exited,
}

/// Edge-triggered range sensor around a target point.
#[derive(Debug, Clone)]
pub struct ProximitySensor {
    radius: f32,
    near: bool,
}

impl ProximitySensor {
    /// Create a sensor with the given trigger radius. Starts out of range.
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            near: false,
        }
    }

    /// Whether the last observation was in range.
    #[inline]
    pub fn is_near(&self) -> bool {
        self.near
    }

    /// Compare player and target positions, reporting a crossing if one
    /// happened.
    ///
    /// Distance is full 3D, so a target mounted above the ground plane
    /// effectively shrinks the walkable trigger circle. A distance of
    /// exactly the radius counts as out of range.
    pub fn observe(&mut self, player: Vec3, target: Vec3) -> Option<ProximityEvent> {
        let within = player.distance(target) < self.radius;
        match (self.near, within) {
            (false, true) => {
                self.near = true;
                Some(ProximityEvent::Entered)
            }
            (true, false) => {
                self.near = false;
                Some(ProximityEvent::Exited)
            }
            _ => None,
        }
    }
}
