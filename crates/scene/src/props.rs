//! Static scene geometry.
//!
//! Props are plain data: primitive, transform, color. Nothing in the demo
//! collides with them or draws them; a renderer would consume this list
//! as-is, and the scatter in [`crate::world::Scene::new`] keeps them
//! reproducible from the config seed.

use glam::Vec3;

/// Scene palette (RGB, 0-1).
pub mod palette {
    use glam::Vec3;

    /// Ground slab and the balance readout.
    pub const GREEN: Vec3 = Vec3::new(0.0, 1.0, 0.0);

    /// Obstacle cubes.
    pub const AZURE: Vec3 = Vec3::new(0.0, 0.5, 1.0);

    /// The door leaf.
    pub const BROWN: Vec3 = Vec3::new(0.55, 0.27, 0.07);

    /// HUD text.
    pub const WHITE: Vec3 = Vec3::new(1.0, 1.0, 1.0);
}

/// Mesh primitive a prop is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Plane,
    Cube,
}

/// Collision shape a host engine would attach to a prop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collider {
    None,
    Box,
}

/// A static entity in the scene.
#[derive(Debug, Clone)]
pub struct Prop {
    pub primitive: Primitive,

    /// Collision shape for the host engine. Nothing here simulates it.
    pub collider: Collider,

    /// Center position in world space.
    pub position: Vec3,

    /// Extents along each axis.
    pub scale: Vec3,

    /// Base color (RGB, 0-1).
    pub color: Vec3,
}

impl Prop {
    /// The 20 x 20 ground slab under everything.
    pub fn ground() -> Self {
        Self {
            primitive: Primitive::Plane,
            collider: Collider::Box,
            position: Vec3::ZERO,
            scale: Vec3::new(20.0, 1.0, 20.0),
            color: palette::GREEN,
        }
    }

    /// An obstacle cube standing on the ground at (x, z).
    pub fn obstacle(x: f32, z: f32, height: f32) -> Self {
        Self {
            primitive: Primitive::Cube,
            collider: Collider::Box,
            position: Vec3::new(x, 0.5, z),
            scale: Vec3::new(1.0, height, 1.0),
            color: palette::AZURE,
        }
    }
}
