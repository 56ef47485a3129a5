//! Greybox Demo Scene
//!
//! This crate contains the complete headless demo scene:
//!
//! - Scene construction from a seeded config (ground, obstacles, door)
//! - The frame loop driving the player controller
//! - Door swing animation and edge-triggered interaction
//! - HUD text state (controls help, wallet, door hint)
//!
//! # Architecture
//!
//! Everything advances through [`Scene::tick`], once per frame:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       Scene::tick                        │
//! │  ┌─────────┐    ┌────────────┐    ┌───────────────────┐  │
//! │  │ Player  │───►│ Controller │───►│ Scene state       │  │
//! │  │ Input   │    │ (movement, │    │ (player, door,    │  │
//! │  └─────────┘    │  presses)  │    │  HUD, props)      │  │
//! │                 └────────────┘    └───────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The scene never reads devices or touches a window; the driver scripts
//! a [`PlayerInput`] per frame, which also makes every run replayable.

pub mod config;
pub mod door;
pub mod hud;
pub mod input;
pub mod props;
pub mod rng;
pub mod tween;
pub mod world;

// Re-export main types
pub use config::{ConfigError, SceneConfig};
pub use door::Door;
pub use hud::Hud;
pub use input::{MovementKeys, PlayerInput, Press};
pub use props::{Collider, Primitive, Prop};
pub use tween::Tween;
pub use world::Scene;

// Re-export controller types for convenience
pub use greybox_controller::{
    ControllerConfig, PlayerCommand, PlayerController, PlayerState, ProximityEvent,
    ProximitySensor,
};
