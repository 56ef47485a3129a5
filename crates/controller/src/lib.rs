//! Greybox First-Person Controller
//!
//! A headless first-person controller for the greybox demo scene. It owns
//! no window, reads no devices, and draws nothing; each frame the caller
//! feeds it a command built from sampled input plus any one-shot presses,
//! and reads the resulting player state back out.
//!
//! # Architecture
//!
//! The crate is split into two main systems:
//!
//! - **Movement**: Speeds, jumping, dash, mouse look, and camera easing
//! - **Proximity**: Edge-triggered range sensing for interactables
//!
//! # Design Principles
//!
//! 1. **Determinism**: Same commands from the same state produce the same
//!    trajectory, so scripted runs are replayable
//! 2. **Frame-based**: All smoothing re-targets every frame with `rate * dt`
//! 3. **Simplicity**: A flat state struct over gameplay abstractions

pub mod math;
pub mod movement;
pub mod proximity;

// Re-export commonly used types
pub use movement::{ControllerConfig, PlayerCommand, PlayerController, PlayerState};
pub use proximity::{ProximityEvent, ProximitySensor};
