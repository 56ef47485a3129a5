//! Player movement system.
//!
//! This module implements the demo's first-person movement:
//!
//! - Walk, run, and crouch ground speeds (crouch wins over run)
//! - A camera pivot that eases between stand and crouch heights
//! - Mouse look with clamped pitch, gated on cursor lock
//! - Explicit-Euler jumping with one mid-air jump
//! - A forward dash whose carry decays toward zero
//! - FOV zoom while aiming
//!
//! # Design
//!
//! Movement is driven by the [`PlayerController`], which consumes a
//! [`PlayerCommand`] built by the caller and mutates a [`PlayerState`].
//! The controller holds only configuration; replaying the same command
//! stream from the same state reproduces the same trajectory exactly.

mod config;
mod controller;
mod state;

pub use config::ControllerConfig;
pub use controller::PlayerController;
pub use state::{PlayerCommand, PlayerState};
