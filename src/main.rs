//! Greybox Demo - Main Entry Point
//!
//! Runs the scene headlessly through a scripted ten-second walkthrough
//! that exercises every mechanic: mouse look, walking, the door, the
//! jump chain, dashing, crouching, zoom, and cursor toggling.
//!
//! Pass a TOML config path as the first argument to override the scene
//! defaults. Run with `RUST_LOG=debug` to narrate state transitions.

use std::env;
use std::path::Path;

use anyhow::Context;
use glam::Vec2;
use greybox_scene::{hud, Door, PlayerInput, Press, Scene, SceneConfig};

/// Frames the scripted walkthrough runs for (ten seconds at 60 Hz).
const TOTAL_FRAMES: u64 = 600;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match env::args().nth(1) {
        Some(path) => SceneConfig::load(Path::new(&path))
            .with_context(|| format!("loading scene config from {}", path))?,
        None => SceneConfig::default(),
    };

    let mut scene = Scene::new(config);

    println!("{}", hud::CONTROLS_TEXT);
    println!();
    describe_scene(&scene);

    for frame in 0..TOTAL_FRAMES {
        if let Some(note) = phase_note(frame) {
            log::info!("{}", note);
        }
        let input = scripted_input(frame);
        scene.tick(&input);
    }

    print_summary(&scene);
    Ok(())
}

/// What the "player" does on each frame of the walkthrough.
fn scripted_input(frame: u64) -> PlayerInput {
    let mut input = PlayerInput::default();

    match frame {
        // Half a second of mouse turn, 1.5 degrees per frame, to yaw 45
        0..=29 => input.mouse_delta = Vec2::new(0.3, 0.0),

        // Walk into the door zone
        30..=89 => input.movement.forward = true,

        // Open, wait out the swing, close again
        90 => input.presses.push(Press::Interact),
        126 => input.presses.push(Press::Interact),

        // Jump, then spend the mid-air jump near the apex
        162 => input.presses.push(Press::Jump),
        180 => input.presses.push(Press::Jump),

        // Turn 180 degrees over 40 frames, then sprint back across the slab
        280..=319 => input.mouse_delta = Vec2::new(-0.9, 0.0),
        320..=369 => {
            input.movement.forward = true;
            input.run = true;
        }

        // Dash and let the carry decay through its cooldown
        380 => input.presses.push(Press::Dash),

        // Crouch-walk, then stop and aim
        440..=499 => {
            input.movement.forward = true;
            input.crouch = true;
        }
        500..=559 => input.zoom = true,

        // Release the cursor and wiggle the mouse; the look must freeze
        560 => {
            input.presses.push(Press::ToggleMouseLock);
            input.mouse_delta = Vec2::new(0.5, 0.0);
        }
        561..=589 => input.mouse_delta = Vec2::new(0.5, 0.0),
        590 => input.presses.push(Press::ToggleMouseLock),

        _ => {}
    }

    input
}

/// Narration for the start of each walkthrough phase.
fn phase_note(frame: u64) -> Option<&'static str> {
    match frame {
        0 => Some("turning toward the door"),
        30 => Some("walking up to the door"),
        90 => Some("opening the door"),
        126 => Some("closing the door"),
        162 => Some("jumping"),
        180 => Some("double jumping"),
        280 => Some("turning around"),
        320 => Some("sprinting back across the slab"),
        380 => Some("dashing"),
        440 => Some("crouch-walking"),
        500 => Some("aiming"),
        560 => Some("releasing the cursor; look input should freeze"),
        590 => Some("recapturing the cursor"),
        _ => None,
    }
}

fn describe_scene(scene: &Scene) {
    let obstacles = scene.props.len().saturating_sub(1);
    log::info!(
        "scene ready: ground slab, {} obstacles, door at {:?} (leaf {:?}, color {:?})",
        obstacles,
        scene.door.position,
        Door::SCALE,
        Door::COLOR,
    );
    log::info!(
        "tick rate {} Hz, scatter seed {}",
        scene.config.tick_rate,
        scene.config.seed,
    );
}

fn print_summary(scene: &Scene) {
    println!("--- walkthrough finished ---");
    println!("frames: {}", scene.frame);
    println!(
        "player at ({:.2}, {:.2}, {:.2}), yaw {:.1} deg, fov {:.1} deg",
        scene.player.position.x,
        scene.player.position.y,
        scene.player.position.z,
        scene.player.yaw,
        scene.player.fov,
    );
    println!(
        "door: {} (rotation {:.1} deg)",
        if scene.door.is_closed() { "closed" } else { "open" },
        scene.door.rotation_y(),
    );
    println!(
        "hud: {} | door hint {}",
        scene.hud.balance.text,
        if scene.hud.door_hint.enabled { "shown" } else { "hidden" },
    );
    println!(
        "cursor: {}",
        if scene.mouse_locked { "locked" } else { "released" },
    );
}
