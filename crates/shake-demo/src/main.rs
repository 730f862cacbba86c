use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::Context;
use camera_shake::{CameraRig, ShakeController, ShakeDescriptor, ShakeKind};
use glam::Vec3;

const FRAME_DT: f32 = 1.0 / 60.0;
const DEFAULT_FRAMES: u32 = 240;
const DEFAULT_SEED: u64 = 42;
const LOG_EVERY: u32 = 15; // frames between offset reports

// Scripted moments (frame numbers)
const EXPLOSION_FRAME: u32 = 10;
const HIT_FRAME: u32 = 60;
const QUAKE_FRAME: u32 = 90;
const HAZARD_OFF_FRAME: u32 = 200;

#[derive(Debug)]
struct DemoConfig {
    seed: u64,
    frames: u32,
}

impl DemoConfig {
    fn from_env() -> anyhow::Result<Self> {
        let seed = match std::env::var("SHAKE_SEED") {
            Ok(v) => v.parse().context("SHAKE_SEED must be an unsigned integer")?,
            Err(_) => DEFAULT_SEED,
        };
        let frames = match std::env::var("SHAKE_FRAMES") {
            Ok(v) => v.parse().context("SHAKE_FRAMES must be an unsigned integer")?,
            Err(_) => DEFAULT_FRAMES,
        };
        Ok(Self { seed, frames })
    }
}

struct Player {
    position: Vec3,
    velocity: Vec3,
}

impl Player {
    fn step(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = DemoConfig::from_env()?;
    log::info!("shake-demo starting: {:?}", config);

    let camera = Rc::new(RefCell::new(CameraRig::new(
        Vec3::new(0.0, 2.0, 6.0),
        Vec3::ZERO,
        16.0 / 9.0,
    )));
    let mut shakes = ShakeController::new(config.seed).with_sink(Rc::clone(&camera));

    let explosion_at = Vec3::new(4.0, 0.0, -3.0);
    let hazard_at = Vec3::new(-2.0, 0.0, 0.0);
    let mut player = Player {
        position: Vec3::new(-14.0, 0.0, 0.0),
        velocity: Vec3::new(4.0, 0.0, 0.0),
    };

    let explosion = ShakeDescriptor {
        position_magnitude: 0.6,
        rotation_magnitude: 4.0,
        duration: 0.8,
        max_distance: 20.0,
        ..ShakeDescriptor::new(ShakeKind::Impulse)
    };
    let hit = ShakeDescriptor::trauma(0.9, 1.5);
    let quake = ShakeDescriptor::perlin(2.0, 0.4);
    let lava = ShakeDescriptor::proximity(1.0, 10.0, 1.2);

    shakes.add_proximity_shake("lava", &lava);

    let started = Instant::now();
    let mut peak = 0.0f32;
    for frame in 0..config.frames {
        // gameplay
        player.step(FRAME_DT);
        match frame {
            EXPLOSION_FRAME => {
                let to_player = player.position - explosion_at;
                shakes.add_shake_from(&explosion, Some(to_player), to_player.length());
                log::info!("[frame {}] explosion at {:.1}m", frame, to_player.length());
            }
            HIT_FRAME => {
                shakes.add_shake_from(&hit, None, 0.0);
                log::info!("[frame {}] player hit", frame);
            }
            QUAKE_FRAME => {
                shakes.add_shake_from(&quake, None, 0.0);
                log::info!("[frame {}] ground tremor", frame);
            }
            HAZARD_OFF_FRAME => {
                shakes.disable_proximity_shake("lava");
                log::info!("[frame {}] lava cooled", frame);
            }
            _ => {}
        }
        shakes.update_proximity_shake_distance("lava", player.position.distance(hazard_at));

        // late update
        shakes.advance(FRAME_DT);

        let cam = camera.borrow();
        peak = peak.max(cam.local_position().length());
        if frame % LOG_EVERY == 0 {
            log::info!(
                "[frame {}] active={} pos={:.3?} rot={:.2?}",
                frame,
                shakes.len(),
                cam.local_position(),
                cam.local_euler_degrees(),
            );
        }
    }

    let wall: Duration = started.elapsed();
    log::info!(
        "done: {} frames ({:.2}s simulated) in {:?}, peak offset {:.3}, {} still active",
        config.frames,
        shakes.elapsed(),
        wall,
        peak,
        shakes.len()
    );
    let view = camera.borrow().view_matrix();
    log::debug!("final view matrix: {:?}", view);
    Ok(())
}
