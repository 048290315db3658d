//! meadow — headless run of the critters simulation.
//!
//! Spawns a population of critters on an 800×600 canvas and drives the scene
//! with a fixed 60 Hz frame delta, logging how many critters are wandering
//! versus resting as the run goes on.  Pass a JSON `SceneConfig` path as the
//! first argument to override the defaults; set `RUST_LOG=debug` to see
//! every status transition.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use cr_core::{Frame, FrameClock};
use cr_critter::TraitOverrides;
use cr_scene::{FrameObserver, SceneBuilder, SceneConfig, World};

// ── Constants ─────────────────────────────────────────────────────────────────

const FRAME_DELTA:     f64 = 1.0 / 60.0;
const RUN_SECS:        u64 = 60;
const REPORT_INTERVAL: u64 = 300; // frames between head-count log lines

// ── Observer ──────────────────────────────────────────────────────────────────

/// Logs wandering/resting head counts every `every` frames.
struct HeadCountLogger {
    every:        u64,
    most_resting: usize,
}

impl FrameObserver for HeadCountLogger {
    fn on_frame_end(&mut self, frame: Frame, world: &World) {
        let (wandering, resting) = world.status_counts();
        self.most_resting = self.most_resting.max(resting);
        if (frame.0 + 1).is_multiple_of(self.every) {
            info!(%frame, wandering, resting, "head count");
        }
    }

    fn on_run_end(&mut self, clock: &FrameClock) {
        info!(
            %clock,
            fps = clock.mean_fps().unwrap_or_default(),
            most_resting = self.most_resting,
            "run finished"
        );
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let config = match std::env::args().nth(1) {
        Some(path) => SceneConfig::from_json_file(Path::new(&path))
            .with_context(|| format!("loading scene config from {path}"))?,
        None => SceneConfig::default(),
    };

    println!("=== meadow — critters ===");
    println!(
        "Canvas: {}  |  Critters: {} + 2  |  Seed: {}",
        config.canvas, config.critter_count, config.seed
    );
    println!();

    // Two fixed personalities alongside the configured population: one that
    // changes its mind at every opportunity and one that never rests.
    let mut scene = SceneBuilder::new(config)
        .critter(TraitOverrides::new().curiosity(1.0).top_speed(8.0))
        .critter(TraitOverrides::new().curiosity(-1.0).top_speed(2.0))
        .build()?;
    info!(
        critters = scene.world().len(),
        tasks = scene.scheduler().len(),
        "scene ready"
    );

    let mut observer = HeadCountLogger { every: REPORT_INTERVAL, most_resting: 0 };
    let started = Instant::now();
    scene.run_frames(RUN_SECS * 60, FRAME_DELTA, &mut observer)?;
    let wall = started.elapsed();

    // ── Final table ───────────────────────────────────────────────────────
    println!();
    println!(
        "{:>12}  {:>9}  {:>18}  {:>18}  {:>6}  {:>6}",
        "critter", "status", "position", "destination", "speed", "curio"
    );
    for critter in scene.critters() {
        let (p, d) = (critter.position(), critter.destination());
        println!(
            "{:>12}  {:>9}  {:>8.1},{:>8.1}  {:>8.1},{:>8.1}  {:>6.2}  {:>6.2}",
            critter.id().to_string(),
            critter.status().as_str(),
            p.x,
            p.y,
            d.x,
            d.y,
            critter.speed(),
            critter.traits().curiosity(),
        );
    }

    let (wandering, resting) = scene.world().status_counts();
    println!();
    println!(
        "{} simulated in {:.2?}: {wandering} wandering, {resting} resting",
        scene.clock(),
        wall
    );
    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
