//! Headless tank arena.
//!
//! Builds one tank brain from a behavior id and runs it against a stationary
//! target for a fixed number of steps, logging every shell and a summary.
//!
//! ```bash
//! # Pursue strategy, verbose tree tracing
//! RUST_LOG=tank_ai=trace,behavior_tree=debug cargo run -p tank-sim -- --behavior 1
//!
//! # Track strategy with a custom config, target destroyed after 200 steps
//! cargo run -p tank-sim -- --behavior 8 --config brain.toml --lose-target-after 200
//! ```

mod arena;

use std::path::PathBuf;

use anyhow::{Context, Result};
use arena::Arena;
use clap::Parser;
use tank_ai::{BrainConfig, PcgRandom, TankBrain, Vec3};

/// Run a tank strategy in a headless arena
#[derive(Parser)]
#[command(name = "tank-sim")]
#[command(about = "Run a tank strategy in a headless arena", long_about = None)]
#[command(version)]
struct Cli {
    /// Behavior id; unknown ids fall back to a slow idle turn
    #[arg(short, long, default_value_t = 1, allow_hyphen_values = true)]
    behavior: i32,

    /// Seed for the random source
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Number of simulation steps
    #[arg(long, default_value_t = 600)]
    steps: u32,

    /// Seconds per step
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Brain configuration (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Target x coordinate (positive is to the tank's initial right)
    #[arg(long, default_value_t = 6.0, allow_hyphen_values = true)]
    target_x: f32,

    /// Target z coordinate (positive is ahead of the tank)
    #[arg(long, default_value_t = 12.0, allow_hyphen_values = true)]
    target_z: f32,

    /// Remove the target after this many steps
    #[arg(long)]
    lose_target_after: Option<u32>,
}

fn main() -> Result<()> {
    // Load .env file if it exists (for RUST_LOG)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => BrainConfig::load(path)
            .with_context(|| format!("loading brain config from {}", path.display()))?,
        None => BrainConfig::default(),
    };

    let mut rng = PcgRandom::new(cli.seed);
    let mut brain = TankBrain::with_config(cli.behavior, &mut rng, &config);
    let strategy: &'static str = brain.strategy().map_or("idle_turn", |s| s.into());
    tracing::info!(behavior = cli.behavior, strategy, seed = cli.seed, "tank spawned");

    let mut arena = Arena::new(Vec3::new(cli.target_x, 0.0, cli.target_z));

    for step in 0..cli.steps {
        if cli.lose_target_after == Some(step) {
            arena.remove_target();
            tracing::info!(step, "target destroyed");
        }

        let status = brain.tick(cli.dt, &mut arena, &mut rng);
        arena.step(cli.dt);

        tracing::debug!(
            step,
            %status,
            path = ?brain.tree().active_path(),
            yaw = arena.tank().yaw,
            "tick"
        );
    }

    let stats = arena.stats();
    let distance = arena
        .target()
        .map(|target| (target - arena.tank().position).length());

    tracing::info!(
        strategy,
        shots = stats.shots,
        strongest_shot = stats.strongest_shot,
        travelled = stats.distance_travelled,
        final_distance = ?distance,
        "simulation finished"
    );

    Ok(())
}
