#![deny(clippy::all, clippy::pedantic)]

//! # Tumble Runtime
//!
//! Headless host loop for the physics core. It plays the part of a renderer:
//! resets the scenario, steps it once per frame at a fixed timestep, reads
//! body transforms back as a frame buffer and logs progress. Scripted resets
//! stand in for the user's reset key.

mod app;

use anyhow::Result;
use clap::Parser;

/// Command-line options for the host loop
#[derive(Debug, Parser)]
#[command(name = "tumble", about = "Step the sphere-drop scenario headlessly")]
struct Args {
    /// Number of frames to simulate
    #[arg(long, default_value_t = 600)]
    steps: u64,

    /// Fixed timestep in seconds
    #[arg(long, default_value_t = physics::FIXED_DT)]
    dt: f32,

    /// Log body state every N frames
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    log_every: u64,

    /// Reset the scenario before this frame (repeatable)
    #[arg(long = "reset-at")]
    reset_at: Vec<u64>,

    /// Advance orientation from angular velocity
    #[arg(long)]
    integrate_orientation: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config = app::HostConfig {
        steps: args.steps,
        dt: args.dt,
        log_every: args.log_every,
        reset_at: args.reset_at,
        integrate_orientation: args.integrate_orientation,
    };

    app::run(&config)
}
