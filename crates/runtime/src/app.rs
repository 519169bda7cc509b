//! Fixed-step host loop

use anyhow::{bail, Context, Result};
use physics::{BodyTransform, PhysParams, PhysicsSim, Scenario};

/// Settings for one headless run
#[derive(Debug, Clone)]
pub struct HostConfig {
    pub steps: u64,
    pub dt: f32,
    pub log_every: u64,
    pub reset_at: Vec<u64>,
    pub integrate_orientation: bool,
}

/// Run the default scenario for `config.steps` frames.
///
/// Each frame steps the simulation exactly once with the fixed `dt`,
/// regardless of wall-clock time, then reads back the body transforms the
/// way a renderer would before drawing.
///
/// # Errors
///
/// Returns an error for a non-positive timestep or an invalid scenario.
pub fn run(config: &HostConfig) -> Result<()> {
    if !(config.dt.is_finite() && config.dt > 0.0) {
        bail!("timestep must be positive and finite, got {}", config.dt);
    }

    let params = PhysParams {
        integrate_orientation: config.integrate_orientation,
        ..PhysParams::default()
    };
    let mut sim = PhysicsSim::with_scenario_and_params(&Scenario::default(), params)
        .context("failed to build the default scenario")?;

    tracing::info!(
        "Starting simulation loop for {} steps with dt = {}...",
        config.steps,
        config.dt
    );

    let mut frame: Vec<BodyTransform> = Vec::with_capacity(sim.num_bodies());
    let mut uploaded_bytes = 0_usize;

    for i in 0..config.steps {
        if config.reset_at.contains(&i) {
            tracing::warn!(frame = i, "reset requested, restoring initial scenario");
            sim.reset();
        }

        sim.step(config.dt);

        sim.write_transforms(&mut frame);
        let bytes: &[u8] = bytemuck::cast_slice(&frame);
        uploaded_bytes += bytes.len();

        if (i + 1) % config.log_every == 0 {
            log_frame(&sim, i + 1);
        }
    }

    let info = sim.debug_info();
    tracing::info!(
        steps_since_reset = info.step_count,
        uploaded_bytes,
        "Simulation loop finished after {} steps.",
        config.steps
    );
    if let Some(ball) = sim.body(Scenario::BALL) {
        tracing::info!("Final ball position: {:?}", ball.position);
    }

    Ok(())
}

fn log_frame(sim: &PhysicsSim, frame: u64) {
    let info = sim.debug_info();
    if let Some(ball) = sim.body(Scenario::BALL) {
        tracing::info!(
            contacts = info.contacts_last_step,
            kinetic_energy = info.kinetic_energy,
            "Simulation step {} complete. Ball_y: {:.4}, vel_y: {:.4}",
            frame,
            ball.position.y,
            ball.linear_velocity.y
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(steps: u64) -> HostConfig {
        HostConfig {
            steps,
            dt: physics::FIXED_DT,
            log_every: 10,
            reset_at: vec![5],
            integrate_orientation: true,
        }
    }

    #[test]
    fn headless_run_completes() {
        assert!(run(&config(120)).is_ok());
    }

    #[test]
    fn zero_timestep_is_rejected() {
        let mut bad = config(1);
        bad.dt = 0.0;
        assert!(run(&bad).is_err());
    }
}
