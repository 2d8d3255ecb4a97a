//! Simulation engine
//!
//! Integrates the oscillator twice over the same time grid, once with the
//! requested damping and once with the damping removed, and derives the
//! vibration metrics from the parameters.

use tracing::{info, warn};

use crate::error::Result;
use super::dynamics::MassSpringDamper;
use super::integrator::{DormandPrince, Trajectory};
use super::metrics::VibrationMetrics;
use super::params::{IntegratorSettings, SystemParameters};
use super::states::{linspace, state, TimeSeries, SAMPLE_COUNT};

/// Everything produced by one simulation request
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub parameters: SystemParameters,
    pub damped: TimeSeries, // response with the actual damping c
    pub undamped: TimeSeries, // reference response with c = 0
    pub metrics: VibrationMetrics,
}

/// Runtime engine settings
#[derive(Debug, Clone, Copy, Default)]
pub struct Engine {
    pub integrator: IntegratorSettings,
}

impl Engine {
    pub fn new(integrator: IntegratorSettings) -> Self {
        Self { integrator }
    }

    /// Run both integrations and compute the metrics
    ///
    /// Fails with `InvalidParameter` before any work when `params` is invalid
    /// and with `IntegrationFailure` if either run cannot be completed.
    pub fn simulate(&self, params: &SystemParameters) -> Result<SimulationResult> {
        params.validate()?;

        let grid = linspace(0.0, params.t_end, SAMPLE_COUNT);
        let solver = DormandPrince::new(self.integrator);
        let y0 = state(params.x0, params.v0);

        let damped_model = MassSpringDamper::from_params(params);
        let undamped_model = MassSpringDamper::with_damping(params, 0.0);

        let damped = solver
            .integrate(&damped_model, y0, &grid)
            .map(into_series)
            .map_err(|e| {
                warn!(error = %e, "damped run failed");
                e
            })?;
        let undamped = solver
            .integrate(&undamped_model, y0, &grid)
            .map(into_series)
            .map_err(|e| {
                warn!(error = %e, "undamped run failed");
                e
            })?;

        let metrics = VibrationMetrics::from_params(params);

        info!(
            omega_n = metrics.natural_frequency,
            zeta = metrics.damping_ratio,
            regime = %metrics.regime,
            "simulation finished"
        );

        Ok(SimulationResult {
            parameters: *params,
            damped,
            undamped,
            metrics,
        })
    }
}

/// Simulate with the default integrator settings
pub fn simulate(params: &SystemParameters) -> Result<SimulationResult> {
    Engine::default().simulate(params)
}

fn into_series(traj: Trajectory) -> TimeSeries {
    let (x, v): (Vec<f64>, Vec<f64>) = traj.y.iter().map(|y| (y[0], y[1])).unzip();
    TimeSeries { t: traj.t, x, v }
}

/// Closed-form free response x(t) of the oscillator described by `p`
///
/// Used as a reference for the numerical solution. Handles all four regimes.
#[allow(clippy::float_cmp)]
pub fn analytic_displacement(p: &SystemParameters, t: f64) -> f64 {
    let wn = (p.k / p.m).sqrt();
    let zeta = p.c / (2.0 * (p.k * p.m).sqrt());
    let a = zeta * wn; // decay rate

    if zeta < 1.0 {
        let wd = wn * (1.0 - zeta * zeta).sqrt();
        (-a * t).exp() * (p.x0 * (wd * t).cos() + (p.v0 + a * p.x0) / wd * (wd * t).sin())
    } else if zeta == 1.0 {
        (p.x0 + (p.v0 + wn * p.x0) * t) * (-wn * t).exp()
    } else {
        // Two real roots s1 > s2
        let root = wn * (zeta * zeta - 1.0).sqrt();
        let s1 = -a + root;
        let s2 = -a - root;
        let c1 = (p.v0 - s2 * p.x0) / (s1 - s2);
        let c2 = p.x0 - c1;
        c1 * (s1 * t).exp() + c2 * (s2 * t).exp()
    }
}
