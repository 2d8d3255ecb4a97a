//! Adaptive explicit Runge–Kutta integration
//!
//! Drives `ivp::solve_ivp` with the Dormand–Prince RK45 method. The solution
//! is reported only at the requested output times, independent of the
//! solver's internal step sequence.

use ivp::prelude::*;
use tracing::debug;

use crate::error::{Result, SimError};
use super::dynamics::Dynamics;
use super::params::IntegratorSettings;
use super::states::NVec2;

/// Solver counters for one integration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegrationStats {
    pub evaluations: usize,
    pub steps: usize,
    pub accepted: usize,
    pub rejected: usize,
}

/// States of the solution at the requested output times
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub t: Vec<f64>,
    pub y: Vec<NVec2>,
    pub stats: IntegrationStats,
}

/// Exposes a [`Dynamics`] model through the solver's slice-based interface
struct OdeSystem<'a, D: ?Sized> {
    model: &'a D,
}

impl<'a, D> IVP for OdeSystem<'a, D>
where
    D: Dynamics + ?Sized,
{
    fn ode(&self, t: f64, y: &[f64], dydt: &mut [f64]) {
        let d = self.model.derivative(t, &NVec2::new(y[0], y[1]));
        dydt[0] = d[0];
        dydt[1] = d[1];
    }
}

/// RK45 (Dormand–Prince 5(4)) solver configured by [`IntegratorSettings`]
#[derive(Debug, Clone, Copy, Default)]
pub struct DormandPrince {
    pub settings: IntegratorSettings,
}

impl DormandPrince {
    pub fn new(settings: IntegratorSettings) -> Self {
        Self { settings }
    }

    /// Integrate `model` from `y0` at `t_eval[0]` and report the state at every time in `t_eval`
    ///
    /// `t_eval` must be non-empty, finite and non-decreasing.
    pub fn integrate<D>(&self, model: &D, y0: NVec2, t_eval: &[f64]) -> Result<Trajectory>
    where
        D: Dynamics + ?Sized,
    {
        self.settings.validate()?;
        check_output_grid(t_eval)?;

        let t0 = t_eval[0];
        let t_final = t_eval[t_eval.len() - 1];

        // Nothing to integrate over
        if t_final == t0 {
            return Ok(Trajectory {
                t: t_eval.to_vec(),
                y: vec![y0; t_eval.len()],
                stats: IntegrationStats::default(),
            });
        }

        let system = OdeSystem { model };
        let options = Options::builder()
            .method(Method::DOPRI5)
            .rtol(self.settings.rtol)
            .atol(self.settings.atol)
            .t_eval(t_eval.to_vec())
            .build();

        let sol = solve_ivp(&system, t0, t_final, &[y0[0], y0[1]], options)
            .map_err(|err| SimError::integration(t0, format!("{err:?}")))?;

        if sol.t.len() != t_eval.len() || sol.y.len() != t_eval.len() {
            let t_reached = sol.t.last().copied().unwrap_or(t0);
            return Err(SimError::integration(
                t_reached,
                format!(
                    "solver returned {} of {} requested samples (status {:?})",
                    sol.t.len(),
                    t_eval.len(),
                    sol.status
                ),
            ));
        }

        let mut y = Vec::with_capacity(t_eval.len());
        for (ti, yi) in sol.t.iter().zip(sol.y.iter()) {
            if !(yi[0].is_finite() && yi[1].is_finite()) {
                return Err(SimError::integration(*ti, "solution became non-finite"));
            }
            y.push(NVec2::new(yi[0], yi[1]));
        }

        let stats = IntegrationStats {
            evaluations: sol.nfev as usize,
            steps: sol.nstep as usize,
            accepted: sol.naccpt as usize,
            rejected: sol.nrejct as usize,
        };

        debug!(
            evaluations = stats.evaluations,
            steps = stats.steps,
            accepted = stats.accepted,
            rejected = stats.rejected,
            "rk45 integration finished"
        );

        Ok(Trajectory {
            t: t_eval.to_vec(),
            y,
            stats,
        })
    }
}

fn check_output_grid(t_eval: &[f64]) -> Result<()> {
    let Some(&first) = t_eval.first() else {
        return Err(SimError::integration(0.0, "no output times requested"));
    };
    if !first.is_finite() {
        return Err(SimError::integration(first, "output times must be finite"));
    }
    for pair in t_eval.windows(2) {
        if !pair[1].is_finite() {
            return Err(SimError::integration(pair[1], "output times must be finite"));
        }
        if pair[1] < pair[0] {
            return Err(SimError::integration(pair[1], "output times must be non-decreasing"));
        }
    }
    Ok(())
}
