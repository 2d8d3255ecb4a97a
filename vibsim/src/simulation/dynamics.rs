//! State-derivative models for the integrator
//!
//! Defines the `Dynamics` trait consumed by the ODE integrator and the
//! linear mass-spring-damper model

use crate::simulation::params::SystemParameters;
use crate::simulation::states::NVec2;

/// Right-hand side of a first-order ODE `y' = f(t, y)` with a 2-element state
pub trait Dynamics {
    fn derivative(&self, t: f64, y: &NVec2) -> NVec2;
}

/// Derivative of the oscillator state `(x, v)`:
/// `(dx/dt, dv/dt) = (v, (-k x - c v) / m)`
///
/// `m` must be positive.
pub fn mass_spring_damper(y: &NVec2, m: f64, k: f64, c: f64) -> NVec2 {
    let x = y[0];
    let v = y[1];

    // Restoring spring force plus viscous damping force
    let force = -k * x - c * v;

    NVec2::new(v, force / m)
}

/// Linear single-DOF oscillator `m x'' + c x' + k x = 0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassSpringDamper {
    pub m: f64, // mass
    pub k: f64, // stiffness
    pub c: f64, // damping
}

impl MassSpringDamper {
    /// Model with the damping taken from `params`
    pub fn from_params(params: &SystemParameters) -> Self {
        Self::with_damping(params, params.c)
    }

    /// Model for `params` with the damping coefficient replaced by `c`
    pub fn with_damping(params: &SystemParameters, c: f64) -> Self {
        Self {
            m: params.m,
            k: params.k,
            c,
        }
    }
}

impl Dynamics for MassSpringDamper {
    fn derivative(&self, _t: f64, y: &NVec2) -> NVec2 {
        mass_spring_damper(y, self.m, self.k, self.c)
    }
}
