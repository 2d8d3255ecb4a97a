//! Physical parameters of a single-degree-of-freedom oscillator
//!
//! `SystemParameters` holds one simulation request:
//! - mass, spring stiffness and viscous damping coefficient,
//! - initial displacement and velocity,
//! - simulation end time

use crate::error::{Result, SimError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemParameters {
    pub m: f64, // mass (kg)
    pub k: f64, // spring stiffness (N/m)
    pub c: f64, // damping coefficient (N·s/m)
    pub x0: f64, // initial displacement (m)
    pub v0: f64, // initial velocity (m/s)
    pub t_end: f64, // simulation duration (s)
}

impl SystemParameters {
    /// Build and validate a parameter set
    pub fn new(m: f64, k: f64, c: f64, x0: f64, v0: f64, t_end: f64) -> Result<Self> {
        let params = Self { m, k, c, x0, v0, t_end };
        params.validate()?;
        Ok(params)
    }

    /// Check m > 0, k > 0, c >= 0, t_end > 0 and that every field is finite
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("m", self.m),
            ("k", self.k),
            ("c", self.c),
            ("x0", self.x0),
            ("v0", self.v0),
            ("t_end", self.t_end),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(SimError::invalid(name, value, "must be finite"));
            }
        }

        if self.m <= 0.0 {
            return Err(SimError::invalid("m", self.m, "mass must be positive"));
        }
        if self.k <= 0.0 {
            return Err(SimError::invalid("k", self.k, "stiffness must be positive"));
        }
        if self.c < 0.0 {
            return Err(SimError::invalid("c", self.c, "damping must not be negative"));
        }
        if self.t_end <= 0.0 {
            return Err(SimError::invalid("t_end", self.t_end, "duration must be positive"));
        }
        Ok(())
    }

    /// Copy of these parameters with a different damping coefficient
    pub fn with_damping(&self, c: f64) -> Self {
        Self { c, ..*self }
    }
}

impl Default for SystemParameters {
    fn default() -> Self {
        Self {
            m: 1.0,
            k: 100.0,
            c: 5.0,
            x0: 0.1,
            v0: 0.1,
            t_end: 10.0,
        }
    }
}

/// Tolerances handed to the RK45 solver
///
/// The defaults are tight enough that every regime matches the closed-form
/// response to well below 1e-4 over the supported durations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegratorSettings {
    pub rtol: f64, // relative error tolerance
    pub atol: f64, // absolute error tolerance
}

impl Default for IntegratorSettings {
    fn default() -> Self {
        Self {
            rtol: 1.0e-6,
            atol: 1.0e-9,
        }
    }
}

impl IntegratorSettings {
    pub fn validate(&self) -> Result<()> {
        if !(self.rtol.is_finite() && self.rtol > 0.0) {
            return Err(SimError::invalid("rtol", self.rtol, "tolerance must be positive"));
        }
        if !(self.atol.is_finite() && self.atol > 0.0) {
            return Err(SimError::invalid("atol", self.atol, "tolerance must be positive"));
        }
        Ok(())
    }
}
