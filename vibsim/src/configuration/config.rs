//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`SystemConfig`]     – physical parameters and initial conditions
//! - [`IntegratorConfig`] – optional overrides of the integrator settings
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! system:
//!   m: 1.0          # mass (kg)
//!   k: 100.0        # spring stiffness (N/m)
//!   c: 5.0          # damping coefficient (N·s/m)
//!   x0: 0.1         # initial displacement (m)
//!   v0: 0.1         # initial velocity (m/s)
//!   t_end: 10.0     # simulation duration (s)
//!
//! integrator:       # optional
//!   rtol: 1.0e-6
//!   atol: 1.0e-9
//! ```
//!
//! Every field may be omitted; missing system fields fall back to
//! [`SystemParameters::default`] and missing integrator fields to
//! [`IntegratorSettings::default`].

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::simulation::params::{IntegratorSettings, SystemParameters};

/// Physical parameters of the oscillator
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SystemConfig {
    pub m: f64,     // mass
    pub k: f64,     // stiffness
    pub c: f64,     // damping
    pub x0: f64,    // initial displacement
    pub v0: f64,    // initial velocity
    pub t_end: f64, // duration
}

impl Default for SystemConfig {
    fn default() -> Self {
        let p = SystemParameters::default();
        Self {
            m: p.m,
            k: p.k,
            c: p.c,
            x0: p.x0,
            v0: p.v0,
            t_end: p.t_end,
        }
    }
}

/// Integrator overrides, `None` keeps the default
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct IntegratorConfig {
    pub rtol: Option<f64>,
    pub atol: Option<f64>,
}

impl IntegratorConfig {
    pub fn settings(&self) -> IntegratorSettings {
        let defaults = IntegratorSettings::default();
        IntegratorSettings {
            rtol: self.rtol.unwrap_or(defaults.rtol),
            atol: self.atol.unwrap_or(defaults.atol),
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioConfig {
    pub system: SystemConfig,
    pub integrator: IntegratorConfig,
}

impl ScenarioConfig {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_yaml::from_reader(reader)?)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    /// Unvalidated parameter set described by the `system` section
    pub fn parameters(&self) -> SystemParameters {
        let s = &self.system;
        SystemParameters {
            m: s.m,
            k: s.k,
            c: s.c,
            x0: s.x0,
            v0: s.v0,
            t_end: s.t_end,
        }
    }
}
