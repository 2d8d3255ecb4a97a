//! Error taxonomy for the simulator
//!
//! Either a simulation produces both time series and the metrics, or it
//! returns one of these. Nothing is ever returned half-built.

use thiserror::Error;

/// Errors raised by the simulation core and the scenario loader
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// A structural invariant of [`SystemParameters`](crate::SystemParameters) is violated
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// The ODE integrator could not advance the solution
    #[error("integration failed at t = {t}: {reason}")]
    IntegrationFailure { t: f64, reason: String },

    /// Scenario file could not be read or parsed
    #[error("configuration error: {0}")]
    Config(String),
}

impl SimError {
    pub fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        SimError::InvalidParameter { name, value, reason }
    }

    pub fn integration(t: f64, reason: impl Into<String>) -> Self {
        SimError::IntegrationFailure {
            t,
            reason: reason.into(),
        }
    }
}

impl From<serde_yaml::Error> for SimError {
    fn from(err: serde_yaml::Error) -> Self {
        SimError::Config(err.to_string())
    }
}

impl From<std::io::Error> for SimError {
    fn from(err: std::io::Error) -> Self {
        SimError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
