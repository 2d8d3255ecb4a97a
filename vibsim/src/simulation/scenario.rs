//! Build validated simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! consumed by the CLI: engine settings plus validated system parameters.

use tracing::debug;

use crate::configuration::config::ScenarioConfig;
use crate::error::Result;
use crate::simulation::engine::{Engine, SimulationResult};
use crate::simulation::params::SystemParameters;

/// A fully-initialized simulation request
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: SystemParameters,
}

impl Scenario {
    /// Map the configuration to runtime types, rejecting invalid values
    pub fn build_scenario(cfg: &ScenarioConfig) -> Result<Self> {
        let parameters = cfg.parameters();
        parameters.validate()?;

        let settings = cfg.integrator.settings();
        settings.validate()?;

        debug!(?parameters, ?settings, "scenario built");

        Ok(Self {
            engine: Engine::new(settings),
            parameters,
        })
    }

    pub fn run(&self) -> Result<SimulationResult> {
        self.engine.simulate(&self.parameters)
    }
}
