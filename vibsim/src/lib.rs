pub mod error;
pub mod simulation;
pub mod configuration;
pub mod report;
pub mod benchmark;

pub use error::{Result, SimError};

pub use simulation::states::{NVec2, TimeSeries, SAMPLE_COUNT};
pub use simulation::params::{SystemParameters, IntegratorSettings};
pub use simulation::dynamics::{Dynamics, MassSpringDamper, mass_spring_damper};
pub use simulation::integrator::{DormandPrince, Trajectory, IntegrationStats};
pub use simulation::metrics::{DampingRegime, VibrationMetrics, critical_damping};
pub use simulation::engine::{Engine, SimulationResult, simulate, analytic_displacement};
pub use simulation::scenario::Scenario;

pub use configuration::config::{ScenarioConfig, SystemConfig, IntegratorConfig};

pub use report::{summary::{render_report, write_report}, export::{write_csv, write_csv_file}};

pub use benchmark::benchmark::{bench_simulate, bench_regimes};
