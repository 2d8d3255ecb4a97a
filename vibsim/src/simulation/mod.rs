pub mod states;
pub mod params;
pub mod dynamics;
pub mod integrator;
pub mod metrics;
pub mod engine;
pub mod scenario;
