use std::time::Instant;

use crate::error::Result;
use crate::simulation::engine::{analytic_displacement, simulate, SimulationResult};
use crate::simulation::params::SystemParameters;

/// Largest deviation of the damped run from the closed-form response
pub fn max_abs_error(result: &SimulationResult) -> f64 {
    result
        .damped
        .samples()
        .map(|(t, x)| (x - analytic_displacement(&result.parameters, t)).abs())
        .fold(0.0, f64::max)
}

/// Time `simulate` for every duration 1..=20 s with the default parameters
/// Paste output directly into a spreadsheet to graph
pub fn bench_simulate() -> Result<()> {
    println!("t_end,ms,max_abs_error");

    for t_end in 1..=20 {
        let params = SystemParameters {
            t_end: t_end as f64,
            ..SystemParameters::default()
        };

        // Warm-up
        simulate(&params)?;

        let steps = 5;
        let t0 = Instant::now();
        let mut result = simulate(&params)?;
        for _ in 1..steps {
            result = simulate(&params)?;
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6},{:.3e}", t_end, ms, max_abs_error(&result));
    }

    Ok(())
}

/// Time one run in each damping regime
pub fn bench_regimes() -> Result<()> {
    // c = 0, 5, 20, 25 with m = 1, k = 100 covers ζ = 0, 0.25, 1, 1.25
    let dampings = [0.0, 5.0, 20.0, 25.0];

    for c in dampings {
        let params = SystemParameters {
            c,
            t_end: 20.0,
            ..SystemParameters::default()
        };

        let t0 = Instant::now();
        let result = simulate(&params)?;
        let ms = t0.elapsed().as_secs_f64() * 1000.0;

        println!(
            "c = {:5.1}, regime = {:17}, run = {:8.3} ms, max error = {:.3e}",
            c,
            result.metrics.regime.to_string(),
            ms,
            max_abs_error(&result)
        );
    }

    Ok(())
}
