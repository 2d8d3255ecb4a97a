//! Plain-text report of a simulation run
//!
//! Lists the computed metrics followed by a short reading of the response.
//! The damped frequency is shown only when ζ < 1; otherwise the report
//! states that the system does not oscillate.

use std::fmt::{self, Write};

use crate::simulation::engine::SimulationResult;
use crate::simulation::metrics::critical_damping;

pub fn write_report<W: Write>(out: &mut W, result: &SimulationResult) -> fmt::Result {
    let p = &result.parameters;
    let m = &result.metrics;

    writeln!(out, "Input Parameters")?;
    writeln!(out, "  Mass (m)                  = {:.3} kg", p.m)?;
    writeln!(out, "  Spring Constant (k)       = {:.3} N/m", p.k)?;
    writeln!(out, "  Damping Constant (c)      = {:.3} N·s/m", p.c)?;
    writeln!(out, "  Initial Displacement (x0) = {:.3} m", p.x0)?;
    writeln!(out, "  Initial Velocity (v0)     = {:.3} m/s", p.v0)?;
    writeln!(out, "  Duration (t_end)          = {:.3} s", p.t_end)?;
    writeln!(out)?;

    writeln!(out, "Results")?;
    writeln!(out, "  Natural Frequency (ω_n)   = {:.3} rad/s ({:.3} Hz)", m.natural_frequency, m.natural_frequency_hz())?;
    writeln!(out, "  Natural Period (T_n)      = {:.3} s", m.period())?;
    writeln!(out, "  Damping Ratio (ζ)         = {:.3}", m.damping_ratio)?;
    writeln!(out, "  Critical Damping (c_c)    = {:.3} N·s/m", critical_damping(p))?;
    match m.damped_frequency {
        Some(wd) => {
            writeln!(out, "  Damped Frequency (ω_d)    = {:.3} rad/s", wd)?;
            if let Some(td) = m.damped_period() {
                writeln!(out, "  Damped Period (T_d)       = {:.3} s", td)?;
            }
        }
        None => writeln!(out, "  Overdamped system (no oscillation)")?,
    }
    writeln!(out, "  Spring Force (F)          = {:.3} N", m.spring_force)?;
    writeln!(out)?;

    writeln!(out, "Analysis")?;
    writeln!(out, "  {}", m.regime.description())?;
    writeln!(
        out,
        "  Peak displacement: damped {:.4} m, undamped {:.4} m",
        result.damped.peak_displacement(),
        result.undamped.peak_displacement()
    )?;
    if let Some(x_end) = result.damped.final_displacement() {
        writeln!(out, "  Damped displacement at t_end: {:.4e} m", x_end)?;
    }
    Ok(())
}

pub fn render_report(result: &SimulationResult) -> String {
    let mut out = String::new();
    // fmt::Write for String never fails
    write_report(&mut out, result).map(|_| out).unwrap_or_default()
}
