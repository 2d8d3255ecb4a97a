//! CSV export of the simulated time series
//!
//! One header record `t,x_damped,x_undamped` followed by one record per sample.

use std::io::Write;
use std::path::Path;

use crate::simulation::engine::SimulationResult;

const HEADER: [&str; 3] = ["t", "x_damped", "x_undamped"];

fn write_records<W: Write>(result: &SimulationResult, writer: &mut csv::Writer<W>) -> csv::Result<()> {
    writer.write_record(HEADER)?;
    for ((t, xd), xu) in result.damped.samples().zip(result.undamped.x.iter()) {
        writer.write_record([t.to_string(), xd.to_string(), xu.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_csv<W: Write>(result: &SimulationResult, out: W) -> csv::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    write_records(result, &mut writer)
}

pub fn write_csv_file<P: AsRef<Path>>(result: &SimulationResult, path: P) -> csv::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    write_records(result, &mut writer)
}
