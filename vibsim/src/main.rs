use vibsim::{ScenarioConfig, Scenario, render_report, write_csv_file};
use vibsim::{bench_simulate, bench_regimes};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vibsim", about = "Mass-spring-damper vibration simulator")]
struct Args {
    /// Scenario YAML, looked up under `scenarios/` when not found as given
    #[arg(short = 'f', long = "file")]
    file_name: Option<String>,

    /// Mass (kg)
    #[arg(long)]
    m: Option<f64>,

    /// Spring stiffness (N/m)
    #[arg(long)]
    k: Option<f64>,

    /// Damping coefficient (N·s/m)
    #[arg(long)]
    c: Option<f64>,

    /// Initial displacement (m)
    #[arg(long)]
    x0: Option<f64>,

    /// Initial velocity (m/s)
    #[arg(long)]
    v0: Option<f64>,

    /// Simulation duration (s)
    #[arg(long)]
    t_end: Option<f64>,

    /// Write the damped and undamped time series to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Run the benchmarks instead of a single simulation
    #[arg(long)]
    bench: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "vibsim=debug" } else { "vibsim=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_scenario_path(file_name: &str) -> PathBuf {
    let given = PathBuf::from(file_name);
    if given.exists() {
        return given;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

// load here to keep main clean
fn load_scenario_config(args: &Args) -> Result<ScenarioConfig> {
    let mut cfg = match &args.file_name {
        Some(file_name) => {
            let path = resolve_scenario_path(file_name);
            ScenarioConfig::from_path(&path)
                .with_context(|| format!("failed to load scenario {}", path.display()))?
        }
        None => ScenarioConfig::default(),
    };

    // Command-line values take precedence over the file
    let system = &mut cfg.system;
    if let Some(m) = args.m { system.m = m; }
    if let Some(k) = args.k { system.k = k; }
    if let Some(c) = args.c { system.c = c; }
    if let Some(x0) = args.x0 { system.x0 = x0; }
    if let Some(v0) = args.v0 { system.v0 = v0; }
    if let Some(t_end) = args.t_end { system.t_end = t_end; }

    Ok(cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.bench {
        bench_simulate()?;
        bench_regimes()?;
        return Ok(());
    }

    let cfg = load_scenario_config(&args)?;
    let scenario = Scenario::build_scenario(&cfg).context("invalid scenario")?;
    let result = scenario.run().context("simulation failed")?;

    print!("{}", render_report(&result));

    if let Some(path) = &args.csv {
        write_csv_file(&result, path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), samples = result.damped.len(), "time series written");
    }

    Ok(())
}
