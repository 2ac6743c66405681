//! Scalability sweep CLI
//!
//! Runs the default timing sweep over growing problem sizes and prints the
//! results as JSON, optionally writing them to a file.

use anyhow::Context;
use simulation::export::{build_export, export_json, write_to_file};
use simulation::runner::{run_sweep, SweepConfig};

fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    let config = SweepConfig::default();

    tracing::info!(sizes = ?config.sizes, trials = config.trials, "starting sweep");

    let metrics = run_sweep(&config).context("running scalability sweep")?;
    let export = build_export(&config, &metrics);

    match args.get(1) {
        Some(path) => {
            write_to_file(&export, path)
                .with_context(|| format!("writing sweep results to '{path}'"))?;
            tracing::info!(%path, "sweep results written");
        }
        None => println!("{}", export_json(&export)),
    }

    Ok(())
}
