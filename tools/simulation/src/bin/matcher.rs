//! Matcher CLI
//!
//! Reads a preference file, runs the matching engine, and prints the stable
//! pairing as 1-indexed `proposer receiver` lines.

use anyhow::{bail, Context};
use simulation::format;

fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        bail!("usage: matcher <preference-file>");
    }

    let text = std::fs::read_to_string(&args[1])
        .with_context(|| format!("reading preference file '{}'", args[1]))?;
    let instance = format::parse_instance(&text)
        .with_context(|| format!("parsing preference file '{}'", args[1]))?;

    tracing::info!(n = instance.n(), "instance parsed, running engine");

    let pairing = matching_engine::solve(&instance);
    print!("{}", format::render_pairing(&pairing));

    Ok(())
}
