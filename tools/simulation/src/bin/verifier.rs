//! Verifier CLI
//!
//! Reads a preference file and a candidate matching file, certifies the
//! matching, and prints a single verdict line: `VALID STABLE`, `UNSTABLE: …`
//! with the blocking pair, or `INVALID: …` with the structural defect.

use anyhow::{bail, Context};
use simulation::format;

fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        bail!("usage: verifier <preference-file> <matching-file>");
    }

    let prefs_text = std::fs::read_to_string(&args[1])
        .with_context(|| format!("reading preference file '{}'", args[1]))?;
    let instance = format::parse_instance(&prefs_text)
        .with_context(|| format!("parsing preference file '{}'", args[1]))?;

    let matching_text = std::fs::read_to_string(&args[2])
        .with_context(|| format!("reading matching file '{}'", args[2]))?;
    let pairing = format::parse_pairing(&matching_text, instance.n())
        .with_context(|| format!("parsing matching file '{}'", args[2]))?;

    let verdict = verifier::verify(&instance, &pairing);
    println!("{}", format::render_verdict(&verdict));

    Ok(())
}
