//! Sweep result export
//!
//! Serializes sweep configuration and metrics to JSON for external tooling
//! (the machine-readable replacement for the original plotting step).

use serde::{Deserialize, Serialize};

use crate::metrics::SweepMetrics;
use crate::runner::SweepConfig;

/// Complete sweep output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepExport {
    pub version: String,
    pub config: SweepConfig,
    pub metrics: SweepMetrics,
}

/// Build a complete sweep export
pub fn build_export(config: &SweepConfig, metrics: &SweepMetrics) -> SweepExport {
    SweepExport {
        version: crate::VERSION.to_string(),
        config: config.clone(),
        metrics: metrics.clone(),
    }
}

/// Export sweep data as pretty-printed JSON
pub fn export_json(export: &SweepExport) -> String {
    serde_json::to_string_pretty(export).unwrap_or_default()
}

/// Write export to a file path
pub fn write_to_file(export: &SweepExport, path: &str) -> std::io::Result<()> {
    let json = export_json(export);
    std::fs::write(path, json)
}
