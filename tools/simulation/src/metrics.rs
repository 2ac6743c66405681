//! Sweep metrics
//!
//! Per-size aggregates over repeated engine runs: wall-clock latency extremes
//! and mean, plus proposal counts for contention analysis.

use serde::{Deserialize, Serialize};

/// One timed engine run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunSample {
    pub elapsed_ns: u64,
    pub proposals: u64,
}

/// Aggregated results for one problem size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeMetrics {
    pub n: usize,
    pub trials: u32,
    pub min_ns: u64,
    pub mean_ns: u64,
    pub max_ns: u64,
    pub mean_proposals: f64,
}

impl SizeMetrics {
    /// Aggregate samples for one size; panics on an empty sample set
    pub fn from_samples(n: usize, samples: &[RunSample]) -> Self {
        assert!(!samples.is_empty(), "at least one trial per size");
        let min_ns = samples.iter().map(|s| s.elapsed_ns).min().unwrap_or(0);
        let max_ns = samples.iter().map(|s| s.elapsed_ns).max().unwrap_or(0);
        let total_ns: u64 = samples.iter().map(|s| s.elapsed_ns).sum();
        let total_proposals: u64 = samples.iter().map(|s| s.proposals).sum();
        Self {
            n,
            trials: samples.len() as u32,
            min_ns,
            mean_ns: total_ns / samples.len() as u64,
            max_ns,
            mean_proposals: total_proposals as f64 / samples.len() as f64,
        }
    }
}

/// Results of a full scalability sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepMetrics {
    pub sizes: Vec<SizeMetrics>,
    pub total_elapsed_ns: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregation() {
        let samples = [
            RunSample {
                elapsed_ns: 100,
                proposals: 4,
            },
            RunSample {
                elapsed_ns: 300,
                proposals: 6,
            },
        ];
        let metrics = SizeMetrics::from_samples(2, &samples);
        assert_eq!(metrics.trials, 2);
        assert_eq!(metrics.min_ns, 100);
        assert_eq!(metrics.mean_ns, 200);
        assert_eq!(metrics.max_ns, 300);
        assert_eq!(metrics.mean_proposals, 5.0);
    }

    #[test]
    #[should_panic(expected = "at least one trial")]
    fn test_empty_samples_panic() {
        SizeMetrics::from_samples(2, &[]);
    }
}
