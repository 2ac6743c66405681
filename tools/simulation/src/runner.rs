//! Scalability sweep runner
//!
//! Times full engine runs over a schedule of growing problem sizes with a
//! fixed number of trials per size. Optionally re-certifies every output
//! through the verifier; a non-stable verdict there is a logic contradiction,
//! surfaced as a hard error rather than a data point.

use std::time::Instant;

use thiserror::Error;
use tracing::{debug, info};

use crate::generator::{trial_seed, InstanceGenerator};
use crate::metrics::{RunSample, SizeMetrics, SweepMetrics};
use matching_engine::MatchingEngine;
use verifier::{verify, Verdict};

/// Sweep configuration
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SweepConfig {
    /// Problem sizes to time, in the order they run
    pub sizes: Vec<usize>,
    /// Trials per size; each trial uses a distinct derived seed
    pub trials: u32,
    /// Base seed for the whole sweep
    pub base_seed: u64,
    /// Re-certify every engine output through the verifier
    pub verify_outputs: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            sizes: vec![50, 100, 200, 400, 800, 1600],
            trials: 5,
            base_seed: 0,
            verify_outputs: true,
        }
    }
}

/// Sweep failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SweepError {
    #[error("sweep has no sizes to run")]
    EmptySchedule,

    #[error("sweep has zero trials per size")]
    ZeroTrials,

    #[error("engine output failed certification at n={n}, trial {trial}: {verdict}")]
    CertificationFailed {
        n: usize,
        trial: u32,
        verdict: String,
    },
}

/// Run the full sweep and aggregate per-size metrics
pub fn run_sweep(config: &SweepConfig) -> Result<SweepMetrics, SweepError> {
    if config.sizes.is_empty() {
        return Err(SweepError::EmptySchedule);
    }
    if config.trials == 0 {
        return Err(SweepError::ZeroTrials);
    }

    let sweep_start = Instant::now();
    let mut sizes = Vec::with_capacity(config.sizes.len());

    for &n in &config.sizes {
        let mut samples = Vec::with_capacity(config.trials as usize);
        for trial in 0..config.trials {
            let seed = trial_seed(config.base_seed, n, trial);
            let instance = InstanceGenerator::new(seed).instance(n);

            let start = Instant::now();
            let outcome = MatchingEngine::new(&instance).run();
            let elapsed_ns = start.elapsed().as_nanos() as u64;

            if config.verify_outputs {
                let verdict = verify(&instance, &outcome.pairing);
                if verdict != Verdict::Stable {
                    return Err(SweepError::CertificationFailed {
                        n,
                        trial,
                        verdict: verdict.to_string(),
                    });
                }
            }

            debug!(n, trial, elapsed_ns, proposals = outcome.proposals, "trial done");
            samples.push(RunSample {
                elapsed_ns,
                proposals: outcome.proposals,
            });
        }

        let metrics = SizeMetrics::from_samples(n, &samples);
        info!(
            n,
            trials = metrics.trials,
            mean_ns = metrics.mean_ns,
            mean_proposals = metrics.mean_proposals,
            "size complete"
        );
        sizes.push(metrics);
    }

    Ok(SweepMetrics {
        sizes,
        total_elapsed_ns: sweep_start.elapsed().as_nanos() as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> SweepConfig {
        SweepConfig {
            sizes: vec![5, 10],
            trials: 3,
            base_seed: 42,
            verify_outputs: true,
        }
    }

    #[test]
    fn test_sweep_produces_one_aggregate_per_size() {
        let metrics = run_sweep(&small_config()).unwrap();
        assert_eq!(metrics.sizes.len(), 2);
        assert_eq!(metrics.sizes[0].n, 5);
        assert_eq!(metrics.sizes[1].n, 10);
        assert!(metrics.sizes.iter().all(|s| s.trials == 3));
    }

    #[test]
    fn test_proposal_counts_respect_quadratic_bound() {
        let metrics = run_sweep(&small_config()).unwrap();
        for size in &metrics.sizes {
            assert!(size.mean_proposals <= (size.n * size.n) as f64);
            assert!(size.mean_proposals >= size.n as f64);
        }
    }

    #[test]
    fn test_empty_schedule_rejected() {
        let config = SweepConfig {
            sizes: vec![],
            ..small_config()
        };
        assert_eq!(run_sweep(&config), Err(SweepError::EmptySchedule));
    }

    #[test]
    fn test_zero_trials_rejected() {
        let config = SweepConfig {
            trials: 0,
            ..small_config()
        };
        assert_eq!(run_sweep(&config), Err(SweepError::ZeroTrials));
    }
}
