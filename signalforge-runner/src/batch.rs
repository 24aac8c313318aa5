//! Parallel batch evaluation.
//!
//! The core's `evaluate_asset` is pure and `Send + Sync`, so a batch fans
//! out across the rayon pool with no shared mutable state. Per-asset
//! isolation is preserved: a failed asset is logged and recorded, the rest
//! of the batch is unaffected. Output order follows input order regardless
//! of scheduling.

use rayon::prelude::*;
use tracing::{info, warn};

use signalforge_core::config::ScoringConfig;
use signalforge_core::domain::EnrichedAsset;
use signalforge_core::pipeline::{evaluate_asset, AssetFailure, BatchOutcome};

/// Evaluate a batch of assets in parallel.
pub fn evaluate_parallel(assets: &[EnrichedAsset], config: &ScoringConfig) -> BatchOutcome {
    let results: Vec<_> = assets
        .par_iter()
        .map(|asset| (asset.ticker.clone(), evaluate_asset(asset, config)))
        .collect();

    let mut outcome = BatchOutcome::default();
    for (ticker, result) in results {
        match result {
            Ok(signal) => outcome.signals.push(signal),
            Err(e) => {
                warn!(ticker = %ticker, error = %e, "asset evaluation failed");
                outcome.failures.push(AssetFailure {
                    ticker,
                    reason: e.to_string(),
                });
            }
        }
    }

    info!(
        assets = assets.len(),
        signals = outcome.signals.len(),
        failures = outcome.failures.len(),
        config = %config.fingerprint(),
        "batch evaluated"
    );
    outcome
}
