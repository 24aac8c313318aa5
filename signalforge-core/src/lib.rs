//! SignalForge Core — deterministic scoring and decision engine.
//!
//! Converts an enriched asset (ticker + OHLCV history + catalyst headline +
//! AI macro/sentiment scores) into an auditable trading signal:
//! - Technical scoring (RSI, MACD, moving averages)
//! - Volume/price divergence trap detection (ZS-10+)
//! - Confidence aggregation with explicit handling of absent AI scores
//! - Strategy classification with an ordered, first-match-wins rule table
//! - ATR-based trade parameters and risk-based position sizing
//! - Confidence-dependent profit-taking splits
//! - Confirmation gating with deterministic reasoning strings
//!
//! The crate is pure and synchronous: no I/O, no clocks, no network. All
//! thresholds come from one validated [`config::ScoringConfig`].

pub mod config;
pub mod decision;
pub mod domain;
pub mod indicators;
pub mod pipeline;
pub mod scoring;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: pipeline inputs and outputs are Send + Sync.
    ///
    /// Batch evaluation is embarrassingly parallel; the runner crate fans
    /// assets out across a thread pool, so every type crossing that boundary
    /// must be thread-safe. If any type fails this check, the build breaks
    /// immediately.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<domain::PriceBar>();
        require_sync::<domain::PriceBar>();
        require_send::<domain::EnrichedAsset>();
        require_sync::<domain::EnrichedAsset>();
        require_send::<domain::ScoreSet>();
        require_sync::<domain::ScoreSet>();
        require_send::<domain::TradeParameters>();
        require_sync::<domain::TradeParameters>();
        require_send::<domain::Signal>();
        require_sync::<domain::Signal>();

        require_send::<config::ScoringConfig>();
        require_sync::<config::ScoringConfig>();

        require_send::<pipeline::BatchOutcome>();
        require_sync::<pipeline::BatchOutcome>();
        require_send::<pipeline::AssetFailure>();
        require_sync::<pipeline::AssetFailure>();
        require_send::<pipeline::EvaluateError>();
        require_sync::<pipeline::EvaluateError>();
    }
}
