//! Per-asset evaluation pipeline and sequential batch driver.
//!
//! One call per (asset, cycle): score, classify, compute trade parameters,
//! pick a TP split, confirm. Pure and synchronous; identical inputs and
//! configuration always produce an identical signal. Batch evaluation
//! isolates assets from each other — one failure is recorded and the rest
//! continue.

use thiserror::Error;

use crate::config::ScoringConfig;
use crate::decision::{
    select_tp_strategy, ClassifierInput, ConfirmationGate, StrategyClassifier,
    TradeParameterCalculator,
};
use crate::domain::{
    AssetError, CatalystCategory, Diagnostics, EnrichedAsset, ScoreSet, Signal,
};
use crate::scoring::{aggregate, TechnicalScorer, TrapDetector};

/// Per-asset evaluation failure. Caught at the asset boundary; never crosses
/// to siblings.
#[derive(Debug, Error)]
pub enum EvaluateError {
    #[error(transparent)]
    InvalidAsset(#[from] AssetError),
}

/// Result of a batch: every signal that evaluated cleanly plus a record of
/// every asset that did not. The batch itself never fails.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub signals: Vec<Signal>,
    pub failures: Vec<AssetFailure>,
}

/// One asset's recorded failure, with ticker context for logging.
#[derive(Debug, Clone)]
pub struct AssetFailure {
    pub ticker: String,
    pub reason: String,
}

/// Evaluate a single enriched asset into a signal.
///
/// The price series is validated here (serde construction bypasses any
/// constructor); everything after validation is infallible by design —
/// insufficient history degrades scores, a degenerate series yields
/// reference-only output.
pub fn evaluate_asset(
    asset: &EnrichedAsset,
    config: &ScoringConfig,
) -> Result<Signal, EvaluateError> {
    asset.validate()?;

    let technical = TechnicalScorer::new(&config.technical).score(&asset.prices);
    let trap = TrapDetector::new(&config.trap).score(&asset.prices);
    let confidence = aggregate(technical.score, trap.score, asset.macro_score);

    let scores = ScoreSet::new(
        technical.score,
        trap.score,
        asset.macro_score,
        asset.sentiment_score,
        confidence,
    );

    let catalyst_present = asset.has_catalyst();
    let (strategy, direction) = StrategyClassifier::new(&config.strategy).classify(
        &ClassifierInput {
            technical: scores.technical,
            trap: scores.trap,
            macro_score: scores.macro_score,
            sentiment: scores.sentiment,
            catalyst_present,
            net_adjustment: technical.net_adjustment,
        },
    );

    let trade_parameters =
        TradeParameterCalculator::new(&config.risk, config.confirmation.min_risk_reward)
            .calculate(&asset.prices, direction);

    let actionable = direction.is_actionable()
        && trade_parameters.is_some_and(|p| !p.reference_only);
    let tp_strategy = select_tp_strategy(confidence, actionable);

    let verdict = ConfirmationGate::new(&config.confirmation, &config.strategy).evaluate(
        strategy,
        &scores,
        trade_parameters.as_ref(),
        catalyst_present,
    );

    Ok(Signal {
        ticker: asset.ticker.clone(),
        source: asset.source.clone(),
        asset_type: asset.asset_type,
        strategy,
        direction,
        scores,
        trade_parameters,
        tp_strategy,
        catalyst_category: CatalystCategory::classify(&asset.catalyst),
        catalyst_summary: asset.catalyst.clone(),
        confirmed: verdict.confirmed,
        reasoning: verdict.reasoning,
        diagnostics: Diagnostics {
            trap_mode: trap.mode,
            trap_degraded: trap.degraded,
            technical_degraded: technical.degraded(),
            golden_cross: technical.golden_cross,
        },
    })
}

/// Evaluate a batch sequentially with per-asset isolation.
///
/// The parallel variant lives in the runner crate; the core stays free of
/// thread-pool concerns.
pub fn evaluate_batch(assets: &[EnrichedAsset], config: &ScoringConfig) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();
    for asset in assets {
        match evaluate_asset(asset, config) {
            Ok(signal) => outcome.signals.push(signal),
            Err(e) => outcome.failures.push(AssetFailure {
                ticker: asset.ticker.clone(),
                reason: e.to_string(),
            }),
        }
    }
    outcome
}
