//! Signal — the pipeline's immutable output record.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::asset::AssetType;
use super::catalyst::CatalystCategory;
use super::scores::{ScoreSet, TrapMode};
use super::trade::{TpStrategy, TradeParameters};

/// Coarse setup-quality classification, mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Catalyst-driven momentum setup.
    Boost,
    /// High-conviction setup: strong technicals, supportive macro, low trap risk.
    Zen,
    /// Elevated retail sentiment with moderate trap risk.
    Caution,
    Neutral,
}

impl Strategy {
    /// Only Boost and Zen setups can be confirmed as actionable.
    pub fn is_confirmable(&self) -> bool {
        matches!(self, Self::Boost | Self::Zen)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Boost => "Boost",
            Self::Zen => "Zen",
            Self::Caution => "Caution",
            Self::Neutral => "Neutral",
        };
        write!(f, "{label}")
    }
}

/// Directional bias, independent of the strategy label — a Neutral direction
/// can still carry a non-Neutral strategy (watch setups).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Long,
    Short,
    Neutral,
}

impl Direction {
    pub fn is_actionable(&self) -> bool {
        !matches!(self, Self::Neutral)
    }

    /// Export-facing buy/sell/neutral verb.
    pub fn as_signal_verb(&self) -> &'static str {
        match self {
            Self::Long => "Buy",
            Self::Short => "Sell",
            Self::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Long => "Long",
            Self::Short => "Short",
            Self::Neutral => "Neutral",
        };
        write!(f, "{label}")
    }
}

/// How the scores were obtained, carried for audit: which trap path ran and
/// whether any stage degraded on short history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    pub trap_mode: TrapMode,
    pub trap_degraded: bool,
    pub technical_degraded: bool,
    pub golden_cross: bool,
}

/// One evaluated asset's complete, immutable result.
///
/// Created once per (asset, evaluation cycle) and never mutated; export and
/// notification consumers treat it as a value object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signal {
    pub ticker: String,
    pub source: String,
    pub asset_type: AssetType,
    pub strategy: Strategy,
    pub direction: Direction,
    pub scores: ScoreSet,
    /// None when the series could not produce trade levels (degenerate ATR).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade_parameters: Option<TradeParameters>,
    pub tp_strategy: TpStrategy,
    pub catalyst_category: CatalystCategory,
    /// The raw catalyst headline, carried for export/notification.
    pub catalyst_summary: String,
    pub confirmed: bool,
    pub reasoning: String,
    pub diagnostics: Diagnostics,
}
