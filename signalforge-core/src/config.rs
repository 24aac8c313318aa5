//! Scoring configuration — every threshold the rules reference, in one
//! versioned, validated structure.
//!
//! Loaded once per batch and read-only for its duration; hot-reload happens
//! between batches by loading a fresh copy. Malformed or out-of-range values
//! fail at load time (`validate`), never mid-batch. The optimizer
//! collaborator mutates copies of this struct and re-validates before use.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Current configuration schema version. Persisted configs with a newer
/// version are rejected on load.
pub const CONFIG_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unsupported config version {found} (max supported: {max})")]
    UnsupportedVersion { found: u32, max: u32 },

    #[error("invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        field,
        reason: reason.into(),
    }
}

/// Technical scorer thresholds and adjustment weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TechnicalThresholds {
    pub rsi_period: usize,
    pub rsi_overbought: f64,
    pub rsi_oversold: f64,
    pub rsi_neutral_low: f64,
    pub rsi_neutral_high: f64,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    pub ma_short: usize,
    pub ma_long: usize,
    /// Bars to scan back for a short-over-long MA crossover.
    pub golden_cross_lookback: usize,
    pub rsi_extreme_weight: f64,
    pub rsi_neutral_weight: f64,
    pub macd_weight: f64,
    pub trend_weight: f64,
    pub golden_cross_weight: f64,
    pub price_above_ma_weight: f64,
}

impl Default for TechnicalThresholds {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            rsi_overbought: 70.0,
            rsi_oversold: 30.0,
            rsi_neutral_low: 40.0,
            rsi_neutral_high: 60.0,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            ma_short: 50,
            ma_long: 200,
            golden_cross_lookback: 5,
            rsi_extreme_weight: 2.0,
            rsi_neutral_weight: 1.0,
            macd_weight: 1.5,
            trend_weight: 1.0,
            golden_cross_weight: 1.5,
            price_above_ma_weight: 0.5,
        }
    }
}

/// Trap detector (ZS-10+) cutoffs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrapThresholds {
    pub recent_window: usize,
    pub baseline_window: usize,
    /// Volume ratio at or below which a strong move is a high-risk trap.
    pub collapse_ratio: f64,
    /// Volume ratio at or below which a moderate move is suspect.
    pub soft_ratio: f64,
    /// Volume ratio at or above which a move counts as confirmed.
    pub surge_ratio: f64,
    pub strong_move: f64,
    pub moderate_move: f64,
    pub mild_move: f64,
    pub volatility_window: usize,
    pub high_volatility: f64,
    pub low_volatility: f64,
    pub max_bar_move: f64,
}

impl Default for TrapThresholds {
    fn default() -> Self {
        Self {
            recent_window: 5,
            baseline_window: 20,
            collapse_ratio: 0.40,
            soft_ratio: 0.80,
            surge_ratio: 1.50,
            strong_move: 0.03,
            moderate_move: 0.02,
            mild_move: 0.01,
            volatility_window: 10,
            high_volatility: 0.05,
            low_volatility: 0.02,
            max_bar_move: 0.03,
        }
    }
}

/// Strategy classification thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyThresholds {
    pub zen_technical: f64,
    pub zen_macro: f64,
    pub zen_trap: f64,
    pub boost_technical: f64,
    pub caution_sentiment: f64,
    pub caution_trap_low: f64,
    pub caution_trap_high: f64,
}

impl Default for StrategyThresholds {
    fn default() -> Self {
        Self {
            zen_technical: 8.0,
            zen_macro: 6.0,
            zen_trap: 4.0,
            boost_technical: 6.0,
            caution_sentiment: 8.0,
            caution_trap_low: 4.0,
            caution_trap_high: 7.0,
        }
    }
}

/// Confirmation gate rule parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfirmationRules {
    pub min_confidence: f64,
    pub min_technical: f64,
    pub max_trap: f64,
    pub min_risk_reward: f64,
}

impl Default for ConfirmationRules {
    fn default() -> Self {
        Self {
            min_confidence: 7.0,
            min_technical: 6.0,
            max_trap: 5.0,
            min_risk_reward: 2.0,
        }
    }
}

/// Risk and trade-parameter settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    pub atr_period: usize,
    pub atr_multiplier: f64,
    pub tp1_risk_reward: f64,
    pub tp2_risk_reward: f64,
    /// Fraction of account equity risked per trade (0.015 = 1.5%).
    pub risk_per_trade: f64,
    pub account_equity: f64,
    pub min_account_equity: f64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            atr_period: 14,
            atr_multiplier: 2.0,
            tp1_risk_reward: 2.0,
            tp2_risk_reward: 3.0,
            risk_per_trade: 0.015,
            account_equity: 10_000.0,
            min_account_equity: 1_000.0,
        }
    }
}

/// The complete scoring/decision configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub version: u32,
    pub technical: TechnicalThresholds,
    pub trap: TrapThresholds,
    pub strategy: StrategyThresholds,
    pub confirmation: ConfirmationRules,
    pub risk: RiskConfig,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            technical: TechnicalThresholds::default(),
            trap: TrapThresholds::default(),
            strategy: StrategyThresholds::default(),
            confirmation: ConfirmationRules::default(),
            risk: RiskConfig::default(),
        }
    }
}

impl ScoringConfig {
    /// Validate every threshold. Call once at load time; an `Err` aborts
    /// startup before any batch runs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version > CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: self.version,
                max: CONFIG_VERSION,
            });
        }

        let t = &self.technical;
        if t.rsi_period == 0 {
            return Err(invalid("technical.rsi_period", "must be >= 1"));
        }
        if !(t.rsi_oversold < t.rsi_neutral_low
            && t.rsi_neutral_low < t.rsi_neutral_high
            && t.rsi_neutral_high < t.rsi_overbought)
        {
            return Err(invalid(
                "technical.rsi_*",
                "expected oversold < neutral_low < neutral_high < overbought",
            ));
        }
        if t.macd_fast == 0 || t.macd_fast >= t.macd_slow {
            return Err(invalid("technical.macd_fast", "must be in 1..macd_slow"));
        }
        if t.macd_signal == 0 {
            return Err(invalid("technical.macd_signal", "must be >= 1"));
        }
        if t.ma_short == 0 || t.ma_short >= t.ma_long {
            return Err(invalid("technical.ma_short", "must be in 1..ma_long"));
        }
        if t.golden_cross_lookback == 0 {
            return Err(invalid("technical.golden_cross_lookback", "must be >= 1"));
        }

        let tr = &self.trap;
        if tr.recent_window == 0 || tr.recent_window >= tr.baseline_window {
            return Err(invalid(
                "trap.recent_window",
                "must be in 1..baseline_window",
            ));
        }
        if !(tr.collapse_ratio > 0.0
            && tr.collapse_ratio < tr.soft_ratio
            && tr.soft_ratio < tr.surge_ratio)
        {
            return Err(invalid(
                "trap.*_ratio",
                "expected 0 < collapse < soft < surge",
            ));
        }
        if !(tr.mild_move > 0.0 && tr.mild_move < tr.moderate_move && tr.moderate_move < tr.strong_move)
        {
            return Err(invalid(
                "trap.*_move",
                "expected 0 < mild < moderate < strong",
            ));
        }
        if tr.volatility_window < 2 {
            return Err(invalid("trap.volatility_window", "must be >= 2"));
        }
        if !(tr.low_volatility > 0.0 && tr.low_volatility < tr.high_volatility) {
            return Err(invalid(
                "trap.low_volatility",
                "must be in (0, high_volatility)",
            ));
        }

        let s = &self.strategy;
        for (field, value) in [
            ("strategy.zen_technical", s.zen_technical),
            ("strategy.zen_macro", s.zen_macro),
            ("strategy.zen_trap", s.zen_trap),
            ("strategy.boost_technical", s.boost_technical),
            ("strategy.caution_sentiment", s.caution_sentiment),
        ] {
            if !(0.0..=10.0).contains(&value) {
                return Err(invalid(field, "must be within [0, 10]"));
            }
        }
        if !(s.caution_trap_low < s.caution_trap_high) {
            return Err(invalid(
                "strategy.caution_trap_low",
                "must be below caution_trap_high",
            ));
        }

        let c = &self.confirmation;
        if !(0.0..=10.0).contains(&c.min_confidence) {
            return Err(invalid("confirmation.min_confidence", "must be within [0, 10]"));
        }
        if !(0.0..=10.0).contains(&c.min_technical) {
            return Err(invalid("confirmation.min_technical", "must be within [0, 10]"));
        }
        if !(0.0..=10.0).contains(&c.max_trap) {
            return Err(invalid("confirmation.max_trap", "must be within [0, 10]"));
        }
        if c.min_risk_reward < 1.0 {
            return Err(invalid("confirmation.min_risk_reward", "must be >= 1.0"));
        }

        let r = &self.risk;
        if r.atr_period == 0 {
            return Err(invalid("risk.atr_period", "must be >= 1"));
        }
        if r.atr_multiplier <= 0.0 {
            return Err(invalid("risk.atr_multiplier", "must be > 0"));
        }
        if !(r.tp1_risk_reward > 0.0 && r.tp1_risk_reward <= r.tp2_risk_reward) {
            return Err(invalid(
                "risk.tp1_risk_reward",
                "must be > 0 and <= tp2_risk_reward",
            ));
        }
        if !(r.risk_per_trade > 0.0 && r.risk_per_trade < 1.0) {
            return Err(invalid("risk.risk_per_trade", "must be in (0, 1)"));
        }
        if r.min_account_equity <= 0.0 || r.account_equity < r.min_account_equity {
            return Err(invalid(
                "risk.account_equity",
                "must be >= min_account_equity (> 0)",
            ));
        }

        Ok(())
    }

    /// Content-addressed fingerprint of this configuration.
    ///
    /// Two identical configs share a fingerprint, so batch results can be
    /// attributed to the exact thresholds that produced them.
    pub fn fingerprint(&self) -> String {
        let json = serde_json::to_string(self).expect("ScoringConfig serialization failed");
        blake3::hash(json.as_bytes()).to_hex().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(ScoringConfig::default().validate().is_ok());
    }

    #[test]
    fn newer_version_rejected() {
        let config = ScoringConfig {
            version: CONFIG_VERSION + 1,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn inverted_rsi_bands_rejected() {
        let mut config = ScoringConfig::default();
        config.technical.rsi_oversold = 80.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn inverted_trap_ratios_rejected() {
        let mut config = ScoringConfig::default();
        config.trap.surge_ratio = 0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_risk_per_trade_rejected() {
        let mut config = ScoringConfig::default();
        config.risk.risk_per_trade = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn equity_below_minimum_rejected() {
        let mut config = ScoringConfig::default();
        config.risk.account_equity = 500.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn fingerprint_is_deterministic_and_sensitive() {
        let a = ScoringConfig::default();
        let mut b = ScoringConfig::default();
        assert_eq!(a.fingerprint(), b.fingerprint());
        b.confirmation.min_confidence = 6.5;
        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let parsed: ScoringConfig = toml::from_str(
            r#"
            [confirmation]
            min_confidence = 7.5
            "#,
        )
        .unwrap();
        assert_eq!(parsed.confirmation.min_confidence, 7.5);
        assert_eq!(parsed.risk.atr_period, 14);
        assert!(parsed.validate().is_ok());
    }
}
