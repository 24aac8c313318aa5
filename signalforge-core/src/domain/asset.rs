//! EnrichedAsset — the pipeline's input record.
//!
//! Produced upstream by the enrichment collaborator (headline scan + AI
//! scoring + market data retrieval). The pipeline treats it as read-only.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::bar::PriceBar;

/// Coarse asset class, used for labeling and export only — scoring rules do
/// not branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Stock,
    Forex,
    Crypto,
    Index,
}

/// A market-data snapshot annotated with a news catalyst and AI-derived
/// macro/sentiment scores.
///
/// `macro_score` and `sentiment_score` are genuinely optional: the AI
/// collaborator may fail to produce them. Absence propagates through the
/// pipeline (partial confidence, Zen ineligibility) instead of being
/// silently replaced by a sentinel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedAsset {
    pub ticker: String,
    pub asset_type: AssetType,
    /// Where the catalyst headline came from (feed name, scanner tag).
    pub source: String,
    /// Raw catalyst headline text. Empty string means no catalyst.
    #[serde(default)]
    pub catalyst: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macro_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment_score: Option<f64>,
    /// OHLCV history, ascending by date.
    pub prices: Vec<PriceBar>,
}

/// Validation failures for an asset record.
///
/// Serde construction bypasses any constructor, so validation is a method
/// invoked at the pipeline boundary rather than at build time.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("'{ticker}': price series is empty")]
    EmptySeries { ticker: String },

    #[error("'{ticker}': price series is not strictly ascending by date at index {index}")]
    UnorderedSeries { ticker: String, index: usize },

    #[error("'{ticker}': malformed bar at index {index} (NaN or inverted OHLC)")]
    MalformedBar { ticker: String, index: usize },
}

impl EnrichedAsset {
    /// Whether a non-empty catalyst headline is attached.
    pub fn has_catalyst(&self) -> bool {
        !self.catalyst.trim().is_empty()
    }

    /// Validate the price series: non-empty, strictly ascending dates (which
    /// also rules out duplicates), every bar sane.
    pub fn validate(&self) -> Result<(), AssetError> {
        if self.prices.is_empty() {
            return Err(AssetError::EmptySeries {
                ticker: self.ticker.clone(),
            });
        }
        for (i, bar) in self.prices.iter().enumerate() {
            if !bar.is_sane() {
                return Err(AssetError::MalformedBar {
                    ticker: self.ticker.clone(),
                    index: i,
                });
            }
            if i > 0 && bar.date <= self.prices[i - 1].date {
                return Err(AssetError::UnorderedSeries {
                    ticker: self.ticker.clone(),
                    index: i,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn bar(day: u32, close: f64) -> PriceBar {
        PriceBar {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            open: close,
            high: close + 1.0,
            low: close - 1.0,
            close,
            volume: Some(1000.0),
        }
    }

    fn asset(prices: Vec<PriceBar>) -> EnrichedAsset {
        EnrichedAsset {
            ticker: "AAPL".into(),
            asset_type: AssetType::Stock,
            source: "test-feed".into(),
            catalyst: "AAPL beats earnings expectations".into(),
            macro_score: Some(7.0),
            sentiment_score: Some(6.0),
            prices,
        }
    }

    #[test]
    fn valid_series_passes() {
        let a = asset(vec![bar(2, 100.0), bar(3, 101.0), bar(4, 102.0)]);
        assert!(a.validate().is_ok());
    }

    #[test]
    fn empty_series_rejected() {
        let a = asset(vec![]);
        assert!(matches!(a.validate(), Err(AssetError::EmptySeries { .. })));
    }

    #[test]
    fn duplicate_date_rejected() {
        let a = asset(vec![bar(2, 100.0), bar(2, 101.0)]);
        assert!(matches!(
            a.validate(),
            Err(AssetError::UnorderedSeries { index: 1, .. })
        ));
    }

    #[test]
    fn descending_dates_rejected() {
        let a = asset(vec![bar(3, 100.0), bar(2, 101.0)]);
        assert!(matches!(
            a.validate(),
            Err(AssetError::UnorderedSeries { .. })
        ));
    }

    #[test]
    fn malformed_bar_rejected() {
        let mut bad = bar(3, 100.0);
        bad.high = 90.0;
        let a = asset(vec![bar(2, 100.0), bad]);
        assert!(matches!(
            a.validate(),
            Err(AssetError::MalformedBar { index: 1, .. })
        ));
    }

    #[test]
    fn blank_catalyst_is_absent() {
        let mut a = asset(vec![bar(2, 100.0)]);
        a.catalyst = "   ".into();
        assert!(!a.has_catalyst());
    }

    #[test]
    fn deserializes_contract_field_names() {
        let json = r#"{
            "ticker": "EURUSD",
            "assetType": "forex",
            "source": "wire",
            "catalyst": "ECB rate decision",
            "macroScore": 6.5,
            "prices": [{"date":"2024-01-02","open":1.09,"high":1.10,"low":1.08,"close":1.095}]
        }"#;
        let a: EnrichedAsset = serde_json::from_str(json).unwrap();
        assert_eq!(a.asset_type, AssetType::Forex);
        assert_eq!(a.macro_score, Some(6.5));
        assert_eq!(a.sentiment_score, None);
        assert_eq!(a.prices[0].volume, None);
    }
}
