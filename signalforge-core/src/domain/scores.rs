//! Score types — clamped 0–10 values and the derived confidence.

use serde::{Deserialize, Serialize};

/// Clamp a score into the canonical [0, 10] range. NaN collapses to 0.
pub fn clamp_score(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 10.0)
    }
}

/// Which analysis path the trap detector used for an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrapMode {
    VolumeAware,
    PriceOnly,
}

/// Aggregate confidence, derived by the confidence aggregator — never set
/// directly.
///
/// `partial` marks a confidence computed without a macro score. Confirmation
/// treats partial confidence conservatively: it can never satisfy the Zen
/// path (macro-dependent), only Boost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Confidence {
    pub value: f64,
    pub partial: bool,
}

impl Confidence {
    /// Value rounded to one decimal, for display only. Internal comparisons
    /// always use the unrounded `value`.
    pub fn display_value(&self) -> f64 {
        (self.value * 10.0).round() / 10.0
    }
}

/// The full score set attached to a signal.
///
/// Invariant: every present score is within [0, 10]. Macro and sentiment are
/// optional; their absence is a recorded fact, not a zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSet {
    pub technical: f64,
    pub trap: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macro_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<f64>,
    pub confidence: Confidence,
}

impl ScoreSet {
    pub fn new(
        technical: f64,
        trap: f64,
        macro_score: Option<f64>,
        sentiment: Option<f64>,
        confidence: Confidence,
    ) -> Self {
        Self {
            technical: clamp_score(technical),
            trap: clamp_score(trap),
            macro_score: macro_score.map(clamp_score),
            sentiment: sentiment.map(clamp_score),
            confidence,
        }
    }
}

/// Render a score the way the export and reasoning strings do: integers
/// without a trailing `.0`, fractional values with one decimal.
pub fn fmt_score(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp_score(-3.0), 0.0);
        assert_eq!(clamp_score(12.5), 10.0);
        assert_eq!(clamp_score(7.3), 7.3);
        assert_eq!(clamp_score(f64::NAN), 0.0);
    }

    #[test]
    fn score_set_clamps_all_fields() {
        let s = ScoreSet::new(
            11.0,
            -1.0,
            Some(15.0),
            Some(-2.0),
            Confidence {
                value: 5.0,
                partial: false,
            },
        );
        assert_eq!(s.technical, 10.0);
        assert_eq!(s.trap, 0.0);
        assert_eq!(s.macro_score, Some(10.0));
        assert_eq!(s.sentiment, Some(0.0));
    }

    #[test]
    fn absent_scores_stay_absent() {
        let s = ScoreSet::new(
            5.0,
            5.0,
            None,
            None,
            Confidence {
                value: 5.0,
                partial: true,
            },
        );
        assert_eq!(s.macro_score, None);
        assert_eq!(s.sentiment, None);
    }

    #[test]
    fn confidence_display_rounds_to_one_decimal() {
        let c = Confidence {
            value: 19.0 / 3.0,
            partial: false,
        };
        assert_eq!(c.display_value(), 6.3);
    }

    #[test]
    fn fmt_score_trims_integers() {
        assert_eq!(fmt_score(4.0), "4");
        assert_eq!(fmt_score(6.33), "6.3");
        assert_eq!(fmt_score(10.0), "10");
    }
}
