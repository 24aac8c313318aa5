//! Confirmation gate — the final actionability decision.
//!
//! Checks run in a fixed order (confidence, strategy, technical, trap,
//! trade parameters, then strategy-specific tightening); the first unmet
//! condition becomes the reasoning string, so identical inputs always yield
//! identical messages. On success the reasoning names the strategy path and
//! its strongest supporting metric.

use crate::config::{ConfirmationRules, StrategyThresholds};
use crate::domain::{fmt_score, ScoreSet, Strategy, TradeParameters};

/// Outcome of the gate: the verdict plus its deterministic explanation.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub confirmed: bool,
    pub reasoning: String,
}

impl Verdict {
    fn rejected(reasoning: String) -> Self {
        Self {
            confirmed: false,
            reasoning,
        }
    }
}

pub struct ConfirmationGate<'a> {
    rules: &'a ConfirmationRules,
    strategy_thresholds: &'a StrategyThresholds,
}

impl<'a> ConfirmationGate<'a> {
    pub fn new(rules: &'a ConfirmationRules, strategy_thresholds: &'a StrategyThresholds) -> Self {
        Self {
            rules,
            strategy_thresholds,
        }
    }

    pub fn evaluate(
        &self,
        strategy: Strategy,
        scores: &ScoreSet,
        params: Option<&TradeParameters>,
        catalyst_present: bool,
    ) -> Verdict {
        let r = self.rules;

        // Base checks, fixed order. Comparisons use the unrounded confidence;
        // only the message rounds.
        if scores.confidence.value < r.min_confidence {
            return Verdict::rejected(format!(
                "Confidence too low: {:.1}/10 (need ≥{:.1})",
                scores.confidence.display_value(),
                r.min_confidence
            ));
        }
        if !strategy.is_confirmable() {
            return Verdict::rejected(format!(
                "Strategy {strategy} is not eligible for confirmation"
            ));
        }
        if scores.technical < r.min_technical {
            return Verdict::rejected(format!(
                "Technical score too low: {}/10 (need ≥{})",
                fmt_score(scores.technical),
                fmt_score(r.min_technical)
            ));
        }
        if scores.trap > r.max_trap {
            return Verdict::rejected(format!(
                "Trap risk too high: {}/10 (need ≤{})",
                fmt_score(scores.trap),
                fmt_score(r.max_trap)
            ));
        }
        let params = match params {
            Some(p) => p,
            None => return Verdict::rejected("Trade parameters unavailable".into()),
        };

        // Strategy-specific tightening.
        let s = self.strategy_thresholds;
        match strategy {
            Strategy::Boost => {
                if !catalyst_present {
                    return Verdict::rejected("No catalyst detected".into());
                }
                let rr = params.risk_reward();
                if rr < r.min_risk_reward {
                    return Verdict::rejected(format!(
                        "Risk/reward too low: {rr:.1} (need ≥{:.1})",
                        r.min_risk_reward
                    ));
                }
            }
            Strategy::Zen => {
                if scores.technical < s.zen_technical {
                    return Verdict::rejected(format!(
                        "Technical score below Zen threshold: {}/10 (need ≥{})",
                        fmt_score(scores.technical),
                        fmt_score(s.zen_technical)
                    ));
                }
                // A partial confidence (macro absent) can never pass here.
                match scores.macro_score {
                    None => {
                        return Verdict::rejected(format!(
                            "Macro score missing (Zen requires ≥{})",
                            fmt_score(s.zen_macro)
                        ))
                    }
                    Some(m) if m < s.zen_macro => {
                        return Verdict::rejected(format!(
                            "Macro score too low: {}/10 (need ≥{})",
                            fmt_score(m),
                            fmt_score(s.zen_macro)
                        ))
                    }
                    Some(_) => {}
                }
                if scores.trap >= s.zen_trap {
                    return Verdict::rejected(format!(
                        "Trap risk above Zen limit: {}/10 (need <{})",
                        fmt_score(scores.trap),
                        fmt_score(s.zen_trap)
                    ));
                }
            }
            Strategy::Caution | Strategy::Neutral => unreachable!("filtered above"),
        }

        Verdict {
            confirmed: true,
            reasoning: success_reasoning(strategy, scores),
        }
    }
}

/// Name the path and its strongest supporting metric.
fn success_reasoning(strategy: Strategy, scores: &ScoreSet) -> String {
    let (name, value) = match scores.macro_score {
        Some(m) if m > scores.technical => ("macro", m),
        _ => ("technical", scores.technical),
    };
    format!(
        "{strategy} path confirmed; strongest metric: {name} {}/10",
        fmt_score(value)
    )
}
