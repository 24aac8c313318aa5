//! Strategy classification — maps the score set to a strategy label and a
//! directional bias.
//!
//! The rules live in an explicit ordered table evaluated top-to-bottom with
//! first-match-wins semantics, so precedence is visible and testable rather
//! than an accident of nested conditionals. Boost is checked before Zen:
//! when both sets of thresholds are met, a live catalyst on a technically
//! sound setup takes the catalyst-driven label.

use crate::config::StrategyThresholds;
use crate::domain::{Direction, Strategy};

/// Everything the rule table consults.
#[derive(Debug, Clone, Copy)]
pub struct ClassifierInput {
    pub technical: f64,
    pub trap: f64,
    pub macro_score: Option<f64>,
    pub sentiment: Option<f64>,
    pub catalyst_present: bool,
    /// Pre-clamp sum of technical adjustments (sign drives direction).
    pub net_adjustment: f64,
}

type RulePredicate = fn(&ClassifierInput, &StrategyThresholds) -> bool;

/// Ordered rule table. The first rule whose predicate holds determines the
/// strategy; nothing after it is consulted.
const RULES: &[(Strategy, RulePredicate)] = &[
    (Strategy::Boost, |input, t| {
        input.technical >= t.boost_technical && input.catalyst_present
    }),
    (Strategy::Zen, |input, t| {
        input.technical >= t.zen_technical
            && input
                .macro_score
                .is_some_and(|m| m >= t.zen_macro)
            && input.trap < t.zen_trap
    }),
    (Strategy::Caution, |input, t| {
        input
            .sentiment
            .is_some_and(|s| s > t.caution_sentiment)
            && input.trap >= t.caution_trap_low
            && input.trap < t.caution_trap_high
    }),
];

pub struct StrategyClassifier<'a> {
    thresholds: &'a StrategyThresholds,
}

impl<'a> StrategyClassifier<'a> {
    pub fn new(thresholds: &'a StrategyThresholds) -> Self {
        Self { thresholds }
    }

    pub fn classify(&self, input: &ClassifierInput) -> (Strategy, Direction) {
        let strategy = RULES
            .iter()
            .find(|(_, predicate)| predicate(input, self.thresholds))
            .map(|(strategy, _)| *strategy)
            .unwrap_or(Strategy::Neutral);

        (strategy, direction(input))
    }
}

/// Directional bias: requires a catalyst plus a non-zero net technical
/// adjustment. Independent of the strategy label — a Neutral direction can
/// accompany a non-Neutral strategy (watch setup).
fn direction(input: &ClassifierInput) -> Direction {
    if !input.catalyst_present {
        return Direction::Neutral;
    }
    if input.net_adjustment > 0.0 {
        Direction::Long
    } else if input.net_adjustment < 0.0 {
        Direction::Short
    } else {
        Direction::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> ClassifierInput {
        ClassifierInput {
            technical: 5.0,
            trap: 5.0,
            macro_score: None,
            sentiment: None,
            catalyst_present: false,
            net_adjustment: 0.0,
        }
    }

    fn classify(i: &ClassifierInput) -> (Strategy, Direction) {
        let thresholds = StrategyThresholds::default();
        StrategyClassifier::new(&thresholds).classify(i)
    }

    #[test]
    fn zen_requires_all_three_conditions() {
        let i = ClassifierInput {
            technical: 8.5,
            macro_score: Some(7.0),
            trap: 2.0,
            ..input()
        };
        assert_eq!(classify(&i).0, Strategy::Zen);
    }

    #[test]
    fn zen_not_matched_without_macro() {
        let i = ClassifierInput {
            technical: 9.0,
            macro_score: None,
            trap: 1.0,
            ..input()
        };
        assert_eq!(classify(&i).0, Strategy::Neutral);
    }

    #[test]
    fn boost_needs_catalyst() {
        let with = ClassifierInput {
            technical: 6.5,
            catalyst_present: true,
            ..input()
        };
        let without = ClassifierInput {
            technical: 6.5,
            catalyst_present: false,
            ..input()
        };
        assert_eq!(classify(&with).0, Strategy::Boost);
        assert_eq!(classify(&without).0, Strategy::Neutral);
    }

    #[test]
    fn boost_wins_when_both_boost_and_zen_match() {
        // With a catalyst attached, the catalyst-driven label outranks Zen
        // even when the Zen thresholds are also met.
        let i = ClassifierInput {
            technical: 9.0,
            macro_score: Some(7.0),
            trap: 1.0,
            catalyst_present: true,
            ..input()
        };
        assert_eq!(classify(&i).0, Strategy::Boost);
    }

    #[test]
    fn maxed_technical_with_catalyst_classifies_boost_not_zen() {
        let i = ClassifierInput {
            technical: 10.0,
            macro_score: Some(7.0),
            trap: 2.0,
            catalyst_present: true,
            net_adjustment: 7.0,
            ..input()
        };
        let (strategy, direction) = classify(&i);
        assert_eq!(strategy, Strategy::Boost);
        assert_eq!(direction, Direction::Long);
    }

    #[test]
    fn caution_on_hot_sentiment_and_moderate_trap() {
        let i = ClassifierInput {
            sentiment: Some(9.0),
            trap: 5.0,
            ..input()
        };
        assert_eq!(classify(&i).0, Strategy::Caution);

        // Band is half-open: trap exactly at the high bound falls out.
        let at_bound = ClassifierInput { trap: 7.0, ..i };
        assert_eq!(classify(&at_bound).0, Strategy::Neutral);
    }

    #[test]
    fn direction_needs_catalyst_and_adjustment_sign() {
        let long = ClassifierInput {
            catalyst_present: true,
            net_adjustment: 3.5,
            ..input()
        };
        let short = ClassifierInput {
            catalyst_present: true,
            net_adjustment: -2.0,
            ..input()
        };
        let no_catalyst = ClassifierInput {
            net_adjustment: 3.5,
            ..input()
        };
        assert_eq!(classify(&long).1, Direction::Long);
        assert_eq!(classify(&short).1, Direction::Short);
        assert_eq!(classify(&no_catalyst).1, Direction::Neutral);
    }

    #[test]
    fn strategy_and_direction_are_independent() {
        // Zen with no catalyst: strong setup, no directional trigger yet.
        let i = ClassifierInput {
            technical: 8.5,
            macro_score: Some(7.0),
            trap: 2.0,
            net_adjustment: 3.5,
            catalyst_present: false,
            ..input()
        };
        let (strategy, direction) = classify(&i);
        assert_eq!(strategy, Strategy::Zen);
        assert_eq!(direction, Direction::Neutral);
    }
}
