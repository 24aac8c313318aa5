//! Confidence aggregation.
//!
//! confidence = mean(technical, macro, trap) when macro is present, else
//! mean(technical, trap) tagged partial. Sentiment is informational only and
//! never enters the formula. Comparisons downstream use the unrounded value.

use crate::domain::{clamp_score, Confidence};

pub fn aggregate(technical: f64, trap: f64, macro_score: Option<f64>) -> Confidence {
    match macro_score {
        Some(m) => Confidence {
            value: clamp_score((technical + m + trap) / 3.0),
            partial: false,
        },
        None => Confidence {
            value: clamp_score((technical + trap) / 2.0),
            partial: true,
        },
    }
}
