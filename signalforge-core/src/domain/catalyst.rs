//! Catalyst categorization.
//!
//! The upstream AI tags headlines with a closed category set; this module
//! reproduces that set deterministically from the headline text so export
//! rows are self-contained. Presence checks elsewhere in the pipeline use
//! the raw text, not the category.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed catalyst category set. `None` covers headlines that match no
/// known macro event keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CatalystCategory {
    Fed,
    Earnings,
    Cpi,
    Jobs,
    None,
}

impl CatalystCategory {
    /// Classify a headline by keyword scan, case-insensitive. First matching
    /// category in declaration order wins.
    pub fn classify(headline: &str) -> Self {
        let text = headline.to_lowercase();
        if text.is_empty() {
            return Self::None;
        }
        const KEYWORDS: &[(CatalystCategory, &[&str])] = &[
            (CatalystCategory::Fed, &["fed", "fomc", "rate decision", "powell"]),
            (CatalystCategory::Earnings, &["earnings", "revenue", "guidance", "eps"]),
            (CatalystCategory::Cpi, &["cpi", "inflation", "consumer price"]),
            (CatalystCategory::Jobs, &["jobs", "payroll", "unemployment", "nfp"]),
        ];
        for (category, words) in KEYWORDS {
            if words.iter().any(|w| text.contains(w)) {
                return *category;
            }
        }
        Self::None
    }
}

impl fmt::Display for CatalystCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Fed => "Fed",
            Self::Earnings => "Earnings",
            Self::Cpi => "CPI",
            Self::Jobs => "Jobs",
            Self::None => "None",
        };
        write!(f, "{label}")
    }
}
