//! Scoring stages: technical indicators, trap detection, confidence.

pub mod confidence;
pub mod technical;
pub mod trap;

pub use confidence::aggregate;
pub use technical::{TechnicalScore, TechnicalScorer};
pub use trap::{TrapDetector, TrapScore};
