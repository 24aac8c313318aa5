//! Decision stages: strategy classification, trade parameters, TP split,
//! confirmation.

pub mod classifier;
pub mod confirmation;
pub mod tp_select;
pub mod trade_params;

pub use classifier::{ClassifierInput, StrategyClassifier};
pub use confirmation::{ConfirmationGate, Verdict};
pub use tp_select::select_tp_strategy;
pub use trade_params::TradeParameterCalculator;
