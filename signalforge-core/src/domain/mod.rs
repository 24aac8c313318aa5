//! Domain types: bars, assets, scores, trade parameters, signals.

pub mod asset;
pub mod bar;
pub mod catalyst;
pub mod scores;
pub mod signal;
pub mod trade;

pub use asset::{AssetError, AssetType, EnrichedAsset};
pub use bar::PriceBar;
pub use catalyst::CatalystCategory;
pub use scores::{clamp_score, fmt_score, Confidence, ScoreSet, TrapMode};
pub use signal::{Diagnostics, Direction, Signal, Strategy};
pub use trade::{TpStrategy, TradeParameters};
