//! SignalForge Runner — the batch harness around `signalforge-core`.
//!
//! The core is pure; everything operational lives here: TOML configuration
//! loading with fail-fast validation, JSON input parsing, rayon-parallel
//! batch evaluation with per-asset isolation, structured logging, and
//! CSV/JSON signal export.

pub mod batch;
pub mod config;
pub mod export;
pub mod input;
pub mod logging;
