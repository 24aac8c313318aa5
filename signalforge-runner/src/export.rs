//! Signal export — the 20-column row shape as CSV, plus full-fidelity JSON.
//!
//! The CSV rendering follows the original sheet conventions: prices with
//! four decimals below 10 and two otherwise, reference-only levels suffixed
//! `(ref)`, scores as `x/10`, confirmed as YES/NO, absent values as `N/A`.
//! JSON export is the unabridged serde form of the signal for downstream
//! consumers that want numbers instead of rendered cells.
//!
//! The timestamp is supplied by the caller: the export itself never reads a
//! clock, so identical signals always render identical artifacts.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDateTime;

use signalforge_core::domain::{fmt_score, Signal};

/// Column order of the CSV export. Fixed; consumers index by name.
pub const EXPORT_COLUMNS: [&str; 20] = [
    "timestamp",
    "ticker",
    "source",
    "signal",
    "strategy",
    "direction",
    "entry",
    "stop_loss",
    "take_profit_1",
    "take_profit_2",
    "tp_strategy",
    "technical_score",
    "trap_score",
    "macro_score",
    "sentiment_score",
    "confidence_score",
    "catalyst_category",
    "catalyst_summary",
    "confirmed",
    "reasoning",
];

/// Render one signal as its CSV row cells, in `EXPORT_COLUMNS` order.
fn render_row(signal: &Signal, timestamp: &str) -> Vec<String> {
    let (entry, stop, tp1, tp2) = match &signal.trade_parameters {
        Some(p) => (
            fmt_price(p.entry, p.reference_only),
            fmt_price(p.stop_loss, p.reference_only),
            fmt_price(p.take_profit_1, p.reference_only),
            fmt_price(p.take_profit_2, p.reference_only),
        ),
        None => ("N/A".into(), "N/A".into(), "N/A".into(), "N/A".into()),
    };

    vec![
        timestamp.to_string(),
        signal.ticker.clone(),
        signal.source.clone(),
        signal.direction.as_signal_verb().to_string(),
        signal.strategy.to_string(),
        signal.direction.to_string(),
        entry,
        stop,
        tp1,
        tp2,
        signal.tp_strategy.to_string(),
        score_cell(Some(signal.scores.technical)),
        score_cell(Some(signal.scores.trap)),
        score_cell(signal.scores.macro_score),
        score_cell(signal.scores.sentiment),
        score_cell(Some(signal.scores.confidence.display_value())),
        signal.catalyst_category.to_string(),
        signal.catalyst_summary.clone(),
        if signal.confirmed { "YES" } else { "NO" }.to_string(),
        signal.reasoning.clone(),
    ]
}

/// Export signals as CSV with the 20-column header.
pub fn export_csv(signals: &[Signal], timestamp: NaiveDateTime) -> Result<String> {
    let stamp = timestamp.format("%Y-%m-%d %H:%M:%S").to_string();
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(EXPORT_COLUMNS)?;
    for signal in signals {
        wtr.write_record(render_row(signal, &stamp))?;
    }
    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

/// Export signals as pretty JSON (full serde form, no cell rendering).
pub fn export_json(signals: &[Signal]) -> Result<String> {
    serde_json::to_string_pretty(signals).context("failed to serialize signals to JSON")
}

/// Save both artifacts for a batch under `output_dir`:
/// `signals_{timestamp}.csv` and `signals_{timestamp}.json`.
///
/// Returns the two paths written.
pub fn save_signals(
    signals: &[Signal],
    output_dir: &Path,
    timestamp: NaiveDateTime,
) -> Result<(PathBuf, PathBuf)> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output dir: {}", output_dir.display()))?;

    let stem = format!("signals_{}", timestamp.format("%Y%m%d_%H%M%S"));
    let csv_path = output_dir.join(format!("{stem}.csv"));
    let json_path = output_dir.join(format!("{stem}.json"));

    std::fs::write(&csv_path, export_csv(signals, timestamp)?)
        .with_context(|| format!("failed to write {}", csv_path.display()))?;
    std::fs::write(&json_path, export_json(signals)?)
        .with_context(|| format!("failed to write {}", json_path.display()))?;

    Ok((csv_path, json_path))
}

/// Sheet price formatting: four decimals under 10 (forex/crypto territory),
/// two otherwise. Reference-only levels are labeled, not hidden.
fn fmt_price(value: f64, reference_only: bool) -> String {
    let rendered = if value < 10.0 {
        format!("{value:.4}")
    } else {
        format!("{value:.2}")
    };
    if reference_only {
        format!("{rendered} (ref)")
    } else {
        rendered
    }
}

fn score_cell(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}/10", fmt_score(v)),
        None => "N/A".into(),
    }
}
