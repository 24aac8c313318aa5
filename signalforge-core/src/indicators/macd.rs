//! Moving Average Convergence Divergence (MACD).
//!
//! MACD line: EMA(fast) - EMA(slow).
//! Signal line: EMA(signal_period) of the MACD line.
//! Lookback: slow + signal_period - 2 for a valid signal value.

use super::ema::ema;

/// The MACD line and its signal line, same length as the input.
#[derive(Debug, Clone)]
pub struct MacdSeries {
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
}

impl MacdSeries {
    /// Last (macd, signal) pair if both are finite.
    pub fn last_pair(&self) -> Option<(f64, f64)> {
        match (self.macd.last(), self.signal.last()) {
            (Some(&m), Some(&s)) if m.is_finite() && s.is_finite() => Some((m, s)),
            _ => None,
        }
    }
}

/// Compute MACD over a close-price series.
pub fn macd(closes: &[f64], fast: usize, slow: usize, signal_period: usize) -> MacdSeries {
    assert!(fast < slow, "MACD fast period must be shorter than slow");
    let fast_ema = ema(closes, fast);
    let slow_ema = ema(closes, slow);

    let macd_line: Vec<f64> = fast_ema
        .iter()
        .zip(&slow_ema)
        .map(|(&f, &s)| f - s)
        .collect();

    // The MACD line has a NaN prefix of slow-1; the signal EMA seeds on the
    // first `signal_period` finite values after it.
    let signal_line = ema_after_warmup(&macd_line, signal_period);

    MacdSeries {
        macd: macd_line,
        signal: signal_line,
    }
}

/// EMA of a series whose head is a NaN warmup prefix: the seed window starts
/// at the first finite value.
fn ema_after_warmup(values: &[f64], period: usize) -> Vec<f64> {
    let start = values.iter().position(|v| v.is_finite());
    match start {
        Some(s) => {
            let mut result = vec![f64::NAN; s];
            result.extend(ema(&values[s..], period));
            result
        }
        None => vec![f64::NAN; values.len()],
    }
}
