//! Average True Range (ATR).
//!
//! True Range: max(high-low, |high-prev_close|, |low-prev_close|).
//! ATR here is the simple moving average of the true range (not Wilder
//! smoothing) — the stop-distance consumer only reads the final value.
//! Lookback: period (TR[0] has no previous close and is excluded).

use crate::domain::PriceBar;

use super::sma::sma;

/// Compute the True Range series from bars.
/// TR[0] is NaN (no previous close).
/// TR[t] = max(high[t]-low[t], |high[t]-close[t-1]|, |low[t]-close[t-1]|).
pub fn true_range(bars: &[PriceBar]) -> Vec<f64> {
    let n = bars.len();
    let mut tr = vec![f64::NAN; n];

    for i in 1..n {
        let h = bars[i].high;
        let l = bars[i].low;
        let pc = bars[i - 1].close;
        tr[i] = (h - l).max((h - pc).abs()).max((l - pc).abs());
    }

    tr
}

/// Compute the ATR series. The first valid value is at index `period`.
pub fn atr(bars: &[PriceBar], period: usize) -> Vec<f64> {
    assert!(period >= 1, "ATR period must be >= 1");
    let n = bars.len();
    if n < period + 1 {
        return vec![f64::NAN; n];
    }

    let tr = true_range(bars);
    // TR[0] is NaN; average the proper true ranges starting at index 1.
    let mut result = vec![f64::NAN; 1];
    result.extend(sma(&tr[1..], period));
    result
}
