//! Relative Strength Index (RSI).
//!
//! Rolling-mean variant: average gains and average losses are simple moving
//! averages of the last `period` price changes (no Wilder smoothing).
//! RSI = 100 - 100 / (1 + avg_gain / avg_loss)
//! Lookback: period (first value at index `period`).
//! Edge cases: avg_loss == 0 → RSI = 100; avg_gain == 0 → RSI = 0;
//! both zero (flat window) → RSI = 50.

/// Compute the RSI of a close-price series.
pub fn rsi(closes: &[f64], period: usize) -> Vec<f64> {
    assert!(period >= 1, "RSI period must be >= 1");
    let n = closes.len();
    let mut result = vec![f64::NAN; n];

    if n < period + 1 {
        return result;
    }

    let mut gains = vec![0.0; n];
    let mut losses = vec![0.0; n];
    for i in 1..n {
        let change = closes[i] - closes[i - 1];
        if change > 0.0 {
            gains[i] = change;
        } else {
            losses[i] = -change;
        }
    }

    // Rolling sums over the last `period` changes (changes start at index 1).
    let mut gain_sum: f64 = gains[1..=period].iter().sum();
    let mut loss_sum: f64 = losses[1..=period].iter().sum();
    result[period] = compute_rsi(gain_sum / period as f64, loss_sum / period as f64);

    for i in (period + 1)..n {
        gain_sum = gain_sum - gains[i - period] + gains[i];
        loss_sum = loss_sum - losses[i - period] + losses[i];
        result[i] = compute_rsi(gain_sum / period as f64, loss_sum / period as f64);
    }

    result
}

fn compute_rsi(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 && avg_gain == 0.0 {
        50.0 // no movement
    } else if avg_loss == 0.0 {
        100.0
    } else if avg_gain == 0.0 {
        0.0
    } else {
        100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
    }
}
