//! Relative Strength Index.
//!
//! Simple rolling means (not Wilder smoothing) of gains and losses over a
//! trailing `period`-delta window:
//!
//!   RS  = avg_gain / avg_loss
//!   RSI = 100 - 100 / (1 + RS)
//!
//! The first bar has no delta and contributes a zero gain and zero loss, so
//! the first defined index is period - 1. A zero average loss is replaced by
//! [`RSI_EPSILON`] instead of producing an undefined ratio, so RSI saturates
//! near 100 over loss-free windows.

/// Substituted for the average loss when it is exactly zero.
pub const RSI_EPSILON: f64 = 1e-3;

pub fn rsi(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let n = values.len();
    if period == 0 || n == 0 {
        return vec![None; n];
    }

    let mut gains = Vec::with_capacity(n);
    let mut losses = Vec::with_capacity(n);
    gains.push(0.0);
    losses.push(0.0);
    for i in 1..n {
        let change = values[i] - values[i - 1];
        gains.push(if change > 0.0 { change } else { 0.0 });
        losses.push(if change < 0.0 { -change } else { 0.0 });
    }

    let mut out = Vec::with_capacity(n);
    let mut gain_sum = 0.0;
    let mut loss_sum = 0.0;

    for i in 0..n {
        gain_sum += gains[i];
        loss_sum += losses[i];
        if i >= period {
            gain_sum -= gains[i - period];
            loss_sum -= losses[i - period];
        }

        if i + 1 >= period {
            let avg_gain = gain_sum / period as f64;
            let avg_loss = loss_sum / period as f64;
            let denom = if avg_loss == 0.0 { RSI_EPSILON } else { avg_loss };
            let rs = avg_gain / denom;
            out.push(Some(100.0 - 100.0 / (1.0 + rs)));
        } else {
            out.push(None);
        }
    }

    out
}
