//! Simple Moving Average.
//!
//! SMA(n) at index i is the arithmetic mean of the trailing n values.
//! Warmup: the first n-1 entries are `None`.

/// Compute SMA over `values` with a running window sum (one pass).
pub fn sma(values: &[f64], period: usize) -> Vec<Option<f64>> {
    if period == 0 {
        return vec![None; values.len()];
    }

    let mut out = Vec::with_capacity(values.len());
    let mut sum = 0.0;

    for (i, &value) in values.iter().enumerate() {
        sum += value;
        if i >= period {
            sum -= values[i - period];
        }
        if i + 1 >= period {
            out.push(Some(sum / period as f64));
        } else {
            out.push(None);
        }
    }

    out
}
