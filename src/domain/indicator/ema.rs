//! Exponential Moving Average.
//!
//! k = 2/(n+1), seeded with the first value, then
//! EMA[i] = V[i]*k + EMA[i-1]*(1-k).
//!
//! The first-value seed (rather than an SMA warm-up) shifts early values
//! versus the textbook formulation; every downstream MACD and signal
//! computation depends on it. Defined from index 0.

/// Compute EMA over `values`. Empty input or period 0 yields an empty vec.
pub fn ema(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.is_empty() {
        return Vec::new();
    }

    let k = 2.0 / (period as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len());
    let mut current = values[0];
    out.push(current);

    for &value in &values[1..] {
        current = value * k + current * (1.0 - k);
        out.push(current);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn ema_seeded_with_first_value() {
        let out = ema(&[42.0, 50.0, 60.0], 3);
        assert_relative_eq!(out[0], 42.0);
    }

    #[test]
    fn ema_recursive_update() {
        let out = ema(&[10.0, 20.0, 30.0], 3);
        let k = 2.0 / 4.0;
        let e1 = 20.0 * k + 10.0 * (1.0 - k);
        let e2 = 30.0 * k + e1 * (1.0 - k);
        assert_relative_eq!(out[1], e1);
        assert_relative_eq!(out[2], e2);
    }

    #[test]
    fn ema_seed_differs_from_sma_seed() {
        // With an SMA warm-up the index-2 value of a 3-period EMA would
        // start from mean(10,20,30) = 20; the first-value seed does not.
        let out = ema(&[10.0, 20.0, 30.0], 3);
        assert!((out[2] - 20.0).abs() > 1.0);
    }

    #[test]
    fn ema_constant_input_is_constant() {
        let out = ema(&[100.0; 10], 5);
        for v in out {
            assert_relative_eq!(v, 100.0);
        }
    }

    #[test]
    fn ema_period_1_echoes_input() {
        let out = ema(&[10.0, 20.0, 30.0], 1);
        assert_eq!(out, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn ema_empty_input() {
        assert!(ema(&[], 12).is_empty());
    }

    #[test]
    fn ema_period_0() {
        assert!(ema(&[1.0, 2.0], 0).is_empty());
    }
}
