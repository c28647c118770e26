//! The Poisson probability mass function.

/// Probability of observing exactly `k` events given a mean event rate `lambda`.
///
/// Evaluated by the multiplicative recurrence `P(k) = P(k - 1) × λ/k`, seeded with
/// `P(0) = e^−λ`, which sidesteps the factorial and keeps intermediate terms within
/// `f64` range for any rate a scoreline model will plausibly see.
#[inline]
pub fn univariate(k: u8, lambda: f64) -> f64 {
    let mut prob = f64::exp(-lambda);
    for i in 1..=k {
        prob *= lambda / i as f64;
    }
    prob
}
