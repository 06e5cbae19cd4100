//! Elementary estimators over price samples.
//!
//! All functions are pure and deterministic: the same input slice in the
//! same order produces bit-identical output.

use num_traits::Float;

/// Neumaier compensated summation.
///
/// Keeps a running compensation term so the low-order bits lost by each
/// addition are recovered, which keeps the mean of 10^6 prices stable to
/// the last few ulps.
pub fn compensated_sum<T: Float>(values: &[T]) -> T {
    let mut sum = T::zero();
    let mut compensation = T::zero();

    for &x in values {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            compensation = compensation + ((sum - t) + x);
        } else {
            compensation = compensation + ((x - t) + sum);
        }
        sum = t;
    }

    sum + compensation
}

/// Arithmetic mean.
///
/// Returns `None` for an empty slice.
pub fn mean<T: Float>(values: &[T]) -> Option<T> {
    if values.is_empty() {
        return None;
    }
    let n = T::from(values.len())?;
    Some(compensated_sum(values) / n)
}

/// Sample standard deviation around a precomputed mean.
///
/// Uses the n−1 (Bessel) denominator, so it is undefined for fewer than
/// two observations and returns `None` there.
pub fn sample_std_dev<T: Float>(values: &[T], mean: T) -> Option<T> {
    match values.len() {
        0 | 1 => None,
        n => {
            let squared: Vec<T> = values
                .iter()
                .map(|&x| {
                    let d = x - mean;
                    d * d
                })
                .collect();
            let denominator = T::from(n - 1)?;
            Some((compensated_sum(&squared) / denominator).sqrt())
        }
    }
}

/// Empirical quantile of sorted data with linear interpolation.
///
/// Hyndman & Fan type 7 (the pandas/NumPy default):
///
/// ```text
/// h = (n - 1) * p
/// q = x[floor(h)] + (h - floor(h)) * (x[floor(h) + 1] - x[floor(h)])
/// ```
///
/// The caller must supply `sorted` in non-decreasing order. Returns `None`
/// when the slice is empty or `p` lies outside `[0, 1]`.
pub fn quantile_linear<T: Float>(sorted: &[T], p: T) -> Option<T> {
    let n = sorted.len();
    if n == 0 || !(p >= T::zero() && p <= T::one()) {
        return None;
    }
    if n == 1 {
        return Some(sorted[0]);
    }

    let h = T::from(n - 1)? * p;
    let lower = h.floor();
    let j = lower.to_usize()?;
    let g = h - lower;

    if j + 1 >= n {
        return Some(sorted[n - 1]);
    }

    Some(sorted[j] + g * (sorted[j + 1] - sorted[j]))
}
