pub const P95: f64 = 0.95;
pub const P99: f64 = 0.99;

/// Sorted copy of the samples, ascending.
pub(crate) fn sorted(samples: &[f64]) -> Vec<f64> {
    let mut out = samples.to_vec();
    out.sort_by(f64::total_cmp);
    out
}

/// Median of an ascending slice. Even-length samples average the two middle values.
pub fn median(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return 0.0;
    }

    let mid = n / 2;
    if n % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Nearest-rank percentile without interpolation.
///
/// Picks `sorted[floor(len * fraction)]`, clamped to the last element.
/// Existing reports were produced with this estimator, so it must not be
/// swapped for an interpolating one.
pub fn rank_index(sorted: &[f64], fraction: f64) -> f64 {
    let Some(last) = sorted.last() else {
        return 0.0;
    };

    let idx = (sorted.len() as f64 * fraction) as usize;
    sorted.get(idx).copied().unwrap_or(*last)
}
