// File: crates/hrv-core/src/stats.rs
// Summary: Descriptive statistics for a measurement group (mean, median, quartiles, whiskers).

/// Summary of one (subject, condition) group. Computed fresh on each render;
/// never mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupStats {
    pub values: Vec<f64>,
    pub mean: f64,
    pub median: f64,
    pub q1: f64,
    pub q3: f64,
    /// Lowest value within 1.5 IQR below q1.
    pub whisker_lo: f64,
    /// Highest value within 1.5 IQR above q3.
    pub whisker_hi: f64,
}

impl GroupStats {
    /// Returns `None` for an empty group.
    pub fn compute(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let mean = sorted.iter().sum::<f64>() / sorted.len() as f64;
        let q1 = quantile(&sorted, 0.25);
        let median = quantile(&sorted, 0.5);
        let q3 = quantile(&sorted, 0.75);

        let iqr = q3 - q1;
        let lo_fence = q1 - 1.5 * iqr;
        let hi_fence = q3 + 1.5 * iqr;
        let whisker_lo = sorted.iter().copied().find(|v| *v >= lo_fence).unwrap_or(q1);
        let whisker_hi = sorted
            .iter()
            .rev()
            .copied()
            .find(|v| *v <= hi_fence)
            .unwrap_or(q3);

        Some(Self {
            values: values.to_vec(),
            mean,
            median,
            q1,
            q3,
            whisker_lo,
            whisker_hi,
        })
    }

    pub fn count(&self) -> usize {
        self.values.len()
    }
}

/// Quantile of a non-empty, pre-sorted slice using linear interpolation
/// (position `(n - 1) * q`, interpolated between the two neighbors).
/// For q = 0.5 and even counts this averages the two middle values.
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    let pos = (sorted.len() - 1) as f64 * q.clamp(0.0, 1.0);
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}
