// File: crates/hrv-core/src/axis.rs
// Summary: Categorical (subject) and numeric (value) axis models.

/// Horizontal axis: one tick per subject, labeled with its identifier,
/// in first-appearance order.
#[derive(Clone, Debug)]
pub struct CategoryAxis {
    pub label: String,
    pub ticks: Vec<String>,
}

impl CategoryAxis {
    pub fn new(label: impl Into<String>, ticks: Vec<String>) -> Self {
        Self {
            label: label.into(),
            ticks,
        }
    }

    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }
}

/// Vertical axis with an autoscaled value range.
#[derive(Clone, Debug)]
pub struct ValueAxis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl ValueAxis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        let mut a = Self {
            label: label.into(),
            min,
            max,
        };
        if (a.max - a.min).abs() < 1e-9 {
            a.max = a.min + 1.0;
        }
        a
    }

    /// Axis covering every finite value with a 5% margin on each side.
    /// Falls back to 0..1 when there is nothing to cover.
    pub fn spanning(label: impl Into<String>, values: &[f64]) -> Self {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for &v in values {
            if v.is_finite() {
                lo = lo.min(v);
                hi = hi.max(v);
            }
        }
        if !lo.is_finite() || !hi.is_finite() {
            return Self::new(label, 0.0, 1.0);
        }
        let margin = (hi - lo) * 0.05;
        Self::new(label, lo - margin, hi + margin)
    }
}
