// File: crates/hrv-core/src/grid.rs
// Summary: Tick layout helpers for the horizontal grid lines and y labels.

/// Tick positions covering [min, max] at a "nice" step
/// (1, 2, or 5 times a power of ten), aiming for about `target` ticks.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let span = (max - min).abs().max(1e-12);
    let raw = span / target.max(1) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let step = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    } * mag;

    let first = (min / step).ceil() * step;
    let mut out = Vec::new();
    let mut v = first;
    while v <= max + step * 1e-9 {
        out.push(v);
        v += step;
    }
    out
}

/// Decimal places needed to print tick values at `step` without noise.
pub fn tick_decimals(step: f64) -> usize {
    if step >= 1.0 || step <= 0.0 {
        0
    } else {
        (-step.log10().floor()) as usize
    }
}
