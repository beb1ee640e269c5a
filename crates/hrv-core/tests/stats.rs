// File: crates/hrv-core/tests/stats.rs
// Purpose: Validate median/mean/quartile/whisker computation.

use hrv_core::stats::{quantile, GroupStats};

#[test]
fn median_and_mean_for_symmetric_set() {
    // Even count: median averages the two middle values and, for this
    // symmetric set, equals the mean by construction.
    let s = GroupStats::compute(&[40.0, 42.0, 44.0, 46.0]).unwrap();
    assert_eq!(s.median, 43.0);
    assert_eq!(s.mean, 43.0);
}

#[test]
fn quartiles_interpolate_linearly() {
    let sorted = [1.0, 2.0, 3.0, 4.0];
    assert!((quantile(&sorted, 0.25) - 1.75).abs() < 1e-12);
    assert!((quantile(&sorted, 0.5) - 2.5).abs() < 1e-12);
    assert!((quantile(&sorted, 0.75) - 3.25).abs() < 1e-12);
}

#[test]
fn whiskers_clamp_to_fences() {
    // q1 = 2, q3 = 4, IQR = 2 => fences at -1 and 7; 100 is an outlier.
    let s = GroupStats::compute(&[1.0, 2.0, 3.0, 4.0, 100.0]).unwrap();
    assert_eq!(s.whisker_lo, 1.0);
    assert_eq!(s.whisker_hi, 4.0);
}

#[test]
fn single_value_group() {
    let s = GroupStats::compute(&[50.0]).unwrap();
    assert_eq!(s.median, 50.0);
    assert_eq!(s.mean, 50.0);
    assert_eq!(s.q1, 50.0);
    assert_eq!(s.q3, 50.0);
    assert_eq!(s.whisker_lo, 50.0);
    assert_eq!(s.whisker_hi, 50.0);
}

#[test]
fn empty_group_yields_none() {
    assert!(GroupStats::compute(&[]).is_none());
}
