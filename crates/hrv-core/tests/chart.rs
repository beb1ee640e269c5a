// File: crates/hrv-core/tests/chart.rs
// Purpose: Validate chart-model construction: subject ordering, offsets,
//          jitter bounds, and threshold placement.

use rand::rngs::StdRng;
use rand::SeedableRng;

use hrv_core::chart::{Chart, CATEGORY_OFFSET, JITTER};
use hrv_core::table::{InputTable, Record};

fn table(rows: &[(&str, f64, &str)]) -> InputTable {
    InputTable {
        records: rows
            .iter()
            .map(|&(subject, hrv_ms, condition)| Record {
                subject: subject.to_string(),
                hrv_ms,
                condition: condition.to_string(),
            })
            .collect(),
    }
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

#[test]
fn subject_axis_follows_first_appearance() {
    let t = table(&[
        ("B", 50.0, "Yes"),
        ("A", 51.0, "No"),
        ("B", 52.0, "No"),
        ("C", 53.0, "Yes"),
        ("A", 54.0, "Yes"),
    ]);
    let chart = Chart::from_table(&t, &mut rng());
    assert_eq!(chart.x_axis.ticks, vec!["B", "A", "C"]);
}

#[test]
fn boxes_sit_at_category_offsets() {
    let t = table(&[
        ("S1", 40.0, "Yes"),
        ("S1", 44.0, "Yes"),
        ("S1", 60.0, "No"),
        ("S1", 64.0, "No"),
    ]);
    let chart = Chart::from_table(&t, &mut rng());
    assert_eq!(chart.boxes.len(), 2);
    assert_eq!(chart.boxes[0].x, -CATEGORY_OFFSET);
    assert_eq!(chart.boxes[0].category, 0);
    assert_eq!(chart.boxes[1].x, CATEGORY_OFFSET);
    assert_eq!(chart.boxes[1].category, 1);
}

#[test]
fn threshold_requires_both_conditions() {
    // X has only "Yes" rows; Y has medians 50 and 70 => midpoint 60.
    let t = table(&[
        ("X", 45.0, "Yes"),
        ("X", 47.0, "Yes"),
        ("Y", 40.0, "Yes"),
        ("Y", 60.0, "Yes"),
        ("Y", 70.0, "No"),
    ]);
    let chart = Chart::from_table(&t, &mut rng());
    assert_eq!(chart.thresholds.len(), 1);
    let m = chart.thresholds[0];
    assert_eq!(m.x, 1.0); // Y's base position, not offset
    assert_eq!(m.y, 60.0);
}

#[test]
fn jitter_is_bounded_and_leaves_y_exact() {
    let values: Vec<f64> = (0..20).map(|i| 40.0 + i as f64).collect();
    let rows: Vec<(&str, f64, &str)> = values.iter().map(|&v| ("S", v, "Yes")).collect();
    let t = table(&rows);
    let chart = Chart::from_table(&t, &mut rng());

    assert_eq!(chart.points.len(), values.len());
    let base = -CATEGORY_OFFSET;
    for p in &chart.points {
        assert!((p.x - base).abs() <= JITTER + 1e-12, "jitter out of bounds");
    }
    let mut ys: Vec<f64> = chart.points.iter().map(|p| p.y).collect();
    ys.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(ys, values);

    // Statistics come from the raw values, untouched by jitter.
    assert_eq!(chart.boxes[0].stats.median, 49.5);
}

#[test]
fn unknown_condition_rows_join_no_group() {
    let t = table(&[("S1", 50.0, "Maybe"), ("S2", 52.0, "Yes")]);
    let chart = Chart::from_table(&t, &mut rng());

    // S1 still claims an axis slot but contributes no glyphs.
    assert_eq!(chart.x_axis.ticks, vec!["S1", "S2"]);
    assert_eq!(chart.boxes.len(), 1);
    assert_eq!(chart.points.len(), 1);
    assert!(chart.thresholds.is_empty());
}

#[test]
fn empty_table_builds_an_empty_chart() {
    let chart = Chart::from_table(&InputTable::default(), &mut rng());
    assert!(chart.x_axis.is_empty());
    assert!(chart.boxes.is_empty());
    assert!(chart.points.is_empty());
    assert!(chart.thresholds.is_empty());
}
