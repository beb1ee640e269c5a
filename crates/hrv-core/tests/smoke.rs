// File: crates/hrv-core/tests/smoke.rs
// Purpose: End-to-end render smoke test writing a PNG from a small CSV.

use rand::rngs::StdRng;
use rand::SeedableRng;

use hrv_core::{Chart, InputTable, RenderOptions};

const CSV: &str = "\
Subject,HRV (ms),Stress or not
S1,42.0,Yes
S1,44.5,Yes
S1,55.0,No
S1,58.0,No
S2,48.0,Yes
S2,61.0,No
";

#[test]
fn render_smoke_png() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("hrv.csv");
    std::fs::write(&csv, CSV).unwrap();

    let out = dir.path().join("chart.png");
    hrv_core::render_to(&csv, &out).expect("render should succeed");

    let bytes = std::fs::read(&out).expect("output exists");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("png decodes");
    assert_eq!((img.width(), img.height()), (4200, 2400));
}

#[test]
fn render_bytes_without_labels() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("hrv.csv");
    std::fs::write(&csv, CSV).unwrap();

    let table = InputTable::load(&csv).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    let chart = Chart::from_table(&table, &mut rng);

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}
