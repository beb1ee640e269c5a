// File: crates/hrv-core/tests/schema.rs
// Purpose: Validate load/schema failure semantics — errors are reported and
//          no output file appears.

use hrv_core::RenderError;

#[test]
fn missing_column_reports_schema_error() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("hrv.csv");
    std::fs::write(&csv, "Subject,HRV (ms)\nS1,42.0\n").unwrap();
    let out = dir.path().join("chart.png");

    let err = hrv_core::render_to(&csv, &out).unwrap_err();
    match err {
        RenderError::Schema { missing, found } => {
            assert_eq!(missing, "Stress or not");
            assert_eq!(found, vec!["Subject".to_string(), "HRV (ms)".to_string()]);
        }
        other => panic!("expected schema error, got {other:?}"),
    }
    assert!(!out.exists(), "no output on validation failure");
}

#[test]
fn header_whitespace_is_trimmed() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("hrv.csv");
    std::fs::write(
        &csv,
        "  Subject ,  HRV (ms)  ,   Stress or not \nS1,42.0,Yes\nS1,55.0,No\n",
    )
    .unwrap();
    let out = dir.path().join("chart.png");

    hrv_core::render_to(&csv, &out).expect("padded headers should validate");
    assert!(out.exists());
}

#[test]
fn missing_input_reports_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("chart.png");

    let err = hrv_core::render_to(dir.path().join("nope.csv"), &out).unwrap_err();
    assert!(matches!(err, RenderError::InputNotFound { .. }));
    assert!(!out.exists());
}

#[test]
fn bad_measurement_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("hrv.csv");
    std::fs::write(
        &csv,
        "Subject,HRV (ms),Stress or not\nS1,42.0,Yes\nS1,oops,No\n",
    )
    .unwrap();
    let out = dir.path().join("chart.png");

    let err = hrv_core::render_to(&csv, &out).unwrap_err();
    match err {
        RenderError::Measurement { value, .. } => assert_eq!(value, "oops"),
        other => panic!("expected measurement error, got {other:?}"),
    }
    assert!(!out.exists());
}
