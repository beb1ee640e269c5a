// File: crates/hrv-core/src/table.rs
// Summary: CSV table loading and schema validation for per-subject HRV records.

use std::path::Path;

use crate::error::RenderError;

pub const COL_SUBJECT: &str = "Subject";
pub const COL_HRV: &str = "HRV (ms)";
pub const COL_CONDITION: &str = "Stress or not";

/// Columns the header row must contain, after trimming each name.
pub const REQUIRED_COLUMNS: [&str; 3] = [COL_SUBJECT, COL_HRV, COL_CONDITION];

#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub subject: String,
    pub hrv_ms: f64,
    pub condition: String,
}

/// The whole input, loaded into memory and immutable afterwards.
/// Row order is preserved; it fixes the subject axis order downstream.
#[derive(Clone, Debug, Default)]
pub struct InputTable {
    pub records: Vec<Record>,
}

impl InputTable {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RenderError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(RenderError::InputNotFound {
                path: path.to_path_buf(),
            });
        }

        let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;

        let headers: Vec<String> = rdr
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();
        let column = |name: &'static str| -> Result<usize, RenderError> {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or(RenderError::Schema {
                    missing: name,
                    found: headers.clone(),
                })
        };
        let i_subject = column(COL_SUBJECT)?;
        let i_hrv = column(COL_HRV)?;
        let i_condition = column(COL_CONDITION)?;

        let mut records = Vec::new();
        for rec in rdr.records() {
            let rec = rec?;
            let line = rec.position().map(|p| p.line()).unwrap_or(0);
            let raw = rec.get(i_hrv).unwrap_or("").trim();
            let hrv_ms = match raw.parse::<f64>() {
                Ok(v) if v.is_finite() => v,
                _ => {
                    return Err(RenderError::Measurement {
                        line,
                        value: raw.to_string(),
                    })
                }
            };
            records.push(Record {
                subject: rec.get(i_subject).unwrap_or("").trim().to_string(),
                hrv_ms,
                condition: rec.get(i_condition).unwrap_or("").trim().to_string(),
            });
        }
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
