// File: crates/hrv-core/src/render.rs
// Summary: End-to-end render contract: load, validate, build the chart, write the PNG.

use std::path::{Path, PathBuf};

use crate::chart::{Chart, RenderOptions};
use crate::error::RenderError;
use crate::table::InputTable;

/// Fixed output filename, overwritten unconditionally on every run.
pub const OUTPUT_FILE: &str = "hrv_stress_plot.png";

/// Render `table_path` to [`OUTPUT_FILE`] in the current directory and
/// return the written path.
pub fn render(table_path: impl AsRef<Path>) -> Result<PathBuf, RenderError> {
    let out = PathBuf::from(OUTPUT_FILE);
    render_to(table_path, &out)?;
    Ok(out)
}

/// Render `table_path` to an explicit PNG path.
///
/// Load and schema validation are the only hard-stop failure points; when
/// they fail the output file is left untouched. Past validation the render
/// always completes (empty groups are simply skipped).
pub fn render_to(
    table_path: impl AsRef<Path>,
    output_png_path: impl AsRef<Path>,
) -> Result<(), RenderError> {
    let table = InputTable::load(table_path)?;
    let mut rng = rand::thread_rng();
    let chart = Chart::from_table(&table, &mut rng);
    chart.render_to_png(&RenderOptions::default(), output_png_path)?;
    Ok(())
}
