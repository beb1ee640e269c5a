// File: crates/hrv-core/src/lib.rs
// Summary: Core library entry point; exports table loading, grouping, statistics, and chart rendering.

pub mod axis;
pub mod chart;
pub mod error;
pub mod grid;
pub mod group;
pub mod render;
pub mod scale;
pub mod stats;
pub mod table;
pub mod text;
pub mod theme;
pub mod types;

pub use chart::{Chart, RenderOptions};
pub use error::RenderError;
pub use render::{render, render_to, OUTPUT_FILE};
pub use stats::GroupStats;
pub use table::InputTable;
pub use theme::Theme;
