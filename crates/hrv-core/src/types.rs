// File: crates/hrv-core/src/types.rs
// Summary: Shared constants and types (output size, margins).

/// Dots-per-inch equivalent of the fixed output resolution.
pub const DPI: i32 = 300;
/// Output raster width in pixels (14 in at 300 DPI).
pub const WIDTH: i32 = 4200;
/// Output raster height in pixels (8 in at 300 DPI).
pub const HEIGHT: i32 = 2400;

/// Screen margins around the plot rectangle, in pixels.
/// The right margin doubles as the legend gutter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(260, 720, 220, 260)
    }
}
