// File: crates/hrv-core/src/theme.rs
// Summary: Fixed visual theme for the stress comparison chart.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    /// Box fill/edge for the "Yes" (stressed) condition.
    pub stressed_fill: skia::Color,
    pub stressed_edge: skia::Color,
    /// Box fill/edge for the "No" (not stressed) condition.
    pub rested_fill: skia::Color,
    pub rested_edge: skia::Color,
    pub median: skia::Color,
    pub mean: skia::Color,
    pub threshold: skia::Color,
    pub point_edge: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        // Orange for "Yes", green for "No" (accessible pairing).
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(178, 180, 180, 188),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 70, 70, 80),
            title: skia::Color::from_argb(255, 20, 20, 30),
            stressed_fill: skia::Color::from_argb(77, 0xe6, 0x7e, 0x22),
            stressed_edge: skia::Color::from_argb(255, 0xe6, 0x7e, 0x22),
            rested_fill: skia::Color::from_argb(77, 0x2e, 0xcc, 0x71),
            rested_edge: skia::Color::from_argb(255, 0x2e, 0xcc, 0x71),
            median: skia::Color::from_argb(255, 10, 10, 10),
            mean: skia::Color::from_argb(255, 40, 70, 220),
            threshold: skia::Color::from_argb(255, 128, 0, 128),
            point_edge: skia::Color::from_argb(255, 128, 128, 134),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(178, 60, 60, 66),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 190, 190, 200),
            title: skia::Color::from_argb(255, 235, 235, 245),
            stressed_fill: skia::Color::from_argb(90, 0xe6, 0x7e, 0x22),
            stressed_edge: skia::Color::from_argb(255, 0xf0, 0x92, 0x3c),
            rested_fill: skia::Color::from_argb(90, 0x2e, 0xcc, 0x71),
            rested_edge: skia::Color::from_argb(255, 0x46, 0xd6, 0x85),
            median: skia::Color::from_argb(255, 240, 240, 245),
            mean: skia::Color::from_argb(255, 110, 140, 255),
            threshold: skia::Color::from_argb(255, 200, 110, 220),
            point_edge: skia::Color::from_argb(255, 150, 150, 158),
        }
    }

    /// Box fill for a condition slot (0 = "Yes", 1 = "No").
    pub fn category_fill(&self, slot: usize) -> skia::Color {
        if slot == 0 {
            self.stressed_fill
        } else {
            self.rested_fill
        }
    }

    /// Box edge (and scatter base color) for a condition slot.
    pub fn category_edge(&self, slot: usize) -> skia::Color {
        if slot == 0 {
            self.stressed_edge
        } else {
            self.rested_edge
        }
    }
}

/// Same color with a replaced alpha channel.
pub fn with_alpha(c: skia::Color, a: u8) -> skia::Color {
    skia::Color::from_argb(a, c.r(), c.g(), c.b())
}
