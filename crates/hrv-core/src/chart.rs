// File: crates/hrv-core/src/chart.rs
// Summary: Chart model (box glyphs, jittered scatter, threshold markers) and headless PNG
//          rendering on a Skia CPU raster surface.

use anyhow::Result;
use rand::Rng;
use skia_safe as skia;

use crate::axis::{CategoryAxis, ValueAxis};
use crate::grid::{nice_ticks, tick_decimals};
use crate::group::{group_values, subjects_in_order, CATEGORY_ORDER};
use crate::scale::LinearScale;
use crate::stats::GroupStats;
use crate::table::InputTable;
use crate::text::TextShaper;
use crate::theme::{with_alpha, Theme};
use crate::types::{Insets, HEIGHT, WIDTH};

/// Horizontal offset of each condition box from the subject base position.
pub const CATEGORY_OFFSET: f64 = 0.2;
/// Box width in logical units.
pub const BOX_WIDTH: f64 = 0.15;
/// Maximum magnitude of the uniform scatter jitter (a fifth of the offset spacing).
pub const JITTER: f64 = 0.04;

const TITLE_SIZE: f32 = 56.0;
const LABEL_SIZE: f32 = 40.0;
const TICK_SIZE: f32 = 32.0;
const POINT_RADIUS: f32 = 12.0;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

/// One box-and-whisker glyph for a (subject, condition) group.
#[derive(Clone, Debug)]
pub struct BoxGlyph {
    /// Box center in logical units (subject index plus condition offset).
    pub x: f64,
    /// Condition slot: index into `CATEGORY_ORDER`.
    pub category: usize,
    pub stats: GroupStats,
}

/// One scatter point. `x` already carries its jitter; `y` is the exact measurement.
#[derive(Clone, Copy, Debug)]
pub struct PointGlyph {
    pub x: f64,
    pub y: f64,
    pub category: usize,
}

/// Midpoint of the two condition medians for one subject, drawn at the
/// subject base position (no offset).
#[derive(Clone, Copy, Debug)]
pub struct ThresholdGlyph {
    pub x: f64,
    pub y: f64,
}

/// Explicit chart model: every drawing instruction is resolved here and the
/// whole object is passed by reference through the rendering steps. There is
/// no ambient "current figure" state.
pub struct Chart {
    pub title: String,
    pub x_axis: CategoryAxis,
    pub y_axis: ValueAxis,
    pub boxes: Vec<BoxGlyph>,
    pub points: Vec<PointGlyph>,
    pub thresholds: Vec<ThresholdGlyph>,
}

impl Chart {
    /// Build the full chart model from a validated table.
    ///
    /// Jitter perturbs scatter x positions only; every statistic is computed
    /// from the raw measurement values. Empty groups contribute nothing and
    /// never produce an error.
    pub fn from_table(table: &InputTable, rng: &mut impl Rng) -> Self {
        let subjects = subjects_in_order(table);
        let mut boxes = Vec::new();
        let mut points = Vec::new();
        let mut thresholds = Vec::new();
        let mut y_values: Vec<f64> = Vec::new();

        for (i, subject) in subjects.iter().enumerate() {
            let mut medians = [None, None];
            for (slot, condition) in CATEGORY_ORDER.iter().enumerate() {
                let values = group_values(table, subject, condition);
                let Some(stats) = GroupStats::compute(&values) else {
                    continue;
                };
                let x = if slot == 0 {
                    i as f64 - CATEGORY_OFFSET
                } else {
                    i as f64 + CATEGORY_OFFSET
                };
                medians[slot] = Some(stats.median);
                y_values.push(stats.whisker_lo);
                y_values.push(stats.whisker_hi);
                for &v in &values {
                    points.push(PointGlyph {
                        x: x + rng.gen_range(-JITTER..=JITTER),
                        y: v,
                        category: slot,
                    });
                    y_values.push(v);
                }
                boxes.push(BoxGlyph {
                    x,
                    category: slot,
                    stats,
                });
            }
            // Threshold marker only when both conditions have data.
            if let (Some(a), Some(b)) = (medians[0], medians[1]) {
                let midpoint = (a + b) / 2.0;
                y_values.push(midpoint);
                thresholds.push(ThresholdGlyph {
                    x: i as f64,
                    y: midpoint,
                });
            }
        }

        Self {
            title: "HRV Levels by Subject: Threshold & Distribution".to_string(),
            x_axis: CategoryAxis::new("Subject ID", subjects),
            y_axis: ValueAxis::spanning("HRV (ms)", &y_values),
            boxes,
            points,
            thresholds,
        }
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let data = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, data)?;
        Ok(())
    }

    /// Render the chart and return the encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(opts.theme.background);

        let l = opts.insets.left as i32;
        let r = opts.width - opts.insets.right as i32;
        let t = opts.insets.top as i32;
        let b = opts.height - opts.insets.bottom as i32;

        // Logical x range leaves half a slot of padding on each side.
        let n = self.x_axis.len().max(1);
        let sx = LinearScale::new(l as f32, r as f32, -0.5, n as f64 - 0.5);
        let sy = LinearScale::new(b as f32, t as f32, self.y_axis.min, self.y_axis.max);

        draw_grid(canvas, &opts.theme, l, r, &sy, &self.y_axis);
        draw_axes(canvas, &opts.theme, l, t, r, b);

        for g in &self.boxes {
            draw_box(canvas, &opts.theme, &sx, &sy, g);
        }
        for p in &self.points {
            draw_point(canvas, &opts.theme, &sx, &sy, p);
        }
        for m in &self.thresholds {
            draw_threshold(canvas, &opts.theme, &sx, &sy, m);
        }

        if opts.draw_labels {
            let shaper = TextShaper::new();
            draw_labels(canvas, &shaper, opts, self, &sx, &sy, l, t, r, b);
            draw_legend(canvas, &shaper, &opts.theme, r, t);
        }

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }
}

// ---- drawing helpers ---------------------------------------------------------

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Stroke);
    p.set_stroke_width(width);
    p.set_color(color);
    p
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Fill);
    p.set_color(color);
    p
}

fn draw_grid(
    canvas: &skia::Canvas,
    theme: &Theme,
    l: i32,
    r: i32,
    sy: &LinearScale,
    y_axis: &ValueAxis,
) {
    let mut paint = stroke_paint(theme.grid, 2.0);
    if let Some(dash) = skia::dash_path_effect::new(&[14.0, 14.0], 0.0) {
        paint.set_path_effect(dash);
    }
    for v in nice_ticks(y_axis.min, y_axis.max, 8) {
        let y = sy.to_px(v);
        canvas.draw_line((l as f32, y), (r as f32, y), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, theme: &Theme, l: i32, t: i32, r: i32, b: i32) {
    let paint = stroke_paint(theme.axis_line, 3.0);
    canvas.draw_line((l as f32, b as f32), (r as f32, b as f32), &paint);
    canvas.draw_line((l as f32, t as f32), (l as f32, b as f32), &paint);
}

fn draw_box(canvas: &skia::Canvas, theme: &Theme, sx: &LinearScale, sy: &LinearScale, g: &BoxGlyph) {
    let half = BOX_WIDTH / 2.0;
    let x0 = sx.to_px(g.x - half);
    let x1 = sx.to_px(g.x + half);
    let xc = sx.to_px(g.x);
    let s = &g.stats;
    let y_q1 = sy.to_px(s.q1);
    let y_q3 = sy.to_px(s.q3);
    let y_lo = sy.to_px(s.whisker_lo);
    let y_hi = sy.to_px(s.whisker_hi);

    let edge = stroke_paint(theme.category_edge(g.category), 3.0);
    let fill = fill_paint(theme.category_fill(g.category));

    // IQR box
    let rect = skia::Rect::from_ltrb(x0, y_q3.min(y_q1), x1, y_q3.max(y_q1));
    canvas.draw_rect(rect, &fill);
    canvas.draw_rect(rect, &edge);

    // Whiskers to the most extreme values within the fences, with caps
    canvas.draw_line((xc, y_q3), (xc, y_hi), &edge);
    canvas.draw_line((xc, y_q1), (xc, y_lo), &edge);
    let cap = (x1 - x0) * 0.25;
    canvas.draw_line((xc - cap, y_hi), (xc + cap, y_hi), &edge);
    canvas.draw_line((xc - cap, y_lo), (xc + cap, y_lo), &edge);

    // Median: solid line across the box
    let y_med = sy.to_px(s.median);
    let med = stroke_paint(theme.median, 5.0);
    canvas.draw_line((x0, y_med), (x1, y_med), &med);

    // Mean: dashed line across the box
    let y_mean = sy.to_px(s.mean);
    let mut mean = stroke_paint(theme.mean, 4.0);
    if let Some(dash) = skia::dash_path_effect::new(&[16.0, 10.0], 0.0) {
        mean.set_path_effect(dash);
    }
    canvas.draw_line((x0, y_mean), (x1, y_mean), &mean);
}

fn draw_point(
    canvas: &skia::Canvas,
    theme: &Theme,
    sx: &LinearScale,
    sy: &LinearScale,
    p: &PointGlyph,
) {
    let x = sx.to_px(p.x);
    let y = sy.to_px(p.y);
    let fill = fill_paint(with_alpha(theme.category_edge(p.category), 153));
    canvas.draw_circle((x, y), POINT_RADIUS, &fill);
    let ring = stroke_paint(theme.point_edge, 2.0);
    canvas.draw_circle((x, y), POINT_RADIUS, &ring);
}

fn draw_threshold(
    canvas: &skia::Canvas,
    theme: &Theme,
    sx: &LinearScale,
    sy: &LinearScale,
    m: &ThresholdGlyph,
) {
    let x = sx.to_px(m.x);
    let y = sy.to_px(m.y);
    let arm = 22.0f32;
    let paint = stroke_paint(theme.threshold, 8.0);
    canvas.draw_line((x - arm, y - arm), (x + arm, y + arm), &paint);
    canvas.draw_line((x - arm, y + arm), (x + arm, y - arm), &paint);
}

#[allow(clippy::too_many_arguments)]
fn draw_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    opts: &RenderOptions,
    chart: &Chart,
    sx: &LinearScale,
    sy: &LinearScale,
    l: i32,
    t: i32,
    r: i32,
    b: i32,
) {
    let theme = &opts.theme;
    let cx = (l + r) as f32 * 0.5;

    shaper.draw_centered(canvas, &chart.title, cx, t as f32 - 80.0, TITLE_SIZE, theme.title, true);
    shaper.draw_centered(
        canvas,
        &chart.x_axis.label,
        cx,
        b as f32 + 160.0,
        LABEL_SIZE,
        theme.axis_label,
        false,
    );
    shaper.draw_left(
        canvas,
        &chart.y_axis.label,
        24.0,
        t as f32 - 40.0,
        LABEL_SIZE,
        theme.axis_label,
        false,
    );

    // One tick per subject at its base position
    let tick_paint = stroke_paint(theme.axis_line, 3.0);
    for (i, name) in chart.x_axis.ticks.iter().enumerate() {
        let x = sx.to_px(i as f64);
        canvas.draw_line((x, b as f32), (x, b as f32 + 16.0), &tick_paint);
        shaper.draw_centered(canvas, name, x, b as f32 + 70.0, TICK_SIZE, theme.tick, false);
    }

    // Y tick labels, right-aligned against the plot edge
    let ticks = nice_ticks(chart.y_axis.min, chart.y_axis.max, 8);
    let step = if ticks.len() >= 2 { ticks[1] - ticks[0] } else { 1.0 };
    let decimals = tick_decimals(step);
    for v in &ticks {
        let label = format!("{:.*}", decimals, v);
        let w = shaper.measure_width(&label, TICK_SIZE, false);
        shaper.draw_left(
            canvas,
            &label,
            l as f32 - w - 24.0,
            sy.to_px(*v) + TICK_SIZE * 0.35,
            TICK_SIZE,
            theme.tick,
            false,
        );
    }
}

/// Fixed legend in the right gutter. Content is static, independent of the data.
fn draw_legend(canvas: &skia::Canvas, shaper: &TextShaper, theme: &Theme, r: i32, t: i32) {
    enum Swatch {
        Box(usize),
        Line { color: skia::Color, dashed: bool },
        Cross(skia::Color),
    }
    let entries: [(Swatch, &str); 5] = [
        (Swatch::Box(0), "Stress (Yes)"),
        (Swatch::Box(1), "Not Stressed (No)"),
        (Swatch::Line { color: theme.median, dashed: false }, "Median"),
        (Swatch::Line { color: theme.mean, dashed: true }, "Mean (---)"),
        (Swatch::Cross(theme.threshold), "Threshold (x)"),
    ];

    let x = r as f32 + 70.0;
    let mut y = t as f32 + 30.0;
    shaper.draw_left(canvas, "Legend", x, y, LABEL_SIZE, theme.axis_label, true);
    y += 90.0;

    let sw = 70.0f32; // swatch width
    for (swatch, label) in entries {
        match swatch {
            Swatch::Box(slot) => {
                let rect = skia::Rect::from_ltrb(x, y - 22.0, x + sw, y + 10.0);
                canvas.draw_rect(rect, &fill_paint(theme.category_fill(slot)));
                canvas.draw_rect(rect, &stroke_paint(theme.category_edge(slot), 3.0));
            }
            Swatch::Line { color, dashed } => {
                let mut paint = stroke_paint(color, 5.0);
                if dashed {
                    if let Some(dash) = skia::dash_path_effect::new(&[16.0, 10.0], 0.0) {
                        paint.set_path_effect(dash);
                    }
                }
                canvas.draw_line((x, y - 6.0), (x + sw, y - 6.0), &paint);
            }
            Swatch::Cross(color) => {
                let cx = x + sw * 0.5;
                let cy = y - 6.0;
                let arm = 16.0f32;
                let paint = stroke_paint(color, 6.0);
                canvas.draw_line((cx - arm, cy - arm), (cx + arm, cy + arm), &paint);
                canvas.draw_line((cx - arm, cy + arm), (cx + arm, cy - arm), &paint);
            }
        }
        shaper.draw_left(canvas, label, x + sw + 24.0, y + 4.0, TICK_SIZE, theme.axis_label, false);
        y += 76.0;
    }
}
