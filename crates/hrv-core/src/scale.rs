// File: crates/hrv-core/src/scale.rs
// Summary: Linear logical-to-pixel transform for the plot rectangle.

/// Maps a value range onto a pixel range. The pixel ends may be inverted
/// (bottom above top) so the same transform serves both axes.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    lo_px: f32,
    hi_px: f32,
    vmin: f64,
    span: f64,
}

impl LinearScale {
    pub fn new(lo_px: f32, hi_px: f32, vmin: f64, vmax: f64) -> Self {
        Self {
            lo_px,
            hi_px,
            vmin,
            span: (vmax - vmin).max(1e-12),
        }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        self.lo_px + (((v - self.vmin) / self.span) as f32) * (self.hi_px - self.lo_px)
    }
}
