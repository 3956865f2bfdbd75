// File: crates/chart-core/src/scale.rs
// Summary: Linear value <-> pixel transform used for both axes.

/// Maps the data interval `[vmin, vmax]` onto the pixel interval `[px_from, px_to]`.
/// For a Y axis pass `px_from = bottom`, `px_to = top` so larger values go up.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub px_from: f32,
    pub px_to: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl LinearScale {
    pub fn new(px_from: f32, px_to: f32, vmin: f64, mut vmax: f64) -> Self {
        if (vmax - vmin).abs() < 1e-12 { vmax = vmin + 1.0; }
        Self { px_from, px_to, vmin, vmax }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = self.vmax - self.vmin;
        self.px_from + ((v - self.vmin) / span) as f32 * (self.px_to - self.px_from)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let span = self.vmax - self.vmin;
        self.vmin + ((px - self.px_from) / (self.px_to - self.px_from)) as f64 * span
    }

    /// Pixels covered by `dv` data units (always non-negative).
    #[inline]
    pub fn extent(&self, dv: f64) -> f32 {
        (self.to_px(self.vmin + dv) - self.px_from).abs()
    }
}
