// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings, figure defaults).

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Resolution at which `scale == 1.0`; figure sizes are expressed against it.
pub const BASE_DPI: f32 = 100.0;

/// Screen margins, in pixels at `scale == 1.0`.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }

    /// Insets multiplied by a render scale, rounded to whole pixels.
    pub fn scaled(&self, scale: f32) -> Self {
        let s = |v: u32| (v as f32 * scale).round().max(0.0) as u32;
        Self::new(s(self.left), s(self.right), s(self.top), s(self.bottom))
    }
}

impl Default for Insets {
    // Room for the rotated y label + tick labels on the left, title on top,
    // tick labels + x label on the bottom.
    fn default() -> Self {
        Self::new(84, 24, 40, 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_insets_round() {
        let i = Insets::new(10, 5, 3, 1).scaled(3.0);
        assert_eq!(i, Insets::new(30, 15, 9, 3));
        assert_eq!(i.hsum(), 45);
        assert_eq!(i.vsum(), 12);
    }
}
