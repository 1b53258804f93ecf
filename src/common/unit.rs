//! Unit conversion utilities.
//!
//! DrawingML positions and sizes are integers in English Metric Units (EMU).
//! Layout code is written in inches and points and converted here.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_PT: i64 = 12_700;

/// Convert inches to EMU, truncating toward zero.
#[inline]
pub fn inches(value: f64) -> i64 {
    (value * EMUS_PER_INCH as f64) as i64
}

/// Convert points to EMU.
#[inline]
pub fn pt_to_emu_f64(pt: f64) -> i64 {
    (pt * EMUS_PER_PT as f64) as i64
}

/// Font size in hundredths of a point, the unit of `a:rPr/@sz`.
#[inline]
pub fn pt_to_centipoints(pt: f64) -> u32 {
    (pt * 100.0).round() as u32
}

/// A positioned rectangle in EMU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    #[inline]
    pub const fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle from left/top/width/height given in inches.
    #[inline]
    pub fn inches(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self::new(inches(left), inches(top), inches(width), inches(height))
    }

    /// Right edge in EMU.
    #[inline]
    pub fn right(&self) -> i64 {
        self.x + self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches() {
        assert_eq!(inches(1.0), 914_400);
        assert_eq!(inches(13.333), 12_191_695);
        assert_eq!(inches(7.5), 6_858_000);
    }

    #[test]
    fn test_points() {
        assert_eq!(pt_to_emu_f64(2.0), 25_400);
        assert_eq!(pt_to_centipoints(13.0), 1300);
        assert_eq!(pt_to_centipoints(10.5), 1050);
    }

    #[test]
    fn test_rect_inches() {
        let r = Rect::inches(0.6, 1.6, 5.8, 5.0);
        assert_eq!(r.x, 548_640);
        assert_eq!(r.right(), r.x + r.width);
        assert_eq!(r.width, 5_303_520);
    }
}
