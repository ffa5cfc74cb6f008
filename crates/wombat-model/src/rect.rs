//! Plain rectangle value type.

use serde::{Deserialize, Serialize};

/// A width/height pair with a computed area.
///
/// No validation is performed; negative or non-finite dimensions are the
/// caller's business.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rect {
    /// Create a rectangle from its dimensions.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The rectangle's area, `width * height`.
    #[must_use]
    pub const fn area(&self) -> f64 {
        self.width * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_is_width_times_height() {
        let rect = Rect::new(10.0, 20.0);
        assert!((rect.area() - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_sized_rect_has_zero_area() {
        assert!(Rect::default().area().abs() < f64::EPSILON);
    }
}
