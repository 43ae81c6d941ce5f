//! Core geometric types shared by the scene model and the renderer

use serde::Deserialize;

/// A 2D coordinate in the host's Y-up space
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(try_from = "Vec<f64>")]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Round both components to `precision` fractional digits
    pub fn rounded(self, precision: u32) -> Self {
        Self::new(round_to(self.x, precision), round_to(self.y, precision))
    }

    /// Translate this coordinate by `origin`
    pub fn offset(self, origin: Vec2) -> Self {
        Self::new(origin.x + self.x, origin.y + self.y)
    }
}

/// Accepts `[x, y]` or `[x, y, z]`; the z component is dropped.
impl TryFrom<Vec<f64>> for Vec2 {
    type Error = String;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        match values.as_slice() {
            [x, y] | [x, y, _] => Ok(Vec2::new(*x, *y)),
            other => Err(format!(
                "expected 2 or 3 coordinates, found {}",
                other.len()
            )),
        }
    }
}

/// Round `value` to `precision` fractional digits.
///
/// Goes through correctly-rounded decimal formatting, so rounding a value
/// that is already rounded returns it unchanged. Negative zero becomes zero.
pub fn round_to(value: f64, precision: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let rounded = format!("{:.*}", precision as usize, value)
        .parse::<f64>()
        .unwrap_or(value);
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Axis-aligned bounds accumulated over every visited point of an export
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Zero-sized box at the origin. Every export that starts here keeps
    /// (0, 0) inside the final box, even when no shape touches it.
    pub fn at_origin() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Inverted box that snaps to the first included point
    pub fn empty() -> Self {
        Self::new(
            f64::INFINITY,
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::NEG_INFINITY,
        )
    }

    /// True until a point has been included into an `empty()` box
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    pub fn width(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.max_x - self.min_x
        }
    }

    pub fn height(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.max_y - self.min_y
        }
    }

    /// Widen the box to include a point
    pub fn include(&mut self, point: Vec2) {
        self.min_x = self.min_x.min(point.x);
        self.min_y = self.min_y.min(point.y);
        self.max_x = self.max_x.max(point.x);
        self.max_y = self.max_y.max(point.y);
    }

    /// SVG viewBox values `[x, y, width, height]`.
    ///
    /// The document root flips the Y axis, so the top edge is `-max_y`
    /// (written `0.0 - max_y` so a zero edge never prints as `-0`).
    pub fn view_box(&self) -> [f64; 4] {
        if self.is_empty() {
            return [0.0; 4];
        }
        [self.min_x, 0.0 - self.max_y, self.width(), self.height()]
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::at_origin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_precision() {
        assert_eq!(round_to(1.23456, 4), 1.2346);
        assert_eq!(round_to(1.23456, 0), 1.0);
        assert_eq!(round_to(-2.5e-7, 4), 0.0);
        assert!(round_to(-0.00001, 2).is_sign_positive());
    }

    #[test]
    fn test_round_to_is_idempotent() {
        for value in [0.1, 1.0 / 3.0, -7.123456789, 1234.5678, 2.675] {
            for precision in [0, 1, 4, 9, 21] {
                let once = round_to(value, precision);
                assert_eq!(round_to(once, precision), once);
            }
        }
    }

    #[test]
    fn test_vec2_from_coordinates() {
        assert_eq!(Vec2::try_from(vec![1.0, 2.0]), Ok(Vec2::new(1.0, 2.0)));
        assert_eq!(Vec2::try_from(vec![1.0, 2.0, 3.0]), Ok(Vec2::new(1.0, 2.0)));
        assert!(Vec2::try_from(vec![1.0]).is_err());
    }

    #[test]
    fn test_bounding_box_at_origin_keeps_origin() {
        let mut bounds = BoundingBox::at_origin();
        bounds.include(Vec2::new(5.0, 7.0));
        assert_eq!(bounds, BoundingBox::new(0.0, 0.0, 5.0, 7.0));
    }

    #[test]
    fn test_bounding_box_empty_snaps_to_first_point() {
        let mut bounds = BoundingBox::empty();
        assert!(bounds.is_empty());
        assert_eq!(bounds.view_box(), [0.0; 4]);

        bounds.include(Vec2::new(5.0, 7.0));
        assert!(!bounds.is_empty());
        assert_eq!(bounds, BoundingBox::new(5.0, 7.0, 5.0, 7.0));
    }

    #[test]
    fn test_bounding_box_never_shrinks() {
        let mut bounds = BoundingBox::at_origin();
        let points = [
            Vec2::new(3.0, -1.0),
            Vec2::new(-4.0, 2.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(10.0, -8.0),
        ];
        let mut last = (bounds.width(), bounds.height());
        for point in points {
            bounds.include(point);
            assert!(bounds.width() >= last.0);
            assert!(bounds.height() >= last.1);
            last = (bounds.width(), bounds.height());
        }
    }

    #[test]
    fn test_view_box_flips_vertical_axis() {
        let bounds = BoundingBox::new(-2.0, -3.0, 8.0, 5.0);
        assert_eq!(bounds.view_box(), [-2.0, -5.0, 10.0, 8.0]);
        assert!(BoundingBox::at_origin().view_box()[1].is_sign_positive());
    }
}
