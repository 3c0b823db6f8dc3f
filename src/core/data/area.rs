use crate::core::data::errors::DataError;
use crate::core::data::point2d::{Point2D, RawPoint};
use std::fmt;

const RADIUS_KIND: &str = "area radius";
const ZOOM_KIND: &str = "zoom factor";

pub const DEFAULT_CENTER: Point2D = Point2D::new(-0.75, 0.0);
pub const DEFAULT_RADIUS: f64 = 1.5;

/// An axis-aligned rectangle with `min <= max` on both axes.
///
/// Corners may be passed in any order; they are sorted on construction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Area {
    min: Point2D,
    max: Point2D,
}

impl Area {
    #[must_use]
    pub fn new(a: Point2D, b: Point2D) -> Self {
        Self {
            min: Point2D::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point2D::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// A square spanning `center ± radius` on both axes.
    pub fn from_radius(radius: f64, center: Point2D) -> Result<Self, DataError> {
        if radius.is_nan() || radius <= 0.0 {
            return Err(DataError::invalid_because(
                RADIUS_KIND,
                radius,
                "must be positive",
            ));
        }

        Ok(Self::new(center - radius, center + radius))
    }

    #[must_use]
    pub fn from_sides(x1: f64, x2: f64, y1: f64, y2: f64) -> Self {
        Self::new(Point2D::new(x1, y1), Point2D::new(x2, y2))
    }

    pub fn from_raw(a: Option<RawPoint>, b: Option<RawPoint>) -> Result<Self, DataError> {
        let resolve = |raw: Option<RawPoint>| -> Result<Point2D, DataError> {
            Point2D::from_raw(raw)?.ok_or_else(|| {
                DataError::invalid_because("area corner", "None", "missing corner")
            })
        };

        Ok(Self::new(resolve(a)?, resolve(b)?))
    }

    #[must_use]
    pub fn min(&self) -> Point2D {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> Point2D {
        self.max
    }

    #[must_use]
    pub fn delta(&self) -> Point2D {
        self.max - self.min
    }

    #[must_use]
    pub fn center(&self) -> Point2D {
        (self.min + self.max) / 2.0
    }

    #[must_use]
    pub fn contains(&self, point: Point2D) -> bool {
        self.min.x <= point.x
            && self.min.y <= point.y
            && self.max.x >= point.x
            && self.max.y >= point.y
    }

    /// Scales the half-extents about the center; factors below 1 zoom in.
    pub fn zoom(&self, factor: f64) -> Result<Self, DataError> {
        if factor.is_nan() || factor <= 0.0 {
            return Err(DataError::invalid_because(ZOOM_KIND, factor, "must be positive"));
        }

        let center = self.center();
        let half = self.delta() / 2.0 * factor;

        Ok(Self::new(center - half, center + half))
    }
}

impl Default for Area {
    fn default() -> Self {
        Self::new(DEFAULT_CENTER - DEFAULT_RADIUS, DEFAULT_CENTER + DEFAULT_RADIUS)
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: Point2D = Point2D::new(-1.0, -1.0);
    const MAX: Point2D = Point2D::new(1.0, 1.0);

    #[test]
    fn test_from_radius() {
        let area = Area::from_radius(1.5, Point2D::new(-0.75, 0.0)).unwrap();

        assert_eq!(area.min(), Point2D::new(-2.25, -1.5));
        assert_eq!(area.max(), Point2D::new(0.75, 1.5));
        assert_eq!(area.center(), Point2D::new(-0.75, 0.0));
    }

    #[test]
    fn test_from_radius_rejects_non_positive() {
        for radius in [0.0, -1.0, f64::NAN] {
            assert!(matches!(
                Area::from_radius(radius, Point2D::origin()),
                Err(DataError::InvalidValue { .. })
            ));
        }
    }

    #[test]
    fn test_from_sides_sorts() {
        // MAX.x passed as x1
        let area = Area::from_sides(MAX.x, MIN.x, MIN.y, MAX.y);

        assert_eq!(area.min(), MIN);
        assert_eq!(area.max(), MAX);
    }

    #[test]
    fn test_reorder() {
        assert_eq!(Area::new(MIN, MAX), Area::new(MAX, MIN));
        assert_eq!(
            Area::new(Point2D::new(-1.0, 1.0), Point2D::new(1.0, -1.0)),
            Area::new(MIN, MAX)
        );
    }

    #[test]
    fn test_from_raw_tuples_and_strings() {
        let from_pairs = Area::from_raw(
            Some(RawPoint::Sequence(vec![-1.0, -1.0])),
            Some(RawPoint::Sequence(vec![1.0, 1.0])),
        )
        .unwrap();
        let from_strings = Area::from_raw(
            Some(RawPoint::Text(MIN.to_string())),
            Some(RawPoint::Text(MAX.to_string())),
        )
        .unwrap();

        assert_eq!(from_pairs, Area::new(MIN, MAX));
        assert_eq!(from_strings, Area::new(MIN, MAX));
    }

    #[test]
    fn test_from_raw_missing_corner() {
        let result = Area::from_raw(None, Some(RawPoint::Point(MAX)));

        assert!(matches!(result, Err(DataError::InvalidValue { .. })));
    }

    #[test]
    fn test_delta() {
        let area = Area::from_sides(-2.5, 1.0, -1.0, 1.0);

        assert_eq!(area.delta(), Point2D::new(3.5, 2.0));
    }

    #[test]
    fn test_contains() {
        let area = Area::new(MIN, MAX);

        assert!(area.contains(Point2D::origin()));
        assert!(area.contains(MIN));
        assert!(area.contains(MAX));
        assert!(!area.contains(Point2D::new(1.5, 0.0)));
        assert!(!area.contains(Point2D::new(0.0, -1.5)));
    }

    #[test]
    fn test_zoom_keeps_center() {
        let area = Area::from_radius(2.0, Point2D::new(1.0, 1.0)).unwrap();
        let zoomed = area.zoom(0.5).unwrap();

        assert_eq!(zoomed.center(), area.center());
        assert_eq!(zoomed.delta(), Point2D::new(2.0, 2.0));
        assert!(area.zoom(0.0).is_err());
    }

    #[test]
    fn test_default_view() {
        let area = Area::default();

        assert_eq!(area, Area::from_radius(DEFAULT_RADIUS, DEFAULT_CENTER).unwrap());
    }
}
