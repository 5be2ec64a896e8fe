// Imports
use p2d::bounding_volume::Aabb;

/// Extension trait for [`na::Vector2<f64>`].
pub trait Vector2Ext
where
    Self: Sized,
{
    /// Whether both components are finite.
    fn is_finite(&self) -> bool;
}

impl Vector2Ext for na::Vector2<f64> {
    fn is_finite(&self) -> bool {
        self[0].is_finite() && self[1].is_finite()
    }
}

/// Extension trait for [p2d::bounding_volume::Aabb].
pub trait AabbExt
where
    Self: Sized,
{
    /// New Aabb, ensuring its mins, maxs are valid (maxs >= mins)
    fn new_positive(start: na::Point2<f64>, end: na::Point2<f64>) -> Self;
    /// The smallest Aabb containing all points. None if there are no points.
    fn try_from_points<I: IntoIterator<Item = na::Point2<f64>>>(points: I) -> Option<Self>;
    /// Whether the point lies strictly inside the Aabb, excluding its edges
    fn contains_point_exclusive(&self, point: na::Point2<f64>) -> bool;
}

impl AabbExt for Aabb {
    fn new_positive(start: na::Point2<f64>, end: na::Point2<f64>) -> Self {
        Aabb::new(
            na::point![start[0].min(end[0]), start[1].min(end[1])],
            na::point![start[0].max(end[0]), start[1].max(end[1])],
        )
    }

    fn try_from_points<I: IntoIterator<Item = na::Point2<f64>>>(points: I) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bounds = Aabb::new(first, first);
        for p in points {
            bounds.take_point(p);
        }
        Some(bounds)
    }

    fn contains_point_exclusive(&self, point: na::Point2<f64>) -> bool {
        point[0] > self.mins[0]
            && point[0] < self.maxs[0]
            && point[1] > self.mins[1]
            && point[1] < self.maxs[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn aabb_from_points() {
        let bounds = Aabb::try_from_points([
            na::point![3.0, -1.0],
            na::point![-2.0, 4.0],
            na::point![0.5, 0.5],
        ])
        .unwrap();
        assert_relative_eq!(bounds.mins, na::point![-2.0, -1.0]);
        assert_relative_eq!(bounds.maxs, na::point![3.0, 4.0]);

        assert!(Aabb::try_from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn aabb_new_positive_swaps() {
        let bounds = Aabb::new_positive(na::point![10.0, 0.0], na::point![0.0, 5.0]);
        assert_relative_eq!(bounds.mins, na::point![0.0, 0.0]);
        assert_relative_eq!(bounds.maxs, na::point![10.0, 5.0]);
    }

    #[test]
    fn aabb_exclusive_contains() {
        let bounds = Aabb::new(na::point![0.0, 0.0], na::point![10.0, 10.0]);
        assert!(bounds.contains_point_exclusive(na::point![5.0, 5.0]));
        assert!(!bounds.contains_point_exclusive(na::point![0.0, 5.0]));
        assert!(!bounds.contains_point_exclusive(na::point![5.0, 10.0]));
    }

    #[test]
    fn vector_finite() {
        assert!(na::vector![1.0, 2.0].is_finite());
        assert!(!na::vector![f64::NAN, 2.0].is_finite());
        assert!(!na::vector![1.0, f64::INFINITY].is_finite());
    }
}
