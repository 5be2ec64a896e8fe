// Imports
use crate::CornerLocation;
use overlay_compose::transform::Transformable;
use overlay_compose::{point_utils, shapes, Polygon};
use p2d::bounding_volume::Aabb;
use serde::{Deserialize, Serialize};

/// The four vertices of the overlay quad, in hosting surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename = "corners")]
pub struct Corners {
    #[serde(rename = "top_left")]
    pub top_left: na::Point2<f64>,
    #[serde(rename = "top_right")]
    pub top_right: na::Point2<f64>,
    #[serde(rename = "bottom_right")]
    pub bottom_right: na::Point2<f64>,
    #[serde(rename = "bottom_left")]
    pub bottom_left: na::Point2<f64>,
}

impl Transformable for Corners {
    fn translate(&mut self, offset: na::Vector2<f64>) {
        for p in self.iter_mut() {
            *p += offset;
        }
    }

    fn rotate(&mut self, degrees: f64, center: na::Point2<f64>) {
        for p in self.iter_mut() {
            *p = point_utils::rotate_about(*p, center, degrees);
        }
    }
}

impl Corners {
    /// The axis aligned corners of the rectangle.
    pub fn from_aabb(rect: Aabb) -> Self {
        Self {
            top_left: na::point![rect.mins[0], rect.mins[1]],
            top_right: na::point![rect.maxs[0], rect.mins[1]],
            bottom_right: na::point![rect.maxs[0], rect.maxs[1]],
            bottom_left: na::point![rect.mins[0], rect.maxs[1]],
        }
    }

    /// The corners of the content rectangle rotated around its own center,
    /// then shifted by the half size of the control icon.
    pub fn compute(content_rect: Aabb, rotation: f64, icon_offset: na::Vector2<f64>) -> Self {
        let mut corners = Self::from_aabb(content_rect);
        corners.rotate(rotation, content_rect.center());
        corners.translate(icon_offset);
        corners
    }

    /// The corner at the location.
    pub fn get(&self, location: CornerLocation) -> na::Point2<f64> {
        match location {
            CornerLocation::TopLeft => self.top_left,
            CornerLocation::TopRight => self.top_right,
            CornerLocation::BottomRight => self.bottom_right,
            CornerLocation::BottomLeft => self.bottom_left,
        }
    }

    /// In the order top left, top right, bottom right, bottom left.
    pub fn to_array(&self) -> [na::Point2<f64>; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }

    fn iter_mut(&mut self) -> impl Iterator<Item = &mut na::Point2<f64>> {
        [
            &mut self.top_left,
            &mut self.top_right,
            &mut self.bottom_right,
            &mut self.bottom_left,
        ]
        .into_iter()
    }

    /// The polygon used for body hits, ordered right top, right bottom, left bottom, left top.
    pub fn hit_polygon(&self) -> Polygon {
        Polygon::new(vec![
            self.top_right,
            self.bottom_right,
            self.bottom_left,
            self.top_left,
        ])
    }

    /// Min/max of the corners on both axes.
    pub fn bounding_extents(&self) -> Aabb {
        shapes::bounding_extents(&self.to_array())
            .unwrap_or_else(|| Aabb::new(self.top_left, self.top_left))
    }

    /// The center of the quad.
    pub fn center(&self) -> na::Point2<f64> {
        na::center(&self.top_left, &self.bottom_right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rect() -> Aabb {
        Aabb::new(na::point![10.0, 20.0], na::point![110.0, 60.0])
    }

    #[test]
    fn unrotated_corners_are_shifted_by_icon_offset() {
        let corners = Corners::compute(rect(), 0.0, na::vector![24.0, 24.0]);
        assert_relative_eq!(corners.top_left, na::point![34.0, 44.0]);
        assert_relative_eq!(corners.bottom_right, na::point![134.0, 84.0]);
        assert_relative_eq!(corners.get(CornerLocation::TopRight), na::point![134.0, 44.0]);
        assert_relative_eq!(corners.get(CornerLocation::BottomLeft), na::point![34.0, 84.0]);
        assert_relative_eq!(corners.center(), na::point![84.0, 64.0]);
    }

    #[test]
    fn half_turn_swaps_opposite_corners() {
        let straight = Corners::compute(rect(), 0.0, na::Vector2::zeros());
        let turned = Corners::compute(rect(), 180.0, na::Vector2::zeros());
        assert_relative_eq!(turned.top_left, straight.bottom_right, epsilon = 1e-9);
        assert_relative_eq!(turned.top_right, straight.bottom_left, epsilon = 1e-9);
        assert_relative_eq!(turned.center(), straight.center(), epsilon = 1e-9);
    }

    #[test]
    fn rotation_keeps_edge_lengths() {
        let corners = Corners::compute(rect(), 37.0, na::vector![5.0, 5.0]);
        assert_relative_eq!(
            (corners.top_right - corners.top_left).magnitude(),
            100.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            (corners.bottom_right - corners.top_right).magnitude(),
            40.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn bounding_extents_of_rotated_quad() {
        let corners = Corners::compute(
            Aabb::new(na::point![0.0, 0.0], na::point![10.0, 10.0]),
            45.0,
            na::Vector2::zeros(),
        );
        let half_diag = 50.0_f64.sqrt();
        let bounds = corners.bounding_extents();
        assert_relative_eq!(bounds.mins, na::point![5.0 - half_diag, 5.0 - half_diag], epsilon = 1e-9);
        assert_relative_eq!(bounds.maxs, na::point![5.0 + half_diag, 5.0 + half_diag], epsilon = 1e-9);
    }

    #[test]
    fn hit_polygon_contains_center() {
        let corners = Corners::compute(rect(), 63.0, na::vector![24.0, 24.0]);
        assert!(corners.hit_polygon().contains_point(corners.center()));
        assert!(!corners
            .hit_polygon()
            .contains_point(corners.center() + na::vector![200.0, 0.0]));
    }
}
