// Imports
use crate::ext::AabbExt;
use crate::point_utils;
use crate::transform::Transformable;
use p2d::bounding_volume::Aabb;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename = "polygon")]
/// A closed polygon, given by its ordered vertices.
pub struct Polygon {
    /// The polygon vertices. The last vertex connects back to the first.
    #[serde(rename = "vertices")]
    pub vertices: Vec<na::Point2<f64>>,
}

impl Transformable for Polygon {
    fn translate(&mut self, offset: na::Vector2<f64>) {
        for p in &mut self.vertices {
            *p += offset;
        }
    }

    fn rotate(&mut self, degrees: f64, center: na::Point2<f64>) {
        for p in &mut self.vertices {
            *p = point_utils::rotate_about(*p, center, degrees);
        }
    }
}

impl Polygon {
    /// A new polygon from the ordered vertices.
    pub fn new(vertices: Vec<na::Point2<f64>>) -> Self {
        Self { vertices }
    }

    /// The bounds of the polygon. None if the polygon has no vertices.
    pub fn bounds(&self) -> Option<Aabb> {
        bounding_extents(&self.vertices)
    }

    /// Whether the point lies inside the polygon, by the even-odd rule.
    pub fn contains_point(&self, point: na::Point2<f64>) -> bool {
        point_in_polygon(point, &self.vertices)
    }
}

/// The axis aligned extents (min/max on both axes) of the points.
pub fn bounding_extents(points: &[na::Point2<f64>]) -> Option<Aabb> {
    Aabb::try_from_points(points.iter().copied())
}

/// Even-odd point in polygon test.
///
/// Counts the crossings of a horizontal ray cast from the point towards +x with the polygon edges.
/// The y-range of every edge is half-open (`[min, max)`) so shared vertices are counted once,
/// and an edge is only crossed when its intersection lies strictly right of the point.
/// As a consequence points on left and top edges are inside, points on right and bottom edges are not.
pub fn point_in_polygon(point: na::Point2<f64>, vertices: &[na::Point2<f64>]) -> bool {
    let n = vertices.len();
    let mut crossings = 0_usize;

    for i in 0..n {
        let p1 = vertices[i];
        let p2 = vertices[(i + 1) % n];

        // horizontal edges are either not crossed or crossed infinitely often
        if p1[1] == p2[1] {
            continue;
        }
        if point[1] < p1[1].min(p2[1]) || point[1] >= p1[1].max(p2[1]) {
            continue;
        }
        let x = (point[1] - p1[1]) * (p2[0] - p1[0]) / (p2[1] - p1[1]) + p1[0];
        if x > point[0] {
            crossings += 1;
        }
    }

    crossings % 2 == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> Vec<na::Point2<f64>> {
        vec![
            na::point![0.0, 0.0],
            na::point![10.0, 0.0],
            na::point![10.0, 10.0],
            na::point![0.0, 10.0],
        ]
    }

    #[test]
    fn inside_and_outside() {
        let vertices = square();
        assert!(point_in_polygon(na::point![5.0, 5.0], &vertices));
        assert!(!point_in_polygon(na::point![15.0, 5.0], &vertices));
        assert!(!point_in_polygon(na::point![-0.1, 5.0], &vertices));
        assert!(!point_in_polygon(na::point![5.0, -0.1], &vertices));
    }

    #[test]
    fn boundary_pixels() {
        let vertices = square();
        // left and top edges count as inside
        assert!(point_in_polygon(na::point![0.0, 5.0], &vertices));
        assert!(point_in_polygon(na::point![5.0, 0.0], &vertices));
        assert!(point_in_polygon(na::point![0.0, 0.0], &vertices));
        // right and bottom edges do not
        assert!(!point_in_polygon(na::point![10.0, 5.0], &vertices));
        assert!(!point_in_polygon(na::point![5.0, 10.0], &vertices));
        assert!(!point_in_polygon(na::point![10.0, 10.0], &vertices));
    }

    #[test]
    fn cyclic_relabeling_is_invariant() {
        let diamond = vec![
            na::point![50.0, 0.0],
            na::point![100.0, 50.0],
            na::point![50.0, 100.0],
            na::point![0.0, 50.0],
        ];
        let probes = [
            na::point![50.0, 50.0],
            na::point![20.0, 20.0],
            na::point![30.0, 49.0],
            na::point![99.0, 50.0],
            na::point![0.0, 50.0],
            na::point![76.0, 76.0],
        ];

        for shift in 0..diamond.len() {
            let mut relabeled = diamond.clone();
            relabeled.rotate_left(shift);
            for probe in probes {
                assert_eq!(
                    point_in_polygon(probe, &diamond),
                    point_in_polygon(probe, &relabeled),
                    "probe {probe:?} with shift {shift}"
                );
            }
        }
    }

    #[test]
    fn winding_direction_does_not_matter() {
        let mut reversed = square();
        reversed.reverse();
        for probe in [na::point![5.0, 5.0], na::point![11.0, 5.0], na::point![0.0, 0.0]] {
            assert_eq!(
                point_in_polygon(probe, &square()),
                point_in_polygon(probe, &reversed)
            );
        }
    }

    #[test]
    fn degenerate_inputs() {
        assert!(!point_in_polygon(na::point![0.0, 0.0], &[]));
        assert!(!point_in_polygon(
            na::point![0.0, 0.0],
            &[na::point![0.0, 0.0], na::point![1.0, 0.0]]
        ));
    }

    #[test]
    fn polygon_transform_and_bounds() {
        let mut polygon = Polygon::new(square());
        polygon.rotate(90.0, na::point![5.0, 5.0]);
        polygon.translate(na::vector![100.0, 0.0]);

        let bounds = polygon.bounds().unwrap();
        assert_relative_eq!(bounds.mins, na::point![100.0, 0.0], epsilon = 1e-9);
        assert_relative_eq!(bounds.maxs, na::point![110.0, 10.0], epsilon = 1e-9);
        assert!(polygon.contains_point(na::point![105.0, 5.0]));
        assert!(!polygon.contains_point(na::point![5.0, 5.0]));
    }
}
