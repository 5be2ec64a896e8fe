//! Free functions on points: distances, angle conversions and rotations.

/// The euclidean distance between two points.
pub fn distance(a: na::Point2<f64>, b: na::Point2<f64>) -> f64 {
    (b - a).magnitude()
}

/// Converts degrees to radians.
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Converts radians to degrees.
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / std::f64::consts::PI
}

/// Rotates the point around the center by the given angle in degrees.
///
/// With a y-axis pointing down, positive angles rotate clockwise on screen.
pub fn rotate_about(
    point: na::Point2<f64>,
    center: na::Point2<f64>,
    degrees: f64,
) -> na::Point2<f64> {
    let mut isometry = na::Isometry2::identity();
    isometry.append_rotation_wrt_point_mut(
        &na::UnitComplex::new(degrees_to_radians(degrees)),
        &center,
    );
    isometry.transform_point(&point)
}

/// The z-component of the cross product of two vectors.
///
/// Positive when `b` lies clockwise of `a` (y-axis pointing down).
pub fn cross(a: na::Vector2<f64>, b: na::Vector2<f64>) -> f64 {
    a.perp(&b)
}
