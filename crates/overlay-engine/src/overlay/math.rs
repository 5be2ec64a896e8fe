//! Turns pointer motion into rotation angles and scale factors.

// Imports
use crate::CornerLocation;
use overlay_compose::point_utils::{
    cross, degrees_to_radians, distance, radians_to_degrees, rotate_about,
};

/// The signed angle in degrees the pointer travelled around the center, moving from `prev` to `current`.
///
/// The angle comes from the law of cosines on the triangle center, prev, current.
/// The cross product of both pointer vectors decides the direction, negative angles are counter clockwise
/// on screen. None if a pointer position coincides with the center.
pub fn rotation_delta(
    center: na::Point2<f64>,
    prev: na::Point2<f64>,
    current: na::Point2<f64>,
) -> Option<f64> {
    let a = distance(center, prev);
    let b = distance(prev, current);
    let c = distance(center, current);
    if a * c <= f64::EPSILON {
        return None;
    }

    let cos_beta = ((a * a + c * c - b * b) / (2.0 * a * c)).clamp(-1.0, 1.0);
    let angle = radians_to_degrees(cos_beta.acos());

    if cross(prev - center, current - center) < 0.0 {
        Some(-angle)
    } else {
        Some(angle)
    }
}

/// Width and height scale factors that move the bottom right corner of the quad onto the drag position,
/// while keeping the rotation of the quad.
///
/// `current_half_height` is the half height of the quad as it is now, `init_half_extents` the half extents
/// of the content at a scale of 1.0. None when the drag position or the corner coincides with the center.
pub fn anisotropic_scales(
    center: na::Point2<f64>,
    bottom_right: na::Point2<f64>,
    drag: na::Point2<f64>,
    current_half_height: f64,
    init_half_extents: na::Vector2<f64>,
) -> Option<na::Vector2<f64>> {
    let ae = distance(drag, center);
    let ce = distance(drag, bottom_right);
    let ac = distance(bottom_right, center);
    if ae <= f64::EPSILON
        || ac <= f64::EPSILON
        || init_half_extents[0] <= 0.0
        || init_half_extents[1] <= 0.0
    {
        return None;
    }

    // angle between the corner diagonal and the drag direction
    let cos_a = ((ae * ae + ac * ac - ce * ce) / (2.0 * ae * ac)).clamp(-1.0, 1.0);
    let mut angle_a = radians_to_degrees(cos_a.acos());
    if cross(bottom_right - center, drag - center) < 0.0 {
        angle_a = -angle_a;
    }
    // angle between the quad's vertical axis and the corner diagonal
    let cos_b = (current_half_height / ac).clamp(-1.0, 1.0);
    let angle_b = radians_to_degrees(cos_b.acos());
    // angle between the quad's vertical axis and the drag direction
    let angle_p = degrees_to_radians(angle_b - angle_a);

    let new_half_height = ae * angle_p.cos();
    let new_half_width = ae * angle_p.sin();

    Some(na::vector![
        new_half_width / init_half_extents[0],
        new_half_height / init_half_extents[1]
    ])
}

/// Mirrors a position across the axes of the quad rotated by `rotation` degrees around `center`, so that
/// a drag at the given corner becomes the same drag at the bottom right corner.
pub fn mirror_onto_bottom_right(
    center: na::Point2<f64>,
    pos: na::Point2<f64>,
    rotation: f64,
    corner: CornerLocation,
) -> na::Point2<f64> {
    let sign = match corner {
        CornerLocation::TopLeft => na::vector![-1.0, -1.0],
        CornerLocation::TopRight => na::vector![1.0, -1.0],
        CornerLocation::BottomRight => na::vector![1.0, 1.0],
        CornerLocation::BottomLeft => na::vector![-1.0, 1.0],
    };
    let upright = rotate_about(pos, center, -rotation) - center;
    rotate_about(center + upright.component_mul(&sign), center, rotation)
}

/// A single scale factor from the distance of the drag position to the center,
/// relative to the half diagonal of the unscaled content.
pub fn uniform_scale(
    center: na::Point2<f64>,
    drag: na::Point2<f64>,
    init_half_extents: na::Vector2<f64>,
) -> Option<f64> {
    let half_diagonal = init_half_extents.magnitude();
    if half_diagonal <= f64::EPSILON {
        return None;
    }
    Some(distance(center, drag) / half_diagonal)
}
