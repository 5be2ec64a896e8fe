// Imports
use serde::{Deserialize, Serialize};

/// The numeric state of an overlay, as plain fields.
///
/// Everything else (corners, surface size, control points) is derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "overlay_snapshot")]
pub struct OverlaySnapshot {
    /// The overlay center in parent coordinates.
    #[serde(rename = "center", with = "overlay_compose::serialize::na_point2_f64_dp3")]
    pub center: na::Point2<f64>,
    /// The rotation in degrees.
    #[serde(rename = "rotation", with = "overlay_compose::serialize::f64_dp3")]
    pub rotation: f64,
    #[serde(rename = "width_scale", with = "overlay_compose::serialize::f64_dp3")]
    pub width_scale: f64,
    #[serde(rename = "height_scale", with = "overlay_compose::serialize::f64_dp3")]
    pub height_scale: f64,
    /// The content extents at a scale of 1.0.
    #[serde(
        rename = "init_content_size",
        with = "overlay_compose::serialize::na_vector2_f64_dp3"
    )]
    pub init_content_size: na::Vector2<f64>,
    /// The content extents at the time the snapshot was taken.
    #[serde(
        rename = "content_size",
        with = "overlay_compose::serialize::na_vector2_f64_dp3"
    )]
    pub content_size: na::Vector2<f64>,
}

impl Default for OverlaySnapshot {
    fn default() -> Self {
        Self {
            center: na::Point2::origin(),
            rotation: 0.0,
            width_scale: 1.0,
            height_scale: 1.0,
            init_content_size: na::Vector2::zeros(),
            content_size: na::Vector2::zeros(),
        }
    }
}
