// Imports
use crate::OverlayError;
use serde::{Deserialize, Serialize};

/// One of the four corners of the overlay quad.
#[derive(
    Copy,
    Clone,
    Debug,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    num_derive::FromPrimitive,
)]
#[serde(rename = "corner_location")]
pub enum CornerLocation {
    #[serde(rename = "top_left")]
    TopLeft = 0,
    #[serde(rename = "top_right")]
    TopRight,
    #[serde(rename = "bottom_right")]
    BottomRight,
    #[serde(rename = "bottom_left")]
    BottomLeft,
}

impl TryFrom<u32> for CornerLocation {
    type Error = OverlayError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        num_traits::FromPrimitive::from_u32(value)
            .ok_or(OverlayError::InvalidCornerLocation(value))
    }
}

/// Tunables of an overlay, passed at construction.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default, rename = "overlay_config")]
pub struct OverlayConfig {
    /// Lower bound of the width and height scale factors.
    #[serde(rename = "min_scale")]
    pub min_scale: f64,
    /// Upper bound of the width and height scale factors.
    #[serde(rename = "max_scale")]
    pub max_scale: f64,
    /// Pointer travel distance after which a body touch turns into a drag.
    #[serde(rename = "drag_threshold")]
    pub drag_threshold: f64,
    /// Size of the zoom control icon.
    #[serde(rename = "control_icon_size")]
    pub control_icon_size: na::Vector2<f64>,
    /// Size of the rotate icon.
    #[serde(rename = "rotate_icon_size")]
    pub rotate_icon_size: na::Vector2<f64>,
    /// Size of a single icon in the action row.
    #[serde(rename = "action_icon_size")]
    pub action_icon_size: na::Vector2<f64>,
    /// Horizontal gap between two icons in the action row.
    #[serde(rename = "action_icon_padding")]
    pub action_icon_padding: f64,
    /// Gap between the frame and the hosting surface edges.
    #[serde(rename = "frame_padding")]
    pub frame_padding: f64,
    /// Where the zoom control icon sits.
    #[serde(rename = "control_location")]
    pub control_location: CornerLocation,
    /// Where the rotate icon sits.
    #[serde(rename = "delete_location")]
    pub delete_location: CornerLocation,
    /// Whether the overlay starts out editable, showing its frame and controls.
    #[serde(rename = "editable")]
    pub editable: bool,
    /// Number of icons in the action row, 0 to 3.
    #[serde(rename = "tab_count")]
    pub tab_count: u32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            min_scale: Self::MIN_SCALE_DEFAULT,
            max_scale: Self::MAX_SCALE_DEFAULT,
            drag_threshold: Self::DRAG_THRESHOLD_DEFAULT,
            control_icon_size: na::Vector2::repeat(48.0),
            rotate_icon_size: na::Vector2::repeat(48.0),
            action_icon_size: na::vector![72.0, 40.0],
            action_icon_padding: 8.0,
            frame_padding: 0.0,
            control_location: CornerLocation::BottomRight,
            delete_location: CornerLocation::TopRight,
            editable: true,
            tab_count: 0,
        }
    }
}

impl OverlayConfig {
    pub const MIN_SCALE_DEFAULT: f64 = 0.5;
    pub const MAX_SCALE_DEFAULT: f64 = 10.0;
    pub const DRAG_THRESHOLD_DEFAULT: f64 = 10.0;
    pub const MAX_TAB_COUNT: u32 = 3;

    /// Clamps the scale factor into the configured bounds.
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }

    /// Half the size of the zoom control icon. All corners are shifted by it.
    pub fn control_icon_offset(&self) -> na::Vector2<f64> {
        self.control_icon_size * 0.5
    }

    /// Checks the config for values the engine can't work with.
    pub fn validate(&self) -> Result<(), OverlayError> {
        if self.tab_count > Self::MAX_TAB_COUNT {
            return Err(OverlayError::InvalidTabCount(self.tab_count));
        }
        if !(self.min_scale > 0.0 && self.min_scale <= self.max_scale) {
            return Err(OverlayError::InvalidContent(format!(
                "scale bounds [{}, {}] are not valid",
                self.min_scale, self.max_scale
            )));
        }
        Ok(())
    }
}
