// Modules
mod corners;
mod layout;
pub mod math;
mod snapshot;

// Re-exports
pub use corners::Corners;
pub use layout::ViewLayout;
pub use snapshot::OverlaySnapshot;

// Imports
use crate::{
    ActionRow, CornerLocation, OverlayConfig, OverlayError, TabKind, TextContent, TextLayout,
};
use overlay_compose::ext::Vector2Ext;
use p2d::bounding_volume::Aabb;
use tracing::{debug, trace};

/// The geometric model of the overlay.
///
/// Owns the rotation and the scale factors, and derives the content extents, the size of the hosting
/// surface and the four corners of the quad from them. Corners are never set directly, they are recomputed
/// after every change of the content size or the rotation.
///
/// Corners, control points and the action row are in hosting surface coordinates.
/// The center lives in the parent coordinates the hosting surface is placed into.
#[derive(Debug, Clone)]
pub struct OverlayTransform {
    config: OverlayConfig,
    content: TextContent,
    tabs: &'static [TabKind],
    center: na::Point2<f64>,
    /// In degrees, normalized to [0, 360).
    rotation: f64,
    width_scale: f64,
    height_scale: f64,
    init_content_size: na::Vector2<f64>,
    content_size: na::Vector2<f64>,
    layout: ViewLayout,
    corners: Corners,
}

impl OverlayTransform {
    /// A new overlay for the content, centered at `center` in parent coordinates.
    ///
    /// Fails when the content is empty or the text layout can't produce valid extents for it.
    pub fn new(
        content: TextContent,
        text_layout: &dyn TextLayout,
        config: OverlayConfig,
        center: na::Point2<f64>,
    ) -> Result<Self, OverlayError> {
        config.validate()?;
        let tabs = TabKind::row_for_count(config.tab_count)?;
        if content.text.is_empty() {
            return Err(OverlayError::InvalidContent(String::from("text is empty")));
        }
        if !(content.base_font_size.is_finite() && content.base_font_size > 0.0) {
            return Err(OverlayError::InvalidContent(format!(
                "base font size {} is not valid",
                content.base_font_size
            )));
        }
        let init_content_size = text_layout.measure(&content);
        validate_extents(init_content_size)?;

        let layout = ViewLayout::compute(init_content_size, tabs.len(), &config);
        let corners = Corners::compute(layout.content_rect, 0.0, config.control_icon_offset());
        let mut overlay = Self {
            config,
            content,
            tabs,
            center,
            rotation: 0.0,
            width_scale: 1.0,
            height_scale: 1.0,
            init_content_size,
            content_size: init_content_size,
            layout,
            corners,
        };
        overlay.reflow(text_layout)?;

        debug!(
            init_content_size = ?overlay.init_content_size,
            view_size = ?overlay.view_size(),
            "overlay created"
        );
        Ok(overlay)
    }

    /// Restores an overlay from a snapshot. The content is laid out again with the snapshot scales.
    pub fn from_snapshot(
        snapshot: &OverlaySnapshot,
        content: TextContent,
        text_layout: &dyn TextLayout,
        config: OverlayConfig,
    ) -> Result<Self, OverlayError> {
        let mut overlay = Self::new(content, text_layout, config, snapshot.center)?;
        validate_extents(snapshot.init_content_size)?;
        overlay.init_content_size = snapshot.init_content_size;
        if snapshot.rotation.is_finite() {
            overlay.rotation = normalize_degrees(snapshot.rotation);
        }
        overlay.apply_scale(
            na::vector![snapshot.width_scale, snapshot.height_scale],
            text_layout,
        )?;
        Ok(overlay)
    }

    pub fn snapshot(&self) -> OverlaySnapshot {
        OverlaySnapshot {
            center: self.center,
            rotation: self.rotation,
            width_scale: self.width_scale,
            height_scale: self.height_scale,
            init_content_size: self.init_content_size,
            content_size: self.content_size,
        }
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn content(&self) -> &TextContent {
        &self.content
    }

    /// The center of the quad in parent coordinates.
    pub fn center(&self) -> na::Point2<f64> {
        self.center
    }

    /// The rotation in degrees, in [0, 360).
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// The width and height scale factors.
    pub fn scale(&self) -> na::Vector2<f64> {
        na::vector![self.width_scale, self.height_scale]
    }

    pub fn width_scale(&self) -> f64 {
        self.width_scale
    }

    pub fn height_scale(&self) -> f64 {
        self.height_scale
    }

    /// The font size the content is currently laid out with.
    pub fn font_size(&self) -> f64 {
        self.content.base_font_size * self.height_scale
    }

    pub fn init_content_size(&self) -> na::Vector2<f64> {
        self.init_content_size
    }

    pub fn content_size(&self) -> na::Vector2<f64> {
        self.content_size
    }

    /// The unrotated content box in hosting surface coordinates, where the renderer draws the text
    /// before rotating it around the box center.
    pub fn content_rect(&self) -> Aabb {
        self.layout.content_rect
    }

    pub fn view_size(&self) -> na::Vector2<f64> {
        self.layout.view_size
    }

    /// The quad center in hosting surface coordinates.
    pub fn pivot(&self) -> na::Point2<f64> {
        self.layout.content_rect.center() + self.config.control_icon_offset()
    }

    /// Where the top left corner of the hosting surface lands in parent coordinates.
    pub fn view_origin(&self) -> na::Point2<f64> {
        self.center - self.pivot().coords
    }

    /// Converts a hosting surface position to parent coordinates.
    pub fn to_parent(&self, local: na::Point2<f64>) -> na::Point2<f64> {
        local + self.view_origin().coords
    }

    pub fn corners(&self) -> &Corners {
        &self.corners
    }

    /// Min/max of the corners on both axes, in hosting surface coordinates.
    pub fn bounding_extents(&self) -> Aabb {
        self.corners.bounding_extents()
    }

    /// Where the zoom control icon is centered.
    pub fn control_point(&self) -> na::Point2<f64> {
        self.corners.get(self.config.control_location)
    }

    /// Where the rotate icon is centered.
    pub fn delete_point(&self) -> na::Point2<f64> {
        self.corners.get(self.config.delete_location)
    }

    pub fn control_hit_radius(&self) -> f64 {
        self.config.control_icon_size.min() * 0.5
    }

    pub fn delete_hit_radius(&self) -> f64 {
        self.config.rotate_icon_size.min() * 0.5
    }

    /// The action row above the quad. None when no action icons are configured.
    pub fn action_row(&self) -> Option<ActionRow> {
        if self.tabs.is_empty() {
            return None;
        }
        let icon_size = self.config.action_icon_size;
        let top = self.bounding_extents().mins[1]
            - icon_size[1]
            - self.config.frame_padding
            - self.config.control_icon_size[1] * 0.5;
        let left = (self.layout.view_size[0] - self.layout.action_row_width) * 0.5;

        Some(ActionRow {
            left,
            top,
            icon_size,
            padding: self.config.action_icon_padding,
            kinds: self.tabs,
        })
    }

    pub fn editable(&self) -> bool {
        self.config.editable
    }

    pub fn set_editable(&mut self, editable: bool) {
        self.config.editable = editable;
    }

    pub fn set_control_location(&mut self, location: CornerLocation) {
        self.config.control_location = location;
    }

    pub fn set_delete_location(&mut self, location: CornerLocation) {
        self.config.delete_location = location;
    }

    /// Sets the number of action icons. Changes the hosting surface width when the row is the widest part.
    pub fn set_tab_count(&mut self, count: u32) -> Result<(), OverlayError> {
        self.tabs = TabKind::row_for_count(count)?;
        self.config.tab_count = count;
        self.update_geometry();
        Ok(())
    }

    /// Sets both scale factors, clamped to the configured bounds, and lays out the content again.
    ///
    /// NaN components leave the corresponding factor untouched.
    /// If the text layout fails the previous factors are restored.
    pub fn apply_scale(
        &mut self,
        scale: na::Vector2<f64>,
        text_layout: &dyn TextLayout,
    ) -> Result<(), OverlayError> {
        let prev = (self.width_scale, self.height_scale);
        self.width_scale = self.clamp_or_keep(scale[0], self.width_scale);
        self.height_scale = self.clamp_or_keep(scale[1], self.height_scale);

        if let Err(e) = self.reflow(text_layout) {
            (self.width_scale, self.height_scale) = prev;
            return Err(e);
        }
        trace!(
            width_scale = self.width_scale,
            height_scale = self.height_scale,
            content_size = ?self.content_size,
            "overlay scaled"
        );
        Ok(())
    }

    pub fn apply_width_scale(
        &mut self,
        width_scale: f64,
        text_layout: &dyn TextLayout,
    ) -> Result<(), OverlayError> {
        self.apply_scale(na::vector![width_scale, self.height_scale], text_layout)
    }

    pub fn apply_height_scale(
        &mut self,
        height_scale: f64,
        text_layout: &dyn TextLayout,
    ) -> Result<(), OverlayError> {
        self.apply_scale(na::vector![self.width_scale, height_scale], text_layout)
    }

    /// Adds the angle (degrees) to the rotation. Only the corners change, the content is not laid out again.
    pub fn apply_rotation(&mut self, delta: f64) {
        if !delta.is_finite() {
            debug!(delta, "skipping non-finite rotation");
            return;
        }
        self.rotation = normalize_degrees(self.rotation + delta);
        self.corners = Corners::compute(
            self.layout.content_rect,
            self.rotation,
            self.config.control_icon_offset(),
        );
        trace!(rotation = self.rotation, "overlay rotated");
    }

    /// Moves the center. The hosting surface coordinates of the corners stay the same.
    pub fn apply_translation(&mut self, offset: na::Vector2<f64>) {
        self.center += offset;
    }

    /// Rotates by the angle the pointer travelled around the center, moving from `prev` to `current`
    /// (both in parent coordinates).
    ///
    /// Returns false when the update was skipped because a pointer position coincides with the center.
    pub fn rotate_towards(&mut self, prev: na::Point2<f64>, current: na::Point2<f64>) -> bool {
        match math::rotation_delta(self.center, prev, current) {
            Some(delta) => {
                self.apply_rotation(delta);
                true
            }
            None => {
                debug!(?prev, ?current, "skipping rotation, degenerate geometry");
                false
            }
        }
    }

    /// Scales width and height independently so that the corner carrying the control icon follows the
    /// drag position (in parent coordinates).
    ///
    /// Returns false when the update was skipped because of degenerate geometry.
    pub fn zoom_towards(
        &mut self,
        drag: na::Point2<f64>,
        text_layout: &dyn TextLayout,
    ) -> Result<bool, OverlayError> {
        // measured at the bottom right corner, with the drag mirrored over from the control corner
        let bottom_right = self.to_parent(self.corners.bottom_right);
        let mirrored = math::mirror_onto_bottom_right(
            self.center,
            drag,
            self.rotation,
            self.config.control_location,
        );
        let Some(scales) = math::anisotropic_scales(
            self.center,
            bottom_right,
            mirrored,
            self.content_size[1] * 0.5,
            self.init_content_size * 0.5,
        ) else {
            debug!(?drag, "skipping zoom, degenerate geometry");
            return Ok(false);
        };
        self.apply_scale(scales, text_layout)?;
        Ok(true)
    }

    /// Scales both axes by the same factor, from the distance of the drag position (in parent coordinates)
    /// to the center.
    ///
    /// Returns false when the update was skipped because of degenerate geometry.
    pub fn zoom_uniform_towards(
        &mut self,
        drag: na::Point2<f64>,
        text_layout: &dyn TextLayout,
    ) -> Result<bool, OverlayError> {
        let Some(scale) = math::uniform_scale(self.center, drag, self.init_content_size * 0.5)
        else {
            debug!(?drag, "skipping uniform zoom, degenerate geometry");
            return Ok(false);
        };
        self.apply_scale(na::Vector2::repeat(scale), text_layout)?;
        Ok(true)
    }

    fn clamp_or_keep(&self, scale: f64, current: f64) -> f64 {
        if scale.is_nan() {
            current
        } else {
            self.config.clamp_scale(scale)
        }
    }

    /// Lays out the text with the current scales and updates the geometry.
    fn reflow(&mut self, text_layout: &dyn TextLayout) -> Result<(), OverlayError> {
        let width = self.init_content_size[0] * self.width_scale;
        let extents = text_layout.layout(
            &self.content.text,
            width,
            self.font_size(),
            self.content.alignment,
        );
        if !extents.is_finite() || extents[1] <= 0.0 {
            return Err(OverlayError::InvalidContent(format!(
                "text layout returned invalid extents {extents:?} for width {width}"
            )));
        }
        self.content_size = na::vector![width, extents[1]];
        self.update_geometry();
        Ok(())
    }

    fn update_geometry(&mut self) {
        self.layout = ViewLayout::compute(self.content_size, self.tabs.len(), &self.config);
        self.corners = Corners::compute(
            self.layout.content_rect,
            self.rotation,
            self.config.control_icon_offset(),
        );
    }
}

fn validate_extents(extents: na::Vector2<f64>) -> Result<(), OverlayError> {
    if extents.is_finite() && extents[0] > 0.0 && extents[1] > 0.0 {
        Ok(())
    } else {
        Err(OverlayError::InvalidContent(format!(
            "content extents {extents:?} are not valid"
        )))
    }
}

fn normalize_degrees(degrees: f64) -> f64 {
    let normalized = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negative angles up to 360.0
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}
