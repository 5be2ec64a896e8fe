// Imports
use crate::{ActionRow, OverlayConfig};
use p2d::bounding_volume::Aabb;

/// Placement of the content box inside the hosting surface, and the size of the surface.
///
/// The surface is sized so the content fits at any rotation (its diagonal), with room for the rotate
/// icon on the sides and for the action row above. The rotation pivot is the center of the surface,
/// so a host centering the surface on the overlay center places it where the engine expects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewLayout {
    pub view_size: na::Vector2<f64>,
    /// The unrotated content box, before the control icon offset is applied.
    pub content_rect: Aabb,
    pub action_row_width: f64,
}

impl ViewLayout {
    pub fn compute(content_size: na::Vector2<f64>, tab_count: usize, config: &OverlayConfig) -> Self {
        let diagonal = content_size.magnitude();
        let action_row_width = ActionRow::row_width(
            tab_count,
            config.action_icon_size[0],
            config.action_icon_padding,
        );
        let view_size = na::vector![
            action_row_width
                .max(diagonal + config.rotate_icon_size[0] + config.frame_padding * 2.0),
            diagonal + config.action_icon_size[1] * 2.0 + config.frame_padding * 2.0
        ];

        let offset_left = (view_size[0] - content_size[0] - config.control_icon_size[0]) * 0.5;
        let offset_top = (view_size[1] - content_size[1] - config.control_icon_size[1]) * 0.5;
        let content_rect = Aabb::new(
            na::point![offset_left, offset_top],
            na::point![offset_left + content_size[0], offset_top + content_size[1]],
        );

        Self {
            view_size,
            content_rect,
            action_row_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn content_is_centered_in_the_view() {
        let config = OverlayConfig::default();
        let layout = ViewLayout::compute(na::vector![300.0, 400.0], 0, &config);

        assert_relative_eq!(layout.view_size, na::vector![548.0, 580.0]);
        // with the icon offset applied, the content center is the view center
        let shifted_center = layout.content_rect.center() + config.control_icon_offset();
        assert_relative_eq!(shifted_center.coords, layout.view_size * 0.5);
        assert_relative_eq!(layout.content_rect.extents(), na::vector![300.0, 400.0]);
    }

    #[test]
    fn wide_action_row_widens_the_view() {
        let mut config = OverlayConfig::default();
        config.action_icon_size = na::vector![200.0, 40.0];
        let layout = ViewLayout::compute(na::vector![30.0, 40.0], 3, &config);

        assert_relative_eq!(layout.action_row_width, 616.0);
        assert_relative_eq!(layout.view_size[0], 616.0);
    }
}
