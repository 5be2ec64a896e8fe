//! Routes a touch on the hosting surface to the part of the overlay it lands on.

// Imports
use crate::{OverlayTransform, TabKind};
use overlay_compose::point_utils;

/// What a touch landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// An icon of the action row.
    ActionRow(TabKind),
    /// The zoom control icon.
    ControlIcon,
    /// The rotate icon.
    DeleteIcon,
    /// The quad itself.
    Body,
    /// Nothing of the overlay.
    Miss,
}

/// Classifies the position (hosting surface coordinates).
///
/// Regions may overlap, so they are tested in a fixed order: action row, control icon, delete icon, body.
/// The order does not depend on whether the overlay is editable.
pub fn hit_test(pos: na::Point2<f64>, overlay: &OverlayTransform) -> HitTarget {
    if let Some(kind) = overlay
        .action_row()
        .filter(|row| row.contains(pos))
        .and_then(|row| row.tab_at(pos[0]))
    {
        return HitTarget::ActionRow(kind);
    }
    if point_utils::distance(pos, overlay.control_point()) < overlay.control_hit_radius() {
        return HitTarget::ControlIcon;
    }
    if point_utils::distance(pos, overlay.delete_point()) < overlay.delete_hit_radius() {
        return HitTarget::DeleteIcon;
    }
    if overlay.corners().hit_polygon().contains_point(pos) {
        return HitTarget::Body;
    }
    HitTarget::Miss
}
