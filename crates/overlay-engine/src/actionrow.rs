// Imports
use crate::OverlayError;
use overlay_compose::ext::AabbExt;
use p2d::bounding_volume::Aabb;
use serde::{Deserialize, Serialize};

/// The kind of an icon in the action row.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename = "tab_kind")]
pub enum TabKind {
    #[serde(rename = "delete")]
    Delete,
    #[serde(rename = "edit")]
    Edit,
    #[serde(rename = "timestamp")]
    Timestamp,
}

impl TabKind {
    /// The icons shown, from left to right, for the given tab count.
    pub fn row_for_count(count: u32) -> Result<&'static [TabKind], OverlayError> {
        match count {
            0 => Ok(&[]),
            1 => Ok(&[TabKind::Delete]),
            2 => Ok(&[TabKind::Delete, TabKind::Timestamp]),
            3 => Ok(&[TabKind::Delete, TabKind::Edit, TabKind::Timestamp]),
            _ => Err(OverlayError::InvalidTabCount(count)),
        }
    }
}

/// The row of tappable icons above the overlay, in hosting surface coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionRow {
    /// The left edge of the first icon.
    pub left: f64,
    /// The top edge of the row.
    pub top: f64,
    pub icon_size: na::Vector2<f64>,
    /// The gap between two icons.
    pub padding: f64,
    pub kinds: &'static [TabKind],
}

impl ActionRow {
    /// The width that `count` icons occupy, including the gaps between them.
    pub fn row_width(count: usize, icon_width: f64, padding: f64) -> f64 {
        if count == 0 {
            return 0.0;
        }
        icon_width * count as f64 + padding * (count - 1) as f64
    }

    pub fn width(&self) -> f64 {
        Self::row_width(self.kinds.len(), self.icon_size[0], self.padding)
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new_positive(
            na::point![self.left, self.top],
            na::point![self.left + self.width(), self.top + self.icon_size[1]],
        )
    }

    /// The bounds of the icon at the index, for drawing.
    pub fn icon_bounds(&self, index: usize) -> Option<Aabb> {
        if index >= self.kinds.len() {
            return None;
        }
        let left = self.left + (self.icon_size[0] + self.padding) * index as f64;
        Some(Aabb::new(
            na::point![left, self.top],
            na::point![left + self.icon_size[0], self.top + self.icon_size[1]],
        ))
    }

    /// Whether the position lies inside the row. The row edges are excluded.
    pub fn contains(&self, pos: na::Point2<f64>) -> bool {
        !self.kinds.is_empty() && self.bounds().contains_point_exclusive(pos)
    }

    /// Resolves which icon a x position selects.
    ///
    /// Every icon owns a bucket of its width plus the gap that follows it, open on the left and
    /// closed on the right. Positions past the last bucket select the last icon.
    pub fn tab_at(&self, x: f64) -> Option<TabKind> {
        let stride = self.icon_size[0] + self.padding;
        let offset = x - self.left;
        if self.kinds.is_empty() || stride <= 0.0 || offset <= 0.0 {
            return None;
        }
        let index = ((offset / stride).ceil() as usize).saturating_sub(1);
        Some(self.kinds[index.min(self.kinds.len() - 1)])
    }
}
