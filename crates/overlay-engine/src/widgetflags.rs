/// Flags collected while handling an event, telling the hosting surface what needs to be done.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct WidgetFlags {
    /// Needs surface redrawing.
    pub redraw: bool,
    /// The hosting surface needs to be re-placed and resized with the current overlay layout.
    pub commit_layout: bool,
}

impl Default for WidgetFlags {
    fn default() -> Self {
        Self {
            redraw: false,
            commit_layout: false,
        }
    }
}

impl WidgetFlags {
    /// Merge with another WidgetFlags struct.
    pub fn merge(&mut self, other: Self) {
        self.redraw |= other.redraw;
        self.commit_layout |= other.commit_layout;
    }

    /// Only a redraw.
    pub fn redraw() -> Self {
        Self {
            redraw: true,
            ..Self::default()
        }
    }
}

impl std::ops::BitOrAssign for WidgetFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.merge(rhs);
    }
}
