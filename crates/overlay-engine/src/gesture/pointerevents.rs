// Imports
use super::{GestureController, GestureSession, GestureState};
use crate::hittest::{self, HitTarget};
use crate::{TabKind, WidgetFlags};
use overlay_compose::eventresult::EventResult;
use overlay_compose::point_utils;
use overlay_compose::pointerevent::GestureProgress;
use tracing::{debug, error, trace};

impl GestureController {
    pub(super) fn handle_pointer_event_down(
        &mut self,
        pos: na::Vector2<f64>,
    ) -> (EventResult<GestureProgress>, WidgetFlags) {
        let mut widget_flags = WidgetFlags::default();

        if self.session.state != GestureState::Init {
            debug!(
                state = ?self.session.state,
                "pointer down while a gesture is in progress, finishing it first"
            );
            let (_, flags) = self.handle_pointer_event_cancel();
            widget_flags |= flags;
        }

        let parent = self.to_parent(pos);
        let local = parent - self.overlay.view_origin().coords;
        let state = match hittest::hit_test(local, &self.overlay) {
            HitTarget::ActionRow(kind) => GestureState::Tap(kind),
            HitTarget::ControlIcon => GestureState::Zoom,
            HitTarget::DeleteIcon => GestureState::Rotate,
            HitTarget::Body => {
                if !self.overlay.editable() {
                    self.overlay.set_editable(true);
                    widget_flags.redraw = true;
                }
                GestureState::Outside
            }
            HitTarget::Miss => {
                trace!(?pos, "pointer down misses the overlay");
                return (EventResult::pass_through(GestureProgress::Idle), widget_flags);
            }
        };

        self.session = GestureSession {
            state,
            anchor: parent,
            is_click: !matches!(state, GestureState::Tap(_)),
        };
        debug!(?state, ?pos, "gesture started");

        (
            EventResult::consumed(GestureProgress::InProgress),
            widget_flags,
        )
    }

    pub(super) fn handle_pointer_event_move(
        &mut self,
        pos: na::Vector2<f64>,
    ) -> (EventResult<GestureProgress>, WidgetFlags) {
        let mut widget_flags = WidgetFlags::default();
        let parent = self.to_parent(pos);

        match self.session.state {
            GestureState::Init => {
                return (EventResult::pass_through(GestureProgress::Idle), widget_flags);
            }
            GestureState::Outside
                if point_utils::distance(self.session.anchor, parent)
                    >= self.overlay.config().drag_threshold =>
            {
                debug!("body touch travelled past the drag threshold, dragging");
                self.session.state = GestureState::Drag;
            }
            _ => {}
        }

        match self.session.state {
            GestureState::Drag => {
                self.overlay
                    .apply_translation(parent - self.session.anchor);
                widget_flags.redraw = true;
            }
            GestureState::Zoom => {
                match self
                    .overlay
                    .zoom_towards(parent, self.text_layout.as_ref())
                {
                    Ok(zoomed) => widget_flags.redraw |= zoomed,
                    Err(e) => error!("Zooming the overlay failed, Err: {e:?}"),
                }
            }
            GestureState::Rotate => {
                widget_flags.redraw |= self.overlay.rotate_towards(self.session.anchor, parent);
            }
            GestureState::Init | GestureState::Outside | GestureState::Tap(_) => {
                return (
                    EventResult::consumed(GestureProgress::InProgress),
                    widget_flags,
                );
            }
        }
        self.session.is_click = false;
        self.session.anchor = parent;
        trace!(
            state = ?self.session.state,
            center = ?self.overlay.center(),
            rotation = self.overlay.rotation(),
            scale = ?self.overlay.scale(),
            "overlay manipulated"
        );

        (
            EventResult::consumed(GestureProgress::InProgress),
            widget_flags,
        )
    }

    pub(super) fn handle_pointer_event_up(
        &mut self,
        pos: na::Vector2<f64>,
    ) -> (EventResult<GestureProgress>, WidgetFlags) {
        let mut widget_flags = WidgetFlags::default();
        let session = std::mem::take(&mut self.session);

        match session.state {
            GestureState::Init => {
                return (EventResult::pass_through(GestureProgress::Idle), widget_flags);
            }
            GestureState::Drag | GestureState::Zoom | GestureState::Rotate => {
                widget_flags.commit_layout = true;
                widget_flags.redraw = true;
            }
            _ if session.is_click => self.listener.on_view_tapped(),
            GestureState::Tap(kind) => match kind {
                TabKind::Delete => self.listener.on_delete(),
                TabKind::Edit => self.listener.on_edit(),
                TabKind::Timestamp => self.listener.on_timestamp(),
            },
            GestureState::Outside => {}
        }
        debug!(state = ?session.state, ?pos, "gesture finished");

        (EventResult::consumed(GestureProgress::Finished), widget_flags)
    }

    pub(super) fn handle_pointer_event_cancel(
        &mut self,
    ) -> (EventResult<GestureProgress>, WidgetFlags) {
        let mut widget_flags = WidgetFlags::default();
        let session = std::mem::take(&mut self.session);

        match session.state {
            GestureState::Init => {
                return (EventResult::pass_through(GestureProgress::Idle), widget_flags);
            }
            GestureState::Drag | GestureState::Zoom | GestureState::Rotate => {
                widget_flags.commit_layout = true;
                widget_flags.redraw = true;
            }
            GestureState::Outside | GestureState::Tap(_) => {}
        }
        debug!(state = ?session.state, "gesture cancelled");

        (EventResult::consumed(GestureProgress::Finished), widget_flags)
    }
}
