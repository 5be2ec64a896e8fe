// Modules
mod pointerevents;

// Imports
use crate::{
    ActionListener, Corners, CornerLocation, HostSurface, NoopHost, NoopListener, OverlayConfig,
    OverlayError, OverlayTransform, TabKind, TextContent, TextLayout, WidgetFlags,
};
use overlay_compose::eventresult::EventResult;
use overlay_compose::pointerevent::{GestureProgress, PointerEvent};
use p2d::bounding_volume::Aabb;
use tracing::debug;

/// The state of a gesture session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    /// No pointer is down.
    #[default]
    Init,
    /// The body was touched, but the pointer did not travel far enough to drag.
    Outside,
    /// Moving the overlay.
    Drag,
    /// Scaling with the control icon.
    Zoom,
    /// Rotating with the rotate icon.
    Rotate,
    /// An icon of the action row was touched.
    Tap(TabKind),
}

impl GestureState {
    /// Whether the overlay is being manipulated.
    pub fn is_manipulating(self) -> bool {
        matches!(self, Self::Drag | Self::Zoom | Self::Rotate)
    }
}

/// A single pointer stream, from down to up.
#[derive(Debug, Clone, Copy)]
struct GestureSession {
    state: GestureState,
    /// The last recorded pointer position, in parent coordinates.
    anchor: na::Point2<f64>,
    /// Cleared once the overlay was manipulated or an action icon was touched.
    is_click: bool,
}

impl Default for GestureSession {
    fn default() -> Self {
        Self {
            state: GestureState::Init,
            anchor: na::Point2::origin(),
            is_click: true,
        }
    }
}

/// Turns pointer streams into manipulations of the overlay and taps on its controls.
///
/// Pointer positions are expected in the coordinates of the hosting surface. The surface is only asked to
/// move and resize when a manipulation ends, so positions are mapped to parent coordinates with the
/// surface origin of the last committed layout.
#[derive(Debug)]
pub struct GestureController {
    overlay: OverlayTransform,
    text_layout: Box<dyn TextLayout>,
    host: Box<dyn HostSurface>,
    listener: Box<dyn ActionListener>,
    session: GestureSession,
    placed_origin: na::Point2<f64>,
}

impl GestureController {
    /// A controller for the overlay, assuming the hosting surface is placed where the overlay wants it.
    pub fn new(overlay: OverlayTransform, text_layout: Box<dyn TextLayout>) -> Self {
        let placed_origin = overlay.view_origin();
        Self {
            overlay,
            text_layout,
            host: Box::new(NoopHost),
            listener: Box::new(NoopListener),
            session: GestureSession::default(),
            placed_origin,
        }
    }

    /// Creates the overlay for the content and a controller for it.
    pub fn create(
        content: TextContent,
        text_layout: Box<dyn TextLayout>,
        config: OverlayConfig,
        center: na::Point2<f64>,
    ) -> Result<Self, OverlayError> {
        let overlay = OverlayTransform::new(content, text_layout.as_ref(), config, center)?;
        Ok(Self::new(overlay, text_layout))
    }

    pub fn with_host(mut self, host: Box<dyn HostSurface>) -> Self {
        self.host = host;
        self
    }

    pub fn with_listener(mut self, listener: Box<dyn ActionListener>) -> Self {
        self.listener = listener;
        self
    }

    pub fn overlay(&self) -> &OverlayTransform {
        &self.overlay
    }

    pub fn state(&self) -> GestureState {
        self.session.state
    }

    /// The action row is hidden while the overlay is manipulated.
    pub fn action_row_visible(&self) -> bool {
        !self.session.state.is_manipulating()
    }

    pub fn corners(&self) -> &Corners {
        self.overlay.corners()
    }

    pub fn bounding_extents(&self) -> Aabb {
        self.overlay.bounding_extents()
    }

    pub fn scale(&self) -> na::Vector2<f64> {
        self.overlay.scale()
    }

    pub fn rotation(&self) -> f64 {
        self.overlay.rotation()
    }

    pub fn set_editable(&mut self, editable: bool) {
        self.overlay.set_editable(editable);
        self.dispatch(WidgetFlags::redraw());
    }

    pub fn set_control_location(&mut self, location: CornerLocation) {
        self.overlay.set_control_location(location);
        self.dispatch(WidgetFlags::redraw());
    }

    pub fn set_delete_location(&mut self, location: CornerLocation) {
        self.overlay.set_delete_location(location);
        self.dispatch(WidgetFlags::redraw());
    }

    pub fn set_tab_count(&mut self, count: u32) -> Result<(), OverlayError> {
        self.overlay.set_tab_count(count)?;
        self.dispatch(WidgetFlags {
            redraw: true,
            commit_layout: true,
        });
        Ok(())
    }

    /// Asks the host to place the surface for the current overlay layout.
    pub fn commit_layout(&mut self) {
        self.dispatch(WidgetFlags {
            redraw: false,
            commit_layout: true,
        });
    }

    /// Handles a pointer event.
    ///
    /// Events that don't touch the overlay are not handled and propagate to the default handling of the host.
    pub fn handle_event(&mut self, event: PointerEvent) -> EventResult<GestureProgress> {
        let (event_result, widget_flags) = match event {
            PointerEvent::Down { pos } => self.handle_pointer_event_down(pos),
            PointerEvent::Move { pos } => self.handle_pointer_event_move(pos),
            PointerEvent::Up { pos } => self.handle_pointer_event_up(pos),
            PointerEvent::Cancel => self.handle_pointer_event_cancel(),
        };
        self.dispatch(widget_flags);
        event_result
    }

    /// Returns whether the pointer down was consumed.
    pub fn on_pointer_down(&mut self, pos: na::Vector2<f64>) -> bool {
        self.handle_event(PointerEvent::Down { pos }).handled
    }

    pub fn on_pointer_move(&mut self, pos: na::Vector2<f64>) {
        let _ = self.handle_event(PointerEvent::Move { pos });
    }

    pub fn on_pointer_up(&mut self, pos: na::Vector2<f64>) {
        let _ = self.handle_event(PointerEvent::Up { pos });
    }

    /// Ends the current gesture without firing any tap callbacks.
    pub fn on_pointer_cancel(&mut self) {
        let _ = self.handle_event(PointerEvent::Cancel);
    }

    fn to_parent(&self, pos: na::Vector2<f64>) -> na::Point2<f64> {
        self.placed_origin + pos
    }

    fn dispatch(&mut self, widget_flags: WidgetFlags) {
        if widget_flags.commit_layout {
            let center = self.overlay.center();
            let view_size = self.overlay.view_size();
            debug!(?center, ?view_size, "committing layout");
            self.host.commit_layout(center, view_size);
            self.placed_origin = self.overlay.view_origin();
        }
        if widget_flags.redraw {
            self.host.request_redraw();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::tests::BlockLayout;
    use approx::assert_relative_eq;
    use overlay_compose::eventresult::EventPropagation;
    use overlay_compose::point_utils::rotate_about;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    struct Recorder {
        redraws: usize,
        commits: Vec<(na::Point2<f64>, na::Vector2<f64>)>,
        deletes: usize,
        edits: usize,
        timestamps: usize,
        view_taps: usize,
    }

    #[derive(Debug)]
    struct RecordingHost(Rc<RefCell<Recorder>>);

    impl HostSurface for RecordingHost {
        fn request_redraw(&mut self) {
            self.0.borrow_mut().redraws += 1;
        }

        fn commit_layout(&mut self, center: na::Point2<f64>, view_size: na::Vector2<f64>) {
            self.0.borrow_mut().commits.push((center, view_size));
        }
    }

    #[derive(Debug)]
    struct RecordingListener(Rc<RefCell<Recorder>>);

    impl ActionListener for RecordingListener {
        fn on_delete(&mut self) {
            self.0.borrow_mut().deletes += 1;
        }

        fn on_edit(&mut self) {
            self.0.borrow_mut().edits += 1;
        }

        fn on_timestamp(&mut self) {
            self.0.borrow_mut().timestamps += 1;
        }

        fn on_view_tapped(&mut self) {
            self.0.borrow_mut().view_taps += 1;
        }
    }

    fn controller_with(config: OverlayConfig) -> (GestureController, Rc<RefCell<Recorder>>) {
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        let controller = GestureController::create(
            TextContent::new("hello overlay"),
            Box::new(BlockLayout),
            config,
            na::point![500.0, 400.0],
        )
        .unwrap()
        .with_host(Box::new(RecordingHost(Rc::clone(&recorder))))
        .with_listener(Box::new(RecordingListener(Rc::clone(&recorder))));
        (controller, recorder)
    }

    /// The quad center in hosting surface coordinates.
    fn body(controller: &GestureController) -> na::Vector2<f64> {
        controller.corners().center().coords
    }

    #[test]
    fn body_touch_turns_into_drag_past_the_threshold() {
        let (mut controller, recorder) = controller_with(OverlayConfig::default());
        let anchor = body(&controller);

        assert!(controller.on_pointer_down(anchor));
        assert_eq!(controller.state(), GestureState::Outside);

        controller.on_pointer_move(anchor + na::vector![3.0, 0.0]);
        assert_eq!(controller.state(), GestureState::Outside);
        assert_relative_eq!(controller.overlay().center(), na::point![500.0, 400.0]);

        controller.on_pointer_move(anchor + na::vector![15.0, 0.0]);
        assert_eq!(controller.state(), GestureState::Drag);
        assert!(!controller.action_row_visible());
        assert_relative_eq!(controller.overlay().center(), na::point![515.0, 400.0]);

        controller.on_pointer_move(anchor + na::vector![25.0, 5.0]);
        assert_relative_eq!(controller.overlay().center(), na::point![525.0, 405.0]);
        assert!(recorder.borrow().commits.is_empty());

        controller.on_pointer_up(anchor + na::vector![25.0, 5.0]);
        assert_eq!(controller.state(), GestureState::Init);
        assert!(controller.action_row_visible());

        let recorder = recorder.borrow();
        assert_eq!(recorder.commits.len(), 1);
        assert_relative_eq!(recorder.commits[0].0, na::point![525.0, 405.0]);
        assert_relative_eq!(recorder.commits[0].1, controller.overlay().view_size());
        assert_eq!(recorder.view_taps, 0);
        assert!(recorder.redraws >= 1);
    }

    #[test]
    fn drag_continues_after_commit() {
        let (mut controller, _recorder) = controller_with(OverlayConfig::default());

        for _ in 0..2 {
            let anchor = body(&controller);
            controller.on_pointer_down(anchor);
            controller.on_pointer_move(anchor + na::vector![20.0, 0.0]);
            controller.on_pointer_up(anchor + na::vector![20.0, 0.0]);
        }
        assert_relative_eq!(controller.overlay().center(), na::point![540.0, 400.0]);
    }

    #[test]
    fn small_motion_is_a_tap() {
        let (mut controller, recorder) = controller_with(OverlayConfig::default());
        let anchor = body(&controller);

        controller.on_pointer_down(anchor);
        controller.on_pointer_move(anchor + na::vector![3.0, 0.0]);
        controller.on_pointer_up(anchor + na::vector![3.0, 0.0]);

        let recorder = recorder.borrow();
        assert_eq!(recorder.view_taps, 1);
        assert!(recorder.commits.is_empty());
    }

    #[test]
    fn miss_passes_through() {
        let (mut controller, recorder) = controller_with(OverlayConfig::default());

        let result = controller.handle_event(PointerEvent::Down {
            pos: na::vector![0.0, 0.0],
        });
        assert!(!result.handled);
        assert_eq!(result.propagate, EventPropagation::Proceed);
        assert_eq!(result.progress, GestureProgress::Idle);

        let result = controller.handle_event(PointerEvent::Move {
            pos: na::vector![40.0, 40.0],
        });
        assert!(!result.handled);
        let result = controller.handle_event(PointerEvent::Up {
            pos: na::vector![40.0, 40.0],
        });
        assert!(!result.handled);

        let recorder = recorder.borrow();
        assert_eq!(recorder.view_taps, 0);
        assert!(recorder.commits.is_empty());
        assert_relative_eq!(controller.overlay().center(), na::point![500.0, 400.0]);
    }

    #[test]
    fn event_results_of_a_stream() {
        let (mut controller, _recorder) = controller_with(OverlayConfig::default());
        let anchor = body(&controller);

        let down = controller.handle_event(PointerEvent::Down { pos: anchor });
        assert!(down.handled);
        assert_eq!(down.propagate, EventPropagation::Stop);
        assert_eq!(down.progress, GestureProgress::InProgress);

        let up = controller.handle_event(PointerEvent::Up { pos: anchor });
        assert!(up.handled);
        assert_eq!(up.progress, GestureProgress::Finished);
    }

    #[test]
    fn action_row_taps_fire_callbacks() {
        let mut config = OverlayConfig::default();
        config.tab_count = 3;
        let (mut controller, recorder) = controller_with(config);
        let row = controller.overlay().action_row().unwrap();

        for index in 0..3 {
            let pos = row.icon_bounds(index).unwrap().center().coords;
            assert!(controller.on_pointer_down(pos));
            assert!(matches!(controller.state(), GestureState::Tap(_)));
            // moving over a tab doesn't manipulate the overlay
            controller.on_pointer_move(pos + na::vector![0.0, 30.0]);
            controller.on_pointer_up(pos + na::vector![0.0, 30.0]);
        }

        let recorder = recorder.borrow();
        assert_eq!(recorder.deletes, 1);
        assert_eq!(recorder.edits, 1);
        assert_eq!(recorder.timestamps, 1);
        assert_eq!(recorder.view_taps, 0);
        assert!(recorder.commits.is_empty());
        assert_relative_eq!(controller.overlay().center(), na::point![500.0, 400.0]);
    }

    #[test]
    fn rotate_with_the_rotate_icon() {
        let (mut controller, recorder) = controller_with(OverlayConfig::default());
        let pivot = controller.corners().center();
        let start = controller.overlay().delete_point();

        assert!(controller.on_pointer_down(start.coords));
        assert_eq!(controller.state(), GestureState::Rotate);
        for step in 1..=3 {
            let pos = rotate_about(start, pivot, 30.0 * step as f64);
            controller.on_pointer_move(pos.coords);
        }
        assert_relative_eq!(controller.rotation(), 90.0, epsilon = 1e-6);
        assert_relative_eq!(controller.scale(), na::vector![1.0, 1.0]);

        controller.on_pointer_up(rotate_about(start, pivot, 90.0).coords);
        assert_eq!(recorder.borrow().commits.len(), 1);
        assert_eq!(recorder.borrow().view_taps, 0);
    }

    #[test]
    fn zoom_with_the_control_icon() {
        let (mut controller, recorder) = controller_with(OverlayConfig::default());
        let pivot = controller.corners().center();
        let bottom_right = controller.corners().bottom_right;

        assert!(controller.on_pointer_down(bottom_right.coords));
        assert_eq!(controller.state(), GestureState::Zoom);
        controller.on_pointer_move((pivot + (bottom_right - pivot) * 2.0).coords);

        assert_relative_eq!(controller.scale(), na::vector![2.0, 2.0], epsilon = 1e-6);
        assert_relative_eq!(
            controller.overlay().content_size(),
            na::vector![200.0, 80.0],
            epsilon = 1e-4
        );

        controller.on_pointer_up((pivot + (bottom_right - pivot) * 2.0).coords);
        let recorder = recorder.borrow();
        assert_eq!(recorder.commits.len(), 1);
        assert_relative_eq!(recorder.commits[0].0, na::point![500.0, 400.0]);
        assert_relative_eq!(recorder.commits[0].1, controller.overlay().view_size());
        // the surface grew around the unchanged center
        assert_relative_eq!(
            controller.overlay().to_parent(controller.corners().center()),
            na::point![500.0, 400.0],
            epsilon = 1e-9
        );
    }

    #[test]
    fn cancel_commits_without_callbacks() {
        let mut config = OverlayConfig::default();
        config.tab_count = 1;
        let (mut controller, recorder) = controller_with(config);
        let anchor = body(&controller);

        // cancel during a drag commits the moved layout
        controller.on_pointer_down(anchor);
        controller.on_pointer_move(anchor + na::vector![20.0, 0.0]);
        controller.on_pointer_cancel();
        assert_eq!(controller.state(), GestureState::Init);
        assert_eq!(recorder.borrow().commits.len(), 1);

        // cancel of a body touch is not a tap
        let anchor = body(&controller);
        controller.on_pointer_down(anchor);
        controller.on_pointer_cancel();

        // cancel of a tab touch doesn't fire it
        let row = controller.overlay().action_row().unwrap();
        controller.on_pointer_down(row.bounds().center().coords);
        controller.on_pointer_cancel();

        let recorder = recorder.borrow();
        assert_eq!(recorder.commits.len(), 1);
        assert_eq!(recorder.view_taps, 0);
        assert_eq!(recorder.deletes, 0);
    }

    #[test]
    fn body_touch_makes_the_overlay_editable() {
        let mut config = OverlayConfig::default();
        config.editable = false;
        let (mut controller, recorder) = controller_with(config);
        let bottom_right = controller.corners().bottom_right;

        // the control icon takes touches while not editable too
        assert!(controller.on_pointer_down(bottom_right.coords + na::vector![3.0, 3.0]));
        assert_eq!(controller.state(), GestureState::Zoom);
        assert!(!controller.overlay().editable());
        controller.on_pointer_cancel();

        let redraws = recorder.borrow().redraws;
        assert!(controller.on_pointer_down(body(&controller)));
        assert_eq!(controller.state(), GestureState::Outside);
        assert!(controller.overlay().editable());
        assert_eq!(recorder.borrow().redraws, redraws + 1);
    }

    #[test]
    fn zoom_with_the_control_icon_at_the_top_left() {
        let mut config = OverlayConfig::default();
        config.control_location = CornerLocation::TopLeft;
        let (mut controller, _recorder) = controller_with(config);
        let pivot = controller.corners().center();
        let top_left = controller.corners().top_left;

        assert!(controller.on_pointer_down(top_left.coords));
        assert_eq!(controller.state(), GestureState::Zoom);
        controller.on_pointer_move((pivot + (top_left - pivot) * 1.5).coords);

        assert_relative_eq!(controller.scale(), na::vector![1.5, 1.5], epsilon = 1e-6);
    }

    #[test]
    fn host_centered_surface_routes_touches() {
        let (mut controller, recorder) = controller_with(OverlayConfig::default());
        let anchor = body(&controller);
        controller.on_pointer_down(anchor);
        controller.on_pointer_move(anchor + na::vector![30.0, 10.0]);
        controller.on_pointer_up(anchor + na::vector![30.0, 10.0]);

        // the host centers the committed surface on the committed center
        let (center, view_size) = recorder.borrow().commits[0];
        let host_origin = center - view_size * 0.5;
        let bottom_right = controller
            .overlay()
            .to_parent(controller.corners().bottom_right);
        let top_right = controller.overlay().to_parent(controller.corners().top_right);

        assert!(controller.on_pointer_down(bottom_right.coords - host_origin.coords));
        assert_eq!(controller.state(), GestureState::Zoom);
        controller.on_pointer_cancel();
        assert!(controller.on_pointer_down(top_right.coords - host_origin.coords));
        assert_eq!(controller.state(), GestureState::Rotate);
        controller.on_pointer_cancel();
        assert!(controller.on_pointer_down(center - host_origin));
        assert_eq!(controller.state(), GestureState::Outside);
    }

    #[test]
    fn tab_count_changes_commit_the_layout() {
        let (mut controller, recorder) = controller_with(OverlayConfig::default());

        controller.set_tab_count(3).unwrap();
        assert!(controller.overlay().action_row().is_some());
        {
            let recorder = recorder.borrow();
            assert_eq!(recorder.commits.len(), 1);
            assert_relative_eq!(recorder.commits[0].1[0], 232.0);
        }

        assert!(matches!(
            controller.set_tab_count(4),
            Err(OverlayError::InvalidTabCount(4))
        ));
        assert_eq!(recorder.borrow().commits.len(), 1);
    }
}
