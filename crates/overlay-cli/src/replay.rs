// Imports
use crate::monospace::MonospaceLayout;
use anyhow::Context;
use overlay_compose::PointerEvent;
use overlay_engine::{
    ActionListener, Corners, GestureController, HostSurface, OverlayConfig, OverlaySnapshot,
    TextAlignment, TextContent,
};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use tracing::{debug, info};

/// A recorded pointer stream, together with the overlay it is replayed against.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename = "replay_script")]
pub(crate) struct ReplayScript {
    #[serde(rename = "text")]
    pub(crate) text: String,
    #[serde(rename = "font_size")]
    pub(crate) font_size: f64,
    #[serde(rename = "alignment")]
    pub(crate) alignment: TextAlignment,
    /// The overlay center in parent coordinates.
    #[serde(rename = "center")]
    pub(crate) center: na::Point2<f64>,
    /// Positions are in hosting surface coordinates.
    #[serde(rename = "events")]
    pub(crate) events: Vec<PointerEvent>,
}

impl Default for ReplayScript {
    fn default() -> Self {
        Self {
            text: String::new(),
            font_size: TextContent::BASE_FONT_SIZE_DEFAULT,
            alignment: TextAlignment::default(),
            center: na::Point2::origin(),
            events: vec![],
        }
    }
}

/// What happened during a replay.
#[derive(Debug, Clone, Default, Serialize)]
pub(crate) struct Journal {
    /// The fired callbacks, in order.
    pub(crate) callbacks: Vec<String>,
    pub(crate) layout_commits: usize,
    pub(crate) redraws: usize,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ReplayReport {
    pub(crate) snapshot: OverlaySnapshot,
    pub(crate) corners: Corners,
    pub(crate) view_size: [f64; 2],
    pub(crate) handled_events: usize,
    pub(crate) journal: Journal,
}

#[derive(Debug)]
struct JournalHost(Rc<RefCell<Journal>>);

impl HostSurface for JournalHost {
    fn request_redraw(&mut self) {
        self.0.borrow_mut().redraws += 1;
    }

    fn commit_layout(&mut self, center: na::Point2<f64>, view_size: na::Vector2<f64>) {
        debug!(?center, ?view_size, "host placed");
        self.0.borrow_mut().layout_commits += 1;
    }
}

#[derive(Debug)]
struct JournalListener(Rc<RefCell<Journal>>);

impl JournalListener {
    fn record(&mut self, callback: &str) {
        info!("{callback} fired");
        self.0.borrow_mut().callbacks.push(callback.to_string());
    }
}

impl ActionListener for JournalListener {
    fn on_delete(&mut self) {
        self.record("delete");
    }

    fn on_edit(&mut self) {
        self.record("edit");
    }

    fn on_timestamp(&mut self) {
        self.record("timestamp");
    }

    fn on_view_tapped(&mut self) {
        self.record("view_tapped");
    }
}

pub(crate) fn run_replay(script: &Path, config: Option<&Path>) -> anyhow::Result<ReplayReport> {
    let script: ReplayScript = serde_json::from_slice(
        &std::fs::read(script)
            .with_context(|| format!("Reading script \"{}\" failed", script.display()))?,
    )
    .context("Parsing the replay script failed")?;
    let config: OverlayConfig = match config {
        Some(config) => serde_json::from_slice(
            &std::fs::read(config)
                .with_context(|| format!("Reading config \"{}\" failed", config.display()))?,
        )
        .context("Parsing the overlay config failed")?,
        None => OverlayConfig::default(),
    };

    replay(script, config)
}

pub(crate) fn replay(script: ReplayScript, config: OverlayConfig) -> anyhow::Result<ReplayReport> {
    let content = TextContent::new(script.text)
        .with_base_font_size(script.font_size)
        .with_alignment(script.alignment);
    let journal = Rc::new(RefCell::new(Journal::default()));
    let mut controller =
        GestureController::create(content, Box::new(MonospaceLayout), config, script.center)?
            .with_host(Box::new(JournalHost(Rc::clone(&journal))))
            .with_listener(Box::new(JournalListener(Rc::clone(&journal))));
    controller.commit_layout();

    let mut handled_events = 0;
    for (index, event) in script.events.into_iter().enumerate() {
        let result = controller.handle_event(event);
        debug!(index, ?event, handled = result.handled, progress = ?result.progress, "event replayed");
        if result.handled {
            handled_events += 1;
        }
    }

    let overlay = controller.overlay();
    let view_size = overlay.view_size();
    let journal = journal.borrow().clone();
    info!(
        handled_events,
        callbacks = journal.callbacks.len(),
        "replay finished"
    );

    Ok(ReplayReport {
        snapshot: overlay.snapshot(),
        corners: *overlay.corners(),
        view_size: [view_size[0], view_size[1]],
        handled_events,
        journal,
    })
}
