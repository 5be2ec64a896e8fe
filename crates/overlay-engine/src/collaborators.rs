//! The services the engine calls into: text layout, the hosting surface and the action callbacks.
//!
//! The engine never draws. Everything it needs to know about rendered text comes from [TextLayout],
//! everything it wants the surface to do goes through [HostSurface] and [ActionListener].

// Imports
use serde::{Deserialize, Serialize};

/// Horizontal alignment of the text lines inside the content box.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename = "text_alignment")]
pub enum TextAlignment {
    #[serde(rename = "left")]
    Left,
    #[default]
    #[serde(rename = "center")]
    Center,
    #[serde(rename = "right")]
    Right,
}

/// The text displayed by the overlay.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default, rename = "text_content")]
pub struct TextContent {
    #[serde(rename = "text")]
    pub text: String,
    /// The font size at a height scale of 1.0.
    #[serde(rename = "base_font_size")]
    pub base_font_size: f64,
    #[serde(rename = "alignment")]
    pub alignment: TextAlignment,
}

impl Default for TextContent {
    fn default() -> Self {
        Self {
            text: String::new(),
            base_font_size: Self::BASE_FONT_SIZE_DEFAULT,
            alignment: TextAlignment::default(),
        }
    }
}

impl TextContent {
    pub const BASE_FONT_SIZE_DEFAULT: f64 = 34.0;

    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_base_font_size(mut self, base_font_size: f64) -> Self {
        self.base_font_size = base_font_size;
        self
    }

    pub fn with_alignment(mut self, alignment: TextAlignment) -> Self {
        self.alignment = alignment;
        self
    }
}

/// Lays out text into a block and reports its pixel extents.
pub trait TextLayout: std::fmt::Debug {
    /// The extents of the text laid out at its natural width (no wrapping besides explicit line breaks).
    fn measure(&self, content: &TextContent) -> na::Vector2<f64>;

    /// The extents of the text wrapped into the given width, rendered with the given font size.
    fn layout(
        &self,
        text: &str,
        width: f64,
        font_size: f64,
        alignment: TextAlignment,
    ) -> na::Vector2<f64>;
}

/// The surface that hosts the overlay.
///
/// Calls are fire and forget. Implementations must not feed pointer events back into the controller
/// from within these callbacks.
pub trait HostSurface: std::fmt::Debug {
    /// The overlay needs to be redrawn.
    fn request_redraw(&mut self);

    /// Place the hosting surface so that the overlay center lands on `center` (parent coordinates)
    /// and resize it to `view_size`.
    fn commit_layout(&mut self, center: na::Point2<f64>, view_size: na::Vector2<f64>);
}

/// Receives the taps on the overlay.
pub trait ActionListener: std::fmt::Debug {
    /// The delete icon of the action row was tapped.
    fn on_delete(&mut self) {}
    /// The edit icon of the action row was tapped.
    fn on_edit(&mut self) {}
    /// The timestamp icon of the action row was tapped.
    fn on_timestamp(&mut self) {}
    /// The overlay body was tapped without moving.
    fn on_view_tapped(&mut self) {}
}

/// A hosting surface that ignores all requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHost;

impl HostSurface for NoopHost {
    fn request_redraw(&mut self) {}

    fn commit_layout(&mut self, _center: na::Point2<f64>, _view_size: na::Vector2<f64>) {}
}

/// An action listener that ignores all taps.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopListener;

impl ActionListener for NoopListener {}
