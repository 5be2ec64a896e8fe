#![warn(missing_debug_implementations)]
#![allow(clippy::field_reassign_with_default)]
#![allow(clippy::single_match)]
#![allow(clippy::derivable_impls)]

//! The overlay-engine crate holds the geometry and gesture engine of a manipulable text overlay.
//! It keeps the rotated and scaled quad of the overlay, routes touches to the overlay controls
//! and turns pointer streams into drags, rotations, zooms and taps.
//!
//! The main entry point is the [GestureController] struct.

// Modules
pub mod actionrow;
pub mod collaborators;
pub mod config;
pub mod error;
pub mod gesture;
pub mod hittest;
pub mod overlay;
pub mod widgetflags;

// Re-exports
pub use actionrow::{ActionRow, TabKind};
pub use collaborators::{
    ActionListener, HostSurface, NoopHost, NoopListener, TextAlignment, TextContent, TextLayout,
};
pub use config::{CornerLocation, OverlayConfig};
pub use error::OverlayError;
pub use gesture::{GestureController, GestureState};
pub use hittest::HitTarget;
pub use overlay::{Corners, OverlaySnapshot, OverlayTransform};
pub use widgetflags::WidgetFlags;

// Renames
extern crate nalgebra as na;
extern crate parry2d_f64 as p2d;
