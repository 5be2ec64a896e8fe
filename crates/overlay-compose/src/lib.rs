#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![allow(clippy::single_match)]

//! the overlay-compose crate provides the overlay engine with its geometric building blocks:
//! point and vector math, polygons, transformations and the pointer events that drive gestures.

// Modules
/// Event result.
pub mod eventresult;
/// module for extension traits for foreign types
pub mod ext;
/// point math utilities
pub mod point_utils;
/// module for pointer events
pub mod pointerevent;
/// utilities for serializing / deserializing
pub mod serialize;
/// module for shapes
pub mod shapes;
/// module for transformation
pub mod transform;

// Re-exports
pub use eventresult::EventResult;
pub use pointerevent::PointerEvent;
pub use shapes::Polygon;
pub use transform::Transformable;

// Renames
extern crate nalgebra as na;
extern crate parry2d_f64 as p2d;
