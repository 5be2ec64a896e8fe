// Modules
mod polygon;

// Re-exports
pub use polygon::{bounding_extents, point_in_polygon, Polygon};
