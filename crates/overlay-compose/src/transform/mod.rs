// Modules
mod transformable;

// Re-exports
pub use transformable::Transformable;
