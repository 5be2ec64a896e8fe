// Imports
use std::fmt::Debug;

/// The event result.
#[derive(Debug, Clone)]
pub struct EventResult<T>
where
    T: Debug,
{
    /// Whether the event was consumed.
    pub handled: bool,
    /// Whether the event should be propagated further to the default handling of the hosting surface.
    pub propagate: EventPropagation,
    /// The gesture progress.
    pub progress: T,
}

/// Whether the event should be propagated further.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EventPropagation {
    /// Proceed with the propagation.
    Proceed,
    /// Stop the propagation.
    Stop,
}

impl<T> EventResult<T>
where
    T: Debug,
{
    /// The event was consumed and must not be handled by anyone else.
    pub fn consumed(progress: T) -> Self {
        Self {
            handled: true,
            propagate: EventPropagation::Stop,
            progress,
        }
    }

    /// The event was not consumed and falls through.
    pub fn pass_through(progress: T) -> Self {
        Self {
            handled: false,
            propagate: EventPropagation::Proceed,
            progress,
        }
    }
}
