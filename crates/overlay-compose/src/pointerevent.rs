// Imports
use serde::{Deserialize, Serialize};

/// A pointer event, as delivered by the hosting surface.
///
/// Positions are in the local coordinate space of the surface that receives the event.
/// A stream always starts with a down event, followed by zero or more move events,
/// and is terminated by either an up or a cancel event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename = "pointer_event")]
pub enum PointerEvent {
    /// The pointer was pressed down.
    #[serde(rename = "down")]
    Down {
        /// The position of the event.
        pos: na::Vector2<f64>,
    },
    /// The pointer moved while being pressed down.
    #[serde(rename = "move")]
    Move {
        /// The position of the event.
        pos: na::Vector2<f64>,
    },
    /// The pointer was released.
    #[serde(rename = "up")]
    Up {
        /// The position of the event.
        pos: na::Vector2<f64>,
    },
    /// Cancel event when the pointer vanishes unexpected, for example when a second finger interrupts.
    ///
    /// Should finish all current actions and reset all state.
    #[serde(rename = "cancel")]
    Cancel,
}

impl PointerEvent {
    /// The position of the event, None for cancel events.
    pub fn pos(&self) -> Option<na::Vector2<f64>> {
        match self {
            Self::Down { pos } | Self::Move { pos } | Self::Up { pos } => Some(*pos),
            Self::Cancel => None,
        }
    }
}

/// The progress of a gesture. Used wherever there is internal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum GestureProgress {
    /// In idle state.
    Idle,
    /// In progress state.
    InProgress,
    /// The gesture is finished.
    Finished,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_stream() {
        let events: Vec<PointerEvent> = serde_json::from_str(
            r#"[{"down": {"pos": [1.0, 2.0]}}, {"move": {"pos": [3.5, 2.0]}}, {"up": {"pos": [3.5, 2.0]}}, "cancel"]"#,
        )
        .unwrap();

        assert_eq!(
            events,
            vec![
                PointerEvent::Down {
                    pos: na::vector![1.0, 2.0]
                },
                PointerEvent::Move {
                    pos: na::vector![3.5, 2.0]
                },
                PointerEvent::Up {
                    pos: na::vector![3.5, 2.0]
                },
                PointerEvent::Cancel,
            ]
        );
        assert_eq!(events[3].pos(), None);
        assert_eq!(events[1].pos(), Some(na::vector![3.5, 2.0]));
    }
}
