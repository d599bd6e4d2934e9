//! Event types carried by the stagehand bus.
//!
//! Modules that never reference each other communicate through these
//! messages: game flow publishes, panels and the UI manager subscribe.
//! Each event maps to exactly one [`Topic`], which is the subscription
//! key on the bus.

use crate::panel::PanelKind;

/// A message published on the bus.
#[derive(Debug, Clone)]
pub enum UiEvent {
    // === Panel visibility ===
    /// Request to show or hide a panel. Consumed by the UI manager.
    PanelRequest {
        /// Which panel
        kind: PanelKind,
        /// true to show, false to hide
        visible: bool,
    },

    /// A model property changed; views refresh what they display.
    PropertyChanged {
        /// Panel whose model changed
        kind: PanelKind,
        /// Property name
        property: String,
    },

    // === Scene flow ===
    /// A scene began loading. Scene-bound panel owners tear down here.
    SceneLoadStarted {
        /// Scene name
        scene: String,
    },

    /// A scene finished loading. Panel factories re-register here.
    SceneLoadFinished {
        /// Scene name
        scene: String,
    },

    // === Game flow ===
    /// A play session started
    GameStarted,
    /// The session was paused
    GamePaused,
    /// The session resumed
    GameResumed,
    /// The session ended
    GameOver {
        /// Whether the player won
        victory: bool,
    },
}

/// Subscription key: one variant per [`UiEvent`] shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    PanelRequest,
    PropertyChanged,
    SceneLoadStarted,
    SceneLoadFinished,
    GameStarted,
    GamePaused,
    GameResumed,
    GameOver,
}

impl UiEvent {
    /// The topic this event is delivered under.
    pub fn topic(&self) -> Topic {
        match self {
            UiEvent::PanelRequest { .. } => Topic::PanelRequest,
            UiEvent::PropertyChanged { .. } => Topic::PropertyChanged,
            UiEvent::SceneLoadStarted { .. } => Topic::SceneLoadStarted,
            UiEvent::SceneLoadFinished { .. } => Topic::SceneLoadFinished,
            UiEvent::GameStarted => Topic::GameStarted,
            UiEvent::GamePaused => Topic::GamePaused,
            UiEvent::GameResumed => Topic::GameResumed,
            UiEvent::GameOver { .. } => Topic::GameOver,
        }
    }
}
