//! Registry-driven UI panel orchestration for games.
//!
//! stagehand decides, at any moment, which UI panels are on screen. It
//! enforces mutual-exclusion rules between panels, coordinates the
//! input-mode switch that exclusive panels require, and gives every
//! concrete panel one lifecycle and binding contract to implement.
//!
//! # Architecture
//!
//! ```text
//! game code ──publish──▶ EventBus ──PanelRequest──▶ UiManager
//!                                                      │
//!                              ExclusionPolicy ◀───────┤
//!                                                      ▼
//!                         PanelRegistry ──lookup──▶ Panel::show()/hide()
//! ```
//!
//! Everything is explicitly constructed and injected: [`UiRuntime`] is
//! the composition root that wires one bus, one registry, and one
//! manager per process. There are no ambient singletons to reach for;
//! hand the runtime (or its bus) to whatever needs it.
//!
//! # Getting started
//!
//! ```no_run
//! use stagehand::{Config, NoopSwitcher, PanelKind, UiEvent, UiRuntime};
//!
//! let config = Config::load().unwrap_or_default();
//! stagehand::init_logging(&config);
//!
//! let runtime = UiRuntime::new(&config, Box::new(NoopSwitcher));
//! // ... panel factories call runtime.register_panel(...) here ...
//! runtime.finish_registration();
//!
//! // Any module may now request visibility changes over the bus:
//! runtime.bus().publish(&UiEvent::PanelRequest {
//!     kind: PanelKind::MainMenu,
//!     visible: true,
//! });
//! ```

pub use stagehand_bus::{Delivery, DeliveryOutcome, EventBus, Subscription};
pub use stagehand_config::{Config, LoggingSettings, PolicySettings};
pub use stagehand_core::{
    CommandOutcome, CommandSet, InputMode, InputModeSwitcher, NoopSwitcher, Panel, PanelKind,
    Topic, UiEvent,
};
pub use stagehand_lifecycle::{
    ChangeNotifier, ControllerBase, Lifecycle, LifecyclePhase, Model, PanelSurface, View,
};
pub use stagehand_manager::{ExclusionPolicy, UiManager};
pub use stagehand_registry::{PanelRegistry, RegisterOutcome, SharedPanel};

pub use stagehand_logger as logger;

mod runtime;

pub use runtime::{init_logging, UiRuntime};
