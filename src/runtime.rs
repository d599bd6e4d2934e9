//! Composition root: one bus, one registry, one manager.

use std::cell::RefCell;
use std::rc::Rc;
use std::str::FromStr;

use stagehand_bus::{EventBus, Subscription};
use stagehand_config::Config;
use stagehand_core::{InputModeSwitcher, PanelKind};
use stagehand_logger::LogLevel;
use stagehand_manager::{ExclusionPolicy, UiManager};
use stagehand_registry::{PanelRegistry, RegisterOutcome, SharedPanel};

/// Initialize the global log sink from configuration.
///
/// Call once, before constructing the runtime, so the wiring itself can
/// log. Falls back to the XDG data directory when no file path is
/// configured, and to in-memory logging when even that is unavailable.
pub fn init_logging(config: &Config) {
    let file_path = match &config.logging.file_path {
        Some(path) => Some(std::path::PathBuf::from(path)),
        None => Config::default_log_path().ok(),
    };
    let min_level = LogLevel::from_str(&config.logging.min_level).unwrap_or(LogLevel::Info);
    stagehand_logger::init(file_path, config.logging.max_entries, min_level);
}

/// The wired-up panel orchestration core.
///
/// Owns the process-wide [`EventBus`], the [`PanelRegistry`], and the
/// [`UiManager`], plus the subscription that feeds `PanelRequest` events
/// into the manager. Single-instance-per-process semantics come from
/// constructing exactly one of these at startup and passing it around,
/// not from global state.
pub struct UiRuntime {
    bus: EventBus,
    registry: Rc<RefCell<PanelRegistry>>,
    manager: Rc<RefCell<UiManager>>,
    _panel_requests: Subscription,
}

impl UiRuntime {
    /// Build and wire the core against an input-mode collaborator.
    pub fn new(config: &Config, input: Box<dyn InputModeSwitcher>) -> Self {
        let bus = EventBus::new();
        let registry = Rc::new(RefCell::new(PanelRegistry::new()));
        let policy = ExclusionPolicy::from_settings(&config.policy);
        let manager = Rc::new(RefCell::new(UiManager::new(
            registry.clone(),
            policy,
            input,
        )));
        let panel_requests = UiManager::attach(&manager, &bus);

        Self {
            bus,
            registry,
            manager,
            _panel_requests: panel_requests,
        }
    }

    /// The process-wide bus. Clone the handle freely.
    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    /// Register a panel built by a view factory.
    pub fn register_panel(&self, panel: SharedPanel) -> RegisterOutcome {
        self.registry.borrow_mut().register(panel)
    }

    /// Close the registration window after scene bootstrap.
    pub fn finish_registration(&self) {
        self.registry.borrow_mut().mark_ready();
    }

    /// Shared registry handle, for factories that register in bulk.
    pub fn registry(&self) -> Rc<RefCell<PanelRegistry>> {
        self.registry.clone()
    }

    /// Request a visibility change without going through the bus.
    pub fn request(&self, kind: PanelKind, visible: bool) {
        self.manager.borrow_mut().request_show(kind, visible);
    }

    /// Hide every registered panel (scene teardown).
    pub fn hide_all(&self) {
        self.manager.borrow_mut().hide_all();
    }

    /// The kind currently holding the exclusive slot.
    pub fn current_exclusive(&self) -> PanelKind {
        self.manager.borrow().current_exclusive()
    }
}
