//! Panel registry for stagehand.
//!
//! Maps each [`PanelKind`] to at most one live panel. Panel factories
//! populate the registry during scene bootstrap; after [`mark_ready`] it
//! is effectively read-only until teardown, which is why lookups need no
//! synchronization.
//!
//! [`mark_ready`]: PanelRegistry::mark_ready

use std::cell::RefCell;
use std::rc::Rc;

use stagehand_core::{Panel, PanelKind};
use stagehand_logger as logger;

/// Shared handle to a registered panel.
///
/// Panels are owned by whatever constructed them (a view factory); the
/// registry and the UI manager hold additional handles, never exclusive
/// ownership. Single-threaded, hence `Rc<RefCell<..>>` rather than locks.
pub type SharedPanel = Rc<RefCell<dyn Panel>>;

/// Result of a registration attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// The panel now backs its kind.
    Registered,
    /// The kind was already taken; the newcomer was discarded.
    Duplicate,
    /// `PanelKind::None` cannot back a panel.
    Unregisterable,
}

/// Kind-keyed panel map with first-registered-wins semantics.
///
/// A duplicate registration almost always means a factory ran twice, so
/// the registry keeps the first panel and logs the conflict instead of
/// silently replacing a surface other modules already hold.
#[derive(Default)]
pub struct PanelRegistry {
    /// Registration order is preserved for bulk operations
    entries: Vec<(PanelKind, SharedPanel)>,
    ready: bool,
}

impl PanelRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a panel under its own kind.
    pub fn register(&mut self, panel: SharedPanel) -> RegisterOutcome {
        let kind = panel.borrow().kind();
        if kind == PanelKind::None {
            logger::warn("attempted to register a panel as 'none', discarded");
            return RegisterOutcome::Unregisterable;
        }
        if self.lookup(kind).is_some() {
            logger::warn(format!(
                "panel '{}' already registered, keeping the first",
                kind
            ));
            return RegisterOutcome::Duplicate;
        }
        if self.ready {
            logger::warn(format!("panel '{}' registered after ready", kind));
        }
        logger::debug(format!("panel '{}' registered", kind));
        self.entries.push((kind, panel));
        RegisterOutcome::Registered
    }

    /// The panel backing a kind, if any.
    pub fn lookup(&self, kind: PanelKind) -> Option<SharedPanel> {
        self.entries
            .iter()
            .find(|(registered, _)| *registered == kind)
            .map(|(_, panel)| panel.clone())
    }

    /// All registered panels, in registration order.
    pub fn panels(&self) -> impl Iterator<Item = &SharedPanel> {
        self.entries.iter().map(|(_, panel)| panel)
    }

    /// All registered kinds, in registration order.
    pub fn kinds(&self) -> impl Iterator<Item = PanelKind> + '_ {
        self.entries.iter().map(|(kind, _)| *kind)
    }

    /// Close the registration window.
    ///
    /// Registration afterwards still works (first-wins as usual) but is
    /// logged, since it usually means a factory ran at the wrong time.
    pub fn mark_ready(&mut self) {
        self.ready = true;
        logger::info(format!("panel registry ready with {} panels", self.len()));
    }

    /// Whether the registration window has closed.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Number of registered panels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no panel is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
