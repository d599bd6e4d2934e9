//! The panel visibility state machine.

use std::cell::RefCell;
use std::rc::Rc;

use stagehand_bus::{EventBus, Subscription};
use stagehand_core::{InputModeSwitcher, PanelKind, Topic, UiEvent};
use stagehand_logger as logger;
use stagehand_registry::PanelRegistry;

use crate::policy::ExclusionPolicy;

/// Decides which panels are visible.
///
/// One instance per process, constructed at the composition root and
/// shared behind `Rc<RefCell<..>>` with the bus subscription. Everything
/// runs synchronously on the UI thread; panel `show`/`hide` calls return
/// once accepted and any presentation transition finishes on its own.
///
/// The exclusive slot holds the most recently shown non-overlay panel.
/// It is a single slot, not a stack: showing a second exclusive panel
/// overwrites it, and hiding that second panel does not restore the
/// first.
pub struct UiManager {
    registry: Rc<RefCell<PanelRegistry>>,
    policy: ExclusionPolicy,
    input: Box<dyn InputModeSwitcher>,
    current_exclusive: PanelKind,
}

impl UiManager {
    /// Wire a manager to its collaborators.
    pub fn new(
        registry: Rc<RefCell<PanelRegistry>>,
        policy: ExclusionPolicy,
        input: Box<dyn InputModeSwitcher>,
    ) -> Self {
        Self {
            registry,
            policy,
            input,
            current_exclusive: PanelKind::None,
        }
    }

    /// The kind occupying the exclusive slot (`None` when empty).
    pub fn current_exclusive(&self) -> PanelKind {
        self.current_exclusive
    }

    /// Request a visibility change.
    ///
    /// Showing a non-overlay panel first hides every panel its exclusion
    /// rule lists (losers go down before the winner comes up), switches
    /// input to UI mode, and takes the exclusive slot. Hiding the panel
    /// that holds the slot returns input to gameplay and re-shows `Hud`,
    /// the fallback panel. The fallback show immediately re-takes the
    /// slot and re-requests UI mode, so a session that wants gameplay
    /// input hides its menus through game-flow code that also hides the
    /// HUD.
    ///
    /// Overlay kinds (`Loading`, `Console`) skip all of that: no
    /// cascade, no input switch, no slot update. Hiding a panel that is
    /// not in the slot is a plain pass-through hide.
    ///
    /// A missing registry entry downgrades the request to a log line;
    /// requests published before the registry is populated are misses,
    /// never errors.
    pub fn request_show(&mut self, kind: PanelKind, visible: bool) {
        if visible {
            self.raise(kind);
        } else {
            self.lower(kind);
        }
    }

    fn raise(&mut self, kind: PanelKind) {
        if !kind.is_overlay() {
            // Pre-order cascade: by the time the winner's show() runs,
            // no displaced panel can still observe both visible.
            let losers = self.policy.hides(kind).to_vec();
            for loser in losers {
                self.request_show(loser, false);
            }
            self.input.switch_to_ui();
            self.current_exclusive = kind;
        }
        self.apply(kind, true);
    }

    fn lower(&mut self, kind: PanelKind) {
        if !kind.is_overlay() && kind == self.current_exclusive {
            self.input.switch_to_gameplay();
            logger::debug(format!("exclusive panel '{}' closing, restoring hud", kind));
            self.request_show(PanelKind::Hud, true);
        }
        // Re-read the slot: the fallback re-show above just took it, so
        // only a hide of the kind still holding it clears to None.
        if !kind.is_overlay() && kind == self.current_exclusive {
            self.current_exclusive = PanelKind::None;
        }
        self.apply(kind, false);
    }

    fn apply(&mut self, kind: PanelKind, visible: bool) {
        let panel = self.registry.borrow().lookup(kind);
        match panel {
            Some(panel) => {
                let mut panel = panel.borrow_mut();
                if visible {
                    panel.show();
                } else {
                    panel.hide();
                }
            }
            None => logger::warn(format!(
                "no panel registered for '{}', {} request dropped",
                kind,
                if visible { "show" } else { "hide" }
            )),
        }
    }

    /// Hide every registered panel, in registration order.
    ///
    /// Bulk teardown for scene transitions: plain hides with no cascade
    /// and no fallback re-show. Empties the slot and returns input to
    /// gameplay if an exclusive panel was up.
    pub fn hide_all(&mut self) {
        let panels: Vec<_> = self.registry.borrow().panels().cloned().collect();
        for panel in panels {
            panel.borrow_mut().hide();
        }
        if self.current_exclusive != PanelKind::None {
            self.current_exclusive = PanelKind::None;
            self.input.switch_to_gameplay();
        }
    }

    /// Feed one bus event through the manager.
    pub fn on_event(&mut self, event: &UiEvent) {
        if let UiEvent::PanelRequest { kind, visible } = event {
            self.request_show(*kind, *visible);
        }
    }

    /// Subscribe a shared manager to `PanelRequest` events.
    ///
    /// The subscription holds only a weak handle; dropping the manager
    /// turns later deliveries into no-ops instead of keeping it alive.
    pub fn attach(manager: &Rc<RefCell<UiManager>>, bus: &EventBus) -> Subscription {
        let weak = Rc::downgrade(manager);
        bus.subscribe(Topic::PanelRequest, "ui-manager", move |event| {
            if let Some(manager) = weak.upgrade() {
                manager.borrow_mut().on_event(event);
            }
        })
    }
}
