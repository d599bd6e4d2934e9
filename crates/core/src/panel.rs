//! Panel identity and the visibility contract.
//!
//! A panel is one UI surface (menu, HUD, console, ...). Panels are keyed
//! by [`PanelKind`] everywhere: registry lookup, exclusion rules, and
//! visibility requests all speak in kinds, never in concrete types.

use std::fmt;

/// Identity of a UI panel.
///
/// Closed set, fixed at compile time. `None` is the empty value used for
/// "no exclusive panel"; it never identifies a real surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PanelKind {
    /// No panel; the empty exclusive slot
    None,
    /// Title screen menu
    MainMenu,
    /// Save/load slot picker
    SaveLoad,
    /// In-game pause menu
    PauseMenu,
    /// End-of-session results screen
    Results,
    /// In-game heads-up display
    Hud,
    /// Scene transition screen
    Loading,
    /// Debug console
    Console,
    /// Player inventory
    Inventory,
    /// Settings screen
    Settings,
    /// Credits / about screen
    About,
}

impl PanelKind {
    /// All kinds, in declaration order.
    pub const ALL: [PanelKind; 11] = [
        PanelKind::None,
        PanelKind::MainMenu,
        PanelKind::SaveLoad,
        PanelKind::PauseMenu,
        PanelKind::Results,
        PanelKind::Hud,
        PanelKind::Loading,
        PanelKind::Console,
        PanelKind::Inventory,
        PanelKind::Settings,
        PanelKind::About,
    ];

    /// Stable name used in configuration files and log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            PanelKind::None => "none",
            PanelKind::MainMenu => "main_menu",
            PanelKind::SaveLoad => "save_load",
            PanelKind::PauseMenu => "pause_menu",
            PanelKind::Results => "results",
            PanelKind::Hud => "hud",
            PanelKind::Loading => "loading",
            PanelKind::Console => "console",
            PanelKind::Inventory => "inventory",
            PanelKind::Settings => "settings",
            PanelKind::About => "about",
        }
    }

    /// Whether this kind floats above whatever else is on screen.
    ///
    /// Overlays (`Loading`, `Console`) coexist with any panel: they never
    /// displace other panels, never take the exclusive slot, and never
    /// change the input mode. `None` is vacuously an overlay.
    pub fn is_overlay(self) -> bool {
        matches!(self, PanelKind::None | PanelKind::Loading | PanelKind::Console)
    }
}

impl fmt::Display for PanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PanelKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PanelKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("Unknown panel kind: {}", s))
    }
}

/// Visibility contract every concrete panel implements.
///
/// Implementations must keep all methods safe to call in any order:
/// `show` on a visible panel, `hide` on a hidden one, and a repeated
/// `initialize` without an intervening `cleanup` are no-ops, not errors.
/// The manager relies on this and never pre-checks visibility.
///
/// Presentation side effects (fades, activation) are fire-and-forget:
/// `show`/`hide` return once the request is accepted, and a transition
/// still in flight when the next request lands is restarted, not queued.
pub trait Panel {
    /// The panel's identity. Fixed for the lifetime of the instance.
    fn kind(&self) -> PanelKind;

    /// One-time setup. Idempotent until [`Panel::cleanup`] runs.
    fn initialize(&mut self);

    /// Make the panel visible. No-op if already visible.
    fn show(&mut self);

    /// Make the panel invisible. No-op if already hidden.
    fn hide(&mut self);

    /// Current visibility flag.
    fn is_visible(&self) -> bool;

    /// Release resources. The panel may be initialized again afterwards
    /// (panels are torn down and re-registered across scene changes).
    fn cleanup(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::str::FromStr;

    #[test]
    fn test_all_kinds_unique() {
        let names: HashSet<&str> = PanelKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(names.len(), PanelKind::ALL.len());
    }

    #[test]
    fn test_name_round_trip() {
        for kind in PanelKind::ALL {
            assert_eq!(PanelKind::from_str(kind.as_str()), Ok(kind));
        }
        assert!(PanelKind::from_str("minimap").is_err());
    }

    #[test]
    fn test_overlay_set() {
        let overlays: Vec<PanelKind> = PanelKind::ALL
            .into_iter()
            .filter(|k| k.is_overlay())
            .collect();
        assert_eq!(
            overlays,
            vec![PanelKind::None, PanelKind::Loading, PanelKind::Console]
        );
    }

    #[test]
    fn test_display_matches_config_name() {
        assert_eq!(PanelKind::SaveLoad.to_string(), "save_load");
        assert_eq!(PanelKind::Hud.to_string(), "hud");
    }
}
