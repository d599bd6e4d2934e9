//! Exclusion policy: which panels displace which.

use std::collections::BTreeMap;
use std::str::FromStr;

use stagehand_config::PolicySettings;
use stagehand_core::PanelKind;
use stagehand_logger as logger;

/// Table of pairwise displacement rules.
///
/// Showing a panel hides exactly the kinds listed under it: a lookup,
/// not a mutex. Kinds absent from each other's lists coexist freely, and
/// extending the behavior means editing the table, never the manager.
/// The table is fixed after construction.
#[derive(Debug, Clone)]
pub struct ExclusionPolicy {
    rules: BTreeMap<PanelKind, Vec<PanelKind>>,
}

impl Default for ExclusionPolicy {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ExclusionPolicy {
    /// The built-in table.
    ///
    /// `Hud` carries no rule on purpose: it is the fallback panel
    /// re-shown whenever the exclusive slot empties, and a rule keyed by
    /// the fallback could displace the very panel whose hide re-shows it.
    pub fn builtin() -> Self {
        use PanelKind::*;

        let mut rules: BTreeMap<PanelKind, Vec<PanelKind>> = BTreeMap::new();
        rules.insert(
            MainMenu,
            vec![Hud, PauseMenu, SaveLoad, Settings, About, Inventory, Results],
        );
        rules.insert(SaveLoad, vec![MainMenu, PauseMenu, Settings, About]);
        rules.insert(PauseMenu, vec![Inventory, Settings, SaveLoad]);
        rules.insert(Results, vec![Hud, PauseMenu, Inventory]);
        rules.insert(Inventory, vec![PauseMenu, Settings]);
        rules.insert(Settings, vec![MainMenu, PauseMenu, SaveLoad, About]);
        rules.insert(About, vec![MainMenu, Settings, SaveLoad]);
        Self { rules }
    }

    /// Build the policy from configuration.
    ///
    /// An empty `[policy]` section keeps the built-in table; a non-empty
    /// one replaces it. Entries that cannot hold are dropped with a
    /// warning: unknown names, rules keyed by an overlay or by the `Hud`
    /// fallback, self-references, and overlay kinds in a hide list.
    pub fn from_settings(settings: &PolicySettings) -> Self {
        if settings.is_empty() {
            return Self::builtin();
        }

        let mut rules: BTreeMap<PanelKind, Vec<PanelKind>> = BTreeMap::new();
        for (name, targets) in &settings.rules {
            let Ok(kind) = PanelKind::from_str(name) else {
                logger::warn(format!("policy rule for unknown panel '{}' dropped", name));
                continue;
            };
            if kind.is_overlay() {
                logger::warn(format!(
                    "policy rule for overlay panel '{}' dropped, overlays never displace",
                    kind
                ));
                continue;
            }
            if kind == PanelKind::Hud {
                logger::warn("policy rule for 'hud' dropped, the fallback panel displaces nothing");
                continue;
            }

            let mut hidden = Vec::new();
            for target in targets {
                match PanelKind::from_str(target) {
                    Ok(target) if target == kind => {
                        logger::warn(format!("policy rule '{}' lists itself, entry dropped", kind));
                    }
                    Ok(target) if target.is_overlay() => {
                        logger::warn(format!(
                            "policy rule '{}' lists overlay '{}', entry dropped",
                            kind, target
                        ));
                    }
                    Ok(target) => {
                        if !hidden.contains(&target) {
                            hidden.push(target);
                        }
                    }
                    Err(_) => {
                        logger::warn(format!(
                            "policy rule '{}' lists unknown panel '{}', entry dropped",
                            kind, target
                        ));
                    }
                }
            }
            if !hidden.is_empty() {
                rules.insert(kind, hidden);
            }
        }

        logger::info(format!("exclusion policy loaded with {} rules", rules.len()));
        Self { rules }
    }

    /// Kinds hidden as a side effect of showing `kind`.
    pub fn hides(&self, kind: PanelKind) -> &[PanelKind] {
        self.rules.get(&kind).map_or(&[], Vec::as_slice)
    }

    /// Number of rules in the table.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}
