//! Input mode contract.
//!
//! Switching between gameplay input and UI navigation is owned by an
//! external input system; this crate only defines the seam the UI
//! manager calls through. Calls are fire-and-forget.

/// Which subsystem currently consumes player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Input drives the player character
    Gameplay,
    /// Input drives UI navigation
    Ui,
}

/// Collaborator that reroutes player input.
pub trait InputModeSwitcher {
    /// Route input to UI navigation.
    fn switch_to_ui(&mut self);

    /// Route input back to gameplay.
    fn switch_to_gameplay(&mut self);
}

/// Switcher that does nothing. Useful for headless tests and tools.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSwitcher;

impl InputModeSwitcher for NoopSwitcher {
    fn switch_to_ui(&mut self) {}

    fn switch_to_gameplay(&mut self) {}
}
