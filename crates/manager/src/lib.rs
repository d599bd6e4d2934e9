//! Panel visibility state machine for stagehand.
//!
//! The [`UiManager`] decides which panels are on screen. It owns the
//! exclusion policy (which panel displaces which), a single exclusive
//! slot tracking the frontmost non-overlay panel, and the input-mode
//! side effects of taking and leaving that slot. Requests arrive either
//! as direct [`UiManager::request_show`] calls or as
//! `UiEvent::PanelRequest` messages on the bus.

mod manager;
mod policy;

pub use manager::UiManager;
pub use policy::ExclusionPolicy;
