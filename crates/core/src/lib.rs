//! Core types and contracts for stagehand panels.
//!
//! This crate provides the foundational abstractions shared by every
//! other stagehand crate: panel identity, the visibility contract, the
//! bus message set, the input-mode seam, and the console command table.
//! It never references concrete panels or the UI manager.

pub mod command;
pub mod event;
pub mod input;
pub mod panel;

pub use command::{CommandHandler, CommandOutcome, CommandSet};
pub use event::{Topic, UiEvent};
pub use input::{InputMode, InputModeSwitcher, NoopSwitcher};
pub use panel::{Panel, PanelKind};
