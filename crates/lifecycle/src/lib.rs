//! Panel lifecycle guards and model/view binding for stagehand.
//!
//! Every concrete panel goes through the same lifecycle:
//!
//! ```text
//! Fresh ──initialize──▶ Ready ──cleanup──▶ Retired
//!                        │  ▲                 │
//!                    show│  │hide   initialize│ (re-entrant)
//!                        ▼  │                 ▼
//!                      visible ⇄ hidden     Ready
//! ```
//!
//! [`Lifecycle`] owns the guard logic once so concrete panels only write
//! their transition hooks. [`ControllerBase`] carries the binding rule
//! shared by every controller: at most one live model and one live view
//! at a time.

mod binding;
mod guard;

pub use binding::{ChangeNotifier, ControllerBase, Model, View};
pub use guard::{Lifecycle, LifecyclePhase, PanelSurface};
