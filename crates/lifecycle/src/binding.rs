//! Model/view binding contract for panel controllers.

use stagehand_bus::{Delivery, EventBus};
use stagehand_core::{PanelKind, UiEvent};

/// Data side of a panel. Notified when it is wired to / cut from a
/// controller.
pub trait Model {
    /// The model was bound to a controller.
    fn on_attached(&mut self) {}

    /// The model was unbound. Drop references to UI objects here.
    fn on_detached(&mut self) {}
}

/// Presentation side of a panel.
pub trait View {
    /// The view was bound to a controller.
    fn on_attached(&mut self) {}

    /// The view was unbound. Drop references to UI objects here.
    fn on_detached(&mut self) {}
}

/// Binding slots shared by every panel controller.
///
/// Invariant: at most one live model and one live view at a time. Binding
/// a replacement detaches the incumbent first, so two controllers never
/// mutate one view concurrently through stale references. Detached
/// collaborators are handed back to the caller, which decides whether to
/// reuse or drop them.
#[derive(Default)]
pub struct ControllerBase<M: Model, V: View> {
    model: Option<M>,
    view: Option<V>,
}

impl<M: Model, V: View> ControllerBase<M, V> {
    /// Empty controller with nothing bound.
    pub fn new() -> Self {
        Self {
            model: None,
            view: None,
        }
    }

    /// Bind a model, detaching and returning the previous one.
    pub fn set_model(&mut self, mut model: M) -> Option<M> {
        let mut previous = self.model.take();
        if let Some(old) = previous.as_mut() {
            old.on_detached();
        }
        model.on_attached();
        self.model = Some(model);
        previous
    }

    /// Bind a view, detaching and returning the previous one.
    pub fn set_view(&mut self, mut view: V) -> Option<V> {
        let mut previous = self.view.take();
        if let Some(old) = previous.as_mut() {
            old.on_detached();
        }
        view.on_attached();
        self.view = Some(view);
        previous
    }

    /// Unbind the model, if any.
    pub fn clear_model(&mut self) -> Option<M> {
        let mut model = self.model.take();
        if let Some(old) = model.as_mut() {
            old.on_detached();
        }
        model
    }

    /// Unbind the view, if any.
    pub fn clear_view(&mut self) -> Option<V> {
        let mut view = self.view.take();
        if let Some(old) = view.as_mut() {
            old.on_detached();
        }
        view
    }

    /// The bound model.
    pub fn model(&self) -> Option<&M> {
        self.model.as_ref()
    }

    /// The bound model, mutably.
    pub fn model_mut(&mut self) -> Option<&mut M> {
        self.model.as_mut()
    }

    /// The bound view.
    pub fn view(&self) -> Option<&V> {
        self.view.as_ref()
    }

    /// The bound view, mutably.
    pub fn view_mut(&mut self) -> Option<&mut V> {
        self.view.as_mut()
    }

    /// Whether both roles are bound.
    pub fn is_bound(&self) -> bool {
        self.model.is_some() && self.view.is_some()
    }
}

/// Publishes model-change notifications for one panel.
///
/// Optional: a model that wants its views refreshed through the bus
/// holds one of these and calls [`property_changed`] after mutating.
///
/// [`property_changed`]: ChangeNotifier::property_changed
#[derive(Clone)]
pub struct ChangeNotifier {
    bus: EventBus,
    kind: PanelKind,
}

impl ChangeNotifier {
    /// Notifier for one panel's model.
    pub fn new(bus: EventBus, kind: PanelKind) -> Self {
        Self { bus, kind }
    }

    /// Announce that a named property changed.
    pub fn property_changed(&self, property: &str) -> Delivery {
        self.bus.publish(&UiEvent::PropertyChanged {
            kind: self.kind,
            property: property.to_string(),
        })
    }
}
