//! Typed publish/subscribe bus for stagehand.
//!
//! Decouples UI modules that must never reference each other: a publisher
//! hands an event to the bus, and every subscriber on that event's topic
//! runs synchronously, in subscription order, on the caller's thread.
//! There is no queue and no cross-thread delivery.
//!
//! Two contract points differ from a plain observer list:
//!
//! - [`EventBus::subscribe`] returns a [`Subscription`] that removes the
//!   handler when dropped, so teardown cannot forget the unsubscribe half
//!   of a subscribe/unsubscribe pair.
//! - [`EventBus::publish`] returns a [`Delivery`] listing what happened
//!   per handler. A panicking handler is caught and reported there (and
//!   logged); it never prevents later handlers from running, and never
//!   propagates to the publisher.

use std::cell::RefCell;
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::rc::{Rc, Weak};

use stagehand_core::{Topic, UiEvent};
use stagehand_logger as logger;

type Handler = Rc<RefCell<dyn FnMut(&UiEvent)>>;

struct Entry {
    id: u64,
    label: String,
    handler: Handler,
}

#[derive(Default)]
struct Lanes {
    next_id: u64,
    lanes: HashMap<Topic, Vec<Entry>>,
}

/// What happened to one handler during a publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// Handler ran to completion.
    Delivered {
        /// Subscriber label
        label: String,
    },
    /// Handler panicked; the panic was caught and logged.
    Faulted {
        /// Subscriber label
        label: String,
        /// Panic payload text
        reason: String,
    },
    /// Handler was already running (re-entrant delivery) and was skipped.
    Busy {
        /// Subscriber label
        label: String,
    },
}

/// Per-handler results of one publish, in delivery order.
#[derive(Debug, Clone, Default)]
pub struct Delivery {
    /// One outcome per handler that was on the topic when publish began
    pub outcomes: Vec<DeliveryOutcome>,
}

impl Delivery {
    /// Handlers that ran to completion.
    pub fn delivered(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, DeliveryOutcome::Delivered { .. }))
            .count()
    }

    /// Handlers that panicked.
    pub fn faulted(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, DeliveryOutcome::Faulted { .. }))
            .count()
    }

    /// True when every handler ran to completion.
    pub fn is_clean(&self) -> bool {
        self.delivered() == self.outcomes.len()
    }
}

/// Scoped subscription handle.
///
/// Dropping it removes the handler from the bus; dropping it after the
/// bus itself is gone is a no-op.
pub struct Subscription {
    bus: Weak<RefCell<Lanes>>,
    topic: Topic,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(bus) = self.bus.upgrade() {
            if let Ok(mut lanes) = bus.try_borrow_mut() {
                if let Some(entries) = lanes.lanes.get_mut(&self.topic) {
                    entries.retain(|entry| entry.id != self.id);
                }
            }
        }
    }
}

/// The bus. Cloning yields another handle to the same channel.
///
/// One instance is constructed at the composition root and handed to
/// everything that publishes or subscribes; it lives as long as the
/// process. Single-threaded by design: publish runs handlers in-line, so
/// state they touch needs no locking.
#[derive(Clone, Default)]
pub struct EventBus {
    inner: Rc<RefCell<Lanes>>,
}

impl EventBus {
    /// Create an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a handler for one topic.
    ///
    /// Handlers run in subscription order. Subscribing the same closure
    /// logic twice is not an error; both copies run (multicast
    /// semantics). The label identifies the subscriber in logs and in
    /// [`Delivery`] outcomes.
    pub fn subscribe(
        &self,
        topic: Topic,
        label: impl Into<String>,
        handler: impl FnMut(&UiEvent) + 'static,
    ) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.lanes.entry(topic).or_default().push(Entry {
            id,
            label: label.into(),
            handler: Rc::new(RefCell::new(handler)),
        });
        Subscription {
            bus: Rc::downgrade(&self.inner),
            topic,
            id,
        }
    }

    /// Number of handlers currently subscribed to a topic.
    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.inner
            .borrow()
            .lanes
            .get(&topic)
            .map_or(0, Vec::len)
    }

    /// Deliver an event to every handler on its topic.
    ///
    /// Delivery iterates a snapshot: handlers subscribed or dropped while
    /// a publish is running take effect from the next publish on. A
    /// handler that re-enters the bus and lands on itself (a handler
    /// whose side effects publish its own topic) is skipped and reported
    /// [`DeliveryOutcome::Busy`] rather than deadlocking.
    pub fn publish(&self, event: &UiEvent) -> Delivery {
        let topic = event.topic();
        let snapshot: Vec<(String, Handler)> = {
            let inner = self.inner.borrow();
            inner.lanes.get(&topic).map_or_else(Vec::new, |entries| {
                entries
                    .iter()
                    .map(|entry| (entry.label.clone(), entry.handler.clone()))
                    .collect()
            })
        };

        let mut outcomes = Vec::with_capacity(snapshot.len());
        for (label, handler) in snapshot {
            let Ok(mut run) = handler.try_borrow_mut() else {
                logger::warn(format!(
                    "subscriber '{}' re-entered during {:?} delivery, skipped",
                    label, topic
                ));
                outcomes.push(DeliveryOutcome::Busy { label });
                continue;
            };

            match panic::catch_unwind(AssertUnwindSafe(|| (&mut *run)(event))) {
                Ok(()) => outcomes.push(DeliveryOutcome::Delivered { label }),
                Err(payload) => {
                    let reason = panic_reason(payload);
                    logger::error(format!(
                        "subscriber '{}' panicked handling {:?}: {}",
                        label, topic, reason
                    ));
                    outcomes.push(DeliveryOutcome::Faulted { label, reason });
                }
            }
        }
        Delivery { outcomes }
    }
}

fn panic_reason(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "handler panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stagehand_core::PanelKind;

    fn pause_event() -> UiEvent {
        UiEvent::PanelRequest {
            kind: PanelKind::PauseMenu,
            visible: true,
        }
    }

    #[test]
    fn test_delivery_in_subscription_order() {
        let bus = EventBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let first = seen.clone();
        let _a = bus.subscribe(Topic::PanelRequest, "first", move |_| {
            first.borrow_mut().push("first");
        });
        let second = seen.clone();
        let _b = bus.subscribe(Topic::PanelRequest, "second", move |_| {
            second.borrow_mut().push("second");
        });

        let delivery = bus.publish(&pause_event());
        assert!(delivery.is_clean());
        assert_eq!(*seen.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_topics_do_not_cross() {
        let bus = EventBus::new();
        let hits = Rc::new(RefCell::new(0));

        let counter = hits.clone();
        let _sub = bus.subscribe(Topic::GamePaused, "pause-watcher", move |_| {
            *counter.borrow_mut() += 1;
        });

        bus.publish(&pause_event());
        assert_eq!(*hits.borrow(), 0);
        bus.publish(&UiEvent::GamePaused);
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn test_same_logic_subscribed_twice_runs_twice() {
        let bus = EventBus::new();
        let hits = Rc::new(RefCell::new(0));

        let one = hits.clone();
        let _a = bus.subscribe(Topic::GameStarted, "twin", move |_| {
            *one.borrow_mut() += 1;
        });
        let two = hits.clone();
        let _b = bus.subscribe(Topic::GameStarted, "twin", move |_| {
            *two.borrow_mut() += 1;
        });

        bus.publish(&UiEvent::GameStarted);
        assert_eq!(*hits.borrow(), 2);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let bus = EventBus::new();
        let hits = Rc::new(RefCell::new(0));

        let counter = hits.clone();
        let sub = bus.subscribe(Topic::GameStarted, "short-lived", move |_| {
            *counter.borrow_mut() += 1;
        });
        assert_eq!(bus.subscriber_count(Topic::GameStarted), 1);

        drop(sub);
        assert_eq!(bus.subscriber_count(Topic::GameStarted), 0);
        bus.publish(&UiEvent::GameStarted);
        assert_eq!(*hits.borrow(), 0);
    }

    #[test]
    fn test_subscription_outlives_bus() {
        let bus = EventBus::new();
        let sub = bus.subscribe(Topic::GameStarted, "straggler", |_| {});
        drop(bus);
        drop(sub); // must not panic
    }

    #[test]
    fn test_panic_does_not_stop_fan_out() {
        let bus = EventBus::new();
        let hits = Rc::new(RefCell::new(0));

        let _bad = bus.subscribe(Topic::GameStarted, "faulty", |_| {
            panic!("stale panel reference");
        });
        let counter = hits.clone();
        let _good = bus.subscribe(Topic::GameStarted, "healthy", move |_| {
            *counter.borrow_mut() += 1;
        });

        let delivery = bus.publish(&UiEvent::GameStarted);
        assert_eq!(*hits.borrow(), 1, "later handler still ran");
        assert_eq!(delivery.faulted(), 1);
        assert_eq!(delivery.delivered(), 1);
        assert!(matches!(
            &delivery.outcomes[0],
            DeliveryOutcome::Faulted { label, reason }
                if label == "faulty" && reason == "stale panel reference"
        ));
    }

    #[test]
    fn test_subscribe_during_publish_waits_for_next_publish() {
        let bus = EventBus::new();
        let hits = Rc::new(RefCell::new(0));
        let late_sub = Rc::new(RefCell::new(None));

        let bus_handle = bus.clone();
        let counter = hits.clone();
        let slot = late_sub.clone();
        let _outer = bus.subscribe(Topic::GameStarted, "recruiter", move |_| {
            let inner = counter.clone();
            let sub = bus_handle.subscribe(Topic::GameStarted, "recruit", move |_| {
                *inner.borrow_mut() += 1;
            });
            slot.borrow_mut().get_or_insert(sub);
        });

        bus.publish(&UiEvent::GameStarted);
        assert_eq!(*hits.borrow(), 0, "snapshot excludes the new handler");
        bus.publish(&UiEvent::GameStarted);
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn test_reentrant_delivery_reports_busy() {
        let bus = EventBus::new();
        let depth = Rc::new(RefCell::new(0));

        let bus_handle = bus.clone();
        let counter = depth.clone();
        let _sub = bus.subscribe(Topic::GameStarted, "echo", move |_| {
            let calls = {
                let mut calls = counter.borrow_mut();
                *calls += 1;
                *calls
            };
            if calls == 1 {
                let inner = bus_handle.publish(&UiEvent::GameStarted);
                assert!(matches!(
                    inner.outcomes.as_slice(),
                    [DeliveryOutcome::Busy { .. }]
                ));
            }
        });

        let delivery = bus.publish(&UiEvent::GameStarted);
        assert!(delivery.is_clean());
        assert_eq!(*depth.borrow(), 1);
    }
}
