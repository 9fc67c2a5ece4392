// src/events/bus/event_bus.rs
//
// Synchronous publish/subscribe for catalog events.
//
// - Handlers run on the emitting thread, in subscription order
// - A panicking handler is logged and skipped
// - The last N emissions are kept for inspection; older entries drop off

use std::any::{Any, TypeId};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::events::types::DomainEvent;

/// Entries kept by `EventBus::new`
pub const DEFAULT_LOG_CAPACITY: usize = 256;

type Subscriber = Box<dyn Fn(&dyn Any) + Send + Sync>;

/// One recorded emission
#[derive(Debug, Clone)]
pub struct EventLogEntry {
    pub event_type: String,
    pub event_id: String,
    pub occurred_at: String,
    pub handler_count: usize,
}

/// Ring buffer of recent emissions
struct RecentEvents {
    entries: VecDeque<EventLogEntry>,
    capacity: usize,
}

impl RecentEvents {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    fn record(&mut self, entry: EventLogEntry) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }
}

/// Shared by clones: a clone publishes to the same subscribers and log.
#[derive(Clone)]
pub struct EventBus {
    subscribers: Arc<RwLock<HashMap<TypeId, Vec<Subscriber>>>>,
    recent: Arc<RwLock<RecentEvents>>,
}

// Subscriber panics are caught in emit, so a poisoned lock still
// guards consistent data.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_log_capacity(DEFAULT_LOG_CAPACITY)
    }

    /// Keep at most `capacity` log entries; 0 disables the log
    pub fn with_log_capacity(capacity: usize) -> Self {
        Self {
            subscribers: Arc::new(RwLock::new(HashMap::new())),
            recent: Arc::new(RwLock::new(RecentEvents::with_capacity(capacity))),
        }
    }

    /// Register a handler for events of type `E`
    ///
    /// ```ignore
    /// bus.subscribe::<ProductCreated, _>(|event| {
    ///     log::info!("created {}", event.product.id());
    /// });
    /// ```
    pub fn subscribe<E, F>(&self, handler: F)
    where
        E: DomainEvent + 'static,
        F: Fn(&E) + Send + Sync + 'static,
    {
        let erased: Subscriber = Box::new(move |any: &dyn Any| match any.downcast_ref::<E>() {
            Some(event) => handler(event),
            None => log::error!("Event type mismatch for {}", std::any::type_name::<E>()),
        });

        write(&self.subscribers)
            .entry(TypeId::of::<E>())
            .or_default()
            .push(erased);
    }

    /// Record `event` and deliver it to every subscriber of its type
    pub fn emit<E>(&self, event: E)
    where
        E: DomainEvent + 'static,
    {
        let subscribers = read(&self.subscribers);
        let targets = subscribers.get(&TypeId::of::<E>()).map(Vec::as_slice).unwrap_or(&[]);

        log::debug!(
            "[EVENT] {} (id: {}) | {} handlers",
            event.event_type(),
            event.event_id(),
            targets.len()
        );
        write(&self.recent).record(EventLogEntry {
            event_type: event.event_type().to_string(),
            event_id: event.event_id().to_string(),
            occurred_at: event.occurred_at().to_rfc3339(),
            handler_count: targets.len(),
        });

        for (idx, deliver) in targets.iter().enumerate() {
            let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                deliver(&event as &dyn Any)
            }));
            if let Err(panic) = outcome {
                log::error!("Handler {} for {} panicked: {:?}", idx, event.event_type(), panic);
            }
        }
    }

    /// Recent emissions, oldest first
    pub fn get_event_log(&self) -> Vec<EventLogEntry> {
        read(&self.recent).entries.iter().cloned().collect()
    }

    pub fn clear_event_log(&self) {
        write(&self.recent).entries.clear();
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
