use std::collections::HashMap;
use std::sync::Arc;

// ============================================================================
// Event Dispatcher
// ============================================================================

/// A domain event declares the name it is dispatched under.
pub trait Event {
    fn event_name(&self) -> &str;
}

/// Single-method capability implemented by anything that reacts to an event.
pub trait EventHandler<E: Event>: Send + Sync {
    fn handle(&self, event: &E);
}

/// Registry mapping an event name to an ordered list of handlers.
///
/// `notify` invokes, in registration order, every handler registered under
/// the event's own declared name. There is no error isolation between
/// handlers: a panicking handler aborts the notification.
pub struct EventDispatcher<E: Event> {
    handlers: HashMap<String, Vec<Arc<dyn EventHandler<E>>>>,
}

impl<E: Event> EventDispatcher<E> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Appends a handler to the list registered under `event_name`.
    pub fn register(&mut self, event_name: &str, handler: Arc<dyn EventHandler<E>>) {
        self.handlers
            .entry(event_name.to_string())
            .or_default()
            .push(handler);
    }

    /// Removes a previously registered handler, matching by pointer identity.
    pub fn unregister(&mut self, event_name: &str, handler: &Arc<dyn EventHandler<E>>) {
        if let Some(registered) = self.handlers.get_mut(event_name) {
            registered.retain(|existing| !Arc::ptr_eq(existing, handler));
        }
    }

    /// Drops every registration.
    pub fn unregister_all(&mut self) {
        self.handlers.clear();
    }

    /// Invokes every handler registered under the event's name, in
    /// registration order. Unknown names dispatch to nobody.
    pub fn notify(&self, event: &E) {
        if let Some(registered) = self.handlers.get(event.event_name()) {
            for handler in registered {
                handler.handle(event);
            }
        }
    }

    /// The handlers currently registered under `event_name`.
    pub fn handlers(&self, event_name: &str) -> &[Arc<dyn EventHandler<E>>] {
        self.handlers
            .get(event_name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl<E: Event> Default for EventDispatcher<E> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
