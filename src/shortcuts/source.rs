//! In-process event source
//!
//! `ManualEventSource` is an `EventSource` fed by explicit `emit` calls
//! rather than a real input layer. The CLI's `shortcuts simulate` command
//! drives it with a single synthesized event; dispatcher tests use it as
//! their source double. Listeners are kept in a BTreeMap so delivery order
//! is attach order.

use crate::shortcuts::dispatcher::{EventSource, KeyListener, ListenerId};
use crate::shortcuts::types::KeyEvent;
use std::collections::BTreeMap;

/// An event source driven by explicit `emit` calls.
#[derive(Default)]
pub struct ManualEventSource {
    listeners: BTreeMap<u64, KeyListener>,
    next_id: u64,
}

impl ManualEventSource {
    /// Creates a source with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers one key event to every attached listener.
    ///
    /// Returns true when any listener suppressed the event's default
    /// behaviour (i.e. a chord matched).
    pub fn emit(&mut self, event: &KeyEvent) -> bool {
        let mut suppressed = false;
        for listener in self.listeners.values_mut() {
            if listener(event) {
                suppressed = true;
            }
        }
        suppressed
    }

    /// Number of currently attached listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl EventSource for ManualEventSource {
    fn attach(&mut self, listener: KeyListener) -> ListenerId {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.insert(id, listener);
        ListenerId(id)
    }

    fn detach(&mut self, id: ListenerId) {
        self.listeners.remove(&id.0);
    }
}
