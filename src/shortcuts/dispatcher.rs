// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/shortcuts/dispatcher.rs
//!
//! Shortcut registration and dispatch
//!
//! The dispatcher owns a two-state lifecycle (attached/detached) over an
//! injected event source. Registering installs one listener that resolves
//! each key event against the chord table and invokes the caller's handler
//! for the matched action; unregistering (or dropping the dispatcher)
//! removes it. Re-registering first tears down the prior listener, so at
//! most one listener is ever active per dispatcher and no event is
//! dispatched twice.
//!
//! # Contract
//!
//! - A matched chord suppresses the event's default behaviour, then invokes
//!   the handler if the caller supplied one. A missing handler is a no-op,
//!   never an error (the default is still suppressed).
//! - An unmatched event passes through untouched.
//! - Handlers run synchronously on the event thread; callers dispatch
//!   long-running work elsewhere.
//!
//! # Example
//! ```
//! use kezan_protocol::shortcuts::{
//!     Action, ChordTable, HandlerTable, KeyEvent, ManualEventSource, ShortcutDispatcher,
//! };
//!
//! let mut dispatcher =
//!     ShortcutDispatcher::new(ManualEventSource::new(), ChordTable::defaults());
//!
//! dispatcher.register(HandlerTable::new().on(Action::Refresh, || println!("refreshing")));
//!
//! // A matched chord suppresses the default action
//! assert!(dispatcher.source_mut().emit(&KeyEvent::plain("F5")));
//! // An unmatched one passes through
//! assert!(!dispatcher.source_mut().emit(&KeyEvent::plain("s")));
//! ```

use crate::shortcuts::table::ChordTable;
use crate::shortcuts::types::{Action, KeyEvent};
use std::collections::HashMap;

/// A key listener installed on an event source.
///
/// Returns true when the event matched a chord and its default behaviour
/// must be suppressed.
pub type KeyListener = Box<dyn FnMut(&KeyEvent) -> bool>;

/// Identifies one attached listener on an event source.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Source of key events the dispatcher attaches to.
///
/// Abstracts the global key-event stream so the dispatcher can run against
/// the real input layer or an in-process double. Implementations deliver
/// every key event to each attached listener, in attach order, and honour
/// detach immediately.
pub trait EventSource {
    /// Installs a listener, returning its id for later removal.
    fn attach(&mut self, listener: KeyListener) -> ListenerId;

    /// Removes a previously attached listener. Unknown ids are ignored.
    fn detach(&mut self, id: ListenerId);
}

impl<S: EventSource + ?Sized> EventSource for &mut S {
    fn attach(&mut self, listener: KeyListener) -> ListenerId {
        (**self).attach(listener)
    }

    fn detach(&mut self, id: ListenerId) {
        (**self).detach(id)
    }
}

/// Caller-owned mapping from actions to handlers.
///
/// The dispatcher only reads the table; missing entries mean "no handler",
/// never an error.
#[derive(Default)]
pub struct HandlerTable {
    handlers: HashMap<Action, Box<dyn FnMut()>>,
}

impl HandlerTable {
    /// Creates an empty handler table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the handler for an action, replacing any previous one.
    pub fn on(mut self, action: Action, handler: impl FnMut() + 'static) -> Self {
        self.handlers.insert(action, Box::new(handler));
        self
    }

    /// Invokes the handler for an action, if one is present.
    ///
    /// Returns true when a handler ran.
    pub fn invoke(&mut self, action: Action) -> bool {
        match self.handlers.get_mut(&action) {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// True when no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// Dispatches key chords to handlers over an injected event source.
///
/// Holds no global state beyond its own attached-listener slot, which is
/// mutated only during register/teardown.
pub struct ShortcutDispatcher<S: EventSource> {
    source: S,
    table: ChordTable,
    attached: Option<ListenerId>,
}

impl<S: EventSource> ShortcutDispatcher<S> {
    /// Creates a detached dispatcher over the given source and chord table.
    pub fn new(source: S, table: ChordTable) -> Self {
        Self {
            source,
            table,
            attached: None,
        }
    }

    /// Installs the listener, dispatching to the given handler table.
    ///
    /// If a listener is already attached, it is torn down first so the old
    /// handlers can never fire alongside the new ones.
    pub fn register(&mut self, mut handlers: HandlerTable) {
        self.unregister();

        let table = self.table.clone();
        let id = self.source.attach(Box::new(move |event| {
            match table.lookup(event) {
                Some(action) => {
                    // Suppress default even when no handler is supplied:
                    // the chord is still ours
                    handlers.invoke(action);
                    true
                }
                None => false,
            }
        }));

        self.attached = Some(id);
    }

    /// Removes the listener, stopping all future dispatch.
    ///
    /// Idempotent; a detached dispatcher stays detached.
    pub fn unregister(&mut self) {
        if let Some(id) = self.attached.take() {
            self.source.detach(id);
        }
    }

    /// True while a listener is installed.
    pub fn is_attached(&self) -> bool {
        self.attached.is_some()
    }

    /// The chord table this dispatcher resolves events against.
    pub fn table(&self) -> &ChordTable {
        &self.table
    }

    /// Mutable access to the underlying event source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}

impl<S: EventSource> Drop for ShortcutDispatcher<S> {
    fn drop(&mut self) {
        self.unregister();
    }
}
