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

//! Kezan Protocol companion client
//!
//! The client-side slice of the Kezan Protocol auction assistant: fetches
//! the dashboard's market feeds and maps keyboard chords to dashboard
//! actions.
//!
//! # Features
//!
//! - **Data Gateway:** Named resource fetches against the backend JSON API,
//!   degrading every failure to "no data" for the dashboard
//! - **Shortcut Dispatcher:** Chord-to-action dispatch with an attached/
//!   detached lifecycle over an injected event source
//! - **Conflict Detection:** No chord can ever map to two different actions
//! - **Declarative Shortcuts:** Rebindable chord table parsed from a
//!   shortcuts file
//!
//! # Architecture
//!
//! - **`gateway`:** HTTP access to the three data feeds
//! - **`shortcuts`:** Chord types, table, parser, conflict detection, and
//!   the dispatcher state machine
//! - **`config`:** Client settings (API base URL, timeout, shortcuts file)
//!
//! All dispatch logic is isolated from real input layers behind the
//! `EventSource` trait, so the whole shortcut layer unit-tests without a
//! display server.
//!
//! # Examples
//!
//! ## Fetching a feed
//!
//! ```no_run
//! use kezan_protocol::gateway::{ApiGateway, Resource};
//! use std::time::Duration;
//!
//! let gateway = ApiGateway::new("http://localhost:8000/api", Duration::from_secs(10));
//! for record in gateway.fetch(Resource::Deals) {
//!     println!("{}", record);
//! }
//! ```
//!
//! ## Dispatching shortcuts
//!
//! ```
//! use kezan_protocol::shortcuts::{
//!     Action, ChordTable, HandlerTable, KeyEvent, ManualEventSource, ShortcutDispatcher,
//! };
//!
//! let mut dispatcher =
//!     ShortcutDispatcher::new(ManualEventSource::new(), ChordTable::defaults());
//! dispatcher.register(HandlerTable::new().on(Action::ToggleScan, || println!("scanning")));
//!
//! dispatcher.source_mut().emit(&KeyEvent::ctrl_shift("s"));
//! ```

pub mod config;
pub mod gateway;
pub mod shortcuts;

// Re-export commonly used types for convenience
pub use gateway::{ApiGateway, Resource};
pub use shortcuts::{Action, ChordTable, HandlerTable, KeyChord, KeyEvent, ShortcutDispatcher};
