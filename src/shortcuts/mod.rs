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

//! src/shortcuts/mod.rs
//!
//! Keyboard shortcut layer
//!
//! This module contains the chord-dispatch machinery for the dashboard:
//! - Type definitions for actions, chords, and key events
//! - The declarative chord-to-action table with fixed-priority lookup
//! - Conflict detection using HashMap-based O(1) lookup
//! - Shortcuts file parsing
//! - The dispatcher lifecycle over an injected event source
//!
//! The event source is a trait collaborator, so everything here runs and
//! tests without a display server or terminal.

pub mod conflict;
pub mod dispatcher;
pub mod parser;
pub mod source;
pub mod table;
pub mod types;

pub use conflict::{Conflict, ConflictDetector};
pub use dispatcher::{EventSource, HandlerTable, KeyListener, ListenerId, ShortcutDispatcher};
pub use parser::{load_shortcuts_file, parse_shortcut_entries, parse_shortcuts_file, ParseError};
pub use source::ManualEventSource;
pub use table::{ChordTable, TableError};
pub use types::*;

#[cfg(test)]
mod tests;
