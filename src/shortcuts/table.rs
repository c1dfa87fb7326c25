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

//! src/shortcuts/table.rs
//!
//! Declarative chord-to-action table
//!
//! The table is a pure mapping from normalized chords to actions, built
//! once at construction and read-only afterwards. Construction through
//! `from_entries` enforces the core invariant: no chord maps to two
//! different actions. Lookup implements the dashboard's fixed-priority
//! dispatch rules.

use crate::shortcuts::types::{Action, KeyChord, KeyEvent, ModifierRow};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use thiserror::Error;

/// Error returned when a table would bind one chord to two actions
#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    /// One chord bound to two different actions
    #[error("Chord {chord} bound to both '{first}' and '{second}'")]
    ConflictingChord {
        /// The chord bound twice
        chord: KeyChord,
        /// The action already in the table
        first: Action,
        /// The action the caller tried to add
        second: Action,
    },
}

/// A chord-to-action table with fixed-priority lookup.
///
/// Lookup evaluates rows in this order, first match wins:
/// 1. ctrl-or-meta held, shift not held → the `Ctrl` row (case-insensitive)
/// 2. ctrl-or-meta and shift held → the `CtrlShift` row (case-insensitive)
/// 3. the `Bare` row, matched on the literal key name regardless of
///    modifier state (the function-key row)
///
/// Unmatched events return `None`: they are ignored, never an error.
#[derive(Clone, Debug)]
pub struct ChordTable {
    entries: HashMap<KeyChord, Action>,
}

impl ChordTable {
    /// Builds a table from (chord, action) entries.
    ///
    /// Restating an identical binding is accepted; binding one chord to two
    /// different actions is rejected.
    ///
    /// # Errors
    ///
    /// Returns `TableError::ConflictingChord` for the first chord found
    /// bound to two different actions.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (KeyChord, Action)>,
    ) -> Result<Self, TableError> {
        let mut table = HashMap::new();

        for (chord, action) in entries {
            match table.entry(chord) {
                Entry::Vacant(slot) => {
                    slot.insert(action);
                }
                Entry::Occupied(existing) => {
                    let first = *existing.get();
                    if first != action {
                        return Err(TableError::ConflictingChord {
                            chord: existing.key().clone(),
                            first,
                            second: action,
                        });
                    }
                    // Same binding restated, nothing to do
                }
            }
        }

        Ok(Self { entries: table })
    }

    /// The dashboard's built-in shortcut table.
    ///
    /// - CTRL+N → new_profile, CTRL+O → import_config,
    ///   CTRL+S → export_config, CTRL+F → search_item
    /// - CTRL+SHIFT+S → toggle_scan, CTRL+SHIFT+A → market_analysis
    /// - F5 → refresh, F1 → show_help (regardless of modifiers)
    pub fn defaults() -> Self {
        let entries = HashMap::from([
            (KeyChord::ctrl("n"), Action::NewProfile),
            (KeyChord::ctrl("o"), Action::ImportConfig),
            (KeyChord::ctrl("s"), Action::ExportConfig),
            (KeyChord::ctrl("f"), Action::SearchItem),
            (KeyChord::ctrl_shift("s"), Action::ToggleScan),
            (KeyChord::ctrl_shift("a"), Action::MarketAnalysis),
            (KeyChord::bare("F5"), Action::Refresh),
            (KeyChord::bare("F1"), Action::ShowHelp),
        ]);

        Self { entries }
    }

    /// Resolves a key event to an action, if any chord matches.
    pub fn lookup(&self, event: &KeyEvent) -> Option<Action> {
        if event.has_combo_modifier() {
            let row = if event.shift {
                ModifierRow::CtrlShift
            } else {
                ModifierRow::Ctrl
            };

            if let Some(action) = self.entries.get(&KeyChord::new(row, &event.key)) {
                return Some(*action);
            }
        }

        // Function-key row fires regardless of modifier state. The key sets
        // are disjoint, so at most one row matches per event.
        self.entries
            .get(&KeyChord::new(ModifierRow::Bare, &event.key))
            .copied()
    }

    /// All entries, sorted by chord, for display.
    pub fn sorted_entries(&self) -> Vec<(KeyChord, Action)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(chord, action)| (chord.clone(), *action))
            .collect();
        entries.sort();
        entries
    }

    /// Number of chords in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ChordTable {
    fn default() -> Self {
        Self::defaults()
    }
}
