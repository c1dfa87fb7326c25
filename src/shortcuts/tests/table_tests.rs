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

//! Chord table tests
//!
//! Tests for the default table contents, the fixed-priority lookup rules,
//! and the no-conflicting-chords construction invariant.

use crate::shortcuts::conflict::ConflictDetector;
use crate::shortcuts::table::{ChordTable, TableError};
use crate::shortcuts::types::{Action, KeyChord, KeyEvent};

#[test]
fn test_ctrl_row_lookup() {
    let table = ChordTable::defaults();

    assert_eq!(table.lookup(&KeyEvent::ctrl("n")), Some(Action::NewProfile));
    assert_eq!(table.lookup(&KeyEvent::ctrl("o")), Some(Action::ImportConfig));
    assert_eq!(table.lookup(&KeyEvent::ctrl("s")), Some(Action::ExportConfig));
    assert_eq!(table.lookup(&KeyEvent::ctrl("f")), Some(Action::SearchItem));
}

#[test]
fn test_ctrl_row_is_case_insensitive() {
    let table = ChordTable::defaults();

    assert_eq!(table.lookup(&KeyEvent::ctrl("N")), Some(Action::NewProfile));
}

#[test]
fn test_meta_is_equivalent_to_ctrl() {
    let table = ChordTable::defaults();

    assert_eq!(table.lookup(&KeyEvent::meta("n")), Some(Action::NewProfile));
}

#[test]
fn test_shift_partitions_the_rows() {
    let table = ChordTable::defaults();

    // CTRL+SHIFT+S is toggle_scan, never export_config
    assert_eq!(
        table.lookup(&KeyEvent::ctrl_shift("s")),
        Some(Action::ToggleScan)
    );
    assert_eq!(
        table.lookup(&KeyEvent::ctrl_shift("a")),
        Some(Action::MarketAnalysis)
    );

    // CTRL+SHIFT+N is in neither row: no match at all
    assert_eq!(table.lookup(&KeyEvent::ctrl_shift("n")), None);
}

#[test]
fn test_function_keys_ignore_modifiers() {
    let table = ChordTable::defaults();

    assert_eq!(table.lookup(&KeyEvent::plain("F5")), Some(Action::Refresh));
    assert_eq!(table.lookup(&KeyEvent::ctrl("F5")), Some(Action::Refresh));
    assert_eq!(
        table.lookup(&KeyEvent::ctrl_shift("F5")),
        Some(Action::Refresh)
    );
    assert_eq!(table.lookup(&KeyEvent::plain("F1")), Some(Action::ShowHelp));
}

#[test]
fn test_plain_keys_do_not_match_modifier_rows() {
    let table = ChordTable::defaults();

    // Plain 's' must not fire export_config or toggle_scan
    assert_eq!(table.lookup(&KeyEvent::plain("s")), None);
    assert_eq!(table.lookup(&KeyEvent::plain("n")), None);
}

#[test]
fn test_unrecognized_chords_are_ignored() {
    let table = ChordTable::defaults();

    assert_eq!(table.lookup(&KeyEvent::ctrl("q")), None);
    assert_eq!(table.lookup(&KeyEvent::plain("F12")), None);
}

#[test]
fn test_from_entries_rejects_conflicting_chord() {
    let result = ChordTable::from_entries([
        (KeyChord::ctrl("s"), Action::ExportConfig),
        (KeyChord::ctrl("s"), Action::ToggleScan),
    ]);

    assert_eq!(
        result.err(),
        Some(TableError::ConflictingChord {
            chord: KeyChord::ctrl("s"),
            first: Action::ExportConfig,
            second: Action::ToggleScan,
        })
    );
}

#[test]
fn test_from_entries_accepts_restated_binding() {
    let table = ChordTable::from_entries([
        (KeyChord::ctrl("s"), Action::ExportConfig),
        (KeyChord::ctrl("s"), Action::ExportConfig),
    ]);

    assert_eq!(table.map(|t| t.len()).ok(), Some(1));
}

#[test]
fn test_default_table_is_conflict_free() {
    let table = ChordTable::defaults();
    assert_eq!(table.len(), 8);

    let mut detector = ConflictDetector::new();
    for (chord, action) in table.sorted_entries() {
        detector.add_binding(chord, action);
    }

    assert!(detector.find_conflicts().is_empty());
}

#[test]
fn test_sorted_entries_are_stable() {
    let table = ChordTable::defaults();
    let entries = table.sorted_entries();

    assert_eq!(entries.len(), 8);
    assert_eq!(entries, table.sorted_entries());
}
