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

//! Conflict detection tests

use crate::shortcuts::conflict::ConflictDetector;
use crate::shortcuts::types::{Action, KeyChord};

#[test]
fn test_no_conflicts_when_empty() {
    let detector = ConflictDetector::new();
    assert_eq!(detector.find_conflicts().len(), 0);
    assert_eq!(detector.total_bindings(), 0);
}

#[test]
fn test_no_conflicts_with_unique_bindings() {
    let mut detector = ConflictDetector::new();

    detector.add_binding(KeyChord::ctrl("n"), Action::NewProfile);
    detector.add_binding(KeyChord::ctrl("s"), Action::ExportConfig);
    detector.add_binding(KeyChord::ctrl_shift("s"), Action::ToggleScan);

    assert_eq!(detector.find_conflicts().len(), 0);
    assert_eq!(detector.total_bindings(), 3);
}

#[test]
fn test_detects_simple_conflict() {
    let mut detector = ConflictDetector::new();

    // Same chord, different actions
    detector.add_binding(KeyChord::ctrl("s"), Action::ExportConfig);
    detector.add_binding(KeyChord::ctrl("s"), Action::ToggleScan);

    let conflicts = detector.find_conflicts();
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].chord, KeyChord::ctrl("s"));
    assert_eq!(
        conflicts[0].actions,
        vec![Action::ExportConfig, Action::ToggleScan]
    );
}

#[test]
fn test_restated_binding_is_not_a_conflict() {
    let mut detector = ConflictDetector::new();

    detector.add_binding(KeyChord::bare("F5"), Action::Refresh);
    detector.add_binding(KeyChord::bare("F5"), Action::Refresh);

    assert_eq!(detector.find_conflicts().len(), 0);
    assert!(!detector.has_conflict(&KeyChord::bare("F5")));
    assert_eq!(detector.total_bindings(), 2);
}

#[test]
fn test_rows_do_not_conflict_across_each_other() {
    let mut detector = ConflictDetector::new();

    // Same key, different modifier rows: distinct chords
    detector.add_binding(KeyChord::ctrl("s"), Action::ExportConfig);
    detector.add_binding(KeyChord::ctrl_shift("s"), Action::ToggleScan);

    assert_eq!(detector.find_conflicts().len(), 0);
}

#[test]
fn test_has_conflict_method() {
    let mut detector = ConflictDetector::new();
    let chord = KeyChord::ctrl("f");

    detector.add_binding(chord.clone(), Action::SearchItem);
    assert!(!detector.has_conflict(&chord));

    detector.add_binding(chord.clone(), Action::ShowHelp);
    assert!(detector.has_conflict(&chord));
}

#[test]
fn test_multiple_independent_conflicts() {
    let mut detector = ConflictDetector::new();

    // Conflict 1: CTRL+S
    detector.add_binding(KeyChord::ctrl("s"), Action::ExportConfig);
    detector.add_binding(KeyChord::ctrl("s"), Action::ToggleScan);

    // Conflict 2: F5
    detector.add_binding(KeyChord::bare("F5"), Action::Refresh);
    detector.add_binding(KeyChord::bare("F5"), Action::ShowHelp);

    // No conflict: CTRL+N
    detector.add_binding(KeyChord::ctrl("n"), Action::NewProfile);

    let conflicts = detector.find_conflicts();
    assert_eq!(conflicts.len(), 2);
    assert_eq!(detector.total_bindings(), 5);
}
