//! Chord conflict detection
//!
//! This module implements O(1) conflict detection using HashMap-based
//! indexing. When one chord is bound to two or more different actions,
//! it is flagged as a conflict for the user to resolve. Restating the
//! same (chord, action) binding twice is not a conflict.
//!
//! # Performance
//! - Add binding: O(1) average case
//! - Check conflict: O(1) average case
//! - List all conflicts: O(n) where n = number of unique chords
//!
//! Shortcut tables are tiny (tens of entries), so this exists for
//! correctness, not speed: the chord→action mapping must stay a function.

use crate::shortcuts::types::{Action, KeyChord};
use std::collections::HashMap;

/// Detects chord conflicts using HashMap-based indexing.
///
/// Uses a HashMap where keys are KeyChords and values are the actions bound
/// to that chord. A conflict exists when a chord has two distinct actions.
pub struct ConflictDetector {
    /// Maps each chord to every action bound to it.
    bindings: HashMap<KeyChord, Vec<Action>>,
}

/// Represents a detected conflict between shortcut bindings.
#[derive(Clone, Debug, PartialEq)]
pub struct Conflict {
    /// The chord that has conflicts
    pub chord: KeyChord,

    /// All actions bound to this chord, in insertion order
    /// (always 2 or more, at least two of them distinct)
    pub actions: Vec<Action>,
}

impl ConflictDetector {
    /// Creates a new empty conflict detector.
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Adds a (chord, action) binding to the detector.
    pub fn add_binding(&mut self, chord: KeyChord, action: Action) {
        self.bindings.entry(chord).or_default().push(action);
    }

    /// Finds all conflicts (chords bound to 2 or more distinct actions).
    pub fn find_conflicts(&self) -> Vec<Conflict> {
        let mut conflicts: Vec<Conflict> = self
            .bindings
            .iter()
            .filter(|(_, actions)| has_distinct(actions))
            .map(|(chord, actions)| Conflict {
                chord: chord.clone(),
                actions: actions.clone(),
            })
            .collect();

        // Deterministic output for CLI display and tests
        conflicts.sort_by(|a, b| a.chord.cmp(&b.chord));
        conflicts
    }

    /// Checks if a specific chord has conflicts.
    ///
    /// Returns true if this chord is bound to 2 or more distinct actions.
    pub fn has_conflict(&self, chord: &KeyChord) -> bool {
        self.bindings
            .get(chord)
            .map(|actions| has_distinct(actions))
            .unwrap_or(false)
    }

    /// Returns the total number of bindings tracked.
    pub fn total_bindings(&self) -> usize {
        self.bindings.values().map(|v| v.len()).sum()
    }
}

impl Default for ConflictDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// True when the slice holds at least two distinct actions
fn has_distinct(actions: &[Action]) -> bool {
    actions
        .first()
        .map(|first| actions.iter().any(|a| a != first))
        .unwrap_or(false)
}
