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

//! src/shortcuts/types.rs
//!
//! Core type definitions for shortcut dispatch
//!
//! This module defines the fundamental types used by the shortcut layer:
//! - `Action`: The logical dashboard actions a chord can trigger
//! - `ModifierRow`: Which modifier combination a chord lives in
//! - `KeyChord`: A normalized (modifier row, key) pair used as a map key
//! - `KeyEvent`: One physical key press with its modifier flags
//!
//! All types implement serialization for config persistence and are designed
//! for consistent hashing (normalized keys, no aliasing between rows).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Logical dashboard actions
///
/// These are the named operations the dashboard exposes to keyboard users.
/// The dispatcher maps matched chords to these; callers supply a handler
/// per action they care about.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize)]
pub enum Action {
    /// Create a new trading profile
    NewProfile,
    /// Import a saved configuration
    ImportConfig,
    /// Export the current configuration
    ExportConfig,
    /// Focus the item search box
    SearchItem,
    /// Start or stop the auction house scan
    ToggleScan,
    /// Open the market analysis view
    MarketAnalysis,
    /// Refresh the data feeds
    Refresh,
    /// Show the help overlay
    ShowHelp,
}

impl Action {
    /// All actions, in display order
    pub const ALL: [Action; 8] = [
        Action::NewProfile,
        Action::ImportConfig,
        Action::ExportConfig,
        Action::SearchItem,
        Action::ToggleScan,
        Action::MarketAnalysis,
        Action::Refresh,
        Action::ShowHelp,
    ];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::NewProfile => "new_profile",
            Action::ImportConfig => "import_config",
            Action::ExportConfig => "export_config",
            Action::SearchItem => "search_item",
            Action::ToggleScan => "toggle_scan",
            Action::MarketAnalysis => "market_analysis",
            Action::Refresh => "refresh",
            Action::ShowHelp => "show_help",
        };
        write!(f, "{}", name)
    }
}

/// Error returned when an action name is not recognized
#[derive(Debug, Error, PartialEq)]
#[error("Unknown action '{0}'")]
pub struct UnknownAction(pub String);

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new_profile" => Ok(Action::NewProfile),
            "import_config" => Ok(Action::ImportConfig),
            "export_config" => Ok(Action::ExportConfig),
            "search_item" => Ok(Action::SearchItem),
            "toggle_scan" => Ok(Action::ToggleScan),
            "market_analysis" => Ok(Action::MarketAnalysis),
            "refresh" => Ok(Action::Refresh),
            "show_help" => Ok(Action::ShowHelp),
            other => Err(UnknownAction(other.to_string())),
        }
    }
}

/// Which modifier combination a chord lives in
///
/// The dashboard recognizes exactly three rows:
/// - `Ctrl`: ctrl-or-meta held, shift NOT held
/// - `CtrlShift`: ctrl-or-meta AND shift held
/// - `Bare`: matched on the literal key name regardless of modifier state
///   (the function-key row)
///
/// Ctrl and meta are deliberately not distinguished so that the same chords
/// work on macOS (Cmd) and elsewhere (Ctrl).
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize)]
pub enum ModifierRow {
    /// Ctrl-or-meta, without shift
    Ctrl,
    /// Ctrl-or-meta plus shift
    CtrlShift,
    /// No modifier requirement (function keys)
    Bare,
}

impl fmt::Display for ModifierRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModifierRow::Ctrl => write!(f, "CTRL"),
            ModifierRow::CtrlShift => write!(f, "CTRL+SHIFT"),
            ModifierRow::Bare => Ok(()),
        }
    }
}

/// A normalized chord: a modifier row plus a key name
///
/// Implements Hash and Eq for use as a HashMap key in the chord table and
/// in conflict detection.
///
/// # Normalization
/// Keys in the `Ctrl` and `CtrlShift` rows are stored lowercase, because
/// those rows match case-insensitively (shift changes the reported key case
/// on most platforms). Keys in the `Bare` row are stored verbatim: entries
/// there are named keys like "F5" and match on the exact key name.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize)]
pub struct KeyChord {
    /// The modifier row this chord belongs to
    pub row: ModifierRow,

    /// Key name, lowercase for modifier rows, verbatim for the bare row
    pub key: String,
}

impl KeyChord {
    /// Create a new chord with normalized key casing
    pub fn new(row: ModifierRow, key: &str) -> Self {
        let key = match row {
            ModifierRow::Bare => key.to_string(),
            _ => key.to_lowercase(),
        };
        Self { row, key }
    }

    /// Chord in the ctrl row
    pub fn ctrl(key: &str) -> Self {
        Self::new(ModifierRow::Ctrl, key)
    }

    /// Chord in the ctrl+shift row
    pub fn ctrl_shift(key: &str) -> Self {
        Self::new(ModifierRow::CtrlShift, key)
    }

    /// Chord in the bare row (matched regardless of modifiers)
    pub fn bare(key: &str) -> Self {
        Self::new(ModifierRow::Bare, key)
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.row {
            ModifierRow::Bare => write!(f, "{}", self.key),
            _ => write!(f, "{}+{}", self.row, self.key.to_uppercase()),
        }
    }
}

/// One physical key press
///
/// Produced by an event source per `keydown`, consumed synchronously by the
/// dispatcher, then discarded. `ctrl` and `meta` are reported separately by
/// real input layers but are equivalent for matching purposes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KeyEvent {
    /// Key name as reported by the input layer (e.g. "s", "N", "F5")
    pub key: String,

    /// Control key held
    pub ctrl: bool,

    /// Meta/Command key held
    pub meta: bool,

    /// Shift key held
    pub shift: bool,
}

impl KeyEvent {
    /// Key press with no modifiers
    pub fn plain(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ctrl: false,
            meta: false,
            shift: false,
        }
    }

    /// Key press with ctrl held
    pub fn ctrl(key: &str) -> Self {
        Self {
            ctrl: true,
            ..Self::plain(key)
        }
    }

    /// Key press with meta (Cmd) held
    pub fn meta(key: &str) -> Self {
        Self {
            meta: true,
            ..Self::plain(key)
        }
    }

    /// Key press with ctrl and shift held
    pub fn ctrl_shift(key: &str) -> Self {
        Self {
            ctrl: true,
            shift: true,
            ..Self::plain(key)
        }
    }

    /// True when ctrl or meta is held
    pub fn has_combo_modifier(&self) -> bool {
        self.ctrl || self.meta
    }
}
