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

//! src/shortcuts/parser.rs
//!
//! Shortcuts file parser
//!
//! This module parses the user's shortcuts file to build a chord table.
//! It handles:
//! - `shortcut = MODIFIERS, KEY, ACTION` lines
//! - Comments and whitespace
//! - Line numbers for error reporting
//!
//! # Architecture
//! Line structure is parsed with nom combinators; the modifier field and
//! action name are then resolved against the recognized modifier tokens and
//! action names, so unknown tokens fail loudly with a line number instead of
//! silently producing a different chord.
//!
//! Non-`shortcut` lines are skipped, leaving room for other settings to
//! share the file later.

use nom::{
    bytes::complete::{tag, take_until, take_while1},
    character::complete::{char, space0},
    IResult, Parser,
};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::shortcuts::table::{ChordTable, TableError};
use crate::shortcuts::types::{Action, KeyChord, ModifierRow};

/// Parse errors with line number context
#[derive(Debug, Error)]
pub enum ParseError {
    /// Line does not match `shortcut = MODIFIERS, KEY, ACTION`
    #[error("Parse error on line {line}: {message}")]
    InvalidSyntax { line: usize, message: String },

    /// Modifier token is not CTRL/CONTROL/SHIFT
    #[error("Unknown modifier '{modifier}' on line {line}")]
    UnknownModifier { modifier: String, line: usize },

    /// Shift appears without ctrl; there is no shift-only chord row
    #[error("Shift-only chords are not recognized (line {line})")]
    ShiftWithoutCtrl { line: usize },

    /// Action name does not name a known action
    #[error("Unknown action '{action}' on line {line}")]
    UnknownAction { action: String, line: usize },

    /// One chord bound to two different actions
    #[error(transparent)]
    Conflict(#[from] TableError),

    /// IO error reading the shortcuts file
    #[error("IO error reading shortcuts: {0}")]
    Io(#[from] std::io::Error),
}

/// Reads and parses a shortcuts file into a conflict-checked chord table.
///
/// # Errors
///
/// Returns a `ParseError` for unreadable files, malformed lines, unknown
/// modifiers or actions, and chords bound to two different actions.
pub fn load_shortcuts_file(path: &Path) -> Result<ChordTable, ParseError> {
    let content = fs::read_to_string(path)?;
    parse_shortcuts_file(&content)
}

/// Parses shortcuts file content into a conflict-checked chord table.
pub fn parse_shortcuts_file(content: &str) -> Result<ChordTable, ParseError> {
    let entries = parse_shortcut_entries(content)?;
    Ok(ChordTable::from_entries(entries)?)
}

/// Parses shortcuts file content into raw (chord, action) entries.
///
/// This is the conflict-unchecked form: `shortcuts check` uses it to report
/// every conflict rather than stopping at the first.
pub fn parse_shortcut_entries(content: &str) -> Result<Vec<(KeyChord, Action)>, ParseError> {
    let mut entries = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line_num = line_num + 1; // Human-readable numbers start at 1

        // Skip empty lines and comments
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() || line_trimmed.starts_with('#') {
            continue;
        }

        // Only process shortcut lines. The token must stand alone: a line
        // like `shortcuts_style = ...` is a foreign setting, not a binding
        if !is_shortcut_line(line_trimmed) {
            continue;
        }

        let (modifiers, key, action) = match parse_shortcut_line(line_trimmed) {
            Ok((_, fields)) => fields,
            Err(e) => {
                return Err(ParseError::InvalidSyntax {
                    line: line_num,
                    message: format!("{:?}", e),
                });
            }
        };

        let row = parse_modifier_row(modifiers, line_num)?;

        let key = key.trim();
        if key.is_empty() {
            return Err(ParseError::InvalidSyntax {
                line: line_num,
                message: "empty key name".to_string(),
            });
        }

        let action: Action = action.parse().map_err(|_| ParseError::UnknownAction {
            action: action.to_string(),
            line: line_num,
        })?;

        entries.push((KeyChord::new(row, key), action));
    }

    Ok(entries)
}

/// True when the line is a `shortcut` binding rather than some other
/// setting sharing the file (the token must be followed by `=` or
/// whitespace, so `shortcuts_style = ...` is skipped, not parsed)
fn is_shortcut_line(line: &str) -> bool {
    match line.strip_prefix("shortcut") {
        Some(rest) => rest.starts_with(|c: char| c == '=' || c.is_whitespace()),
        None => false,
    }
}

/// Parse a single shortcut line into its raw fields
///
/// Format: shortcut = MODIFIERS, KEY, ACTION
/// Example: shortcut = CTRL SHIFT, S, toggle_scan
///
/// Returns the untrimmed modifier field plus key and action tokens, or a
/// nom error. Field meaning is resolved by the caller.
pub fn parse_shortcut_line(input: &str) -> IResult<&str, (&str, &str, &str)> {
    let (input, _) = tag("shortcut").parse(input)?;
    let (input, _) = (space0, char('='), space0).parse(input)?;
    let (input, modifiers) = take_until(",")(input)?;
    let (input, _) = (char(','), space0).parse(input)?;
    let (input, key) = take_until(",")(input)?;
    let (input, _) = (char(','), space0).parse(input)?;
    let (input, action) = take_while1(|c: char| c.is_alphanumeric() || c == '_')(input)?;

    Ok((input, (modifiers, key, action)))
}

/// Parse the modifier field into a modifier row
///
/// Handles formats:
/// - "" → Bare (function-key row)
/// - "CTRL" → Ctrl
/// - "CTRL_SHIFT" or "CTRL SHIFT" → CtrlShift
///
/// Tokens are case-insensitive; CONTROL is accepted for CTRL.
pub fn parse_modifier_row(field: &str, line: usize) -> Result<ModifierRow, ParseError> {
    let field = field.trim();
    if field.is_empty() {
        return Ok(ModifierRow::Bare);
    }

    // Split by underscore or space
    let parts: Vec<&str> = if field.contains('_') {
        field.split('_').collect()
    } else {
        field.split_whitespace().collect()
    };

    let mut ctrl = false;
    let mut shift = false;

    for part in parts {
        match part.trim().to_uppercase().as_str() {
            "CTRL" | "CONTROL" => ctrl = true,
            "SHIFT" => shift = true,
            "" => {}
            other => {
                return Err(ParseError::UnknownModifier {
                    modifier: other.to_string(),
                    line,
                });
            }
        }
    }

    match (ctrl, shift) {
        (true, true) => Ok(ModifierRow::CtrlShift),
        (true, false) => Ok(ModifierRow::Ctrl),
        (false, true) => Err(ParseError::ShiftWithoutCtrl { line }),
        (false, false) => Ok(ModifierRow::Bare),
    }
}
