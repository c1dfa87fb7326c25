//! Shortcut module tests
//!
//! Contains test suites for the shortcut layer:
//! - Chord table lookup tests
//! - Conflict detection tests
//! - Shortcuts file parser tests
//! - Dispatcher lifecycle tests

#[cfg(test)]
mod conflict_tests;
#[cfg(test)]
mod table_tests;
