//! Gateway module tests
//!
//! Gateway tests run against canned HTTP responses served from a loopback
//! listener; no network access and no live backend.
