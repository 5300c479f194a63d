//! Mentors Service
//!
//! CRUD HTTP API for mentor profiles backed by a single SQLite table.
//! Mentors are exchanged as JSON (arrays and booleans on the wire) and
//! persisted as rows (text-serialized topics, integer-encoded flags).

// Public exports
pub mod contract;
pub use contract::{error::MentorsError, Mentor, MentorDraft};

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
