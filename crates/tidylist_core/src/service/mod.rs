//! View-level services derived from the store.
//!
//! # Responsibility
//! - Derive read-only projections without mutating the store.

pub mod calendar_service;
