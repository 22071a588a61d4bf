//! Flutter-facing bindings for tidylist core.

pub mod api;
