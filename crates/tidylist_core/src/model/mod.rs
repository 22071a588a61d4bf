//! Domain model for lists, tasks and calendar dates.
//!
//! # Responsibility
//! - Define the canonical shapes rendered by the list, task and calendar views.
//! - Validate user-provided text and dates before they reach the store.
//!
//! # Invariants
//! - List keys are unique within the live collection.
//! - Task keys are unique within their parent list only.
//! - A set list date is always a valid `YYYY-MM-DD` calendar date.

pub mod date;
pub mod list;
pub mod task;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejection reasons for user-provided input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// List title is blank after trim.
    BlankTitle,
    /// Task text is blank after trim.
    BlankText,
    /// Date is not a valid `YYYY-MM-DD` calendar date.
    InvalidDate(String),
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "list title must not be blank"),
            Self::BlankText => write!(f, "task text must not be blank"),
            Self::InvalidDate(value) => {
                write!(f, "date must be a valid YYYY-MM-DD calendar date, got `{value}`")
            }
        }
    }
}

impl Error for InputError {}

/// Next key after `highest`, starting at 1; `None` when it would not fit.
pub(crate) fn key_after(highest: Option<u64>) -> Option<u64> {
    highest.map_or(Some(1), |key| key.checked_add(1))
}

/// Returns `true` when the value has visible characters.
pub(crate) fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::key_after;

    #[test]
    fn key_after_starts_at_one_and_stops_at_the_top() {
        assert_eq!(key_after(None), Some(1));
        assert_eq!(key_after(Some(41)), Some(42));
        assert_eq!(key_after(Some(u64::MAX)), None);
    }
}
