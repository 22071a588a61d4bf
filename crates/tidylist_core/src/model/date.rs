//! Calendar date carried by a list.

use crate::model::InputError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter};

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid iso date regex"));

/// Validated `YYYY-MM-DD` date string.
///
/// Comparisons are exact string comparisons, matching how the calendar view
/// filters lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListDate(String);

impl ListDate {
    /// Parses a zero-padded ISO date.
    ///
    /// # Errors
    /// - Returns `InputError::InvalidDate` for any other shape, or for a
    ///   well-shaped string that is not a real calendar day (`2024-02-30`).
    pub fn parse(value: &str) -> Result<Self, InputError> {
        if !ISO_DATE_RE.is_match(value) {
            return Err(InputError::InvalidDate(value.to_string()));
        }
        NaiveDate::parse_from_str(value, ISO_DATE_FORMAT)
            .map_err(|_| InputError::InvalidDate(value.to_string()))?;
        Ok(Self(value.to_string()))
    }

    /// Formats a picked calendar day.
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date.format(ISO_DATE_FORMAT).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the calendar day this string denotes.
    pub fn to_naive(&self) -> NaiveDate {
        // Shape and calendar validity were checked on construction.
        NaiveDate::parse_from_str(&self.0, ISO_DATE_FORMAT).unwrap_or_default()
    }
}

impl Display for ListDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ListDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Serializes an optional date the way seed data stores it: `""` when unset.
pub(crate) fn serialize_optional<S: Serializer>(
    value: &Option<ListDate>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(value.as_ref().map(ListDate::as_str).unwrap_or(""))
}

#[cfg(test)]
mod tests {
    use super::ListDate;
    use crate::model::InputError;
    use chrono::NaiveDate;

    #[test]
    fn parse_accepts_zero_padded_dates() {
        let date = ListDate::parse("2024-05-01").expect("valid date");
        assert_eq!(date.as_str(), "2024-05-01");
        assert_eq!(
            date.to_naive(),
            NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid ymd")
        );
    }

    #[test]
    fn parse_rejects_unpadded_and_impossible_dates() {
        for raw in ["2024-5-1", "2024-02-30", "", "05/01/2024", " 2024-05-01"] {
            let err = ListDate::parse(raw).expect_err("date should be rejected");
            assert_eq!(err, InputError::InvalidDate(raw.to_string()));
        }
    }

    #[test]
    fn from_naive_formats_iso_day() {
        let picked = NaiveDate::from_ymd_opt(2023, 12, 9).expect("valid ymd");
        assert_eq!(ListDate::from_naive(picked).as_str(), "2023-12-09");
    }
}
