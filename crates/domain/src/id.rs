//! Typed identifier for attendance records.
//!
//! Records are keyed by the storage-assigned integer row id.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique identifier for an [`AttendanceRecord`](crate::attendance::AttendanceRecord).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AttendanceId(i64);

impl AttendanceId {
    /// Wrap a raw row id.
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Access the inner row id.
    #[must_use]
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for AttendanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Reasons a path segment cannot be read as an [`AttendanceId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseIdError {
    /// The segment is empty or contains something other than ASCII digits.
    #[error("identifier must be one or more decimal digits")]
    NotNumeric,
    /// The digits do not fit in a row id.
    #[error("identifier is out of range")]
    OutOfRange,
}

impl FromStr for AttendanceId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseIdError::NotNumeric);
        }
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| ParseIdError::OutOfRange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_decimal_digits() {
        let id: AttendanceId = "42".parse().unwrap();
        assert_eq!(id.as_i64(), 42);
    }

    #[test]
    fn should_accept_leading_zeros() {
        let id: AttendanceId = "007".parse().unwrap();
        assert_eq!(id, AttendanceId::new(7));
    }

    #[test]
    fn should_reject_signs_and_letters() {
        assert_eq!(AttendanceId::from_str("-1"), Err(ParseIdError::NotNumeric));
        assert_eq!(AttendanceId::from_str("+1"), Err(ParseIdError::NotNumeric));
        assert_eq!(AttendanceId::from_str("12a"), Err(ParseIdError::NotNumeric));
        assert_eq!(AttendanceId::from_str(""), Err(ParseIdError::NotNumeric));
    }

    #[test]
    fn should_report_out_of_range_when_digits_overflow() {
        assert_eq!(
            AttendanceId::from_str("99999999999999999999"),
            Err(ParseIdError::OutOfRange)
        );
    }

    #[test]
    fn should_serialize_as_bare_integer() {
        let json = serde_json::to_string(&AttendanceId::new(5)).unwrap();
        assert_eq!(json, "5");
    }
}
