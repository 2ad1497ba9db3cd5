//! Player birthday, carried on the wire as epoch milliseconds.

use chrono::{DateTime, Datelike, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

pub const MIN_BIRTH_YEAR: i32 = 2000;
pub const MAX_BIRTH_YEAR: i32 = 3000;

/// A validated birthday: non-negative epoch millis whose calendar year, in
/// the system time zone, lies in `[2000, 3000]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Birthday(DateTime<Utc>);

impl Birthday {
    pub fn is_valid(epoch_millis: i64) -> bool {
        if epoch_millis < 0 {
            return false;
        }
        match DateTime::from_timestamp_millis(epoch_millis) {
            Some(instant) => {
                let year = instant.with_timezone(&Local).year();
                (MIN_BIRTH_YEAR..=MAX_BIRTH_YEAR).contains(&year)
            }
            None => false,
        }
    }

    pub fn from_millis(epoch_millis: i64) -> Result<Self, DomainError> {
        if !Self::is_valid(epoch_millis) {
            return Err(DomainError::validation(format!(
                "Birthday must fall in the years {} to {}",
                MIN_BIRTH_YEAR, MAX_BIRTH_YEAR
            )));
        }
        DateTime::from_timestamp_millis(epoch_millis)
            .map(Self)
            .ok_or_else(|| DomainError::validation("Birthday is out of range"))
    }

    /// Rebuild a birthday that was validated when it was written. Only the
    /// instant has to be representable; the local-time year is not checked
    /// again, so a change of system time zone cannot reject stored records.
    pub fn from_stored_millis(epoch_millis: i64) -> Result<Self, DomainError> {
        DateTime::from_timestamp_millis(epoch_millis)
            .map(Self)
            .ok_or_else(|| DomainError::validation("Birthday is out of range"))
    }

    pub fn as_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.date_naive())
    }
}

impl TryFrom<i64> for Birthday {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_millis(value)
    }
}

impl From<Birthday> for i64 {
    fn from(value: Birthday) -> Self {
        value.as_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn mid_year_millis(year: i32) -> i64 {
        Utc.with_ymd_and_hms(year, 6, 15, 12, 0, 0)
            .single()
            .expect("valid date")
            .timestamp_millis()
    }

    #[test]
    fn accepts_years_inside_range() {
        assert!(Birthday::is_valid(mid_year_millis(2000)));
        assert!(Birthday::is_valid(mid_year_millis(2010)));
        assert!(Birthday::is_valid(mid_year_millis(3000)));
    }

    #[test]
    fn rejects_years_outside_range() {
        assert!(!Birthday::is_valid(mid_year_millis(1999)));
        assert!(!Birthday::is_valid(mid_year_millis(3001)));
    }

    #[test]
    fn rejects_negative_millis() {
        assert!(!Birthday::is_valid(-1));
        assert!(matches!(
            Birthday::from_millis(-1),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn stored_millis_skip_the_year_check() {
        let millis = mid_year_millis(1999);
        assert!(Birthday::from_millis(millis).is_err());
        let stored = Birthday::from_stored_millis(millis).expect("representable");
        assert_eq!(stored.as_millis(), millis);
        assert!(Birthday::from_stored_millis(i64::MAX).is_err());
    }

    #[test]
    fn round_trips_millis() {
        let millis = mid_year_millis(2012);
        let birthday = Birthday::from_millis(millis).expect("valid");
        assert_eq!(birthday.as_millis(), millis);
    }
}
