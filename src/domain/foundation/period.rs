//! Monthly accounting period value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A (year, month) accounting period, month 1-12.
///
/// Orders chronologically, which gives execution series their natural
/// period ordering for S-curve computation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Period {
    year: i32,
    month: u8,
}

impl Period {
    /// Creates a Period, returning error for an invalid month.
    pub fn new(year: i32, month: u8) -> Result<Self, ValidationError> {
        if !(1..=12).contains(&month) {
            return Err(ValidationError::out_of_range(
                "month",
                1,
                12,
                i64::from(month),
            ));
        }
        Ok(Self { year, month })
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1-12).
    pub fn month(&self) -> u8 {
        self.month
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}
