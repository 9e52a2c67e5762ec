//! Money value object.
//!
//! All monetary values are stored as i64 cents, never floats. Ratios for
//! variance and alerting are computed in f64 at the reporting edge only.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use super::ValidationError;

/// A monetary amount in cents.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Creates a Money from cents.
    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Creates a Money from whole currency units.
    pub fn from_major(units: i64) -> Self {
        Self(units * 100)
    }

    /// Creates a non-negative Money from cents, returning error if negative.
    pub fn try_non_negative(cents: i64) -> Result<Self, ValidationError> {
        if cents < 0 {
            return Err(ValidationError::out_of_range(
                "amount",
                0,
                i64::MAX,
                cents,
            ));
        }
        Ok(Self(cents))
    }

    /// Returns the amount in cents.
    pub fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the amount in whole currency units, truncating cents.
    pub fn major_units(&self) -> i64 {
        self.0 / 100
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns true if the amount is negative.
    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the given percentage of this amount, rounding toward zero.
    pub fn percent(&self, pct: u8) -> Self {
        let cents = (i128::from(self.0) * i128::from(pct)) / 100;
        Self(cents as i64)
    }

    /// Returns this amount as a percentage of `total` (0.0 if total is zero).
    pub fn pct_of(&self, total: Money) -> f64 {
        if total.0 == 0 {
            return 0.0;
        }
        self.0 as f64 / total.0 as f64 * 100.0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}
