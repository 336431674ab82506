//! Money type for representing currency amounts
//!
//! Internally stores amounts in piasters (i64, hundredths of a pound) to
//! avoid floating-point precision issues. Provides safe arithmetic
//! operations and formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul};

/// A monetary amount stored as piasters (hundredths of the currency unit)
///
/// Using i64 piasters keeps line totals exact where f64 would drift, and
/// supports any realistic invoice amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from piasters
    ///
    /// # Examples
    /// ```
    /// use fatora::models::Money;
    /// let amount = Money::from_piasters(1050); // 10.50 EGP
    /// ```
    pub const fn from_piasters(piasters: i64) -> Self {
        Self(piasters)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in piasters
    pub const fn piasters(&self) -> i64 {
        self.0
    }

    /// Get the whole pounds portion (truncated toward zero)
    pub const fn pounds(&self) -> i64 {
        self.0 / 100
    }

    /// Get the piasters portion (0-99)
    pub const fn piasters_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse a money amount from a string
    ///
    /// Accepts the formats a price field produces: "10.50", "10.5", "10"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        if s.is_empty() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let piasters = if let Some((pounds_str, frac_str)) = s.split_once('.') {
            let pounds: i64 = pounds_str
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

            // The fraction is sliced by byte below, so it must be ASCII digits
            if !frac_str.chars().all(|c| c.is_ascii_digit()) {
                return Err(MoneyParseError::InvalidFormat(s.to_string()));
            }

            // Pad or truncate the fraction to 2 digits
            let frac: i64 = match frac_str.len() {
                0 => 0,
                1 => {
                    frac_str
                        .parse::<i64>()
                        .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                        * 10
                }
                _ => frac_str[..2]
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?,
            };

            pounds * 100 + frac
        } else {
            // Integer format - whole pounds
            s.parse::<i64>()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                * 100
        };

        Ok(Self(if negative { -piasters } else { piasters }))
    }

    /// Format with a currency label appended, e.g. "12.50 جنيه"
    pub fn format_with_label(&self, label: &str) -> String {
        if self.is_negative() {
            format!("-{}.{:02} {}", self.pounds().abs(), self.piasters_part(), label)
        } else {
            format!("{}.{:02} {}", self.pounds(), self.piasters_part(), label)
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.pounds().abs(), self.piasters_part())
        } else {
            write!(f, "{}.{:02}", self.pounds(), self.piasters_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        Self(self.0 * quantity as i64)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
