//! Strongly-typed identifiers for invoices
//!
//! `InvoiceId` is the stable internal identity; `InvoiceNumber` is the short
//! human-facing code printed at the top of an invoice.

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Internal invoice identity, never shown to customers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(Uuid);

impl InvoiceId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Parse an ID from a string
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for InvoiceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "inv-{}", &self.0.to_string()[..8])
    }
}

impl FromStr for InvoiceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Short human-facing invoice code, e.g. "K3M9XQ"
///
/// Generated from the base-36 millisecond timestamp plus two random base-36
/// characters, uppercased, keeping the last six characters. Uniqueness is
/// probabilistic, which is acceptable for a single shop's invoice volume.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceNumber(String);

impl InvoiceNumber {
    /// Number of characters in a generated code
    pub const LEN: usize = 6;

    /// Generate a fresh invoice number from the current time
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        Self::generate_from(Utc::now().timestamp_millis(), [
            BASE36[rng.gen_range(0..36)] as char,
            BASE36[rng.gen_range(0..36)] as char,
        ])
    }

    /// Deterministic variant used by `generate` and by tests
    fn generate_from(timestamp_millis: i64, suffix: [char; 2]) -> Self {
        let mut code = to_base36(timestamp_millis);
        code.push(suffix[0]);
        code.push(suffix[1]);
        let code = code.to_uppercase();

        // Keep the trailing LEN characters; the leading timestamp digits
        // barely change between invoices anyway.
        let tail: String = code
            .chars()
            .rev()
            .take(Self::LEN)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        Self(tail)
    }

    /// View the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvoiceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for InvoiceNumber {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for InvoiceNumber {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

fn to_base36(mut n: i64) -> String {
    if n <= 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}
