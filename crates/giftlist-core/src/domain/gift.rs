//! Gift domain types.
//!
//! These types represent gift records in the system, independent of any
//! infrastructure concerns (database, filesystem, etc.).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ports::CoreError;

// ─────────────────────────────────────────────────────────────────────────────
// Identifier
// ─────────────────────────────────────────────────────────────────────────────

/// Store-assigned identifier of a gift.
///
/// Always strictly positive. The only ways to obtain one are
/// [`GiftId::new`] and [`GiftId::parse`], so a store never sees an
/// identifier that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct GiftId(i64);

impl GiftId {
    /// Validate a raw integer identifier.
    pub fn new(raw: i64) -> Result<Self, CoreError> {
        if raw > 0 {
            Ok(Self(raw))
        } else {
            Err(CoreError::InvalidIdentifier(raw.to_string()))
        }
    }

    /// Parse an identifier as submitted by a client (e.g. a form field).
    ///
    /// Surrounding whitespace is ignored. Anything that is not a base-10
    /// integer, or is not positive, is rejected.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| CoreError::InvalidIdentifier(raw.to_string()))?;
        Self::new(value).map_err(|_| CoreError::InvalidIdentifier(raw.to_string()))
    }

    /// The raw integer value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for GiftId {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<GiftId> for i64 {
    fn from(id: GiftId) -> Self {
        id.0
    }
}

impl fmt::Display for GiftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Gift
// ─────────────────────────────────────────────────────────────────────────────

/// A gift that exists in the store.
///
/// `bought` only ever moves from `false` to `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gift {
    /// Store-assigned identifier, unique and never reused.
    pub id: GiftId,
    /// Display name, unique across the store.
    pub name: String,
    /// Whether a visitor has already claimed this gift.
    pub bought: bool,
}

impl Gift {
    /// Whether the gift can still be claimed.
    pub const fn is_available(&self) -> bool {
        !self.bought
    }
}
