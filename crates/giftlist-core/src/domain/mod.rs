//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, filesystem, etc.).
//!
//! # Structure
//!
//! - `gift` - Gift records and their identifiers (`Gift`, `GiftId`)
//! - `catalog` - The fixed seed catalog used to populate an empty store

mod catalog;
mod gift;

pub use catalog::{DEFAULT_GIFT_NAMES, SeedCatalog};
pub use gift::{Gift, GiftId};
