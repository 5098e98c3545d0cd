//! Gift store implementations.
//!
//! These implementations encapsulate all SQL queries and file access.
//! The `SqlitePool` and file layout are confined to this module and never
//! exposed through the port trait signatures.

mod json_gift_store;
mod sqlite_gift_store;

pub use json_gift_store::JsonGiftStore;
pub use sqlite_gift_store::SqliteGiftStore;
