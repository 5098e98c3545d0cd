#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod setup;

// Re-export factory for convenient access
pub use factory::StoreFactory;

// Re-export store implementations
pub use repositories::{JsonGiftStore, SqliteGiftStore};

// Re-export setup functions for convenient access
pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;

// Linked for its bundled SQLite build, never referenced directly
use libsqlite3_sys as _;
