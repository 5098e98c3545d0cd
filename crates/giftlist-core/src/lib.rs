#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use config::{AppConfig, BackendKind, ConfigError, HttpConfig, StoreBackend};
pub use domain::{Gift, GiftId, SeedCatalog};
pub use ports::{CoreError, GiftStore, RepositoryError};
pub use services::RegistryService;
