//! Core services - the application's business logic layer.
//!
//! Services here are pure orchestrators over ports; they don't know
//! about concrete storage implementations.

mod registry_service;

pub use registry_service::RegistryService;
