//! Command handlers.
//!
//! Handlers are thin wrappers that call the registry service and format
//! the result for the terminal. They never touch a store directly.

pub mod buy;
pub mod init;
pub mod list;
pub mod serve;
