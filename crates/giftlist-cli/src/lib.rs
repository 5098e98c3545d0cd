//! Command-line interface for the gift registry.
//!
//! `main.rs` only initializes logging, parses arguments and dispatches;
//! everything testable lives here.

pub mod bootstrap;
pub mod commands;
pub mod handlers;
pub mod parser;

pub use commands::Commands;
pub use parser::Cli;
