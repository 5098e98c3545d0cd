#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod view;

// Re-export primary types
pub use bootstrap::{AxumContext, bootstrap, start_server};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
