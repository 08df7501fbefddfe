//! SYNAPSE: HTTP API of the engineering document management platform.

pub mod config;
pub mod docs;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod routes;

pub use config::Config;
pub use error::ApiError;
pub use routes::create_app;
