pub mod api;
pub mod cors;

pub use api::*;
pub use cors::*;
