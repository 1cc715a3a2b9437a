//! HTTP handlers.

pub mod health_handler;
pub mod info_handler;

pub use health_handler::health_routes;
pub use info_handler::info_routes;
