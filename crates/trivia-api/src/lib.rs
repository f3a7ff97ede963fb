//! HTTP layer of the trivia API: configuration, state, error taxonomy,
//! routing, and per-resource handlers.

pub mod category;
pub mod coerce;
pub mod config;
pub mod error;
pub mod middleware;
pub mod pagination;
pub mod question;
pub mod quiz;
pub mod router;
pub mod state;
pub mod tracing;

pub use config::ApiConfig;
pub use state::ApiState;
