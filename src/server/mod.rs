//! HTTP API server for squirrel-server.
//!
//! This module maps REST verbs on `/squirrels` and `/squirrels/{id}` onto a
//! [`SquirrelRepository`](crate::SquirrelRepository) using axum.

mod config;
mod error;
mod logging;
mod routes;
mod state;

pub use config::{Config, ConfigError, LogFormat, LoggingConfig, ServerConfig, StoreConfig};
pub use error::{ApiError, ErrorBody, ErrorResponse};
pub use logging::{LoggingError, init as init_logging};
pub use routes::router;
pub use state::{AppState, StateError};
