//! A minimal squirrel REST resource backed by a flat-file object store.
//!
//! The crate has two layers: a generic whole-collection [`ObjectStore`] and a
//! [`SquirrelRepository`] that implements CRUD over it. With the `server`
//! feature, [`server::router`] maps HTTP requests onto the repository.
//!
//! # Quick Start
//!
//! ```ignore
//! use squirrel_server::prelude::*;
//!
//! let repo = SquirrelRepository::open("squirrel_db.json", IdPolicy::default())?;
//! let mike = repo.create("Mike", "large")?;
//! repo.update_by_id(mike.id, "Mike", "medium")?;
//! assert_eq!(repo.get_all()?.len(), 1);
//! ```
//!
//! # Modules
//!
//! - [`store`] - Generic whole-collection persistence (always available)
//! - [`squirrel`] - Squirrel records and repository (always available)
//! - [`server`] - HTTP router, configuration and state (requires `server` feature)
//!
//! # Feature Flags
//!
//! - `logging` - Enable library-level tracing (consumers provide their own subscriber)
//! - `cli` - Enable the `squirrels` admin binary
//! - `server` - Enable the HTTP API server (enabled by default)
//! - `full` - Enable all features

mod logging;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;
pub mod squirrel;
pub mod store;

mod error;

// Re-export the unified error type
pub use error::{Error, Result};

pub use squirrel::{IdPolicy, RepositoryError, Squirrel, SquirrelForm, SquirrelRepository};
pub use store::{ObjectStore, StoreError};
