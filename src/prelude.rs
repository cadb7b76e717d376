//! Convenient re-exports for common usage patterns.
//!
//! ```ignore
//! use squirrel_server::prelude::*;
//!
//! let repo = SquirrelRepository::open("squirrel_db.json", IdPolicy::Count)?;
//! repo.create("Joe", "medium")?;
//! ```

pub use crate::error::{Error, Result};

pub use crate::squirrel::{IdPolicy, RepositoryError, Squirrel, SquirrelForm, SquirrelRepository};
pub use crate::store::{ObjectStore, StoreError};

#[cfg(feature = "server")]
pub use crate::server::{ApiError, AppState, Config, router};
