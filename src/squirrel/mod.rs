//! Squirrel records and their repository.
//!
//! This module layers CRUD semantics over an [`ObjectStore`](crate::store::ObjectStore)
//! holding [`Squirrel`] records. The repository owns id assignment; see
//! [`IdPolicy`].

mod error;
mod repository;
mod types;

pub use error::RepositoryError;
pub use repository::SquirrelRepository;
pub use types::{IdPolicy, ParseIdPolicyError, Squirrel, SquirrelForm};
