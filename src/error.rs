//! Unified error type for the squirrel-server library.
//!
//! [`Error`] wraps every module-specific error so application code can
//! propagate with a single type.

use thiserror::Error;

use crate::squirrel::RepositoryError;
use crate::store::StoreError;

/// Unified error type for all squirrel-server operations.
///
/// # Example
///
/// ```ignore
/// use squirrel_server::{IdPolicy, Result, SquirrelRepository};
///
/// fn seed() -> Result<()> {
///     let repo = SquirrelRepository::open("squirrel_db.json", IdPolicy::default())?;
///     repo.create("Mike", "large")?;
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// Error from the object store.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Error from the squirrel repository.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A [`Result`] type alias using the unified [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns `true` if the error comes from an undecodable store file.
    pub fn is_corrupt(&self) -> bool {
        match self {
            Self::Store(e) => e.is_corrupt(),
            Self::Repository(e) => e.is_corrupt(),
            Self::Io(_) => false,
        }
    }

    /// Returns `true` if this is an I/O error.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            Self::Io(_) | Self::Store(StoreError::Io { .. }) | Self::Repository(RepositoryError::Store(StoreError::Io { .. }))
        )
    }
}
