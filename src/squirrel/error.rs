//! Error types for the squirrel repository.

use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur during repository operations.
///
/// An id that does not resolve is not an error; lookups return `None` and
/// mutations return `false`.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Repository lock poisoned by a panicked writer")]
    Poisoned,

    /// The id policy overflowed `u64`.
    #[error("No id left to assign after {last}")]
    IdSpaceExhausted { last: u64 },
}

impl RepositoryError {
    /// Returns `true` if the backing store could not be decoded.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Store(e) if e.is_corrupt())
    }
}
