//! Whole-collection object store.
//!
//! An [`ObjectStore`] persists one ordered collection of serializable values
//! to a single file. Every read loads the whole collection and every write
//! replaces it.

mod error;
mod object_store;

pub use error::StoreError;
pub use object_store::ObjectStore;
