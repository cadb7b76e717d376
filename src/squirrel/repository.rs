//! CRUD repository over the object store.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use crate::logging::{debug, error, info, warn};
use crate::store::ObjectStore;

use super::error::RepositoryError;
use super::types::{IdPolicy, Squirrel};

/// CRUD access to squirrel records persisted in one [`ObjectStore`].
///
/// Nothing is cached: every call reads the collection from disk, and every
/// mutation rewrites it. All calls on one repository run under a single
/// mutex, so concurrent creates and deletes through the same instance
/// cannot lose each other's updates. Separate instances (or processes)
/// pointed at the same file are not coordinated.
///
/// # Example
///
/// ```ignore
/// use squirrel_server::{IdPolicy, SquirrelRepository};
///
/// let repo = SquirrelRepository::open("squirrel_db.json", IdPolicy::default())?;
/// let mike = repo.create("Mike", "large")?;
/// assert_eq!(repo.get_by_id(mike.id)?, Some(mike));
/// ```
#[derive(Debug)]
pub struct SquirrelRepository {
    store: Mutex<ObjectStore<Squirrel>>,
    id_policy: IdPolicy,
}

impl SquirrelRepository {
    /// Open (or create) the repository file at `path`.
    pub fn open(path: impl AsRef<Path>, id_policy: IdPolicy) -> Result<Self, RepositoryError> {
        let store = ObjectStore::open(path)?;
        info!(path = %store.path().display(), id_policy = %id_policy, "squirrel repository opened");
        Ok(Self::with_store(store, id_policy))
    }

    /// Wrap an already opened store.
    pub fn with_store(store: ObjectStore<Squirrel>, id_policy: IdPolicy) -> Self {
        Self {
            store: Mutex::new(store),
            id_policy,
        }
    }

    pub fn id_policy(&self) -> IdPolicy {
        self.id_policy
    }

    /// Create a record and return it with its assigned id.
    pub fn create(
        &self,
        name: impl Into<String>,
        size: impl Into<String>,
    ) -> Result<Squirrel, RepositoryError> {
        let store = self.lock()?;
        let mut squirrels = store.load_all()?;

        let Some(id) = self.id_policy.next_id(&squirrels) else {
            let last = squirrels.iter().map(|s| s.id).max().unwrap_or(0);
            error!(last = last, policy = %self.id_policy, "id space exhausted");
            return Err(RepositoryError::IdSpaceExhausted { last });
        };
        if squirrels.iter().any(|s| s.id == id) {
            warn!(id = id, policy = %self.id_policy, "assigned id collides with an existing record");
        }

        let squirrel = Squirrel {
            id,
            name: name.into(),
            size: size.into(),
        };
        squirrels.push(squirrel.clone());
        store.save_all(&squirrels)?;

        debug!(id = id, "squirrel created");
        Ok(squirrel)
    }

    /// All records in insertion order.
    pub fn get_all(&self) -> Result<Vec<Squirrel>, RepositoryError> {
        Ok(self.lock()?.load_all()?)
    }

    /// The first record with `id`, if any.
    pub fn get_by_id(&self, id: u64) -> Result<Option<Squirrel>, RepositoryError> {
        let found = self.lock()?.load_all()?.into_iter().find(|s| s.id == id);
        if found.is_none() {
            debug!(id = id, "squirrel not found");
        }
        Ok(found)
    }

    /// Replace `name` and `size` of the record with `id`.
    ///
    /// Returns `false` without touching the file when no record matches.
    pub fn update_by_id(
        &self,
        id: u64,
        name: impl Into<String>,
        size: impl Into<String>,
    ) -> Result<bool, RepositoryError> {
        let store = self.lock()?;
        let mut squirrels = store.load_all()?;

        let Some(squirrel) = squirrels.iter_mut().find(|s| s.id == id) else {
            debug!(id = id, "update target not found");
            return Ok(false);
        };
        squirrel.name = name.into();
        squirrel.size = size.into();

        store.save_all(&squirrels)?;
        debug!(id = id, "squirrel updated");
        Ok(true)
    }

    /// Remove the first record with `id`. Remaining ids are not renumbered.
    pub fn delete_by_id(&self, id: u64) -> Result<bool, RepositoryError> {
        let store = self.lock()?;
        let mut squirrels = store.load_all()?;

        let Some(index) = squirrels.iter().position(|s| s.id == id) else {
            debug!(id = id, "delete target not found");
            return Ok(false);
        };
        squirrels.remove(index);

        store.save_all(&squirrels)?;
        debug!(id = id, "squirrel deleted");
        Ok(true)
    }

    /// Number of stored records.
    pub fn len(&self) -> Result<usize, RepositoryError> {
        Ok(self.lock()?.len()?)
    }

    pub fn is_empty(&self) -> Result<bool, RepositoryError> {
        Ok(self.len()? == 0)
    }

    fn lock(&self) -> Result<MutexGuard<'_, ObjectStore<Squirrel>>, RepositoryError> {
        self.store.lock().map_err(|_| {
            error!("squirrel repository lock poisoned");
            RepositoryError::Poisoned
        })
    }
}
