//! Flat-file object store implementation.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;

use crate::logging::{debug, error, info, trace};

use super::error::StoreError;

/// A persistent, ordered collection of values stored in a single file.
///
/// `ObjectStore` does not interpret its contents: whatever sequence of `T`
/// was last saved is what the next load returns. The file holds exactly one
/// serialized collection (a JSON array); a zero-length file is an empty
/// collection.
///
/// # Example
///
/// ```ignore
/// use squirrel_server::ObjectStore;
///
/// let store: ObjectStore<String> = ObjectStore::open("strings.db")?;
/// store.save_all(&["hello".to_string(), "world".to_string()])?;
/// store.append_one("again".to_string())?;
/// assert_eq!(store.load_all()?.len(), 3);
/// ```
///
/// # Persistence
///
/// There is no incremental format. Every mutation, including the append
/// helpers, reads the full collection and rewrites the full file. The new
/// content is written to a temporary file in the same directory and renamed
/// over the target, so readers observe either the old or the new collection.
///
/// There is no locking: two callers doing read-modify-write cycles on the
/// same path can overwrite each other's changes.
#[derive(Debug)]
pub struct ObjectStore<T> {
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for ObjectStore<T> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> ObjectStore<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Open the store at `path`, creating an empty collection file if none exists.
    ///
    /// An existing file is left untouched, whatever its content.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening object store");

        if let Some(parent) = non_empty_parent(path) {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }

        let existed = path.exists();
        OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .map_err(|e| StoreError::io(path, e))?;

        if existed {
            trace!(path = %path.display(), "object store file already present");
        } else {
            info!(path = %path.display(), "created empty object store");
        }

        Ok(Self {
            path: path.to_path_buf(),
            _marker: PhantomData,
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the whole collection.
    pub fn load_all(&self) -> Result<Vec<T>, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                trace!(path = %self.path.display(), "store file missing, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        let values: Vec<T> = serde_json::from_slice(&bytes).map_err(|e| {
            error!(path = %self.path.display(), error = %e, "store content is not a collection");
            StoreError::Corrupt {
                path: self.path.clone(),
                source: e,
            }
        })?;

        trace!(path = %self.path.display(), count = values.len(), "loaded collection");
        Ok(values)
    }

    /// Replace the whole collection with `values`.
    pub fn save_all(&self, values: &[T]) -> Result<(), StoreError> {
        let encoded = serde_json::to_vec(values).map_err(StoreError::Encode)?;

        let dir = non_empty_parent(&self.path).unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| StoreError::io(dir, e))?;
        tmp.write_all(&encoded)
            .map_err(|e| StoreError::io(tmp.path(), e))?;
        tmp.as_file()
            .sync_all()
            .map_err(|e| StoreError::io(tmp.path(), e))?;
        tmp.persist(&self.path)
            .map_err(|e| StoreError::io(&self.path, e.error))?;

        debug!(path = %self.path.display(), count = values.len(), "saved collection");
        Ok(())
    }

    /// Append a single value: load, push, save.
    pub fn append_one(&self, value: T) -> Result<(), StoreError> {
        let mut values = self.load_all()?;
        values.push(value);
        self.save_all(&values)
    }

    /// Append several values: load, extend, save.
    pub fn append_many<I>(&self, values: I) -> Result<(), StoreError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut current = self.load_all()?;
        current.extend(values);
        self.save_all(&current)
    }

    /// Number of values currently stored.
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.load_all()?.len())
    }

    /// Whether the stored collection is empty.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

fn non_empty_parent(path: &Path) -> Option<&Path> {
    path.parent().filter(|p| !p.as_os_str().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_open_creates_missing_file() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("test_db.db");

        let store: ObjectStore<String> = ObjectStore::open(&path)?;

        assert!(path.is_file());
        assert_eq!(store.load_all()?, Vec::<String>::new());
        Ok(())
    }

    #[test]
    fn test_open_creates_parent_directories() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("nested").join("deeper").join("db.json");

        let store: ObjectStore<String> = ObjectStore::open(&path)?;

        assert!(path.is_file());
        assert!(store.is_empty()?);
        Ok(())
    }

    #[test]
    fn test_open_existing_file_keeps_content() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("test_db.db");

        let first: ObjectStore<String> = ObjectStore::open(&path)?;
        first.append_one("hello".to_string())?;
        assert_eq!(first.load_all()?, strings(&["hello"]));

        let second: ObjectStore<String> = ObjectStore::open(&path)?;
        assert!(path.is_file());
        assert_eq!(second.load_all()?, strings(&["hello"]));
        Ok(())
    }

    #[test]
    fn test_load_from_empty_file() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("empty.db");
        fs::write(&path, b"")?;

        let store: ObjectStore<String> = ObjectStore::open(&path)?;
        assert!(store.load_all()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_load_whitespace_only_file_is_empty() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("blank.db");
        fs::write(&path, b" \n\t\n")?;

        let store: ObjectStore<String> = ObjectStore::open(&path)?;
        assert!(store.load_all()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_load_multiple_strings() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let store: ObjectStore<String> = ObjectStore::open(dir.path().join("db"))?;

        let values = strings(&["hello", "my", "name", "is", "Justin"]);
        store.save_all(&values)?;

        assert_eq!(store.load_all()?, values);
        Ok(())
    }

    #[test]
    fn test_load_integers_written_externally() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("ints.db");
        let store: ObjectStore<i64> = ObjectStore::open(&path)?;

        fs::write(&path, serde_json::to_vec(&[0, 1, 2, 3, 4, 5])?)?;

        assert_eq!(store.load_all()?, vec![0, 1, 2, 3, 4, 5]);
        Ok(())
    }

    #[test]
    fn test_heterogeneous_values() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let store: ObjectStore<serde_json::Value> = ObjectStore::open(dir.path().join("mixed"))?;

        let values = vec![
            serde_json::json!("hello"),
            serde_json::json!(42),
            serde_json::json!({"id": 1, "name": "Mike", "size": "large"}),
        ];
        store.save_all(&values)?;

        assert_eq!(store.load_all()?, values);
        Ok(())
    }

    #[test]
    fn test_append_one_to_existing_collection() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let store: ObjectStore<String> = ObjectStore::open(dir.path().join("db"))?;

        let values = strings(&["hello", "world", "I'm", "here"]);
        store.save_all(&values)?;
        store.append_one("Hi".to_string())?;

        assert_eq!(store.load_all()?, strings(&["hello", "world", "I'm", "here", "Hi"]));
        Ok(())
    }

    #[test]
    fn test_append_many_preserves_order() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let store: ObjectStore<String> = ObjectStore::open(dir.path().join("db"))?;

        store.append_one("a".to_string())?;
        store.append_many(strings(&["b", "c"]))?;

        assert_eq!(store.load_all()?, strings(&["a", "b", "c"]));
        assert_eq!(store.len()?, 3);
        Ok(())
    }

    #[test]
    fn test_save_all_overwrites_previous_collection() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let store: ObjectStore<String> = ObjectStore::open(dir.path().join("db"))?;

        store.save_all(&strings(&["hello", "world", "I'm", "here"]))?;
        let replacement = strings(&["hi", "my", "name", "is", "Justin"]);
        store.save_all(&replacement)?;

        assert_eq!(store.load_all()?, replacement);
        Ok(())
    }

    #[test]
    fn test_repeated_loads_are_equal() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let store: ObjectStore<String> = ObjectStore::open(dir.path().join("db"))?;
        store.save_all(&strings(&["x", "y"]))?;

        assert_eq!(store.load_all()?, store.load_all()?);
        Ok(())
    }

    #[test]
    fn test_corrupt_file_is_reported() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("corrupt.db");
        fs::write(&path, b"\x80\x04not a collection")?;

        let store: ObjectStore<String> = ObjectStore::open(&path)?;
        let err = store.load_all().err();

        assert!(matches!(err, Some(ref e) if e.is_corrupt()), "got {:?}", err);
        Ok(())
    }

    #[test]
    fn test_save_leaves_no_temporary_files() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let store: ObjectStore<String> = ObjectStore::open(dir.path().join("db"))?;

        store.save_all(&strings(&["one"]))?;
        store.append_one("two".to_string())?;

        let entries = fs::read_dir(dir.path())?.count();
        assert_eq!(entries, 1);
        Ok(())
    }
}
