//! Application state management.

use std::sync::Arc;

use crate::squirrel::{RepositoryError, SquirrelRepository};

use super::config::Config;

/// Shared application state.
///
/// The repository is constructed once at startup and handed to every
/// handler; there is no process-global store.
#[derive(Clone)]
pub struct AppState {
    repository: Arc<SquirrelRepository>,
}

impl AppState {
    /// Create a new AppState from configuration.
    pub fn from_config(config: &Config) -> Result<Self, StateError> {
        let repository = SquirrelRepository::open(&config.store.path, config.store.id_policy)
            .map_err(|e| StateError::OpenRepository {
                path: config.store.path.clone(),
                source: e,
            })?;
        Ok(Self::new(repository))
    }

    /// Wrap an already opened repository.
    pub fn new(repository: SquirrelRepository) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub fn repository(&self) -> &SquirrelRepository {
        &self.repository
    }
}

/// Errors that can occur when setting up application state.
#[derive(Debug)]
pub enum StateError {
    /// Failed to open or create the squirrel store.
    OpenRepository {
        path: String,
        source: RepositoryError,
    },
}

impl std::fmt::Display for StateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StateError::OpenRepository { path, source } => {
                write!(f, "Failed to open squirrel store at '{}': {}", path, source)
            }
        }
    }
}

impl std::error::Error for StateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StateError::OpenRepository { source, .. } => Some(source),
        }
    }
}
