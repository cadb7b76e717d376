//! Common test utilities and fixtures.

#![cfg(feature = "server")]
#![allow(dead_code)]

use std::path::PathBuf;

use axum_test::TestServer;
use serde_json::{Value, json};
use tempfile::TempDir;
use squirrel_server::server::{AppState, Config, LoggingConfig, ServerConfig, StoreConfig, router};
use squirrel_server::{IdPolicy, SquirrelForm, SquirrelRepository};

/// The three records most scenarios start from.
pub const SEED: [(&str, &str); 3] = [("Mike", "large"), ("Joe", "medium"), ("Frank", "small")];

/// Test application wrapper that manages a temporary store file.
pub struct TestApp {
    pub server: TestServer,
    pub db_path: PathBuf,
    id_policy: IdPolicy,
    _temp_dir: TempDir, // Keep alive for test duration
}

impl TestApp {
    /// Create a new test application with a fresh, empty store.
    pub fn new() -> anyhow::Result<Self> {
        Self::with_policy(IdPolicy::default())
    }

    /// Create a test application whose repository uses `id_policy`.
    pub fn with_policy(id_policy: IdPolicy) -> anyhow::Result<Self> {
        let temp_dir = TempDir::new()?;
        let db_path = temp_dir.path().join("squirrel_db.json");
        let config = Config {
            server: ServerConfig {
                bind: "127.0.0.1".into(),
                port: 0,
            },
            store: StoreConfig {
                path: db_path.to_string_lossy().into(),
                id_policy,
            },
            logging: LoggingConfig::default(),
        };
        let state = AppState::from_config(&config)?;
        let server = TestServer::new(router(state))?;
        Ok(Self {
            server,
            db_path,
            id_policy,
            _temp_dir: temp_dir,
        })
    }

    /// Add records through a separate repository on the same file.
    pub fn seed(&self, squirrels: &[(&str, &str)]) -> anyhow::Result<()> {
        let repo = SquirrelRepository::open(&self.db_path, self.id_policy)?;
        for (name, size) in squirrels {
            repo.create(*name, *size)?;
        }
        Ok(())
    }

    /// Add the standard Mike / Joe / Frank records.
    pub fn seed_three(&self) -> anyhow::Result<()> {
        self.seed(&SEED)
    }

    /// Fetch `/squirrels` and decode the body.
    pub async fn list(&self) -> Value {
        let response = self.server.get("/squirrels").await;
        response.assert_status_ok();
        response.json()
    }
}

/// Expected JSON for one record.
pub fn squirrel_json(id: u64, name: &str, size: &str) -> Value {
    json!({ "id": id, "name": name, "size": size })
}

/// Form body for POST/PUT requests.
pub fn form(name: &str, size: &str) -> SquirrelForm {
    SquirrelForm::new(name, size)
}
