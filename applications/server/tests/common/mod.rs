//! Common test utilities and fixtures
#![allow(dead_code)]

use axum::Router;
use groove_server::{create_router, state::AppState};
use groove_storage::LocalStorageContext;
use rand::{rngs::StdRng, SeedableRng};
use std::sync::Arc;
use tempfile::TempDir;

/// Seed used for every seeded test database
pub const TEST_RNG_SEED: u64 = 2024;

/// Application state backed by a migrated SQLite file that lives as long as
/// this value
pub struct TestApp {
    pub state: AppState,
    _temp_dir: TempDir,
}

impl TestApp {
    /// Empty library
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());

        let pool = groove_storage::create_pool(&db_url)
            .await
            .expect("Failed to create pool");
        groove_storage::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        let db = Arc::new(LocalStorageContext::new(pool));

        Self {
            state: AppState::new(db),
            _temp_dir: temp_dir,
        }
    }

    /// Library loaded with the fixture dataset
    pub async fn seeded() -> Self {
        let app = Self::new().await;
        let mut rng = StdRng::seed_from_u64(TEST_RNG_SEED);
        groove_storage::seed::run(app.state.db.pool(), &mut rng)
            .await
            .expect("Failed to seed database");
        app
    }

    pub fn db(&self) -> &LocalStorageContext {
        &self.state.db
    }

    pub fn router(&self) -> Router {
        create_router(self.state.clone())
    }
}
