//! Common test utilities and fixtures for integration tests.
//!
//! TestContext materializes a small word bank in a temp directory, loads
//! it through the real loader, and exposes the real router over it. No
//! external services are involved, so these tests run anywhere.

pub mod fixtures;

use std::path::Path;

use axum::Router;
use tempfile::TempDir;

use vocab_quiz_backend::loader;
use vocab_quiz_backend::{build_router, AppState};

/// Test context owning the backing data directory.
pub struct TestContext {
    data_dir: TempDir,
    state: AppState,
}

impl TestContext {
    /// Create a context over the standard three-level fixture bank.
    pub fn new() -> Self {
        let data_dir = TempDir::new().expect("create temp data dir");
        fixtures::write_standard_bank(data_dir.path());
        Self::over(data_dir)
    }

    /// Create a context over a data directory prepared by the caller.
    pub fn over(data_dir: TempDir) -> Self {
        let catalog =
            loader::load_catalog(data_dir.path()).expect("load fixture word bank");
        let state = AppState::new(catalog, data_dir.path().to_path_buf());
        Self { data_dir, state }
    }

    /// The router under test.
    pub fn router(&self) -> Router {
        build_router(self.state.clone())
    }

    /// Path of the backing data directory, for tests that rewrite files
    /// before hitting /api/reload.
    pub fn data_dir(&self) -> &Path {
        self.data_dir.path()
    }
}
