//! Storage initialization
//!
//! Handles first-run setup: the store directory and both sheets with their
//! header rows.

use std::path::PathBuf;

use crate::config::{validate_store_id, Settings, VetSplitPaths};
use crate::error::{VetSplitError, VetSplitResult};

use super::Storage;

/// Create the configured store if it does not exist yet
///
/// Safe to run repeatedly; existing sheets are left untouched. Returns the
/// store directory.
pub fn initialize_store(paths: &VetSplitPaths, settings: &Settings) -> VetSplitResult<PathBuf> {
    validate_store_id(&settings.store_id)?;
    paths.ensure_directories()?;

    let store_dir = paths.store_dir(&settings.store_id);
    std::fs::create_dir_all(&store_dir)
        .map_err(|e| VetSplitError::Io(format!("Failed to create store directory: {}", e)))?;

    let storage = Storage::open(paths, settings)?;
    storage.records.initialize()?;

    tracing::info!(store = %store_dir.display(), "store initialized");
    Ok(store_dir)
}

/// Check if the configured store still needs initialization
pub fn needs_initialization(paths: &VetSplitPaths, settings: &Settings) -> bool {
    !paths.store_dir(&settings.store_id).is_dir()
}
