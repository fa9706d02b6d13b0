//! Path management for vetsplit
//!
//! ## Path Resolution Order
//!
//! 1. `VETSPLIT_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/vetsplit` or `~/.config/vetsplit`
//! 3. Windows: `%APPDATA%\vetsplit`

use std::path::PathBuf;

use crate::error::VetSplitError;

/// Manages all paths used by vetsplit
#[derive(Debug, Clone)]
pub struct VetSplitPaths {
    /// Base directory for all vetsplit data
    base_dir: PathBuf,
}

impl VetSplitPaths {
    /// Create a new VetSplitPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, VetSplitError> {
        let base_dir = if let Ok(custom) = std::env::var("VETSPLIT_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create VetSplitPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Directory holding one workbook directory per store id
    pub fn stores_dir(&self) -> PathBuf {
        self.base_dir.join("stores")
    }

    /// Workbook directory for a given store id
    pub fn store_dir(&self, store_id: &str) -> PathBuf {
        self.stores_dir().join(store_id)
    }

    /// Ensure the base and stores directories exist
    pub fn ensure_directories(&self) -> Result<(), VetSplitError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| VetSplitError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.stores_dir())
            .map_err(|e| VetSplitError::Io(format!("Failed to create stores directory: {}", e)))?;

        Ok(())
    }

    /// Check if vetsplit has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Reject store ids that would not name a single directory under `stores/`
pub fn validate_store_id(store_id: &str) -> Result<(), VetSplitError> {
    let escapes = store_id.trim().is_empty()
        || store_id == "."
        || store_id == ".."
        || store_id.contains(['/', '\\', ':', '\0']);
    if escapes {
        return Err(VetSplitError::Config(format!(
            "Invalid store id '{}': use a plain name without path separators",
            store_id
        )));
    }
    Ok(())
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, VetSplitError> {
    if let Ok(config_home) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(config_home).join("vetsplit"));
    }
    let home = std::env::var("HOME")
        .map_err(|_| VetSplitError::Config("Could not determine HOME directory".into()))?;
    Ok(PathBuf::from(home).join(".config").join("vetsplit"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, VetSplitError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| VetSplitError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("vetsplit"))
}
