//! User settings for vetsplit
//!
//! Holds the member roster, the backing store identifier and display
//! preferences. Every field has a default so a partial or older config file
//! still loads.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::{validate_store_id, VetSplitPaths};
use crate::error::VetSplitError;
use crate::models::{Member, MemberRoster};

/// User settings for vetsplit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Unique identifier of the backing store
    #[serde(default = "default_store_id")]
    pub store_id: String,

    /// Everyone who shares the expense, in display order
    #[serde(default = "default_members")]
    pub members: Vec<String>,

    /// The member who pays the clinic directly
    #[serde(default = "default_primary_payer")]
    pub primary_payer: String,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// How many recent expenses/payments the status view shows
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_store_id() -> String {
    "default".to_string()
}

fn default_members() -> Vec<String> {
    vec!["Mom".into(), "Seunghwa".into(), "Seungjin".into()]
}

fn default_primary_payer() -> String {
    "Mom".to_string()
}

fn default_currency() -> String {
    "₩".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_recent_limit() -> usize {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            store_id: default_store_id(),
            members: default_members(),
            primary_payer: default_primary_payer(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            recent_limit: default_recent_limit(),
        }
    }
}

impl Settings {
    /// Build the validated member roster from the configured names
    pub fn roster(&self) -> Result<MemberRoster, VetSplitError> {
        let members = self.members.iter().map(Member::new).collect();
        MemberRoster::new(members, Member::new(&self.primary_payer))
            .map_err(|e| VetSplitError::Config(e.to_string()))
    }

    /// Check the fields that would otherwise fail later, at print or open time
    pub fn validate(&self) -> Result<(), VetSplitError> {
        validate_store_id(&self.store_id)?;
        if !is_valid_date_format(&self.date_format) {
            return Err(VetSplitError::Config(format!(
                "Invalid date format '{}'",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &VetSplitPaths) -> Result<Self, VetSplitError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                VetSplitError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                VetSplitError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &VetSplitPaths) -> Result<(), VetSplitError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            VetSplitError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| VetSplitError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

/// Whether chrono can render dates with this strftime format
pub fn is_valid_date_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}
