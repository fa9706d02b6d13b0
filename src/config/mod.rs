//! Configuration module for vetsplit
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence (roster, store id, display preferences)

pub mod paths;
pub mod settings;

pub use paths::{validate_store_id, VetSplitPaths};
pub use settings::{is_valid_date_format, Settings};
