//! vetsplit - Shared veterinary expense ledger
//!
//! One household member (the primary payer) pays the vet clinic; the others
//! pay their equal share back over time. This library keeps both sides of
//! that in a sheet-based record store and reconciles who still owes what.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, members, expenses, payments)
//! - `storage`: Workbook-backed record store and session handling
//! - `ledger`: In-memory snapshot of both collections
//! - `services`: Recording, deleting and reconciliation
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use vetsplit::config::{Settings, VetSplitPaths};
//! use vetsplit::services::ReconciliationService;
//! use vetsplit::storage::Storage;
//!
//! let paths = VetSplitPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::open(&paths, &settings)?;
//! let summary = ReconciliationService::new(&storage).summary();
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod ledger;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{VetSplitError, VetSplitResult};
