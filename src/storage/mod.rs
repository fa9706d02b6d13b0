//! Storage layer for vetsplit
//!
//! The backing store is a workbook of sheets reached through a `Connector`.
//! `RecordStore` turns it into the "expenses" and "payments" collections;
//! `Storage` bundles that with the id generator and member roster for the
//! service layer.

pub mod csv_workbook;
pub mod init;
pub mod memory;
pub mod records;
pub mod session;
pub mod workbook;

pub use csv_workbook::{CsvConnector, CsvWorkbook};
pub use init::initialize_store;
pub use memory::{MemoryConnector, MemoryWorkbook};
pub use records::{Collection, RawRecord, RecordStore};
pub use session::StoreSession;
pub use workbook::{Connector, Workbook};

use crate::config::{validate_store_id, Settings, VetSplitPaths};
use crate::error::VetSplitResult;
use crate::ledger::Ledger;
use crate::models::{IdGenerator, MemberRoster, RecordId};

/// Main storage coordinator for a session
pub struct Storage {
    pub records: RecordStore,
    ids: IdGenerator,
    roster: MemberRoster,
}

impl Storage {
    /// Open the CSV store named by the settings' store id
    ///
    /// The store itself is not touched until the first read or write.
    pub fn open(paths: &VetSplitPaths, settings: &Settings) -> VetSplitResult<Self> {
        validate_store_id(&settings.store_id)?;
        paths.ensure_directories()?;
        let roster = settings.roster()?;
        let connector = CsvConnector::new(paths.store_dir(&settings.store_id));
        Ok(Self::with_connector(connector, roster))
    }

    /// Use any backing store
    pub fn with_connector(connector: impl Connector + 'static, roster: MemberRoster) -> Self {
        Self {
            records: RecordStore::new(Box::new(connector)),
            ids: IdGenerator::new(),
            roster,
        }
    }

    pub fn roster(&self) -> &MemberRoster {
        &self.roster
    }

    /// A fresh record id, unique within this process
    pub fn next_id(&self) -> RecordId {
        self.ids.next_id()
    }

    /// Read a fresh ledger snapshot from the store
    pub fn load_ledger(&self) -> Ledger {
        Ledger::load(&self.records)
    }

    /// Drop the store session and reload from a new one
    pub fn refresh(&self) -> Ledger {
        tracing::info!(store = %self.records.describe(), "refreshing store session");
        self.records.invalidate();
        self.load_ledger()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Member;
    use tempfile::TempDir;

    fn roster() -> MemberRoster {
        MemberRoster::new(
            vec!["Mom".into(), "Seunghwa".into(), "Seungjin".into()],
            Member::new("Mom"),
        )
        .unwrap()
    }

    #[test]
    fn test_open_does_not_create_store() {
        let temp_dir = TempDir::new().unwrap();
        let paths = VetSplitPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(&paths, &Settings::default()).unwrap();

        assert!(paths.stores_dir().exists());
        assert!(!paths.store_dir("default").exists());
        assert!(storage.load_ledger().is_empty());
    }

    #[test]
    fn test_refresh_reconnects() {
        let connector = MemoryConnector::new();
        let storage = Storage::with_connector(connector.clone(), roster());

        storage.load_ledger();
        storage.load_ledger();
        assert_eq!(connector.connection_count(), 1);

        storage.refresh();
        assert_eq!(connector.connection_count(), 2);
    }

    #[test]
    fn test_ids_increase() {
        let storage = Storage::with_connector(MemoryConnector::new(), roster());
        let a = storage.next_id();
        let b = storage.next_id();
        assert!(b > a);
    }
}
