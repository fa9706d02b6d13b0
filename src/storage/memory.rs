//! In-memory workbook
//!
//! Sheets live behind a shared handle so the connector, every workbook
//! session it opens, and the code that created it all see the same data. The
//! connector can be switched offline to simulate an unreachable store.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{VetSplitError, VetSplitResult};

use super::workbook::{Connector, Workbook};

#[derive(Debug)]
struct MemoryState {
    sheets: BTreeMap<String, Vec<Vec<String>>>,
    online: bool,
    connections: usize,
}

impl Default for MemoryState {
    fn default() -> Self {
        Self {
            sheets: BTreeMap::new(),
            online: true,
            connections: 0,
        }
    }
}

fn lock(state: &Mutex<MemoryState>) -> VetSplitResult<MutexGuard<'_, MemoryState>> {
    state
        .lock()
        .map_err(|e| VetSplitError::Storage(format!("Failed to acquire store lock: {}", e)))
}

/// Connector for a shared in-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryConnector {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryConnector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the store going down or coming back
    pub fn set_online(&self, online: bool) {
        if let Ok(mut state) = lock(&self.state) {
            state.online = online;
        }
    }

    /// Number of sessions opened so far
    pub fn connection_count(&self) -> usize {
        lock(&self.state).map(|s| s.connections).unwrap_or(0)
    }

    /// Snapshot of a sheet's physical rows
    pub fn sheet_rows(&self, sheet: &str) -> Option<Vec<Vec<String>>> {
        lock(&self.state).ok()?.sheets.get(sheet).cloned()
    }

    /// Replace a sheet's rows wholesale, bypassing any validation
    pub fn put_sheet(&self, sheet: &str, rows: Vec<Vec<String>>) {
        if let Ok(mut state) = lock(&self.state) {
            state.sheets.insert(sheet.to_string(), rows);
        }
    }
}

impl Connector for MemoryConnector {
    fn connect(&self) -> VetSplitResult<Box<dyn Workbook>> {
        let mut state = lock(&self.state)?;
        if !state.online {
            return Err(VetSplitError::StoreUnavailable("memory store offline".into()));
        }
        state.connections += 1;
        Ok(Box::new(MemoryWorkbook {
            state: Arc::clone(&self.state),
        }))
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

/// A session on a shared in-memory store
#[derive(Debug)]
pub struct MemoryWorkbook {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryWorkbook {
    fn online(&self) -> VetSplitResult<MutexGuard<'_, MemoryState>> {
        let state = lock(&self.state)?;
        if !state.online {
            return Err(VetSplitError::StoreUnavailable("memory store offline".into()));
        }
        Ok(state)
    }
}

impl Workbook for MemoryWorkbook {
    fn read_rows(&self, sheet: &str) -> VetSplitResult<Vec<Vec<String>>> {
        self.online()?
            .sheets
            .get(sheet)
            .cloned()
            .ok_or_else(|| VetSplitError::SheetNotFound(sheet.to_string()))
    }

    fn append_row(&mut self, sheet: &str, row: &[String]) -> VetSplitResult<()> {
        let mut state = self.online()?;
        let rows = state
            .sheets
            .get_mut(sheet)
            .ok_or_else(|| VetSplitError::SheetNotFound(sheet.to_string()))?;
        rows.push(row.to_vec());
        Ok(())
    }

    fn delete_row(&mut self, sheet: &str, row_number: usize) -> VetSplitResult<()> {
        let mut state = self.online()?;
        let rows = state
            .sheets
            .get_mut(sheet)
            .ok_or_else(|| VetSplitError::SheetNotFound(sheet.to_string()))?;
        if row_number == 0 || row_number > rows.len() {
            return Err(VetSplitError::Storage(format!(
                "Row {} does not exist in sheet '{}' ({} rows)",
                row_number,
                sheet,
                rows.len()
            )));
        }
        rows.remove(row_number - 1);
        Ok(())
    }

    fn create_sheet(&mut self, sheet: &str, header: &[String]) -> VetSplitResult<()> {
        let mut state = self.online()?;
        state
            .sheets
            .entry(sheet.to_string())
            .or_insert_with(|| vec![header.to_vec()]);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sessions_share_state() {
        let connector = MemoryConnector::new();
        let mut a = connector.connect().unwrap();
        let b = connector.connect().unwrap();

        a.create_sheet("expenses", &["id".to_string()]).unwrap();
        a.append_row("expenses", &["7".to_string()]).unwrap();

        assert_eq!(b.read_rows("expenses").unwrap().len(), 2);
        assert_eq!(connector.connection_count(), 2);
        assert_eq!(connector.sheet_rows("expenses").unwrap()[1], vec!["7"]);
    }

    #[test]
    fn test_offline_store() {
        let connector = MemoryConnector::new();
        let wb = connector.connect().unwrap();
        connector.set_online(false);

        assert!(matches!(
            connector.connect(),
            Err(VetSplitError::StoreUnavailable(_))
        ));
        assert!(matches!(
            wb.read_rows("expenses"),
            Err(VetSplitError::StoreUnavailable(_))
        ));
    }
}
