//! Lazily established store session
//!
//! The workbook connection is opened on first use and reused by every later
//! call until `invalidate` drops it. A failed connection attempt is not
//! cached; the next call tries again.

use std::sync::Mutex;

use crate::error::{VetSplitError, VetSplitResult};

use super::workbook::{Connector, Workbook};

/// Owns the connector and the cached workbook session
pub struct StoreSession {
    connector: Box<dyn Connector>,
    workbook: Mutex<Option<Box<dyn Workbook>>>,
}

impl StoreSession {
    pub fn new(connector: Box<dyn Connector>) -> Self {
        Self {
            connector,
            workbook: Mutex::new(None),
        }
    }

    /// Run an operation against the workbook, connecting first if needed
    pub fn with_workbook<T, F>(&self, op: F) -> VetSplitResult<T>
    where
        F: FnOnce(&mut dyn Workbook) -> VetSplitResult<T>,
    {
        let mut guard = self.workbook.lock().map_err(|e| {
            VetSplitError::Storage(format!("Failed to acquire session lock: {}", e))
        })?;

        let workbook = match guard.take() {
            Some(workbook) => workbook,
            None => {
                tracing::debug!(store = %self.connector.describe(), "establishing store session");
                self.connector.connect()?
            }
        };

        let workbook = guard.insert(workbook);
        op(&mut **workbook)
    }

    /// Drop the cached session; the next operation reconnects
    pub fn invalidate(&self) {
        let mut guard = match self.workbook.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if guard.take().is_some() {
            tracing::debug!(store = %self.connector.describe(), "store session invalidated");
        }
    }

    /// Whether a session is currently cached
    pub fn is_established(&self) -> bool {
        self.workbook
            .lock()
            .map(|guard| guard.is_some())
            .unwrap_or(false)
    }

    pub fn describe(&self) -> String {
        self.connector.describe()
    }
}
