//! Record store adapter
//!
//! Presents the workbook as two append-only record collections. Callers
//! address records by zero-based logical position; the header row and the
//! 1-based physical numbering of the sheet never leak out of this module.
//!
//! Loads are forgiving: if the store cannot be reached, the sheet is missing
//! or the data is malformed, `load_collection` logs the failure and returns
//! an empty collection. `try_load_collection` keeps the error.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{VetSplitError, VetSplitResult};

use super::session::StoreSession;
use super::workbook::{Connector, Workbook};

/// Physical rows above the first record
const HEADER_ROWS: usize = 1;

/// The two record collections of a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Expenses,
    Payments,
}

impl Collection {
    pub const ALL: [Collection; 2] = [Collection::Expenses, Collection::Payments];

    /// Sheet name in the workbook
    pub fn sheet_name(&self) -> &'static str {
        match self {
            Self::Expenses => "expenses",
            Self::Payments => "payments",
        }
    }

    /// Canonical column order
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Self::Expenses => &["id", "date", "amount", "memo"],
            Self::Payments => &["id", "date", "payer", "amount"],
        }
    }

    fn header(&self) -> Vec<String> {
        self.columns().iter().map(|c| c.to_string()).collect()
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sheet_name())
    }
}

/// One record as stored: column name to cell text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    fields: BTreeMap<String, String>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field setter
    pub fn with(mut self, column: &str, value: impl Into<String>) -> Self {
        self.insert(column, value);
        self
    }

    pub fn insert(&mut self, column: &str, value: impl Into<String>) {
        self.fields.insert(column.to_string(), value.into());
    }

    /// Cell text for a column, if the sheet has that column
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Pair a data row with the header; missing trailing cells read as empty
    fn from_row(header: &[String], row: &[String]) -> Self {
        let fields = header
            .iter()
            .enumerate()
            .map(|(i, column)| {
                let value = row.get(i).cloned().unwrap_or_default();
                (column.clone(), value)
            })
            .collect();
        Self { fields }
    }

    /// Lay the record out in the given column order
    fn to_row(&self, header: &[String]) -> Vec<String> {
        header
            .iter()
            .map(|column| self.get(column).unwrap_or_default().to_string())
            .collect()
    }
}

/// Append-only record collections on top of a workbook session
pub struct RecordStore {
    session: StoreSession,
}

impl RecordStore {
    pub fn new(connector: Box<dyn Connector>) -> Self {
        Self {
            session: StoreSession::new(connector),
        }
    }

    /// All records of a collection in storage order, or the failure
    pub fn try_load_collection(&self, collection: Collection) -> VetSplitResult<Vec<RawRecord>> {
        self.session.with_workbook(|wb| {
            let rows = wb.read_rows(collection.sheet_name())?;
            records_from_rows(collection, rows)
        })
    }

    /// All records of a collection in storage order; empty on any failure
    pub fn load_collection(&self, collection: Collection) -> Vec<RawRecord> {
        match self.try_load_collection(collection) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(
                    store = %self.session.describe(),
                    %collection,
                    error = %e,
                    "failed to load collection, treating it as empty"
                );
                Vec::new()
            }
        }
    }

    /// Append a record at the end of a collection
    ///
    /// A missing sheet (or one without a header row) is created first. The
    /// record is laid out in the sheet's own column order.
    pub fn append(&self, collection: Collection, record: &RawRecord) -> VetSplitResult<()> {
        self.session.with_workbook(|wb| {
            let header = ensure_header(wb, collection)?;
            wb.append_row(collection.sheet_name(), &record.to_row(&header))
        })
    }

    /// Remove the record at a zero-based logical position
    pub fn delete_at(&self, collection: Collection, position: usize) -> VetSplitResult<()> {
        self.session.with_workbook(|wb| {
            let rows = wb.read_rows(collection.sheet_name())?;
            let len = rows.len().saturating_sub(HEADER_ROWS);
            if position >= len {
                return Err(VetSplitError::PositionOutOfRange {
                    collection: collection.sheet_name(),
                    position,
                    len,
                });
            }
            wb.delete_row(collection.sheet_name(), position + HEADER_ROWS + 1)
        })
    }

    /// Create both collections with their header rows if they are missing
    pub fn initialize(&self) -> VetSplitResult<()> {
        self.session.with_workbook(|wb| {
            for collection in Collection::ALL {
                ensure_header(wb, collection)?;
            }
            Ok(())
        })
    }

    /// Drop the cached store session; the next call reconnects
    pub fn invalidate(&self) {
        self.session.invalidate();
    }

    pub fn describe(&self) -> String {
        self.session.describe()
    }
}

/// Return the sheet's header, creating the sheet or header row if absent
fn ensure_header(wb: &mut dyn Workbook, collection: Collection) -> VetSplitResult<Vec<String>> {
    let sheet = collection.sheet_name();
    match wb.read_rows(sheet) {
        Ok(rows) => match rows.into_iter().next() {
            Some(header) => Ok(header.iter().map(|c| c.trim().to_string()).collect()),
            None => {
                wb.append_row(sheet, &collection.header())?;
                Ok(collection.header())
            }
        },
        Err(VetSplitError::SheetNotFound(_)) => {
            wb.create_sheet(sheet, &collection.header())?;
            Ok(collection.header())
        }
        Err(e) => Err(e),
    }
}

fn records_from_rows(
    collection: Collection,
    rows: Vec<Vec<String>>,
) -> VetSplitResult<Vec<RawRecord>> {
    let mut rows = rows.into_iter();
    let header: Vec<String> = match rows.next() {
        Some(header) => header.iter().map(|c| c.trim().to_string()).collect(),
        None => return Ok(Vec::new()),
    };

    rows.enumerate()
        .map(|(i, row)| {
            let overflow = row.iter().skip(header.len()).any(|c| !c.trim().is_empty());
            if overflow {
                return Err(VetSplitError::Storage(format!(
                    "{} row {} has more cells than the header",
                    collection,
                    i + HEADER_ROWS + 1
                )));
            }
            Ok(RawRecord::from_row(&header, &row))
        })
        .collect()
}
