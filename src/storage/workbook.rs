//! Tabular backing store interface
//!
//! A workbook is a set of named sheets, each a list of text rows with the
//! header in the first row. Rows are addressed spreadsheet-style: 1-based
//! physical row numbers, header included. Everything above this trait (the
//! record adapter) works in logical record positions instead.

use crate::error::VetSplitResult;

/// A connected tabular store
pub trait Workbook: Send {
    /// All physical rows of a sheet, header first
    ///
    /// Returns `SheetNotFound` when the sheet does not exist.
    fn read_rows(&self, sheet: &str) -> VetSplitResult<Vec<Vec<String>>>;

    /// Append a row after the last row of an existing sheet
    fn append_row(&mut self, sheet: &str, row: &[String]) -> VetSplitResult<()>;

    /// Delete the row at a 1-based physical row number
    fn delete_row(&mut self, sheet: &str, row_number: usize) -> VetSplitResult<()>;

    /// Create a sheet holding only the given header row; no-op if it exists
    fn create_sheet(&mut self, sheet: &str, header: &[String]) -> VetSplitResult<()>;
}

/// Establishes workbook sessions from connection parameters
pub trait Connector: Send + Sync {
    /// Open a new session to the store
    fn connect(&self) -> VetSplitResult<Box<dyn Workbook>>;

    /// Human-readable description of the store, for logs
    fn describe(&self) -> String;
}
