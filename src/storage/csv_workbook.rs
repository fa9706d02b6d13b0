//! CSV-backed workbook
//!
//! A store is a directory; each sheet is `<sheet>.csv` inside it. Appends go
//! straight to the end of the file. Deletes and sheet creation rewrite the
//! file through a temp file and an atomic rename so a crash never leaves a
//! half-written sheet.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::error::{VetSplitError, VetSplitResult};

use super::workbook::{Connector, Workbook};

/// Opens the workbook directory for one store id
#[derive(Debug, Clone)]
pub struct CsvConnector {
    root: PathBuf,
}

impl CsvConnector {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl Connector for CsvConnector {
    fn connect(&self) -> VetSplitResult<Box<dyn Workbook>> {
        if !self.root.is_dir() {
            return Err(VetSplitError::StoreUnavailable(format!(
                "no store at {}",
                self.root.display()
            )));
        }
        Ok(Box::new(CsvWorkbook::new(self.root.clone())))
    }

    fn describe(&self) -> String {
        format!("csv:{}", self.root.display())
    }
}

/// A directory of CSV sheets
#[derive(Debug, Clone)]
pub struct CsvWorkbook {
    root: PathBuf,
}

impl CsvWorkbook {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn sheet_path(&self, sheet: &str) -> PathBuf {
        self.root.join(format!("{}.csv", sheet))
    }

    fn existing_sheet_path(&self, sheet: &str) -> VetSplitResult<PathBuf> {
        let path = self.sheet_path(sheet);
        if path.is_file() {
            Ok(path)
        } else {
            Err(VetSplitError::SheetNotFound(sheet.to_string()))
        }
    }
}

impl Workbook for CsvWorkbook {
    fn read_rows(&self, sheet: &str) -> VetSplitResult<Vec<Vec<String>>> {
        let path = self.existing_sheet_path(sheet)?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&path)
            .map_err(|e| {
                VetSplitError::Storage(format!("Failed to open {}: {}", path.display(), e))
            })?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| {
                VetSplitError::Csv(format!("Failed to parse {}: {}", path.display(), e))
            })?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(rows)
    }

    fn append_row(&mut self, sheet: &str, row: &[String]) -> VetSplitResult<()> {
        let path = self.existing_sheet_path(sheet)?;

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                VetSplitError::Storage(format!("Failed to open {}: {}", path.display(), e))
            })?;

        // A hand-edited sheet may lack the final newline
        if missing_final_newline(&mut file)? {
            file.write_all(b"\n")?;
        }

        let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(file);
        writer.write_record(row)?;
        writer
            .flush()
            .map_err(|e| VetSplitError::Storage(format!("Failed to flush row: {}", e)))?;

        Ok(())
    }

    fn delete_row(&mut self, sheet: &str, row_number: usize) -> VetSplitResult<()> {
        let mut rows = self.read_rows(sheet)?;
        if row_number == 0 || row_number > rows.len() {
            return Err(VetSplitError::Storage(format!(
                "Row {} does not exist in sheet '{}' ({} rows)",
                row_number,
                sheet,
                rows.len()
            )));
        }
        rows.remove(row_number - 1);
        write_rows_atomic(&self.sheet_path(sheet), &rows)
    }

    fn create_sheet(&mut self, sheet: &str, header: &[String]) -> VetSplitResult<()> {
        let path = self.sheet_path(sheet);
        if path.exists() {
            return Ok(());
        }
        write_rows_atomic(&path, &[header.to_vec()])
    }
}

fn missing_final_newline(file: &mut File) -> io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}

/// Write a whole sheet atomically (write to temp, then rename)
fn write_rows_atomic(path: &Path, rows: &[Vec<String>]) -> VetSplitResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            VetSplitError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays atomic
    let temp_path = path.with_extension("csv.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| VetSplitError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(BufWriter::new(file));
    for row in rows {
        writer.write_record(row)?;
    }

    let mut buffered = writer
        .into_inner()
        .map_err(|e| VetSplitError::Storage(format!("Failed to flush data: {}", e)))?;
    buffered
        .flush()
        .map_err(|e| VetSplitError::Storage(format!("Failed to flush data: {}", e)))?;
    buffered
        .get_ref()
        .sync_all()
        .map_err(|e| VetSplitError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        VetSplitError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
