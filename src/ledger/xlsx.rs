//! Xlsx ledger backend
//!
//! Addresses are stored one per row in column A of the `Addresses`
//! worksheet, starting at row 1. Existing rows are never overwritten: new
//! addresses go into the first unused rows after the populated ones. The
//! previous file is copied to the backup path before every write; the copy
//! is best-effort and a failure only logs a warning.

use crate::config::LedgerConfig;
use crate::ledger::{AddressSink, LedgerError, LedgerResult, WORKSHEET_NAME};
use std::path::Path;
use umya_spreadsheet::{reader, writer, Spreadsheet, Worksheet};

/// Xlsx-backed address ledger
pub struct XlsxLedger {
    config: LedgerConfig,
}

impl XlsxLedger {
    /// Creates a ledger over the configured spreadsheet and backup paths
    pub fn new(config: LedgerConfig) -> Self {
        Self { config }
    }

    /// Opens the existing workbook or creates a fresh one
    fn open_workbook(&self) -> LedgerResult<Spreadsheet> {
        let path = Path::new(&self.config.spreadsheet_path);

        let mut book = if path.exists() {
            self.backup_existing(path);
            reader::xlsx::read(path).map_err(|e| LedgerError::Xlsx(e.to_string()))?
        } else {
            tracing::info!(
                "Ledger {} does not exist, creating a new workbook",
                self.config.spreadsheet_path
            );
            umya_spreadsheet::new_file_empty_worksheet()
        };

        if book.get_sheet_by_name(WORKSHEET_NAME).is_none() {
            book.new_sheet(WORKSHEET_NAME)
                .map_err(|e| LedgerError::Worksheet(e.to_string()))?;
        }

        Ok(book)
    }

    /// Copies the current ledger to the backup path, best-effort
    fn backup_existing(&self, path: &Path) {
        match std::fs::copy(path, &self.config.backup_path) {
            Ok(_) => tracing::debug!("Backed up ledger to {}", self.config.backup_path),
            Err(e) => tracing::warn!(
                "Failed to back up ledger to {}: {}",
                self.config.backup_path,
                e
            ),
        }
    }
}

impl AddressSink for XlsxLedger {
    fn append(&mut self, addresses: &[String]) -> LedgerResult<usize> {
        // Nothing to write: skip the backup and the scan entirely
        if addresses.is_empty() {
            tracing::info!("No new addresses, ledger untouched");
            return Ok(0);
        }

        let mut book = self.open_workbook()?;

        let sheet = book
            .get_sheet_by_name_mut(WORKSHEET_NAME)
            .ok_or_else(|| LedgerError::Worksheet(format!("{} worksheet missing", WORKSHEET_NAME)))?;

        let mut row = first_empty_row(sheet);
        for address in addresses {
            sheet.get_cell_mut((1u32, row)).set_value(address.as_str());
            row += 1;
        }

        writer::xlsx::write(&book, Path::new(&self.config.spreadsheet_path))
            .map_err(|e| LedgerError::Xlsx(e.to_string()))?;

        tracing::info!(
            "Appended {} addresses to {}",
            addresses.len(),
            self.config.spreadsheet_path
        );

        Ok(addresses.len())
    }
}

/// Finds the first row in column A whose cell is empty
///
/// The scan walks down from row 1 and stops at the first unset cell, so it
/// is bounded by the number of populated rows.
fn first_empty_row(sheet: &Worksheet) -> u32 {
    let mut row = 1u32;
    while !sheet.get_value((1u32, row)).is_empty() {
        row += 1;
    }
    row
}
