//! Address ledger module
//!
//! This module persists harvested addresses, including:
//! - The sink trait the pipeline writes through
//! - The xlsx ledger backend (backup, insertion-point scan, append)

mod xlsx;

pub use xlsx::XlsxLedger;

use thiserror::Error;

/// Name of the worksheet holding the address column
pub const WORKSHEET_NAME: &str = "Addresses";

/// Errors that can occur during ledger operations
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Spreadsheet error: {0}")]
    Xlsx(String),

    #[error("Worksheet error: {0}")]
    Worksheet(String),
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Trait for address sink implementations
///
/// The pipeline hands its deduplicated, lowercased address list to a sink;
/// the sink decides where the addresses live.
pub trait AddressSink {
    /// Appends the addresses after the last existing entry
    ///
    /// # Arguments
    ///
    /// * `addresses` - New addresses, in the order they should be written
    ///
    /// # Returns
    ///
    /// The number of addresses written
    fn append(&mut self, addresses: &[String]) -> LedgerResult<usize>;
}
