//! Harvest run summary
//!
//! Counters gathered over a single run, printed to stdout after the ledger
//! write completes.

/// Counters from a completed harvest run
#[derive(Debug, Clone, Default)]
pub struct HarvestReport {
    /// Listing links extracted from the directory page
    pub listing_links: usize,

    /// Candidate URLs after contact-path expansion
    pub candidate_urls: usize,

    /// Candidate pages that were fetched successfully
    pub pages_fetched: usize,

    /// Candidate pages that could not be fetched
    pub pages_missing: usize,

    /// Unique addresses found this run
    pub addresses_found: usize,

    /// Addresses appended to the ledger
    pub addresses_appended: usize,
}

/// Prints a harvest report to stdout in a formatted manner
pub fn print_report(report: &HarvestReport) {
    println!("=== Harvest Report ===\n");

    println!("Directory:");
    println!("  Listing links found: {}", report.listing_links);
    println!("  Candidate URLs: {}", report.candidate_urls);
    println!();

    println!("Pages:");
    println!("  Fetched: {}", report.pages_fetched);
    println!("  Missing: {}", report.pages_missing);
    println!();

    println!("Addresses:");
    println!("  Unique addresses found: {}", report.addresses_found);
    println!("  Appended to ledger: {}", report.addresses_appended);
}
