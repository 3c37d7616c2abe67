//! Harvest module for directory page fetching and address extraction
//!
//! This module contains the core harvesting logic, including:
//! - HTTP fetching with absent-page degradation
//! - Listing link extraction from the directory page
//! - Lexical email extraction and normalization
//! - Overall pipeline orchestration

mod emails;
mod fetcher;
mod links;
mod pipeline;

pub use emails::{dedupe_addresses, extract_emails};
pub use fetcher::{build_http_client, fetch_page};
pub use links::extract_listing_links;
pub use pipeline::Harvester;

pub use crate::report::HarvestReport;
