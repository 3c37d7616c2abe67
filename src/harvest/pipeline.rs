//! Harvest pipeline orchestration
//!
//! This module drives a full run: fetch the directory page, extract the
//! listing links, expand them into candidate URLs, fan out the page
//! fetches, extract and normalize addresses, and hand the result to the
//! address sink. Per-page failures degrade to absent documents and never
//! abort the run.

use crate::config::Config;
use crate::harvest::emails::{dedupe_addresses, extract_emails};
use crate::harvest::fetcher::{build_http_client, fetch_page};
use crate::harvest::links::extract_listing_links;
use crate::ledger::AddressSink;
use crate::report::HarvestReport;
use crate::url::{expand_listing_url, resolve_href};
use crate::SiftError;
use futures::future::join_all;
use reqwest::Client;
use scraper::Selector;
use url::Url;

/// Main harvester structure
pub struct Harvester {
    config: Config,
    client: Client,
    anchor_selector: Selector,
}

impl Harvester {
    /// Creates a new harvester from a validated configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Harvester)` - Ready to run
    /// * `Err(SiftError)` - Failed to build the HTTP client or selector
    pub fn new(config: Config) -> Result<Self, SiftError> {
        // Validation already checked the selector compiles; compile once here
        let anchor_selector = Selector::parse(&config.directory.anchor_selector)
            .map_err(|e| crate::ConfigError::InvalidSelector(e.to_string()))?;

        let client = build_http_client()?;

        Ok(Self {
            config,
            client,
            anchor_selector,
        })
    }

    /// Runs the full harvest pipeline and appends new addresses to the sink
    ///
    /// # Pipeline
    ///
    /// 1. Fetch the configured directory page
    /// 2. Extract listing links (an absent page yields an empty list)
    /// 3. Resolve each href against the directory URL and expand it into
    ///    the {listing, contact page} pair
    /// 4. Fetch all candidate URLs concurrently and wait for every one
    /// 5. Extract emails from every fetched document
    /// 6. Lowercase, dedupe, and append to the sink
    ///
    /// # Returns
    ///
    /// * `Ok(HarvestReport)` - Run counters
    /// * `Err(SiftError)` - URL parse or ledger failure
    pub async fn run(&self, sink: &mut dyn AddressSink) -> Result<HarvestReport, SiftError> {
        let target = self.config.directory.target_url();
        let base_url = Url::parse(&target)?;

        tracing::info!("Fetching directory page: {}", target);
        let directory_html = fetch_page(&self.client, &target).await;
        if directory_html.is_none() {
            tracing::warn!("Directory page could not be fetched, nothing to harvest");
        }

        tracing::info!("Extracting listing links");
        let listing_links = match &directory_html {
            Some(html) => extract_listing_links(html, &self.anchor_selector),
            None => Vec::new(),
        };
        tracing::info!("Found {} listing links", listing_links.len());

        tracing::info!(
            "Expanding listings with contact path {}",
            self.config.directory.contact_path
        );
        let mut candidates = Vec::with_capacity(listing_links.len() * 2);
        for href in &listing_links {
            match resolve_href(&base_url, href) {
                Some(resolved) => candidates.extend(expand_listing_url(
                    resolved.as_str(),
                    &self.config.directory.contact_path,
                )),
                None => tracing::debug!("Skipping unusable href '{}'", href),
            }
        }

        tracing::info!("Fetching {} candidate pages", candidates.len());
        let documents = join_all(
            candidates
                .iter()
                .map(|url| fetch_page(&self.client, url)),
        )
        .await;
        let pages_fetched = documents.iter().filter(|d| d.is_some()).count();
        let pages_missing = documents.len() - pages_fetched;

        tracing::info!("Extracting email addresses from {} pages", pages_fetched);
        let raw_addresses = documents
            .iter()
            .flatten()
            .flat_map(|document| extract_emails(document));

        let addresses = dedupe_addresses(raw_addresses);
        for (index, address) in addresses.iter().enumerate() {
            tracing::info!("{} ({} / {})", address, index + 1, addresses.len());
        }

        let addresses_appended = sink.append(&addresses)?;

        Ok(HarvestReport {
            listing_links: listing_links.len(),
            candidate_urls: candidates.len(),
            pages_fetched,
            pages_missing,
            addresses_found: addresses.len(),
            addresses_appended,
        })
    }
}
