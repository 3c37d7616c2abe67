use serde::Deserialize;

/// Main configuration structure for mailsift
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub directory: DirectoryConfig,
    pub ledger: LedgerConfig,
}

/// Target directory configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryConfig {
    /// Directory page URL template; `{page}` is replaced by the page number
    #[serde(rename = "url-template")]
    pub url_template: String,

    /// Which directory page to harvest
    #[serde(rename = "page-number")]
    pub page_number: u32,

    /// CSS selector matching the "visit business" anchor buttons
    #[serde(rename = "anchor-selector")]
    pub anchor_selector: String,

    /// Path segment appended to a listing URL to reach its contact page
    #[serde(rename = "contact-path")]
    pub contact_path: String,
}

/// Address ledger configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerConfig {
    /// Path to the xlsx ledger file
    #[serde(rename = "spreadsheet-path")]
    pub spreadsheet_path: String,

    /// Path the previous ledger is copied to before each write
    #[serde(rename = "backup-path")]
    pub backup_path: String,
}

impl DirectoryConfig {
    /// Returns the directory page URL with the page number substituted
    pub fn target_url(&self) -> String {
        self.url_template
            .replace("{page}", &self.page_number.to_string())
    }
}
