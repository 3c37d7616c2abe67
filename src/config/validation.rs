use crate::config::types::{Config, DirectoryConfig, LedgerConfig};
use crate::ConfigError;
use scraper::Selector;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_directory_config(&config.directory)?;
    validate_ledger_config(&config.ledger)?;
    Ok(())
}

/// Validates the target directory configuration
fn validate_directory_config(config: &DirectoryConfig) -> Result<(), ConfigError> {
    if !config.url_template.contains("{page}") {
        return Err(ConfigError::Validation(format!(
            "url_template must contain the {{page}} placeholder, got '{}'",
            config.url_template
        )));
    }

    if config.page_number < 1 {
        return Err(ConfigError::Validation(format!(
            "page_number must be >= 1, got {}",
            config.page_number
        )));
    }

    // The substituted template must be a fetchable http(s) URL
    let target = config.target_url();
    let url = Url::parse(&target)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid url_template '{}': {}", target, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "url_template must use http or https, got '{}'",
            url.scheme()
        )));
    }

    // The anchor selector must compile; the pipeline relies on this
    Selector::parse(&config.anchor_selector)
        .map_err(|e| ConfigError::InvalidSelector(format!("'{}': {}", config.anchor_selector, e)))?;

    if !config.contact_path.starts_with('/') {
        return Err(ConfigError::Validation(format!(
            "contact_path must start with '/', got '{}'",
            config.contact_path
        )));
    }

    Ok(())
}

/// Validates the ledger configuration
fn validate_ledger_config(config: &LedgerConfig) -> Result<(), ConfigError> {
    if config.spreadsheet_path.is_empty() {
        return Err(ConfigError::Validation(
            "spreadsheet_path cannot be empty".to_string(),
        ));
    }

    if config.backup_path.is_empty() {
        return Err(ConfigError::Validation(
            "backup_path cannot be empty".to_string(),
        ));
    }

    // Backing up onto the primary file would destroy the ledger
    if config.spreadsheet_path == config.backup_path {
        return Err(ConfigError::Validation(format!(
            "spreadsheet_path and backup_path must differ, both are '{}'",
            config.spreadsheet_path
        )));
    }

    Ok(())
}
