//! Configuration module for mailsift
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use mailsift::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("mailsift.toml")).unwrap();
//! println!("Harvesting {}", config.directory.target_url());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, DirectoryConfig, LedgerConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
