//! shelfscout library
//!
//! Looks up the top book of a New York Times bestseller list for a given
//! date and lists the marketplace offers for its ISBN. Bestseller lookups are
//! memoized and the marketplace access token is cached until it expires.
//!
//! # Modules
//!
//! - `api` - HTTP handlers of the web front end
//! - `cli` - terminal subcommands
//! - `clock` - wall-clock source used for token expiry
//! - `config` - configuration from the environment and `.env`
//! - `ebay` - marketplace client and listing fetcher
//! - `error` - error types
//! - `management` - token manager, bestseller resolver, search pipeline, persistence
//! - `nytimes` - bestseller ranking client
//! - `render` - HTML pages
//! - `server` - router and server start-up
//! - `types` - domain and wire types
//! - `utils` - small helpers

use std::sync::Arc;

pub mod api;
pub mod cli;
pub mod clock;
pub mod config;
pub mod ebay;
pub mod error;
pub mod management;
pub mod nytimes;
pub mod render;
pub mod server;
pub mod types;
pub mod utils;

use clock::SystemClock;
use config::Settings;
use ebay::EbayClient;
use management::{JsonFileStore, SearchOrchestrator};
use nytimes::NytClient;

/// A convenient Result type alias for binary-level plumbing.
///
/// Library operations return [`error::SearchResult`]; this boxed alias is
/// used where unrelated errors (I/O, address parsing, server) meet.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// The search pipeline wired to the real services and the JSON file store.
pub type AppSearch = SearchOrchestrator<NytClient, EbayClient, JsonFileStore, SystemClock>;

pub fn build_search(settings: &Settings) -> AppSearch {
    SearchOrchestrator::new(
        Arc::new(NytClient::new(
            settings.nyt_api_url.clone(),
            settings.nyt_api_key.clone(),
        )),
        Arc::new(EbayClient::from_settings(settings)),
        Arc::new(JsonFileStore::new(settings.data_dir.clone())),
        Arc::new(SystemClock),
    )
    .with_auth_retry(settings.retry_on_auth_error)
}

/// Prints an informational message with a blue bullet point.
///
/// ```rust,ignore
/// info!("Using cached value {} : {}", key, isbn);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// ```rust,ignore
/// success!("Bestseller cache written");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for fatal errors in the binary and CLI code; library code returns
/// errors instead.
///
/// ```rust,ignore
/// error!("Cannot load configuration: {}", e);
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable problems such as failed cache writes.
///
/// ```rust,ignore
/// warning!("Failed to write token to cache: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
