//! Configuration management for shelfscout.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the local data directory. Variables already present in the process
//! environment take priority over the file.

use std::{env, path::PathBuf};

/// Loads environment variables from `shelfscout/.env` in the local data directory.
///
/// The directory is created when missing. A missing `.env` file is not an
/// error; every variable can also come from the process environment.
///
/// - Linux: `~/.local/share/shelfscout/.env`
/// - macOS: `~/Library/Application Support/shelfscout/.env`
/// - Windows: `%LOCALAPPDATA%/shelfscout/.env`
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("shelfscout/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn required(name: &str) -> Result<String, String> {
    env::var(name).map_err(|_| format!("{} must be set", name))
}

fn optional(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Address the web server binds to, e.g. `127.0.0.1:3000`.
pub fn server_addr() -> String {
    optional("SERVER_ADDRESS", "127.0.0.1:3000")
}

/// Books API key, sent as the `api-key` query parameter. Required.
pub fn nyt_api_key() -> Result<String, String> {
    required("NYT_API_KEY")
}

/// Base URL of the Books API. Overridable so tests can point at a local server.
pub fn nyt_api_url() -> String {
    optional("NYT_API_URL", "https://api.nytimes.com")
}

/// Marketplace application id for the client-credentials exchange. Required.
pub fn ebay_client_id() -> Result<String, String> {
    required("EBAY_CLIENT_ID")
}

/// The client secret must never be logged.
pub fn ebay_client_secret() -> Result<String, String> {
    required("EBAY_CLIENT_SECRET")
}

/// Base URL of both the identity and browse APIs.
pub fn ebay_api_url() -> String {
    optional("EBAY_API_URL", "https://api.ebay.com")
}

/// Value of the `X-EBAY-C-MARKETPLACE-ID` header, `EBAY_US` by default.
pub fn ebay_marketplace_id() -> String {
    optional("EBAY_MARKETPLACE_ID", "EBAY_US")
}

pub fn ebay_scope() -> String {
    optional("EBAY_SCOPE", "https://api.ebay.com/oauth/api_scope")
}

/// Whether a rejected token gets one forced refresh and one more search.
/// Off unless the variable is `true` or `1`.
pub fn ebay_retry_on_auth_error() -> bool {
    matches!(
        env::var("EBAY_RETRY_ON_AUTH_ERROR")
            .map(|v| v.to_ascii_lowercase())
            .as_deref(),
        Ok("true") | Ok("1")
    )
}

/// Root directory of the token and bestseller files.
pub fn data_dir() -> PathBuf {
    match env::var("SHELFSCOUT_DATA_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
            path.push("shelfscout");
            path
        }
    }
}

/// Directory served under `/images`.
pub fn assets_dir() -> PathBuf {
    PathBuf::from(optional("ASSETS_DIR", "./public/images"))
}

/// Everything needed to wire up the search pipeline.
#[derive(Debug, Clone)]
pub struct Settings {
    pub nyt_api_url: String,
    pub nyt_api_key: String,
    pub ebay_api_url: String,
    pub ebay_client_id: String,
    pub ebay_client_secret: String,
    pub ebay_marketplace_id: String,
    pub ebay_scope: String,
    pub retry_on_auth_error: bool,
    pub data_dir: PathBuf,
}

impl Settings {
    /// Reads every setting from the environment.
    ///
    /// # Errors
    ///
    /// Returns `"<NAME> must be set"` for the first missing required
    /// variable (`NYT_API_KEY`, `EBAY_CLIENT_ID`, `EBAY_CLIENT_SECRET`).
    pub fn from_env() -> Result<Self, String> {
        Ok(Settings {
            nyt_api_url: nyt_api_url(),
            nyt_api_key: nyt_api_key()?,
            ebay_api_url: ebay_api_url(),
            ebay_client_id: ebay_client_id()?,
            ebay_client_secret: ebay_client_secret()?,
            ebay_marketplace_id: ebay_marketplace_id(),
            ebay_scope: ebay_scope(),
            retry_on_auth_error: ebay_retry_on_auth_error(),
            data_dir: data_dir(),
        })
    }
}
