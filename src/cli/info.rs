use chrono::Utc;

use crate::{build_search, config::Settings, error, info, warning};

pub async fn info() {
    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => error!("Cannot load configuration: {}", e),
    };
    info!("Data directory: {}", settings.data_dir.display());
    let pipeline = build_search(&settings);

    match pipeline.tokens().current().await {
        Ok(Some(token)) if token.is_valid_at(Utc::now()) => {
            let left = token.expires_at - Utc::now();
            info!(
                "Token valid until {} ({} minutes left)",
                token.expires_at.to_rfc3339(),
                left.num_minutes()
            );
        }
        Ok(Some(token)) => info!("Token expired at {}", token.expires_at.to_rfc3339()),
        Ok(None) => info!("No token cached yet"),
        Err(e) => warning!("Cannot read token cache: {}", e),
    }

    match pipeline.resolver().cached_entries().await {
        Ok(cache) => {
            info!("Cached bestsellers: {}", cache.len());
            for (key, isbn) in cache {
                println!("  {} -> {}", key, isbn);
            }
        }
        Err(e) => warning!("Cannot read bestseller cache: {}", e),
    }
}
