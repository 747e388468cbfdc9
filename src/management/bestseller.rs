use std::{collections::BTreeMap, sync::Arc};

use crate::{
    error::{SearchError, SearchResult},
    info,
    management::store::{KeyValueStore, Namespace},
    nytimes::RankingProvider,
    success,
    types::{BestsellerResponse, LookupKey},
    warning,
};

/// Record key (`{date}_{genre}`) to ISBN.
pub type BestsellerCache = BTreeMap<String, String>;

/// Resolves a (date, list) pair to the ISBN of its top-ranked book,
/// memoizing every successful lookup.
pub struct BestsellerResolver<R, S> {
    provider: Arc<R>,
    store: Arc<S>,
}

impl<R, S> BestsellerResolver<R, S>
where
    R: RankingProvider,
    S: KeyValueStore,
{
    pub fn new(provider: Arc<R>, store: Arc<S>) -> Self {
        Self { provider, store }
    }

    pub async fn resolve(&self, key: &LookupKey) -> SearchResult<String> {
        let record_key = key.record_key();
        if let Some(isbn) = self.cached_entries().await?.get(&record_key) {
            info!("Using cached value {} : {}", record_key, isbn);
            return Ok(isbn.clone());
        }

        let response = self.provider.bestsellers(key).await?;
        let isbn = top_isbn(&response)?;

        if let Err(e) = self.remember(&record_key, &isbn).await {
            warning!("Failed to write bestseller cache: {}", e);
        }

        Ok(isbn)
    }

    /// Everything cached so far. A cache that was never written is empty.
    pub async fn cached_entries(&self) -> SearchResult<BestsellerCache> {
        match self.store.get(Namespace::Bestsellers).await? {
            Some(content) => Ok(serde_json::from_str(&content)?),
            None => Ok(BestsellerCache::new()),
        }
    }

    async fn remember(&self, record_key: &str, isbn: &str) -> Result<(), String> {
        // re-read so entries written since the lookup survive
        let mut cache = self.cached_entries().await.map_err(|e| e.to_string())?;
        cache.insert(record_key.to_string(), isbn.to_string());

        let json = serde_json::to_string(&cache).map_err(|e| e.to_string())?;
        self.store
            .put(Namespace::Bestsellers, json)
            .await
            .map_err(|e| e.to_string())?;
        success!("Bestseller cache written");
        Ok(())
    }
}

/// First ISBN-10 of the first ranked book; the provider's order is kept as-is.
pub fn top_isbn(response: &BestsellerResponse) -> SearchResult<String> {
    if response.num_results == 0 || response.results.is_empty() {
        return Err(SearchError::NotFound);
    }

    response.results[0]
        .isbns
        .first()
        .map(|entry| entry.isbn10.clone())
        .filter(|isbn| !isbn.is_empty())
        .ok_or_else(|| SearchError::Upstream("top ranked book has no isbn10".to_string()))
}
