use std::sync::Arc;

use crate::{
    clock::Clock,
    ebay::{ListingFetcher, Marketplace},
    error::{SearchError, SearchResult},
    management::{
        auth::TokenManager,
        bestseller::BestsellerResolver,
        store::KeyValueStore,
    },
    nytimes::RankingProvider,
    types::{ListingSummary, LookupKey},
    warning,
};

/// Runs one search: bestseller ISBN, then a valid token, then the listings.
/// Each stage stops the pipeline on failure.
pub struct SearchOrchestrator<R, M, S, C> {
    resolver: BestsellerResolver<R, S>,
    tokens: TokenManager<M, S, C>,
    fetcher: ListingFetcher<M>,
    retry_on_auth_error: bool,
}

impl<R, M, S, C> SearchOrchestrator<R, M, S, C>
where
    R: RankingProvider,
    M: Marketplace,
    S: KeyValueStore,
    C: Clock,
{
    pub fn new(provider: Arc<R>, marketplace: Arc<M>, store: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            resolver: BestsellerResolver::new(provider, Arc::clone(&store)),
            tokens: TokenManager::new(Arc::clone(&marketplace), store, clock),
            fetcher: ListingFetcher::new(marketplace),
            retry_on_auth_error: false,
        }
    }

    /// On a rejected token, refresh once and search once more.
    pub fn with_auth_retry(mut self, enabled: bool) -> Self {
        self.retry_on_auth_error = enabled;
        self
    }

    pub fn resolver(&self) -> &BestsellerResolver<R, S> {
        &self.resolver
    }

    pub fn tokens(&self) -> &TokenManager<M, S, C> {
        &self.tokens
    }

    pub async fn search(&self, date_range: &str, genre: &str) -> SearchResult<Vec<ListingSummary>> {
        let key = LookupKey::new(date_range, genre);
        let isbn = self.resolver.resolve(&key).await?;
        let token = self.tokens.ensure_token().await?;

        match self.fetcher.fetch_listings(&isbn, &token).await {
            Err(SearchError::Auth(cause)) if self.retry_on_auth_error => {
                warning!("Token rejected ({}), refreshing once", cause);
                let token = self.tokens.refresh().await?;
                self.fetcher.fetch_listings(&isbn, &token).await
            }
            result => result,
        }
    }
}
