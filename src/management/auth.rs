use std::sync::Arc;

use crate::{
    clock::Clock,
    ebay::Marketplace,
    error::SearchResult,
    info,
    management::store::{KeyValueStore, Namespace},
    success,
    types::AccessToken,
    warning,
};

/// Keeps one marketplace access token valid across requests.
///
/// The token lives in the [`Namespace::Token`] area of the store. Concurrent
/// callers may both see an expired token and both refresh; the later write
/// wins and each caller keeps using the token it obtained.
pub struct TokenManager<M, S, C> {
    marketplace: Arc<M>,
    store: Arc<S>,
    clock: Arc<C>,
}

impl<M, S, C> TokenManager<M, S, C>
where
    M: Marketplace,
    S: KeyValueStore,
    C: Clock,
{
    pub fn new(marketplace: Arc<M>, store: Arc<S>, clock: Arc<C>) -> Self {
        TokenManager {
            marketplace,
            store,
            clock,
        }
    }

    /// Returns the stored token if it is still valid, otherwise a fresh one.
    pub async fn ensure_token(&self) -> SearchResult<AccessToken> {
        if let Some(token) = self.current().await? {
            if token.is_valid_at(self.clock.now()) {
                return Ok(token);
            }
            info!("Token expired");
        }

        self.refresh().await
    }

    /// Exchanges credentials for a new token and stores it. The token expires
    /// one hour after the exchange was sent.
    pub async fn refresh(&self) -> SearchResult<AccessToken> {
        info!("Requesting token");
        let sent_at = self.clock.now();
        let response = self.marketplace.exchange_credentials().await?;
        let token = AccessToken::issued(response.access_token, sent_at);

        if let Err(e) = self.persist(&token).await {
            warning!("Failed to write token to cache: {}", e);
        }

        Ok(token)
    }

    /// Stored token regardless of its expiry. Undecodable content counts as no token.
    pub async fn current(&self) -> SearchResult<Option<AccessToken>> {
        let Some(content) = self.store.get(Namespace::Token).await? else {
            return Ok(None);
        };

        match serde_json::from_str::<AccessToken>(&content) {
            Ok(token) => Ok(Some(token)),
            Err(e) => {
                warning!("Ignoring unreadable token cache: {}", e);
                Ok(None)
            }
        }
    }

    async fn persist(&self, token: &AccessToken) -> Result<(), String> {
        let json = serde_json::to_string(token).map_err(|e| e.to_string())?;
        self.store
            .put(Namespace::Token, json)
            .await
            .map_err(|e| e.to_string())?;
        success!("New token written to cache");
        Ok(())
    }
}
