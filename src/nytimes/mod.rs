//! # New York Times Books API
//!
//! Ranking provider used to turn a (date, list) pair into the ISBN of the
//! book ranked first on that list.
//!
//! Only one endpoint is used:
//!
//! - `GET /svc/books/v3/lists.json?api-key=..&list=..&published-date=..`
//!
//! The API key is passed as a query parameter.

use std::future::Future;

use reqwest::Client;

use crate::{
    error::{SearchError, SearchResult},
    types::{BestsellerResponse, LookupKey},
};

/// Source of bestseller rankings.
pub trait RankingProvider: Send + Sync {
    fn bestsellers(
        &self,
        key: &LookupKey,
    ) -> impl Future<Output = SearchResult<BestsellerResponse>> + Send;
}

#[derive(Debug, Clone)]
pub struct NytClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl NytClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }
}

impl RankingProvider for NytClient {
    async fn bestsellers(&self, key: &LookupKey) -> SearchResult<BestsellerResponse> {
        let api_url = format!("{uri}/svc/books/v3/lists.json", uri = self.base_url);

        let response = self
            .client
            .get(&api_url)
            .query(&[
                ("api-key", self.api_key.as_str()),
                ("list", key.genre()),
                ("published-date", key.date_range()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Upstream(format!(
                "books api responded with {}",
                status
            )));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
