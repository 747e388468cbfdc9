use std::sync::Arc;

use reqwest::StatusCode;

use crate::{
    ebay::{EbayClient, Marketplace},
    error::{SearchError, SearchResult},
    types::{AccessToken, ItemSearchResponse, ListingSummary},
};

impl EbayClient {
    pub async fn item_summary_search(
        &self,
        query: &str,
        token: &AccessToken,
    ) -> SearchResult<ItemSearchResponse> {
        let api_url = format!(
            "{uri}/buy/browse/v1/item_summary/search",
            uri = self.base_url
        );

        let response = self
            .client
            .get(&api_url)
            .query(&[("q", query)])
            .bearer_auth(&token.value)
            .header("X-EBAY-C-MARKETPLACE-ID", &self.marketplace_id)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(SearchError::Auth(format!(
                "item search responded with {}",
                status
            )));
        }
        if !status.is_success() {
            return Err(SearchError::Upstream(format!(
                "item search responded with {}",
                status
            )));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Turns marketplace search results for an ISBN into listing summaries.
pub struct ListingFetcher<M> {
    marketplace: Arc<M>,
}

impl<M: Marketplace> ListingFetcher<M> {
    pub fn new(marketplace: Arc<M>) -> Self {
        Self { marketplace }
    }

    /// Listings keep the marketplace's order. No matches is an empty list.
    pub async fn fetch_listings(
        &self,
        isbn: &str,
        token: &AccessToken,
    ) -> SearchResult<Vec<ListingSummary>> {
        let response = self.marketplace.search_items(isbn, token).await?;

        Ok(response
            .item_summaries
            .unwrap_or_default()
            .into_iter()
            .map(ListingSummary::from)
            .collect())
    }
}
