//! # eBay Integration Module
//!
//! Marketplace side of the pipeline. The [`Marketplace`] trait is the seam the
//! token manager and the listing fetcher are written against; [`EbayClient`]
//! implements it over the eBay REST APIs with `reqwest`.
//!
//! ## Endpoints
//!
//! - `POST /identity/v1/oauth2/token` - client-credentials exchange ([`auth`])
//! - `GET /buy/browse/v1/item_summary/search` - free-text item search ([`listings`])
//!
//! The credential exchange authenticates with a `Basic` header built from the
//! application's client id and secret. Searches carry the resulting bearer
//! token and the marketplace id header.

pub mod auth;
pub mod listings;

use std::future::Future;

use reqwest::Client;

use crate::{
    config::Settings,
    error::SearchResult,
    types::{AccessToken, CredentialResponse, ItemSearchResponse},
};

pub use listings::ListingFetcher;

/// Remote marketplace operations the pipeline depends on.
pub trait Marketplace: Send + Sync {
    /// Exchanges the application credentials for a fresh access token.
    fn exchange_credentials(&self) -> impl Future<Output = SearchResult<CredentialResponse>> + Send;

    /// Runs a free-text item search.
    fn search_items(
        &self,
        query: &str,
        token: &AccessToken,
    ) -> impl Future<Output = SearchResult<ItemSearchResponse>> + Send;
}

#[derive(Debug, Clone)]
pub struct EbayClient {
    client: Client,
    base_url: String,
    client_id: String,
    client_secret: String,
    marketplace_id: String,
    scope: String,
}

impl EbayClient {
    pub fn new(
        base_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            marketplace_id: "EBAY_US".to_string(),
            scope: "https://api.ebay.com/oauth/api_scope".to_string(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.ebay_api_url.clone(),
            settings.ebay_client_id.clone(),
            settings.ebay_client_secret.clone(),
        )
        .with_marketplace_id(settings.ebay_marketplace_id.clone())
        .with_scope(settings.ebay_scope.clone())
    }

    pub fn with_marketplace_id(mut self, marketplace_id: impl Into<String>) -> Self {
        self.marketplace_id = marketplace_id.into();
        self
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }
}

impl Marketplace for EbayClient {
    async fn exchange_credentials(&self) -> SearchResult<CredentialResponse> {
        self.request_token().await
    }

    async fn search_items(&self, query: &str, token: &AccessToken) -> SearchResult<ItemSearchResponse> {
        self.item_summary_search(query, token).await
    }
}
