use reqwest::header::AUTHORIZATION;

use crate::{
    ebay::EbayClient,
    error::{SearchError, SearchResult},
    types::CredentialResponse,
    utils,
};

impl EbayClient {
    /// Performs the OAuth client-credentials grant.
    ///
    /// The response's `expires_in` is returned as-is; callers decide the
    /// token lifetime themselves.
    pub async fn request_token(&self) -> SearchResult<CredentialResponse> {
        let api_url = format!("{uri}/identity/v1/oauth2/token", uri = self.base_url);
        let authorization = utils::get_authorization(&self.client_id, &self.client_secret);

        let response = self
            .client
            .post(&api_url)
            .header(AUTHORIZATION, format!("Basic {}", authorization))
            .form(&[
                ("grant_type", "client_credentials"),
                ("scope", self.scope.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Upstream(format!(
                "credential exchange responded with {}",
                status
            )));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
