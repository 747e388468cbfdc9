use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Failure of the search pipeline, as seen by the presentation layer.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("no bestseller found for the requested list and date")]
    NotFound,

    #[error("upstream failure: {0}")]
    Upstream(String),

    #[error("marketplace rejected the access token: {0}")]
    Auth(String),
}

/// Failure of the key-value persistence port.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        SearchError::Upstream(err.to_string())
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::Upstream(format!("malformed payload: {}", err))
    }
}

impl From<StoreError> for SearchError {
    fn from(err: StoreError) -> Self {
        SearchError::Upstream(err.to_string())
    }
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        match self {
            SearchError::NotFound => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
            // token rejection is reported like any other upstream failure
            SearchError::Upstream(_) | SearchError::Auth(_) => {
                (StatusCode::BAD_GATEWAY, self.to_string()).into_response()
            }
        }
    }
}

pub type SearchResult<T> = std::result::Result<T, SearchError>;
