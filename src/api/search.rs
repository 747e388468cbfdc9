use std::sync::Arc;

use axum::{Extension, extract::Query, response::Html};
use chrono::Utc;
use serde::Deserialize;

use crate::{
    clock::Clock,
    ebay::Marketplace,
    error::SearchError,
    info,
    management::{KeyValueStore, SearchOrchestrator},
    nytimes::RankingProvider,
    render, warning,
};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub daterange: String,
    pub genre: String,
}

pub async fn home() -> Html<String> {
    Html(render::render_form(
        &Utc::now().date_naive().format("%Y-%m-%d").to_string(),
    ))
}

pub async fn search<R, M, S, C>(
    Query(params): Query<SearchParams>,
    Extension(orchestrator): Extension<Arc<SearchOrchestrator<R, M, S, C>>>,
) -> Result<Html<String>, SearchError>
where
    R: RankingProvider + 'static,
    M: Marketplace + 'static,
    S: KeyValueStore + 'static,
    C: Clock + 'static,
{
    info!("New search for {} on {}", params.genre, params.daterange);

    match orchestrator.search(&params.daterange, &params.genre).await {
        Ok(listings) => Ok(Html(render::render_results(&listings))),
        Err(e) => {
            warning!("Search failed: {}", e);
            Err(e)
        }
    }
}
