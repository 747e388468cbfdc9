use std::{net::SocketAddr, str::FromStr, sync::Arc};

use axum::{Extension, Router, routing::get};

use crate::{
    Res,
    api::{self, Assets},
    clock::Clock,
    ebay::Marketplace,
    management::{KeyValueStore, SearchOrchestrator},
    nytimes::RankingProvider,
    success,
};

pub fn router<R, M, S, C>(orchestrator: Arc<SearchOrchestrator<R, M, S, C>>, assets: Assets) -> Router
where
    R: RankingProvider + 'static,
    M: Marketplace + 'static,
    S: KeyValueStore + 'static,
    C: Clock + 'static,
{
    Router::new()
        .route("/", get(api::home))
        .route("/search", get(api::search::<R, M, S, C>))
        .route("/images/{file}", get(api::image))
        .route("/health", get(api::health))
        .fallback(api::not_found)
        .layer(Extension(orchestrator))
        .layer(Extension(Arc::new(assets)))
}

pub async fn start_api_server(addr: &str, app: Router) -> Res<()> {
    let addr = SocketAddr::from_str(addr)?;
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    success!("Now listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
