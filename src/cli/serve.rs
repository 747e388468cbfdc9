use std::sync::Arc;

use crate::{api::Assets, build_search, config, config::Settings, error, server, warning};

pub async fn serve(open: bool) {
    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => error!("Cannot load configuration: {}", e),
    };

    let app = server::router(
        Arc::new(build_search(&settings)),
        Assets(config::assets_dir()),
    );
    let addr = config::server_addr();

    let server_addr = addr.clone();
    let handle = tokio::spawn(async move { server::start_api_server(&server_addr, app).await });

    if open {
        let url = format!("http://{}/", addr);
        if webbrowser::open(&url).is_err() {
            warning!("Failed to open browser. Please navigate to {} manually.", url);
        }
    }

    match handle.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => error!("Server stopped: {}", e),
        Err(e) => error!("Server task failed: {}", e),
    }
}
