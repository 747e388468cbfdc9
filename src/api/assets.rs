use std::{path::PathBuf, sync::Arc};

use axum::{
    Extension,
    extract::Path,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::utils;

/// Directory served under `/images`.
#[derive(Debug, Clone)]
pub struct Assets(pub PathBuf);

pub async fn image(
    Path(file): Path<String>,
    Extension(assets): Extension<Arc<Assets>>,
) -> Response {
    // only plain file names, nothing outside the assets directory
    if file.contains('/') || file.contains('\\') || file.starts_with('.') {
        return not_found().await.into_response();
    }

    match async_fs::read(assets.0.join(&file)).await {
        Ok(bytes) => (
            [(header::CONTENT_TYPE, utils::content_type_for(&file))],
            bytes,
        )
            .into_response(),
        Err(_) => not_found().await.into_response(),
    }
}

pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404 Not Found")
}
