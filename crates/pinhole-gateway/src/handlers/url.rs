use crate::error::{GatewayError, Result};
use crate::model::{ResolveUrlResponse, ShortenUrlRequest, ShortenUrlResponse};
use crate::state::AppState;
use crate::validate::validate_url;
use axum::extract::{Path, State};
use axum::Json;
use pinhole_core::ShortId;
use tracing::info;

pub async fn shorten_url_handler(
    State(state): State<AppState>,
    Json(request): Json<ShortenUrlRequest>,
) -> Result<Json<ShortenUrlResponse>> {
    validate_url(&request.original_url).map_err(GatewayError::InvalidRequest)?;

    let shortened = state.shortener().shorten(&request.original_url).await?;
    info!(url = %request.original_url, id = %shortened.short_id, "shortened url");

    Ok(Json(ShortenUrlResponse {
        short_url: shortened.short_url,
        short_id: shortened.short_id.to_string(),
    }))
}

pub async fn resolve_url_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ResolveUrlResponse>> {
    let id = ShortId::new(short_id);

    match state.shortener().resolve(&id).await? {
        Some(original_url) => Ok(Json(ResolveUrlResponse { original_url })),
        None => Err(GatewayError::NotFound),
    }
}
