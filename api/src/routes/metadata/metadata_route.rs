use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::debug;

use search_core::{cid, metadata::MetadataRecord, project};

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
};

/// `GET /metadata/{cid}/`: the full stored metadata for one document,
/// with the engine-assigned version and type injected.
///
/// The identifier is validated syntactically before any engine call;
/// malformed identifiers are 400s, unknown ones 404s.
pub async fn metadata_route(
    State(state): State<Arc<AppState>>,
    Path(cid): Path<String>,
) -> AppResult<Json<MetadataRecord>> {
    if !cid::validate(&cid) {
        return Err(AppError::BadRequest("invalid cid".into()));
    }

    debug!(%cid, "metadata: start");

    let document = state.es.get_metadata(&cid).await?;
    Ok(Json(project(&document)))
}
