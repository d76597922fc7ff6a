use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use tracing::{debug, info};

use es_client::query;
use search_core::{annotate, summarize};

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    routes::search::{search_request::SearchParams, search_response::SearchResponse},
};

/// `GET /search?q=<text>&page=<n>`: full-text search over the index,
/// returning normalized summaries plus page metadata.
///
/// Missing `q` and out-of-range `page` are 422s; an unparseable query
/// string is a 400. The page bound is enforced in the query compiler,
/// before anything reaches the engine.
pub async fn search_route(
    State(state): State<Arc<AppState>>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> AppResult<Json<SearchResponse>> {
    let Query(params) = params?;

    let q = params
        .q
        .ok_or_else(|| AppError::Unprocessable("query argument missing".into()))?;
    let page = params.page.unwrap_or(0);

    debug!(query = %q, page, "search: start");

    let request = query::compile(&q, page, state.search.page_size, state.search.max_page)?;
    let body = state.es.search(&request).await?;

    let total = body.hits.total.value();
    let page_info = annotate(total, state.search.page_size);
    let hits: Vec<_> = body.hits.hits.iter().map(summarize).collect();

    info!(query = %q, page, total, returned = hits.len(), "search: ok");

    Ok(Json(SearchResponse {
        hits,
        total,
        page,
        page_size: page_info.page_size,
        page_count: page_info.page_count,
    }))
}
