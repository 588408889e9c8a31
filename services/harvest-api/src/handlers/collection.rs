use std::sync::Arc;

use axum::{extract::Extension, response::IntoResponse, response::Response, Json};

use crate::metrics::record_request;
use crate::state::AppState;

/// GET /coll - The whole ingested collection
pub async fn collection_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    record_request("coll");
    Json(&state.collection).into_response()
}
