//! Per-unit lookup.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use harvest_report::UnitId;
use tracing::debug;

use crate::metrics::{record_invalid_unit, record_request};
use crate::state::AppState;

/// GET /unit/:unit - Records for one game management unit
///
/// Unknown units answer with an empty array. An id that is not an integer
/// answers 500 with no body.
pub async fn unit_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(unit): Path<String>,
) -> Response {
    record_request("unit");

    let unit: UnitId = match unit.parse() {
        Ok(id) => id,
        Err(e) => {
            debug!(unit = %unit, error = %e, "Unit id is not an integer");
            record_invalid_unit();
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, "application/json")],
            )
                .into_response();
        }
    };

    Json(state.collection.unit(unit)).into_response()
}
