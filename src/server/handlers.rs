//! HTTP handlers.

use axum::extract::{Query, State};
use axum::Json;

use super::types::AppState;
use crate::error_handling::QueryError;
use crate::query::RangeQuery;

/// Filtered prefix list.
///
/// The query string is taken as raw pairs so repeated keys reach
/// `RangeQuery::from_pairs` instead of failing extraction. Reads whichever
/// snapshot is current when the request arrives; never waits on the refresher.
pub async fn ranges_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<String>>, QueryError> {
    let query = RangeQuery::from_pairs(&pairs).map_err(|e| {
        log::debug!("Rejected ranges query {:?}: {:?}", pairs, e);
        e
    })?;

    let snapshot = state.cache.get();
    Ok(Json(query.apply(&snapshot)))
}
