use crate::extract::{ValidJson, ValidQuery};
use crate::models::{TradesQuery, TradesResponse};
use crate::state::AppState;
use axum::{extract::State, Json};
use types::trade::Trade;

/// GET /trades/?limit=5&offset=0
pub async fn get_trades(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<TradesQuery>,
) -> Json<Vec<Trade>> {
    Json(state.store.list_trades(query.limit, query.offset))
}

/// POST /trades/
///
/// The body is validated as a whole before anything is stored: one bad
/// trade rejects the entire batch.
pub async fn add_trades(
    State(state): State<AppState>,
    ValidJson(trades): ValidJson<Vec<Trade>>,
) -> Json<TradesResponse> {
    Json(TradesResponse::ok(state.store.append_trades(trades)))
}
