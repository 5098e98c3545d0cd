//! Gift JSON API handlers.

use axum::Json;
use axum::extract::{Path, State};
use giftlist_core::Gift;
use serde::Serialize;

use crate::error::HttpError;
use crate::state::AppState;

/// List all gifts in id order.
///
/// Unlike the HTML page, a storage failure is reported as an error
/// instead of an empty list.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Gift>>, HttpError> {
    Ok(Json(state.registry.try_list_gifts().await?))
}

/// Response of a purchase attempt.
#[derive(Debug, Serialize)]
pub struct BuyResponse {
    /// True only when this request flipped the gift to bought.
    pub bought: bool,
}

/// Attempt to mark a gift as bought.
pub async fn buy(State(state): State<AppState>, Path(id): Path<String>) -> Json<BuyResponse> {
    let bought = state.registry.mark_bought(&id).await;
    Json(BuyResponse { bought })
}
