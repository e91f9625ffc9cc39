//! Wishlist endpoint routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use wishlist_engine::RemoteRecord;

use crate::auth::AuthUser;
use crate::error::Result;
use crate::handlers::{handle_add, handle_list, handle_remove};
use crate::AppState;

/// Create wishlist routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/wishlist", get(list_handler))
        .route("/wishlist/{tour_id}", post(add_handler).delete(remove_handler))
}

/// GET /wishlist - The caller's wishlist, oldest first.
async fn list_handler(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<RemoteRecord>>> {
    let records = handle_list(&state.pool, &auth.user_id).await?;
    Ok(Json(records))
}

/// POST /wishlist/{tour_id} - 201 when created, 200 when already present.
async fn add_handler(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(tour_id): Path<String>,
) -> Result<(StatusCode, Json<RemoteRecord>)> {
    let outcome = handle_add(&state.pool, &auth.user_id, &tour_id).await?;
    let status = if outcome.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(outcome.record)))
}

/// DELETE /wishlist/{tour_id} - 204 whether or not the tour was a member.
async fn remove_handler(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(tour_id): Path<String>,
) -> Result<StatusCode> {
    handle_remove(&state.pool, &auth.user_id, &tour_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
