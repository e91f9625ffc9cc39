//! Authentication extractor.
//!
//! Every wishlist request must carry `Authorization: Bearer <token>`. Tokens
//! resolve to a user through the `api_tokens` table, or are taken as the user
//! id directly when `WISHLIST_DEV_AUTH` is enabled.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::db;
use crate::error::AppError;
use crate::AppState;

/// Authenticated user extracted from request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    /// Owner of the wishlist being accessed
    pub user_id: String,
}

/// Extract the token from an `Authorization` header value.
pub fn bearer_token(header: &str) -> Option<&str> {
    let token = header.strip_prefix("Bearer ")?.trim();
    (!token.is_empty()).then_some(token)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AppError::Unauthorized("Missing authorization header"))?;

        let token = bearer_token(header)
            .ok_or(AppError::Unauthorized("Invalid authorization header format"))?;

        if state.config.dev_auth {
            return Ok(AuthUser {
                user_id: token.to_string(),
            });
        }

        match db::find_token_user(&state.pool, token).await? {
            Some(user_id) => Ok(AuthUser { user_id }),
            None => {
                tracing::debug!("Rejected unknown bearer token");
                Err(AppError::Unauthorized("Unknown token"))
            }
        }
    }
}
