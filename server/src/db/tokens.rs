//! Bearer token lookup.

use sqlx::PgPool;

/// Resolve a bearer token to the user it was issued to.
pub async fn find_token_user(pool: &PgPool, token: &str) -> Result<Option<String>, sqlx::Error> {
    let row: Option<(String,)> = sqlx::query_as(r#"SELECT user_id FROM api_tokens WHERE token = $1"#)
        .bind(token)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|(user_id,)| user_id))
}
