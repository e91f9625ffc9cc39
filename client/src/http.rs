//! HTTP client for the wishlist REST service.
//!
//! Endpoints:
//! - `GET    {base}/wishlist`
//! - `POST   {base}/wishlist/{tourId}`
//! - `DELETE {base}/wishlist/{tourId}`
//!
//! The bearer token is taken from the [`SessionSignal`] on every request.

use crate::error::RemoteError;
use crate::remote::RemoteWishlist;
use crate::session::SessionSignal;
use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use std::time::Duration;
use wishlist_engine::RemoteRecord;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Remote wishlist backed by the REST API.
#[derive(Debug, Clone)]
pub struct HttpRemote {
    client: reqwest::Client,
    base_url: String,
    session: SessionSignal,
}

impl HttpRemote {
    pub fn new(
        base_url: impl Into<String>,
        session: SessionSignal,
        timeout: Duration,
    ) -> Result<Self, RemoteError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, RemoteError> {
        let token = self.session.token().ok_or(RemoteError::Unauthenticated)?;
        let url = format!("{}{}", self.base_url, path);
        Ok(self.client.request(method, url).bearer_auth(token))
    }

    fn item_path(tour_id: &str) -> String {
        format!("/wishlist/{}", urlencoding::encode(tour_id))
    }

    async fn check(response: Response) -> Result<Response, RemoteError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.text().await {
            Ok(body) if !body.is_empty() => body,
            _ => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
        };

        Err(RemoteError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl RemoteWishlist for HttpRemote {
    async fn list(&self) -> Result<Vec<RemoteRecord>, RemoteError> {
        let response = self.request(Method::GET, "/wishlist")?.send().await?;
        let response = Self::check(response).await?;

        response
            .json::<Vec<RemoteRecord>>()
            .await
            .map_err(|e| RemoteError::Decode(e.to_string()))
    }

    async fn add(&self, tour_id: &str) -> Result<RemoteRecord, RemoteError> {
        let response = self
            .request(Method::POST, &Self::item_path(tour_id))?
            .send()
            .await?;
        let response = Self::check(response).await?;

        response
            .json::<RemoteRecord>()
            .await
            .map_err(|e| RemoteError::Decode(e.to_string()))
    }

    async fn remove(&self, tour_id: &str) -> Result<(), RemoteError> {
        let response = self
            .request(Method::DELETE, &Self::item_path(tour_id))?
            .send()
            .await?;

        // Already gone
        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!(tour_id = %tour_id, "Tour was not on the remote wishlist");
            return Ok(());
        }

        Self::check(response).await?;
        Ok(())
    }
}
