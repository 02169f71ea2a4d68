//! Session verification — delegated entirely to an external provider.
//!
//! This service neither issues nor stores credentials; it only requires that
//! a verified identity be present before any oracle call is made. The
//! provider is behind a trait so handler tests can stub it.

use async_trait::async_trait;
use axum::http::HeaderMap;
use serde::Deserialize;
use tracing::warn;

use crate::errors::AppError;

/// A caller identity confirmed by the external session provider.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedUser {
    pub user_id: String,
}

#[async_trait]
pub trait SessionVerifier: Send + Sync {
    /// Verifies a bearer token, returning the caller's identity.
    /// Any failure — transport, non-2xx, unusable body — is `Unauthorized`.
    async fn verify(&self, token: &str) -> Result<VerifiedUser, AppError>;
}

/// Production verifier: asks the external session provider to validate the
/// token. The provider's response body carries the user id.
pub struct HttpSessionVerifier {
    client: reqwest::Client,
    verify_url: String,
}

#[derive(Debug, Deserialize)]
struct VerifyResponse {
    #[serde(alias = "userId", alias = "sub")]
    user_id: String,
}

impl HttpSessionVerifier {
    pub fn new(verify_url: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("Failed to build HTTP client"),
            verify_url,
        }
    }
}

#[async_trait]
impl SessionVerifier for HttpSessionVerifier {
    async fn verify(&self, token: &str) -> Result<VerifiedUser, AppError> {
        let response = self
            .client
            .get(&self.verify_url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| {
                warn!("session provider unreachable: {e}");
                AppError::Unauthorized
            })?;

        if !response.status().is_success() {
            return Err(AppError::Unauthorized);
        }

        let body: VerifyResponse = response.json().await.map_err(|e| {
            warn!("session provider returned unusable body: {e}");
            AppError::Unauthorized
        })?;

        Ok(VerifiedUser {
            user_id: body.user_id,
        })
    }
}

/// Extracts the bearer token from an Authorization header.
/// Missing or malformed headers are `Unauthorized`, not validation errors.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
        .ok_or(AppError::Unauthorized)
}
