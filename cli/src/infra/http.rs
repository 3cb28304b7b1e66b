//! Infrastructure implementation of the `RestGateway` port on reqwest.

use anyhow::{Context, Result};

use crate::application::ports::{ApiAuth, ApiResponse, RestGateway};

/// Tenant-scoping header required by the Discovery Engine API.
const USER_PROJECT_HEADER: &str = "X-Goog-User-Project";

/// Production `RestGateway` backed by a shared reqwest client.
pub struct ReqwestGateway {
    client: reqwest::Client,
}

impl ReqwestGateway {
    /// Build a gateway with a fresh client.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("talk2api-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("building HTTP client")?;
        Ok(Self { client })
    }

    async fn into_response(response: reqwest::Response) -> Result<ApiResponse> {
        let status = response.status().as_u16();
        let body = response.text().await.context("reading response body")?;
        Ok(ApiResponse { status, body })
    }
}

impl RestGateway for ReqwestGateway {
    async fn post_json(
        &self,
        url: &str,
        auth: &ApiAuth,
        body: &serde_json::Value,
    ) -> Result<ApiResponse> {
        let response = self
            .client
            .post(url)
            .bearer_auth(&auth.bearer_token)
            .header(USER_PROJECT_HEADER, &auth.user_project)
            .json(body)
            .send()
            .await
            .with_context(|| format!("POST {url}"))?;
        Self::into_response(response).await
    }

    async fn get(&self, url: &str, auth: &ApiAuth) -> Result<ApiResponse> {
        let response = self
            .client
            .get(url)
            .bearer_auth(&auth.bearer_token)
            .header(USER_PROJECT_HEADER, &auth.user_project)
            .send()
            .await
            .with_context(|| format!("GET {url}"))?;
        Self::into_response(response).await
    }
}
