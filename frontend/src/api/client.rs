use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::{api::types::ApiError, config};

/// Thin transport wrapper around the REST store.
///
/// Every failure is normalized to a single human-readable message before it
/// reaches view logic: a server-supplied `detail` field when present, the raw
/// error payload when the shape is unrecognized, a generic transport message
/// otherwise.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn send_json<T>(&self, request: RequestBuilder) -> Result<T, String>
    where
        T: DeserializeOwned,
    {
        let response = request
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;
        Self::map_json_response(response).await
    }

    pub(crate) async fn send_empty(&self, request: RequestBuilder) -> Result<(), String> {
        let response = request
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::normalize_error_body(response).await)
        }
    }

    async fn map_json_response<T>(response: Response) -> Result<T, String>
    where
        T: DeserializeOwned,
    {
        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| format!("Failed to parse response: {}", e))
        } else {
            Err(Self::normalize_error_body(response).await)
        }
    }

    async fn normalize_error_body(response: Response) -> String {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<ApiError>(&body) {
            Ok(error) => error.detail,
            Err(_) if !body.trim().is_empty() => body,
            Err(_) => format!("Request failed with status {}", status),
        }
    }
}
