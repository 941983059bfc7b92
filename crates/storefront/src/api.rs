//! REST client for the mock backend.
//!
//! Wraps the HTTP verbs against `{base}/products` and `{base}/categories`,
//! and normalizes fixture image paths on every product payload so templates
//! can use them as-is.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use urban_gent_core::{Category, Product};

/// Errors that can occur when talking to the mock backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("API error: {status} {text}")]
    Status { status: u16, text: String },

    /// The request or response body was not the expected JSON.
    #[error("invalid JSON in API exchange: {0}")]
    Json(#[from] serde_json::Error),
}

/// Client for the mock REST backend.
///
/// Cheaply cloneable via `Arc`. Every call is a single unguarded request:
/// no caching, no retries.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base: String,
}

impl ApiClient {
    /// Create a new client for the backend at `base`.
    #[must_use]
    pub fn new(base: &Url) -> Self {
        Self {
            inner: Arc::new(ApiClientInner {
                client: reqwest::Client::new(),
                base: base.as_str().trim_end_matches('/').to_owned(),
            }),
        }
    }

    /// GET `endpoint` and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, non-2xx status, or an
    /// undecodable body.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.execute(reqwest::Method::GET, endpoint, None).await
    }

    /// POST `body` to `endpoint` and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, non-2xx status, or an
    /// undecodable body.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body)?;
        self.execute(reqwest::Method::POST, endpoint, Some(body))
            .await
    }

    /// PATCH `endpoint` with `body` and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, non-2xx status, or an
    /// undecodable body.
    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body)?;
        self.execute(reqwest::Method::PATCH, endpoint, Some(body))
            .await
    }

    /// DELETE `endpoint` and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, non-2xx status, or an
    /// undecodable body.
    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.execute(reqwest::Method::DELETE, endpoint, None).await
    }

    /// Fetch all products, with image paths normalized.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the backend is unreachable or misbehaves.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, ApiError> {
        let mut products: Vec<Product> = self.get("/products").await?;
        for product in &mut products {
            for image in &mut product.images {
                *image = normalize_image_path(image);
            }
        }
        Ok(products)
    }

    /// Fetch all categories.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the backend is unreachable or misbehaves.
    pub async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get("/categories").await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: reqwest::Method,
        endpoint: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        let url = format!("{}{endpoint}", self.inner.base);

        let mut request = self.inner.client.request(method.clone(), &url);
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        // Read the body as text first for better error diagnostics
        let text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                %method,
                endpoint,
                status = status.as_u16(),
                body = %text.chars().take(500).collect::<String>(),
                "mock API returned non-success status"
            );
            return Err(ApiError::Status {
                status: status.as_u16(),
                text: status.canonical_reason().unwrap_or("unknown").to_owned(),
            });
        }

        match serde_json::from_str(&text) {
            Ok(value) => {
                tracing::debug!(%method, endpoint, "API request succeeded");
                Ok(value)
            }
            Err(error) => {
                tracing::error!(
                    %method,
                    endpoint,
                    %error,
                    body = %text.chars().take(500).collect::<String>(),
                    "failed to decode API response"
                );
                Err(error.into())
            }
        }
    }
}

/// Normalize a fixture image path to one usable relative to the app root.
///
/// - Full URLs pass through unchanged
/// - `assets/...` paths are already correct
/// - A leading `/assets/` slash is stripped
/// - Bare filenames are placed under `assets/images/`
#[must_use]
pub fn normalize_image_path(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }
    if path.starts_with("http") || path.starts_with("assets/") {
        return path.to_owned();
    }
    if let Some(rest) = path.strip_prefix("/assets/") {
        return format!("assets/{rest}");
    }
    if !path.contains('/') {
        return format!("assets/images/{path}");
    }
    path.to_owned()
}
