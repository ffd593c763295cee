// SPDX-License-Identifier: MPL-2.0
//! Thin REST client for the food backend.
//!
//! Every endpoint has a `*_request` builder producing a [`reqwest::Request`]
//! and an async method that executes it. Responses are decoded from JSON into
//! the wire records of [`models`]; mapping into display records happens in the
//! screens.
//!
//! There are no retries and no caching: a call either yields the decoded body
//! or an [`ApiError`].

pub mod models;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::food::{CategoryId, FoodId};
use models::{CategoryRecord, FavoritePayload, FoodDetailsRecord, FoodRecord};
use reqwest::{Method, Request, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

const USER_AGENT: &str = concat!("IcedFood/", env!("CARGO_PKG_VERSION"));

pub type ApiResult<T> = Result<T, ApiError>;

/// Dashboard filters sent as `GET /foods` query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodFilter {
    /// Sent as `category_like` when set.
    pub category: Option<CategoryId>,
    /// Sent as `name_like` when not blank.
    pub search: String,
}

impl FoodFilter {
    fn query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(category) = self.category {
            params.push(("category_like", category.to_string()));
        }
        let search = self.search.trim();
        if !search.is_empty() {
            params.push(("name_like", search.to_string()));
        }
        params
    }
}

/// Cloneable handle to the backend. Clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Builds a client from the `[api]` config section.
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        Self::with_base_url(&config.base_url, config.timeout())
    }

    pub fn with_base_url(base_url: &str, timeout: Duration) -> ApiResult<Self> {
        let mut base_url =
            Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }
        // Endpoint paths are joined relative to the base, which needs a trailing slash
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> ApiResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))
    }

    fn build(&self, method: Method, path: &str) -> ApiResult<reqwest::RequestBuilder> {
        Ok(self.http.request(method, self.endpoint(path)?))
    }

    // =========================================================================
    // Request builders
    // =========================================================================

    pub fn foods_request(&self, filter: &FoodFilter) -> ApiResult<Request> {
        let mut builder = self.build(Method::GET, "foods")?;
        let params = filter.query();
        if !params.is_empty() {
            builder = builder.query(&params);
        }
        Ok(builder.build()?)
    }

    pub fn categories_request(&self) -> ApiResult<Request> {
        Ok(self.build(Method::GET, "categories")?.build()?)
    }

    pub fn food_details_request(&self, id: FoodId) -> ApiResult<Request> {
        Ok(self.build(Method::GET, &format!("foods/{id}"))?.build()?)
    }

    pub fn favorites_request(&self) -> ApiResult<Request> {
        Ok(self.build(Method::GET, "favorites")?.build()?)
    }

    pub fn add_favorite_request(&self, payload: &FavoritePayload) -> ApiResult<Request> {
        Ok(self
            .build(Method::POST, "favorites")?
            .json(payload)
            .build()?)
    }

    pub fn remove_favorite_request(&self, id: FoodId) -> ApiResult<Request> {
        Ok(self
            .build(Method::DELETE, &format!("favorites/{id}"))?
            .build()?)
    }

    // =========================================================================
    // Calls
    // =========================================================================

    /// `GET /foods` with the dashboard filters.
    pub async fn foods(&self, filter: &FoodFilter) -> ApiResult<Vec<FoodRecord>> {
        let request = self.foods_request(filter)?;
        self.send_json(request).await
    }

    /// `GET /categories`.
    pub async fn categories(&self) -> ApiResult<Vec<CategoryRecord>> {
        let request = self.categories_request()?;
        self.send_json(request).await
    }

    /// `GET /foods/:id`, extras included.
    pub async fn food_details(&self, id: FoodId) -> ApiResult<FoodDetailsRecord> {
        let request = self.food_details_request(id)?;
        self.send_json(request).await
    }

    /// `GET /favorites`.
    pub async fn favorites(&self) -> ApiResult<Vec<FoodRecord>> {
        let request = self.favorites_request()?;
        self.send_json(request).await
    }

    /// `POST /favorites`. The response body is ignored.
    pub async fn add_favorite(&self, payload: &FavoritePayload) -> ApiResult<()> {
        let request = self.add_favorite_request(payload)?;
        self.send(request).await.map(drop)
    }

    /// `DELETE /favorites/:id`.
    pub async fn remove_favorite(&self, id: FoodId) -> ApiResult<()> {
        let request = self.remove_favorite_request(id)?;
        self.send(request).await.map(drop)
    }

    /// Downloads an absolute URL (thumbnails, category icons).
    pub async fn fetch_bytes(&self, url: &str) -> ApiResult<Vec<u8>> {
        let url = Url::parse(url).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        let request = self.http.get(url).build()?;
        let response = self.send(request).await?;
        Ok(response.bytes().await?.to_vec())
    }

    async fn send(&self, request: Request) -> ApiResult<reqwest::Response> {
        let method = request.method().clone();
        let url = request.url().clone();
        tracing::debug!(%method, %url, "api request");

        let response = self.http.execute(request).await.map_err(|err| {
            tracing::warn!(%method, %url, error = %err, "api request failed");
            ApiError::from(err)
        })?;

        if let Some(err) = ApiError::from_status(response.status()) {
            tracing::warn!(%method, %url, status = %response.status(), "api request rejected");
            return Err(err);
        }
        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: Request) -> ApiResult<T> {
        let response = self.send(request).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
