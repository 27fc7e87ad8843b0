use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{RequestBuilder, Response};
use serde::Deserialize;
use tracing::{debug, warn};

use jargon_core::{NewSlangTerm, SlangTerm};

use crate::config::ApiConfig;
use crate::error::{body_snippet, classify, ApiError};

/// Search envelope; a body without a `results` field is an empty result.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SlangTerm>,
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    #[serde(default)]
    status: String,
}

/// Typed client for the slang dictionary service.
///
/// Holds one connection pool; all operations go through `&self` and may be
/// awaited concurrently. No state is mutated after construction.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|err| {
                warn!(error = %err, "http client could not be constructed");
                ApiError::Setup(err)
            })?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Full-text search. The query is sent URL-escaped as `q`; an empty or
    /// whitespace query still issues the request.
    pub async fn search(&self, query: &str) -> Result<Vec<SlangTerm>, ApiError> {
        let req = self
            .http
            .get(self.config.endpoint("/search"))
            .query(&[("q", query)]);
        let resp = self.send("GET", "/search", req).await?;
        let body: SearchResponse = resp.json().await.map_err(|e| classify("/search", e))?;
        Ok(body.results)
    }

    pub async fn get_details(&self, id: i64) -> Result<SlangTerm, ApiError> {
        let path = format!("/slang/{id}");
        let resp = self
            .send("GET", &path, self.http.get(self.config.endpoint(&path)))
            .await?;
        resp.json().await.map_err(|e| classify(&path, e))
    }

    /// Submit a new term. Validates locally first; a rejected payload never
    /// reaches the network.
    pub async fn submit(&self, term: &NewSlangTerm) -> Result<SlangTerm, ApiError> {
        term.validate()?;
        let req = self.http.post(self.config.endpoint("/slang")).json(term);
        let resp = self.send("POST", "/slang", req).await?;
        resp.json().await.map_err(|e| classify("/slang", e))
    }

    /// Update an existing term; same validation as [`ApiClient::submit`].
    pub async fn update(&self, id: i64, term: &NewSlangTerm) -> Result<SlangTerm, ApiError> {
        term.validate()?;
        let path = format!("/slang/{id}");
        let req = self.http.put(self.config.endpoint(&path)).json(term);
        let resp = self.send("PUT", &path, req).await?;
        resp.json().await.map_err(|e| classify(&path, e))
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let path = format!("/slang/{id}");
        self.send("DELETE", &path, self.http.delete(self.config.endpoint(&path)))
            .await?;
        Ok(())
    }

    /// Paginated listing, newest first.
    pub async fn list(&self, skip: u32, limit: u32) -> Result<Vec<SlangTerm>, ApiError> {
        let req = self
            .http
            .get(self.config.endpoint("/slang"))
            .query(&[("skip", skip), ("limit", limit)]);
        let resp = self.send("GET", "/slang", req).await?;
        resp.json().await.map_err(|e| classify("/slang", e))
    }

    /// Terms with the most recent activity over the last `days`.
    pub async fn trending(&self, limit: u32, days: u32) -> Result<Vec<SlangTerm>, ApiError> {
        let req = self
            .http
            .get(self.config.endpoint("/search/trending"))
            .query(&[("limit", limit), ("days", days)]);
        let resp = self.send("GET", "/search/trending", req).await?;
        resp.json()
            .await
            .map_err(|e| classify("/search/trending", e))
    }

    /// All-time most-voted terms.
    pub async fn popular(&self, limit: u32) -> Result<Vec<SlangTerm>, ApiError> {
        let req = self
            .http
            .get(self.config.endpoint("/search/popular"))
            .query(&[("limit", limit)]);
        let resp = self.send("GET", "/search/popular", req).await?;
        resp.json().await.map_err(|e| classify("/search/popular", e))
    }

    /// Liveness probe. `true` iff the service answered 2xx with a body
    /// whose `status` field is exactly `"healthy"`; every failure mode is
    /// absorbed into `false`.
    pub async fn health_check(&self) -> bool {
        debug!(path = "/health", "GET");
        match self.http.get(self.config.endpoint("/health")).send().await {
            Ok(resp) if resp.status().is_success() => {
                match resp.json::<HealthResponse>().await {
                    Ok(health) => health.status == "healthy",
                    Err(err) => {
                        debug!(error = %err, "health probe body malformed");
                        false
                    }
                }
            }
            Ok(resp) => {
                debug!(status = resp.status().as_u16(), "health probe rejected");
                false
            }
            Err(err) => {
                debug!(error = %err, "health probe unreachable");
                false
            }
        }
    }

    /// Send one request: log it, surface non-2xx as [`ApiError::Status`]
    /// with a body excerpt, classify transport failures.
    async fn send(
        &self,
        method: &str,
        path: &str,
        req: RequestBuilder,
    ) -> Result<Response, ApiError> {
        debug!(method, path, "request");
        let resp = req.send().await.map_err(|e| classify(path, e))?;

        let status = resp.status();
        if !status.is_success() {
            let body = body_snippet(resp.text().await.unwrap_or_default());
            warn!(status = status.as_u16(), path, body = %body, "server returned error");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!(status = status.as_u16(), path, "response");
        Ok(resp)
    }
}
