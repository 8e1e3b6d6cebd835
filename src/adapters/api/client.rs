//! Event API client
//!
//! This module implements the HTTP client for the two event endpoints:
//! the partner dataset (GET) and the result submission (POST). Both carry
//! the opaque `userKey` credential as a query parameter. The key is sent
//! with each request but never appears in log output or built URLs.

use crate::config::ApiConfig;
use crate::domain::partner::PartnerDataset;
use crate::domain::summary::{CountrySummary, SubmissionPayload};
use crate::domain::{ApiError, Result, SummitError};
use reqwest::{Client, ClientBuilder, StatusCode};
use secrecy::ExposeSecret;
use std::time::Duration;

/// Client for the event API
///
/// Wraps a reqwest client configured from [`ApiConfig`] and maps transport
/// and HTTP failures into [`ApiError`] values, so callers never see
/// third-party error types.
pub struct EventApiClient {
    base_url: String,
    client: Client,
    config: ApiConfig,
}

impl EventApiClient {
    /// Create a new event API client from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use summit::adapters::api::EventApiClient;
    /// use summit::config::{secret_string, ApiConfig, RetryConfig};
    ///
    /// # fn example() -> summit::domain::Result<()> {
    /// let config = ApiConfig {
    ///     base_url: "https://events.example.com".to_string(),
    ///     dataset_path: "/api/dataset".to_string(),
    ///     result_path: "/api/result".to_string(),
    ///     user_key: secret_string("my-user-key".to_string()),
    ///     timeout_seconds: 30,
    ///     tls_verify: true,
    ///     retry: RetryConfig::default(),
    /// };
    /// let client = EventApiClient::new(config)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(config: ApiConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();

        // Build HTTP client with TLS configuration
        let mut client_builder = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(30));

        if !config.tls_verify {
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        let client = client_builder
            .build()
            .map_err(|e| SummitError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url,
            client,
            config,
        })
    }

    /// Get the base URL of the event API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the partner dataset
    ///
    /// Performs a GET against the dataset endpoint and deserializes the
    /// `{ "partners": [...] }` envelope. A payload without a `partners`
    /// key comes back as an empty dataset; deciding what that means is
    /// left to the caller.
    pub async fn fetch_partners(&self) -> Result<PartnerDataset> {
        let url = format!("{}{}", self.base_url, self.config.dataset_path);

        tracing::debug!(path = %self.config.dataset_path, "Fetching partner dataset");

        let dataset = self
            .retry_request(|| async {
                let resp = self
                    .client
                    .get(&url)
                    .query(&[("userKey", self.config.user_key.expose_secret().as_ref())])
                    .send()
                    .await
                    .map_err(map_send_error)?;

                let status = resp.status();
                if !status.is_success() {
                    let body = resp.text().await.unwrap_or_default();
                    return Err(SummitError::Api(map_status_error(status, body)));
                }

                resp.json::<PartnerDataset>()
                    .await
                    .map_err(|e| SummitError::Api(ApiError::InvalidResponse(e.to_string())))
            })
            .await?;

        tracing::info!(
            partner_count = dataset.partners.len(),
            "Fetched partner dataset"
        );

        Ok(dataset)
    }

    /// Submit the per-country results
    ///
    /// Performs a POST against the result endpoint with a JSON body of the
    /// form `{ "countries": [...] }` and returns the raw response body.
    pub async fn submit_countries(&self, countries: &[CountrySummary]) -> Result<String> {
        let url = format!("{}{}", self.base_url, self.config.result_path);
        let payload = SubmissionPayload {
            countries: countries.to_vec(),
        };

        tracing::debug!(
            path = %self.config.result_path,
            country_count = countries.len(),
            "Submitting country results"
        );

        let body = self
            .retry_request(|| async {
                let resp = self
                    .client
                    .post(&url)
                    .query(&[("userKey", self.config.user_key.expose_secret().as_ref())])
                    .json(&payload)
                    .send()
                    .await
                    .map_err(map_send_error)?;

                let status = resp.status();
                if !status.is_success() {
                    let body = resp.text().await.unwrap_or_default();
                    return Err(SummitError::Api(map_status_error(status, body)));
                }

                resp.text()
                    .await
                    .map_err(|e| SummitError::Api(ApiError::InvalidResponse(e.to_string())))
            })
            .await?;

        tracing::info!(country_count = countries.len(), "Submitted country results");

        Ok(body)
    }

    /// Retry a request with exponential backoff
    async fn retry_request<F, T, Fut>(&self, operation: F) -> Result<T>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<T>>,
    {
        let max_retries = self.config.retry.max_retries;
        let mut attempt = 0;

        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    attempt += 1;
                    if attempt >= max_retries {
                        return Err(e);
                    }

                    // Calculate backoff delay
                    let delay_ms = (self.config.retry.initial_delay_ms as f64
                        * self.config.retry.backoff_multiplier.powf((attempt - 1) as f64))
                        as u64;
                    let delay_ms = delay_ms.min(self.config.retry.max_delay_ms);

                    tracing::warn!(
                        attempt = attempt,
                        max_retries = max_retries,
                        delay_ms = delay_ms,
                        error = %e,
                        "Retrying request after error"
                    );

                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                }
            }
        }
    }
}

/// Map a transport-level reqwest failure into a domain error
fn map_send_error(e: reqwest::Error) -> SummitError {
    let err = if e.is_timeout() {
        ApiError::Timeout(e.to_string())
    } else {
        ApiError::ConnectionFailed(e.to_string())
    };
    SummitError::Api(err)
}

/// Map a non-success HTTP status into a domain error
fn map_status_error(status: StatusCode, body: String) -> ApiError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            ApiError::AuthenticationFailed(format!("status {status}: {body}"))
        }
        StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimitExceeded(body),
        StatusCode::REQUEST_TIMEOUT => ApiError::Timeout(format!("status {status}: {body}")),
        status if status.is_client_error() => ApiError::ClientError {
            status: status.as_u16(),
            message: body,
        },
        status if status.is_server_error() => ApiError::ServerError {
            status: status.as_u16(),
            message: body,
        },
        status => ApiError::InvalidResponse(format!("unexpected status {status}: {body}")),
    }
}
