//! HTTP client with automatic rate limiting and retry logic
//!
//! Every outbound lookup goes through this client so the per-service request
//! budget and the retry policy live in one place.

use super::retry_policy::{is_retryable_error, is_retryable_status, RateLimitInfo, RetryPolicy};
use crate::shared::errors::{AppError, AppResult};
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use reqwest::{Client, Response};
use std::num::NonZeroU32;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// HTTP client that waits for its rate limiter and retries transient failures
pub struct RateLimitClient {
    client: Client,
    rate_limiter: DefaultDirectRateLimiter,
    retry_policy: RetryPolicy,
    service_name: String,
}

impl RateLimitClient {
    /// Create a client for the MusicBrainz web service (1 req/sec, no burst)
    pub fn for_musicbrainz(user_agent: &str, timeout: Duration) -> AppResult<Self> {
        Self::new(
            "MusicBrainz",
            RetryPolicy::musicbrainz(),
            Self::create_rate_limiter(1.0, 1),
            user_agent,
            timeout,
        )
    }

    /// Create a rate limiter with specified requests per second and burst capacity
    pub fn create_rate_limiter(requests_per_second: f64, burst_size: u32) -> DefaultDirectRateLimiter {
        let period = if requests_per_second > 0.0 {
            Duration::from_secs_f64(1.0 / requests_per_second)
        } else {
            Duration::MAX // Effectively disable if rate is 0
        };

        let burst = NonZeroU32::new(burst_size.max(1)).unwrap_or(NonZeroU32::MIN);
        let quota = Quota::with_period(period)
            .unwrap_or_else(|| Quota::per_second(NonZeroU32::MIN))
            .allow_burst(burst);

        RateLimiter::direct(quota)
    }

    /// Create a custom client
    pub fn new(
        service_name: &str,
        retry_policy: RetryPolicy,
        rate_limiter: DefaultDirectRateLimiter,
        user_agent: &str,
        timeout: Duration,
    ) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            rate_limiter,
            retry_policy,
            service_name: service_name.to_string(),
        })
    }

    /// Make a GET request and decode the JSON body
    pub async fn get<T>(&self, url: &str) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let attempts = self.retry_policy.max_retries + 1;

        for attempt in 0..attempts {
            let is_last = attempt + 1 == attempts;

            // Wait for rate limiter before attempting request
            self.rate_limiter.until_ready().await;

            let response = match self.send(url).await {
                Ok(response) => response,
                Err(e) => {
                    if is_retryable_error(&e) && !is_last {
                        let delay = self.retry_policy.calculate_delay(attempt, None);
                        warn!(
                            "{} request failed (attempt {}/{}): {}. Retrying in {:?}",
                            self.service_name,
                            attempt + 1,
                            attempts,
                            e,
                            delay
                        );
                        sleep(delay).await;
                        continue;
                    }
                    return Err(e.into());
                }
            };

            let status = response.status();
            if status.is_success() {
                return self.parse_response(response).await;
            }

            if is_retryable_status(status.as_u16()) && !is_last {
                let info = RateLimitInfo::from_headers(response.headers());
                let delay = self.retry_policy.calculate_delay(attempt, info.retry_after);
                warn!(
                    "{} returned {} (attempt {}/{}). Waiting {:?} before retry.",
                    self.service_name,
                    status,
                    attempt + 1,
                    attempts,
                    delay
                );
                sleep(delay).await;
                continue;
            }

            return Err(self.status_error(status));
        }

        Err(AppError::ExternalServiceError(format!(
            "{} request failed after {} attempts",
            self.service_name, attempts
        )))
    }

    async fn send(&self, url: &str) -> Result<Response, reqwest::Error> {
        debug!("{} GET {}", self.service_name, url);
        self.client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
    }

    fn status_error(&self, status: reqwest::StatusCode) -> AppError {
        match status.as_u16() {
            429 => AppError::RateLimitError(format!(
                "{} rate limit exceeded after {} attempts",
                self.service_name,
                self.retry_policy.max_retries + 1
            )),
            404 => AppError::NotFound(format!("{} resource not found", self.service_name)),
            401 | 403 => AppError::Unauthorized(format!(
                "Not authorized to access {}",
                self.service_name
            )),
            500..=599 => AppError::ExternalServiceError(format!(
                "{} service unavailable: {}",
                self.service_name, status
            )),
            _ => AppError::ApiError(format!(
                "Unexpected status code from {}: {}",
                self.service_name, status
            )),
        }
    }

    /// Decode a successful response body
    async fn parse_response<T>(&self, response: Response) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response_text = response.text().await.map_err(|e| {
            AppError::ExternalServiceError(format!(
                "Failed to read {} response: {}",
                self.service_name, e
            ))
        })?;

        serde_json::from_str(&response_text).map_err(|e| {
            AppError::SerializationError(format!(
                "Failed to parse {} response: {}. Response: {}",
                self.service_name,
                e,
                response_text.chars().take(200).collect::<String>()
            ))
        })
    }

    /// Check if a request can be made now (for testing/debugging)
    pub fn can_make_request_now(&self) -> bool {
        self.rate_limiter.check().is_ok()
    }

    /// Get service name
    pub fn service_name(&self) -> &str {
        &self.service_name
    }
}
