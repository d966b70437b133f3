//! Shared HTTP client for the external travel data services
//!
//! Every outbound call goes through [`ApiClient`], which waits a fixed delay
//! before sending (the public OpenStreetMap services ask for roughly one
//! request per second), applies the per-service timeout, and maps transport
//! failures to [`TourAiError::Api`]. There are no retries.

use crate::config::HttpConfig;
use crate::{ErrorCode, Result, TourAiError};
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Responses slower than this are logged as a warning.
const SLOW_RESPONSE: Duration = Duration::from_secs(5);

/// Fixed pause taken before each outbound request
#[derive(Debug, Clone, Copy)]
pub struct RequestThrottle {
    delay: Duration,
}

impl RequestThrottle {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Block the calling thread for the configured delay
    pub fn wait(&self) {
        if !self.delay.is_zero() {
            debug!("Throttling for {}ms", self.delay.as_millis());
            thread::sleep(self.delay);
        }
    }
}

/// Blocking HTTP client bound to one external service
pub struct ApiClient {
    /// Service label used in logs
    service: &'static str,
    /// HTTP client
    client: Client,
    /// Delay before each request
    throttle: RequestThrottle,
}

impl ApiClient {
    /// Create a new client with the shared HTTP settings and a service timeout
    pub fn new(service: &'static str, http: &HttpConfig, timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .user_agent(http.user_agent.as_str())
            .build()
            .map_err(|e| {
                TourAiError::config(format!("Failed to create HTTP client for {service}: {e}"))
            })?;

        Ok(Self {
            service,
            client,
            throttle: RequestThrottle::new(http.request_delay()),
        })
    }

    #[must_use]
    pub fn service(&self) -> &'static str {
        self.service
    }

    /// GET `url` and decode the JSON body
    #[instrument(skip(self), fields(service = self.service))]
    pub fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.send(self.client.get(url))?;
        Self::decode(response)
    }

    /// POST `form` as `application/x-www-form-urlencoded` and decode the JSON body
    #[instrument(skip(self, form), fields(service = self.service))]
    pub fn post_form_json<T: DeserializeOwned>(&self, url: &str, form: &[(&str, &str)]) -> Result<T> {
        let response = self.send(self.client.post(url).form(form))?;
        Self::decode(response)
    }

    fn send(&self, request: RequestBuilder) -> Result<Response> {
        self.throttle.wait();

        let start = Instant::now();
        let response = request.send().map_err(|e| {
            warn!("{} request failed: {}", self.service, e);
            TourAiError::from(e)
        })?;
        let elapsed = start.elapsed();
        let status = response.status();

        debug!(
            "{} responded {} in {:.3}s",
            self.service,
            status,
            elapsed.as_secs_f64()
        );

        if elapsed > SLOW_RESPONSE {
            warn!(
                "Slow {} response: {:.3}s",
                self.service,
                elapsed.as_secs_f64()
            );
        }

        if !status.is_success() {
            warn!("{} returned HTTP {}", self.service, status);
            return Err(TourAiError::api_with_code(
                format!("{} returned HTTP {}", self.service, status),
                ErrorCode::ApiHttpStatus,
            ));
        }

        info!(
            "{} request succeeded in {:.3}s",
            self.service,
            elapsed.as_secs_f64()
        );
        Ok(response)
    }

    fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        response.json::<T>().map_err(|e| {
            TourAiError::api_with_code(
                format!("Invalid response body: {e}"),
                ErrorCode::ApiInvalidResponse,
            )
        })
    }
}
