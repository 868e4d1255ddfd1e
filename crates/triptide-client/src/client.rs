//! HTTP client for the TripTide backend and its static data assets.
//!
//! Wraps `reqwest` with endpoint URL building, status checking, and typed
//! response deserialization. Every call returns a `Result`; callers decide
//! how a failed widget is rendered.

use std::time::Duration;

use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use triptide_core::{
    calculate_sus, flatten_stays, AppConfig, DestinationsFile, Listing, StaysFile,
};

use crate::error::ClientError;
use crate::retry::retry_with_backoff;
use crate::types::{
    AdminMetrics, CultureResponse, DestinationRequest, Distance, DistanceRequest,
    ExperiencesRequest, ExperiencesResponse, ItineraryRequest, ItineraryResponse,
    NpsSubmission, PackingRequest, PackingResponse, SafetyRequest, SafetyScore, SimilarResponse,
    SusSubmission, Weather, WeatherResponse,
};

/// Client for the TripTide backend.
///
/// Use [`TripTideClient::new`] with an explicit origin (e.g. a wiremock
/// server in tests) or [`TripTideClient::from_config`] in binaries.
pub struct TripTideClient {
    client: Client,
    base_url: Url,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl TripTideClient {
    /// Creates a client for the backend at `base_url` with retries disabled.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidUrl`] if `base_url`
    /// does not parse.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so relative joins append instead of
        // replacing the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| ClientError::InvalidUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url,
            max_retries: 0,
            backoff_base_ms: 0,
        })
    }

    /// Creates a client from the application configuration, including its
    /// retry policy.
    ///
    /// # Errors
    ///
    /// See [`TripTideClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        Ok(
            Self::new(&config.base_url, config.request_timeout_secs, &config.user_agent)?
                .with_retries(config.max_retries, config.retry_backoff_base_ms),
        )
    }

    /// Enables retrying transient failures up to `max_retries` extra times.
    #[must_use]
    pub fn with_retries(mut self, max_retries: u32, backoff_base_ms: u64) -> Self {
        self.max_retries = max_retries;
        self.backoff_base_ms = backoff_base_ms;
        self
    }

    /// `GET /api/admin/metrics`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::UnexpectedStatus`] on a non-2xx response.
    /// - [`ClientError::Deserialize`] if the body does not match.
    pub async fn admin_metrics(&self) -> Result<AdminMetrics, ClientError> {
        self.get_json(&self.endpoint("api/admin/metrics")?).await
    }

    /// `POST /api/similar`: stays similar to those at `destination`.
    ///
    /// # Errors
    ///
    /// See [`TripTideClient::admin_metrics`].
    pub async fn similar_stays(&self, destination: &str) -> Result<Vec<Listing>, ClientError> {
        let resp: SimilarResponse = self
            .post_json(
                &self.endpoint("api/similar")?,
                &DestinationRequest { destination },
            )
            .await?;
        Ok(resp.stays)
    }

    /// `GET /api/weather`: current conditions at the user's location.
    ///
    /// # Errors
    ///
    /// See [`TripTideClient::admin_metrics`].
    pub async fn weather(&self) -> Result<Weather, ClientError> {
        let resp: WeatherResponse = self.get_json(&self.endpoint("api/weather")?).await?;
        Ok(resp.weather)
    }

    /// `POST /api/safety/region`.
    ///
    /// # Errors
    ///
    /// See [`TripTideClient::admin_metrics`].
    pub async fn region_safety(&self, location: &str) -> Result<SafetyScore, ClientError> {
        self.post_json(
            &self.endpoint("api/safety/region")?,
            &SafetyRequest { location },
        )
        .await
    }

    /// `POST /api/culture`: an HTML story about the destination.
    ///
    /// # Errors
    ///
    /// See [`TripTideClient::admin_metrics`].
    pub async fn culture(&self, destination: &str) -> Result<String, ClientError> {
        let resp: CultureResponse = self
            .post_json(
                &self.endpoint("api/culture")?,
                &DestinationRequest { destination },
            )
            .await?;
        Ok(resp.story)
    }

    /// `POST /api/packing`: an HTML packing list.
    ///
    /// # Errors
    ///
    /// See [`TripTideClient::admin_metrics`].
    pub async fn packing(&self, request: &PackingRequest) -> Result<String, ClientError> {
        let resp: PackingResponse = self
            .post_json(&self.endpoint("api/packing")?, request)
            .await?;
        Ok(resp.packing_list)
    }

    /// `POST /api/local_experiences`: HTML suggestions for the traveler type.
    ///
    /// # Errors
    ///
    /// See [`TripTideClient::admin_metrics`].
    pub async fn local_experiences(
        &self,
        destination: &str,
        traveler_type: &str,
    ) -> Result<String, ClientError> {
        let resp: ExperiencesResponse = self
            .post_json(
                &self.endpoint("api/local_experiences")?,
                &ExperiencesRequest {
                    destination,
                    traveler_type,
                },
            )
            .await?;
        Ok(resp.experiences)
    }

    /// `GET /api/stays/{place}`. Listings without a destination are stamped
    /// with `place`.
    ///
    /// # Errors
    ///
    /// See [`TripTideClient::admin_metrics`].
    pub async fn stays(&self, place: &str) -> Result<Vec<Listing>, ClientError> {
        let mut url = self.endpoint("api/stays/")?;
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl {
                url: self.base_url.to_string(),
                reason: "base URL cannot carry path segments".to_owned(),
            })?
            .pop_if_empty()
            .push(place);

        let stays: Vec<Listing> = self.get_json(&url).await?;
        Ok(stays
            .into_iter()
            .map(|s| s.with_default_destination(place))
            .collect())
    }

    /// `POST /api/distance`: distance from the user to `place`.
    ///
    /// # Errors
    ///
    /// See [`TripTideClient::admin_metrics`].
    pub async fn distance(&self, place: &str) -> Result<Distance, ClientError> {
        self.post_json(&self.endpoint("api/distance")?, &DistanceRequest { place })
            .await
    }

    /// `POST /api/itinerary`. Returns `None` when the backend produced no
    /// itinerary text.
    ///
    /// # Errors
    ///
    /// See [`TripTideClient::admin_metrics`].
    pub async fn itinerary(
        &self,
        request: &ItineraryRequest,
    ) -> Result<Option<String>, ClientError> {
        let resp: ItineraryResponse = self
            .post_json(&self.endpoint("api/itinerary")?, request)
            .await?;
        Ok(resp.itinerary.filter(|s| !s.trim().is_empty()))
    }

    /// Submits a 10-item SUS answer list together with its computed score.
    /// Returns the score that was sent. Never retried, whatever the policy.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::UnexpectedStatus`] on a non-2xx response.
    pub async fn submit_sus(&self, answers: &[u8]) -> Result<f64, ClientError> {
        let score = calculate_sus(answers);
        self.post_no_content(
            &self.endpoint("api/sus")?,
            &SusSubmission { score, answers },
        )
        .await?;
        Ok(score)
    }

    /// Submits a single 1–5 NPS-style rating.
    ///
    /// # Errors
    ///
    /// See [`TripTideClient::submit_sus`].
    pub async fn submit_nps(&self, score: u8) -> Result<(), ClientError> {
        self.post_no_content(&self.endpoint("api/nps")?, &NpsSubmission { score })
            .await
    }

    /// `GET /static/data/stays.json`, flattened into one list with each stay
    /// stamped with its destination.
    ///
    /// # Errors
    ///
    /// See [`TripTideClient::admin_metrics`].
    pub async fn all_stays(&self) -> Result<Vec<Listing>, ClientError> {
        let file: StaysFile = self
            .get_json(&self.endpoint("static/data/stays.json")?)
            .await?;
        Ok(flatten_stays(file))
    }

    /// `GET /static/data/destinations.json`.
    ///
    /// # Errors
    ///
    /// See [`TripTideClient::admin_metrics`].
    pub async fn destinations(&self) -> Result<DestinationsFile, ClientError> {
        self.get_json(&self.endpoint("static/data/destinations.json")?)
            .await
    }

    /// Resolves `path` (relative, no leading slash) against the base URL.
    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::InvalidUrl {
                url: format!("{}{path}", self.base_url),
                reason: e.to_string(),
            })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T, ClientError> {
        let body = self.send(Method::GET, url, None::<&()>).await?;
        parse_body(url, &body)
    }

    async fn post_json<B, T>(&self, url: &Url, payload: &B) -> Result<T, ClientError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let body = self.send(Method::POST, url, Some(payload)).await?;
        parse_body(url, &body)
    }

    /// Fire-and-forget submissions are recorded server-side on every
    /// delivery, so they are sent exactly once.
    async fn post_no_content<B>(&self, url: &Url, payload: &B) -> Result<(), ClientError>
    where
        B: Serialize + Sync,
    {
        self.attempt(Method::POST, url, Some(payload)).await?;
        Ok(())
    }

    /// [`Self::attempt`] under the configured retry policy.
    async fn send<B>(
        &self,
        method: Method,
        url: &Url,
        payload: Option<&B>,
    ) -> Result<String, ClientError>
    where
        B: Serialize + Sync,
    {
        retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            self.attempt(method.clone(), url, payload)
        })
        .await
    }

    /// Sends one request, asserts a 2xx status, and returns the raw body.
    async fn attempt<B>(
        &self,
        method: Method,
        url: &Url,
        payload: Option<&B>,
    ) -> Result<String, ClientError>
    where
        B: Serialize + Sync,
    {
        tracing::debug!(%method, %url, "backend request");
        let mut request = self.client.request(method, url.clone());
        if let Some(p) = payload {
            request = request.json(p);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.text().await?)
    }
}

fn parse_body<T: DeserializeOwned>(url: &Url, body: &str) -> Result<T, ClientError> {
    serde_json::from_str(body).map_err(|e| ClientError::Deserialize {
        context: url.path().to_owned(),
        source: e,
    })
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
