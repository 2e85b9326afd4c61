//! Stateless client for the activity-suggestion service.
//!
//! # Design
//! `BoredClient` holds only a `base_url` and carries no mutable state
//! between calls. URL construction (`request_url`) and body decoding
//! (`parse_activity`) are pure and unit-testable without a network; `get`
//! performs the single HTTP round trip between them, with the transport
//! session scoped to the call. Every failure propagates to the caller as
//! an `ApiError` — no retries, no recovery.

use serde_json::Value;

use crate::error::ApiError;
use crate::query::{ActivityQuery, CategoryFilter};
use crate::types::{Activity, ActivityCategory, ActivityWire};

/// Endpoint of the live service.
const BASE_URL: &str = "http://www.boredapi.com/api/activity";

/// Client for the activity-suggestion service.
///
/// Stateless and cheap to clone; concurrent calls from independent tasks
/// share nothing but the immutable base URL.
#[derive(Debug, Clone)]
pub struct BoredClient {
    base_url: String,
}

impl BoredClient {
    /// Client bound to the live service endpoint.
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    /// Client bound to an alternate endpoint, e.g. a local mock server.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Full request URL for `query`; the bare endpoint when no filters are
    /// set.
    pub fn request_url(&self, query: &ActivityQuery) -> String {
        let params = query.to_query_string();
        if params.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}?{}", self.base_url, params)
        }
    }

    /// Decode a response body into an `Activity`.
    ///
    /// A body carrying an `error` field is a `Service` failure. Anything
    /// else that fails to match the activity shape — unknown category tag,
    /// missing field, uncoercible value, or a body that is not JSON at
    /// all — is a `Decode` failure.
    pub fn parse_activity(&self, body: &str) -> Result<Activity, ApiError> {
        let value: Value =
            serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        if let Some(error) = value.get("error") {
            let message = error
                .as_str()
                .map_or_else(|| error.to_string(), str::to_string);
            return Err(ApiError::Service(message));
        }
        let wire: ActivityWire =
            serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))?;
        let category = ActivityCategory::from_tag(&wire.kind)
            .ok_or_else(|| ApiError::Decode(format!("unrecognized category `{}`", wire.kind)))?;
        Ok(Activity {
            description: wire.activity,
            accessibility: wire.accessibility,
            category,
            participants: wire.participants,
            cost: wire.price,
            id: wire.key,
            link: wire.link,
        })
    }

    /// Fetch one activity matching `query`.
    ///
    /// Issues a single GET. The transport session lives only for this call
    /// and is released on every exit path, so calls stay independent.
    pub async fn get(&self, query: &ActivityQuery) -> Result<Activity, ApiError> {
        let url = self.request_url(query);
        log::debug!("GET {url}");
        let http = reqwest::Client::builder().build()?;
        let response = http.get(&url).send().await?;
        let body = response.text().await?;
        self.parse_activity(&body)
    }

    /// Fetch an unconstrained random activity.
    pub async fn random(&self) -> Result<Activity, ApiError> {
        self.get(&ActivityQuery::new()).await
    }

    /// Fetch the activity with the given id.
    pub async fn by_id(&self, id: i64) -> Result<Activity, ApiError> {
        self.get(&ActivityQuery::new().id(id)).await
    }

    /// Fetch a random activity of the given category. Raw strings are
    /// forwarded to the service unvalidated.
    pub async fn by_category(
        &self,
        category: impl Into<CategoryFilter>,
    ) -> Result<Activity, ApiError> {
        self.get(&ActivityQuery::new().category(category)).await
    }

    /// Fetch a random activity for the given number of participants.
    pub async fn by_participants(&self, participants: u32) -> Result<Activity, ApiError> {
        self.get(&ActivityQuery::new().participants(participants))
            .await
    }

    /// Fetch a random activity with the given cost factor.
    pub async fn by_cost(&self, cost: f64) -> Result<Activity, ApiError> {
        self.get(&ActivityQuery::new().cost(cost)).await
    }

    /// Fetch a random activity whose cost lies in `[min_cost, max_cost]`.
    pub async fn by_cost_range(
        &self,
        min_cost: f64,
        max_cost: f64,
    ) -> Result<Activity, ApiError> {
        self.get(&ActivityQuery::new().min_cost(min_cost).max_cost(max_cost))
            .await
    }

    /// Fetch a random activity with the given accessibility factor.
    pub async fn by_accessibility(&self, accessibility: f64) -> Result<Activity, ApiError> {
        self.get(&ActivityQuery::new().accessibility(accessibility))
            .await
    }

    /// Fetch a random activity whose accessibility lies in
    /// `[min_accessibility, max_accessibility]`.
    pub async fn by_accessibility_range(
        &self,
        min_accessibility: f64,
        max_accessibility: f64,
    ) -> Result<Activity, ApiError> {
        self.get(
            &ActivityQuery::new()
                .min_accessibility(min_accessibility)
                .max_accessibility(max_accessibility),
        )
        .await
    }
}

impl Default for BoredClient {
    fn default() -> Self {
        Self::new()
    }
}
