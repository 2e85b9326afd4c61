//! Typed client for the Bored API activity-suggestion service.
//!
//! # Overview
//! Builds a query string from optional typed filters, issues one HTTP GET,
//! and decodes the JSON body into an [`Activity`] — or a typed
//! [`ApiError`] when the service reports an error or the body does not
//! match the expected shape. One request per call; no retries, no caching,
//! no pagination, no authentication.
//!
//! # Design
//! - [`BoredClient`] is stateless — it holds only `base_url`.
//! - URL construction and body decoding are pure (`request_url` /
//!   `parse_activity`); `get` executes the HTTP round trip between them
//!   with the transport session scoped to the single call.
//! - Request-side category values pass through unvalidated; response-side
//!   category tags must match the closed set. The asymmetry mirrors the
//!   service's own leniency and is intentional.
//! - No timeout is configured here; the transport's default applies.

pub mod client;
pub mod error;
pub mod query;
pub mod types;

pub use client::BoredClient;
pub use error::ApiError;
pub use query::{ActivityQuery, CategoryFilter};
pub use types::{Activity, ActivityCategory};
