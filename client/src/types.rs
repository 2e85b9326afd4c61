//! Domain types for the activity-suggestion API.
//!
//! # Design
//! `Activity` is the record handed to callers; `ActivityWire` mirrors the
//! service's raw field names (`activity`, `type`, `price`, `key`) and stays
//! crate-private. The live service serves `key` and `accessibility` as
//! either numbers or numeric strings, so those fields decode leniently.
//! The mock-server crate defines its own wire DTOs independently;
//! integration tests catch any schema drift between the two.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of activity classification tags.
///
/// Decoding matches tags case-insensitively; a tag outside this set is a
/// decode failure, never a fallback value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    Education,
    Recreational,
    Social,
    Diy,
    Charity,
    Cooking,
    Relaxation,
    Music,
    Busywork,
}

impl ActivityCategory {
    /// Every known category, in tag order.
    pub const ALL: [ActivityCategory; 9] = [
        ActivityCategory::Education,
        ActivityCategory::Recreational,
        ActivityCategory::Social,
        ActivityCategory::Diy,
        ActivityCategory::Charity,
        ActivityCategory::Cooking,
        ActivityCategory::Relaxation,
        ActivityCategory::Music,
        ActivityCategory::Busywork,
    ];

    /// The lowercase tag the service uses for this category.
    pub fn as_tag(self) -> &'static str {
        match self {
            ActivityCategory::Education => "education",
            ActivityCategory::Recreational => "recreational",
            ActivityCategory::Social => "social",
            ActivityCategory::Diy => "diy",
            ActivityCategory::Charity => "charity",
            ActivityCategory::Cooking => "cooking",
            ActivityCategory::Relaxation => "relaxation",
            ActivityCategory::Music => "music",
            ActivityCategory::Busywork => "busywork",
        }
    }

    /// Match a tag against the known set, ignoring ASCII case.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.as_tag().eq_ignore_ascii_case(tag))
    }
}

impl fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// A single suggested activity returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    pub description: String,
    /// In `[0, 1]`; lower is more accessible.
    pub accessibility: f64,
    pub category: ActivityCategory,
    pub participants: u32,
    /// In `[0, 1]`; zero is free.
    pub cost: f64,
    /// Numeric identifier, usually in `[1000000, 9999999]`.
    pub id: i64,
    pub link: String,
}

/// Raw response shape as the service serves it.
#[derive(Debug, Deserialize)]
pub(crate) struct ActivityWire {
    pub(crate) activity: String,
    #[serde(deserialize_with = "f64_lenient")]
    pub(crate) accessibility: f64,
    #[serde(rename = "type")]
    pub(crate) kind: String,
    pub(crate) participants: u32,
    pub(crate) price: f64,
    #[serde(deserialize_with = "i64_lenient")]
    pub(crate) key: i64,
    pub(crate) link: String,
}

/// Accept an integer serialized as either a JSON number or a numeric string.
fn i64_lenient<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }
    match Raw::deserialize(deserializer)? {
        Raw::Number(number) => Ok(number),
        Raw::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("`{text}` is not an integer"))),
    }
}

/// Accept a float serialized as either a JSON number or a numeric string.
fn f64_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }
    match Raw::deserialize(deserializer)? {
        Raw::Number(number) => Ok(number),
        Raw::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("`{text}` is not a number"))),
    }
}
