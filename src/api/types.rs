//! Wire types for the search endpoint and the worker channel messages.

use serde::{Deserialize, Deserializer};

/// One story as returned by the search endpoint.
///
/// The endpoint regularly returns `null` for fields of non-story hits, so
/// everything except the id decodes leniently into defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Story {
    #[serde(rename = "objectID")]
    pub id: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub author: String,
    #[serde(rename = "num_comments", default, deserialize_with = "null_to_default")]
    pub comment_count: u32,
    #[serde(default, deserialize_with = "null_to_default")]
    pub points: i64,
}

/// One decoded page of search results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchPage {
    pub hits: Vec<Story>,
    #[serde(default)]
    pub page: u32,
}

/// Request sent to the fetch worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    Search {
        query: String,
        page: u32,
        request_id: u64,
    },
}

/// Response sent back to the UI thread. Echoes the id of the request it
/// answers so responses overtaken by a newer submission can be dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse {
    Loaded { page: SearchPage, request_id: u64 },
    Failed { message: String, request_id: u64 },
}

/// Decode `null` as the type's default instead of failing.
fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
