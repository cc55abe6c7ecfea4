//! Gallery item model matching the frontend Item interface.

use serde::{Deserialize, Serialize};

/// A persisted gallery item: one fetched image URL with its creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    /// RFC 3339 creation time, set once on insert.
    pub timestamp: String,
    /// May be null when the upstream response carried no usable URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Decode target for the random-image endpoint.
///
/// Only `message` is consumed; a 200 body without it still yields a
/// null-URL item.
#[derive(Debug, Clone, Deserialize)]
pub struct RandomImageResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Request body for deleting items by list position.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteItemsRequest {
    pub offsets: Vec<usize>,
}
