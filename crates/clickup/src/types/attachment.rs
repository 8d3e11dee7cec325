//! Task attachments

use serde::{Deserialize, Serialize};

use super::id_string;

/// Form field the attachment endpoint expects the file under.
pub const ATTACHMENT_FIELD: &str = "attachment";

/// Response of `POST /v2/task/{task_id}/attachment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    /// Attachment ID
    #[serde(deserialize_with = "id_string")]
    pub id: String,

    /// Server-side version counter
    #[serde(default)]
    pub version: Option<String>,

    /// Upload time in epoch milliseconds
    #[serde(default)]
    pub date: Option<serde_json::Value>,

    /// Stored file name
    #[serde(default)]
    pub title: Option<String>,

    /// File extension
    #[serde(default)]
    pub extension: Option<String>,

    /// Thumbnail URL
    #[serde(default)]
    pub thumbnail_small: Option<String>,

    /// Download URL
    #[serde(default)]
    pub url: Option<String>,
}
