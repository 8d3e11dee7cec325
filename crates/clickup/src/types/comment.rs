//! Task comments

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use super::id_string;
use super::user::UserRef;

/// A comment on a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment ID
    #[serde(deserialize_with = "id_string")]
    pub id: String,

    /// Plain-text rendering of the comment
    #[serde(default)]
    pub comment_text: String,

    /// Author
    #[serde(default)]
    pub user: Option<UserRef>,

    /// Whether the comment is resolved
    #[serde(default)]
    pub resolved: bool,

    /// Creation time in epoch milliseconds
    #[serde(default)]
    pub date: Option<String>,
}

/// Envelope of `GET /v2/task/{task_id}/comment`.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentsResponse {
    /// Comments, newest first
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// Body of `POST /v2/task/{task_id}/comment`.
#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
#[builder(setter(into, strip_option))]
pub struct CreateCommentRequest {
    /// Comment text
    pub comment_text: String,

    /// Notify everyone following the task, including the author
    #[builder(default)]
    pub notify_all: bool,

    /// Assign the comment to a user
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub assignee: Option<i64>,
}

impl CreateCommentRequest {
    /// Create a builder for constructing a CreateCommentRequest.
    pub fn builder() -> CreateCommentRequestBuilder {
        CreateCommentRequestBuilder::default()
    }
}

/// Response of `POST /v2/task/{task_id}/comment`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedComment {
    /// New comment ID
    #[serde(deserialize_with = "id_string")]
    pub id: String,

    /// Hist ID of the change
    #[serde(default)]
    pub hist_id: Option<String>,

    /// Creation time in epoch milliseconds
    #[serde(default)]
    pub date: Option<i64>,
}
