//! Task types

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use super::hierarchy::{ParentRef, Status};
use super::user::UserRef;
use super::{id_string, optional_id_string};

/// A task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Task ID
    #[serde(deserialize_with = "id_string")]
    pub id: String,

    /// Custom task ID, when the workspace uses them
    #[serde(default)]
    pub custom_id: Option<String>,

    /// Task name
    pub name: String,

    /// Plain-text description
    #[serde(default)]
    pub description: Option<String>,

    /// Current status
    #[serde(default)]
    pub status: Option<Status>,

    /// Priority, when set
    #[serde(default)]
    pub priority: Option<Priority>,

    /// Creation time in epoch milliseconds
    #[serde(default)]
    pub date_created: Option<String>,

    /// Last update time in epoch milliseconds
    #[serde(default)]
    pub date_updated: Option<String>,

    /// Due date in epoch milliseconds
    #[serde(default)]
    pub due_date: Option<String>,

    /// Creator
    #[serde(default)]
    pub creator: Option<UserRef>,

    /// Assignees
    #[serde(default)]
    pub assignees: Vec<UserRef>,

    /// Parent task ID for subtasks
    #[serde(default, deserialize_with = "optional_id_string")]
    pub parent: Option<String>,

    /// Owning list
    #[serde(default)]
    pub list: Option<ParentRef>,

    /// Browser URL
    #[serde(default)]
    pub url: Option<String>,
}

/// Priority as reported on a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Priority {
    /// Priority ID (`1` urgent to `4` low)
    #[serde(default, deserialize_with = "optional_id_string")]
    pub id: Option<String>,

    /// Priority label
    pub priority: String,

    /// Display color
    #[serde(default)]
    pub color: Option<String>,
}

/// Envelope of `GET /v2/list/{list_id}/task`.
#[derive(Debug, Clone, Deserialize)]
pub struct TasksResponse {
    /// Tasks on the requested page
    #[serde(default)]
    pub tasks: Vec<Task>,

    /// Whether this is the final page
    #[serde(default)]
    pub last_page: Option<bool>,
}

/// Query parameters for listing tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskListParams {
    /// Zero-based page number, passed through unchanged
    pub page: Option<u32>,
    /// Include closed tasks
    pub include_closed: Option<bool>,
    /// Include archived tasks
    pub archived: Option<bool>,
    /// Include subtasks
    pub subtasks: Option<bool>,
}

impl TaskListParams {
    /// Create empty parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a specific page.
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Include closed tasks.
    pub fn include_closed(mut self, include_closed: bool) -> Self {
        self.include_closed = Some(include_closed);
        self
    }

    /// Include archived tasks.
    pub fn archived(mut self, archived: bool) -> Self {
        self.archived = Some(archived);
        self
    }

    /// Include subtasks.
    pub fn subtasks(mut self, subtasks: bool) -> Self {
        self.subtasks = Some(subtasks);
        self
    }

    /// Query pairs in a stable order, skipping unset parameters.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(include_closed) = self.include_closed {
            query.push(("include_closed", include_closed.to_string()));
        }
        if let Some(archived) = self.archived {
            query.push(("archived", archived.to_string()));
        }
        if let Some(subtasks) = self.subtasks {
            query.push(("subtasks", subtasks.to_string()));
        }
        query
    }
}

/// Body of `POST /v2/list/{list_id}/task`.
#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
#[builder(setter(into, strip_option))]
pub struct CreateTaskRequest {
    /// Task name
    pub name: String,

    /// Plain-text description
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub description: Option<String>,

    /// Status name
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub status: Option<String>,

    /// Priority from 1 (urgent) to 4 (low)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub priority: Option<u8>,

    /// Due date in epoch milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub due_date: Option<i64>,

    /// Assignee user IDs
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub assignees: Vec<i64>,

    /// Parent task ID, to create a subtask
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub parent: Option<String>,
}

impl CreateTaskRequest {
    /// Create a builder for constructing a CreateTaskRequest.
    pub fn builder() -> CreateTaskRequestBuilder {
        CreateTaskRequestBuilder::default()
    }
}

/// Body of `PUT /v2/task/{task_id}`. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option))]
pub struct UpdateTaskRequest {
    /// New name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New status name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// New priority from 1 (urgent) to 4 (low)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,

    /// New due date in epoch milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<i64>,

    /// Archive or unarchive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

impl UpdateTaskRequest {
    /// Create a builder for constructing an UpdateTaskRequest.
    pub fn builder() -> UpdateTaskRequestBuilder {
        UpdateTaskRequestBuilder::default()
    }

    /// Whether no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
            && self.archived.is_none()
    }
}
