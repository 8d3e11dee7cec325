//! Spaces, folders and lists

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use super::{id_string, optional_id_string};

/// A space inside a workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Space {
    /// Space ID
    #[serde(deserialize_with = "id_string")]
    pub id: String,

    /// Space name
    pub name: String,

    /// Whether the space is private
    #[serde(default)]
    pub private: bool,

    /// Whether the space is archived
    #[serde(default)]
    pub archived: bool,

    /// Task statuses defined in the space
    #[serde(default)]
    pub statuses: Vec<Status>,
}

/// Envelope of `GET /v2/team/{team_id}/space`.
#[derive(Debug, Clone, Deserialize)]
pub struct SpacesResponse {
    /// Spaces of the workspace
    #[serde(default)]
    pub spaces: Vec<Space>,
}

/// A task status as configured on a space or list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    /// Status name
    pub status: String,

    /// Status color
    #[serde(default)]
    pub color: Option<String>,

    /// Status type (`open`, `custom`, `closed`, ...)
    #[serde(default, rename = "type")]
    pub status_type: Option<String>,

    /// Position within the workflow
    #[serde(default)]
    pub orderindex: Option<serde_json::Value>,
}

/// Reference to a parent object embedded in folders, lists and tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParentRef {
    /// Parent ID
    #[serde(deserialize_with = "id_string")]
    pub id: String,

    /// Parent name, when included
    #[serde(default)]
    pub name: Option<String>,
}

/// A folder inside a space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    /// Folder ID
    #[serde(deserialize_with = "id_string")]
    pub id: String,

    /// Folder name
    pub name: String,

    /// Whether the folder is hidden
    #[serde(default)]
    pub hidden: bool,

    /// Whether the folder is archived
    #[serde(default)]
    pub archived: bool,

    /// Number of tasks, reported as a string
    #[serde(default, deserialize_with = "optional_id_string")]
    pub task_count: Option<String>,

    /// Owning space
    #[serde(default)]
    pub space: Option<ParentRef>,

    /// Lists inside the folder
    #[serde(default)]
    pub lists: Vec<List>,
}

/// Envelope of `GET /v2/space/{space_id}/folder`.
#[derive(Debug, Clone, Deserialize)]
pub struct FoldersResponse {
    /// Folders of the space
    #[serde(default)]
    pub folders: Vec<Folder>,
}

/// Body of `POST /v2/space/{space_id}/folder`.
#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
#[builder(setter(into))]
pub struct CreateFolderRequest {
    /// Folder name
    pub name: String,
}

impl CreateFolderRequest {
    /// Create a builder for constructing a CreateFolderRequest.
    pub fn builder() -> CreateFolderRequestBuilder {
        CreateFolderRequestBuilder::default()
    }
}

/// A list inside a folder or directly inside a space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    /// List ID
    #[serde(deserialize_with = "id_string")]
    pub id: String,

    /// List name
    pub name: String,

    /// List description
    #[serde(default)]
    pub content: Option<String>,

    /// Whether the list is archived
    #[serde(default)]
    pub archived: bool,

    /// Number of tasks in the list
    #[serde(default)]
    pub task_count: Option<u64>,

    /// Owning folder
    #[serde(default)]
    pub folder: Option<ParentRef>,

    /// Owning space
    #[serde(default)]
    pub space: Option<ParentRef>,

    /// Statuses available to tasks in the list
    #[serde(default)]
    pub statuses: Vec<Status>,
}

/// Envelope of `GET /v2/folder/{folder_id}/list` and `GET /v2/space/{space_id}/list`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListsResponse {
    /// Lists of the folder or space
    #[serde(default)]
    pub lists: Vec<List>,
}

/// Body of `POST /v2/folder/{folder_id}/list`.
#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
#[builder(setter(into, strip_option))]
pub struct CreateListRequest {
    /// List name
    pub name: String,

    /// List description
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub content: Option<String>,

    /// Due date in epoch milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub due_date: Option<i64>,

    /// Priority from 1 (urgent) to 4 (low)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub priority: Option<u8>,
}

impl CreateListRequest {
    /// Create a builder for constructing a CreateListRequest.
    pub fn builder() -> CreateListRequestBuilder {
        CreateListRequestBuilder::default()
    }
}
