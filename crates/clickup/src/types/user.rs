//! Users, workspaces (teams) and OAuth token exchange

use serde::{Deserialize, Serialize};

use super::{id_string, optional_id_string};

/// A ClickUp user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// User ID
    #[serde(deserialize_with = "id_string")]
    pub id: String,

    /// Display name
    #[serde(default)]
    pub username: Option<String>,

    /// Email address
    #[serde(default)]
    pub email: Option<String>,

    /// Avatar color as a hex string
    #[serde(default)]
    pub color: Option<String>,

    /// Initials shown when there is no picture
    #[serde(default)]
    pub initials: Option<String>,

    /// Avatar URL
    #[serde(default, rename = "profilePicture")]
    pub profile_picture: Option<String>,
}

impl User {
    /// Best available display name: username, then email, then ID.
    pub fn display_name(&self) -> &str {
        self.username
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or(&self.id)
    }
}

/// Envelope of `GET /v2/user`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorizedUserResponse {
    /// The user owning the credential
    pub user: User,
}

/// A workspace. The v2 API calls workspaces "teams".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Workspace ID
    #[serde(deserialize_with = "id_string")]
    pub id: String,

    /// Workspace name
    pub name: String,

    /// Workspace color
    #[serde(default)]
    pub color: Option<String>,

    /// Avatar URL
    #[serde(default)]
    pub avatar: Option<String>,

    /// Workspace members
    #[serde(default)]
    pub members: Vec<TeamMember>,
}

/// Membership entry of a workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    /// The member
    pub user: User,

    /// Who invited the member, when known
    #[serde(default)]
    pub invited_by: Option<User>,
}

/// Envelope of `GET /v2/team`.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamsResponse {
    /// Workspaces the credential can see
    #[serde(default)]
    pub teams: Vec<Team>,
}

/// Body of `POST /v2/oauth/token`.
#[derive(Debug, Clone, Serialize)]
pub struct OAuthTokenRequest {
    /// OAuth application client ID
    pub client_id: String,

    /// OAuth application client secret
    pub client_secret: String,

    /// Authorization code from the redirect
    pub code: String,
}

impl OAuthTokenRequest {
    /// Create a token exchange request.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            code: code.into(),
        }
    }
}

/// Response of `POST /v2/oauth/token`.
#[derive(Debug, Clone, Deserialize)]
pub struct OAuthToken {
    /// Bearer token to use as the credential
    pub access_token: String,

    /// Token type, when reported
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Minimal user reference embedded in other objects (assignees, creators).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    /// User ID
    #[serde(default, deserialize_with = "optional_id_string")]
    pub id: Option<String>,

    /// Display name
    #[serde(default)]
    pub username: Option<String>,

    /// Email address
    #[serde(default)]
    pub email: Option<String>,
}

impl UserRef {
    /// Best available display name.
    pub fn display_name(&self) -> &str {
        self.username
            .as_deref()
            .or(self.email.as_deref())
            .or(self.id.as_deref())
            .unwrap_or("unknown")
    }
}
