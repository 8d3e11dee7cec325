//! Workspace (team) endpoints

use http::Method;

use super::Resource;
use crate::context::CallContext;
use crate::error::Result;
use crate::http::Transport;
use crate::types::{Team, TeamsResponse};

/// Teams API resource.
///
/// The v2 API calls workspaces "teams".
#[derive(Debug, Clone)]
pub struct Teams {
    transport: Transport,
}

impl Teams {
    /// Create a new Teams resource.
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Workspaces the credential can access.
    pub async fn list(&self, ctx: &CallContext) -> Result<Vec<Team>> {
        let response: TeamsResponse = self
            .transport
            .decode(ctx, Method::GET, "/v2/team")
            .await
            .map_err(|e| e.context("list teams"))?;
        Ok(response.teams)
    }
}

impl Resource for Teams {
    fn transport(&self) -> &Transport {
        &self.transport
    }
}
