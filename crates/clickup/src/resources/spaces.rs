//! Space endpoints

use http::Method;

use super::{Resource, archived_query, require_id, with_query};
use crate::context::CallContext;
use crate::error::Result;
use crate::http::Transport;
use crate::types::{Space, SpacesResponse};

/// Spaces API resource.
#[derive(Debug, Clone)]
pub struct Spaces {
    transport: Transport,
}

impl Spaces {
    /// Create a new Spaces resource.
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Spaces of a workspace.
    pub async fn list(&self, ctx: &CallContext, team_id: &str, archived: bool) -> Result<Vec<Space>> {
        let team_id = require_id("team_id", team_id)?;
        let path = with_query(format!("/v2/team/{team_id}/space"), &archived_query(archived));

        let response: SpacesResponse = self
            .transport
            .decode(ctx, Method::GET, &path)
            .await
            .map_err(|e| e.context("list spaces"))?;
        Ok(response.spaces)
    }

    /// A single space.
    pub async fn get(&self, ctx: &CallContext, space_id: &str) -> Result<Space> {
        let space_id = require_id("space_id", space_id)?;
        self.transport
            .decode(ctx, Method::GET, &format!("/v2/space/{space_id}"))
            .await
            .map_err(|e| e.context("get space"))
    }
}

impl Resource for Spaces {
    fn transport(&self) -> &Transport {
        &self.transport
    }
}
