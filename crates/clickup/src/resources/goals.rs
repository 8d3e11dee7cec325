//! Goal endpoints

use http::Method;

use super::{Resource, require_id};
use crate::context::CallContext;
use crate::error::Result;
use crate::http::Transport;
use crate::types::{Goal, GoalResponse, GoalsResponse};

/// Goals API resource.
#[derive(Debug, Clone)]
pub struct Goals {
    transport: Transport,
}

impl Goals {
    /// Create a new Goals resource.
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Goals of a workspace.
    pub async fn list(&self, ctx: &CallContext, team_id: &str) -> Result<Vec<Goal>> {
        let team_id = require_id("team_id", team_id)?;
        let response: GoalsResponse = self
            .transport
            .decode(ctx, Method::GET, &format!("/v2/team/{team_id}/goal"))
            .await
            .map_err(|e| e.context("list goals"))?;
        Ok(response.goals)
    }

    /// A single goal.
    pub async fn get(&self, ctx: &CallContext, goal_id: &str) -> Result<Goal> {
        let goal_id = require_id("goal_id", goal_id)?;
        let response: GoalResponse = self
            .transport
            .decode(ctx, Method::GET, &format!("/v2/goal/{goal_id}"))
            .await
            .map_err(|e| e.context("get goal"))?;
        Ok(response.goal)
    }
}

impl Resource for Goals {
    fn transport(&self) -> &Transport {
        &self.transport
    }
}
