//! Time tracking endpoints

use http::Method;

use super::{Resource, require_id, with_query};
use crate::context::CallContext;
use crate::error::Result;
use crate::http::Transport;
use crate::types::{StartTimerRequest, TimeEntriesResponse, TimeEntry, TimeEntryResponse, TimeRange};

/// Time tracking API resource.
#[derive(Debug, Clone)]
pub struct TimeTracking {
    transport: Transport,
}

impl TimeTracking {
    /// Create a new TimeTracking resource.
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Time entries of the credential's user in a date range.
    pub async fn list(
        &self,
        ctx: &CallContext,
        team_id: &str,
        range: &TimeRange,
    ) -> Result<Vec<TimeEntry>> {
        let team_id = require_id("team_id", team_id)?;
        let path = with_query(format!("/v2/team/{team_id}/time_entries"), &range.to_query());
        let response: TimeEntriesResponse = self
            .transport
            .decode(ctx, Method::GET, &path)
            .await
            .map_err(|e| e.context("list time entries"))?;
        Ok(response.data)
    }

    /// The running timer, if any.
    pub async fn current(&self, ctx: &CallContext, team_id: &str) -> Result<Option<TimeEntry>> {
        let team_id = require_id("team_id", team_id)?;
        let response: TimeEntryResponse = self
            .transport
            .decode(ctx, Method::GET, &format!("/v2/team/{team_id}/time_entries/current"))
            .await
            .map_err(|e| e.context("get running timer"))?;
        Ok(response.data)
    }

    /// Start a timer.
    pub async fn start(
        &self,
        ctx: &CallContext,
        team_id: &str,
        request: &StartTimerRequest,
    ) -> Result<Option<TimeEntry>> {
        let team_id = require_id("team_id", team_id)?;
        let response: TimeEntryResponse = self
            .transport
            .decode_with_body(
                ctx,
                Method::POST,
                &format!("/v2/team/{team_id}/time_entries/start"),
                request,
            )
            .await
            .map_err(|e| e.context("start timer"))?;
        Ok(response.data)
    }

    /// Stop the running timer.
    pub async fn stop(&self, ctx: &CallContext, team_id: &str) -> Result<Option<TimeEntry>> {
        let team_id = require_id("team_id", team_id)?;
        let response: TimeEntryResponse = self
            .transport
            .decode(ctx, Method::POST, &format!("/v2/team/{team_id}/time_entries/stop"))
            .await
            .map_err(|e| e.context("stop timer"))?;
        Ok(response.data)
    }
}

impl Resource for TimeTracking {
    fn transport(&self) -> &Transport {
        &self.transport
    }
}
