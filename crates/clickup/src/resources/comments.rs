//! Task comment endpoints

use http::Method;

use super::{Resource, require_id};
use crate::context::CallContext;
use crate::error::Result;
use crate::http::Transport;
use crate::types::{Comment, CommentsResponse, CreateCommentRequest, CreatedComment};

/// Comments API resource.
#[derive(Debug, Clone)]
pub struct Comments {
    transport: Transport,
}

impl Comments {
    /// Create a new Comments resource.
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Comments on a task.
    pub async fn list(&self, ctx: &CallContext, task_id: &str) -> Result<Vec<Comment>> {
        let task_id = require_id("task_id", task_id)?;
        let response: CommentsResponse = self
            .transport
            .decode(ctx, Method::GET, &format!("/v2/task/{task_id}/comment"))
            .await
            .map_err(|e| e.context("list comments"))?;
        Ok(response.comments)
    }

    /// Add a comment to a task.
    pub async fn create(
        &self,
        ctx: &CallContext,
        task_id: &str,
        request: &CreateCommentRequest,
    ) -> Result<CreatedComment> {
        let task_id = require_id("task_id", task_id)?;
        self.transport
            .decode_with_body(ctx, Method::POST, &format!("/v2/task/{task_id}/comment"), request)
            .await
            .map_err(|e| e.context("create comment"))
    }
}

impl Resource for Comments {
    fn transport(&self) -> &Transport {
        &self.transport
    }
}
