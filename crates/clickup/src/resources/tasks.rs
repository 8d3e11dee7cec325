//! Task endpoints

use http::Method;

use super::{Resource, require_id, with_query};
use crate::context::CallContext;
use crate::error::Result;
use crate::http::Transport;
use crate::types::{CreateTaskRequest, Task, TaskListParams, TasksResponse, UpdateTaskRequest};

/// Tasks API resource.
#[derive(Debug, Clone)]
pub struct Tasks {
    transport: Transport,
}

impl Tasks {
    /// Create a new Tasks resource.
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// One page of tasks in a list.
    pub async fn list(
        &self,
        ctx: &CallContext,
        list_id: &str,
        params: &TaskListParams,
    ) -> Result<TasksResponse> {
        let list_id = require_id("list_id", list_id)?;
        let path = with_query(format!("/v2/list/{list_id}/task"), &params.to_query());
        self.transport
            .decode(ctx, Method::GET, &path)
            .await
            .map_err(|e| e.context("list tasks"))
    }

    /// A single task.
    pub async fn get(&self, ctx: &CallContext, task_id: &str) -> Result<Task> {
        let task_id = require_id("task_id", task_id)?;
        self.transport
            .decode(ctx, Method::GET, &format!("/v2/task/{task_id}"))
            .await
            .map_err(|e| e.context("get task"))
    }

    /// Create a task in a list.
    pub async fn create(
        &self,
        ctx: &CallContext,
        list_id: &str,
        request: &CreateTaskRequest,
    ) -> Result<Task> {
        let list_id = require_id("list_id", list_id)?;
        self.transport
            .decode_with_body(ctx, Method::POST, &format!("/v2/list/{list_id}/task"), request)
            .await
            .map_err(|e| e.context("create task"))
    }

    /// Update fields of a task.
    pub async fn update(
        &self,
        ctx: &CallContext,
        task_id: &str,
        request: &UpdateTaskRequest,
    ) -> Result<Task> {
        let task_id = require_id("task_id", task_id)?;
        self.transport
            .decode_with_body(ctx, Method::PUT, &format!("/v2/task/{task_id}"), request)
            .await
            .map_err(|e| e.context("update task"))
    }

    /// Delete a task.
    pub async fn delete(&self, ctx: &CallContext, task_id: &str) -> Result<()> {
        let task_id = require_id("task_id", task_id)?;
        self.transport
            .execute::<()>(ctx, Method::DELETE, &format!("/v2/task/{task_id}"), None)
            .await
            .map_err(|e| e.context("delete task"))
    }
}

impl Resource for Tasks {
    fn transport(&self) -> &Transport {
        &self.transport
    }
}
