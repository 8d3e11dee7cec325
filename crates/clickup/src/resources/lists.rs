//! List endpoints

use http::Method;

use super::{Resource, archived_query, require_id, with_query};
use crate::context::CallContext;
use crate::error::Result;
use crate::http::Transport;
use crate::types::{CreateListRequest, List, ListsResponse};

/// Lists API resource.
#[derive(Debug, Clone)]
pub struct Lists {
    transport: Transport,
}

impl Lists {
    /// Create a new Lists resource.
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Lists inside a folder.
    pub async fn list(&self, ctx: &CallContext, folder_id: &str, archived: bool) -> Result<Vec<List>> {
        let folder_id = require_id("folder_id", folder_id)?;
        let path = with_query(format!("/v2/folder/{folder_id}/list"), &archived_query(archived));
        self.fetch(ctx, &path, "list lists").await
    }

    /// Lists that sit directly in a space, outside any folder.
    pub async fn list_folderless(
        &self,
        ctx: &CallContext,
        space_id: &str,
        archived: bool,
    ) -> Result<Vec<List>> {
        let space_id = require_id("space_id", space_id)?;
        let path = with_query(format!("/v2/space/{space_id}/list"), &archived_query(archived));
        self.fetch(ctx, &path, "list folderless lists").await
    }

    /// A single list.
    pub async fn get(&self, ctx: &CallContext, list_id: &str) -> Result<List> {
        let list_id = require_id("list_id", list_id)?;
        self.transport
            .decode(ctx, Method::GET, &format!("/v2/list/{list_id}"))
            .await
            .map_err(|e| e.context("get list"))
    }

    /// Create a list in a folder.
    pub async fn create(
        &self,
        ctx: &CallContext,
        folder_id: &str,
        request: &CreateListRequest,
    ) -> Result<List> {
        let folder_id = require_id("folder_id", folder_id)?;
        self.transport
            .decode_with_body(ctx, Method::POST, &format!("/v2/folder/{folder_id}/list"), request)
            .await
            .map_err(|e| e.context("create list"))
    }

    /// Delete a list.
    pub async fn delete(&self, ctx: &CallContext, list_id: &str) -> Result<()> {
        let list_id = require_id("list_id", list_id)?;
        self.transport
            .execute::<()>(ctx, Method::DELETE, &format!("/v2/list/{list_id}"), None)
            .await
            .map_err(|e| e.context("delete list"))
    }

    async fn fetch(&self, ctx: &CallContext, path: &str, operation: &'static str) -> Result<Vec<List>> {
        let response: ListsResponse = self
            .transport
            .decode(ctx, Method::GET, path)
            .await
            .map_err(|e| e.context(operation))?;
        Ok(response.lists)
    }
}

impl Resource for Lists {
    fn transport(&self) -> &Transport {
        &self.transport
    }
}
