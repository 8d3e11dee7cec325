//! Folder endpoints

use http::Method;

use super::{Resource, archived_query, require_id, with_query};
use crate::context::CallContext;
use crate::error::Result;
use crate::http::Transport;
use crate::types::{CreateFolderRequest, Folder, FoldersResponse};

/// Folders API resource.
#[derive(Debug, Clone)]
pub struct Folders {
    transport: Transport,
}

impl Folders {
    /// Create a new Folders resource.
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Folders of a space.
    pub async fn list(&self, ctx: &CallContext, space_id: &str, archived: bool) -> Result<Vec<Folder>> {
        let space_id = require_id("space_id", space_id)?;
        let path = with_query(format!("/v2/space/{space_id}/folder"), &archived_query(archived));

        let response: FoldersResponse = self
            .transport
            .decode(ctx, Method::GET, &path)
            .await
            .map_err(|e| e.context("list folders"))?;
        Ok(response.folders)
    }

    /// A single folder.
    pub async fn get(&self, ctx: &CallContext, folder_id: &str) -> Result<Folder> {
        let folder_id = require_id("folder_id", folder_id)?;
        self.transport
            .decode(ctx, Method::GET, &format!("/v2/folder/{folder_id}"))
            .await
            .map_err(|e| e.context("get folder"))
    }

    /// Create a folder in a space.
    pub async fn create(
        &self,
        ctx: &CallContext,
        space_id: &str,
        request: &CreateFolderRequest,
    ) -> Result<Folder> {
        let space_id = require_id("space_id", space_id)?;
        self.transport
            .decode_with_body(ctx, Method::POST, &format!("/v2/space/{space_id}/folder"), request)
            .await
            .map_err(|e| e.context("create folder"))
    }

    /// Delete a folder.
    pub async fn delete(&self, ctx: &CallContext, folder_id: &str) -> Result<()> {
        let folder_id = require_id("folder_id", folder_id)?;
        self.transport
            .execute::<()>(ctx, Method::DELETE, &format!("/v2/folder/{folder_id}"), None)
            .await
            .map_err(|e| e.context("delete folder"))
    }
}

impl Resource for Folders {
    fn transport(&self) -> &Transport {
        &self.transport
    }
}
