//! Task attachment endpoints

use std::path::Path;

use tokio::io::AsyncRead;

use super::{Resource, require_id};
use crate::context::CallContext;
use crate::error::Result;
use crate::http::{MultipartUpload, Transport};
use crate::types::{ATTACHMENT_FIELD, Attachment};

/// Attachments API resource.
#[derive(Debug, Clone)]
pub struct Attachments {
    transport: Transport,
}

impl Attachments {
    /// Create a new Attachments resource.
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Upload the contents of `reader` to a task as `file_name`.
    ///
    /// Only the base name of `file_name` is sent.
    pub async fn upload<R>(
        &self,
        ctx: &CallContext,
        task_id: &str,
        reader: R,
        file_name: &str,
    ) -> Result<Attachment>
    where
        R: AsyncRead + Send + Sync + 'static,
    {
        let task_id = require_id("task_id", task_id)?;
        let upload = MultipartUpload::new(
            format!("/v2/task/{task_id}/attachment"),
            ATTACHMENT_FIELD,
            reader,
            file_name,
        );
        self.transport
            .send_multipart(ctx, upload)
            .await
            .map_err(|e| e.context("upload attachment"))
    }

    /// Upload a file from disk to a task under its own name.
    pub async fn upload_file(
        &self,
        ctx: &CallContext,
        task_id: &str,
        file: impl AsRef<Path>,
    ) -> Result<Attachment> {
        let task_id = require_id("task_id", task_id)?;
        let upload = MultipartUpload::from_path(
            format!("/v2/task/{task_id}/attachment"),
            ATTACHMENT_FIELD,
            file,
        )
        .await
        .map_err(|e| e.context("open attachment"))?;

        self.transport
            .send_multipart(ctx, upload)
            .await
            .map_err(|e| e.context("upload attachment"))
    }
}

impl Resource for Attachments {
    fn transport(&self) -> &Transport {
        &self.transport
    }
}
