//! Attachment commands

use std::io::Write;

use anyhow::Result;
use clickup::Attachment;

use super::{App, or_empty};
use crate::cli::AttachmentCommand;
use crate::output::Tabular;

impl Tabular for Attachment {
    const COLUMNS: &'static [&'static str] = &["id", "title", "url"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            or_empty(self.title.as_deref()),
            or_empty(self.url.as_deref()),
        ]
    }
}

pub async fn run<W: Write>(cmd: AttachmentCommand, app: &mut App<W>) -> Result<()> {
    match cmd {
        AttachmentCommand::Upload { task_id, file } => {
            let attachment = app
                .client
                .attachments()
                .upload_file(&app.ctx, &task_id, &file)
                .await?;
            app.show(&attachment)?;
        }
    }
    Ok(())
}
