//! Comment commands

use std::io::Write;

use anyhow::Result;
use clickup::types::timestamp::format_millis;
use clickup::{Comment, CreateCommentRequest, CreatedComment};

use super::{App, or_empty};
use crate::cli::CommentCommand;
use crate::output::{Tabular, truncate};

impl Tabular for Comment {
    const COLUMNS: &'static [&'static str] = &["id", "author", "date", "text"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            or_empty(self.user.as_ref().map(|u| u.display_name())),
            self.date.as_deref().map(format_millis).unwrap_or_default(),
            truncate(&self.comment_text.replace('\n', " "), 80),
        ]
    }
}

impl Tabular for CreatedComment {
    const COLUMNS: &'static [&'static str] = &["id"];

    fn row(&self) -> Vec<String> {
        vec![self.id.clone()]
    }
}

pub async fn run<W: Write>(cmd: CommentCommand, app: &mut App<W>) -> Result<()> {
    match cmd {
        CommentCommand::List { task_id } => {
            let comments = app.client.comments().list(&app.ctx, &task_id).await?;
            app.show_list(&comments)?;
        }
        CommentCommand::Add {
            task_id,
            text,
            notify_all,
        } => {
            let request = CreateCommentRequest::builder()
                .comment_text(text)
                .notify_all(notify_all)
                .build()?;
            let created = app.client.comments().create(&app.ctx, &task_id, &request).await?;
            app.show(&created)?;
        }
    }
    Ok(())
}
