//! Task commands

use std::io::Write;

use anyhow::{Result, bail};
use clickup::types::timestamp::format_millis;
use clickup::{CreateTaskRequest, Task, TaskListParams, UpdateTaskRequest};

use super::{App, or_empty};
use crate::cli::TaskCommand;
use crate::output::{Tabular, truncate};

impl Tabular for Task {
    const COLUMNS: &'static [&'static str] = &["id", "name", "status", "priority", "due"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            truncate(&self.name, 60),
            or_empty(self.status.as_ref().map(|s| s.status.as_str())),
            or_empty(self.priority.as_ref().map(|p| p.priority.as_str())),
            self.due_date.as_deref().map(format_millis).unwrap_or_default(),
        ]
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        let assignees = self
            .assignees
            .iter()
            .map(|a| a.display_name())
            .collect::<Vec<_>>()
            .join(", ");
        vec![
            ("id", self.id.clone()),
            ("custom id", or_empty(self.custom_id.as_deref())),
            ("name", self.name.clone()),
            ("status", or_empty(self.status.as_ref().map(|s| s.status.as_str()))),
            ("priority", or_empty(self.priority.as_ref().map(|p| p.priority.as_str()))),
            ("assignees", assignees),
            ("creator", or_empty(self.creator.as_ref().map(|c| c.display_name()))),
            ("created", self.date_created.as_deref().map(format_millis).unwrap_or_default()),
            ("due", self.due_date.as_deref().map(format_millis).unwrap_or_default()),
            ("list", or_empty(self.list.as_ref().map(|l| l.id.as_str()))),
            ("parent", or_empty(self.parent.as_deref())),
            ("url", or_empty(self.url.as_deref())),
            ("description", or_empty(self.description.as_deref())),
        ]
    }
}

pub async fn run<W: Write>(cmd: TaskCommand, app: &mut App<W>) -> Result<()> {
    match cmd {
        TaskCommand::List {
            list_id,
            page,
            include_closed,
            archived,
            subtasks,
        } => {
            let params = list_params(page, include_closed, archived, subtasks);
            let response = app.client.tasks().list(&app.ctx, &list_id, &params).await?;
            app.show_list(&response.tasks)?;
        }
        TaskCommand::Get { id } => {
            let task = app.client.tasks().get(&app.ctx, &id).await?;
            app.show(&task)?;
        }
        TaskCommand::Create {
            list_id,
            name,
            description,
            priority,
            status,
            assignees,
            parent,
        } => {
            let mut builder = CreateTaskRequest::builder();
            builder.name(name).assignees(assignees);
            if let Some(description) = description {
                builder.description(description);
            }
            if let Some(priority) = priority {
                builder.priority(priority);
            }
            if let Some(status) = status {
                builder.status(status);
            }
            if let Some(parent) = parent {
                builder.parent(parent);
            }
            let task = app.client.tasks().create(&app.ctx, &list_id, &builder.build()?).await?;
            app.show(&task)?;
        }
        TaskCommand::Update {
            id,
            name,
            description,
            status,
            priority,
        } => {
            let request = UpdateTaskRequest {
                name,
                description,
                status,
                priority,
                ..UpdateTaskRequest::default()
            };
            if request.is_empty() {
                bail!("nothing to update; pass at least one of --name, --description, --status, --priority");
            }
            let task = app.client.tasks().update(&app.ctx, &id, &request).await?;
            app.show(&task)?;
        }
        TaskCommand::Delete { id } => {
            app.client.tasks().delete(&app.ctx, &id).await?;
            app.confirm("Deleted task", &id)?;
        }
    }
    Ok(())
}

/// Only flags the user actually set are sent.
fn list_params(page: Option<u32>, include_closed: bool, archived: bool, subtasks: bool) -> TaskListParams {
    let mut params = TaskListParams::new();
    if let Some(page) = page {
        params = params.page(page);
    }
    if include_closed {
        params = params.include_closed(true);
    }
    if archived {
        params = params.archived(true);
    }
    if subtasks {
        params = params.subtasks(true);
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::offline_app;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_list_params_only_set_flags() {
        assert_eq!(list_params(None, false, false, false), TaskListParams::new());
        assert_eq!(
            list_params(Some(0), true, false, true).to_query(),
            vec![
                ("page", "0".to_string()),
                ("include_closed", "true".to_string()),
                ("subtasks", "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_task_row() {
        let task: Task = serde_json::from_value(serde_json::json!({
            "id": "9hx",
            "name": "Write docs",
            "status": {"status": "open"},
            "priority": {"priority": "high"},
            "due_date": "0"
        }))
        .unwrap();
        assert_eq!(task.row(), vec!["9hx", "Write docs", "open", "high", "1970-01-01 00:00"]);
    }

    #[tokio::test]
    async fn test_empty_update_is_rejected_locally() {
        let mut app = offline_app(None);
        let cmd = TaskCommand::Update {
            id: "abc".to_string(),
            name: None,
            description: None,
            status: None,
            priority: None,
        };
        let error = run(cmd, &mut app).await.unwrap_err();
        assert!(error.to_string().contains("nothing to update"));
        assert!(error.downcast_ref::<clickup::Error>().is_none());
    }
}
