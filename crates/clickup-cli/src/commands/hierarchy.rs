//! Workspace, space, folder and list commands

use std::io::Write;

use anyhow::Result;
use clickup::{CreateFolderRequest, CreateListRequest, Folder, List, Space, Team};

use super::{App, or_empty};
use crate::cli::{FolderCommand, ListCommand, SpaceCommand, TeamCommand};
use crate::output::Tabular;

impl Tabular for Team {
    const COLUMNS: &'static [&'static str] = &["id", "name", "members"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.members.len().to_string(),
        ]
    }
}

impl Tabular for Space {
    const COLUMNS: &'static [&'static str] = &["id", "name", "private", "archived"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.private.to_string(),
            self.archived.to_string(),
        ]
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        let statuses = self
            .statuses
            .iter()
            .map(|s| s.status.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        vec![
            ("id", self.id.clone()),
            ("name", self.name.clone()),
            ("private", self.private.to_string()),
            ("archived", self.archived.to_string()),
            ("statuses", statuses),
        ]
    }
}

impl Tabular for Folder {
    const COLUMNS: &'static [&'static str] = &["id", "name", "lists", "tasks"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.lists.len().to_string(),
            or_empty(self.task_count.as_deref()),
        ]
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        let lists = self
            .lists
            .iter()
            .map(|l| format!("{} ({})", l.name, l.id))
            .collect::<Vec<_>>()
            .join(", ");
        vec![
            ("id", self.id.clone()),
            ("name", self.name.clone()),
            ("space", or_empty(self.space.as_ref().map(|s| s.id.as_str()))),
            ("tasks", or_empty(self.task_count.as_deref())),
            ("archived", self.archived.to_string()),
            ("lists", lists),
        ]
    }
}

impl Tabular for List {
    const COLUMNS: &'static [&'static str] = &["id", "name", "tasks"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.task_count.map(|n| n.to_string()).unwrap_or_default(),
        ]
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("id", self.id.clone()),
            ("name", self.name.clone()),
            ("content", or_empty(self.content.as_deref())),
            ("folder", or_empty(self.folder.as_ref().map(|f| f.id.as_str()))),
            ("space", or_empty(self.space.as_ref().map(|s| s.id.as_str()))),
            ("tasks", self.task_count.map(|n| n.to_string()).unwrap_or_default()),
            ("archived", self.archived.to_string()),
        ]
    }
}

pub async fn run_team<W: Write>(cmd: TeamCommand, app: &mut App<W>) -> Result<()> {
    match cmd {
        TeamCommand::List => {
            let teams = app.client.teams().list(&app.ctx).await?;
            app.show_list(&teams)?;
        }
    }
    Ok(())
}

pub async fn run_space<W: Write>(cmd: SpaceCommand, app: &mut App<W>) -> Result<()> {
    match cmd {
        SpaceCommand::List { archived } => {
            let team_id = app.team_id()?;
            let spaces = app.client.spaces().list(&app.ctx, team_id, archived).await?;
            app.show_list(&spaces)?;
        }
        SpaceCommand::Get { id } => {
            let space = app.client.spaces().get(&app.ctx, &id).await?;
            app.show(&space)?;
        }
    }
    Ok(())
}

pub async fn run_folder<W: Write>(cmd: FolderCommand, app: &mut App<W>) -> Result<()> {
    match cmd {
        FolderCommand::List { space_id, archived } => {
            let folders = app.client.folders().list(&app.ctx, &space_id, archived).await?;
            app.show_list(&folders)?;
        }
        FolderCommand::Get { id } => {
            let folder = app.client.folders().get(&app.ctx, &id).await?;
            app.show(&folder)?;
        }
        FolderCommand::Create { space_id, name } => {
            let request = CreateFolderRequest::builder().name(name).build()?;
            let folder = app.client.folders().create(&app.ctx, &space_id, &request).await?;
            app.show(&folder)?;
        }
        FolderCommand::Delete { id } => {
            app.client.folders().delete(&app.ctx, &id).await?;
            app.confirm("Deleted folder", &id)?;
        }
    }
    Ok(())
}

pub async fn run_list<W: Write>(cmd: ListCommand, app: &mut App<W>) -> Result<()> {
    match cmd {
        ListCommand::List {
            folder,
            space,
            archived,
        } => {
            let lists = match (folder, space) {
                (Some(folder_id), _) => app.client.lists().list(&app.ctx, &folder_id, archived).await?,
                (None, Some(space_id)) => {
                    app.client
                        .lists()
                        .list_folderless(&app.ctx, &space_id, archived)
                        .await?
                }
                (None, None) => return Err(clickup::Error::MissingIdentifier("folder_id").into()),
            };
            app.show_list(&lists)?;
        }
        ListCommand::Get { id } => {
            let list = app.client.lists().get(&app.ctx, &id).await?;
            app.show(&list)?;
        }
        ListCommand::Create {
            folder_id,
            name,
            content,
        } => {
            let mut builder = CreateListRequest::builder();
            builder.name(name);
            if let Some(content) = content {
                builder.content(content);
            }
            let list = app.client.lists().create(&app.ctx, &folder_id, &builder.build()?).await?;
            app.show(&list)?;
        }
        ListCommand::Delete { id } => {
            app.client.lists().delete(&app.ctx, &id).await?;
            app.confirm("Deleted list", &id)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::offline_app;
    use assert_matches::assert_matches;

    #[test]
    fn test_folder_row() {
        let folder: Folder = serde_json::from_value(serde_json::json!({
            "id": "457",
            "name": "Q3",
            "task_count": "12",
            "lists": [{"id": "1", "name": "A"}]
        }))
        .unwrap();
        assert_eq!(folder.row(), vec!["457", "Q3", "1", "12"]);
    }

    #[tokio::test]
    async fn test_space_list_needs_team() {
        let mut app = offline_app(None);
        let error = run_space(SpaceCommand::List { archived: false }, &mut app)
            .await
            .unwrap_err();
        assert_matches!(
            error.downcast_ref::<clickup::Error>(),
            Some(clickup::Error::MissingIdentifier("team_id"))
        );
        assert!(app.out.is_empty());
    }
}
