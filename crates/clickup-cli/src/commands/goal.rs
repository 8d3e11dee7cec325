//! Goal commands

use std::io::Write;

use anyhow::Result;
use clickup::Goal;
use clickup::types::timestamp::format_millis;

use super::{App, or_empty};
use crate::cli::GoalCommand;
use crate::output::Tabular;

impl Tabular for Goal {
    const COLUMNS: &'static [&'static str] = &["id", "name", "progress", "due"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.percent_completed
                .map(|p| format!("{p:.0}%"))
                .unwrap_or_default(),
            self.due_date.as_deref().map(format_millis).unwrap_or_default(),
        ]
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields: Vec<_> = Self::COLUMNS.iter().copied().zip(self.row()).collect();
        fields.push(("description", or_empty(self.description.as_deref())));
        fields.push(("url", or_empty(self.pretty_url.as_deref())));
        fields
    }
}

pub async fn run<W: Write>(cmd: GoalCommand, app: &mut App<W>) -> Result<()> {
    match cmd {
        GoalCommand::List => {
            let team_id = app.team_id()?;
            let goals = app.client.goals().list(&app.ctx, team_id).await?;
            app.show_list(&goals)?;
        }
        GoalCommand::Get { id } => {
            let goal = app.client.goals().get(&app.ctx, &id).await?;
            app.show(&goal)?;
        }
    }
    Ok(())
}
