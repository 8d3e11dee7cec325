//! Time tracking commands

use std::io::Write;

use anyhow::Result;
use clickup::types::timestamp::{format_duration_millis, format_millis};
use clickup::{StartTimerRequest, TimeEntry, TimeRange};

use super::{App, or_empty};
use crate::cli::TimeCommand;
use crate::output::Tabular;

impl Tabular for TimeEntry {
    const COLUMNS: &'static [&'static str] = &["id", "task", "start", "duration", "description"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            or_empty(
                self.task
                    .as_ref()
                    .map(|t| t.name.as_deref().unwrap_or(t.id.as_str())),
            ),
            self.start.as_deref().map(format_millis).unwrap_or_default(),
            self.duration
                .as_deref()
                .map(format_duration_millis)
                .unwrap_or_default(),
            or_empty(self.description.as_deref()),
        ]
    }
}

const NO_TIMER: &str = "No timer running.";

pub async fn run<W: Write>(cmd: TimeCommand, app: &mut App<W>) -> Result<()> {
    let team_id = app.team_id()?.to_string();

    match cmd {
        TimeCommand::List { start, end } => {
            let mut range = TimeRange::new();
            if let Some(start) = start {
                range = range.start_date(start);
            }
            if let Some(end) = end {
                range = range.end_date(end);
            }
            let entries = app.client.time_tracking().list(&app.ctx, &team_id, &range).await?;
            app.show_list(&entries)?;
        }
        TimeCommand::Current => {
            let entry = app.client.time_tracking().current(&app.ctx, &team_id).await?;
            app.show_optional(entry.as_ref(), NO_TIMER)?;
        }
        TimeCommand::Start {
            task,
            description,
            billable,
        } => {
            let request = StartTimerRequest {
                tid: task,
                description,
                billable: billable.then_some(true),
            };
            let entry = app.client.time_tracking().start(&app.ctx, &team_id, &request).await?;
            app.show_optional(entry.as_ref(), "Timer started.")?;
        }
        TimeCommand::Stop => {
            let entry = app.client.time_tracking().stop(&app.ctx, &team_id).await?;
            app.show_optional(entry.as_ref(), NO_TIMER)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::offline_app;

    #[test]
    fn test_running_entry_row() {
        let entry: TimeEntry = serde_json::from_value(serde_json::json!({
            "id": "te-1",
            "task": {"id": "1vwwavv"},
            "start": "0",
            "duration": "-5"
        }))
        .unwrap();
        assert_eq!(entry.row(), vec!["te-1", "1vwwavv", "1970-01-01 00:00", "running", ""]);
    }

    #[tokio::test]
    async fn test_time_commands_need_team() {
        let mut app = offline_app(None);
        let error = run(TimeCommand::Current, &mut app).await.unwrap_err();
        assert!(matches!(
            error.downcast_ref::<clickup::Error>(),
            Some(clickup::Error::MissingIdentifier("team_id"))
        ));
    }
}
