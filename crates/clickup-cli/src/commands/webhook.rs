//! Webhook commands

use std::io::Write;

use anyhow::Result;
use clickup::{CreateWebhookRequest, CreatedWebhook, Webhook};

use super::{App, or_empty};
use crate::cli::WebhookCommand;
use crate::output::Tabular;

impl Tabular for Webhook {
    const COLUMNS: &'static [&'static str] = &["id", "endpoint", "events", "health"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.endpoint.clone(),
            self.events.join(","),
            or_empty(self.health.as_ref().map(|h| h.status.as_str())),
        ]
    }
}

impl Tabular for CreatedWebhook {
    const COLUMNS: &'static [&'static str] = &["id"];

    fn row(&self) -> Vec<String> {
        vec![self.id.clone()]
    }
}

pub async fn run<W: Write>(cmd: WebhookCommand, app: &mut App<W>) -> Result<()> {
    match cmd {
        WebhookCommand::List => {
            let team_id = app.team_id()?;
            let webhooks = app.client.webhooks().list(&app.ctx, team_id).await?;
            app.show_list(&webhooks)?;
        }
        WebhookCommand::Create {
            endpoint,
            events,
            space,
            list,
        } => {
            let team_id = app.team_id()?;
            let mut builder = CreateWebhookRequest::builder();
            builder.endpoint(endpoint).events(events);
            if let Some(space) = space {
                builder.space_id(space);
            }
            if let Some(list) = list {
                builder.list_id(list);
            }
            let created = app
                .client
                .webhooks()
                .create(&app.ctx, team_id, &builder.build()?)
                .await?;
            app.show(&created)?;
        }
        WebhookCommand::Delete { id } => {
            app.client.webhooks().delete(&app.ctx, &id).await?;
            app.confirm("Deleted webhook", &id)?;
        }
    }
    Ok(())
}
