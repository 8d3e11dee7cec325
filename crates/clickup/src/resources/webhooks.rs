//! Webhook endpoints

use http::Method;

use super::{Resource, require_id};
use crate::context::CallContext;
use crate::error::Result;
use crate::http::Transport;
use crate::types::{CreateWebhookRequest, CreatedWebhook, Webhook, WebhooksResponse};

/// Webhooks API resource.
#[derive(Debug, Clone)]
pub struct Webhooks {
    transport: Transport,
}

impl Webhooks {
    /// Create a new Webhooks resource.
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Webhooks registered by the credential in a workspace.
    pub async fn list(&self, ctx: &CallContext, team_id: &str) -> Result<Vec<Webhook>> {
        let team_id = require_id("team_id", team_id)?;
        let response: WebhooksResponse = self
            .transport
            .decode(ctx, Method::GET, &format!("/v2/team/{team_id}/webhook"))
            .await
            .map_err(|e| e.context("list webhooks"))?;
        Ok(response.webhooks)
    }

    /// Register a webhook.
    pub async fn create(
        &self,
        ctx: &CallContext,
        team_id: &str,
        request: &CreateWebhookRequest,
    ) -> Result<CreatedWebhook> {
        let team_id = require_id("team_id", team_id)?;
        self.transport
            .decode_with_body(ctx, Method::POST, &format!("/v2/team/{team_id}/webhook"), request)
            .await
            .map_err(|e| e.context("create webhook"))
    }

    /// Remove a webhook.
    pub async fn delete(&self, ctx: &CallContext, webhook_id: &str) -> Result<()> {
        let webhook_id = require_id("webhook_id", webhook_id)?;
        self.transport
            .execute::<()>(ctx, Method::DELETE, &format!("/v2/webhook/{webhook_id}"), None)
            .await
            .map_err(|e| e.context("delete webhook"))
    }
}

impl Resource for Webhooks {
    fn transport(&self) -> &Transport {
        &self.transport
    }
}
