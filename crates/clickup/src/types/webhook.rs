//! Webhooks

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use super::{id_string, optional_id_string};

/// A registered webhook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Webhook {
    /// Webhook ID
    #[serde(deserialize_with = "id_string")]
    pub id: String,

    /// Creator user ID
    #[serde(default, deserialize_with = "optional_id_string")]
    pub userid: Option<String>,

    /// Workspace ID
    #[serde(default, deserialize_with = "optional_id_string")]
    pub team_id: Option<String>,

    /// Delivery URL
    pub endpoint: String,

    /// Subscribed events
    #[serde(default)]
    pub events: Vec<String>,

    /// Health report, when included
    #[serde(default)]
    pub health: Option<WebhookHealth>,
}

/// Delivery health of a webhook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookHealth {
    /// `active`, `failing` or `suspended`
    pub status: String,

    /// Consecutive failed deliveries
    #[serde(default)]
    pub fail_count: u32,
}

/// Envelope of `GET /v2/team/{team_id}/webhook`.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhooksResponse {
    /// Webhooks of the workspace
    #[serde(default)]
    pub webhooks: Vec<Webhook>,
}

/// Body of `POST /v2/team/{team_id}/webhook`.
#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
#[builder(setter(into, strip_option))]
pub struct CreateWebhookRequest {
    /// Delivery URL
    pub endpoint: String,

    /// Events to subscribe to, `*` for all
    pub events: Vec<String>,

    /// Restrict to one space
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub space_id: Option<String>,

    /// Restrict to one list
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub list_id: Option<String>,
}

impl CreateWebhookRequest {
    /// Create a builder for constructing a CreateWebhookRequest.
    pub fn builder() -> CreateWebhookRequestBuilder {
        CreateWebhookRequestBuilder::default()
    }
}

/// Response of `POST /v2/team/{team_id}/webhook`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedWebhook {
    /// New webhook ID
    #[serde(deserialize_with = "id_string")]
    pub id: String,

    /// The registered webhook, including its signing secret
    #[serde(default)]
    pub webhook: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_webhooks_deserialization() {
        let json = r#"{"webhooks":[{"id":"4b67ac88","userid":183,"team_id":108,"endpoint":"https://example.com/hook","events":["taskCreated"],"health":{"status":"active","fail_count":0}}]}"#;
        let response: WebhooksResponse = serde_json::from_str(json).unwrap();
        let hook = &response.webhooks[0];
        assert_eq!(hook.userid.as_deref(), Some("183"));
        assert_eq!(hook.team_id.as_deref(), Some("108"));
        assert_eq!(hook.health.as_ref().unwrap().status, "active");
    }

    #[test]
    fn test_create_webhook_requires_events() {
        let result = CreateWebhookRequest::builder()
            .endpoint("https://example.com/hook")
            .build();
        assert!(result.is_err());
    }
}
