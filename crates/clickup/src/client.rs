//! Main client for the ClickUp API

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use crate::{
    config::{ClientConfig, ClientConfigBuilder},
    error::Result,
    http::Transport,
    resources::{
        Attachments, Auth, Comments, Folders, Goals, Lists, Spaces, Tasks, Teams, TimeTracking,
        Webhooks,
    },
};

/// Main client for interacting with the ClickUp API.
///
/// Cheap to clone; clones share the transport and the lazily created
/// resource services.
///
/// # Example
///
/// ```rust,no_run
/// use clickup::{CallContext, Client};
///
/// # async fn example() -> clickup::Result<()> {
/// let client = Client::builder().credential("pk_...").build()?;
/// let ctx = CallContext::background();
/// for team in client.teams().list(&ctx).await? {
///     println!("{} {}", team.id, team.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    transport: Transport,

    auth: OnceLock<Auth>,
    teams: OnceLock<Teams>,
    spaces: OnceLock<Spaces>,
    folders: OnceLock<Folders>,
    lists: OnceLock<Lists>,
    tasks: OnceLock<Tasks>,
    comments: OnceLock<Comments>,
    attachments: OnceLock<Attachments>,
    webhooks: OnceLock<Webhooks>,
    time_tracking: OnceLock<TimeTracking>,
    goals: OnceLock<Goals>,
}

impl Client {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Create a client from a configuration object.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`](crate::Error::InvalidConfig) if the
    /// base URL is blank, unparsable or not http/https, and
    /// [`Error::InvalidHeaderValue`](crate::Error::InvalidHeaderValue) if the
    /// user agent or credential cannot be sent as a header.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Ok(Self::from_transport(Transport::new(config)?))
    }

    /// Create a client from `CLICKUP_*` environment variables.
    ///
    /// See [`ClientConfig::from_env`].
    pub fn from_env() -> Result<Self> {
        Self::from_config(ClientConfig::from_env())
    }

    /// Create a client around an existing transport.
    pub fn from_transport(transport: Transport) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                transport,
                auth: OnceLock::new(),
                teams: OnceLock::new(),
                spaces: OnceLock::new(),
                folders: OnceLock::new(),
                lists: OnceLock::new(),
                tasks: OnceLock::new(),
                comments: OnceLock::new(),
                attachments: OnceLock::new(),
                webhooks: OnceLock::new(),
                time_tracking: OnceLock::new(),
                goals: OnceLock::new(),
            }),
        }
    }

    /// The shared transport, for calls no service covers.
    pub fn transport(&self) -> &Transport {
        &self.inner.transport
    }

    /// Base URL of the API.
    pub fn base_url(&self) -> &str {
        self.inner.transport.base_url()
    }

    /// Access the authorization endpoints.
    pub fn auth(&self) -> &Auth {
        self.inner.auth.get_or_init(|| Auth::new(self.transport().clone()))
    }

    /// Access the workspace (team) endpoints.
    pub fn teams(&self) -> &Teams {
        self.inner.teams.get_or_init(|| Teams::new(self.transport().clone()))
    }

    /// Access the space endpoints.
    pub fn spaces(&self) -> &Spaces {
        self.inner.spaces.get_or_init(|| Spaces::new(self.transport().clone()))
    }

    /// Access the folder endpoints.
    pub fn folders(&self) -> &Folders {
        self.inner.folders.get_or_init(|| Folders::new(self.transport().clone()))
    }

    /// Access the list endpoints.
    pub fn lists(&self) -> &Lists {
        self.inner.lists.get_or_init(|| Lists::new(self.transport().clone()))
    }

    /// Access the task endpoints.
    pub fn tasks(&self) -> &Tasks {
        self.inner.tasks.get_or_init(|| Tasks::new(self.transport().clone()))
    }

    /// Access the comment endpoints.
    pub fn comments(&self) -> &Comments {
        self.inner
            .comments
            .get_or_init(|| Comments::new(self.transport().clone()))
    }

    /// Access the attachment endpoints.
    pub fn attachments(&self) -> &Attachments {
        self.inner
            .attachments
            .get_or_init(|| Attachments::new(self.transport().clone()))
    }

    /// Access the webhook endpoints.
    pub fn webhooks(&self) -> &Webhooks {
        self.inner
            .webhooks
            .get_or_init(|| Webhooks::new(self.transport().clone()))
    }

    /// Access the time tracking endpoints.
    pub fn time_tracking(&self) -> &TimeTracking {
        self.inner
            .time_tracking
            .get_or_init(|| TimeTracking::new(self.transport().clone()))
    }

    /// Access the goal endpoints.
    pub fn goals(&self) -> &Goals {
        self.inner.goals.get_or_init(|| Goals::new(self.transport().clone()))
    }
}

/// Builder for creating a configured Client.
#[derive(Debug, Default)]
pub struct ClientBuilder {
    config: ClientConfigBuilder,
}

impl ClientBuilder {
    /// Set the credential sent verbatim in the `Authorization` header.
    pub fn credential(mut self, credential: impl Into<String>) -> Self {
        self.config = self.config.credential(credential);
        self
    }

    /// Set the base URL for the API.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config = self.config.base_url(base_url);
        self
    }

    /// Set the `User-Agent` header value.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config = self.config.user_agent(user_agent);
        self
    }

    /// Set the overall HTTP timeout applied to every request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.timeout(timeout);
        self
    }

    /// Build the client with the configured options.
    pub fn build(self) -> Result<Client> {
        Client::from_config(self.config.build())
    }
}
