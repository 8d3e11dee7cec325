//! Authorization endpoints

use http::Method;

use super::Resource;
use crate::context::CallContext;
use crate::error::Result;
use crate::http::Transport;
use crate::types::{AuthorizedUserResponse, OAuthToken, OAuthTokenRequest, User};

/// Authorization API resource.
#[derive(Debug, Clone)]
pub struct Auth {
    transport: Transport,
}

impl Auth {
    /// Create a new Auth resource.
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// The user that owns the configured credential.
    pub async fn authorized_user(&self, ctx: &CallContext) -> Result<User> {
        let response: AuthorizedUserResponse = self
            .transport
            .decode(ctx, Method::GET, "/v2/user")
            .await
            .map_err(|e| e.context("get authorized user"))?;
        Ok(response.user)
    }

    /// Exchange an OAuth authorization code for an access token.
    ///
    /// The request never carries the configured credential.
    pub async fn exchange_code(
        &self,
        ctx: &CallContext,
        request: &OAuthTokenRequest,
    ) -> Result<OAuthToken> {
        self.transport
            .send_unauthenticated(ctx, "/v2/oauth/token", request)
            .await
            .map_err(|e| e.context("exchange oauth code"))
    }
}

impl Resource for Auth {
    fn transport(&self) -> &Transport {
        &self.transport
    }
}
