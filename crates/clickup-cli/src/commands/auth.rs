//! Credential commands

use std::io::Write;

use anyhow::{Result, bail};
use clickup::{OAuthTokenRequest, User};
use serde::Serialize;

use super::{App, or_empty};
use crate::cli::AuthCommand;
use crate::output::Tabular;
use crate::settings::{FileConfig, config_path};

impl Tabular for User {
    const COLUMNS: &'static [&'static str] = &["id", "username", "email"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            or_empty(self.username.as_deref()),
            or_empty(self.email.as_deref()),
        ]
    }
}

/// Result of `auth token`. The token is only printed when it was not saved.
#[derive(Debug, Serialize)]
struct IssuedToken {
    access_token: Option<String>,
    saved_to: Option<String>,
}

impl Tabular for IssuedToken {
    const COLUMNS: &'static [&'static str] = &["access token", "saved to"];

    fn row(&self) -> Vec<String> {
        vec![
            or_empty(self.access_token.as_deref()),
            or_empty(self.saved_to.as_deref()),
        ]
    }
}

/// Commands that only touch the config file and need no client.
pub fn run_offline<W: Write>(cmd: &AuthCommand, out: &mut W) -> Result<bool> {
    match cmd {
        AuthCommand::SetKey { key, default_team } => {
            let path = config_path()?;
            let key = key.trim();
            if key.is_empty() {
                bail!("the API token must not be empty");
            }

            let mut config = FileConfig::load(&path)?;
            config.api_key = Some(key.to_string());
            if let Some(team) = default_team {
                config.team_id = Some(team.trim().to_string());
            }
            config.save(&path)?;

            tracing::info!(path = %path.display(), "stored API token");
            writeln!(out, "Saved token to {}", path.display())?;
            Ok(true)
        }
        AuthCommand::Path => {
            writeln!(out, "{}", config_path()?.display())?;
            Ok(true)
        }
        AuthCommand::Whoami | AuthCommand::Token { .. } => Ok(false),
    }
}

pub async fn run<W: Write>(cmd: AuthCommand, app: &mut App<W>) -> Result<()> {
    if run_offline(&cmd, &mut app.out)? {
        return Ok(());
    }

    match cmd {
        AuthCommand::Whoami => {
            let user = app.client.auth().authorized_user(&app.ctx).await?;
            app.show(&user)?;
        }
        AuthCommand::Token {
            client_id,
            client_secret,
            code,
            save,
        } => {
            let request = OAuthTokenRequest::new(client_id, client_secret, code);
            let token = app.client.auth().exchange_code(&app.ctx, &request).await?;

            let issued = if save {
                let path = config_path()?;
                let mut config = FileConfig::load(&path)?;
                config.api_key = Some(token.access_token);
                config.save(&path)?;
                IssuedToken {
                    access_token: None,
                    saved_to: Some(path.display().to_string()),
                }
            } else {
                IssuedToken {
                    access_token: Some(token.access_token),
                    saved_to: None,
                }
            };
            app.show(&issued)?;
        }
        AuthCommand::SetKey { .. } | AuthCommand::Path => {}
    }
    Ok(())
}
