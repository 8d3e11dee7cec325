//! Credential and configuration store
//!
//! Settings come from three places, highest precedence first:
//! 1. command-line flags
//! 2. environment variables (including a `.env` file in the working directory)
//! 3. the config file at `<config dir>/clickup/config.toml`, or `$CLICKUP_CONFIG`
//!
//! Flags and environment are merged by clap; this module adds the file layer.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clickup::ClientConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::cli::GlobalArgs;

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "CLICKUP_CONFIG";

/// Contents of `config.toml`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConfig {
    /// Personal API token or OAuth access token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Default workspace ID for team-scoped commands
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,

    /// API base URL override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl FileConfig {
    /// Read the config file. A missing file yields an empty configuration.
    pub fn load(path: &Path) -> Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(e).with_context(|| format!("reading config file {}", path.display()));
            }
        };
        toml::from_str(&text).with_context(|| format!("parsing config file {}", path.display()))
    }

    /// Write the config file, creating its directory if needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating config directory {}", parent.display()))?;
        }
        let text = toml::to_string_pretty(self).context("encoding config file")?;
        fs::write(path, text).with_context(|| format!("writing config file {}", path.display()))?;
        restrict_permissions(path)
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
        .with_context(|| format!("restricting permissions of {}", path.display()))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<()> {
    Ok(())
}

/// Location of the config file.
pub fn config_path() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    dirs::config_dir()
        .map(|dir| dir.join("clickup").join("config.toml"))
        .context("cannot determine the user config directory; set CLICKUP_CONFIG")
}

/// Settings after applying precedence.
#[derive(Debug)]
pub struct Settings {
    pub api_key: SecretString,
    pub team_id: Option<String>,
    pub base_url: Option<String>,
    pub timeout: Option<Duration>,
}

impl Settings {
    /// Merge flags/environment over the file layer.
    pub fn resolve(args: &GlobalArgs, file: FileConfig) -> Self {
        let api_key = non_blank(args.api_key.clone())
            .or(non_blank(file.api_key))
            .unwrap_or_default();

        Self {
            api_key: SecretString::new(api_key.into_boxed_str()),
            team_id: non_blank(args.team_id.clone()).or(non_blank(file.team_id)),
            base_url: non_blank(args.base_url.clone()).or(non_blank(file.base_url)),
            timeout: args.timeout.map(Duration::from_secs),
        }
    }

    /// Client configuration for these settings.
    pub fn client_config(&self) -> ClientConfig {
        let mut builder = ClientConfig::builder()
            .credential(self.api_key.expose_secret())
            .user_agent(format!("clickup-cli/{}", env!("CARGO_PKG_VERSION")));
        if let Some(base_url) = &self.base_url {
            builder = builder.base_url(base_url.as_str());
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
