//! Command handlers
//!
//! Each handler makes one API call through the shared [`Client`] and prints
//! the result in the selected [`OutputMode`]. Errors are returned untouched so
//! `main` can map them to an exit code.

pub mod attachment;
pub mod auth;
pub mod comment;
pub mod goal;
pub mod hierarchy;
pub mod task;
pub mod time;
pub mod webhook;

use std::io::{self, Write};

use anyhow::Result;
use clickup::{CallContext, Client};
use serde::Serialize;

use crate::cli::Command;
use crate::output::{self, Confirmation, OutputMode, Tabular};

/// Everything a handler needs.
pub struct App<W> {
    pub client: Client,
    pub team_id: Option<String>,
    pub mode: OutputMode,
    pub ctx: CallContext,
    pub out: W,
}

impl<W: Write> App<W> {
    /// Workspace ID for team-scoped commands.
    pub fn team_id(&self) -> clickup::Result<&str> {
        self.team_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or(clickup::Error::MissingIdentifier("team_id"))
    }

    pub fn show<T: Tabular + Serialize>(&mut self, value: &T) -> io::Result<()> {
        output::emit(self.mode, value, &mut self.out)
    }

    pub fn show_list<T: Tabular + Serialize>(&mut self, items: &[T]) -> io::Result<()> {
        output::emit_list(self.mode, items, &mut self.out)
    }

    pub fn show_optional<T: Tabular + Serialize>(
        &mut self,
        value: Option<&T>,
        empty: &str,
    ) -> io::Result<()> {
        output::emit_optional(self.mode, value, empty, &mut self.out)
    }

    pub fn confirm(&mut self, action: &str, id: &str) -> io::Result<()> {
        output::emit_confirmation(self.mode, &Confirmation::new(action, id), &mut self.out)
    }
}

/// Run an API command. `auth set-key` and `auth path` are handled before a
/// client exists, in `main`.
pub async fn run<W: Write>(command: Command, app: &mut App<W>) -> Result<()> {
    match command {
        Command::Auth(cmd) => auth::run(cmd, app).await,
        Command::Team(cmd) => hierarchy::run_team(cmd, app).await,
        Command::Space(cmd) => hierarchy::run_space(cmd, app).await,
        Command::Folder(cmd) => hierarchy::run_folder(cmd, app).await,
        Command::List(cmd) => hierarchy::run_list(cmd, app).await,
        Command::Task(cmd) => task::run(cmd, app).await,
        Command::Comment(cmd) => comment::run(cmd, app).await,
        Command::Attachment(cmd) => attachment::run(cmd, app).await,
        Command::Webhook(cmd) => webhook::run(cmd, app).await,
        Command::Time(cmd) => time::run(cmd, app).await,
        Command::Goal(cmd) => goal::run(cmd, app).await,
    }
}

/// Display an optional string, empty when absent.
pub(crate) fn or_empty(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}
