//! `clickup` command-line client

mod cli;
mod commands;
mod exit;
mod logging;
mod output;
mod settings;

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use clickup::{CallContext, CancellationToken, Client};

use crate::cli::{Cli, Command};
use crate::commands::App;
use crate::settings::{FileConfig, Settings, config_path};

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is normal.
    dotenvy::dotenv().ok();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { exit::USAGE } else { exit::SUCCESS };
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    logging::init(cli.global.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::from(exit::SUCCESS),
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("error: {err:#}");
            if let Some(hint) = exit::hint_for(&err) {
                eprintln!("hint: {hint}");
            }
            ExitCode::from(exit::code_for(&err))
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut stdout = io::stdout().lock();

    if let Command::Auth(cmd) = &cli.command
        && commands::auth::run_offline(cmd, &mut stdout)?
    {
        return Ok(());
    }

    let path = config_path()?;
    let settings = Settings::resolve(&cli.global, FileConfig::load(&path)?);
    tracing::debug!(config = %path.display(), team = ?settings.team_id, "resolved settings");

    let client = Client::from_config(settings.client_config())?;

    let token = CancellationToken::new();
    let on_interrupt = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("interrupted, cancelling request");
            on_interrupt.cancel();
        }
    });

    let mut app = App {
        client,
        team_id: settings.team_id,
        mode: cli.global.output,
        ctx: CallContext::background().with_cancellation(token),
        out: stdout,
    };
    commands::run(cli.command, &mut app).await
}
