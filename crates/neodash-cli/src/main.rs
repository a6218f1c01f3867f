mod cli;
mod commands;
mod credentials;
mod output;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use neodash::{ClientConfig, HttpClient, LevelQuery, NeodashClient};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use credentials::Credentials;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let directive = if cli.verbose {
        "neodash=debug"
    } else {
        "neodash=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .with_writer(std::io::stderr)
        .init();

    let credentials_path = credentials::credentials_path()?;
    let saved = credentials::load(&credentials_path);

    let client = build_client(&cli, saved.as_ref());
    debug!("Using endpoint {}", client.config().base_url);

    match cli.command {
        Command::Login {
            steam_id,
            display_name,
        } => commands::login::run(&client, &steam_id, &display_name, &credentials_path),
        Command::Logout => commands::logout::run(&credentials_path),
        Command::HallOfFame {
            session,
            output,
            limit,
        } => {
            let session = credentials::resolve_session(&session, saved.as_ref())?;
            commands::hall_of_fame::run(&client, &session, &output, limit)
        }
        Command::Levels {
            session,
            query,
            output,
        } => {
            let session = credentials::resolve_session(&session, saved.as_ref())?;
            commands::levels::run(&client, &session, &LevelQuery::from(&query), &output)
        }
        Command::Overview {
            session,
            query,
            top,
        } => {
            let session = credentials::resolve_session(&session, saved.as_ref())?;
            commands::overview::run(&client, &session, &LevelQuery::from(&query), top)
        }
    }
}

/// Endpoint resolution: --endpoint/env > saved credentials > default
fn build_client(cli: &Cli, saved: Option<&Credentials>) -> HttpClient {
    let mut builder = ClientConfig::builder().timeout(Duration::from_secs(cli.timeout_secs));

    if let Some(endpoint) = cli
        .endpoint
        .clone()
        .or_else(|| saved.map(|c| c.endpoint.clone()))
    {
        builder = builder.base_url(endpoint);
    }
    if let Some(version) = &cli.protocol_version {
        builder = builder.protocol_version(version.clone());
    }

    NeodashClient::new(builder.build())
}
