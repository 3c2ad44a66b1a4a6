//! Admin CLI Entry Point
//!
//! Uses `anyhow` for startup errors; API failures are reported as toasts
//! and a non-zero exit code.

mod app;
mod cli;
mod console;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use platform::config::ApiConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::{App, session_dir};
use crate::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "admin=info,auth=info,orders=info,platform=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut api = ApiConfig::from_env().context("Invalid API configuration")?;
    if let Some(url) = cli.api_url.as_deref() {
        api = api.with_base_url(url).context("Invalid --api-url")?;
    }
    let session_dir = session_dir(cli.session_dir);

    tracing::debug!(
        api_url = %api.base_url,
        session_dir = %session_dir.display(),
        "Starting admin client"
    );

    let app = App::build(api, session_dir)?;
    app.run(cli.command).await
}
