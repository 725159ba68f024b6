mod cli;
mod commands;
mod display;

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use docreview_core::{DocumentSource, SessionContext};
use docreview_store::{InMemorySource, JsonSource};
use tracing::Level;

use crate::cli::Cli;
use crate::commands::Credentials;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
    tracing::info!("docreview v{}", env!("CARGO_PKG_VERSION"));

    let source: Box<dyn DocumentSource> = match &cli.data {
        Some(path) => Box::new(
            JsonSource::load(path).with_context(|| format!("loading {}", path.display()))?,
        ),
        None => Box::new(InMemorySource::seeded()),
    };

    let mut session: SessionContext = SessionContext::default();
    let credentials = Credentials {
        email: cli.email.as_deref().unwrap_or_default(),
        password: cli.password.as_deref().unwrap_or_default(),
    };
    let mut out = io::stdout().lock();

    commands::run(&mut out, source.as_ref(), &mut session, credentials, cli.command)?;
    out.flush()?;
    Ok(())
}
