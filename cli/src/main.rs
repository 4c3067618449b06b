//! Concord CLI - binary entry point.
//!
//! ```text
//! main() -> Cli::parse -> Settings (config file, then flags) -> load rankings
//!        -> concord_core::reconcile_with -> report::render -> stdout
//! ```
//!
//! Logs go to stderr so stdout carries only the result document.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use concord::args::Cli;
use concord::input::load_ranking;
use concord::report;
use concord_config::Settings;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(env_filter)
        .init();
}

fn resolve_settings(request: &Cli) -> Result<Settings> {
    let mut settings = match &request.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load(),
    };
    if let Some(composition) = request.composition {
        settings.reconcile.composition = composition;
    }
    if let Some(output) = request.output() {
        settings.output = output;
    }
    Ok(settings)
}

fn run(request: &Cli) -> Result<()> {
    let settings = resolve_settings(request)?;
    let ranking_a = load_ranking(&request.ranking_a, "A")?;
    let ranking_b = load_ranking(&request.ranking_b, "B")?;

    let result = concord_core::reconcile_with(&ranking_a, &ranking_b, &settings.reconcile);
    tracing::info!(
        contradictions = result.contradiction_core.len(),
        clusters = result.consensus.len(),
        composition = %settings.reconcile.composition,
        "Reconciliation complete"
    );

    let rendered = report::render(&result, settings.output).context("failed to render result")?;
    let mut out = io::stdout().lock();
    writeln!(out, "{rendered}").context("failed to write result")?;
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    run(&cli)
}
