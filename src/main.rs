use anyhow::Context;
use clap::Parser;

use moviefinder::cli::Cli;
use moviefinder::config::{resolve_token, Config};
use moviefinder::logging::init_tracing;
use moviefinder::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply_to(&mut config);
    config.validate().context("invalid command-line override")?;

    let token = resolve_token(&config.api)?;

    runtime::run(config, token, cli.query_text())
}
