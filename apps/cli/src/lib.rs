pub mod app;
pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod transcript;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::App;
use crate::config::Config;
use crate::console::Console;

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Diagnostics go to stderr; stdout carries the dialogue.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    let config = Config::parse();
    tracing::info!(?config, "starting");

    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout());
    App::new(config).run(&mut console);

    Ok(())
}
