use std::sync::Arc;

use anyhow::Context;
use lexa_audio::NullPlayer;
use lexa_client::DictionaryClient;
use lexa_config::Config;
use lexa_core::LookupController;
use lexa_i18n::LocaleStore;
use tokio::signal;
use tracing_subscriber::EnvFilter;

mod controller;
mod events;
mod io;
mod render;
mod state;
mod ui;


use self::controller::AppController;
use self::state::AppState;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Logs go to stderr so rendered entries stay clean on stdout.
    if atty::is(atty::Stream::Stderr) {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Config::new();
    tracing::info!("definition service: {}", config.api.base_url);

    let locales = LocaleStore::embedded(&config.i18n.default_language)
        .context("loading embedded locale tables")?;
    let source = Arc::new(DictionaryClient::new(config.api.base_url.clone()));
    let lookup = LookupController::new(source);

    let state = Arc::new(AppState::new(locales));
    let app = AppController::new(state);
    let mut tasks = app.spawn_tasks(lookup, Arc::new(NullPlayer));

    // Shutdown future (Ctrl+C)
    let shutdown = async {
        signal::ctrl_c().await.expect("failed to listen for ctrl+c");
    };

    tokio::select! {
        _ = shutdown => {
            tracing::info!("Shutdown requested");
            app.shutdown();
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::warn!("task exited"),
                Some(Ok(Err(e))) => tracing::error!("task failed: {e:#}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
            app.shutdown();
        }
    }

    while tasks.join_next().await.is_some() {}

    Ok(())
}
