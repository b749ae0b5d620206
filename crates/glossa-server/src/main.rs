use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use glossa_config::Config;
use glossa_core::LookupService;
use glossa_dictionary::DictionaryClient;
use glossa_store::{MemoryStore, WordStore, default_languages};
use glossa_translate::GoogleTranslateClient;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod geo;
mod routes;
mod state;

use self::geo::GeoClient;
use self::state::AppState;

/// Word lookup service
#[derive(Parser)]
struct Args {
    /// Bind host, overrides HOST
    #[arg(long)]
    host: Option<String>,

    /// Bind port, overrides PORT
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "glossa_server=info,glossa_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_ansi(atty::is(atty::Stream::Stdout)))
        .init();

    let args = Args::parse();
    let mut config = Config::new();
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let store = Arc::new(MemoryStore::new());
    // Populate the language registry up front, outside the lookup path.
    store.seed_languages(&default_languages()).await?;

    let default_language = store
        .default_language()
        .await?
        .map(|l| l.code)
        .context("language registry is empty after seeding")?;

    let timeout = config.request_timeout();
    let translator = Arc::new(GoogleTranslateClient::new(&config.translator, timeout));
    let dictionary = Arc::new(DictionaryClient::new(&config.dictionary, timeout));
    let lookup = LookupService::new(store.clone(), translator, dictionary);

    let geo = config
        .geolocation
        .enabled
        .then(|| GeoClient::new(&config.geolocation, timeout));
    if geo.is_none() {
        tracing::warn!("geolocation disabled, language defaults to {default_language:?}");
    }

    let state = Arc::new(AppState {
        lookup,
        geo,
        default_language,
    });

    let addr: SocketAddr = config
        .server
        .bind_addr()
        .parse()
        .context("invalid bind address")?;

    // Shutdown token (Ctrl+C)
    let cancel_token = CancellationToken::new();
    let shutdown_token = cancel_token.clone();
    tokio::spawn(async move {
        signal::ctrl_c().await.expect("failed to listen for ctrl+c");
        tracing::info!("Shutdown requested");
        shutdown_token.cancel();
    });

    tracing::info!("listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind to address")?;

    axum::serve(
        listener,
        routes::router(state).into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(cancel_token.cancelled_owned())
    .await
    .context("server error")?;

    Ok(())
}
