use anyhow::{bail, Context};
use recipe_board_server::config::{self, Config};
use recipe_board_server::store::PgStore;
use recipe_board_server::{api, db, seed, telemetry, AppState};
use std::env;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Check for --openapi flag to dump spec and exit
    if env::args().any(|arg| arg == "--openapi") {
        println!("{}", api::openapi().to_pretty_json()?);
        return Ok(());
    }

    dotenvy::dotenv().ok();
    telemetry::init_telemetry(config::debug_from_env());

    let config = Config::load();

    if env::args().any(|arg| arg == "--init-db") {
        return init_db(&config);
    }

    let store = db::connect(&config);
    let address = config.bind_address();
    let app = recipe_board_server::app(AppState::new(config, store));

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Create the table and add sample recipes if it is empty.
fn init_db(config: &Config) -> anyhow::Result<()> {
    let Some(database_url) = config.database_url.as_deref() else {
        bail!("DATABASE_URL must be set to initialize the database");
    };

    let store = PgStore::new(db::create_pool(database_url));
    let applied = store.migrate()?;
    let seeded = seed::seed_if_empty(&store)?;

    info!(applied, seeded, "database initialized");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
