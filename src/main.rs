//! Visit Map Server
//!
//! Seeds the areas table, then serves the map API and static files.

use std::{net::SocketAddr, sync::Arc};

use tokio::{signal, sync::watch};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use visit_map::{
    api,
    config::{AppConfig, LoggingConfig},
    repository::{self, Repository},
    seed,
    services::Services,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Missing settings end the process before anything else starts
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&config.logging);

    tracing::info!("Starting Visit Map Server v{}", env!("CARGO_PKG_VERSION"));

    let pool = repository::connect(&config.database).await?;
    tracing::info!("Connected to database");

    repository::run_migrations(&pool).await?;
    tracing::info!("Database migrations completed");

    let repository = Repository::new(pool.clone());
    let seeded = seed::seed_areas(&repository.areas, &config.seed.file).await?;
    tracing::info!(
        "Loaded {} areas from {} ({} stored)",
        seeded,
        config.seed.file.display(),
        repository.areas.count().await?
    );

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    let grace = config.server.shutdown_grace();

    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(Services::new(Arc::new(repository))),
    };
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on http://{}", addr);

    let (stop_tx, mut stop_rx) = watch::channel(false);
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        let _ = stop_rx.changed().await;
    });
    let mut server = tokio::spawn(async move { server.await });

    tokio::select! {
        result = &mut server => {
            pool.close().await;
            result??;
            return Ok(());
        }
        _ = shutdown_signal() => {}
    }

    // Stop accepting, then give in-flight requests a bounded grace period
    let _ = stop_tx.send(true);
    match tokio::time::timeout(grace, &mut server).await {
        Ok(result) => result??,
        Err(_) => {
            tracing::warn!(
                "In-flight requests still running after {:?}, abandoning them",
                grace
            );
            server.abort();
        }
    }

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("visit_map={},tower_http=info", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                tracing::info!("Received terminate signal, shutting down");
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
