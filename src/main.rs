use anyhow::Result;
use axum::{ServiceExt, body::Body};
use revisionable_core::application::{
    ports::{record_store::RecordStore, settings::SettingsSource, time::Clock},
    services::ApplicationServices,
};
use revisionable_core::config::AppConfig;
use revisionable_core::domain::{registry::TypeRegistry, revision::RevisionRepository};
use revisionable_core::infrastructure::{
    database,
    registry::InMemoryTypeRegistry,
    repositories::{PostgresRecordStore, PostgresRevisionRepository},
    time::SystemClock,
};
use revisionable_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let registry: Arc<dyn TypeRegistry> =
        Arc::new(InMemoryTypeRegistry::load(config.type_registry_path())?);

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let revision_repo: Arc<dyn RevisionRepository> =
        Arc::new(PostgresRevisionRepository::new(pool.clone()));
    let record_store: Arc<dyn RecordStore> = Arc::new(PostgresRecordStore::new(pool));
    let settings: Arc<dyn SettingsSource> = Arc::new(config.settings());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        revision_repo,
        registry,
        record_store,
        settings,
        config.user_type_keys(),
        clock,
    ));

    let state = HttpState::new(services, config.allowed_origins());

    let app = build_router(state);
    let service = app.into_service::<Body>().into_make_service();

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
