use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

use flight_roster::adapters::http::{build_app, FlightHandlers};
use flight_roster::adapters::{
    AllowListAccessChecker, AuditLogHandler, InMemoryEventBus, InMemorySessionRegistry,
    FLIGHT_EVENT_TYPES,
};
use flight_roster::application::IdleReaper;
use flight_roster::config::{AppConfig, LogFormat, ServerConfig};
use flight_roster::domain::catalog::RoleCatalog;
use flight_roster::ports::{EventSubscriber, SessionRegistry};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let catalog = match config.catalog.path() {
        Some(path) => RoleCatalog::from_yaml_file(path)?,
        None => RoleCatalog::flight_crew(),
    };
    tracing::info!(roles = catalog.len(), "Role catalog loaded");

    let registry = Arc::new(InMemorySessionRegistry::new(Arc::new(catalog)));
    let bus = Arc::new(InMemoryEventBus::new());
    bus.subscribe_all(FLIGHT_EVENT_TYPES, Arc::new(AuditLogHandler));

    let allowed = config.access.allowed_creators_list();
    if allowed.is_empty() {
        tracing::info!("Flight creation open to every actor");
    }
    let access = Arc::new(AllowListAccessChecker::new(allowed));

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let reaper_task = config.registry.idle_timeout().map(|max_idle| {
        let reaper = IdleReaper::new(
            registry.clone() as Arc<dyn SessionRegistry>,
            bus.clone(),
            max_idle,
            config.registry.reap_interval(),
        );
        tracing::info!(idle_secs = max_idle.as_secs(), "Idle reaper enabled");
        tokio::spawn(async move { reaper.run(shutdown_rx).await })
    });

    let handlers = FlightHandlers::from_ports(registry, access, bus);
    let app = build_app(handlers, config.server.request_timeout());

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    let _ = shutdown_tx.send(true);
    if let Some(task) = reaper_task {
        let _ = task.await;
    }
    tracing::info!("Shut down");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let _ = match server.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.with_target(false).try_init(),
    };
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
