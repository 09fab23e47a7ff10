//! Contact list server runtime.
//!
//! [`ServerHandle`] owns the whole lifecycle: storage selection, migrations,
//! the HTTP listener and graceful shutdown. The CLI binary is a thin wrapper
//! around it.

use std::net::SocketAddr;
use std::sync::Arc;

use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::application::ContactService;
use crate::config::AppConfig;
use crate::domain::ContactRepository;
use crate::infrastructure::database::migrator::Migrator;
use crate::infrastructure::{init_database, InMemoryContactRepository, SeaOrmContactRepository};
use crate::interfaces::http::create_api_router;
use crate::shared::shutdown::{ShutdownCoordinator, ShutdownSignal};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
}

// ── Options ────────────────────────────────────────────────────────

/// Options for starting the service.
pub struct ServerOptions {
    pub config: AppConfig,
    /// Bring the schema up to date on startup (default: true).
    pub auto_migrate: bool,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            auto_migrate: true,
        }
    }
}

// ── ServerHandle ───────────────────────────────────────────────────

/// Handle to a running contact list service.
///
/// ```rust,no_run
/// use contact_list::server::{ServerHandle, ServerOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let handle = ServerHandle::start(ServerOptions::default()).await?;
///     handle.install_signal_handler();
///     handle.wait().await;
///     Ok(())
/// }
/// ```
pub struct ServerHandle {
    /// The configuration the server was started with.
    pub config: AppConfig,
    /// Address the listener is actually bound to.
    pub local_addr: SocketAddr,

    db: Option<DatabaseConnection>,
    shutdown: ShutdownCoordinator,
    api_task: JoinHandle<()>,
}

impl ServerHandle {
    /// Start the service with the given options.
    ///
    /// This will:
    /// 1. Pick the repository (`memory` or a database url)
    /// 2. Connect and run migrations, when a database is used
    /// 3. Bind the HTTP listener and start serving
    pub async fn start(opts: ServerOptions) -> Result<Self, ServerError> {
        let app_cfg = opts.config;

        info!("Starting contact list service...");

        let (repository, db) = build_repository(&app_cfg, opts.auto_migrate).await?;
        let service = Arc::new(ContactService::new(repository));
        let router = create_api_router(service);

        let shutdown = ShutdownCoordinator::new(app_cfg.server.shutdown_timeout);
        let shutdown_signal = shutdown.signal();

        let addr = app_cfg.server.address();
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: addr.clone(),
                source,
            })?;
        let local_addr = listener.local_addr().map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;
        info!(%local_addr, "REST API server listening");
        info!("Swagger UI available at http://{}/docs/", local_addr);

        let api_shutdown = shutdown_signal.clone();
        let api_server = axum::serve(listener, router).with_graceful_shutdown(async move {
            api_shutdown.wait().await;
            info!("REST API server received shutdown signal");
        });

        let api_task = tokio::spawn(async move {
            if let Err(e) = api_server.await {
                error!(error = %e, "REST API server error");
                // Unblock anyone waiting on the handle.
                shutdown_signal.trigger();
            }
        });

        Ok(Self {
            config: app_cfg,
            local_addr,
            db,
            shutdown,
            api_task,
        })
    }

    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.signal()
    }

    /// Install OS signal listeners (SIGTERM, SIGINT) that trigger shutdown.
    pub fn install_signal_handler(&self) {
        self.shutdown.start_signal_listener();
    }

    /// Trigger graceful shutdown (non-blocking).
    pub fn trigger_shutdown(&self) {
        self.shutdown.signal().trigger();
    }

    /// Waits for the shutdown signal, lets in-flight requests finish within
    /// the configured timeout, then closes the database.
    pub async fn wait(self) {
        let abort = self.api_task.abort_handle();
        let api_task = self.api_task;

        let drained = self
            .shutdown
            .drain(async move {
                match api_task.await {
                    Ok(()) => info!("REST API server stopped"),
                    Err(e) => error!(error = %e, "REST API server task panicked"),
                }
            })
            .await;
        if !drained {
            abort.abort();
        }

        if let Some(db) = self.db {
            if let Err(e) = db.close().await {
                warn!(error = %e, "Error closing database connection");
            } else {
                info!("Database connection closed");
            }
        }

        info!("Contact list service shutdown complete");
    }

    /// Trigger shutdown and wait for completion.
    pub async fn shutdown(self) {
        info!("Shutting down contact list service...");
        self.trigger_shutdown();
        self.wait().await;
    }

    pub fn is_running(&self) -> bool {
        !self.api_task.is_finished()
    }
}

// ── Helpers ────────────────────────────────────────────────────────

async fn build_repository(
    app_cfg: &AppConfig,
    auto_migrate: bool,
) -> Result<(Arc<dyn ContactRepository>, Option<DatabaseConnection>), ServerError> {
    if app_cfg.database.is_memory() {
        info!("Using in-memory contact storage");
        return Ok((Arc::new(InMemoryContactRepository::new()), None));
    }

    let db = init_database(&app_cfg.to_database_config()).await?;

    if auto_migrate {
        info!("Running database migrations...");
        Migrator::up(&db, None).await?;
        info!("Migrations completed");
    }

    let repository = Arc::new(SeaOrmContactRepository::new(db.clone()));
    Ok((repository, Some(db)))
}

/// Initialize tracing (logging) from the application config.
///
/// Call this once at process startup (before [`ServerHandle::start`]).
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    fn options(url: &str) -> ServerOptions {
        let mut config = AppConfig::default();
        config.server.host = "127.0.0.1".into();
        config.server.port = 0;
        config.server.shutdown_timeout = 5;
        config.database.url = url.into();
        config.database.max_connections = 1;
        config.database.min_connections = 1;
        ServerOptions {
            config,
            auto_migrate: true,
        }
    }

    async fn http_get(addr: SocketAddr, path: &str) -> String {
        let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
        let request = format!(
            "GET {} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
            path
        );
        stream.write_all(request.as_bytes()).await.unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        response
    }

    #[tokio::test]
    async fn serves_health_with_memory_storage() {
        let handle = ServerHandle::start(options("memory")).await.unwrap();
        assert!(handle.is_running());

        let response = http_get(handle.local_addr, "/health").await;
        assert!(response.starts_with("HTTP/1.1 200"), "{response}");

        handle.shutdown().await;
    }

    #[tokio::test]
    async fn migrates_and_serves_with_sqlite() {
        let handle = ServerHandle::start(options("sqlite::memory:")).await.unwrap();

        let response = http_get(handle.local_addr, "/api/contacts").await;
        assert!(response.starts_with("HTTP/1.1 200"), "{response}");
        assert!(response.contains("\"totalCount\":0"), "{response}");

        handle.shutdown().await;
    }

    #[tokio::test]
    async fn bind_failure_is_reported() {
        let first = ServerHandle::start(options("memory")).await.unwrap();
        let mut opts = options("memory");
        opts.config.server.port = first.local_addr.port();

        let err = ServerHandle::start(opts).await.err().unwrap();
        assert!(matches!(err, ServerError::Bind { .. }));

        first.shutdown().await;
    }
}
