pub mod openapi;
pub mod routes;
pub mod script;

use axum::Router;
use axum::http::{Method, header};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracker_core::{Tracker, TrackerError};
use tracker_db::{DbStore, schema};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DB_PATH: &str = "./tracking.db";

/// Where the server listens and keeps its database. Both are fixed.
#[derive(Debug, Clone)]
pub struct ServeConfig {
    pub addr: SocketAddr,
    pub db_path: PathBuf,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            db_path: PathBuf::from(DEFAULT_DB_PATH),
        }
    }
}

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("failed to open database {path}: {message}")]
    Database { path: String, message: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Shared handle to the one storage connection. Handlers never touch SQLite
/// on the async runtime; see [`AppState::run`].
#[derive(Clone)]
pub struct AppState {
    tracker: Arc<Mutex<Tracker<DbStore>>>,
}

impl AppState {
    pub fn new(store: DbStore) -> Self {
        Self {
            tracker: Arc::new(Mutex::new(Tracker::new(store))),
        }
    }

    /// Opens (creating if absent) the database file and ensures the schema.
    pub fn open(config: &ServeConfig) -> Result<Self, ServeError> {
        let conn = schema::open_and_migrate(&config.db_path).map_err(|err| ServeError::Database {
            path: config.db_path.display().to_string(),
            message: err.to_string(),
        })?;
        Ok(Self::new(DbStore::new(conn)))
    }

    /// Runs `f` against the tracker on the blocking pool.
    pub async fn run<T, F>(&self, f: F) -> Result<T, TrackerError>
    where
        F: FnOnce(&Tracker<DbStore>) -> Result<T, TrackerError> + Send + 'static,
        T: Send + 'static,
    {
        let tracker = Arc::clone(&self.tracker);
        tokio::task::spawn_blocking(move || {
            let guard = tracker.lock().map_err(|_| TrackerError::Internal {
                message: "storage handle poisoned".to_string(),
            })?;
            f(&guard)
        })
        .await
        .map_err(|err| TrackerError::Internal {
            message: err.to_string(),
        })?
    }
}

/// Browser pages on any origin may call the API.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::ACCEPT])
}

pub fn app(state: AppState) -> Router {
    routes::router(state)
        .layer(CatchPanicLayer::new())
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

pub async fn serve(config: ServeConfig) -> Result<(), ServeError> {
    let state = AppState::open(&config)?;
    tracing::info!(db_path = %config.db_path.display(), "database ready");
    let listener = TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "server is running");
    axum::serve(listener, app(state)).await?;
    Ok(())
}
