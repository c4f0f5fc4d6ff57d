pub mod routes;
pub mod models;
pub mod auth;

use std::path::PathBuf;
use std::sync::Arc;
use axum::Router;
use dashmap::DashMap;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use crate::config::CampusGuardConfig;
use crate::dashboard::{DashboardStore, SnapshotCache};
use crate::db::Database;
use crate::errors::CampusGuardError;
use crate::pipeline::ScanOrchestrator;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub cache_dir: PathBuf,
    pub sessions: Arc<DashMap<String, Arc<DashboardStore>>>,
    pub orchestrator: Arc<ScanOrchestrator>,
}

impl AppState {
    pub fn new(db: Database, cache_dir: PathBuf, orchestrator: ScanOrchestrator) -> Self {
        Self {
            db,
            cache_dir,
            sessions: Arc::new(DashMap::new()),
            orchestrator: Arc::new(orchestrator),
        }
    }

    /// Per-user store handle, created lazily on first request for an
    /// identity. Creation rehydrates from the cache snapshot and overlays
    /// backend quest completions.
    pub fn session(&self, user_id: &str) -> Arc<DashboardStore> {
        self.sessions
            .entry(user_id.to_string())
            .or_insert_with(|| {
                Arc::new(DashboardStore::open(
                    user_id,
                    self.db.clone(),
                    SnapshotCache::new(&self.cache_dir),
                ))
            })
            .clone()
    }
}

pub async fn create_app_state(
    db_path: &str,
    cache_dir: &str,
    config: &CampusGuardConfig,
) -> Result<AppState, CampusGuardError> {
    let db = Database::new(db_path)?;
    let orchestrator = ScanOrchestrator::from_config(config)?;
    Ok(AppState::new(db, PathBuf::from(cache_dir), orchestrator))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", axum::routing::get(routes::health::health_check))
        .route("/api/scan", axum::routing::post(routes::scan::run_scan))
        .route("/api/dashboard", axum::routing::get(routes::dashboard::get_dashboard))
        .route("/api/quests", axum::routing::get(routes::quests::list_quests))
        .route("/api/quests/:id/verify", axum::routing::post(routes::quests::verify_quest))
        .route("/api/alerts", axum::routing::get(routes::alerts::list_alerts).delete(routes::alerts::clear_alerts))
        .route("/api/advisor", axum::routing::post(routes::advisor::ask_advisor))
        .layer(axum::middleware::from_fn(auth::api_auth_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
