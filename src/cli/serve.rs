use std::path::Path;
use crate::api;
use crate::cli::commands::ServeArgs;
use crate::config::{parse_config, CampusGuardConfig};
use crate::errors::CampusGuardError;
use tracing::info;

pub async fn handle_serve(args: ServeArgs) -> Result<(), CampusGuardError> {
    let config = match &args.config {
        Some(path) => parse_config(Path::new(path)).await?,
        None => CampusGuardConfig::default(),
    };

    let host = config.host(args.host);
    let port = config.port(args.port);
    let db_path = config.db_path(args.db);
    let cache_dir = config.cache_dir(args.cache_dir);
    info!(host = %host, port, db = %db_path, "Starting API server");

    let state = api::create_app_state(&db_path, &cache_dir, &config).await?;
    let app = api::build_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| CampusGuardError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}
