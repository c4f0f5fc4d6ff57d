use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use serde_json::{json, Value};
use crate::api::auth::user_id;
use crate::api::models::ScanRequest;
use crate::api::AppState;
use crate::errors::CampusGuardError;

pub async fn run_scan(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<ScanRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let store = state.session(&user_id(&headers));

    let outcome = state.orchestrator.scan(&req.url, &store).await.map_err(|e| {
        let status = match e {
            CampusGuardError::InvalidTarget(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({"error": e.to_string()})))
    })?;

    Ok(Json(json!({
        "id": outcome.id,
        "url": outcome.url,
        "verdict": outcome.verdict.as_str(),
        "report": outcome.report,
        "message": outcome.message,
    })))
}
