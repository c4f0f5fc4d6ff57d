use axum::{extract::State, http::HeaderMap, Json};
use serde_json::{json, Value};
use crate::api::auth::user_id;
use crate::api::AppState;

pub async fn list_alerts(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<Value> {
    let store = state.session(&user_id(&headers));
    let alerts = store.snapshot().alerts;
    Json(json!({ "total": alerts.len(), "alerts": alerts }))
}

pub async fn clear_alerts(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<Value> {
    let store = state.session(&user_id(&headers));
    store.clear_alerts();
    Json(json!({ "cleared": true }))
}
