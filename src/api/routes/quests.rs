use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use serde_json::{json, Value};
use crate::api::auth::user_id;
use crate::api::AppState;
use crate::errors::CampusGuardError;

pub async fn list_quests(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<Value> {
    let store = state.session(&user_id(&headers));
    let snapshot = store.snapshot();
    Json(json!({
        "quests": snapshot.quests,
        "completed": snapshot.completed_quests(),
        "safety_score": snapshot.safety_score(),
    }))
}

pub async fn verify_quest(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let store = state.session(&user_id(&headers));

    match store.verify_quest(id) {
        Ok(()) => Ok(Json(json!({
            "verified": true,
            "quest_id": id,
            "safety_score": store.safety_score(),
        }))),
        Err(CampusGuardError::UnknownQuest(_)) => Err((
            StatusCode::NOT_FOUND,
            Json(json!({"error": format!("Quest {} not found", id)})),
        )),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": e.to_string()})),
        )),
    }
}
