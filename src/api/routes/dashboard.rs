use axum::{extract::State, http::HeaderMap, Json};
use serde_json::{json, Value};
use crate::api::auth::user_id;
use crate::api::AppState;

pub async fn get_dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<Value> {
    let user = user_id(&headers);
    let store = state.session(&user);
    let snapshot = store.snapshot();

    Json(json!({
        "user_id": user,
        "safety_score": snapshot.safety_score(),
        "quests": snapshot.quests,
        "alerts": snapshot.alerts,
        "advisor_messages": snapshot.advisor_messages,
        "scans_completed": snapshot.scans_completed,
        "threats_blocked": snapshot.threats_blocked,
        "persist_error": store.last_persist_error(),
    }))
}
