use axum::{extract::State, http::HeaderMap, Json};
use serde_json::{json, Value};
use crate::advisor;
use crate::api::auth::user_id;
use crate::api::models::AdvisorRequest;
use crate::api::AppState;

pub async fn ask_advisor(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<AdvisorRequest>,
) -> Json<Value> {
    let store = state.session(&user_id(&headers));
    let reply = advisor::respond(&req.message);
    store.add_advisor_message(reply);
    Json(json!({ "reply": reply }))
}
