use axum::{
    extract::Request,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
    Json,
};
use serde_json::json;

/// Identity is established by an upstream auth gateway; the API trusts the
/// forwarded `x-user-id` header and falls back to a guest identity.
pub fn user_id(headers: &HeaderMap) -> String {
    headers
        .get("x-user-id")
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.trim().is_empty())
        .unwrap_or("guest")
        .to_string()
}

pub async fn api_auth_middleware(
    request: Request,
    next: Next,
) -> Result<Response, (StatusCode, Json<serde_json::Value>)> {
    // Check for API token if CAMPUSGUARD_API_TOKEN is set
    if let Ok(expected_token) = std::env::var("CAMPUSGUARD_API_TOKEN") {
        if !expected_token.is_empty() {
            let auth_header = request.headers()
                .get("Authorization")
                .and_then(|v| v.to_str().ok());

            match auth_header {
                Some(header) if header.starts_with("Bearer ") => {
                    let token = &header[7..];
                    if token != expected_token {
                        return Err((StatusCode::UNAUTHORIZED, Json(json!({"error": "Invalid API token"}))));
                    }
                }
                _ => {
                    return Err((StatusCode::UNAUTHORIZED, Json(json!({"error": "Missing Authorization header"}))));
                }
            }
        }
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_defaults_to_guest() {
        let headers = HeaderMap::new();
        assert_eq!(user_id(&headers), "guest");
    }

    #[test]
    fn test_user_id_from_header() {
        let mut headers = HeaderMap::new();
        headers.insert("x-user-id", "alice".parse().unwrap());
        assert_eq!(user_id(&headers), "alice");
    }

    #[test]
    fn test_blank_user_id_defaults_to_guest() {
        let mut headers = HeaderMap::new();
        headers.insert("x-user-id", "  ".parse().unwrap());
        assert_eq!(user_id(&headers), "guest");
    }
}
