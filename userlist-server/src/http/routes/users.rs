//! JSON mirror of the user list

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::UsersResponse;

/// GET /api/users
async fn list_users(State(state): State<AppState>) -> Result<Json<UsersResponse>, ApiError> {
    let users = state.store.list_users().await.map_err(ApiError::ListUsers)?;
    Ok(Json(UsersResponse { users }))
}

/// User API routes
pub fn router() -> Router<AppState> {
    Router::new().route("/api/users", get(list_users))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};

    use crate::http::testing::{body_text, get, post_form, send, test_app};

    #[tokio::test]
    async fn empty_table_is_empty_array() {
        let (app, _) = test_app();
        let response = send(&app, get("/api/users")).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
        assert_eq!(body_text(response).await, r#"{"users":[]}"#);
    }

    #[tokio::test]
    async fn posted_user_appears_once() {
        let (app, _) = test_app();
        send(&app, post_form("/", "name=Grace")).await;
        send(&app, post_form("/", "name=Ada")).await;

        let body: Value = serde_json::from_str(&body_text(send(&app, get("/api/users")).await).await).unwrap();
        assert_eq!(
            body,
            json!({"users": [{"id": 1, "name": "Grace"}, {"id": 2, "name": "Ada"}]})
        );
    }

    #[tokio::test]
    async fn store_failure_returns_error_text() {
        let (app, store) = test_app();
        store.close().await;

        let response = send(&app, get("/api/users")).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert!(body["error"].as_str().unwrap().starts_with("failed to load users"));
    }

    #[tokio::test]
    async fn post_is_405() {
        let (app, _) = test_app();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/users")
            .body(Body::empty())
            .unwrap();

        assert_eq!(send(&app, request).await.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
