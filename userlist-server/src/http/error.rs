//! API error types with IntoResponse
//!
//! HTML-facing failures answer with a short plain-text message and log the
//! cause. The JSON endpoint returns the database error text to the caller.

use axum::extract::rejection::{FormRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::error::DbError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Form body could not be parsed (400)
    InvalidForm(FormRejection),

    /// Query string could not be parsed (400)
    InvalidQuery(QueryRejection),

    /// Loading users for the home page failed (500, logged)
    LoadUsers(DbError),

    /// Inserting a user failed (500, logged)
    AddUser(DbError),

    /// Loading users for the JSON API failed (500, error text in body)
    ListUsers(DbError),

    /// Home page template failed to render (500, logged)
    Render(minijinja::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidForm(rejection) => {
                tracing::debug!(error = %rejection, "rejected form body");
                (StatusCode::BAD_REQUEST, "Invalid form data").into_response()
            }
            Self::InvalidQuery(rejection) => {
                tracing::debug!(error = %rejection, "rejected query string");
                (StatusCode::BAD_REQUEST, "Invalid form data").into_response()
            }
            Self::LoadUsers(e) => {
                tracing::error!(error = %e, "failed to load users");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to load users").into_response()
            }
            Self::AddUser(e) => {
                tracing::error!(error = %e, "failed to add user");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to add user").into_response()
            }
            Self::ListUsers(e) => {
                tracing::error!(error = %e, "failed to list users");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": e.to_string() })),
                )
                    .into_response()
            }
            Self::Render(e) => {
                tracing::error!(error = %e, "failed to render home page");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
            }
        }
    }
}
