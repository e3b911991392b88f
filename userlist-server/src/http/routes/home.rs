//! Home page: user list and add-user form

use axum::extract::rejection::{FormRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::response::{Html, Redirect};
use axum::routing::get;
use axum::{Form, Router};

use crate::http::error::ApiError;
use crate::http::render::render_home;
use crate::http::server::AppState;
use crate::models::UserName;

/// Decoded `key=value` pairs, duplicates kept in order
type Pairs = Vec<(String, String)>;

/// GET / - render all users
async fn show_home(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let users = state.store.list_users().await.map_err(ApiError::LoadUsers)?;
    let page = render_home(&users).map_err(ApiError::Render)?;
    Ok(Html(page))
}

/// First `name` value, body fields before query fields.
fn first_name<'a>(body: &'a Pairs, query: &'a Pairs) -> &'a str {
    body.iter()
        .chain(query)
        .find(|(key, _)| key == "name")
        .map(|(_, value)| value.as_str())
        .unwrap_or("")
}

/// POST / - insert a user if a name was given, then send the browser back
///
/// Bodies that are not `application/x-www-form-urlencoded` are ignored.
async fn add_user(
    State(state): State<AppState>,
    query: Result<Query<Pairs>, QueryRejection>,
    form: Result<Form<Pairs>, FormRejection>,
) -> Result<Redirect, ApiError> {
    let Query(query) = query.map_err(ApiError::InvalidQuery)?;
    let body = match form {
        Ok(Form(pairs)) => pairs,
        Err(FormRejection::InvalidFormContentType(_)) => Vec::new(),
        Err(rejection) => return Err(ApiError::InvalidForm(rejection)),
    };

    // Empty names are skipped, not rejected.
    if let Ok(name) = UserName::new(first_name(&body, &query)) {
        let user = state.store.insert_user(name).await.map_err(ApiError::AddUser)?;
        tracing::info!(id = user.id, "user added");
    }

    Ok(Redirect::to("/"))
}

/// Home routes
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(show_home).post(add_user))
}
