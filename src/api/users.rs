use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::api::error::ApiJson;
use crate::api::server::AppState;
use crate::store::models::User;
use crate::store::repo::{DeleteOutcome, UpdateOutcome};

pub async fn list_users(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.users.list().await))
}

/// Unknown ids answer 200 with a blank user rather than 404.
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let user = state.users.get(&id).await.unwrap_or_default();
    (StatusCode::OK, Json(user))
}

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<User>,
) -> impl IntoResponse {
    (StatusCode::OK, Json(state.users.create(payload).await))
}

/// Unknown ids answer 200 with the whole collection.
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<User>,
) -> Response {
    match state.users.update(&id, payload).await {
        UpdateOutcome::Updated(user) => (StatusCode::OK, Json(user)).into_response(),
        UpdateOutcome::NotFound(users) => (StatusCode::OK, Json(users)).into_response(),
    }
}

/// Unknown ids answer 404 with the whole collection as the body.
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    match state.users.delete(&id).await {
        DeleteOutcome::Deleted => StatusCode::NO_CONTENT.into_response(),
        DeleteOutcome::NotFound(users) => (StatusCode::NOT_FOUND, Json(users)).into_response(),
    }
}
