//! HTTP routes over the todo service.
//!
//! # Responsibility
//! - Expose list/create/toggle/remove under `/api/todos`.
//! - Validate request bodies before they reach the service.
//! - Run blocking store work off the async runtime.
//!
//! # Invariants
//! - Handlers hold no state besides the shared service handle.
//! - A toggle miss is answered with 404; the service itself never fails on it.

use crate::error::ApiError;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, patch};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use todo_core::{core_version, RemoveOutcome, StoreResult, Todo, TodoService, TodoStore};

/// Shared service handle stored in router state.
pub type SharedService<S> = Arc<TodoService<S>>;

/// Body of `POST /api/todos`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateTodoRequest {
    pub text: String,
}

impl CreateTodoRequest {
    /// Returns the text when it carries at least one non-whitespace char.
    ///
    /// The text is forwarded untrimmed.
    pub fn validate(self) -> Result<String, ApiError> {
        if self.text.trim().is_empty() {
            return Err(ApiError::bad_request("`text` must not be empty"));
        }
        Ok(self.text)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Builds the todo router.
///
/// # Routes
///
/// - `GET /api/todos` - list every todo
/// - `POST /api/todos` - create a todo from `{"text": ...}`
/// - `PATCH /api/todos/:id` - toggle completion
/// - `DELETE /api/todos/:id` - remove a todo
/// - `GET /health` - liveness probe
pub fn router<S>(service: SharedService<S>) -> Router
where
    S: TodoStore + Send + Sync + 'static,
{
    Router::new()
        .route("/api/todos", get(list_todos::<S>).post(create_todo::<S>))
        .route(
            "/api/todos/:id",
            patch(toggle_todo::<S>).delete(remove_todo::<S>),
        )
        .route("/health", get(health))
        .with_state(service)
}

async fn list_todos<S>(
    State(service): State<SharedService<S>>,
) -> Result<Json<Vec<Todo>>, ApiError>
where
    S: TodoStore + Send + Sync + 'static,
{
    let todos = run_blocking(service, |service| service.list_all()).await?;
    Ok(Json(todos))
}

async fn create_todo<S>(
    State(service): State<SharedService<S>>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<Json<Todo>, ApiError>
where
    S: TodoStore + Send + Sync + 'static,
{
    let Json(request) =
        payload.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    let text = request.validate()?;
    let todo = run_blocking(service, move |service| service.create(text)).await?;
    Ok(Json(todo))
}

async fn toggle_todo<S>(
    State(service): State<SharedService<S>>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError>
where
    S: TodoStore + Send + Sync + 'static,
{
    let lookup = id.clone();
    match run_blocking(service, move |service| service.toggle_complete(&lookup)).await? {
        Some(todo) => Ok(Json(todo)),
        None => Err(ApiError::todo_not_found(&id)),
    }
}

async fn remove_todo<S>(
    State(service): State<SharedService<S>>,
    Path(id): Path<String>,
) -> Result<Json<RemoveOutcome>, ApiError>
where
    S: TodoStore + Send + Sync + 'static,
{
    let outcome = run_blocking(service, move |service| service.remove(&id)).await?;
    Ok(Json(outcome))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: core_version(),
    })
}

async fn run_blocking<S, T, F>(service: SharedService<S>, op: F) -> Result<T, ApiError>
where
    S: TodoStore + Send + Sync + 'static,
    T: Send + 'static,
    F: FnOnce(&TodoService<S>) -> StoreResult<T> + Send + 'static,
{
    let result = tokio::task::spawn_blocking(move || op(&service)).await?;
    Ok(result?)
}

#[cfg(test)]
mod tests {
    use super::CreateTodoRequest;
    use axum::http::StatusCode;

    #[test]
    fn validate_keeps_text_verbatim() {
        let request = CreateTodoRequest {
            text: "  buy milk ".to_string(),
        };
        assert_eq!(request.validate().unwrap(), "  buy milk ");
    }

    #[test]
    fn validate_rejects_blank_text() {
        for text in ["", "   ", "\n\t"] {
            let err = CreateTodoRequest {
                text: text.to_string(),
            }
            .validate()
            .unwrap_err();
            assert_eq!(err.status(), StatusCode::BAD_REQUEST);
            assert_eq!(err.code(), "BAD_REQUEST");
        }
    }
}
