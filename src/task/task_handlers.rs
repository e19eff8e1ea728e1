use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use super::{
    task_dto::{CreateTaskRequest, MessageResponse, UpdateTaskRequest},
    task_models::Task,
};
use crate::{
    error::{AppError, Result},
    state::AppState,
};

/// Get all tasks
#[utoipa::path(
    get,
    path = "/api/tasks",
    responses(
        (status = 200, description = "List of tasks", body = Vec<Task>)
    ),
    tag = "tasks"
)]
pub async fn get_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>> {
    let tasks = state.task_service.list_tasks().await?;
    Ok(Json(tasks))
}

/// Get a single task by id
#[utoipa::path(
    get,
    path = "/api/tasks/{id}",
    params(
        ("id" = i64, Path, description = "Task id")
    ),
    responses(
        (status = 200, description = "Task found", body = Task),
        (status = 404, description = "Task not found")
    ),
    tag = "tasks"
)]
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Task>> {
    let task = state.task_service.get_task(id).await?;
    Ok(Json(task))
}

/// Create a new task
#[utoipa::path(
    post,
    path = "/api/tasks",
    request_body = CreateTaskRequest,
    responses(
        (status = 201, description = "Task created", body = Task),
        (status = 400, description = "Missing or empty required field")
    ),
    tag = "tasks"
)]
pub async fn create_task(
    State(state): State<AppState>,
    Json(payload): Json<CreateTaskRequest>,
) -> Result<impl IntoResponse> {
    // Rejected payloads never reach the store, so the counter is untouched.
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let task = state.task_service.create_task(payload).await?;

    Ok((StatusCode::CREATED, Json(task)))
}

/// Update an existing task; omitted fields are preserved
#[utoipa::path(
    put,
    path = "/api/tasks/{id}",
    params(
        ("id" = i64, Path, description = "Task id")
    ),
    request_body = UpdateTaskRequest,
    responses(
        (status = 200, description = "Updated task", body = Task),
        (status = 404, description = "Task not found")
    ),
    tag = "tasks"
)]
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateTaskRequest>,
) -> Result<Json<Task>> {
    let task = state.task_service.update_task(id, payload).await?;
    Ok(Json(task))
}

/// Delete a task by id
#[utoipa::path(
    delete,
    path = "/api/tasks/{id}",
    params(
        ("id" = i64, Path, description = "Task id")
    ),
    responses(
        (status = 200, description = "Task deleted", body = MessageResponse),
        (status = 404, description = "Task not found")
    ),
    tag = "tasks"
)]
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>> {
    state.task_service.delete_task(id).await?;

    Ok(Json(MessageResponse {
        message: "Task deleted successfully".to_string(),
    }))
}

/// Delete all tasks; the id counter keeps its value
#[utoipa::path(
    delete,
    path = "/api/tasks",
    responses(
        (status = 200, description = "All tasks deleted", body = MessageResponse)
    ),
    tag = "tasks"
)]
pub async fn delete_all_tasks(
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>> {
    let deleted = state.task_service.delete_all_tasks().await?;
    tracing::info!("Deleted {} tasks", deleted);

    Ok(Json(MessageResponse {
        message: "All tasks deleted successfully".to_string(),
    }))
}
