use axum::{
    Router,
    extract::{Path, State},
    response::Json as ResponseJson,
    routing::{post, put},
};
use db::models::{
    column::Column,
    task::{CreateTask, MoveTask, ReorderTasks, Task, UpdateTask},
};
use services::services::board::BoardService;
use utils::response::{ApiResponse, SuccessResponse};
use uuid::Uuid;

use crate::{AppState, error::ApiError, extract::Json};

pub async fn create_task(
    State(state): State<AppState>,
    Json(payload): Json<CreateTask>,
) -> Result<ResponseJson<ApiResponse<Task>>, ApiError> {
    if payload.title.trim().is_empty() {
        return Err(ApiError::Validation("task title must not be empty".into()));
    }
    if Column::find_by_id(&state.db.pool, payload.column_id)
        .await?
        .is_none()
    {
        return Err(ApiError::NotFound("column"));
    }

    let task = Task::create(&state.db.pool, Uuid::new_v4(), &payload).await?;
    Ok(ResponseJson(ApiResponse::success(task)))
}

pub async fn update_task(
    State(state): State<AppState>,
    Path(task_id): Path<Uuid>,
    Json(payload): Json<UpdateTask>,
) -> Result<ResponseJson<ApiResponse<Task>>, ApiError> {
    let task = Task::update(&state.db.pool, task_id, &payload)
        .await?
        .ok_or(ApiError::NotFound("task"))?;
    Ok(ResponseJson(ApiResponse::success(task)))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path(task_id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<()>>, ApiError> {
    let deleted = Task::delete(&state.db.pool, task_id).await?;
    if deleted == 0 {
        return Err(ApiError::NotFound("task"));
    }
    Ok(ResponseJson(ApiResponse::success(())))
}

pub async fn archive_task(
    State(state): State<AppState>,
    Path(task_id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<Task>>, ApiError> {
    let task = Task::set_archived(&state.db.pool, task_id, true)
        .await?
        .ok_or(ApiError::NotFound("task"))?;
    Ok(ResponseJson(ApiResponse::success(task)))
}

/// POST /api/tasks/move
/// Single-row move; never renumbers siblings. Callers reorder affected
/// columns afterwards to repair order collisions.
pub async fn move_task(
    State(state): State<AppState>,
    Json(payload): Json<MoveTask>,
) -> Result<ResponseJson<ApiResponse<Task>>, ApiError> {
    let task = BoardService::move_task(
        &state.db.pool,
        payload.task_id,
        payload.target_column_id,
        payload.target_order,
    )
    .await?;
    Ok(ResponseJson(ApiResponse::success(task)))
}

/// POST /api/tasks/reorder
/// Pure renumbering of the listed tasks, transaction-scoped.
pub async fn reorder_tasks(
    State(state): State<AppState>,
    Json(payload): Json<ReorderTasks>,
) -> Result<ResponseJson<ApiResponse<SuccessResponse>>, ApiError> {
    BoardService::reorder_tasks(&state.db.pool, payload.column_id, &payload.task_ids).await?;
    Ok(ResponseJson(ApiResponse::success(SuccessResponse::ok())))
}

pub fn router() -> Router<AppState> {
    Router::new().nest(
        "/tasks",
        Router::new()
            .route("/", post(create_task))
            .route("/move", post(move_task))
            .route("/reorder", post(reorder_tasks))
            .route("/{id}", put(update_task).delete(delete_task))
            .route("/{id}/archive", post(archive_task)),
    )
}
