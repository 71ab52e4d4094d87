use axum::{
    Router,
    extract::{Path, State},
    response::Json as ResponseJson,
    routing::{post, put},
};
use db::models::{
    board::Board,
    column::{Column, CreateColumn, UpdateColumn},
    task::ReorderColumns,
};
use services::services::board::BoardService;
use utils::response::{ApiResponse, SuccessResponse};
use uuid::Uuid;

use crate::{AppState, error::ApiError, extract::Json};

pub async fn create_column(
    State(state): State<AppState>,
    Json(payload): Json<CreateColumn>,
) -> Result<ResponseJson<ApiResponse<Column>>, ApiError> {
    if Board::find_by_id(&state.db.pool, payload.board_id)
        .await?
        .is_none()
    {
        return Err(ApiError::NotFound("board"));
    }

    let column = Column::create(&state.db.pool, Uuid::new_v4(), &payload).await?;
    Ok(ResponseJson(ApiResponse::success(column)))
}

pub async fn update_column(
    State(state): State<AppState>,
    Path(column_id): Path<Uuid>,
    Json(payload): Json<UpdateColumn>,
) -> Result<ResponseJson<ApiResponse<Column>>, ApiError> {
    let column = Column::update(&state.db.pool, column_id, &payload)
        .await?
        .ok_or(ApiError::NotFound("column"))?;
    Ok(ResponseJson(ApiResponse::success(column)))
}

/// DELETE /api/columns/{id}
/// Removes the column together with its tasks.
pub async fn delete_column(
    State(state): State<AppState>,
    Path(column_id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<()>>, ApiError> {
    BoardService::delete_column(&state.db.pool, column_id).await?;
    Ok(ResponseJson(ApiResponse::success(())))
}

/// POST /api/columns/reorder
/// Atomically renumbers the board's columns to match the given sequence.
pub async fn reorder_columns(
    State(state): State<AppState>,
    Json(payload): Json<ReorderColumns>,
) -> Result<ResponseJson<ApiResponse<SuccessResponse>>, ApiError> {
    BoardService::reorder_columns(&state.db.pool, payload.board_id, &payload.column_ids).await?;
    Ok(ResponseJson(ApiResponse::success(SuccessResponse::ok())))
}

pub fn router() -> Router<AppState> {
    Router::new().nest(
        "/columns",
        Router::new()
            .route("/", post(create_column))
            .route("/reorder", post(reorder_columns))
            .route("/{id}", put(update_column).delete(delete_column)),
    )
}
