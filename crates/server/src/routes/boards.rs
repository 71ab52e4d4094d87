use axum::{
    Router,
    extract::{Path, State},
    response::Json as ResponseJson,
    routing::get,
};
use db::models::board::{Board, CreateBoard, UpdateBoard};
use services::services::board::{BoardDetail, BoardService};
use utils::response::ApiResponse;
use uuid::Uuid;

use crate::{AppState, error::ApiError, extract::Json};

pub async fn list_boards(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiResponse<Vec<Board>>>, ApiError> {
    let boards = Board::find_all(&state.db.pool).await?;
    Ok(ResponseJson(ApiResponse::success(boards)))
}

pub async fn create_board(
    State(state): State<AppState>,
    Json(payload): Json<CreateBoard>,
) -> Result<ResponseJson<ApiResponse<Board>>, ApiError> {
    if payload.name.trim().is_empty() {
        return Err(ApiError::Validation("board name must not be empty".into()));
    }

    let board = BoardService::create_board(&state.db.pool, &payload).await?;
    Ok(ResponseJson(ApiResponse::success(board)))
}

/// GET /api/boards/{id}
/// Full board with nested columns and tasks; the client resync source.
pub async fn get_board(
    State(state): State<AppState>,
    Path(board_id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<BoardDetail>>, ApiError> {
    let detail = BoardService::board_detail(&state.db.pool, board_id).await?;
    Ok(ResponseJson(ApiResponse::success(detail)))
}

pub async fn update_board(
    State(state): State<AppState>,
    Path(board_id): Path<Uuid>,
    Json(payload): Json<UpdateBoard>,
) -> Result<ResponseJson<ApiResponse<Board>>, ApiError> {
    let board = Board::update(&state.db.pool, board_id, &payload)
        .await?
        .ok_or(ApiError::NotFound("board"))?;
    Ok(ResponseJson(ApiResponse::success(board)))
}

pub async fn delete_board(
    State(state): State<AppState>,
    Path(board_id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<()>>, ApiError> {
    BoardService::delete_board(&state.db.pool, board_id).await?;
    Ok(ResponseJson(ApiResponse::success(())))
}

pub fn router() -> Router<AppState> {
    Router::new().nest(
        "/boards",
        Router::new()
            .route("/", get(list_boards).post(create_board))
            .route(
                "/{id}",
                get(get_board).put(update_board).delete(delete_board),
            ),
    )
}
