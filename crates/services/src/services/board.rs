//! Board assembly, slug generation, cascade deletes, and the move/reorder
//! primitives consumed by the client reconciliation engine.

use db::models::{
    board::{Board, CreateBoard},
    column::Column,
    task::Task,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::{debug, info};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum BoardServiceError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("board not found")]
    BoardNotFound,
    #[error("column not found")]
    ColumnNotFound,
    #[error("task not found")]
    TaskNotFound,
}

/// A column with its active tasks in display order.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct ColumnWithTasks {
    #[serde(flatten)]
    #[ts(flatten)]
    pub column: Column,
    pub tasks: Vec<Task>,
}

impl std::ops::Deref for ColumnWithTasks {
    type Target = Column;
    fn deref(&self) -> &Self::Target {
        &self.column
    }
}

/// Payload of `GET /api/boards/{id}` and the client's resync source.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct BoardDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub board: Board,
    pub columns: Vec<ColumnWithTasks>,
}

impl std::ops::Deref for BoardDetail {
    type Target = Board;
    fn deref(&self) -> &Self::Target {
        &self.board
    }
}

/// Lowercase the name and collapse non-alphanumeric runs to single dashes.
fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(ch.to_ascii_lowercase());
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }
    if slug.is_empty() {
        slug.push_str("board");
    }
    slug
}

pub struct BoardService;

impl BoardService {
    /// Create a board with a slug derived from its name. On a slug
    /// collision a short id suffix is appended.
    pub async fn create_board(
        pool: &SqlitePool,
        data: &CreateBoard,
    ) -> Result<Board, BoardServiceError> {
        let board_id = Uuid::new_v4();
        let mut slug = slugify(&data.name);
        if Board::find_by_slug(pool, &slug).await?.is_some() {
            let suffix = board_id.simple().to_string();
            slug = format!("{slug}-{}", &suffix[..8]);
        }

        let board = Board::create(pool, board_id, data, &slug).await?;
        info!(board_id = %board.id, slug = %board.slug, "created board");
        Ok(board)
    }

    /// Board with nested columns and tasks, everything in display order.
    pub async fn board_detail(
        pool: &SqlitePool,
        board_id: Uuid,
    ) -> Result<BoardDetail, BoardServiceError> {
        let board = Board::find_by_id(pool, board_id)
            .await?
            .ok_or(BoardServiceError::BoardNotFound)?;

        let mut columns = Vec::new();
        for column in Column::find_by_board_id(pool, board_id).await? {
            let tasks = Task::find_by_column_id(pool, column.id).await?;
            columns.push(ColumnWithTasks { column, tasks });
        }

        Ok(BoardDetail { board, columns })
    }

    /// Delete a board, its columns, and their tasks in one transaction.
    /// The schema declares no FK cascade, so the sweep happens here.
    pub async fn delete_board(pool: &SqlitePool, board_id: Uuid) -> Result<(), BoardServiceError> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            "DELETE FROM tasks
             WHERE column_id IN (SELECT id FROM columns WHERE board_id = $1)",
        )
        .bind(board_id)
        .execute(&mut *tx)
        .await?;
        sqlx::query("DELETE FROM columns WHERE board_id = $1")
            .bind(board_id)
            .execute(&mut *tx)
            .await?;
        let deleted = Board::delete(&mut *tx, board_id).await?;

        if deleted == 0 {
            return Err(BoardServiceError::BoardNotFound);
        }
        tx.commit().await?;
        info!(board_id = %board_id, "deleted board");
        Ok(())
    }

    /// Delete a column together with its tasks. Tasks go with the column
    /// rather than being orphaned.
    pub async fn delete_column(
        pool: &SqlitePool,
        column_id: Uuid,
    ) -> Result<(), BoardServiceError> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM tasks WHERE column_id = $1")
            .bind(column_id)
            .execute(&mut *tx)
            .await?;
        let deleted = Column::delete(&mut *tx, column_id).await?;

        if deleted == 0 {
            return Err(BoardServiceError::ColumnNotFound);
        }
        tx.commit().await?;
        info!(column_id = %column_id, "deleted column with its tasks");
        Ok(())
    }

    /// Single-row move. Siblings keep their old `order` values until the
    /// caller issues the follow-up reorder for the affected columns.
    pub async fn move_task(
        pool: &SqlitePool,
        task_id: Uuid,
        target_column_id: Uuid,
        target_order: i64,
    ) -> Result<Task, BoardServiceError> {
        if Column::find_by_id(pool, target_column_id).await?.is_none() {
            return Err(BoardServiceError::ColumnNotFound);
        }

        let task = Task::move_to_column(pool, task_id, target_column_id, target_order)
            .await?
            .ok_or(BoardServiceError::TaskNotFound)?;

        debug!(
            task_id = %task_id,
            target_column_id = %target_column_id,
            target_order,
            "moved task"
        );
        Ok(task)
    }

    pub async fn reorder_tasks(
        pool: &SqlitePool,
        column_id: Uuid,
        task_ids: &[Uuid],
    ) -> Result<(), BoardServiceError> {
        if Column::find_by_id(pool, column_id).await?.is_none() {
            return Err(BoardServiceError::ColumnNotFound);
        }

        Task::reorder(pool, task_ids).await?;
        debug!(column_id = %column_id, count = task_ids.len(), "reordered tasks");
        Ok(())
    }

    pub async fn reorder_columns(
        pool: &SqlitePool,
        board_id: Uuid,
        column_ids: &[Uuid],
    ) -> Result<(), BoardServiceError> {
        if Board::find_by_id(pool, board_id).await?.is_none() {
            return Err(BoardServiceError::BoardNotFound);
        }

        Column::reorder(pool, board_id, column_ids).await?;
        debug!(board_id = %board_id, count = column_ids.len(), "reordered columns");
        Ok(())
    }
}
