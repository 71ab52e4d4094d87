use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{Executor, FromRow, Sqlite, SqlitePool};
use ts_rs::TS;
use uuid::Uuid;

/// A named bucket of tasks with a board-relative position.
///
/// `order` collisions are tolerated by the schema; display sort falls back
/// to `created_at` so they resolve stably until the next reorder.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: Uuid,
    pub title: String,
    pub order: i64,
    pub board_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct CreateColumn {
    pub board_id: Uuid,
    pub title: String,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct UpdateColumn {
    pub title: Option<String>,
}

const COLUMN_FIELDS: &str = r#"id, title, "order", board_id, created_at, updated_at"#;

impl Column {
    pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(&format!(
            "SELECT {COLUMN_FIELDS} FROM columns WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn find_by_board_id(
        pool: &SqlitePool,
        board_id: Uuid,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(&format!(
            r#"SELECT {COLUMN_FIELDS} FROM columns
               WHERE board_id = $1
               ORDER BY "order" ASC, created_at ASC"#
        ))
        .bind(board_id)
        .fetch_all(pool)
        .await
    }

    /// Appends the new column at the right edge of the board.
    pub async fn create(
        pool: &SqlitePool,
        column_id: Uuid,
        data: &CreateColumn,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(&format!(
            r#"INSERT INTO columns (id, title, "order", board_id)
               VALUES (
                   $1, $2,
                   (SELECT COALESCE(MAX("order") + 1, 0) FROM columns WHERE board_id = $3),
                   $3
               )
               RETURNING {COLUMN_FIELDS}"#
        ))
        .bind(column_id)
        .bind(&data.title)
        .bind(data.board_id)
        .fetch_one(pool)
        .await
    }

    pub async fn update(
        pool: &SqlitePool,
        id: Uuid,
        data: &UpdateColumn,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(&format!(
            "UPDATE columns
             SET title = COALESCE($2, title),
                 updated_at = CURRENT_TIMESTAMP
             WHERE id = $1
             RETURNING {COLUMN_FIELDS}"
        ))
        .bind(id)
        .bind(&data.title)
        .fetch_optional(pool)
        .await
    }

    /// Renumber the board's columns to match the given sequence.
    ///
    /// Runs in one transaction so readers never observe a partial
    /// renumbering. IDs not listed are left untouched; IDs belonging to a
    /// different board are ignored by the `board_id` guard.
    pub async fn reorder(
        pool: &SqlitePool,
        board_id: Uuid,
        column_ids: &[Uuid],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;
        for (index, column_id) in column_ids.iter().enumerate() {
            sqlx::query(
                r#"UPDATE columns
                   SET "order" = $1, updated_at = CURRENT_TIMESTAMP
                   WHERE id = $2 AND board_id = $3"#,
            )
            .bind(index as i64)
            .bind(column_id)
            .bind(board_id)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await
    }

    pub async fn delete<'e, E>(executor: E, id: Uuid) -> Result<u64, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM columns WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }
}
