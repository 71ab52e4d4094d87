use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{Executor, FromRow, Sqlite, SqlitePool, Type};
use strum_macros::{Display, EnumString};
use ts_rs::TS;
use uuid::Uuid;

#[derive(
    Debug, Clone, Type, Serialize, Deserialize, PartialEq, TS, EnumString, Display, Default,
)]
#[sqlx(type_name = "task_priority", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

/// A work item belonging to exactly one column.
///
/// `order` is the column-relative position. Within a column it should stay
/// close to a dense 0..n sequence, but nothing at this layer enforces that;
/// the client reconciliation engine repairs it after moves.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub priority: TaskPriority,
    pub order: i64,
    pub column_id: Uuid,
    pub assignee_id: Option<String>,
    pub is_archived: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    pub column_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<TaskPriority>,
    pub assignee_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<TaskPriority>,
    pub assignee_id: Option<String>,
    /// `Some(true)` stamps `completed_at`, `Some(false)` clears it.
    pub completed: Option<bool>,
}

/// Body of `POST /api/tasks/move`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct MoveTask {
    pub task_id: Uuid,
    pub target_column_id: Uuid,
    pub target_order: i64,
}

/// Body of `POST /api/tasks/reorder`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct ReorderTasks {
    pub column_id: Uuid,
    pub task_ids: Vec<Uuid>,
}

/// Body of `POST /api/columns/reorder`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct ReorderColumns {
    pub board_id: Uuid,
    pub column_ids: Vec<Uuid>,
}

const TASK_FIELDS: &str = r#"id, title, description, priority, "order", column_id, assignee_id, is_archived, completed_at, created_at, updated_at"#;

impl Task {
    pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(&format!("SELECT {TASK_FIELDS} FROM tasks WHERE id = $1"))
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Active (non-archived) tasks of a column in display order.
    pub async fn find_by_column_id(
        pool: &SqlitePool,
        column_id: Uuid,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(&format!(
            r#"SELECT {TASK_FIELDS} FROM tasks
               WHERE column_id = $1 AND is_archived = 0
               ORDER BY "order" ASC, created_at ASC"#
        ))
        .bind(column_id)
        .fetch_all(pool)
        .await
    }

    /// Appends the new task at the bottom of its column.
    pub async fn create(
        pool: &SqlitePool,
        task_id: Uuid,
        data: &CreateTask,
    ) -> Result<Self, sqlx::Error> {
        let priority = data.priority.clone().unwrap_or_default();
        sqlx::query_as::<_, Self>(&format!(
            r#"INSERT INTO tasks (id, title, description, priority, "order", column_id, assignee_id)
               VALUES (
                   $1, $2, $3, $4,
                   (SELECT COALESCE(MAX("order") + 1, 0) FROM tasks WHERE column_id = $5),
                   $5, $6
               )
               RETURNING {TASK_FIELDS}"#
        ))
        .bind(task_id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(priority)
        .bind(data.column_id)
        .bind(&data.assignee_id)
        .fetch_one(pool)
        .await
    }

    /// Partial property update. Never touches `column_id` or `order`;
    /// moving a task is a separate operation.
    pub async fn update(
        pool: &SqlitePool,
        id: Uuid,
        data: &UpdateTask,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(&format!(
            "UPDATE tasks
             SET title = COALESCE($2, title),
                 description = COALESCE($3, description),
                 priority = COALESCE($4, priority),
                 assignee_id = COALESCE($5, assignee_id),
                 completed_at = CASE
                     WHEN $6 IS NULL THEN completed_at
                     WHEN $6 THEN COALESCE(completed_at, CURRENT_TIMESTAMP)
                     ELSE NULL
                 END,
                 updated_at = CURRENT_TIMESTAMP
             WHERE id = $1
             RETURNING {TASK_FIELDS}"
        ))
        .bind(id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.priority)
        .bind(&data.assignee_id)
        .bind(data.completed)
        .fetch_optional(pool)
        .await
    }

    /// Re-homes exactly one task. Sibling tasks in the source and target
    /// columns are NOT renumbered here; callers follow up with `reorder`
    /// on affected columns to repair order collisions.
    pub async fn move_to_column(
        pool: &SqlitePool,
        id: Uuid,
        target_column_id: Uuid,
        target_order: i64,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(&format!(
            r#"UPDATE tasks
               SET column_id = $2, "order" = $3, updated_at = CURRENT_TIMESTAMP
               WHERE id = $1
               RETURNING {TASK_FIELDS}"#
        ))
        .bind(id)
        .bind(target_column_id)
        .bind(target_order)
        .fetch_optional(pool)
        .await
    }

    /// Pure renumbering: `order = index` for each listed id, in one
    /// transaction. Listed tasks are assumed to already live in the column;
    /// tasks not listed are left untouched.
    pub async fn reorder(pool: &SqlitePool, task_ids: &[Uuid]) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;
        for (index, task_id) in task_ids.iter().enumerate() {
            sqlx::query(
                r#"UPDATE tasks
                   SET "order" = $1, updated_at = CURRENT_TIMESTAMP
                   WHERE id = $2"#,
            )
            .bind(index as i64)
            .bind(task_id)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await
    }

    pub async fn set_archived(
        pool: &SqlitePool,
        id: Uuid,
        archived: bool,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(&format!(
            "UPDATE tasks
             SET is_archived = $2, updated_at = CURRENT_TIMESTAMP
             WHERE id = $1
             RETURNING {TASK_FIELDS}"
        ))
        .bind(id)
        .bind(archived)
        .fetch_optional(pool)
        .await
    }

    /// Active tasks completed longer ago than the given window, oldest
    /// first. `age` is a SQLite datetime modifier such as `-30 days`.
    pub async fn find_completed_before(
        pool: &SqlitePool,
        age: &str,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(&format!(
            "SELECT {TASK_FIELDS} FROM tasks
             WHERE is_archived = 0
               AND completed_at IS NOT NULL
               AND datetime(completed_at) < datetime('now', $1)
             ORDER BY completed_at ASC"
        ))
        .bind(age)
        .fetch_all(pool)
        .await
    }

    pub async fn delete<'e, E>(executor: E, id: Uuid) -> Result<u64, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }
}
