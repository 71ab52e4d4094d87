use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{Executor, FromRow, Sqlite, SqlitePool};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub owner_id: Option<String>,
    pub organization_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct CreateBoard {
    pub name: String,
    pub description: Option<String>,
    pub owner_id: Option<String>,
    pub organization_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBoard {
    pub name: Option<String>,
    pub description: Option<String>,
}

const BOARD_FIELDS: &str =
    "id, name, slug, description, owner_id, organization_id, created_at, updated_at";

impl Board {
    pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(&format!(
            "SELECT {BOARD_FIELDS} FROM boards WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn find_by_slug(pool: &SqlitePool, slug: &str) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(&format!(
            "SELECT {BOARD_FIELDS} FROM boards WHERE slug = $1"
        ))
        .bind(slug)
        .fetch_optional(pool)
        .await
    }

    pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(&format!(
            "SELECT {BOARD_FIELDS} FROM boards ORDER BY created_at DESC"
        ))
        .fetch_all(pool)
        .await
    }

    pub async fn create(
        pool: &SqlitePool,
        board_id: Uuid,
        data: &CreateBoard,
        slug: &str,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(&format!(
            "INSERT INTO boards (id, name, slug, description, owner_id, organization_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {BOARD_FIELDS}"
        ))
        .bind(board_id)
        .bind(&data.name)
        .bind(slug)
        .bind(&data.description)
        .bind(&data.owner_id)
        .bind(&data.organization_id)
        .fetch_one(pool)
        .await
    }

    /// Partial update. Fields left as `None` keep their current value.
    pub async fn update(
        pool: &SqlitePool,
        id: Uuid,
        data: &UpdateBoard,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(&format!(
            "UPDATE boards
             SET name = COALESCE($2, name),
                 description = COALESCE($3, description),
                 updated_at = CURRENT_TIMESTAMP
             WHERE id = $1
             RETURNING {BOARD_FIELDS}"
        ))
        .bind(id)
        .bind(&data.name)
        .bind(&data.description)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete<'e, E>(executor: E, id: Uuid) -> Result<u64, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM boards WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }
}
