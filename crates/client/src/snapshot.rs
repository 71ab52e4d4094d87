//! Ordered column-to-tasks mapping as the drag-and-drop layer sees it.

use db::models::task::Task;
use services::services::board::BoardDetail;
use uuid::Uuid;

/// One column's task list. Array position is the task's intended `order`;
/// a task whose stored `column_id` disagrees with `column_id` here has
/// been dragged in from another column and not yet persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnTasks {
    pub column_id: Uuid,
    pub tasks: Vec<Task>,
}

/// Ordered board mirror. Column position in `columns` is the board-level
/// order, which is significant for column-reorder detection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardSnapshot {
    pub columns: Vec<ColumnTasks>,
}

impl BoardSnapshot {
    pub fn from_detail(detail: &BoardDetail) -> Self {
        Self {
            columns: detail
                .columns
                .iter()
                .map(|column| ColumnTasks {
                    column_id: column.column.id,
                    tasks: column.tasks.clone(),
                })
                .collect(),
        }
    }

    pub fn column_ids(&self) -> Vec<Uuid> {
        self.columns.iter().map(|c| c.column_id).collect()
    }

    pub fn column(&self, column_id: Uuid) -> Option<&ColumnTasks> {
        self.columns.iter().find(|c| c.column_id == column_id)
    }

    /// The ordered task ids of a column, for reorder payloads.
    pub fn task_ids(&self, column_id: Uuid) -> Vec<Uuid> {
        self.column(column_id)
            .map(|c| c.tasks.iter().map(|t| t.id).collect())
            .unwrap_or_default()
    }
}
