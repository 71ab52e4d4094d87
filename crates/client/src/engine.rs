//! Drag reconciliation: diff two board snapshots, dispatch the minimal
//! move/reorder sequence, then resync from the server.

use std::collections::HashSet;
use std::sync::Arc;

use db::models::task::{MoveTask, ReorderColumns, ReorderTasks, Task, UpdateTask};
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::snapshot::BoardSnapshot;
use crate::transport::{ApiClientError, BoardApi};

#[derive(Debug, Error)]
pub enum TaskEditError {
    #[error("failed to save task: {0}")]
    UpdateFailed(#[source] ApiClientError),
    #[error(
        "task properties were saved, but moving it to the new column failed: {0}; \
         drag the task to retry the move"
    )]
    MoveFailedAfterUpdate(#[source] ApiClientError),
}

/// The calls a drag gesture resolves to, in dispatch order.
#[derive(Debug, Default, PartialEq)]
struct DragPlan {
    /// Whole gesture is a column drag; everything else is empty.
    column_reorder: Option<Vec<Uuid>>,
    /// Cross-column moves, one row each, in new-state walk order.
    moves: Vec<MoveTask>,
    /// Columns renumbered in place (no tasks entered or left).
    pure_reorders: Vec<Uuid>,
    /// Move targets, renumbered only after every move has landed.
    repair_reorders: Vec<Uuid>,
}

/// Classify the diff between the pre-drag and post-drag snapshots.
///
/// Column reorder and task movement are mutually exclusive per gesture
/// (the UI disables column drag while a task drag is active), so a
/// permuted column sequence short-circuits the task diff entirely.
fn classify(previous: &BoardSnapshot, new_state: &BoardSnapshot) -> DragPlan {
    let prev_ids = previous.column_ids();
    let new_ids = new_state.column_ids();
    if prev_ids != new_ids && prev_ids.len() == new_ids.len() {
        let prev_set: HashSet<Uuid> = prev_ids.iter().copied().collect();
        if new_ids.iter().all(|id| prev_set.contains(id)) {
            return DragPlan {
                column_reorder: Some(new_ids),
                ..Default::default()
            };
        }
    }

    let mut plan = DragPlan::default();
    let mut move_targets: Vec<Uuid> = Vec::new();
    let mut order_changed: Vec<Uuid> = Vec::new();
    let mut lost_tasks: HashSet<Uuid> = HashSet::new();

    for column in &new_state.columns {
        let mut has_order_changes = false;
        for (index, task) in column.tasks.iter().enumerate() {
            if task.column_id != column.column_id {
                // Stored column disagrees with positional column: the task
                // was dragged in. Target order is its final array index.
                plan.moves.push(MoveTask {
                    task_id: task.id,
                    target_column_id: column.column_id,
                    target_order: index as i64,
                });
                if !move_targets.contains(&column.column_id) {
                    move_targets.push(column.column_id);
                }
            } else if task.order != index as i64 {
                has_order_changes = true;
            }
        }
        if has_order_changes {
            order_changed.push(column.column_id);
        }

        if let Some(prev_column) = previous.column(column.column_id) {
            let current: HashSet<Uuid> = column.tasks.iter().map(|t| t.id).collect();
            if prev_column.tasks.iter().any(|t| !current.contains(&t.id)) {
                lost_tasks.insert(column.column_id);
            }
        }
    }

    // A column that lost a task keeps its gaps; ordering needs
    // monotonicity, not density.
    plan.pure_reorders = order_changed
        .into_iter()
        .filter(|id| !move_targets.contains(id) && !lost_tasks.contains(id))
        .collect();
    plan.repair_reorders = move_targets;
    plan
}

/// Local board mirror plus the dispatch/resync loop.
///
/// The mirror is advisory only: after every mutation batch the board is
/// refetched and the server copy replaces it, on success and on failure
/// alike. No rollback is ever attempted, because a captured previous
/// state may already be stale when an error handler runs.
pub struct SyncEngine {
    api: Arc<dyn BoardApi>,
    board_id: Uuid,
    state: BoardSnapshot,
}

impl SyncEngine {
    /// Fetch the board and start mirroring it.
    pub async fn connect(api: Arc<dyn BoardApi>, board_id: Uuid) -> Result<Self, ApiClientError> {
        let detail = api.fetch_board(board_id).await?;
        Ok(Self {
            api,
            board_id,
            state: BoardSnapshot::from_detail(&detail),
        })
    }

    pub fn board_id(&self) -> Uuid {
        self.board_id
    }

    pub fn state(&self) -> &BoardSnapshot {
        &self.state
    }

    /// Reconcile a completed drag gesture against the server.
    ///
    /// The first failing call aborts the rest of the dispatch; the error
    /// is returned to the caller after the forced resync.
    pub async fn apply_drag(&mut self, new_state: &BoardSnapshot) -> Result<(), ApiClientError> {
        let plan = classify(&self.state, new_state);
        debug!(
            board_id = %self.board_id,
            moves = plan.moves.len(),
            pure_reorders = plan.pure_reorders.len(),
            repair_reorders = plan.repair_reorders.len(),
            column_reorder = plan.column_reorder.is_some(),
            "dispatching drag"
        );

        let dispatched = self.dispatch(new_state, plan).await;
        let resynced = self.resync().await;
        dispatched?;
        resynced
    }

    async fn dispatch(
        &self,
        new_state: &BoardSnapshot,
        plan: DragPlan,
    ) -> Result<(), ApiClientError> {
        if let Some(column_ids) = plan.column_reorder {
            return self
                .api
                .reorder_columns(&ReorderColumns {
                    board_id: self.board_id,
                    column_ids,
                })
                .await;
        }

        // Moves go first and strictly one at a time: each touches a single
        // row, and the target orders were computed against the final
        // arrays.
        for request in &plan.moves {
            self.api.move_task(request).await?;
        }

        for column_id in &plan.pure_reorders {
            self.api
                .reorder_tasks(&ReorderTasks {
                    column_id: *column_id,
                    task_ids: new_state.task_ids(*column_id),
                })
                .await?;
        }

        // Move targets last: move_task never renumbers siblings, so until
        // this repair two tasks in the destination can share an order.
        for column_id in &plan.repair_reorders {
            self.api
                .reorder_tasks(&ReorderTasks {
                    column_id: *column_id,
                    task_ids: new_state.task_ids(*column_id),
                })
                .await?;
        }

        Ok(())
    }

    /// Replace the local mirror with the authoritative server copy.
    pub async fn resync(&mut self) -> Result<(), ApiClientError> {
        let detail = self.api.fetch_board(self.board_id).await?;
        self.state = BoardSnapshot::from_detail(&detail);
        Ok(())
    }

    /// Save edited task properties, then move the task if a different
    /// column was picked in the edit dialog.
    ///
    /// The two calls are deliberately separate: when the move fails after
    /// a successful update, the caller gets a distinct error so the UI can
    /// tell the user the properties were saved.
    pub async fn save_task_edit(
        &mut self,
        task_id: Uuid,
        update: &UpdateTask,
        target_column_id: Option<Uuid>,
    ) -> Result<Task, TaskEditError> {
        let task = self
            .api
            .update_task(task_id, update)
            .await
            .map_err(TaskEditError::UpdateFailed)?;

        let task = match target_column_id.filter(|target| *target != task.column_id) {
            Some(target) => {
                let target_order = self
                    .state
                    .column(target)
                    .map(|c| c.tasks.len() as i64)
                    .unwrap_or(0);
                match self
                    .api
                    .move_task(&MoveTask {
                        task_id,
                        target_column_id: target,
                        target_order,
                    })
                    .await
                {
                    Ok(task) => task,
                    Err(err) => {
                        self.resync_best_effort().await;
                        return Err(TaskEditError::MoveFailedAfterUpdate(err));
                    }
                }
            }
            None => task,
        };

        self.resync_best_effort().await;
        Ok(task)
    }

    async fn resync_best_effort(&mut self) {
        if let Err(err) = self.resync().await {
            warn!(board_id = %self.board_id, "resync after task edit failed: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::Utc;
    use db::models::{
        board::Board,
        column::Column,
        task::{Task, TaskPriority},
    };
    use services::services::board::{BoardDetail, ColumnWithTasks};

    use super::*;
    use crate::snapshot::ColumnTasks;

    fn board_fixture() -> Board {
        let now = Utc::now();
        Board {
            id: Uuid::new_v4(),
            name: "Sprint".to_string(),
            slug: "sprint".to_string(),
            description: None,
            owner_id: None,
            organization_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn column_fixture(board_id: Uuid, order: i64, title: &str) -> Column {
        let now = Utc::now();
        Column {
            id: Uuid::new_v4(),
            title: title.to_string(),
            order,
            board_id,
            created_at: now,
            updated_at: now,
        }
    }

    fn task_fixture(column_id: Uuid, order: i64, title: &str) -> Task {
        let now = Utc::now();
        Task {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: None,
            priority: TaskPriority::default(),
            order,
            column_id,
            assignee_id: None,
            is_archived: false,
            completed_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn detail(board: Board, columns: Vec<(Column, Vec<Task>)>) -> BoardDetail {
        BoardDetail {
            board,
            columns: columns
                .into_iter()
                .map(|(column, tasks)| ColumnWithTasks { column, tasks })
                .collect(),
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        FetchBoard,
        MoveTask(MoveTask),
        ReorderTasks(ReorderTasks),
        ReorderColumns(ReorderColumns),
        UpdateTask(Uuid),
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum FailPoint {
        FetchBoard,
        MoveTask,
        ReorderTasks,
    }

    struct RecordingApi {
        server_board: Mutex<BoardDetail>,
        calls: Mutex<Vec<Call>>,
        fail: Mutex<Vec<FailPoint>>,
    }

    impl RecordingApi {
        fn new(server_board: BoardDetail) -> Arc<Self> {
            Arc::new(Self {
                server_board: Mutex::new(server_board),
                calls: Mutex::new(Vec::new()),
                fail: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn clear_calls(&self) {
            self.calls.lock().unwrap().clear();
        }

        fn fail_on(&self, point: FailPoint) {
            self.fail.lock().unwrap().push(point);
        }

        fn set_server_board(&self, board: BoardDetail) {
            *self.server_board.lock().unwrap() = board;
        }

        fn should_fail(&self, point: FailPoint) -> bool {
            self.fail.lock().unwrap().contains(&point)
        }
    }

    #[async_trait]
    impl BoardApi for RecordingApi {
        async fn fetch_board(&self, _board_id: Uuid) -> Result<BoardDetail, ApiClientError> {
            self.calls.lock().unwrap().push(Call::FetchBoard);
            if self.should_fail(FailPoint::FetchBoard) {
                return Err(ApiClientError::Transport("connection reset".to_string()));
            }
            Ok(self.server_board.lock().unwrap().clone())
        }

        async fn move_task(&self, request: &MoveTask) -> Result<Task, ApiClientError> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::MoveTask(request.clone()));
            if self.should_fail(FailPoint::MoveTask) {
                return Err(ApiClientError::Api("task not found".to_string()));
            }
            let mut task = task_fixture(request.target_column_id, request.target_order, "moved");
            task.id = request.task_id;
            Ok(task)
        }

        async fn reorder_tasks(&self, request: &ReorderTasks) -> Result<(), ApiClientError> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::ReorderTasks(request.clone()));
            if self.should_fail(FailPoint::ReorderTasks) {
                return Err(ApiClientError::Api("column not found".to_string()));
            }
            Ok(())
        }

        async fn reorder_columns(&self, request: &ReorderColumns) -> Result<(), ApiClientError> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::ReorderColumns(request.clone()));
            Ok(())
        }

        async fn update_task(
            &self,
            task_id: Uuid,
            _update: &UpdateTask,
        ) -> Result<Task, ApiClientError> {
            self.calls.lock().unwrap().push(Call::UpdateTask(task_id));
            let mut task = task_fixture(Uuid::new_v4(), 0, "edited");
            task.id = task_id;
            Ok(task)
        }
    }

    async fn engine_for(server_board: BoardDetail) -> (SyncEngine, Arc<RecordingApi>) {
        let board_id = server_board.board.id;
        let api = RecordingApi::new(server_board);
        let engine = SyncEngine::connect(api.clone(), board_id).await.unwrap();
        api.clear_calls();
        (engine, api)
    }

    /// Scenario B: a pure within-column reorder is exactly one
    /// reorder_tasks call with the full final id array.
    #[tokio::test]
    async fn same_column_reorder_dispatches_single_renumber() {
        let board = board_fixture();
        let todo = column_fixture(board.id, 0, "To Do");
        let x = task_fixture(todo.id, 0, "X");
        let y = task_fixture(todo.id, 1, "Y");
        let z = task_fixture(todo.id, 2, "Z");

        let server = detail(board, vec![(todo.clone(), vec![x.clone(), y.clone(), z.clone()])]);
        let (mut engine, api) = engine_for(server).await;

        let new_state = BoardSnapshot {
            columns: vec![ColumnTasks {
                column_id: todo.id,
                tasks: vec![z.clone(), x.clone(), y.clone()],
            }],
        };
        engine.apply_drag(&new_state).await.unwrap();

        assert_eq!(
            api.calls(),
            vec![
                Call::ReorderTasks(ReorderTasks {
                    column_id: todo.id,
                    task_ids: vec![z.id, x.id, y.id],
                }),
                Call::FetchBoard,
            ]
        );
    }

    /// Scenario A: cross-column move dispatches the move, skips the source
    /// column (it lost a task), and repairs the destination afterwards.
    #[tokio::test]
    async fn cross_column_move_repairs_destination_only() {
        let board = board_fixture();
        let todo = column_fixture(board.id, 0, "To Do");
        let done = column_fixture(board.id, 1, "Done");
        let x = task_fixture(todo.id, 0, "X");
        let y = task_fixture(todo.id, 1, "Y");

        let server = detail(
            board,
            vec![
                (todo.clone(), vec![x.clone(), y.clone()]),
                (done.clone(), vec![]),
            ],
        );
        let (mut engine, api) = engine_for(server).await;

        // Y dragged to Done at index 0. Its stored column_id still says
        // To Do; only its position in the snapshot changed.
        let new_state = BoardSnapshot {
            columns: vec![
                ColumnTasks {
                    column_id: todo.id,
                    tasks: vec![x.clone()],
                },
                ColumnTasks {
                    column_id: done.id,
                    tasks: vec![y.clone()],
                },
            ],
        };
        engine.apply_drag(&new_state).await.unwrap();

        assert_eq!(
            api.calls(),
            vec![
                Call::MoveTask(MoveTask {
                    task_id: y.id,
                    target_column_id: done.id,
                    target_order: 0,
                }),
                Call::ReorderTasks(ReorderTasks {
                    column_id: done.id,
                    task_ids: vec![y.id],
                }),
                Call::FetchBoard,
            ]
        );
    }

    /// Scenario C / P4: a column drag issues exactly one reorder_columns
    /// call and no task mutations.
    #[tokio::test]
    async fn column_drag_is_exclusive() {
        let board = board_fixture();
        let todo = column_fixture(board.id, 0, "To Do");
        let in_progress = column_fixture(board.id, 1, "In Progress");
        let done = column_fixture(board.id, 2, "Done");
        let x = task_fixture(todo.id, 0, "X");

        let server = detail(
            board.clone(),
            vec![
                (todo.clone(), vec![x.clone()]),
                (in_progress.clone(), vec![]),
                (done.clone(), vec![]),
            ],
        );
        let (mut engine, api) = engine_for(server).await;

        let new_state = BoardSnapshot {
            columns: vec![
                ColumnTasks {
                    column_id: done.id,
                    tasks: vec![],
                },
                ColumnTasks {
                    column_id: todo.id,
                    tasks: vec![x.clone()],
                },
                ColumnTasks {
                    column_id: in_progress.id,
                    tasks: vec![],
                },
            ],
        };
        engine.apply_drag(&new_state).await.unwrap();

        assert_eq!(
            api.calls(),
            vec![
                Call::ReorderColumns(ReorderColumns {
                    board_id: board.id,
                    column_ids: vec![done.id, todo.id, in_progress.id],
                }),
                Call::FetchBoard,
            ]
        );
    }

    /// Two tasks into one destination: both moves land before the single
    /// repair reorder, and the repair carries the full final array.
    #[tokio::test]
    async fn moves_precede_destination_repair() {
        let board = board_fixture();
        let todo = column_fixture(board.id, 0, "To Do");
        let done = column_fixture(board.id, 1, "Done");
        let a = task_fixture(todo.id, 0, "A");
        let b = task_fixture(todo.id, 1, "B");
        let shipped = task_fixture(done.id, 0, "Shipped");

        let server = detail(
            board,
            vec![
                (todo.clone(), vec![a.clone(), b.clone()]),
                (done.clone(), vec![shipped.clone()]),
            ],
        );
        let (mut engine, api) = engine_for(server).await;

        let new_state = BoardSnapshot {
            columns: vec![
                ColumnTasks {
                    column_id: todo.id,
                    tasks: vec![],
                },
                ColumnTasks {
                    column_id: done.id,
                    tasks: vec![a.clone(), shipped.clone(), b.clone()],
                },
            ],
        };
        engine.apply_drag(&new_state).await.unwrap();

        assert_eq!(
            api.calls(),
            vec![
                Call::MoveTask(MoveTask {
                    task_id: a.id,
                    target_column_id: done.id,
                    target_order: 0,
                }),
                Call::MoveTask(MoveTask {
                    task_id: b.id,
                    target_column_id: done.id,
                    target_order: 2,
                }),
                Call::ReorderTasks(ReorderTasks {
                    column_id: done.id,
                    task_ids: vec![a.id, shipped.id, b.id],
                }),
                Call::FetchBoard,
            ]
        );
    }

    /// A column that lost a task is never renumbered, even when its
    /// remaining tasks also shifted position.
    #[tokio::test]
    async fn source_column_with_shifted_tasks_keeps_its_gaps() {
        let board = board_fixture();
        let todo = column_fixture(board.id, 0, "To Do");
        let done = column_fixture(board.id, 1, "Done");
        let x = task_fixture(todo.id, 0, "X");
        let y = task_fixture(todo.id, 1, "Y");
        let z = task_fixture(todo.id, 2, "Z");

        let server = detail(
            board,
            vec![
                (todo.clone(), vec![x.clone(), y.clone(), z.clone()]),
                (done.clone(), vec![]),
            ],
        );
        let (mut engine, api) = engine_for(server).await;

        // X leaves for Done; Y and Z slide up, so their orders no longer
        // match their indices. The tasks-removed exclusion still wins.
        let new_state = BoardSnapshot {
            columns: vec![
                ColumnTasks {
                    column_id: todo.id,
                    tasks: vec![y.clone(), z.clone()],
                },
                ColumnTasks {
                    column_id: done.id,
                    tasks: vec![x.clone()],
                },
            ],
        };
        engine.apply_drag(&new_state).await.unwrap();

        let renumbered: Vec<Uuid> = api
            .calls()
            .iter()
            .filter_map(|c| match c {
                Call::ReorderTasks(request) => Some(request.column_id),
                _ => None,
            })
            .collect();
        assert_eq!(renumbered, vec![done.id]);
    }

    /// An untouched board still resyncs but dispatches nothing.
    #[tokio::test]
    async fn no_diff_dispatches_nothing() {
        let board = board_fixture();
        let todo = column_fixture(board.id, 0, "To Do");
        let x = task_fixture(todo.id, 0, "X");

        let server = detail(board, vec![(todo.clone(), vec![x.clone()])]);
        let (mut engine, api) = engine_for(server).await;

        let unchanged = engine.state().clone();
        engine.apply_drag(&unchanged).await.unwrap();

        assert_eq!(api.calls(), vec![Call::FetchBoard]);
    }

    /// P5: a failing call aborts the dispatch, forces a resync, and the
    /// local mirror ends up matching the server copy exactly.
    #[tokio::test]
    async fn failure_resyncs_and_propagates() {
        let board = board_fixture();
        let todo = column_fixture(board.id, 0, "To Do");
        let done = column_fixture(board.id, 1, "Done");
        let x = task_fixture(todo.id, 0, "X");
        let y = task_fixture(todo.id, 1, "Y");

        let server = detail(
            board.clone(),
            vec![
                (todo.clone(), vec![x.clone(), y.clone()]),
                (done.clone(), vec![]),
            ],
        );
        let (mut engine, api) = engine_for(server).await;

        // Server-authoritative state the resync must install verbatim.
        let authoritative = detail(
            board,
            vec![
                (todo.clone(), vec![x.clone()]),
                (done.clone(), vec![y.clone()]),
            ],
        );
        api.set_server_board(authoritative.clone());
        api.fail_on(FailPoint::MoveTask);

        let new_state = BoardSnapshot {
            columns: vec![
                ColumnTasks {
                    column_id: todo.id,
                    tasks: vec![x.clone()],
                },
                ColumnTasks {
                    column_id: done.id,
                    tasks: vec![y.clone()],
                },
            ],
        };
        let err = engine.apply_drag(&new_state).await.unwrap_err();
        assert!(matches!(err, ApiClientError::Api(_)));

        // The failed move aborted the repair step, the resync still ran.
        assert_eq!(
            api.calls().last().cloned(),
            Some(Call::FetchBoard),
            "resync must follow a failed dispatch"
        );
        assert!(!api.calls().iter().any(|c| matches!(c, Call::ReorderTasks(_))));
        assert_eq!(engine.state(), &BoardSnapshot::from_detail(&authoritative));
    }

    /// When the dispatch and the follow-up resync both fail, the dispatch
    /// error is the one reported; the resync failure is swallowed and the
    /// mirror keeps its last known state.
    #[tokio::test]
    async fn dispatch_error_wins_over_resync_error() {
        let board = board_fixture();
        let todo = column_fixture(board.id, 0, "To Do");
        let done = column_fixture(board.id, 1, "Done");
        let x = task_fixture(todo.id, 0, "X");

        let server = detail(
            board,
            vec![(todo.clone(), vec![x.clone()]), (done.clone(), vec![])],
        );
        let (mut engine, api) = engine_for(server).await;
        let before = engine.state().clone();
        api.fail_on(FailPoint::MoveTask);
        api.fail_on(FailPoint::FetchBoard);

        let new_state = BoardSnapshot {
            columns: vec![
                ColumnTasks {
                    column_id: todo.id,
                    tasks: vec![],
                },
                ColumnTasks {
                    column_id: done.id,
                    tasks: vec![x.clone()],
                },
            ],
        };
        let err = engine.apply_drag(&new_state).await.unwrap_err();

        // The move's error, not the fetch's transport error.
        assert!(matches!(err, ApiClientError::Api(_)));
        assert_eq!(
            api.calls().last().cloned(),
            Some(Call::FetchBoard),
            "resync is still attempted after the failed move"
        );
        assert_eq!(engine.state(), &before);
    }

    /// A move failure after a successful property update surfaces as the
    /// distinct "saved but not moved" error.
    #[tokio::test]
    async fn edit_reports_saved_properties_when_move_fails() {
        let board = board_fixture();
        let todo = column_fixture(board.id, 0, "To Do");
        let done = column_fixture(board.id, 1, "Done");
        let x = task_fixture(todo.id, 0, "X");

        let server = detail(
            board,
            vec![(todo.clone(), vec![x.clone()]), (done.clone(), vec![])],
        );
        let (mut engine, api) = engine_for(server).await;
        api.fail_on(FailPoint::MoveTask);

        let err = engine
            .save_task_edit(
                x.id,
                &UpdateTask {
                    title: Some("X (renamed)".to_string()),
                    ..Default::default()
                },
                Some(done.id),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, TaskEditError::MoveFailedAfterUpdate(_)));
        let calls = api.calls();
        assert_eq!(calls[0], Call::UpdateTask(x.id));
        assert!(matches!(calls[1], Call::MoveTask(_)));
        assert_eq!(calls.last(), Some(&Call::FetchBoard));
    }

    /// Key-set changes (column added or removed) are not column reorders.
    #[test]
    fn changed_key_set_skips_column_reorder() {
        let board = board_fixture();
        let todo = column_fixture(board.id, 0, "To Do");
        let done = column_fixture(board.id, 1, "Done");

        let previous = BoardSnapshot {
            columns: vec![ColumnTasks {
                column_id: todo.id,
                tasks: vec![],
            }],
        };
        let new_state = BoardSnapshot {
            columns: vec![
                ColumnTasks {
                    column_id: done.id,
                    tasks: vec![],
                },
                ColumnTasks {
                    column_id: todo.id,
                    tasks: vec![],
                },
            ],
        };

        let plan = classify(&previous, &new_state);
        assert_eq!(plan.column_reorder, None);
        assert!(plan.moves.is_empty());
    }
}
