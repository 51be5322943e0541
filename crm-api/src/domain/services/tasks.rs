use std::sync::Arc;

use itertools::Itertools;
use serde_json::Value;

use crate::domain::{
    models::{
        BoardTasks, Collection, ListParams, MoveTaskRequest, Page, ProjectBoard, ProjectTask,
    },
    ports::outbound::RecordStore,
    services::records::{decode_all, fetch_all, RecordService},
    CrmError,
};

pub struct TaskService {
    store: Arc<dyn RecordStore>,
    records: RecordService,
    page_size: u32,
}

impl TaskService {
    pub fn new(store: Arc<dyn RecordStore>, page_size: u32) -> Self {
        Self {
            records: RecordService::new(store.clone(), Collection::ProjectTasks, page_size),
            store,
            page_size,
        }
    }

    pub fn records(&self) -> &RecordService {
        &self.records
    }

    /// Tasks of one board with their assignee expanded.
    pub async fn list_for_board(&self, board_id: &str) -> Result<Page, CrmError> {
        let params = ListParams::new()
            .where_eq("board_id", board_id)
            .expand("assignee_id");
        self.records.list(&params).await
    }

    /// Every board of a project paired with its tasks, sorted by task order.
    ///
    /// Both collections are read in full and matched here rather than through
    /// store filters.
    pub async fn board_tasks(&self, project_id: &str) -> Result<Vec<BoardTasks>, CrmError> {
        let boards: Vec<ProjectBoard> = decode_all(
            fetch_all(
                self.store.as_ref(),
                Collection::ProjectBoards,
                ListParams::new(),
                self.page_size,
            )
            .await?,
        )?;
        let boards: Vec<ProjectBoard> = boards
            .into_iter()
            .filter(|board| board.belongs_to(project_id))
            .collect();

        if boards.is_empty() {
            return Ok(Vec::new());
        }

        let tasks: Vec<ProjectTask> = decode_all(self.records.list_all(ListParams::new()).await?)?;

        Ok(boards
            .into_iter()
            .map(|board| {
                let board_tasks = tasks
                    .iter()
                    .filter(|task| task.belongs_to(&board.id))
                    .cloned()
                    .sorted_by(ProjectTask::cmp_order)
                    .collect();

                BoardTasks {
                    board,
                    tasks: board_tasks,
                }
            })
            .collect())
    }

    /// Move a task to another board and position.
    pub async fn move_task(
        &self,
        task_id: &str,
        request: MoveTaskRequest,
    ) -> Result<Value, CrmError> {
        let move_task = request
            .validate()
            .ok_or_else(|| CrmError::invalid_input("board_id and order are required"))?;

        self.records.update(task_id, &move_task).await
    }
}
