use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::RelationRef;

/// Column a task lands in when none is given.
pub const DEFAULT_TASK_COLUMN: &str = "todo";

/// Typed view of a project task record; unknown fields are kept in `rest`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectTask {
    pub id: String,
    #[serde(default)]
    pub board_id: Option<RelationRef>,
    #[serde(default)]
    pub order: Option<f64>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl ProjectTask {
    pub fn belongs_to(&self, board_id: &str) -> bool {
        self.board_id
            .as_ref()
            .is_some_and(|r| r.references(board_id))
    }

    /// Tasks without an order sort last.
    pub fn cmp_order(&self, other: &Self) -> Ordering {
        match (self.order, other.order) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

/// Body of a task creation request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub board_id: Option<String>,
    pub assignee_id: Option<String>,
    pub column_id: Option<String>,
    pub order: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub board_id: Option<String>,
    pub assignee_id: Option<String>,
    pub column_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<f64>,
}

impl From<NewTaskRequest> for NewTask {
    fn from(request: NewTaskRequest) -> Self {
        Self {
            title: request.title,
            description: request.description,
            board_id: request.board_id,
            assignee_id: request.assignee_id,
            column_id: request
                .column_id
                .unwrap_or_else(|| DEFAULT_TASK_COLUMN.to_string()),
            order: request.order,
        }
    }
}

/// Task update: `null` or missing fields are not sent, so they keep their
/// stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<f64>,
}

/// Body of a move request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MoveTaskRequest {
    pub board_id: Option<String>,
    pub order: Option<f64>,
    pub column_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoveTask {
    pub board_id: String,
    pub order: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_id: Option<String>,
}

impl MoveTaskRequest {
    /// Both the target board and the order are required.
    pub fn validate(self) -> Option<MoveTask> {
        let board_id = self.board_id.filter(|id| !id.trim().is_empty())?;
        let order = self.order?;

        Some(MoveTask {
            board_id,
            order,
            column_id: self.column_id,
        })
    }
}
