//! HTTP response types.
//!
//! These types serialize to the JSON format expected by the frontend.

use serde::Serialize;
use serde_json::{Map, Number, Value};

use crate::domain::models::{BoardTasks, Column, ProjectBoard, ProjectTask, RecentAccountLead};

/// A full, unpaged listing.
#[derive(Debug, Serialize)]
pub struct ItemsResponse<T> {
    pub items: Vec<T>,
}

impl<T> From<Vec<T>> for ItemsResponse<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

/// Confirmation returned by delete endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

#[derive(Debug, Serialize)]
pub struct ColumnResponse {
    pub id: String,
    pub name: String,
    pub order: Number,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl From<Column> for ColumnResponse {
    fn from(column: Column) -> Self {
        Self {
            id: column.id,
            name: column.name,
            order: column.order,
            rest: column.rest,
        }
    }
}

/// Flattened relation for the dashboard's "this month" widget.
#[derive(Debug, Serialize)]
pub struct RecentAccountLeadResponse {
    pub id: String,
    pub start_date: String,
    pub lead_name: String,
    pub account_name: String,
    pub account_type: String,
}

impl From<RecentAccountLead> for RecentAccountLeadResponse {
    fn from(recent: RecentAccountLead) -> Self {
        Self {
            id: recent.id,
            start_date: recent.start_date,
            lead_name: recent.lead_name,
            account_name: recent.account_name,
            account_type: recent.account_type,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BoardTasksResponse {
    pub board: ProjectBoard,
    pub tasks: Vec<ProjectTask>,
}

impl From<BoardTasks> for BoardTasksResponse {
    fn from(group: BoardTasks) -> Self {
        Self {
            board: group.board,
            tasks: group.tasks,
        }
    }
}
