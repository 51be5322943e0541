use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::{serde_as, DefaultOnNull};

use super::{Column, ProjectTask, RelationRef};

/// Typed view of a project board record.
///
/// Only the fields the proxy reasons about are typed; everything else is
/// kept in `rest` and written back out unchanged.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectBoard {
    pub id: String,
    #[serde(default)]
    pub project_id: Option<RelationRef>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl ProjectBoard {
    pub fn belongs_to(&self, project_id: &str) -> bool {
        self.project_id
            .as_ref()
            .is_some_and(|r| r.references(project_id))
    }
}

/// Body of a board creation request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewBoardRequest {
    pub title: Option<String>,
    pub project_id: Option<String>,
}

/// Payload for a new board, seeded with the default column template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewBoard {
    pub title: Option<String>,
    pub project_id: Option<String>,
    pub columns: Vec<Column>,
}

impl From<NewBoardRequest> for NewBoard {
    fn from(request: NewBoardRequest) -> Self {
        Self {
            title: request.title,
            project_id: request.project_id,
            columns: Column::default_template(),
        }
    }
}

/// Fields forwarded when replacing a board. Columns are managed separately.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardFields {
    pub title: Option<String>,
    pub project_id: Option<String>,
}

/// Payload that rewrites a board's whole column list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnsUpdate<'a> {
    pub columns: &'a [Column],
}

/// A board together with its tasks.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardTasks {
    pub board: ProjectBoard,
    pub tasks: Vec<ProjectTask>,
}
