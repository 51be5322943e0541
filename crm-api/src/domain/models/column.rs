//! Ordered column list embedded in a project board.
//!
//! The list lives inside the board record and is always rewritten as a
//! whole, so every operation here works on an in-memory `Vec<Column>`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Name given to a column added without one.
pub const DEFAULT_COLUMN_NAME: &str = "New column";

/// Order given to a column added without one; sorts after any real position.
pub const APPEND_ORDER: i64 = 999;

/// One entry of a board's column list.
///
/// `order` is any JSON number. Keys other than `id`, `name` and `order` are
/// kept in `rest` and written back with the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default = "zero")]
    pub order: Number,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

fn zero() -> Number {
    Number::from(0)
}

impl Column {
    pub fn new(id: impl Into<String>, name: impl Into<String>, order: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            order: Number::from(order),
            rest: Map::new(),
        }
    }

    /// Kanban template every new board starts with.
    pub fn default_template() -> Vec<Column> {
        vec![
            Column::new("todo", "To Do", 1),
            Column::new("in_progress", "In Progress", 2),
            Column::new("done", "Done", 3),
        ]
    }
}

/// Body of an add-column request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewColumn {
    pub id: Option<String>,
    pub name: Option<String>,
    pub order: Option<Number>,
}

/// Body of a rename/renumber request. Only the supplied fields change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ColumnPatch {
    pub name: Option<String>,
    pub order: Option<Number>,
}

/// Body of a reorder request: column ids in their new order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ColumnOrder {
    pub order: Vec<String>,
}

/// Returns an id of the form `col-{seed}` that no column in `columns` uses,
/// bumping the seed until it is free.
pub fn unique_column_id(columns: &[Column], seed: i128) -> String {
    let taken: HashSet<&str> = columns.iter().map(|c| c.id.as_str()).collect();

    let mut candidate = seed;
    loop {
        let id = format!("col-{}", candidate);
        if !taken.contains(id.as_str()) {
            return id;
        }
        candidate += 1;
    }
}

/// Append a column built from `new`, generating an id from `seed` when none
/// was supplied. Returns `None` if the supplied id is already in use.
pub fn append_column(columns: &mut Vec<Column>, new: NewColumn, seed: i128) -> Option<Column> {
    let id = match new.id.filter(|id| !id.trim().is_empty()) {
        Some(id) if columns.iter().any(|c| c.id == id) => return None,
        Some(id) => id,
        None => unique_column_id(columns, seed),
    };

    let column = Column {
        id,
        name: new.name.unwrap_or_else(|| DEFAULT_COLUMN_NAME.to_string()),
        order: new.order.unwrap_or_else(|| Number::from(APPEND_ORDER)),
        rest: Map::new(),
    };
    columns.push(column.clone());
    Some(column)
}

/// Apply `patch` to the column with `id`. Returns `None`, leaving the list
/// untouched, when there is no such column.
pub fn update_column(columns: &mut [Column], id: &str, patch: ColumnPatch) -> Option<Column> {
    let column = columns.iter_mut().find(|c| c.id == id)?;

    if let Some(name) = patch.name {
        column.name = name;
    }
    if let Some(order) = patch.order {
        column.order = order;
    }
    Some(column.clone())
}

/// Renumber columns from 1 following `requested`.
///
/// Requested ids that exist on the board come first, in request order.
/// Columns the request does not mention keep their relative order and are
/// numbered after them. Unknown and repeated ids are ignored.
pub fn reorder_columns(columns: Vec<Column>, requested: &[String]) -> Vec<Column> {
    let mut remaining: Vec<Option<Column>> = columns.into_iter().map(Some).collect();
    let mut reordered = Vec::with_capacity(remaining.len());

    for id in requested {
        if let Some(slot) = remaining
            .iter_mut()
            .find(|slot| slot.as_ref().is_some_and(|c| &c.id == id))
        {
            reordered.extend(slot.take());
        }
    }
    reordered.extend(remaining.into_iter().flatten());

    for (position, column) in reordered.iter_mut().enumerate() {
        column.order = Number::from(position as u64 + 1);
    }
    reordered
}
