use std::sync::Arc;

use serde_json::Value;
use time::OffsetDateTime;

use crate::domain::{
    models::{
        append_column, reorder_columns, update_column, BoardFields, Collection, Column,
        ColumnPatch, ColumnsUpdate, ListParams, NewBoard, NewBoardRequest, NewColumn, Page,
        ProjectBoard,
    },
    ports::outbound::RecordStore,
    services::records::{decode, RecordService},
    CrmError,
};

/// Project boards and their embedded column lists.
///
/// Column operations read the board, change its list in memory and write the
/// whole list back. Nothing guards the window in between, so two concurrent
/// edits of the same board can overwrite each other.
pub struct BoardService {
    records: RecordService,
}

impl BoardService {
    pub fn new(store: Arc<dyn RecordStore>, page_size: u32) -> Self {
        Self {
            records: RecordService::new(store, Collection::ProjectBoards, page_size),
        }
    }

    pub fn records(&self) -> &RecordService {
        &self.records
    }

    /// Create a board seeded with the default columns.
    pub async fn create(&self, request: NewBoardRequest) -> Result<Value, CrmError> {
        self.records.create(&NewBoard::from(request)).await
    }

    pub async fn update(&self, board_id: &str, fields: &BoardFields) -> Result<Value, CrmError> {
        self.records.update(board_id, fields).await
    }

    /// Boards of a project, filtered by the store.
    pub async fn list_for_project(&self, project_id: &str) -> Result<Page, CrmError> {
        let params = ListParams::new().where_eq("project_id", project_id);
        self.records.list(&params).await
    }

    async fn board(&self, board_id: &str) -> Result<ProjectBoard, CrmError> {
        decode(self.records.get(board_id).await?)
    }

    async fn write_columns(&self, board_id: &str, columns: &[Column]) -> Result<(), CrmError> {
        self.records
            .update(board_id, &ColumnsUpdate { columns })
            .await?;
        Ok(())
    }

    pub async fn columns(&self, board_id: &str) -> Result<Vec<Column>, CrmError> {
        Ok(self.board(board_id).await?.columns)
    }

    pub async fn add_column(&self, board_id: &str, new: NewColumn) -> Result<Column, CrmError> {
        let mut columns = self.board(board_id).await?.columns;

        let requested_id = new.id.clone();
        let seed = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        let column = append_column(&mut columns, new, seed)
            .ok_or_else(|| CrmError::ColumnExists(requested_id.unwrap_or_default()))?;

        self.write_columns(board_id, &columns).await?;
        tracing::debug!(%board_id, column_id = %column.id, "added column");
        Ok(column)
    }

    pub async fn update_column(
        &self,
        board_id: &str,
        column_id: &str,
        patch: ColumnPatch,
    ) -> Result<Column, CrmError> {
        let mut columns = self.board(board_id).await?.columns;

        let column = update_column(&mut columns, column_id, patch)
            .ok_or_else(|| CrmError::ColumnNotFound(column_id.to_string()))?;

        self.write_columns(board_id, &columns).await?;
        Ok(column)
    }

    pub async fn reorder_columns(
        &self,
        board_id: &str,
        requested: &[String],
    ) -> Result<Vec<Column>, CrmError> {
        let columns = self.board(board_id).await?.columns;
        let reordered = reorder_columns(columns, requested);

        self.write_columns(board_id, &reordered).await?;
        Ok(reordered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::mock::MockRecordStore;
    use serde_json::json;

    fn board_store() -> Arc<MockRecordStore> {
        Arc::new(MockRecordStore::new().with_records(
            Collection::ProjectBoards,
            vec![json!({
                "id": "b1",
                "title": "Sprint",
                "project_id": "p1",
                "columns": [
                    {"id": "a", "name": "A", "order": 1},
                    {"id": "b", "name": "B", "order": 2},
                    {"id": "c", "name": "C", "order": 3}
                ]
            })],
        ))
    }

    fn stored_columns(store: &MockRecordStore) -> Vec<Column> {
        let board = store.record(Collection::ProjectBoards, "b1").unwrap();
        serde_json::from_value(board["columns"].clone()).unwrap()
    }

    #[tokio::test]
    async fn created_board_has_default_columns() {
        let store = Arc::new(MockRecordStore::new());
        let service = BoardService::new(store.clone(), 200);

        let created = service
            .create(NewBoardRequest {
                title: Some("Launch".into()),
                project_id: Some("p1".into()),
            })
            .await
            .unwrap();

        let id = created["id"].as_str().unwrap();
        assert_eq!(service.columns(id).await.unwrap(), Column::default_template());
    }

    #[tokio::test]
    async fn board_without_columns_lists_empty() {
        let store = Arc::new(MockRecordStore::new().with_records(
            Collection::ProjectBoards,
            vec![json!({"id": "b2", "title": "Empty", "columns": null})],
        ));
        let service = BoardService::new(store, 200);

        assert!(service.columns("b2").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn added_column_gets_a_fresh_id_and_is_persisted() {
        let store = board_store();
        let service = BoardService::new(store.clone(), 200);

        let added = service
            .add_column("b1", NewColumn::default())
            .await
            .unwrap();

        let columns = stored_columns(&store);
        assert_eq!(columns.len(), 4);
        assert_eq!(columns.last(), Some(&added));
        assert!(!["a", "b", "c"].contains(&added.id.as_str()));
        assert_eq!(
            store.record(Collection::ProjectBoards, "b1").unwrap()["title"],
            "Sprint"
        );
    }

    #[tokio::test]
    async fn two_added_columns_get_distinct_ids() {
        let store = board_store();
        let service = BoardService::new(store.clone(), 200);

        let first = service.add_column("b1", NewColumn::default()).await.unwrap();
        let second = service.add_column("b1", NewColumn::default()).await.unwrap();

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn renaming_missing_column_is_not_found_and_writes_nothing() {
        let store = board_store();
        let service = BoardService::new(store.clone(), 200);
        let before = stored_columns(&store);

        let err = service
            .update_column(
                "b1",
                "missing",
                ColumnPatch {
                    name: Some("X".into()),
                    order: None,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CrmError::ColumnNotFound(id) if id == "missing"));
        assert_eq!(stored_columns(&store), before);
    }

    #[tokio::test]
    async fn reorder_is_written_back() {
        let store = board_store();
        let service = BoardService::new(store.clone(), 200);

        service
            .reorder_columns("b1", &["c".to_string(), "a".to_string()])
            .await
            .unwrap();

        let orders: Vec<(String, Option<i64>)> = stored_columns(&store)
            .into_iter()
            .map(|c| (c.id, c.order.as_i64()))
            .collect();
        assert_eq!(
            orders,
            vec![
                ("c".into(), Some(1)),
                ("a".into(), Some(2)),
                ("b".into(), Some(3))
            ]
        );
    }

    #[tokio::test]
    async fn missing_board_surfaces_upstream_error() {
        let service = BoardService::new(Arc::new(MockRecordStore::new()), 200);

        let err = service
            .add_column("nope", NewColumn::default())
            .await
            .unwrap_err();

        assert!(matches!(err, CrmError::Upstream { status: 404, .. }));
    }

    #[tokio::test]
    async fn column_edits_keep_extra_keys_and_fractional_orders() {
        let store = Arc::new(MockRecordStore::new().with_records(
            Collection::ProjectBoards,
            vec![json!({
                "id": "b1",
                "columns": [
                    {"id": "a", "name": "A", "order": 1, "color": "red"},
                    {"id": "b", "name": "B", "order": 1.5}
                ]
            })],
        ));
        let service = BoardService::new(store.clone(), 200);

        let columns = service.columns("b1").await.unwrap();
        assert_eq!(columns[1].order.as_f64(), Some(1.5));

        service
            .add_column(
                "b1",
                NewColumn {
                    id: Some("c".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let board = store.record(Collection::ProjectBoards, "b1").unwrap();
        assert_eq!(board["columns"][0]["color"], "red");
        assert_eq!(board["columns"][1]["order"], 1.5);
        assert_eq!(board["columns"][2]["id"], "c");
    }
}
