use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::{app_state::AppState, config::ApplicationSettings, routes};

pub fn create(app_state: AppState, settings: &ApplicationSettings) -> Router<()> {
    Router::new()
        .route("/", get(|| async { "CRM backend is running" }))
        .nest("/accounts", routes::accounts::router())
        .nest("/leads", routes::leads::router())
        .nest("/types", routes::types::router())
        .nest("/projects", routes::projects::router())
        .nest("/account-leads", routes::account_leads::router())
        .nest("/boards", routes::boards::router())
        .nest("/tasks", routes::tasks::router())
        .with_state(app_state)
        .layer(cors(settings))
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}

fn cors(settings: &ApplicationSettings) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    if settings.allow_any_origin {
        return cors.allow_origin(Any);
    }

    let app_url = settings.app_url.clone();
    cors.allow_origin(AllowOrigin::predicate(move |origin, _| {
        origin.as_bytes() == app_url.as_bytes()
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::{adapters::outbound::mock::MockRecordStore, domain::models::Collection};

    fn settings() -> ApplicationSettings {
        ApplicationSettings {
            port: 5000,
            host: "127.0.0.1".into(),
            app_url: "http://localhost:5173".into(),
            allow_any_origin: false,
        }
    }

    fn app(store: Arc<MockRecordStore>) -> Router {
        create(AppState::new(store, 2), &settings())
    }

    async fn send(
        app: Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

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

    #[tokio::test]
    async fn banner_is_served_at_root() {
        let store = Arc::new(MockRecordStore::new());
        let response = app(store)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"CRM backend is running");
    }

    #[tokio::test]
    async fn creating_an_account_returns_201_with_allow_listed_fields() {
        let store = Arc::new(MockRecordStore::new());

        let (status, body) = send(
            app(store.clone()),
            "POST",
            "/accounts",
            Some(json!({"name": "Acme", "industry_type": "t1", "is_admin": true})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["name"], "Acme");
        assert_eq!(body["type_id"], "t1");
        assert_eq!(body["website"], Value::Null);
        assert!(body.get("is_admin").is_none());
        assert_eq!(store.records(Collection::Accounts).len(), 1);
    }

    #[tokio::test]
    async fn missing_record_keeps_upstream_404() {
        let store = Arc::new(MockRecordStore::new());

        let (status, body) = send(app(store), "GET", "/leads/nope", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn store_failure_becomes_500() {
        let store = Arc::new(MockRecordStore::new().failing(Collection::Projects));

        let (status, body) = send(app(store), "GET", "/projects", None).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn types_listing_reads_every_page() {
        let types = (0..5)
            .map(|i| json!({"id": format!("t{}", i), "name": format!("Type {}", i)}))
            .collect();
        let store = Arc::new(MockRecordStore::new().with_records(Collection::Types, types));

        let (status, body) = send(app(store), "GET", "/types", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["items"].as_array().map(Vec::len), Some(5));
    }

    #[tokio::test]
    async fn duplicate_active_relation_is_a_conflict() {
        let store = Arc::new(MockRecordStore::new().with_records(
            Collection::AccountLeads,
            vec![json!({"id": "r1", "account_id": "a1", "lead_id": "l1", "end_date": ""})],
        ));

        let (status, body) = send(
            app(store.clone()),
            "POST",
            "/account-leads",
            Some(json!({"account_id": "a1", "lead_id": "l1"})),
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["code"], "ACTIVE_RELATION_EXISTS");
        assert_eq!(store.records(Collection::AccountLeads).len(), 1);
    }

    #[tokio::test]
    async fn closed_relation_allows_a_new_one() {
        let store = Arc::new(MockRecordStore::new().with_records(
            Collection::AccountLeads,
            vec![json!({
                "id": "r1",
                "account_id": "a1",
                "lead_id": "l1",
                "end_date": "2024-01-31"
            })],
        ));

        let (status, body) = send(
            app(store.clone()),
            "POST",
            "/account-leads",
            Some(json!({"account_id": "a1", "lead_id": "l1", "start_date": "2024-02-01"})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["start_date"], "2024-02-01");
        assert_eq!(body["notes"], "");
        assert_eq!(store.records(Collection::AccountLeads).len(), 2);
    }

    #[tokio::test]
    async fn new_board_gets_default_columns() {
        let store = Arc::new(MockRecordStore::new());

        let (status, body) = send(
            app(store),
            "POST",
            "/boards",
            Some(json!({"title": "Sprint 1", "project_id": "p1"})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        let ids: Vec<&str> = body["columns"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|c| c["id"].as_str())
            .collect();
        assert_eq!(ids, vec!["todo", "in_progress", "done"]);
    }

    #[tokio::test]
    async fn reorder_returns_ok_and_renumbers() {
        let store = board_store();

        let (status, body) = send(
            app(store.clone()),
            "PUT",
            "/boards/b1/columns/reorder",
            Some(json!({"order": ["c", "a"]})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"ok": true}));

        let board = store.record(Collection::ProjectBoards, "b1").unwrap();
        assert_eq!(
            board["columns"],
            json!([
                {"id": "c", "name": "C", "order": 1},
                {"id": "a", "name": "A", "order": 2},
                {"id": "b", "name": "B", "order": 3}
            ])
        );
    }

    #[tokio::test]
    async fn renaming_unknown_column_is_404() {
        let store = board_store();

        let (status, body) = send(
            app(store.clone()),
            "PUT",
            "/boards/b1/columns/zzz",
            Some(json!({"name": "Renamed"})),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "COLUMN_NOT_FOUND");
        let board = store.record(Collection::ProjectBoards, "b1").unwrap();
        assert_eq!(board["columns"][0]["name"], "A");
    }

    #[tokio::test]
    async fn added_column_is_returned_with_201() {
        let store = board_store();

        let (status, body) = send(
            app(store.clone()),
            "POST",
            "/boards/b1/columns",
            Some(json!({"id": "review", "name": "Review", "order": 4})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({"id": "review", "name": "Review", "order": 4}));

        let (status, columns) = send(app(store), "GET", "/boards/b1/columns", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(columns.as_array().map(Vec::len), Some(4));
    }

    #[tokio::test]
    async fn move_without_order_is_rejected() {
        let store = Arc::new(MockRecordStore::new().with_records(
            Collection::ProjectTasks,
            vec![json!({"id": "t1", "board_id": "b1", "order": 1.0})],
        ));

        let (status, body) = send(
            app(store),
            "PATCH",
            "/tasks/t1/move",
            Some(json!({"board_id": "b2"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "board_id and order are required");
    }

    #[tokio::test]
    async fn malformed_json_is_a_client_error() {
        let store = Arc::new(MockRecordStore::new());
        let request = Request::builder()
            .method("POST")
            .uri("/leads")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app(store).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
