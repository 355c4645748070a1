//! Router tests: requests go through the full axum stack into an in-memory
//! SQLite store.

use std::sync::Arc;

use axum::{
  Router,
  body::{Body, to_bytes},
  http::{Request, StatusCode, header},
  response::Response,
};
use corkboard_store_sqlite::SqliteStore;
use serde_json::{Value, json};
use tower::ServiceExt as _;
use uuid::Uuid;

use crate::api_router;

async fn make_router() -> Router {
  let store = SqliteStore::open_in_memory().await.unwrap();
  api_router(Arc::new(store))
}

async fn oneshot_raw(
  app: &Router,
  method: &str,
  uri: &str,
  body: Option<Value>,
) -> Response {
  let mut builder = Request::builder().method(method).uri(uri);
  let body = match body {
    Some(json) => {
      builder = builder.header(header::CONTENT_TYPE, "application/json");
      Body::from(json.to_string())
    }
    None => Body::empty(),
  };
  app.clone().oneshot(builder.body(body).unwrap()).await.unwrap()
}

async fn body_json(resp: Response) -> Value {
  let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
  serde_json::from_slice(&bytes).unwrap()
}

async fn body_text(resp: Response) -> String {
  let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
  String::from_utf8(bytes.to_vec()).unwrap()
}

/// POST `body` to `uri` and return the created id.
async fn create(app: &Router, uri: &str, body: Value) -> String {
  let resp = oneshot_raw(app, "POST", uri, Some(body)).await;
  assert_eq!(resp.status(), StatusCode::CREATED);
  body_json(resp).await["id"].as_str().unwrap().to_owned()
}

// ── Entities ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_board_returns_201_with_id() {
  let app = make_router().await;
  let resp = oneshot_raw(&app, "POST", "/boards", Some(json!({"name": "Work"}))).await;
  assert_eq!(resp.status(), StatusCode::CREATED);

  let body = body_json(resp).await;
  assert_eq!(body["code"], 201);
  let id = body["id"].as_str().unwrap();
  assert!(Uuid::parse_str(id).is_ok());
}

#[tokio::test]
async fn create_without_name_returns_400_listing_the_field() {
  let app = make_router().await;
  let resp = oneshot_raw(&app, "POST", "/columns", Some(json!({}))).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  assert_eq!(body_json(resp).await["missing"], json!(["name"]));
}

#[tokio::test]
async fn duplicate_name_returns_400() {
  let app = make_router().await;
  create(&app, "/boards", json!({"name": "A"})).await;

  let resp = oneshot_raw(&app, "POST", "/boards", Some(json!({"name": "A"}))).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

  let listing = body_json(oneshot_raw(&app, "GET", "/boards?type=json", None).await).await;
  assert_eq!(listing["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn get_unknown_id_returns_404_echoing_it() {
  let app = make_router().await;
  let resp = oneshot_raw(&app, "GET", "/notes/nope", None).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  assert_eq!(body_json(resp).await["asked"], "nope");
}

#[tokio::test]
async fn patch_with_empty_fields_returns_304() {
  let app = make_router().await;
  let id = create(&app, "/notes", json!({"name": "n", "text": "t"})).await;

  let resp = oneshot_raw(
    &app,
    "PATCH",
    &format!("/notes/{id}"),
    Some(json!({"name": "", "text": ""})),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::NOT_MODIFIED);
}

#[tokio::test]
async fn patch_without_body_returns_304() {
  let app = make_router().await;
  let id = create(&app, "/boards", json!({"name": "B"})).await;

  let resp = oneshot_raw(&app, "PATCH", &format!("/boards/{id}"), None).await;
  assert_eq!(resp.status(), StatusCode::NOT_MODIFIED);
}

#[tokio::test]
async fn patch_then_get_shows_the_change() {
  let app = make_router().await;
  let id = create(&app, "/notes", json!({"name": "n", "text": "old"})).await;

  let resp = oneshot_raw(
    &app,
    "PATCH",
    &format!("/notes/{id}"),
    Some(json!({"text": "new"})),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::NO_CONTENT);

  let note = body_json(oneshot_raw(&app, "GET", &format!("/notes/{id}?type=json"), None).await).await;
  assert_eq!(note["name"], "n");
  assert_eq!(note["text"], "new");
}

#[tokio::test]
async fn delete_returns_204_then_404() {
  let app = make_router().await;
  let id = create(&app, "/columns", json!({"name": "C"})).await;

  let resp = oneshot_raw(&app, "DELETE", &format!("/columns/{id}"), None).await;
  assert_eq!(resp.status(), StatusCode::NO_CONTENT);

  let resp = oneshot_raw(&app, "DELETE", &format!("/columns/{id}"), None).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// ── Placement ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn board_tree_nests_columns_and_notes() {
  let app = make_router().await;
  let board = create(&app, "/boards", json!({"name": "B"})).await;
  let column = create(&app, "/columns", json!({"name": "Todo"})).await;
  let note = create(&app, "/notes", json!({"name": "milk", "text": "2L"})).await;
  create(&app, "/boards-content", json!({"board": board, "column": column})).await;
  create(&app, "/columns-content", json!({"column": column, "note": note})).await;

  let tree = body_json(oneshot_raw(&app, "GET", &format!("/boards/{board}?type=json"), None).await).await;
  assert_eq!(tree["name"], "B");
  assert_eq!(tree["columns"][0]["name"], "Todo");
  assert_eq!(tree["columns"][0]["notes"][0]["text"], "2L");
}

#[tokio::test]
async fn placing_into_unknown_column_returns_404() {
  let app = make_router().await;
  let board = create(&app, "/boards", json!({"name": "B"})).await;
  let ghost = Uuid::new_v4().to_string();

  let resp = oneshot_raw(
    &app,
    "POST",
    "/boards-content",
    Some(json!({"board": board, "column": ghost})),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  let body = body_json(resp).await;
  assert_eq!(body["asked"], ghost.as_str());
  assert!(body["description"].as_str().unwrap().starts_with("column"));
}

#[tokio::test]
async fn placing_twice_returns_400() {
  let app = make_router().await;
  let column = create(&app, "/columns", json!({"name": "C"})).await;
  let note = create(&app, "/notes", json!({"name": "n"})).await;
  let pair = json!({"column": column, "note": note});

  create(&app, "/columns-content", pair.clone()).await;
  let resp = oneshot_raw(&app, "POST", "/columns-content", Some(pair)).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn placing_without_ids_returns_400() {
  let app = make_router().await;
  let resp = oneshot_raw(&app, "POST", "/boards-content", Some(json!({}))).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  assert_eq!(body_json(resp).await["missing"], json!(["board", "column"]));
}

#[tokio::test]
async fn removing_a_placement_uses_query_parameters() {
  let app = make_router().await;
  let board = create(&app, "/boards", json!({"name": "B"})).await;
  let column = create(&app, "/columns", json!({"name": "C"})).await;
  create(&app, "/boards-content", json!({"board": board, "column": column})).await;

  let uri = format!("/boards-content?board={board}&column={column}");
  let resp = oneshot_raw(&app, "DELETE", &uri, None).await;
  assert_eq!(resp.status(), StatusCode::NO_CONTENT);

  let resp = oneshot_raw(&app, "DELETE", &uri, None).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn removing_a_placement_with_empty_id_returns_400() {
  let app = make_router().await;
  let resp = oneshot_raw(&app, "DELETE", "/boards-content?board=", None).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  assert_eq!(body_json(resp).await["missing"], json!(["board", "column"]));
}

#[tokio::test]
async fn deleting_a_board_keeps_its_columns() {
  let app = make_router().await;
  let board = create(&app, "/boards", json!({"name": "A"})).await;
  let column = create(&app, "/columns", json!({"name": "C1"})).await;
  create(&app, "/boards-content", json!({"board": board, "column": column})).await;

  let resp = oneshot_raw(&app, "DELETE", &format!("/boards/{board}"), None).await;
  assert_eq!(resp.status(), StatusCode::NO_CONTENT);

  let snapshot = body_json(oneshot_raw(&app, "GET", "/?type=json", None).await).await;
  assert!(snapshot["boards"].as_array().unwrap().is_empty());
  assert!(snapshot["boards_content"].as_array().unwrap().is_empty());
  assert_eq!(snapshot["columns"][0]["name"], "C1");
}

// ── Formats ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn html_view_is_escaped() {
  let app = make_router().await;
  let id = create(&app, "/boards", json!({"name": "<b>bold</b>"})).await;

  let resp = oneshot_raw(&app, "GET", &format!("/boards/{id}?type=html"), None).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let content_type = resp.headers()[header::CONTENT_TYPE].to_str().unwrap().to_owned();
  assert!(content_type.starts_with("text/html"), "content-type: {content_type}");

  let page = body_text(resp).await;
  assert!(page.contains("&lt;b&gt;bold&lt;/b&gt;"));
  assert!(!page.contains("<b>bold</b>"));
}

#[tokio::test]
async fn index_html_links_every_board() {
  let app = make_router().await;
  let id = create(&app, "/boards", json!({"name": "Home"})).await;

  let page = body_text(oneshot_raw(&app, "GET", "/?type=html", None).await).await;
  assert!(page.contains(&format!("/boards/{id}?type=html")));
}

#[tokio::test]
async fn reads_default_to_html() {
  let app = make_router().await;
  create(&app, "/boards", json!({"name": "Home"})).await;

  for uri in ["/", "/boards", "/?type=xml"] {
    let resp = oneshot_raw(&app, "GET", uri, None).await;
    assert_eq!(resp.status(), StatusCode::OK, "{uri}");
    let content_type = resp.headers()[header::CONTENT_TYPE].to_str().unwrap().to_owned();
    assert!(content_type.starts_with("text/html"), "{uri}: {content_type}");
    assert!(body_text(resp).await.contains("Home"), "{uri}");
  }
}
