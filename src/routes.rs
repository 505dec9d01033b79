use std::path::PathBuf;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Json, Router};

use crate::db::Database;
use crate::error::Error;
use crate::payload::TodoPayload;

/// API routes live under a versioned prefix; the landing page does not.
pub const API_PREFIX: &str = "/api/v1";

#[derive(Clone)]
pub struct AppState {
    pub db_path: PathBuf,
}

pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/todos",
            get(list_todos).post(create_todo).delete(delete_collection),
        )
        .route(
            "/todos/:id",
            get(get_todo).put(update_todo).delete(delete_todo),
        );

    Router::new()
        .route("/", get(index))
        .nest(API_PREFIX, api)
        .with_state(state)
}

fn collection_url() -> String {
    format!("{API_PREFIX}/todos")
}

fn item_url(id: i64) -> String {
    format!("{API_PREFIX}/todos/{id}")
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn list_todos(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let db = Database::connect(&state.db_path)?;
    let todos = db.list_todos()?;
    tracing::debug!(count = todos.len(), "listing todos");
    Ok((
        StatusCode::OK,
        [(header::LOCATION, collection_url())],
        Json(todos),
    ))
}

async fn create_todo(
    State(state): State<AppState>,
    payload: TodoPayload,
) -> Result<impl IntoResponse, Error> {
    let new = payload.validate()?;
    let db = Database::connect(&state.db_path)?;
    let todo = db.insert_todo(&new)?;
    tracing::info!(id = todo.id, "created todo");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, item_url(todo.id))],
        Json(todo),
    ))
}

/// Collection-level delete is never valid. Some clients issue a delete for
/// an item that was never persisted, which lands here without an id.
async fn delete_collection() -> Error {
    Error::MethodNotAllowed
}

async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    let db = Database::connect(&state.db_path)?;
    let todo = db.get_todo(id)?;
    Ok(Json(todo))
}

async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: TodoPayload,
) -> Result<impl IntoResponse, Error> {
    let new = payload.validate()?;
    let db = Database::connect(&state.db_path)?;
    db.update_todo(id, &new)?;
    let todo = db.get_todo(id)?;
    tracing::info!(id, "updated todo");
    Ok((
        StatusCode::OK,
        [(header::LOCATION, item_url(id))],
        Json(todo),
    ))
}

async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    let db = Database::connect(&state.db_path)?;
    db.delete_todo(id)?;
    tracing::info!(id, "deleted todo");
    Ok((StatusCode::NO_CONTENT, [(header::LOCATION, item_url(id))]))
}

const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>todos</title>
  <style>
    body {
      font-family: system-ui, -apple-system, sans-serif;
      background: #f4f5f7;
      margin: 0;
      padding: 48px;
      display: flex;
      justify-content: center;
    }
    .card {
      width: min(640px, 100%);
      background: #ffffff;
      border-radius: 12px;
      padding: 32px;
      box-shadow: 0 16px 32px rgba(15, 23, 42, 0.08);
    }
    h1 { margin: 0 0 8px 0; }
    p { color: #64748b; }
    code {
      background: #f1f5f9;
      border-radius: 6px;
      padding: 2px 6px;
    }
  </style>
</head>
<body>
  <div class="card">
    <h1>todos</h1>
    <p>A minimal todo list API.</p>
    <p>The collection lives at <code>/api/v1/todos</code>; individual items
       at <code>/api/v1/todos/&lt;id&gt;</code>.</p>
  </div>
</body>
</html>
"#;
