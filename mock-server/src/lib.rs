//! In-memory stand-in for an Elasticsearch node.
//!
//! Implements just enough of the document APIs (`_doc`, `_update`) to run a
//! lifecycle test, and echoes every other request back as JSON so callers
//! can assert on the method, path, query and body the server received.
//! Routes carry the trailing slash the client always renders.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Request, State},
    http::{header, HeaderMap, Method, StatusCode, Uri},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;
use uuid::Uuid;

/// Documents keyed by `(index, id)`.
pub type Store = Arc<RwLock<HashMap<(String, String), Value>>>;

#[derive(Deserialize)]
pub struct UpdateBody {
    #[serde(default)]
    pub doc: Map<String, Value>,
}

pub fn app() -> Router {
    let store = Store::default();
    Router::new()
        .route("/", get(info))
        .route("/{index}/_doc/", post(create_doc))
        .route(
            "/{index}/_doc/{id}/",
            get(get_doc).put(put_doc).post(put_doc).delete(delete_doc),
        )
        .route("/{index}/_update/{id}/", post(update_doc))
        .fallback(echo)
        .with_state(store)
        .layer(middleware::from_fn(log_request))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let response = next.run(request).await;
    info!(%method, %uri, status = response.status().as_u16(), "handled");
    response
}

async fn info() -> Json<Value> {
    Json(json!({
        "name": "mock-node",
        "cluster_name": "mock",
        "version": { "number": "7.10.0" },
        "tagline": "You Know, for Search",
    }))
}

fn doc_result(index: &str, id: &str, result: &str) -> Json<Value> {
    Json(json!({ "_index": index, "_id": id, "result": result }))
}

async fn create_doc(
    State(store): State<Store>,
    Path(index): Path<String>,
    Json(source): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let id = Uuid::new_v4().simple().to_string();
    store.write().await.insert((index.clone(), id.clone()), source);
    (StatusCode::CREATED, doc_result(&index, &id, "created"))
}

async fn put_doc(
    State(store): State<Store>,
    Path((index, id)): Path<(String, String)>,
    Json(source): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let previous = store.write().await.insert((index.clone(), id.clone()), source);
    match previous {
        Some(_) => (StatusCode::OK, doc_result(&index, &id, "updated")),
        None => (StatusCode::CREATED, doc_result(&index, &id, "created")),
    }
}

async fn get_doc(
    State(store): State<Store>,
    Path((index, id)): Path<(String, String)>,
) -> (StatusCode, Json<Value>) {
    let docs = store.read().await;
    match docs.get(&(index.clone(), id.clone())) {
        Some(source) => (
            StatusCode::OK,
            Json(json!({ "_index": index, "_id": id, "found": true, "_source": source })),
        ),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "_index": index, "_id": id, "found": false })),
        ),
    }
}

async fn delete_doc(
    State(store): State<Store>,
    Path((index, id)): Path<(String, String)>,
) -> (StatusCode, Json<Value>) {
    match store.write().await.remove(&(index.clone(), id.clone())) {
        Some(_) => (StatusCode::OK, doc_result(&index, &id, "deleted")),
        None => (StatusCode::NOT_FOUND, doc_result(&index, &id, "not_found")),
    }
}

async fn update_doc(
    State(store): State<Store>,
    Path((index, id)): Path<(String, String)>,
    Json(update): Json<UpdateBody>,
) -> (StatusCode, Json<Value>) {
    let mut docs = store.write().await;
    let Some(Value::Object(source)) = docs.get_mut(&(index.clone(), id.clone())) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": { "type": "document_missing_exception", "index": index, "id": id },
                "status": 404,
            })),
        );
    };
    source.extend(update.doc);
    (StatusCode::OK, doc_result(&index, &id, "updated"))
}

/// Reflect the request back so tests can see what went over the wire.
async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: String) -> Json<Value> {
    let body = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&body).unwrap_or(Value::String(body))
    };
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());
    Json(json!({
        "method": method.as_str(),
        "path": uri.path(),
        "query": uri.query(),
        "content_type": content_type,
        "body": body,
    }))
}
