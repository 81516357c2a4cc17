use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::app;
use serde_json::Value;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

// --- info ---

#[tokio::test]
async fn root_returns_cluster_info() {
    let resp = app().oneshot(empty_request("GET", "/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let info = body_json(resp).await;
    assert_eq!(info["tagline"], "You Know, for Search");
}

#[tokio::test]
async fn head_on_root_has_no_body() {
    let resp = app().oneshot(empty_request("HEAD", "/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_bytes(resp).await.is_empty());
}

// --- documents ---

#[tokio::test]
async fn put_then_get_document() {
    let app = app();
    let resp = app
        .clone()
        .oneshot(json_request("PUT", "/books/_doc/1/", r#"{"title":"Dune"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(body_json(resp).await["result"], "created");

    let resp = app.oneshot(empty_request("GET", "/books/_doc/1/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let doc = body_json(resp).await;
    assert_eq!(doc["found"], true);
    assert_eq!(doc["_source"]["title"], "Dune");
}

#[tokio::test]
async fn second_put_reports_updated() {
    let app = app();
    app.clone()
        .oneshot(json_request("PUT", "/books/_doc/1/", r#"{"title":"Dune"}"#))
        .await
        .unwrap();
    let resp = app
        .oneshot(json_request("PUT", "/books/_doc/1/", r#"{"title":"Emma"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["result"], "updated");
}

#[tokio::test]
async fn post_without_id_generates_one() {
    let resp = app()
        .oneshot(json_request("POST", "/books/_doc/", r#"{"title":"Dune"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = body_json(resp).await;
    assert_eq!(created["_id"].as_str().unwrap().len(), 32);
}

#[tokio::test]
async fn get_missing_document_returns_404() {
    let resp = app().oneshot(empty_request("GET", "/books/_doc/nope/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await["found"], false);
}

#[tokio::test]
async fn update_merges_partial_doc() {
    let app = app();
    app.clone()
        .oneshot(json_request("PUT", "/books/_doc/1/", r#"{"title":"Dune","views":0}"#))
        .await
        .unwrap();
    let resp = app
        .clone()
        .oneshot(json_request("POST", "/books/_update/1/", r#"{"doc":{"views":5}}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app.oneshot(empty_request("GET", "/books/_doc/1/")).await.unwrap();
    let doc = body_json(resp).await;
    assert_eq!(doc["_source"]["title"], "Dune");
    assert_eq!(doc["_source"]["views"], 5);
}

#[tokio::test]
async fn update_missing_document_returns_404() {
    let resp = app()
        .oneshot(json_request("POST", "/books/_update/1/", r#"{"doc":{}}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await["error"]["type"], "document_missing_exception");
}

#[tokio::test]
async fn delete_then_delete_again() {
    let app = app();
    app.clone()
        .oneshot(json_request("PUT", "/books/_doc/1/", r#"{}"#))
        .await
        .unwrap();
    let resp = app
        .clone()
        .oneshot(empty_request("DELETE", "/books/_doc/1/"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let resp = app.oneshot(empty_request("DELETE", "/books/_doc/1/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await["result"], "not_found");
}

// --- echo ---

#[tokio::test]
async fn unknown_routes_are_echoed() {
    let resp = app()
        .oneshot(json_request("POST", "/books/_search/?size=2&q=dune", r#"{"query":{}}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let echoed = body_json(resp).await;
    assert_eq!(echoed["method"], "POST");
    assert_eq!(echoed["path"], "/books/_search/");
    assert_eq!(echoed["query"], "size=2&q=dune");
    assert_eq!(echoed["content_type"], "application/json");
    assert_eq!(echoed["body"]["query"], serde_json::json!({}));
}

#[tokio::test]
async fn non_json_bodies_are_echoed_as_text() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/_bulk/")
                .header(http::header::CONTENT_TYPE, "application/x-ndjson")
                .body("{\"index\":{}}\n{\"a\":1}\n".to_string())
                .unwrap(),
        )
        .await
        .unwrap();
    let echoed = body_json(resp).await;
    assert_eq!(echoed["body"], "{\"index\":{}}\n{\"a\":1}\n");
    assert_eq!(echoed["query"], Value::Null);
}
