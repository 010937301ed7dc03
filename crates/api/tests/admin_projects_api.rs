//! Integration tests for `/api/admin/projects`.

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};
use tempfile::TempDir;

use common::*;

fn example_project() -> Value {
    json!({
        "title": "Portfolio Site",
        "category": "Web Development",
        "description": "Personal portfolio with an admin area",
        "status": "active",
        "githubUrl": "https://github.com/example/portfolio",
        "liveUrl": "https://portfolio.example.com",
        "technologies": "Rust, axum, Tailwind"
    })
}

#[tokio::test]
async fn create_returns_project_with_fresh_integer_id() {
    let dir = TempDir::new().unwrap();
    let app = build_test_app(dir.path()).await;
    let before = app.state.projects.count().await;

    let response =
        post_json_auth(&app, "/api/admin/projects", example_project(), &admin_cookie()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Project created successfully");

    let id = json["data"]["id"].as_i64().expect("integer id");
    assert_eq!(json["data"]["status"], "active");
    assert_eq!(json["data"]["technologies"], json!(["Rust", "axum", "Tailwind"]));
    assert!(json["data"]["imageUrl"].is_string());
    assert!(json["data"]["createdAt"].is_string());

    assert_eq!(app.state.projects.count().await, before + 1);
    assert!(app.state.projects.get_by_id(id).await.is_some());
}

#[tokio::test]
async fn create_rejects_each_missing_field() {
    let dir = TempDir::new().unwrap();
    let app = build_test_app(dir.path()).await;

    for field in ["title", "category", "description", "status", "githubUrl", "liveUrl"] {
        let mut body = example_project();
        body.as_object_mut().unwrap().remove(field);

        let json = assert_error(
            post_json_auth(&app, "/api/admin/projects", body, &admin_cookie()).await,
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
        )
        .await;
        let message = json["message"].as_str().unwrap();
        assert!(message.starts_with("Missing required fields"), "{message}");
        assert!(message.contains(field), "{message} should name {field}");
    }
}

#[tokio::test]
async fn create_with_wrongly_typed_field_gets_error_envelope() {
    let dir = TempDir::new().unwrap();
    let app = build_test_app(dir.path()).await;
    let before = app.state.projects.count().await;

    let mut body = example_project();
    body["title"] = json!(123);

    let response = post_json_auth(&app, "/api/admin/projects", body, &admin_cookie()).await;
    assert_eq!(response.headers()["content-type"], "application/json");
    let json = assert_error(response, StatusCode::BAD_REQUEST, "BAD_REQUEST").await;
    let message = json["message"].as_str().unwrap();
    assert!(message.contains("title"), "{message}");
    assert_eq!(app.state.projects.count().await, before);
}

#[tokio::test]
async fn body_that_is_not_json_gets_error_envelope() {
    let dir = TempDir::new().unwrap();
    let app = build_test_app(dir.path()).await;

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/admin/projects")
        .header("cookie", admin_cookie())
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();

    assert_error(send(&app, request).await, StatusCode::BAD_REQUEST, "BAD_REQUEST").await;
}

#[tokio::test]
async fn create_rejects_non_url_links() {
    let dir = TempDir::new().unwrap();
    let app = build_test_app(dir.path()).await;

    let mut body = example_project();
    body["githubUrl"] = json!("github.com/example");

    let json = assert_error(
        post_json_auth(&app, "/api/admin/projects", body, &admin_cookie()).await,
        StatusCode::BAD_REQUEST,
        "VALIDATION_ERROR",
    )
    .await;
    assert_eq!(json["message"], "Invalid URL format for githubUrl");
}

#[tokio::test]
async fn update_merges_fields_and_keeps_id() {
    let dir = TempDir::new().unwrap();
    let app = build_test_app(dir.path()).await;
    let original = app.state.projects.get_by_id(1).await.unwrap();

    let mut body = example_project();
    body["id"] = json!("1");
    body["title"] = json!("Renamed");
    body.as_object_mut().unwrap().remove("technologies");

    let response = put_json_auth(&app, "/api/admin/projects", body, &admin_cookie()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Project updated successfully");
    assert_eq!(json["data"]["id"], 1);
    assert_eq!(json["data"]["title"], "Renamed");
    assert!(json["data"]["updatedAt"].is_string());

    let stored = app.state.projects.get_by_id(1).await.unwrap();
    assert_eq!(stored.technologies, original.technologies);
    assert_eq!(stored.image_url, original.image_url);
}

#[tokio::test]
async fn update_of_unknown_project_is_404() {
    let dir = TempDir::new().unwrap();
    let app = build_test_app(dir.path()).await;

    let mut body = example_project();
    body["id"] = json!(9999);

    let json = assert_error(
        put_json_auth(&app, "/api/admin/projects", body, &admin_cookie()).await,
        StatusCode::NOT_FOUND,
        "NOT_FOUND",
    )
    .await;
    assert_eq!(json["message"], "Project not found");
}

#[tokio::test]
async fn delete_removes_exactly_one_project() {
    let dir = TempDir::new().unwrap();
    let app = build_test_app(dir.path()).await;
    let before = app.state.projects.count().await;

    let response = delete_auth(&app, "/api/admin/projects?id=2", &admin_cookie()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Project deleted successfully");

    assert_eq!(app.state.projects.count().await, before - 1);
    assert!(app.state.projects.get_by_id(2).await.is_none());

    assert_error(
        delete_auth(&app, "/api/admin/projects?id=2", &admin_cookie()).await,
        StatusCode::NOT_FOUND,
        "NOT_FOUND",
    )
    .await;
}

#[tokio::test]
async fn delete_requires_a_numeric_id() {
    let dir = TempDir::new().unwrap();
    let app = build_test_app(dir.path()).await;

    let json = assert_error(
        delete_auth(&app, "/api/admin/projects", &admin_cookie()).await,
        StatusCode::BAD_REQUEST,
        "BAD_REQUEST",
    )
    .await;
    assert_eq!(json["message"], "Project ID is required");

    let json = assert_error(
        delete_auth(&app, "/api/admin/projects?id=abc", &admin_cookie()).await,
        StatusCode::BAD_REQUEST,
        "BAD_REQUEST",
    )
    .await;
    assert_eq!(json["message"], "Invalid project ID");
}
