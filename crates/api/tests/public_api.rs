//! Integration tests for the public project and message endpoints.

mod common;

use axum::http::StatusCode;
use folio_db::models::project::Project;
use folio_db::models::status::ProjectStatus;
use serde_json::json;
use tempfile::TempDir;

use common::*;

fn project(id: i64, title: &str, category: &str, status: ProjectStatus) -> Project {
    Project {
        id,
        title: title.into(),
        category: category.into(),
        description: format!("{title} description"),
        image_url: "https://images.test/p.jpg".into(),
        github_url: None,
        live_url: None,
        technologies: vec![],
        status,
        created_at: None,
        updated_at: None,
    }
}

/// Three active and two draft projects across two categories.
fn mixed_catalogue() -> Vec<Project> {
    vec![
        project(1, "Draft One", "Web", ProjectStatus::Draft),
        project(2, "Active One", "Web", ProjectStatus::Active),
        project(3, "Active Two", "Mobile", ProjectStatus::Active),
        project(4, "Draft Two", "Mobile", ProjectStatus::Draft),
        project(5, "Active Three", "Web", ProjectStatus::Active),
    ]
}

#[tokio::test]
async fn status_and_limit_filters_return_one_active_project() {
    let dir = TempDir::new().unwrap();
    let app = build_test_app_with_projects(dir.path(), mixed_catalogue()).await;

    let response = get(&app, "/api/projects?status=active&limit=1").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["status"], "active");
    assert_eq!(data[0]["title"], "Active One");
}

#[tokio::test]
async fn category_filter_and_all() {
    let dir = TempDir::new().unwrap();
    let app = build_test_app_with_projects(dir.path(), mixed_catalogue()).await;

    let json = body_json(get(&app, "/api/projects?category=Mobile").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    let json = body_json(get(&app, "/api/projects?category=all").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 5);

    let json = body_json(get(&app, "/api/projects").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn unknown_status_filter_is_400() {
    let dir = TempDir::new().unwrap();
    let app = build_test_app_with_projects(dir.path(), mixed_catalogue()).await;

    assert_error(
        get(&app, "/api/projects?status=archived").await,
        StatusCode::BAD_REQUEST,
        "VALIDATION_ERROR",
    )
    .await;
}

#[tokio::test]
async fn zero_or_non_numeric_limit_returns_everything() {
    let dir = TempDir::new().unwrap();
    let app = build_test_app_with_projects(dir.path(), mixed_catalogue()).await;

    for uri in ["/api/projects?limit=0", "/api/projects?limit=many", "/api/projects?limit=-1"] {
        let response = get(&app, uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        let json = body_json(response).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 5, "{uri}");
    }
}

#[tokio::test]
async fn categories_are_distinct_in_first_seen_order() {
    let dir = TempDir::new().unwrap();
    let app = build_test_app_with_projects(dir.path(), mixed_catalogue()).await;

    let json = body_json(get(&app, "/api/projects/categories").await).await;
    assert_eq!(json["data"], json!(["Web", "Mobile"]));
}

#[tokio::test]
async fn single_project_lookup() {
    let dir = TempDir::new().unwrap();
    let app = build_test_app_with_projects(dir.path(), mixed_catalogue()).await;

    let response = get(&app, "/api/projects/3").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["title"], "Active Two");

    let json = assert_error(get(&app, "/api/projects/42").await, StatusCode::NOT_FOUND, "NOT_FOUND").await;
    assert_eq!(json["message"], "Project not found");

    let json = assert_error(
        get(&app, "/api/projects/abc").await,
        StatusCode::BAD_REQUEST,
        "BAD_REQUEST",
    )
    .await;
    assert_eq!(json["message"], "Invalid project ID");
}

#[tokio::test]
async fn contact_stores_an_unread_message() {
    let dir = TempDir::new().unwrap();
    let app = build_test_app(dir.path()).await;

    let response = post_json(
        &app,
        "/api/contact",
        json!({
            "name": " Grace ",
            "email": "grace@example.com",
            "subject": "Hello",
            "message": "Loved the site"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert!(json.get("data").is_none());

    let messages = app.state.messages.list().await;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].name, "Grace");
    assert_eq!(app.state.messages.unread_count().await, 1);
}

#[tokio::test]
async fn contact_requires_every_field_and_a_valid_email() {
    let dir = TempDir::new().unwrap();
    let app = build_test_app(dir.path()).await;

    let json = assert_error(
        post_json(
            &app,
            "/api/contact",
            json!({ "name": "Grace", "email": "grace@example.com", "message": "Hi" }),
        )
        .await,
        StatusCode::BAD_REQUEST,
        "BAD_REQUEST",
    )
    .await;
    assert_eq!(json["message"], "All fields are required");

    assert_error(
        post_json(
            &app,
            "/api/contact",
            json!({ "name": "Grace", "email": "not-an-email", "subject": "Hi", "message": "Hi" }),
        )
        .await,
        StatusCode::BAD_REQUEST,
        "VALIDATION_ERROR",
    )
    .await;
    assert_eq!(app.state.messages.count().await, 0);
}

#[tokio::test]
async fn malformed_contact_body_gets_error_envelope() {
    let dir = TempDir::new().unwrap();
    let app = build_test_app(dir.path()).await;

    let json = assert_error(
        post_json(
            &app,
            "/api/contact",
            json!({ "name": ["Grace"], "email": "grace@example.com", "subject": "Hi", "message": "Hi" }),
        )
        .await,
        StatusCode::BAD_REQUEST,
        "BAD_REQUEST",
    )
    .await;
    assert!(json["message"].as_str().unwrap().contains("name"));
    assert_eq!(app.state.messages.count().await, 0);
}

#[tokio::test]
async fn messages_endpoint_returns_stored_message() {
    let dir = TempDir::new().unwrap();
    let app = build_test_app(dir.path()).await;

    let response = post_json(
        &app,
        "/api/messages",
        json!({ "name": "Linus", "email": "Linus@Example.COM", "message": "Question" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["email"], "linus@example.com");
    assert_eq!(json["data"]["subject"], "General inquiry");
    assert_eq!(json["data"]["status"], "unread");
    assert!(json["data"]["id"].is_string());

    let json = assert_error(
        post_json(&app, "/api/messages", json!({ "name": "Linus", "message": "Question" })).await,
        StatusCode::BAD_REQUEST,
        "BAD_REQUEST",
    )
    .await;
    assert_eq!(json["message"], "Name, email, and message are required");
}
