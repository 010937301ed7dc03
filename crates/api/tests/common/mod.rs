//! Shared helpers for the API integration tests.
//!
//! Every test gets its own temporary data directory and a router built by
//! [`build_app_router`], so requests run through the production middleware
//! stack without binding a socket.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use folio_api::auth::password::hash_password;
use folio_api::auth::session::{issue_session_token, SessionConfig};
use folio_api::config::ServerConfig;
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_core::roles::ROLE_ADMIN;
use folio_db::models::project::Project;
use folio_db::models::user::NewUser;
use folio_db::repositories::{MessageRepo, ProjectRepo, UserRepo};
use folio_media::{ImageHost, ImageUpload, MediaError, UploadedImage};

pub const TEST_SECRET: &str = "integration-test-secret";
pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "hunter22";

/// Build a test `ServerConfig` pointing at `data_dir`.
pub fn test_config(data_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        production: false,
        data_dir: data_dir.to_path_buf(),
        session: test_session(),
    }
}

pub fn test_session() -> SessionConfig {
    SessionConfig {
        secret: TEST_SECRET.to_string(),
        expiry_hours: 24,
        secure_cookie: false,
    }
}

// ---------------------------------------------------------------------------
// Image host double
// ---------------------------------------------------------------------------

/// In-memory [`ImageHost`] that records uploads.
#[derive(Default)]
pub struct FakeImageHost {
    /// When set, every upload fails with this upstream status.
    pub fail_with: Option<u16>,
    pub uploads: Mutex<Vec<ImageUpload>>,
}

#[async_trait]
impl ImageHost for FakeImageHost {
    async fn upload(&self, image: ImageUpload) -> Result<UploadedImage, MediaError> {
        if let Some(status) = self.fail_with {
            return Err(MediaError::Upstream {
                status,
                body: "rejected".into(),
            });
        }
        let public_id = format!("portfolio-projects/{}", image.file_name);
        self.uploads.lock().unwrap().push(image);
        Ok(UploadedImage {
            url: format!("https://images.test/{public_id}.jpg"),
            public_id,
            width: 800,
            height: 600,
        })
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// A router plus the state behind it, kept alive with its data directory.
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub images: Arc<FakeImageHost>,
    pub data_dir: PathBuf,
}

/// App over the seeded project catalogue.
pub async fn build_test_app(dir: &Path) -> TestApp {
    let projects = ProjectRepo::open(dir).await;
    assemble(dir, projects, FakeImageHost::default()).await
}

/// App whose project store starts with exactly `projects`.
pub async fn build_test_app_with_projects(dir: &Path, projects: Vec<Project>) -> TestApp {
    let projects = ProjectRepo::open_with(dir, projects).await;
    assemble(dir, projects, FakeImageHost::default()).await
}

/// App whose image host behaves like `images`.
pub async fn build_test_app_with_images(dir: &Path, images: FakeImageHost) -> TestApp {
    let projects = ProjectRepo::open(dir).await;
    assemble(dir, projects, images).await
}

async fn assemble(dir: &Path, projects: ProjectRepo, images: FakeImageHost) -> TestApp {
    let config = test_config(dir);
    let images = Arc::new(images);
    let state = AppState {
        projects: Arc::new(projects),
        messages: Arc::new(MessageRepo::open(dir).await),
        users: Arc::new(UserRepo::open(dir).await),
        image_host: images.clone(),
        config: Arc::new(config.clone()),
    };
    TestApp {
        router: build_app_router(state.clone(), &config),
        state,
        images,
        data_dir: dir.to_path_buf(),
    }
}

// ---------------------------------------------------------------------------
// Sessions
// ---------------------------------------------------------------------------

/// `Cookie` header value carrying a fresh admin session.
pub fn admin_cookie() -> String {
    cookie_for_role(ROLE_ADMIN)
}

pub fn cookie_for_role(role: &str) -> String {
    let token = issue_session_token("user-1", ADMIN_EMAIL, "Admin", role, &test_session()).unwrap();
    format!("auth-token={token}")
}

/// Store an account with [`ADMIN_EMAIL`] / [`ADMIN_PASSWORD`].
pub async fn create_admin(app: &TestApp) {
    app.state
        .users
        .create(NewUser {
            name: "Admin".into(),
            email: ADMIN_EMAIL.into(),
            password_hash: hash_password(ADMIN_PASSWORD).unwrap(),
        })
        .await
        .unwrap();
}

/// The response's `Set-Cookie` header.
pub fn set_cookie(response: &Response<Body>) -> String {
    response
        .headers()
        .get(SET_COOKIE)
        .expect("response sets a cookie")
        .to_str()
        .unwrap()
        .to_string()
}

/// The `name=value` pair of a `Set-Cookie` header, usable as a `Cookie`.
pub fn cookie_pair(set_cookie: &str) -> String {
    set_cookie.split(';').next().unwrap_or_default().to_string()
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn send(app: &TestApp, request: Request<Body>) -> Response<Body> {
    app.router.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn builder(method: &str, uri: &str, cookie: Option<&str>) -> axum::http::request::Builder {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    builder
}

fn json_request(method: &str, uri: &str, body: &serde_json::Value, cookie: Option<&str>) -> Request<Body> {
    builder(method, uri, cookie)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn get(app: &TestApp, uri: &str) -> Response<Body> {
    send(app, builder("GET", uri, None).body(Body::empty()).unwrap()).await
}

pub async fn get_with_cookie(app: &TestApp, uri: &str, cookie: &str) -> Response<Body> {
    send(app, builder("GET", uri, Some(cookie)).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: &TestApp, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request("POST", uri, &body, None)).await
}

pub async fn post_json_auth(
    app: &TestApp,
    uri: &str,
    body: serde_json::Value,
    cookie: &str,
) -> Response<Body> {
    send(app, json_request("POST", uri, &body, Some(cookie))).await
}

pub async fn put_json_auth(
    app: &TestApp,
    uri: &str,
    body: serde_json::Value,
    cookie: &str,
) -> Response<Body> {
    send(app, json_request("PUT", uri, &body, Some(cookie))).await
}

pub async fn delete_auth(app: &TestApp, uri: &str, cookie: &str) -> Response<Body> {
    send(app, builder("DELETE", uri, Some(cookie)).body(Body::empty()).unwrap()).await
}

/// Multipart body with one file field.
pub fn multipart_request(
    uri: &str,
    field: &str,
    file_name: &str,
    content_type: &str,
    bytes: &[u8],
    cookie: &str,
) -> Request<Body> {
    const BOUNDARY: &str = "folio-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    builder("POST", uri, Some(cookie))
        .header(CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}"))
        .body(Body::from(body))
        .unwrap()
}

/// Assert the `{ success: false, message, code }` envelope.
pub async fn assert_error(response: Response<Body>, status: StatusCode, code: &str) -> serde_json::Value {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], code);
    json
}
