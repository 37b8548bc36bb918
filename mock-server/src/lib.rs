use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{any, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

pub const SEEDED_POSTS: u32 = 100;

/// 1x1 transparent PNG served as the placeholder image.
pub const PLACEHOLDER_PNG: &[u8] = &[
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1f,
    0x15, 0xc4, 0x89, 0x00, 0x00, 0x00, 0x0a, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9c, 0x63, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0d, 0x0a, 0x2d, 0xb4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
];

pub const MISSING_IMAGE_BODY: &str = "image not found";

/// Size of the body served by `/large.png`, above ureq's default read limit.
pub const LARGE_IMAGE_LEN: usize = 11 * 1024 * 1024;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "userId")]
    pub user_id: u32,
    pub id: u32,
    pub title: String,
    pub body: String,
}

/// Body of `POST /posts`. Every field is optional, as upstream accepts anything.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct NewPost {
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

pub type Db = Arc<Vec<Post>>;

pub fn seed_posts() -> Vec<Post> {
    (1..=SEEDED_POSTS)
        .map(|id| Post {
            user_id: (id - 1) / 10 + 1,
            id,
            title: format!("post {id}"),
            body: format!("body of post {id}"),
        })
        .collect()
}

pub fn app() -> Router {
    let db: Db = Arc::new(seed_posts());
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route("/150", get(placeholder_image))
        .route("/missing.png", get(missing_image))
        .route("/large.png", get(large_image))
        .route("/unavailable/{*rest}", any(unavailable))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_posts(State(db): State<Db>) -> Json<Vec<Post>> {
    Json(db.as_ref().clone())
}

/// Echo the payload with the next id. Nothing is persisted, so every create
/// answers with the same id.
async fn create_post(
    State(db): State<Db>,
    Json(input): Json<NewPost>,
) -> (StatusCode, Json<serde_json::Value>) {
    let id = db.len() as u32 + 1;
    tracing::debug!(id, "create post");
    let mut echo = serde_json::to_value(&input).unwrap_or_else(|_| serde_json::json!({}));
    echo["id"] = serde_json::json!(id);
    (StatusCode::CREATED, Json(echo))
}

async fn placeholder_image() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/png")], PLACEHOLDER_PNG)
}

async fn large_image() -> impl IntoResponse {
    let mut bytes = vec![0u8; LARGE_IMAGE_LEN];
    bytes[..PLACEHOLDER_PNG.len()].copy_from_slice(PLACEHOLDER_PNG);
    ([(header::CONTENT_TYPE, "image/png")], bytes)
}

async fn missing_image() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "text/plain")],
        MISSING_IMAGE_BODY,
    )
}

async fn unavailable() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "internal error")
}
