//! Stateless request builder and response parser for the posts service.
//!
//! # Design
//! `PostsClient` holds the collection base URL and the image URL and carries
//! no mutable state between calls. Each operation is a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. Status handling differs per operation: only
//! `parse_submit_item` looks at the status code.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{BinaryPayload, NewPost, Record};

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_IMAGE_URL: &str = "https://via.placeholder.com/150";

/// Synchronous, stateless client for the posts and image endpoints.
#[derive(Debug, Clone)]
pub struct PostsClient {
    base_url: String,
    image_url: String,
}

impl Default for PostsClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_IMAGE_URL)
    }
}

impl PostsClient {
    pub fn new(base_url: &str, image_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            image_url: image_url.to_string(),
        }
    }

    pub fn posts_url(&self) -> String {
        format!("{}/posts", self.base_url)
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn build_fetch_list(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.posts_url(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_submit_item(&self, input: &NewPost) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.posts_url(),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_fetch_image(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.image_url.clone(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Decode the body as an ordered list of records. The status is not checked.
    pub fn parse_fetch_list(&self, response: HttpResponse) -> Result<Vec<Record>, ApiError> {
        serde_json::from_slice(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Reject non-2xx responses, then decode and log the acknowledgment record.
    pub fn parse_submit_item(&self, response: HttpResponse) -> Result<Record, ApiError> {
        if !response.is_ok() {
            return Err(ApiError::NetworkResponseNotOk {
                status: response.status,
            });
        }
        let record: Record =
            serde_json::from_slice(&response.body).map_err(|e| ApiError::Decode(e.to_string()))?;
        tracing::info!(%record, "item submitted");
        Ok(record)
    }

    /// Hand back the body bytes as-is, whatever the status.
    pub fn parse_fetch_image_blob(&self, response: HttpResponse) -> BinaryPayload {
        let content_type = response.header("content-type").map(str::to_string);
        BinaryPayload {
            bytes: response.body,
            content_type,
        }
    }
}

/// Log every record in order and return how many were logged.
pub fn show_records(records: &[Record]) -> usize {
    for record in records {
        tracing::info!(%record, "record");
    }
    records.len()
}
