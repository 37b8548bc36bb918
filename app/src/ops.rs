//! The three operations, each one request and one response.
//!
//! Errors propagate unchanged to the caller; nothing here logs a failure.

use posts_core::{ApiError, BinaryPayload, NewPost, PostsClient, Record};

use crate::transport::UreqTransport;

pub async fn fetch_list(
    client: &PostsClient,
    transport: &UreqTransport,
) -> Result<Vec<Record>, ApiError> {
    let response = transport.execute(client.build_fetch_list()).await?;
    client.parse_fetch_list(response)
}

/// Post the fixed demo payload and return the server's acknowledgment.
pub async fn submit_item(
    client: &PostsClient,
    transport: &UreqTransport,
) -> Result<Record, ApiError> {
    let request = client.build_submit_item(&NewPost::demo())?;
    let response = transport.execute(request).await?;
    client.parse_submit_item(response)
}

pub async fn fetch_image_blob(
    client: &PostsClient,
    transport: &UreqTransport,
) -> Result<BinaryPayload, ApiError> {
    let response = transport.execute(client.build_fetch_image()).await?;
    Ok(client.parse_fetch_image_blob(response))
}
