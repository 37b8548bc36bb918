//! Async operations and the page-load flow against the live mock server.

use posts_app::{
    bind_image_on_ready, content_loaded, fetch_image_blob, fetch_list, submit_item, AppError,
    UreqTransport, IMAGE_SELECTOR,
};
use posts_core::{ApiError, BindingState, Page, PostsClient};

async fn start_server() -> std::net::SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::run(listener));
    addr
}

fn page() -> Page {
    Page::new().with_image("imagen")
}

#[tokio::test]
async fn fetch_list_returns_records_in_order() {
    let addr = start_server().await;
    let client = PostsClient::new(&format!("http://{addr}"), "unused");

    let records = fetch_list(&client, &UreqTransport::new()).await.unwrap();
    let ids: Vec<u64> = records
        .iter()
        .map(|r| r.get("id").and_then(|v| v.as_u64()).unwrap())
        .collect();
    assert_eq!(ids, (1..=mock_server::SEEDED_POSTS as u64).collect::<Vec<_>>());
}

#[tokio::test]
async fn submit_item_returns_acknowledgment() {
    let addr = start_server().await;
    let client = PostsClient::new(&format!("http://{addr}"), "unused");

    let ack = submit_item(&client, &UreqTransport::new()).await.unwrap();
    assert_eq!(ack.get("id"), Some(&serde_json::json!(101)));
}

#[tokio::test]
async fn submit_item_rejects_server_error() {
    let addr = start_server().await;
    let client = PostsClient::new(&format!("http://{addr}/unavailable"), "unused");

    let err = submit_item(&client, &UreqTransport::new()).await.unwrap_err();
    assert_eq!(err.to_string(), "Network response was not ok");
}

#[tokio::test]
async fn fetch_image_blob_ignores_404() {
    let addr = start_server().await;
    let client = PostsClient::new(&format!("http://{addr}"), &format!("http://{addr}/missing.png"));

    let blob = fetch_image_blob(&client, &UreqTransport::new()).await.unwrap();
    assert_eq!(blob.bytes, mock_server::MISSING_IMAGE_BODY.as_bytes());
}

#[tokio::test]
async fn fetch_image_blob_reads_bodies_past_ten_mebibytes() {
    let addr = start_server().await;
    let client = PostsClient::new(&format!("http://{addr}"), &format!("http://{addr}/large.png"));

    let blob = fetch_image_blob(&client, &UreqTransport::new()).await.unwrap();
    assert_eq!(blob.len(), mock_server::LARGE_IMAGE_LEN);
    assert_eq!(&blob.bytes[..mock_server::PLACEHOLDER_PNG.len()], mock_server::PLACEHOLDER_PNG);
    assert_eq!(blob.content_type.as_deref(), Some("image/png"));
}

#[tokio::test]
async fn page_load_binds_fetched_image() {
    let addr = start_server().await;
    let client = PostsClient::new(&format!("http://{addr}"), &format!("http://{addr}/150"));
    let transport = UreqTransport::new();
    let mut page = page();
    let (trigger, ready) = content_loaded();
    trigger.fire();

    let url = bind_image_on_ready(ready, &mut page, IMAGE_SELECTOR, || {
        fetch_image_blob(&client, &transport)
    })
    .await
    .unwrap();

    assert_eq!(page.state(), BindingState::Bound);
    let src = page.query_selector(IMAGE_SELECTOR).unwrap().src.clone().unwrap();
    assert_eq!(src, url.as_str());
    let payload = page.object_urls().resolve_str(&src).unwrap();
    assert_eq!(payload.bytes, mock_server::PLACEHOLDER_PNG);
    assert_eq!(payload.content_type.as_deref(), Some("image/png"));

    // The reference stays live until the page is torn down.
    assert_eq!(page.object_urls().live_count(), 1);
    assert_eq!(page.unload(), 1);
}

#[tokio::test]
async fn page_load_with_unreachable_image_leaves_element_alone() {
    // Bind then drop a listener so the port is known to refuse.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = PostsClient::new("unused", &format!("http://{addr}/150"));
    let transport = UreqTransport::new();
    let mut page = page();
    let (trigger, ready) = content_loaded();
    trigger.fire();

    let err = bind_image_on_ready(ready, &mut page, IMAGE_SELECTOR, || {
        fetch_image_blob(&client, &transport)
    })
    .await
    .unwrap_err();

    assert!(matches!(err, AppError::Api(ApiError::Transport(_))));
    assert!(page.query_selector(IMAGE_SELECTOR).unwrap().src.is_none());
    assert_eq!(page.state(), BindingState::Idle);
}
