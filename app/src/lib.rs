//! Async executor for the posts core.
//!
//! # Overview
//! `posts-core` only builds requests and parses responses. This crate runs
//! them: `transport` performs the HTTP round-trip with ureq on tokio's
//! blocking pool, `ops` chains build, execute and parse for each operation,
//! and `page_load` binds the fetched image once the page reports ready.

pub mod config;
pub mod error;
pub mod ops;
pub mod page_load;
pub mod transport;

pub use error::AppError;
pub use ops::{fetch_image_blob, fetch_list, submit_item};
pub use page_load::{bind_image_on_ready, content_loaded, ContentLoaded, ContentLoadedTrigger};
pub use transport::UreqTransport;

/// Selector of the image slot filled on page load.
pub const IMAGE_SELECTOR: &str = "#imagen";
