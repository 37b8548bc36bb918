//! Request/response core for the posts service and the image page.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, so every operation here is deterministic.
//!
//! # Design
//! - `PostsClient` holds only the two endpoint URLs.
//! - Each operation is split into `build_*` and `parse_*`.
//! - Records are opaque JSON; the core never inspects their fields.
//! - `page` models the single image slot and the transient references handed
//!   to it, without any runtime dependency.

pub mod client;
pub mod error;
pub mod http;
pub mod page;
pub mod types;

pub use client::{show_records, PostsClient, DEFAULT_BASE_URL, DEFAULT_IMAGE_URL};
pub use error::{ApiError, PageError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use page::{BindingState, ImageElement, ObjectUrl, ObjectUrlStore, Page};
pub use types::{BinaryPayload, NewPost, Record};
