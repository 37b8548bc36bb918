//! One-shot "content loaded" subscription and the image binding it drives.
//!
//! # Design
//! The event is a `oneshot` channel: the trigger can fire at most once, and
//! dropping it unfired models navigation away before the page was ready.
//! The image fetch starts only after the event, and a failed fetch leaves the
//! element exactly as it was.

use std::future::Future;

use posts_core::{ApiError, BinaryPayload, ObjectUrl, Page};
use tokio::sync::oneshot;

use crate::error::AppError;

/// Fires the content-loaded event. Consumed on use.
#[derive(Debug)]
pub struct ContentLoadedTrigger {
    tx: oneshot::Sender<()>,
}

/// The subscriber side of the content-loaded event.
#[derive(Debug)]
pub struct ContentLoaded {
    rx: oneshot::Receiver<()>,
}

pub fn content_loaded() -> (ContentLoadedTrigger, ContentLoaded) {
    let (tx, rx) = oneshot::channel();
    (ContentLoadedTrigger { tx }, ContentLoaded { rx })
}

impl ContentLoadedTrigger {
    pub fn fire(self) {
        // The subscriber may already be gone; nothing to deliver then.
        let _ = self.tx.send(());
    }
}

impl ContentLoaded {
    pub async fn wait(self) -> Result<(), AppError> {
        self.rx.await.map_err(|_| AppError::PageUnloaded)
    }
}

/// Wait for the page to be ready, fetch the image, then bind it to `selector`.
pub async fn bind_image_on_ready<F, Fut>(
    ready: ContentLoaded,
    page: &mut Page,
    selector: &str,
    fetch: F,
) -> Result<ObjectUrl, AppError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<BinaryPayload, ApiError>>,
{
    ready.wait().await?;
    let payload = fetch().await?;
    let url = page.bind_image(selector, payload)?;
    tracing::info!(%selector, url = %url, "image bound on page load");
    Ok(url)
}
