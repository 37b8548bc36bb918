use clap::Parser;
use posts_app::config::Cli;
use posts_app::{ops, page_load, UreqTransport, IMAGE_SELECTOR};
use posts_core::{show_records, Page};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let client = cli.client();
    let transport = UreqTransport::new();

    if cli.list {
        match ops::fetch_list(&client, &transport).await {
            Ok(records) => {
                show_records(&records);
            }
            Err(e) => tracing::error!(error = %e, "unhandled failure in list fetch"),
        }
    }

    if cli.submit {
        if let Err(e) = ops::submit_item(&client, &transport).await {
            tracing::error!(error = %e, "unhandled failure in submit");
        }
    }

    let mut page = Page::new().with_image(IMAGE_SELECTOR.trim_start_matches('#'));
    let (trigger, ready) = page_load::content_loaded();
    trigger.fire();

    let bound = page_load::bind_image_on_ready(ready, &mut page, IMAGE_SELECTOR, || {
        ops::fetch_image_blob(&client, &transport)
    })
    .await;

    match bound {
        Ok(url) => {
            let bytes = page.object_urls().resolve(&url).map_or(0, |p| p.len());
            tracing::info!(url = %url, bytes, "page ready");
        }
        Err(e) => tracing::error!(error = %e, "unhandled failure in page load handler"),
    }

    page.unload();
}
