//! Headless storefront runner: fetch the catalog once and print the views.

use std::sync::Arc;

use anyhow::Context;
use storefront_session::{BrowseSession, HttpCatalog, SessionConfig, view};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = SessionConfig::from_env().context("invalid storefront configuration")?;
    storefront_observability::logging::init(config.log_format);

    tracing::info!(catalog_url = %config.catalog_url, "starting browse session");

    let mut session = BrowseSession::start(Arc::new(HttpCatalog::from_config(&config)));

    // Ctrl-C tears the session down, like unmounting the view.
    let handle = session.handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("interrupted; closing browse session");
            handle.close();
        }
    });

    let views = session.settle().await;
    if session.is_closed() {
        return Ok(());
    }

    print!("{}", view::render_text(&views));
    Ok(())
}
