//! `aacbook serve`.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::cli::args::ServeArgs;
use crate::config::{ConfigLimits, Overrides, resolve};
use crate::error::BookError;
use crate::observability::init_metrics;
use crate::site::{AppState, SiteServer};

/// Serves the site until `cancel` fires or the server stops on its own.
///
/// # Errors
///
/// Returns a config error for invalid settings, a content error if the
/// doc source cannot be opened, and a server error if binding or
/// serving fails.
pub async fn run(args: &ServeArgs, cancel: CancellationToken) -> Result<(), BookError> {
    let overrides = Overrides {
        bind: args.bind.clone(),
        docs_dir: args.docs.docs_dir.clone(),
        docs_url: args.docs.docs_url.clone(),
        slides: args.slides.clone(),
        metrics_port: args.metrics_port,
        submit_delay: args.submit_delay,
        fetch_timeout: args.fetch_timeout,
    };
    let loaded = resolve(args.config.as_deref(), &overrides, &ConfigLimits::default())?;
    for issue in &loaded.warnings {
        warn!(path = %issue.path, "{}", issue.message);
    }
    let settings = loaded.settings;

    if let Some(port) = settings.metrics_port {
        init_metrics(Some(port))?;
        info!(port, "Prometheus metrics endpoint started");
    }

    let state = Arc::new(AppState::from_settings(&settings, &cancel)?);
    info!(
        source = %state.loader.source().describe(),
        slides = state.deck.len(),
        "site state ready"
    );

    let server = SiteServer::bind(&settings.bind, state, cancel).await?;
    server.run().await?;
    Ok(())
}
