//! CLI command dispatch and handlers.
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod chapters;
pub mod completions;
pub mod deck;
pub mod render;
pub mod serve;
pub mod version;

use std::path::PathBuf;

use tokio_util::sync::CancellationToken;

use crate::cli::args::{Cli, Commands, DeckSubcommand, DocsArgs};
use crate::config::DocsLocation;
use crate::config::loader::DEFAULT_DOCS_DIR;
use crate::error::BookError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// `cancel` fires on SIGINT/SIGTERM; only long-running commands watch it.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub async fn dispatch(cli: Cli, cancel: CancellationToken) -> Result<(), BookError> {
    match cli.command {
        Commands::Serve(args) => serve::run(&args, cancel).await,
        Commands::Chapters(args) => chapters::run(&args),
        Commands::Render(args) => render::run(&args).await,
        Commands::Deck(cmd) => match cmd.subcommand {
            DeckSubcommand::Check(args) => deck::check(&args),
        },
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(())
        }
        Commands::Version(args) => {
            version::run(&args);
            Ok(())
        }
    }
}

/// Doc source picked by `--docs-dir` / `--docs-url`, defaulting to `docs/`.
#[must_use]
pub fn docs_location(args: &DocsArgs) -> DocsLocation {
    match (&args.docs_url, &args.docs_dir) {
        (Some(url), _) => DocsLocation::Url(url.clone()),
        (None, Some(dir)) => DocsLocation::Dir(dir.clone()),
        (None, None) => DocsLocation::Dir(PathBuf::from(DEFAULT_DOCS_DIR)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn docs_location_defaults_to_docs_dir() {
        assert_eq!(
            docs_location(&DocsArgs::default()),
            DocsLocation::Dir(PathBuf::from("docs"))
        );
    }

    #[test]
    fn docs_location_prefers_url() {
        let args = DocsArgs {
            docs_dir: None,
            docs_url: Some("http://localhost:8000".to_string()),
        };
        assert_eq!(
            docs_location(&args),
            DocsLocation::Url("http://localhost:8000".to_string())
        );
    }
}
