//! `aacbook render`.

use std::path::Path;

use tracing::info;

use crate::catalog::chapters;
use crate::cli::args::RenderArgs;
use crate::cli::commands::docs_location;
use crate::content::{DEFAULT_FETCH_TIMEOUT, open_source};
use crate::error::BookError;
use crate::markdown::{self, RenderOptions};

/// Fetches one chapter and prints it as an HTML fragment.
///
/// Unlike the site, no placeholder stands in for a failed fetch.
///
/// # Errors
///
/// Returns a usage error for an unknown chapter id, a content error if
/// the markdown cannot be fetched, and an I/O error if `--output` cannot
/// be written.
pub async fn run(args: &RenderArgs) -> Result<(), BookError> {
    let Some((_, chapter)) = chapters::find(&args.chapter_id) else {
        let hint = chapters::suggest(&args.chapter_id)
            .map(|id| format!(" (did you mean '{id}'?)"))
            .unwrap_or_default();
        return Err(BookError::Usage(format!(
            "unknown chapter '{}'{hint}",
            args.chapter_id
        )));
    };

    let location = docs_location(&args.docs);
    let source = open_source(
        &location,
        args.fetch_timeout.unwrap_or(DEFAULT_FETCH_TIMEOUT),
    )?;
    let text = source.fetch_text(chapter.filename).await?;
    let html = markdown::render(&text, &RenderOptions::default());
    info!(chapter = chapter.id, bytes = html.len(), "chapter rendered");

    match &args.output {
        Some(path) => write_output(path, &html)?,
        None => print!("{html}"),
    }
    Ok(())
}

fn write_output(path: &Path, html: &str) -> Result<(), BookError> {
    std::fs::write(path, html)?;
    info!(path = %path.display(), "HTML written");
    Ok(())
}
