//! `aacbook deck`.

use serde_json::json;

use crate::cli::args::{DeckCheckArgs, OutputFormat};
use crate::deck::{DeckSession, load_deck};
use crate::error::BookError;

/// Validates a slides file and reports where a session would start.
///
/// # Errors
///
/// Returns a deck error if the file cannot be read or parsed, or holds
/// duplicate ids.
pub fn check(args: &DeckCheckArgs) -> Result<(), BookError> {
    let deck = load_deck(&args.file)?;
    let session = DeckSession::start(deck, args.id.as_deref());
    let unknown_id = args
        .id
        .as_deref()
        .filter(|id| session.active_id() != Some(*id));

    match args.format {
        OutputFormat::Human => {
            println!("{}: {} slides", args.file.display(), session.deck().len());
            match session.current() {
                Some(slide) => println!(
                    "start: {} \"{}\" (index {})",
                    slide.id,
                    slide.title,
                    session.index()
                ),
                None => println!("start: none (empty deck)"),
            }
            if let Some(id) = unknown_id {
                println!("note: no slide with id '{id}', starting at the first slide");
            }
        }
        OutputFormat::Json => {
            let report = json!({
                "file": args.file.display().to_string(),
                "slides": session.deck().len(),
                "start_index": session.index(),
                "start_id": session.active_id(),
                "unknown_id": unknown_id,
            });
            println!("{report}");
        }
    }
    Ok(())
}
