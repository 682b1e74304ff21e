//! `aacbook chapters`.

use std::fmt::Write as _;

use crate::catalog::chapters::{self, ALL_AREAS, Chapter};
use crate::cli::args::{ChaptersArgs, OutputFormat};
use crate::error::BookError;

/// Lists the chapters matching `--area` and `--query`.
///
/// # Errors
///
/// Returns a usage error for an unknown area and a JSON error if
/// serialization fails.
pub fn run(args: &ChaptersArgs) -> Result<(), BookError> {
    if args.area != ALL_AREAS && !chapters::areas().contains(&args.area.as_str()) {
        return Err(BookError::Usage(format!(
            "unknown area '{}' (known: {})",
            args.area,
            chapters::areas().join(", ")
        )));
    }
    let matching = chapters::filter(&args.query, &args.area);
    match args.format {
        OutputFormat::Human => print!("{}", format_table(&matching)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&matching)?),
    }
    Ok(())
}

/// Plain-text table, one chapter per line.
#[must_use]
pub fn format_table(list: &[&Chapter]) -> String {
    let title_width = list.iter().map(|c| c.title.chars().count()).max().unwrap_or(0);
    let mut out = String::new();
    for chapter in list {
        let pad = title_width - chapter.title.chars().count();
        let _ = writeln!(
            out,
            "{}  {}{}  {:<10}  {}",
            chapter.id,
            chapter.title,
            " ".repeat(pad),
            chapter.status.label(),
            chapter.area
        );
    }
    let _ = writeln!(out, "{} of {} chapters", list.len(), chapters::all().len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_every_chapter() {
        let all: Vec<&Chapter> = chapters::all().iter().collect();
        let table = format_table(&all);
        assert_eq!(table.lines().count(), all.len() + 1);
        assert!(table.starts_with("01  "));
        assert!(table.ends_with("27 of 27 chapters\n"));
    }

    #[test]
    fn empty_table_has_summary_only() {
        assert_eq!(format_table(&[]), "0 of 27 chapters\n");
    }

    #[test]
    fn unknown_area_is_a_usage_error() {
        let args = ChaptersArgs {
            area: "Astrologi".to_string(),
            query: String::new(),
            format: OutputFormat::Human,
        };
        assert!(matches!(run(&args), Err(BookError::Usage(_))));
    }
}
