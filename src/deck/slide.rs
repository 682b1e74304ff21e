//! Slide descriptors and deck loading.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::DeckError;

/// One positioned node on the presentation canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub id: String,
    pub title: String,
    /// Link to the slide's markdown.
    pub md_path: String,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

/// An immutable, shareable list of slides.
pub type Deck = Arc<[Slide]>;

/// Parses a slides JSON array.
///
/// # Errors
///
/// Returns [`DeckError::Parse`] for malformed JSON and
/// [`DeckError::DuplicateId`] if two slides share an id.
pub fn parse_deck(json: &str) -> Result<Deck, DeckError> {
    let slides: Vec<Slide> = serde_json::from_str(json)?;
    let mut seen = HashSet::with_capacity(slides.len());
    for slide in &slides {
        if !seen.insert(slide.id.as_str()) {
            return Err(DeckError::DuplicateId(slide.id.clone()));
        }
    }
    Ok(slides.into())
}

/// Reads and parses a slides file.
///
/// # Errors
///
/// Returns [`DeckError::Read`] if the file cannot be read, or any error
/// from [`parse_deck`].
pub fn load_deck(path: &Path) -> Result<Deck, DeckError> {
    let raw = std::fs::read_to_string(path).map_err(|source| DeckError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_deck(&raw)
}

/// Loads the deck for the server, falling back to an empty deck.
///
/// A missing or broken slides file is not fatal: the canvas renders
/// empty and the problem is logged.
#[must_use]
pub fn load_deck_or_empty(path: Option<&Path>) -> Deck {
    let Some(path) = path else {
        info!("no slides file configured, deck is empty");
        return Vec::new().into();
    };
    match load_deck(path) {
        Ok(deck) => {
            info!(path = %path.display(), slides = deck.len(), "slides loaded");
            deck
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to load slides, deck is empty");
            Vec::new().into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"id": "intro", "title": "Introduktion", "mdPath": "/docs/01_inledning.md", "x": 0, "y": 0},
        {"id": "adr", "title": "ADR", "mdPath": "/docs/04_adr.md", "x": 600, "y": 120, "zoom": 1.5, "parentId": "intro"},
        {"id": "moln", "title": "Moln", "mdPath": "/docs/06_molnarkitektur.md", "x": -300, "y": 480, "image": "images/moln.png"}
    ]"#;

    #[test]
    fn parses_camel_case_fields() {
        let deck = parse_deck(SAMPLE).unwrap();
        assert_eq!(deck.len(), 3);
        assert_eq!(deck[1].md_path, "/docs/04_adr.md");
        assert_eq!(deck[1].zoom, Some(1.5));
        assert_eq!(deck[1].parent_id.as_deref(), Some("intro"));
        assert_eq!(deck[2].image.as_deref(), Some("images/moln.png"));
        assert_eq!(deck[0].zoom, None);
    }

    #[test]
    fn serializes_back_to_camel_case() {
        let deck = parse_deck(SAMPLE).unwrap();
        let json = serde_json::to_string(&deck[1]).unwrap();
        assert!(json.contains("\"mdPath\""));
        assert!(json.contains("\"parentId\""));
        assert!(!json.contains("\"image\""));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = r#"[
            {"id": "a", "title": "A", "mdPath": "a.md", "x": 0, "y": 0},
            {"id": "a", "title": "B", "mdPath": "b.md", "x": 1, "y": 1}
        ]"#;
        assert!(matches!(parse_deck(json), Err(DeckError::DuplicateId(id)) if id == "a"));
    }

    #[test]
    fn rejects_missing_fields() {
        let json = r#"[{"id": "a", "title": "A", "x": 0, "y": 0}]"#;
        assert!(matches!(parse_deck(json), Err(DeckError::Parse(_))));
    }

    #[test]
    fn missing_file_yields_empty_deck() {
        let tmp = tempfile::tempdir().unwrap();
        let deck = load_deck_or_empty(Some(&tmp.path().join("slides.json")));
        assert!(deck.is_empty());
        assert!(load_deck_or_empty(None).is_empty());
    }

    #[test]
    fn load_deck_reads_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("slides.json");
        std::fs::write(&path, SAMPLE).unwrap();
        assert_eq!(load_deck(&path).unwrap().len(), 3);
        assert_eq!(load_deck_or_empty(Some(&path)).len(), 3);
    }
}
