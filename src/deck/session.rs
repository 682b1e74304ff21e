//! Slide-deck navigation state.
//!
//! A [`DeckSession`] tracks the active slide index of one viewer. The
//! index only ever moves one step at a time and is clamped to
//! `[0, len - 1]`; an empty deck has no active slide and ignores input.

use super::keys::Key;
use super::slide::{Deck, Slide};
use super::viewport::ViewportTransition;

/// Navigation state for one viewer of a deck.
#[derive(Debug, Clone)]
pub struct DeckSession {
    deck: Deck,
    index: usize,
}

impl DeckSession {
    /// Starts a session on the slide whose id is `query_id`.
    ///
    /// Falls back to the first slide when `query_id` is `None` or matches
    /// no slide.
    #[must_use]
    pub fn start(deck: Deck, query_id: Option<&str>) -> Self {
        let index = query_id
            .and_then(|id| deck.iter().position(|slide| slide.id == id))
            .unwrap_or(0);
        Self { deck, index }
    }

    /// The deck this session navigates.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Index of the active slide. Always 0 for an empty deck.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The active slide, if the deck is not empty.
    #[must_use]
    pub fn current(&self) -> Option<&Slide> {
        self.deck.get(self.index)
    }

    /// Id of the active slide.
    #[must_use]
    pub fn active_id(&self) -> Option<&str> {
        self.current().map(|slide| slide.id.as_str())
    }

    /// The slide before the active one, if any.
    #[must_use]
    pub fn previous_slide(&self) -> Option<&Slide> {
        self.index.checked_sub(1).and_then(|i| self.deck.get(i))
    }

    /// The slide after the active one, if any.
    #[must_use]
    pub fn next_slide(&self) -> Option<&Slide> {
        self.deck.get(self.index + 1)
    }

    /// Transition that brings the starting slide into view.
    #[must_use]
    pub fn initial_transition(&self) -> Option<ViewportTransition> {
        self.current()
            .map(|slide| ViewportTransition::to(self.index, slide))
    }

    /// Moves forward one slide, stopping at the last one.
    ///
    /// Returns the transition to animate, or `None` for an empty deck.
    pub fn advance(&mut self) -> Option<ViewportTransition> {
        let last = self.deck.len().checked_sub(1)?;
        self.index = (self.index + 1).min(last);
        self.initial_transition()
    }

    /// Moves back one slide, stopping at the first one.
    ///
    /// Returns the transition to animate, or `None` for an empty deck.
    pub fn retreat(&mut self) -> Option<ViewportTransition> {
        if self.deck.is_empty() {
            return None;
        }
        self.index = self.index.saturating_sub(1);
        self.initial_transition()
    }

    /// Applies a key press.
    ///
    /// `ArrowRight` advances, `ArrowLeft` retreats, anything else is
    /// ignored. The transition is returned even when the index is already
    /// at a bound, so the viewport re-centers on the active slide.
    pub fn handle_key(&mut self, key: &Key) -> Option<ViewportTransition> {
        match key {
            Key::ArrowRight => self.advance(),
            Key::ArrowLeft => self.retreat(),
            Key::Other(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn deck(ids: &[&str]) -> Deck {
        ids.iter()
            .enumerate()
            .map(|(i, id)| Slide {
                id: (*id).to_string(),
                title: id.to_uppercase(),
                md_path: format!("{id}.md"),
                x: f64::from(u32::try_from(i).unwrap()) * 400.0,
                y: 0.0,
                zoom: None,
                image: None,
                parent_id: None,
            })
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn starts_on_query_slide() {
        let session = DeckSession::start(deck(&["a", "b", "c"]), Some("c"));
        assert_eq!(session.index(), 2);
        assert_eq!(session.active_id(), Some("c"));
    }

    #[test]
    fn unknown_or_missing_query_starts_at_zero() {
        assert_eq!(DeckSession::start(deck(&["a", "b"]), Some("zz")).index(), 0);
        assert_eq!(DeckSession::start(deck(&["a", "b"]), None).index(), 0);
    }

    #[test]
    fn arrows_clamp_at_both_ends() {
        let mut session = DeckSession::start(deck(&["a", "b", "c"]), None);
        assert_eq!(session.handle_key(&Key::ArrowLeft).unwrap().index, 0);
        assert_eq!(session.handle_key(&Key::ArrowRight).unwrap().index, 1);
        assert_eq!(session.handle_key(&Key::ArrowRight).unwrap().index, 2);
        let t = session.handle_key(&Key::ArrowRight).unwrap();
        assert_eq!(t.index, 2);
        assert_eq!(t.slide_id, "c");
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut session = DeckSession::start(deck(&["a", "b"]), None);
        assert!(session.handle_key(&Key::Other("Enter".to_string())).is_none());
        assert_eq!(session.index(), 0);
    }

    #[test]
    fn empty_deck_ignores_everything() {
        let mut session = DeckSession::start(deck(&[]), Some("a"));
        assert_eq!(session.index(), 0);
        assert!(session.current().is_none());
        assert!(session.initial_transition().is_none());
        assert!(session.handle_key(&Key::ArrowRight).is_none());
        assert!(session.handle_key(&Key::ArrowLeft).is_none());
        assert_eq!(session.index(), 0);
    }

    #[test]
    fn neighbours() {
        let session = DeckSession::start(deck(&["a", "b", "c"]), Some("b"));
        assert_eq!(session.previous_slide().unwrap().id, "a");
        assert_eq!(session.next_slide().unwrap().id, "c");
        let first = DeckSession::start(deck(&["a", "b"]), None);
        assert!(first.previous_slide().is_none());
    }

    fn key_strategy() -> impl Strategy<Value = Key> {
        prop_oneof![
            Just(Key::ArrowLeft),
            Just(Key::ArrowRight),
            Just(Key::Other("Space".to_string())),
        ]
    }

    proptest! {
        #[test]
        fn index_stays_in_bounds(len in 1usize..20, keys in prop::collection::vec(key_strategy(), 0..100)) {
            let ids: Vec<String> = (0..len).map(|i| format!("s{i}")).collect();
            let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
            let mut session = DeckSession::start(deck(&refs), None);
            for key in &keys {
                let before = session.index();
                let transition = session.handle_key(key);
                prop_assert!(session.index() < len);
                prop_assert!(session.index().abs_diff(before) <= 1);
                if let Some(t) = transition {
                    prop_assert_eq!(t.index, session.index());
                }
            }
        }

        #[test]
        fn start_matches_query(len in 1usize..20, pick in 0usize..40) {
            let ids: Vec<String> = (0..len).map(|i| format!("s{i}")).collect();
            let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
            let query = format!("s{pick}");
            let session = DeckSession::start(deck(&refs), Some(&query));
            let expected = if pick < len { pick } else { 0 };
            prop_assert_eq!(session.index(), expected);
        }
    }
}
