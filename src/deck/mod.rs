//! Slide-deck viewer ("prezi").
//!
//! Slides are loaded once from `slides.json` and shared immutably. Each
//! open canvas gets its own [`DeckSession`] and [`KeyListener`]; key
//! presses published on the [`KeyBus`] move every session, and each move
//! yields a [`ViewportTransition`] for the browser to animate.

pub mod keys;
pub mod session;
pub mod slide;
pub mod viewport;

pub use keys::{Key, KeyBus, KeyListener};
pub use session::DeckSession;
pub use slide::{Deck, Slide, load_deck, load_deck_or_empty, parse_deck};
pub use viewport::{TRANSITION_DURATION, Viewport, ViewportTransition};
