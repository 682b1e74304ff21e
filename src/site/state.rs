//! Shared server state.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::config::Settings;
use crate::content::{ChapterLoader, DocSource, open_source};
use crate::deck::{Deck, KeyBus, load_deck_or_empty};
use crate::deck::keys::DEFAULT_KEY_BUFFER;
use crate::error::ContentError;
use crate::markdown::RenderOptions;

/// Everything request handlers share. Immutable apart from the key bus.
#[derive(Debug)]
pub struct AppState {
    pub loader: ChapterLoader,
    pub deck: Deck,
    pub keys: KeyBus,
    /// Simulated contact submission delay.
    pub submit_delay: Duration,
}

impl AppState {
    /// Assembles state from its parts.
    #[must_use]
    pub fn new(
        source: Arc<dyn DocSource>,
        render: RenderOptions,
        placeholders: bool,
        deck: Deck,
        keys: KeyBus,
        submit_delay: Duration,
    ) -> Self {
        Self {
            loader: ChapterLoader::new(source, render, placeholders),
            deck,
            keys,
            submit_delay,
        }
    }

    /// Builds state from resolved settings. The slide deck is loaded here,
    /// once; key listeners end when `cancel` fires.
    ///
    /// # Errors
    ///
    /// Returns a [`ContentError`] if the document source cannot be opened.
    pub fn from_settings(
        settings: &Settings,
        cancel: &CancellationToken,
    ) -> Result<Self, ContentError> {
        let source = open_source(&settings.docs, settings.fetch_timeout)?;
        let render = RenderOptions {
            asset_base: settings.asset_base.clone(),
            ..RenderOptions::default()
        };
        Ok(Self::new(
            source,
            render,
            settings.placeholders,
            load_deck_or_empty(settings.slides.as_deref()),
            KeyBus::with_shutdown(DEFAULT_KEY_BUFFER, cancel.child_token()),
            settings.submit_delay,
        ))
    }
}
