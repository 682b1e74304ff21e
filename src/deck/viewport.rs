//! Canvas viewport math.

use std::time::Duration;

use serde::Serialize;

use super::slide::Slide;

/// Horizontal offset that places a slide's origin inside the visible area.
pub const CENTER_OFFSET_X: f64 = 240.0;

/// Vertical offset that places a slide's origin inside the visible area.
pub const CENTER_OFFSET_Y: f64 = 160.0;

/// How long a viewport animation lasts.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(650);

/// Pan and zoom of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
}

impl Viewport {
    /// Viewport that brings `slide` into focus at its own zoom (default 1).
    #[must_use]
    pub fn focused_on(slide: &Slide) -> Self {
        Self {
            x: -slide.x + CENTER_OFFSET_X,
            y: -slide.y + CENTER_OFFSET_Y,
            zoom: slide.zoom.unwrap_or(1.0),
        }
    }

    /// CSS `transform` value for the canvas layer.
    #[must_use]
    pub fn css_transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.x, self.y, self.zoom
        )
    }
}

/// An animated move of the viewport to a slide.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewportTransition {
    /// Index of the slide now active.
    pub index: usize,
    /// Id of the slide now active.
    pub slide_id: String,
    pub target: Viewport,
    pub duration_ms: u64,
}

impl ViewportTransition {
    /// Transition to the slide at `index`.
    #[must_use]
    pub fn to(index: usize, slide: &Slide) -> Self {
        Self {
            index,
            slide_id: slide.id.clone(),
            target: Viewport::focused_on(slide),
            duration_ms: u64::try_from(TRANSITION_DURATION.as_millis()).unwrap_or(u64::MAX),
        }
    }
}
