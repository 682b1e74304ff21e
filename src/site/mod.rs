//! The book website.
//!
//! An axum server that renders every page on the server. Chapter pages
//! load their markdown per request through the [`ChapterLoader`]; the
//! slide canvas streams viewport transitions over Server-Sent Events.
//!
//! [`ChapterLoader`]: crate::content::ChapterLoader

pub mod contact;
pub mod handlers;
pub mod pages;
pub mod server;
pub mod state;

pub use server::{SiteServer, build_router, parse_bind_addr};
pub use state::AppState;
