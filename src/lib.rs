//! `aacbook` - web reader and slide-deck viewer for the book
//! "Arkitektur som kod".
//!
//! The library serves the book's pages from a hardcoded chapter catalogue,
//! renders chapter markdown fetched from a doc source, and drives a
//! zoomable slide canvas over server-sent events.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod content;
pub mod deck;
pub mod error;
pub mod markdown;
pub mod observability;
pub mod site;
