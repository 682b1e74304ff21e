//! Site configuration.
//!
//! An optional YAML file ([`SiteConfig`]) is layered under command-line
//! flags and their `AACBOOK_*` environment fallbacks, then validated into
//! [`Settings`].

pub mod loader;
pub mod schema;

pub use loader::{
    ConfigLimits, DocsLocation, LoadResult, Overrides, Settings, load_file, parse_config,
    parse_duration_arg, resolve,
};
pub use schema::SiteConfig;
