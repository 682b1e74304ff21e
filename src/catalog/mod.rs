//! Static book data.
//!
//! Everything here is hardcoded and immutable for the lifetime of the
//! process: the chapter list, the agent team, downloadable resources and
//! the short lists shown on the front page.

pub mod chapters;
pub mod overview;
pub mod resources;
pub mod team;

pub use chapters::{ALL_AREAS, CHAPTERS, Chapter, ChapterStatus};
pub use overview::{INQUIRY_TYPES, InquiryType};
pub use resources::{RESOURCES, Resource, ResourceKind};
pub use team::{ROLES, Role};
