//! HTML page composition. Every function here is pure: data in, markup out.

pub mod chapter;
pub mod chapters;
pub mod contact;
pub mod dashboard;
pub mod home;
pub mod layout;
pub mod not_found;
pub mod prezi;
pub mod preview;
pub mod resources;
pub mod team;
