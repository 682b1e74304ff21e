//! Chapter content: where markdown comes from and how a chapter is loaded.

pub mod loader;
pub mod source;

pub use loader::{
    ChapterContent, ChapterLoader, LOAD_ERROR_MESSAGE, LoadState, NOT_FOUND_MESSAGE,
    placeholder_markdown,
};
pub use source::{
    DEFAULT_FETCH_TIMEOUT, DirDocSource, DocSource, HttpDocSource, open_source,
    validate_doc_path,
};
