//! Viewer and catalog list state, independent of the GUI toolkit

pub mod catalog;
pub mod state;

pub use catalog::CatalogList;
pub use state::{relative_offset, Notice, NoticeKind, Viewer, ViewerEffect};
