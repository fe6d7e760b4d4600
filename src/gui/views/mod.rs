//! GUI views

pub mod settings_view;
pub mod viewer_view;

// Re-export for convenience
pub use settings_view::settings_view;
pub use viewer_view::viewer_view;
