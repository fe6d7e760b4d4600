//! GUI components

pub mod nav_controls;
pub mod notice_banner;
pub mod player_controls;
pub mod video_card;
pub mod video_list;

// Re-export for convenience
pub use nav_controls::nav_controls;
pub use notice_banner::notice_banner;
pub use player_controls::player_controls;
pub use video_card::video_card;
pub use video_list::video_list;
